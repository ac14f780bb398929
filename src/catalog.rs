//! Localized form catalog: labels, placeholders, options, collaboration
//! types, messages, and the static contact-info content
//!
//! Everything here is a pure lookup keyed by [`Locale`]. Callers
//! re-evaluate on every draw, so switching the locale takes effect
//! immediately; nothing is cached across a switch.

use crate::notify::ToastKind;
use crate::state::{Field, ValidationError};

/// Display language for the interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl Locale {
    pub fn toggle(&mut self) {
        *self = match self {
            Locale::En => Locale::Zh,
            Locale::Zh => Locale::En,
        };
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Locale::En),
            "zh" => Some(Locale::Zh),
            _ => None,
        }
    }
}

/// Presentation config for one form field.
#[derive(Debug, Clone, Copy)]
pub struct FieldConfig {
    pub label: &'static str,
    pub placeholder: &'static str,
    /// Selectable values; non-empty only for `budget` and `timeline`.
    pub options: &'static [&'static str],
}

const BUDGET_OPTIONS_EN: &[&str] = &[
    "Under $5,000",
    "$5,000 – $20,000",
    "$20,000 – $50,000",
    "Over $50,000",
    "To be discussed",
];

const BUDGET_OPTIONS_ZH: &[&str] = &["1万元以内", "1万–5万元", "5万–20万元", "20万元以上", "面议"];

const TIMELINE_OPTIONS_EN: &[&str] = &[
    "Within 1 month",
    "1 – 3 months",
    "3 – 6 months",
    "Over 6 months",
    "Flexible",
];

const TIMELINE_OPTIONS_ZH: &[&str] = &["1个月内", "1–3个月", "3–6个月", "6个月以上", "灵活安排"];

/// Label, placeholder and options for a field in the given locale.
pub fn field_config(locale: Locale, field: Field) -> FieldConfig {
    match (locale, field) {
        (Locale::En, Field::Name) => FieldConfig {
            label: "Name",
            placeholder: "Your name",
            options: &[],
        },
        (Locale::En, Field::Email) => FieldConfig {
            label: "Email",
            placeholder: "you@example.com",
            options: &[],
        },
        (Locale::En, Field::Subject) => FieldConfig {
            label: "Subject",
            placeholder: "What is this about?",
            options: &[],
        },
        (Locale::En, Field::Message) => FieldConfig {
            label: "Message",
            placeholder: "Tell me about your project or question…",
            options: &[],
        },
        (Locale::En, Field::CollaborationType) => FieldConfig {
            label: "Collaboration Type",
            placeholder: "",
            options: &[],
        },
        (Locale::En, Field::Budget) => FieldConfig {
            label: "Budget",
            placeholder: "Select a range",
            options: BUDGET_OPTIONS_EN,
        },
        (Locale::En, Field::Timeline) => FieldConfig {
            label: "Timeline",
            placeholder: "Select a timeframe",
            options: TIMELINE_OPTIONS_EN,
        },
        (Locale::Zh, Field::Name) => FieldConfig {
            label: "姓名",
            placeholder: "您的姓名",
            options: &[],
        },
        (Locale::Zh, Field::Email) => FieldConfig {
            label: "邮箱",
            placeholder: "you@example.com",
            options: &[],
        },
        (Locale::Zh, Field::Subject) => FieldConfig {
            label: "主题",
            placeholder: "想聊些什么？",
            options: &[],
        },
        (Locale::Zh, Field::Message) => FieldConfig {
            label: "留言内容",
            placeholder: "介绍一下您的项目或问题…",
            options: &[],
        },
        (Locale::Zh, Field::CollaborationType) => FieldConfig {
            label: "合作类型",
            placeholder: "",
            options: &[],
        },
        (Locale::Zh, Field::Budget) => FieldConfig {
            label: "预算",
            placeholder: "选择预算范围",
            options: BUDGET_OPTIONS_ZH,
        },
        (Locale::Zh, Field::Timeline) => FieldConfig {
            label: "时间周期",
            placeholder: "选择时间安排",
            options: TIMELINE_OPTIONS_ZH,
        },
    }
}

/// A user-selectable collaboration category. Only `id` is persisted into
/// the form data; ids are stable across locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollaborationType {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

const COLLABORATION_TYPES_EN: &[CollaborationType] = &[
    CollaborationType {
        id: "research",
        title: "Research Collaboration",
        description: "Joint projects, paper co-authorship, grant proposals",
        icon: "🎓",
    },
    CollaborationType {
        id: "development",
        title: "Technical Development",
        description: "Prototyping, software development, ML systems consulting",
        icon: "💻",
    },
    CollaborationType {
        id: "consulting",
        title: "Consulting",
        description: "Industry consulting, technical review, due diligence",
        icon: "💼",
    },
    CollaborationType {
        id: "exchange",
        title: "Academic Exchange",
        description: "Talks, seminars, visits, student supervision",
        icon: "👥",
    },
];

const COLLABORATION_TYPES_ZH: &[CollaborationType] = &[
    CollaborationType {
        id: "research",
        title: "学术研究合作",
        description: "联合课题、论文合著、基金申请",
        icon: "🎓",
    },
    CollaborationType {
        id: "development",
        title: "技术开发",
        description: "原型开发、软件实现、机器学习系统咨询",
        icon: "💻",
    },
    CollaborationType {
        id: "consulting",
        title: "咨询服务",
        description: "行业咨询、技术评审、尽职调查",
        icon: "💼",
    },
    CollaborationType {
        id: "exchange",
        title: "学术交流",
        description: "报告讲座、访问交流、学生指导",
        icon: "👥",
    },
];

pub fn collaboration_types(locale: Locale) -> &'static [CollaborationType] {
    match locale {
        Locale::En => COLLABORATION_TYPES_EN,
        Locale::Zh => COLLABORATION_TYPES_ZH,
    }
}

/// Inline message for a field-level validation problem.
pub fn validation_message(locale: Locale, error: ValidationError) -> &'static str {
    match (locale, error) {
        (Locale::En, ValidationError::Required) => "This field is required",
        (Locale::En, ValidationError::InvalidFormat) => "Please enter a valid email address",
        (Locale::Zh, ValidationError::Required) => "此项为必填",
        (Locale::Zh, ValidationError::InvalidFormat) => "请输入有效的邮箱地址",
    }
}

/// Text for a transient toast.
pub fn toast_message(locale: Locale, kind: ToastKind) -> &'static str {
    match (locale, kind) {
        (Locale::En, ToastKind::ValidationBlocked) => {
            "Please fix the highlighted fields before sending"
        }
        (Locale::Zh, ToastKind::ValidationBlocked) => "请先修正表单中的错误再发送",
    }
}

/// Fixed interface strings.
#[derive(Debug, Clone, Copy)]
pub enum UiText {
    InfoHeading,
    SocialHeading,
    FormHeading,
    CollaborationHeading,
    SendButton,
    SendingLabel,
    OptionalHint,
}

pub fn ui_text(locale: Locale, text: UiText) -> &'static str {
    match (locale, text) {
        (Locale::En, UiText::InfoHeading) => "Contact",
        (Locale::En, UiText::SocialHeading) => "Academic Profiles",
        (Locale::En, UiText::FormHeading) => "Send a Message",
        (Locale::En, UiText::CollaborationHeading) => "Collaboration Type",
        (Locale::En, UiText::SendButton) => "Send Message",
        (Locale::En, UiText::SendingLabel) => "Sending…",
        (Locale::En, UiText::OptionalHint) => "optional",
        (Locale::Zh, UiText::InfoHeading) => "联系方式",
        (Locale::Zh, UiText::SocialHeading) => "学术主页",
        (Locale::Zh, UiText::FormHeading) => "发送消息",
        (Locale::Zh, UiText::CollaborationHeading) => "合作类型",
        (Locale::Zh, UiText::SendButton) => "发送消息",
        (Locale::Zh, UiText::SendingLabel) => "发送中…",
        (Locale::Zh, UiText::OptionalHint) => "选填",
    }
}

/// Static contact details shown in the info panel.
#[derive(Debug, Clone, Copy)]
pub struct ContactInfo {
    pub email: &'static str,
    pub location: &'static str,
    pub affiliation: &'static str,
    pub office: &'static str,
}

pub fn contact_info(locale: Locale) -> ContactInfo {
    match locale {
        Locale::En => ContactInfo {
            email: "contact@zhaoyangmou.dev",
            location: "Beijing, China",
            affiliation: "Dept. of Computer Science",
            office: "Office 4-302",
        },
        Locale::Zh => ContactInfo {
            email: "contact@zhaoyangmou.dev",
            location: "中国 北京",
            affiliation: "计算机科学系",
            office: "4号楼302室",
        },
    }
}

/// An external profile link.
#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

const SOCIAL_LINKS_EN: &[SocialLink] = &[
    SocialLink {
        name: "GitHub",
        url: "https://github.com/zhaoyangmou",
    },
    SocialLink {
        name: "LinkedIn",
        url: "https://linkedin.com/in/zhaoyangmou",
    },
    SocialLink {
        name: "CSDN Blog",
        url: "https://blog.csdn.net/zhaoyangmou",
    },
    SocialLink {
        name: "ResearchGate",
        url: "https://researchgate.net/profile/Zhaoyang-Mou",
    },
    SocialLink {
        name: "Google Scholar",
        url: "https://scholar.google.com/citations?user=zhaoyangmou",
    },
];

const SOCIAL_LINKS_ZH: &[SocialLink] = &[
    SocialLink {
        name: "GitHub",
        url: "https://github.com/zhaoyangmou",
    },
    SocialLink {
        name: "领英",
        url: "https://linkedin.com/in/zhaoyangmou",
    },
    SocialLink {
        name: "CSDN 博客",
        url: "https://blog.csdn.net/zhaoyangmou",
    },
    SocialLink {
        name: "ResearchGate",
        url: "https://researchgate.net/profile/Zhaoyang-Mou",
    },
    SocialLink {
        name: "谷歌学术",
        url: "https://scholar.google.com/citations?user=zhaoyangmou",
    },
];

pub fn social_links(locale: Locale) -> &'static [SocialLink] {
    match locale {
        Locale::En => SOCIAL_LINKS_EN,
        Locale::Zh => SOCIAL_LINKS_ZH,
    }
}
