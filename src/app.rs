//! Application state and core logic

use crate::catalog::{self, Locale};
use crate::config::TuiConfig;
use crate::gateway::{HttpGateway, SendOutcome, SubmissionGateway};
use crate::notify::ToastQueue;
use crate::state::{Field, FormMachine};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// Which part of the form has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    Collaboration,
    Name,
    Email,
    Subject,
    Budget,
    Timeline,
    Message,
    Send,
}

impl FormFocus {
    /// Traversal order; `budget`/`timeline` join once a collaboration
    /// type is selected.
    fn order(has_optional: bool) -> &'static [FormFocus] {
        if has_optional {
            &[
                FormFocus::Collaboration,
                FormFocus::Name,
                FormFocus::Email,
                FormFocus::Subject,
                FormFocus::Budget,
                FormFocus::Timeline,
                FormFocus::Message,
                FormFocus::Send,
            ]
        } else {
            &[
                FormFocus::Collaboration,
                FormFocus::Name,
                FormFocus::Email,
                FormFocus::Subject,
                FormFocus::Message,
                FormFocus::Send,
            ]
        }
    }

    pub fn next(self, has_optional: bool) -> Self {
        let order = Self::order(has_optional);
        let current = order.iter().position(|f| *f == self).unwrap_or(0);
        order[(current + 1) % order.len()]
    }

    pub fn prev(self, has_optional: bool) -> Self {
        let order = Self::order(has_optional);
        let current = order.iter().position(|f| *f == self).unwrap_or(0);
        order[(current + order.len() - 1) % order.len()]
    }

    /// The form field under this focus, if it is a field at all.
    pub fn field(self) -> Option<Field> {
        match self {
            FormFocus::Collaboration => Some(Field::CollaborationType),
            FormFocus::Name => Some(Field::Name),
            FormFocus::Email => Some(Field::Email),
            FormFocus::Subject => Some(Field::Subject),
            FormFocus::Budget => Some(Field::Budget),
            FormFocus::Timeline => Some(Field::Timeline),
            FormFocus::Message => Some(Field::Message),
            FormFocus::Send => None,
        }
    }

    /// Whether typed characters go into this focus target.
    fn accepts_text(self) -> bool {
        matches!(
            self,
            FormFocus::Name | FormFocus::Email | FormFocus::Subject | FormFocus::Message
        )
    }
}

/// Main application struct
pub struct App {
    /// The contact form workflow
    pub machine: FormMachine,
    /// Shared toast queue, also held by the machine's notifier
    pub toasts: ToastQueue,
    /// Active interface language
    pub locale: Locale,
    /// Current keyboard focus in the form
    pub focus: FormFocus,
    /// Collaboration card the cursor is on (independent of selection)
    pub highlighted_collaboration: usize,
    /// Endpoint shown in the status bar
    pub endpoint: String,
    gateway: Arc<dyn SubmissionGateway>,
    completion_tx: mpsc::UnboundedSender<Result<SendOutcome>>,
    completions: mpsc::UnboundedReceiver<Result<SendOutcome>>,
}

impl App {
    /// Create a new App instance from the user configuration
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let locale = config
            .locale
            .as_deref()
            .and_then(Locale::from_code)
            .unwrap_or_default();
        let gateway = HttpGateway::new(
            config.contact_endpoint.clone(),
            config.request_timeout_secs,
        )?;
        let endpoint = gateway.endpoint().to_string();
        Ok(Self::with_gateway(locale, endpoint, Arc::new(gateway)))
    }

    /// Create an App around an arbitrary gateway (used by tests)
    pub fn with_gateway(
        locale: Locale,
        endpoint: String,
        gateway: Arc<dyn SubmissionGateway>,
    ) -> Self {
        let toasts = ToastQueue::new();
        let machine = FormMachine::new(Box::new(toasts.clone()));
        let (completion_tx, completions) = mpsc::unbounded_channel();

        Self {
            machine,
            toasts,
            locale,
            focus: FormFocus::default(),
            highlighted_collaboration: 0,
            endpoint,
            gateway,
            completion_tx,
            completions,
        }
    }

    /// Per-iteration housekeeping: apply finished sends, fire the
    /// auto-reset, drop expired toasts.
    pub fn update(&mut self, now: Instant) {
        while let Ok(result) = self.completions.try_recv() {
            self.machine.finish_submit(result, now);
        }
        self.machine.tick(now);
        self.toasts.expire(now);
    }

    /// Teardown: nothing scheduled may outlive the UI.
    pub fn shutdown(&mut self) {
        self.machine.cancel_pending_reset();
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global combos first
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('s') => {
                    self.submit();
                    return;
                }
                KeyCode::Char('l') => {
                    self.locale.toggle();
                    return;
                }
                _ => {}
            }
        }

        let has_optional = self.machine.data().selected_collaboration().is_some();

        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next(has_optional);
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev(has_optional);
            }
            KeyCode::Left => self.handle_left(),
            KeyCode::Right => self.handle_right(),
            KeyCode::Enter => self.handle_enter(has_optional),
            KeyCode::Char(' ') if !self.focus.accepts_text() => {
                self.handle_activate();
            }
            KeyCode::Char(c) if self.focus.accepts_text() => {
                if let Some(field) = self.focus.field() {
                    self.machine.input_char(field, c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.focus.field() {
                    if self.focus.accepts_text() {
                        self.machine.backspace(field);
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_left(&mut self) {
        match self.focus {
            FormFocus::Collaboration => {
                let count = catalog::collaboration_types(self.locale).len();
                self.highlighted_collaboration =
                    (self.highlighted_collaboration + count - 1) % count;
            }
            FormFocus::Budget => self.cycle_option(Field::Budget, -1),
            FormFocus::Timeline => self.cycle_option(Field::Timeline, -1),
            _ => {}
        }
    }

    fn handle_right(&mut self) {
        match self.focus {
            FormFocus::Collaboration => {
                let count = catalog::collaboration_types(self.locale).len();
                self.highlighted_collaboration = (self.highlighted_collaboration + 1) % count;
            }
            FormFocus::Budget => self.cycle_option(Field::Budget, 1),
            FormFocus::Timeline => self.cycle_option(Field::Timeline, 1),
            _ => {}
        }
    }

    fn handle_enter(&mut self, has_optional: bool) {
        match self.focus {
            FormFocus::Send => self.submit(),
            FormFocus::Collaboration => self.handle_activate(),
            // Multiline field: Enter inserts a line break
            FormFocus::Message => self.machine.input_char(Field::Message, '\n'),
            _ => {
                self.focus = self.focus.next(has_optional);
            }
        }
    }

    /// Space/Enter on a non-text target: pick the highlighted card or
    /// advance the select under the cursor.
    fn handle_activate(&mut self) {
        match self.focus {
            FormFocus::Collaboration => {
                let types = catalog::collaboration_types(self.locale);
                if let Some(choice) = types.get(self.highlighted_collaboration) {
                    self.machine.select_collaboration(choice.id);
                }
            }
            FormFocus::Budget => self.cycle_option(Field::Budget, 1),
            FormFocus::Timeline => self.cycle_option(Field::Timeline, 1),
            FormFocus::Send => self.submit(),
            _ => {}
        }
    }

    /// Step a select-style field through its catalog options.
    fn cycle_option(&mut self, field: Field, step: isize) {
        let options = catalog::field_config(self.locale, field).options;
        if options.is_empty() {
            return;
        }
        let current = self.machine.data().get(field);
        let next = match options.iter().position(|o| *o == current) {
            Some(idx) => {
                let len = options.len() as isize;
                ((idx as isize + step + len) % len) as usize
            }
            // Value not among this locale's options (or unset): start over
            None => 0,
        };
        self.machine.update_field(field, options[next]);
    }

    /// Start a submission: validate, snapshot, and hand the send to the
    /// runtime. The result comes back through [`App::update`].
    fn submit(&mut self) {
        let Some(snapshot) = self.machine.begin_submit() else {
            return;
        };

        tracing::info!("contact submission started");
        let gateway = Arc::clone(&self.gateway);
        let tx = self.completion_tx.clone();
        tokio::spawn(async move {
            let result = gateway.send(&snapshot).await;
            // The receiver is gone only during shutdown
            let _ = tx.send(result);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::MockSubmissionGateway;
    use crate::state::SubmitStatus;
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn test_app() -> App {
        App::with_gateway(
            Locale::En,
            "https://example.org/contact".to_string(),
            Arc::new(MockSubmissionGateway::new()),
        )
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn fill_valid(app: &mut App) {
        app.focus = FormFocus::Name;
        type_str(app, "Alice");
        app.focus = FormFocus::Email;
        type_str(app, "alice@example.edu");
        app.focus = FormFocus::Subject;
        type_str(app, "Hi");
        app.focus = FormFocus::Message;
        type_str(app, "Hello there");
    }

    mod focus {
        use super::*;

        #[test]
        fn test_tab_cycles_without_optional_fields() {
            let mut app = test_app();
            let mut seen = vec![app.focus];
            for _ in 0..5 {
                app.handle_key(key(KeyCode::Tab));
                seen.push(app.focus);
            }
            assert_eq!(
                seen,
                vec![
                    FormFocus::Collaboration,
                    FormFocus::Name,
                    FormFocus::Email,
                    FormFocus::Subject,
                    FormFocus::Message,
                    FormFocus::Send,
                ]
            );
            // Wraps back to the start
            app.handle_key(key(KeyCode::Tab));
            assert_eq!(app.focus, FormFocus::Collaboration);
        }

        #[test]
        fn test_budget_and_timeline_join_after_selection() {
            let mut app = test_app();
            app.machine.select_collaboration("research");
            app.focus = FormFocus::Subject;
            app.handle_key(key(KeyCode::Tab));
            assert_eq!(app.focus, FormFocus::Budget);
            app.handle_key(key(KeyCode::Tab));
            assert_eq!(app.focus, FormFocus::Timeline);
            app.handle_key(key(KeyCode::Tab));
            assert_eq!(app.focus, FormFocus::Message);
        }

        #[test]
        fn test_back_tab_reverses() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::BackTab));
            assert_eq!(app.focus, FormFocus::Send);
        }

        #[test]
        fn test_enter_advances_from_single_line_fields() {
            let mut app = test_app();
            app.focus = FormFocus::Name;
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(app.focus, FormFocus::Email);
        }

        #[test]
        fn test_enter_in_message_inserts_newline() {
            let mut app = test_app();
            app.focus = FormFocus::Message;
            type_str(&mut app, "line one");
            app.handle_key(key(KeyCode::Enter));
            type_str(&mut app, "line two");
            assert_eq!(app.machine.data().message, "line one\nline two");
            assert_eq!(app.focus, FormFocus::Message);
        }
    }

    mod editing {
        use super::*;

        #[test]
        fn test_typing_goes_into_the_focused_field() {
            let mut app = test_app();
            app.focus = FormFocus::Email;
            type_str(&mut app, "a@b.cd");
            assert_eq!(app.machine.data().email, "a@b.cd");
            assert_eq!(app.machine.data().name, "");
        }

        #[test]
        fn test_backspace_removes_last_char() {
            let mut app = test_app();
            app.focus = FormFocus::Name;
            type_str(&mut app, "Bob");
            app.handle_key(key(KeyCode::Backspace));
            assert_eq!(app.machine.data().name, "Bo");
        }

        #[test]
        fn test_space_types_into_text_fields() {
            let mut app = test_app();
            app.focus = FormFocus::Subject;
            type_str(&mut app, "a b");
            assert_eq!(app.machine.data().subject, "a b");
        }

        #[test]
        fn test_typing_ignored_on_selects_and_button() {
            let mut app = test_app();
            app.machine.select_collaboration("research");
            app.focus = FormFocus::Budget;
            type_str(&mut app, "abc");
            assert_eq!(app.machine.data().budget, "");
        }
    }

    mod collaboration {
        use super::*;

        #[test]
        fn test_arrows_move_highlight_and_wrap() {
            let mut app = test_app();
            assert_eq!(app.highlighted_collaboration, 0);
            app.handle_key(key(KeyCode::Left));
            assert_eq!(app.highlighted_collaboration, 3);
            app.handle_key(key(KeyCode::Right));
            assert_eq!(app.highlighted_collaboration, 0);
        }

        #[test]
        fn test_enter_selects_highlighted_card() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Right));
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(
                app.machine.data().selected_collaboration(),
                Some("development")
            );
        }

        #[test]
        fn test_reselection_overwrites() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(app.machine.data().selected_collaboration(), Some("research"));
            app.handle_key(key(KeyCode::Right));
            app.handle_key(key(KeyCode::Char(' ')));
            assert_eq!(
                app.machine.data().selected_collaboration(),
                Some("development")
            );
        }
    }

    mod selects {
        use super::*;

        #[test]
        fn test_right_steps_through_budget_options() {
            let mut app = test_app();
            app.machine.select_collaboration("research");
            app.focus = FormFocus::Budget;

            app.handle_key(key(KeyCode::Right));
            assert_eq!(app.machine.data().budget, "Under $5,000");
            app.handle_key(key(KeyCode::Right));
            assert_eq!(app.machine.data().budget, "$5,000 – $20,000");
        }

        #[test]
        fn test_left_wraps_to_last_option() {
            let mut app = test_app();
            app.machine.select_collaboration("research");
            app.focus = FormFocus::Timeline;

            app.handle_key(key(KeyCode::Right));
            assert_eq!(app.machine.data().timeline, "Within 1 month");
            app.handle_key(key(KeyCode::Left));
            assert_eq!(app.machine.data().timeline, "Flexible");
        }
    }

    mod locale {
        use super::*;

        #[test]
        fn test_ctrl_l_toggles_locale() {
            let mut app = test_app();
            assert_eq!(app.locale, Locale::En);
            app.handle_key(ctrl('l'));
            assert_eq!(app.locale, Locale::Zh);
            app.handle_key(ctrl('l'));
            assert_eq!(app.locale, Locale::En);
        }

        #[test]
        fn test_option_cycling_follows_the_active_locale() {
            let mut app = test_app();
            app.machine.select_collaboration("research");
            app.handle_key(ctrl('l'));
            app.focus = FormFocus::Budget;
            app.handle_key(key(KeyCode::Right));
            assert_eq!(app.machine.data().budget, "1万元以内");
        }
    }

    mod submission {
        use super::*;

        /// Let the spawned send task run and its result drain back in.
        async fn settle(app: &mut App) {
            for _ in 0..50 {
                tokio::task::yield_now().await;
                app.update(Instant::now());
                if app.machine.status() != SubmitStatus::Loading {
                    return;
                }
            }
        }

        #[tokio::test]
        async fn test_send_focus_enter_submits_and_applies_outcome() {
            let mut gateway = MockSubmissionGateway::new();
            gateway.expect_send().times(1).returning(|_| {
                Ok(SendOutcome {
                    success: true,
                    message: "Sent".to_string(),
                })
            });
            let mut app = App::with_gateway(
                Locale::En,
                "https://example.org/contact".to_string(),
                Arc::new(gateway),
            );
            fill_valid(&mut app);
            app.focus = FormFocus::Send;
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(app.machine.status(), SubmitStatus::Loading);

            settle(&mut app).await;
            assert_eq!(app.machine.status(), SubmitStatus::Success);
            assert_eq!(app.machine.banner(), "Sent");
        }

        #[tokio::test]
        async fn test_ctrl_s_submits_from_any_focus() {
            let mut gateway = MockSubmissionGateway::new();
            gateway.expect_send().times(1).returning(|_| {
                Ok(SendOutcome {
                    success: true,
                    message: "ok".to_string(),
                })
            });
            let mut app = App::with_gateway(
                Locale::En,
                "https://example.org/contact".to_string(),
                Arc::new(gateway),
            );
            fill_valid(&mut app);
            app.focus = FormFocus::Name;
            app.handle_key(ctrl('s'));
            settle(&mut app).await;
            assert_eq!(app.machine.status(), SubmitStatus::Success);
        }

        #[tokio::test]
        async fn test_invalid_form_never_reaches_the_gateway() {
            let mut gateway = MockSubmissionGateway::new();
            gateway.expect_send().never();
            let mut app = App::with_gateway(
                Locale::En,
                "https://example.org/contact".to_string(),
                Arc::new(gateway),
            );
            app.focus = FormFocus::Send;
            app.handle_key(key(KeyCode::Enter));

            assert_eq!(app.machine.status(), SubmitStatus::Idle);
            assert!(app.machine.errors().has_errors());
            assert!(!app.toasts.is_empty());
        }

        #[tokio::test]
        async fn test_typing_still_works_while_loading() {
            let mut gateway = MockSubmissionGateway::new();
            gateway.expect_send().times(1).returning(|_| {
                Ok(SendOutcome {
                    success: true,
                    message: "ok".to_string(),
                })
            });
            let mut app = App::with_gateway(
                Locale::En,
                "https://example.org/contact".to_string(),
                Arc::new(gateway),
            );
            fill_valid(&mut app);
            app.focus = FormFocus::Send;
            app.handle_key(key(KeyCode::Enter));

            app.focus = FormFocus::Name;
            type_str(&mut app, "!");
            assert_eq!(app.machine.data().name, "Alice!");
        }

        #[tokio::test]
        async fn test_update_expires_toasts() {
            let mut app = test_app();
            // Rejected submit raises a toast
            app.focus = FormFocus::Send;
            app.handle_key(key(KeyCode::Enter));
            assert!(!app.toasts.is_empty());

            app.update(Instant::now() + Duration::from_secs(10));
            assert!(app.toasts.is_empty());
        }
    }
}
