//! Contact form data model: field identifiers, form data, per-field errors

use serde::Serialize;

/// Identifier for each contact form field.
///
/// This is the only key type for per-field tables; there is no
/// string-indexed lookup anywhere in the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
    CollaborationType,
    Budget,
    Timeline,
}

impl Field {
    /// All fields, in form order.
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Email,
        Field::Subject,
        Field::Message,
        Field::CollaborationType,
        Field::Budget,
        Field::Timeline,
    ];

    /// Stable index into per-field tables.
    pub fn index(self) -> usize {
        match self {
            Field::Name => 0,
            Field::Email => 1,
            Field::Subject => 2,
            Field::Message => 3,
            Field::CollaborationType => 4,
            Field::Budget => 5,
            Field::Timeline => 6,
        }
    }

    /// Whether the field must be filled before a submission is attempted.
    pub fn is_required(self) -> bool {
        matches!(
            self,
            Field::Name | Field::Email | Field::Subject | Field::Message
        )
    }
}

/// The contact form payload.
///
/// All fields are plain strings; empty means unset. `budget` and
/// `timeline` only carry meaning once `collaboration_type` holds a
/// selected id, but they keep their values even while hidden.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub collaboration_type: String,
    pub budget: String,
    pub timeline: String,
}

impl ContactFormData {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
            Field::CollaborationType => &self.collaboration_type,
            Field::Budget => &self.budget,
            Field::Timeline => &self.timeline,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
            Field::CollaborationType => &mut self.collaboration_type,
            Field::Budget => &mut self.budget,
            Field::Timeline => &mut self.timeline,
        };
        *slot = value;
    }

    /// The currently selected collaboration id, if any.
    pub fn selected_collaboration(&self) -> Option<&str> {
        if self.collaboration_type.is_empty() {
            None
        } else {
            Some(&self.collaboration_type)
        }
    }
}

/// A single field-level validation problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The field is empty or whitespace-only.
    Required,
    /// The value is present but malformed (email only).
    InvalidFormat,
}

/// Per-field validation errors, keyed by [`Field`].
///
/// Recomputed wholesale on each submit attempt; a single entry is cleared
/// the moment the corresponding field is edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: [Option<ValidationError>; 7],
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<ValidationError> {
        self.entries[field.index()]
    }

    pub fn set(&mut self, field: Field, error: ValidationError) {
        self.entries[field.index()] = Some(error);
    }

    pub fn clear(&mut self, field: Field) {
        self.entries[field.index()] = None;
    }

    /// Whether any field currently has an error.
    ///
    /// This predicate is the single source of truth for "is the form
    /// submittable".
    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(Option::is_some)
    }

    /// Number of fields with an error.
    pub fn error_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }
}

/// Status of the submission workflow.
///
/// Exactly one is active at any time; transitions happen only inside
/// [`FormMachine`](super::FormMachine).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl SubmitStatus {
    /// A status reached after a submission attempt completes, which
    /// auto-reverts to `Idle`.
    pub fn is_terminal(self) -> bool {
        matches!(self, SubmitStatus::Success | SubmitStatus::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_indices_are_distinct_and_ordered() {
        for (i, field) in Field::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn test_required_fields() {
        assert!(Field::Name.is_required());
        assert!(Field::Email.is_required());
        assert!(Field::Subject.is_required());
        assert!(Field::Message.is_required());
        assert!(!Field::CollaborationType.is_required());
        assert!(!Field::Budget.is_required());
        assert!(!Field::Timeline.is_required());
    }

    #[test]
    fn test_default_form_data_is_all_empty() {
        let data = ContactFormData::default();
        for field in Field::ALL {
            assert_eq!(data.get(field), "");
        }
        assert!(data.selected_collaboration().is_none());
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let mut data = ContactFormData::default();
        data.set(Field::Email, "alice@example.com".to_string());
        assert_eq!(data.get(Field::Email), "alice@example.com");
        assert_eq!(data.get(Field::Name), "");
    }

    #[test]
    fn test_selected_collaboration_reflects_id() {
        let mut data = ContactFormData::default();
        assert!(data.selected_collaboration().is_none());
        data.set(Field::CollaborationType, "research".to_string());
        assert_eq!(data.selected_collaboration(), Some("research"));
    }

    #[test]
    fn test_field_errors_default_is_empty() {
        let errors = FieldErrors::default();
        assert!(!errors.has_errors());
        assert_eq!(errors.error_count(), 0);
        for field in Field::ALL {
            assert!(errors.get(field).is_none());
        }
    }

    #[test]
    fn test_field_errors_set_clear() {
        let mut errors = FieldErrors::default();
        errors.set(Field::Email, ValidationError::InvalidFormat);
        assert!(errors.has_errors());
        assert_eq!(errors.error_count(), 1);
        assert_eq!(errors.get(Field::Email), Some(ValidationError::InvalidFormat));

        errors.clear(Field::Email);
        assert!(!errors.has_errors());
        assert!(errors.get(Field::Email).is_none());
    }

    #[test]
    fn test_clearing_an_unset_field_is_a_noop() {
        let mut errors = FieldErrors::default();
        errors.clear(Field::Message);
        assert!(!errors.has_errors());
    }

    #[test]
    fn test_submit_status_terminal() {
        assert!(!SubmitStatus::Idle.is_terminal());
        assert!(!SubmitStatus::Loading.is_terminal());
        assert!(SubmitStatus::Success.is_terminal());
        assert!(SubmitStatus::Error.is_terminal());
    }

    #[test]
    fn test_default_status_is_idle() {
        assert_eq!(SubmitStatus::default(), SubmitStatus::Idle);
    }
}
