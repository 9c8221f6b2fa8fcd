//! Signup form validation.
//!
//! Three fields (email, password, phone) validated on every input and
//! again on submit. Validation never throws: invalid input surfaces as a
//! per-field message, and a successful submit resets the form.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Word characters with optional single dots/dashes between runs,
    /// then a domain with at least one two-letter-plus TLD.
    static ref EMAIL: Regex = Regex::new(
        r"^\w+([.-]?\w+)*@[\w-]+(\.\w{2,})+$"
    ).unwrap();

    /// Ten digits starting with 0, or a +84 prefix followed by nine.
    static ref PHONE: Regex = Regex::new(
        r"^(0|\+84)[35789]\d{8}$"
    ).unwrap();
}

/// Symbols allowed in passwords besides letters and digits.
const PASSWORD_SYMBOLS: &str = r##"!@#$%^&*()_+-=[]{};':"\|,.<>/?"##;

/// Validation state of one field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldStatus {
    /// Never touched; no message shown.
    Pristine,
    Valid,
    Invalid(&'static str),
}

impl FieldStatus {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The error message to render next to the field, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Invalid(message) => Some(message),
            _ => None,
        }
    }
}

/// The form fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
    Phone,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Email, Field::Password, Field::Phone];

    fn message(&self) -> &'static str {
        match self {
            Self::Email => "Please enter a valid email address.",
            Self::Password => "Password needs at least 8 characters with letters and digits.",
            Self::Phone => "Phone number must have 10 digits, starting with 0 or +84.",
        }
    }

    fn validate(&self, value: &str) -> bool {
        match self {
            Self::Email => EMAIL.is_match(value.trim()),
            Self::Password => valid_password(value),
            Self::Phone => {
                let cleaned: String = value.chars().filter(|c| !c.is_whitespace()).collect();
                PHONE.is_match(&cleaned)
            }
        }
    }
}

/// At least 8 characters, at least one letter and one digit, and nothing
/// outside the allowed character set.
fn valid_password(value: &str) -> bool {
    value.len() >= 8
        && value.chars().any(|c| c.is_ascii_alphabetic())
        && value.chars().any(|c| c.is_ascii_digit())
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || PASSWORD_SYMBOLS.contains(c))
}

/// Message shown after a fully valid submit.
pub const SUCCESS_MESSAGE: &str = "Registration complete. All fields look good.";

/// Outcome of a submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All fields valid; values were reset.
    Accepted,
    /// At least one field invalid; the form keeps its values.
    Rejected,
}

#[derive(Clone, Debug, Default)]
struct FieldState {
    value: String,
    status: Option<bool>,
}

/// Validation state machine for the signup form.
#[derive(Clone, Debug, Default)]
pub struct SignupForm {
    email: FieldState,
    password: FieldState,
    phone: FieldState,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self, field: Field) -> &FieldState {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::Phone => &self.phone,
        }
    }

    fn state_mut(&mut self, field: Field) -> &mut FieldState {
        match field {
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::Phone => &mut self.phone,
        }
    }

    pub fn value(&self, field: Field) -> &str {
        &self.state(field).value
    }

    /// Current validation status of a field.
    pub fn status(&self, field: Field) -> FieldStatus {
        match self.state(field).status {
            None => FieldStatus::Pristine,
            Some(true) => FieldStatus::Valid,
            Some(false) => FieldStatus::Invalid(field.message()),
        }
    }

    /// Update a field value and re-validate it immediately.
    pub fn input(&mut self, field: Field, value: &str) -> FieldStatus {
        let valid = field.validate(value);
        let state = self.state_mut(field);
        state.value = value.to_string();
        state.status = Some(valid);
        self.status(field)
    }

    /// Validate every field. When all pass, reset the values and report
    /// acceptance; otherwise every field keeps its message.
    pub fn submit(&mut self) -> SubmitOutcome {
        let mut all_valid = true;
        for field in Field::ALL {
            let valid = field.validate(self.value(field));
            self.state_mut(field).status = Some(valid);
            all_valid &= valid;
        }

        if all_valid {
            for field in Field::ALL {
                *self.state_mut(field) = FieldState::default();
            }
            SubmitOutcome::Accepted
        } else {
            SubmitOutcome::Rejected
        }
    }
}
