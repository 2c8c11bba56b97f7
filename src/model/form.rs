//! Typed form payloads and their schemas

#[cfg(test)]
use super::validation::ValidationErrors;
use super::validation::{Check, FieldValue, FormValues, Schema};
use serde::{Deserialize, Serialize};

/// How an input is presented and edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Text input rendered masked
    Password,
    Checkbox,
}

impl FieldKind {
    pub fn empty_value(&self) -> FieldValue {
        match self {
            FieldKind::Text | FieldKind::Password => FieldValue::Text(String::new()),
            FieldKind::Checkbox => FieldValue::Flag(false),
        }
    }
}

/// Layout entry for one input of a form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { name, label, kind }
    }
}

/// A typed payload backed by a validation schema
pub trait FormData: Sized + Clone + Serialize {
    /// Inputs in display order
    fn fields() -> &'static [FieldSpec];

    fn schema() -> Schema;

    /// Build the payload from raw values; missing fields take empty values
    fn from_values(values: &FormValues) -> Self;

    /// Inverse of `from_values`
    #[cfg(test)]
    fn to_values(&self) -> FormValues;

    /// Initial values for a freshly mounted form
    fn empty_values() -> FormValues {
        Self::fields()
            .iter()
            .fold(FormValues::new(), |values, spec| {
                values.with(spec.name, spec.kind.empty_value())
            })
    }

    #[cfg(test)]
    fn validate(&self) -> ValidationErrors {
        Self::schema().validate(&self.to_values())
    }

    fn into_submission(self) -> Submission;
}

// ─────────────────────────────────────────────────────────────────────────────
// Registration
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterFormData {
    pub name: String,
    pub email: String,
    pub password: String,
    pub accept_terms: bool,
}

static REGISTER_FIELDS: [FieldSpec; 4] = [
    FieldSpec::new("name", "Name", FieldKind::Text),
    FieldSpec::new("email", "Email", FieldKind::Text),
    FieldSpec::new("password", "Password", FieldKind::Password),
    FieldSpec::new(
        "acceptTerms",
        "I accept the Terms and Privacy Policy",
        FieldKind::Checkbox,
    ),
];

impl FormData for RegisterFormData {
    fn fields() -> &'static [FieldSpec] {
        &REGISTER_FIELDS
    }

    fn schema() -> Schema {
        Schema::new()
            .field("name", vec![Check::required("Name is required")])
            .field(
                "email",
                vec![
                    Check::required("Email is required"),
                    Check::email("Invalid email"),
                ],
            )
            .field(
                "password",
                vec![
                    Check::required("Password is required"),
                    Check::min_length(6, "Password must be at least 6 characters"),
                ],
            )
            .field(
                "acceptTerms",
                vec![Check::must_be_true("You must accept the terms")],
            )
    }

    fn from_values(values: &FormValues) -> Self {
        Self {
            name: values.text("name"),
            email: values.text("email"),
            password: values.text("password"),
            accept_terms: values.flag("acceptTerms"),
        }
    }

    #[cfg(test)]
    fn to_values(&self) -> FormValues {
        FormValues::new()
            .with("name", FieldValue::Text(self.name.clone()))
            .with("email", FieldValue::Text(self.email.clone()))
            .with("password", FieldValue::Text(self.password.clone()))
            .with("acceptTerms", FieldValue::Flag(self.accept_terms))
    }

    fn into_submission(self) -> Submission {
        Submission::Register(self)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Login
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginFormData {
    /// Email or phone number
    pub identifier: String,
    pub password: String,
}

static LOGIN_FIELDS: [FieldSpec; 2] = [
    FieldSpec::new("identifier", "Email or Phone", FieldKind::Text),
    FieldSpec::new("password", "Password", FieldKind::Password),
];

impl FormData for LoginFormData {
    fn fields() -> &'static [FieldSpec] {
        &LOGIN_FIELDS
    }

    fn schema() -> Schema {
        Schema::new()
            .field("identifier", vec![Check::required("Enter your email or phone")])
            .field("password", vec![Check::required("Password is required")])
    }

    fn from_values(values: &FormValues) -> Self {
        Self {
            identifier: values.text("identifier"),
            password: values.text("password"),
        }
    }

    #[cfg(test)]
    fn to_values(&self) -> FormValues {
        FormValues::new()
            .with("identifier", FieldValue::Text(self.identifier.clone()))
            .with("password", FieldValue::Text(self.password.clone()))
    }

    fn into_submission(self) -> Submission {
        Submission::Login(self)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Submission
// ─────────────────────────────────────────────────────────────────────────────

/// A validated payload handed to the submission handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Register(RegisterFormData),
    Login(LoginFormData),
}

impl Submission {
    pub fn title(&self) -> &str {
        match self {
            Submission::Register(_) => "Account created",
            Submission::Login(_) => "Logged in",
        }
    }

    pub fn form_name(&self) -> &str {
        match self {
            Submission::Register(_) => "register",
            Submission::Login(_) => "login",
        }
    }

    /// Payload as pretty-printed JSON
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        match self {
            Submission::Register(data) => serde_json::to_string_pretty(data),
            Submission::Login(data) => serde_json::to_string_pretty(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_register() -> RegisterFormData {
        RegisterFormData {
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            password: "secret1".to_string(),
            accept_terms: true,
        }
    }

    #[test]
    fn test_valid_register_payload_has_no_errors() {
        assert!(valid_register().validate().is_empty());
    }

    #[test]
    fn test_empty_name_yields_name_error() {
        let data = RegisterFormData {
            name: String::new(),
            ..valid_register()
        };
        let errors = data.validate();
        assert_eq!(errors.message("name"), Some("Name is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_malformed_email_yields_email_error() {
        for email in ["ana", "ana@x", "ana.x.com", "ana@x.com ", "@x.com"] {
            let data = RegisterFormData {
                email: email.to_string(),
                ..valid_register()
            };
            assert_eq!(
                data.validate().message("email"),
                Some("Invalid email"),
                "email {:?}",
                email
            );
        }
    }

    #[test]
    fn test_empty_email_reports_required_first() {
        let data = RegisterFormData {
            email: String::new(),
            ..valid_register()
        };
        assert_eq!(data.validate().message("email"), Some("Email is required"));
    }

    #[test]
    fn test_short_password_yields_password_error() {
        for password in ["1", "12", "123", "1234", "12345"] {
            let data = RegisterFormData {
                password: password.to_string(),
                ..valid_register()
            };
            assert_eq!(
                data.validate().message("password"),
                Some("Password must be at least 6 characters")
            );
        }
    }

    #[test]
    fn test_accept_terms_is_required() {
        let declined = RegisterFormData {
            accept_terms: false,
            ..valid_register()
        };
        assert_eq!(
            declined.validate().message("acceptTerms"),
            Some("You must accept the terms")
        );
        assert!(!valid_register().validate().contains("acceptTerms"));
    }

    #[test]
    fn test_empty_register_form_reports_every_field() {
        let values = RegisterFormData::empty_values();
        let errors = RegisterFormData::schema().validate(&values);
        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(fields.len(), 4);
        assert_eq!(errors.message("password"), Some("Password is required"));
    }

    #[test]
    fn test_login_requires_both_fields() {
        let errors = LoginFormData::default().validate();
        assert_eq!(errors.message("identifier"), Some("Enter your email or phone"));
        assert_eq!(errors.message("password"), Some("Password is required"));

        let only_password = LoginFormData {
            identifier: "ana@x.com".to_string(),
            password: String::new(),
        };
        let errors = only_password.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains("password"));
    }

    #[test]
    fn test_login_identifier_has_no_format_check() {
        let data = LoginFormData {
            identifier: "+55 11 99999-0000".to_string(),
            password: "x".to_string(),
        };
        assert!(data.validate().is_empty());
    }

    #[test]
    fn test_from_values_round_trips_typed_payload() {
        let data = valid_register();
        assert_eq!(RegisterFormData::from_values(&data.to_values()), data);
    }

    #[test]
    fn test_register_payload_serializes_camel_case() {
        let json = Submission::Register(valid_register()).to_pretty_json().unwrap();
        assert!(json.contains("\"acceptTerms\": true"));
        assert!(json.contains("\"email\": \"ana@x.com\""));
    }
}
