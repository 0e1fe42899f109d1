//! Client data model.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors returned by the client constructors.
///
/// The display strings double as the messages returned on 400 responses and
/// must stay stable; the frontend shows them verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientValidationError {
    EmptyName,
    EmptyEmail,
    InvalidEmail,
}

impl fmt::Display for ClientValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Nome é obrigatório."),
            Self::EmptyEmail => write!(f, "Email é obrigatório."),
            Self::InvalidEmail => write!(f, "Email inválido."),
        }
    }
}

impl std::error::Error for ClientValidationError {}

/// Non-empty client name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClientName(String);

impl ClientName {
    /// Validate and construct a [`ClientName`] from owned input.
    pub fn new(name: impl Into<String>) -> Result<Self, ClientValidationError> {
        Self::from_owned(name.into())
    }

    fn from_owned(name: String) -> Result<Self, ClientValidationError> {
        if name.trim().is_empty() {
            return Err(ClientValidationError::EmptyName);
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for ClientName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ClientName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<ClientName> for String {
    fn from(value: ClientName) -> Self {
        value.0
    }
}

impl TryFrom<String> for ClientName {
    type Error = ClientValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        let pattern = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Syntactically valid, non-empty email address.
///
/// Uniqueness across clients is a store concern; this type only guards
/// syntax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`] from owned input.
    pub fn new(email: impl Into<String>) -> Result<Self, ClientValidationError> {
        Self::from_owned(email.into())
    }

    fn from_owned(email: String) -> Result<Self, ClientValidationError> {
        if email.trim().is_empty() {
            return Err(ClientValidationError::EmptyEmail);
        }
        if !email_regex().is_match(&email) {
            return Err(ClientValidationError::InvalidEmail);
        }
        Ok(Self(email))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = ClientValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Validated mutable fields of a client, before an id is attached.
///
/// Exists only at the validation boundary: request bodies become drafts,
/// drafts become [`Client`] records once the store assigns or confirms an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientDraft {
    name: ClientName,
    email: EmailAddress,
    status: bool,
}

impl ClientDraft {
    /// Build a draft from validated components.
    pub fn new(name: ClientName, email: EmailAddress, status: bool) -> Self {
        Self {
            name,
            email,
            status,
        }
    }

    /// Fallible constructor checking fields in declaration order: name, then
    /// email. The first violation wins.
    pub fn try_from_parts(
        name: &str,
        email: &str,
        status: bool,
    ) -> Result<Self, ClientValidationError> {
        let name = ClientName::new(name)?;
        let email = EmailAddress::new(email)?;
        Ok(Self::new(name, email, status))
    }

    /// Client name.
    pub fn name(&self) -> &ClientName {
        &self.name
    }

    /// Client email address.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Active (`true`) or inactive (`false`).
    pub fn status(&self) -> bool {
        self.status
    }
}

/// Persisted customer record.
///
/// ## Invariants
/// - `id` is assigned once at creation and never changes.
/// - `email` is unique across all persisted clients (store enforced).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    id: Uuid,
    name: ClientName,
    email: EmailAddress,
    status: bool,
}

impl Client {
    /// Attach an identifier to a validated draft.
    pub fn new(id: Uuid, draft: ClientDraft) -> Self {
        let ClientDraft {
            name,
            email,
            status,
        } = draft;
        Self {
            id,
            name,
            email,
            status,
        }
    }

    /// Stable record identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Client name.
    pub fn name(&self) -> &ClientName {
        &self.name
    }

    /// Client email address.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Active (`true`) or inactive (`false`).
    pub fn status(&self) -> bool {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn client_name_rejects_blank_input(#[case] raw: &str) {
        assert_eq!(ClientName::new(raw), Err(ClientValidationError::EmptyName));
    }

    #[test]
    fn client_name_accepts_regular_text() {
        let name = ClientName::new("Ana Souza").expect("valid name");
        assert_eq!(name.as_ref(), "Ana Souza");
    }

    #[rstest]
    #[case("")]
    #[case("  ")]
    fn email_rejects_blank_input(#[case] raw: &str) {
        assert_eq!(
            EmailAddress::new(raw),
            Err(ClientValidationError::EmptyEmail)
        );
    }

    #[rstest]
    #[case("not-an-email")]
    #[case("missing@domain")]
    #[case("@x.com")]
    #[case("two@@x.com")]
    #[case("spaces in@x.com")]
    fn email_rejects_malformed_input(#[case] raw: &str) {
        assert_eq!(
            EmailAddress::new(raw),
            Err(ClientValidationError::InvalidEmail)
        );
    }

    #[rstest]
    #[case("ana@x.com")]
    #[case("first.last+tag@sub.example.co")]
    fn email_accepts_valid_addresses(#[case] raw: &str) {
        let email = EmailAddress::new(raw).expect("valid email");
        assert_eq!(email.as_ref(), raw);
    }

    #[test]
    fn draft_reports_first_violation_in_field_order() {
        // Both fields invalid: the name violation must win.
        let result = ClientDraft::try_from_parts("", "not-an-email", true);
        assert_eq!(result, Err(ClientValidationError::EmptyName));
    }

    #[test]
    fn validation_messages_match_frontend_contract() {
        assert_eq!(
            ClientValidationError::EmptyName.to_string(),
            "Nome é obrigatório."
        );
        assert_eq!(
            ClientValidationError::EmptyEmail.to_string(),
            "Email é obrigatório."
        );
        assert_eq!(
            ClientValidationError::InvalidEmail.to_string(),
            "Email inválido."
        );
    }

    #[test]
    fn client_serializes_with_flat_fields() {
        let draft = ClientDraft::try_from_parts("Ana", "ana@x.com", true).expect("valid draft");
        let id = Uuid::new_v4();
        let client = Client::new(id, draft);

        let value = serde_json::to_value(&client).expect("client serialises");
        assert_eq!(
            value,
            serde_json::json!({
                "id": id.to_string(),
                "name": "Ana",
                "email": "ana@x.com",
                "status": true,
            })
        );
    }

    #[test]
    fn client_round_trips_through_json() {
        let draft = ClientDraft::try_from_parts("Ana", "ana@x.com", false).expect("valid draft");
        let client = Client::new(Uuid::new_v4(), draft);

        let json = serde_json::to_string(&client).expect("serialise");
        let back: Client = serde_json::from_str(&json).expect("deserialise");
        assert_eq!(back, client);
    }

    #[test]
    fn client_deserialization_enforces_invariants() {
        let raw = r#"{"id":"3fa85f64-5717-4562-b3fc-2c963f66afa6","name":"","email":"ana@x.com","status":true}"#;
        let result: Result<Client, _> = serde_json::from_str(raw);
        assert!(result.is_err(), "blank name must not deserialise");
    }
}
