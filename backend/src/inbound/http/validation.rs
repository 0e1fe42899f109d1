//! Shared validation helpers for inbound HTTP adapters.

use uuid::Uuid;

use crate::domain::Error;

/// Parse a client id path segment.
///
/// Ids must be version-4 style UUID strings; anything else is rejected
/// before a repository call is attempted.
pub(crate) fn parse_client_id(value: &str) -> Result<Uuid, Error> {
    Uuid::parse_str(value).map_err(|_| Error::invalid_request("ID inválido."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[test]
    fn accepts_canonical_uuid_strings() {
        let id = parse_client_id("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("valid id");
        assert_eq!(id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
    }

    #[rstest]
    #[case("")]
    #[case("123")]
    #[case("not-a-uuid")]
    #[case("3fa85f64-5717-4562-b3fc")]
    fn rejects_malformed_ids(#[case] raw: &str) {
        let err = parse_client_id(raw).expect_err("must reject");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(err.message(), "ID inválido.");
    }
}
