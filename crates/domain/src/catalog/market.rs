//! Market codes

use crate::error::{DomainError, DomainResult};

/// Checks that `code` is an ISO 3166-1 alpha-2 shaped market code.
///
/// The code ends up in a query string, so anything but two ASCII letters
/// is rejected.
///
/// # Errors
/// Returns [`DomainError::InvalidMarket`] otherwise.
pub fn validate_market(code: &str) -> DomainResult<&str> {
    if code.len() == 2 && code.bytes().all(|b| b.is_ascii_alphabetic()) {
        Ok(code)
    } else {
        Err(DomainError::InvalidMarket(code.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_two_letter_codes_pass() {
        assert_eq!(validate_market("BR"), Ok("BR"));
        assert_eq!(validate_market("us"), Ok("us"));
    }

    #[test]
    fn test_query_fragments_rejected() {
        assert_eq!(
            validate_market("BR&x=1"),
            Err(DomainError::InvalidMarket("BR&x=1".to_string()))
        );
        assert!(validate_market("").is_err());
        assert!(validate_market("B1").is_err());
    }
}
