//! StackExchange API request descriptors.
//!
//! A request descriptor knows its endpoint template, how to substitute its
//! parameters into that template, and how to verify that its required
//! parameters are present. Dispatching the request is the caller's concern.

use crate::error::{ParleyError, Result};

/// A StackExchange API request.
pub trait ApiRequest {
    /// The endpoint template, relative to the API root, with `{Param}`
    /// placeholders.
    fn endpoint_url(&self) -> &'static str;

    /// The endpoint with all placeholders substituted.
    fn formatted_endpoint(&self) -> String;

    /// Check that all required parameters are present and well-formed.
    fn verify(&self) -> Result<()>;
}

/// Request for general information about a site.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoRequest {
    pub site: String,
}

impl InfoRequest {
    const ENDPOINT_URL: &'static str = "info?site={Site}";

    pub fn new(site: impl Into<String>) -> Self {
        Self { site: site.into() }
    }
}

impl ApiRequest for InfoRequest {
    fn endpoint_url(&self) -> &'static str {
        Self::ENDPOINT_URL
    }

    fn formatted_endpoint(&self) -> String {
        Self::ENDPOINT_URL.replace("{Site}", &self.site)
    }

    fn verify(&self) -> Result<()> {
        if self.site.trim().is_empty() {
            return Err(ParleyError::InvalidRequest(
                "The value for Site must be a non-empty, non-whitespace string.".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatted_endpoint_substitutes_site() {
        let request = InfoRequest::new("stackoverflow");
        assert_eq!(request.endpoint_url(), "info?site={Site}");
        assert_eq!(request.formatted_endpoint(), "info?site=stackoverflow");
    }

    #[test]
    fn test_verify_accepts_valid_site() {
        assert!(InfoRequest::new("stackoverflow").verify().is_ok());
    }

    #[test]
    fn test_verify_rejects_blank_site() {
        for site in ["", "   "] {
            let err = InfoRequest::new(site).verify().unwrap_err();
            assert!(matches!(err, ParleyError::InvalidRequest(_)));
        }
    }
}
