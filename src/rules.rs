//! Component validators as composable capability units.
//!
//! A [`SchemeValidator`](crate::SchemeValidator) is assembled from one
//! [`ComponentRules`] and, for schemes with a host, one [`AuthorityRules`].
//! Every check has a permissive default, so an implementation only
//! overrides the components it cares about:
//!
//! ```
//! use scheme_uri::{AuthorityRules, Component, ValidationError};
//!
//! #[derive(Debug)]
//! struct NoLocalhost;
//!
//! impl AuthorityRules for NoLocalhost {
//!     fn validate_host(&self, host: &str) -> Result<(), ValidationError> {
//!         if host.eq_ignore_ascii_case("localhost") {
//!             return Err(ValidationError::rejected(Component::Host, "Local hosts are not allowed"));
//!         }
//!         Ok(())
//!     }
//! }
//!
//! assert!(NoLocalhost.validate_host("localhost").is_err());
//! assert_eq!(NoLocalhost.validate_port("8080").unwrap(), 8080);
//! ```

use std::fmt;

use crate::error::{Component, ValidationError, ValidationErrorKind};
use crate::uri::UriParts;

/// Checks for the pieces of a parsed authority.
pub trait AuthorityRules: fmt::Debug + Send + Sync {
    /// Checks the userinfo before `@`. Accepts anything by default.
    ///
    /// # Errors
    ///
    /// Returns a [`Component::Userinfo`] error if the userinfo is rejected.
    fn validate_userinfo(&self, _userinfo: &str) -> Result<(), ValidationError> {
        Ok(())
    }

    /// Checks the host. Accepts anything by default.
    ///
    /// # Errors
    ///
    /// Returns a [`Component::Host`] error if the host is rejected.
    fn validate_host(&self, _host: &str) -> Result<(), ValidationError> {
        Ok(())
    }

    /// Checks the port and returns its numeric value.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrorKind::InvalidPort`] if the port is not a
    /// base-10 integer in `0..=65535`.
    fn validate_port(&self, port: &str) -> Result<u16, ValidationError> {
        parse_port(port)
    }
}

/// Checks for the non-authority components and the URI as a whole.
///
/// All checks accept anything by default.
pub trait ComponentRules: fmt::Debug + Send + Sync {
    /// Checks the path (without params).
    ///
    /// # Errors
    ///
    /// Returns a [`Component::Path`] error if the path is rejected.
    fn validate_path(&self, _path: &str) -> Result<(), ValidationError> {
        Ok(())
    }

    /// Checks the `;params` of the last path segment.
    ///
    /// # Errors
    ///
    /// Returns a [`Component::Params`] error if the params are rejected.
    fn validate_params(&self, _params: Option<&str>) -> Result<(), ValidationError> {
        Ok(())
    }

    /// Checks the query.
    ///
    /// # Errors
    ///
    /// Returns a [`Component::Query`] error if the query is rejected.
    fn validate_query(&self, _query: Option<&str>) -> Result<(), ValidationError> {
        Ok(())
    }

    /// Checks the fragment.
    ///
    /// # Errors
    ///
    /// Returns a [`Component::Fragment`] error if the fragment is rejected.
    fn validate_fragment(&self, _fragment: Option<&str>) -> Result<(), ValidationError> {
        Ok(())
    }

    /// Cross-component check, run after every individual component passed.
    ///
    /// # Errors
    ///
    /// Returns a [`Component::Uri`] error if the combination is rejected.
    fn validate_uri(&self, _parts: &UriParts<'_>) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Authority rules for host-based schemes such as `http` and `https`.
///
/// Userinfo and host are accepted as-is; the port must be in range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostAuthority;

impl AuthorityRules for HostAuthority {}

/// Component rules that accept every path, params, query and fragment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PermissiveComponents;

impl ComponentRules for PermissiveComponents {}

/// Parses a port as a base-10 integer in `0..=65535`.
///
/// # Errors
///
/// Returns [`ValidationErrorKind::InvalidPort`] if the text is empty, has
/// non-digit characters, or names a port above 65535.
///
/// # Examples
///
/// ```
/// use scheme_uri::parse_port;
///
/// assert_eq!(parse_port("443").unwrap(), 443);
/// assert!(parse_port("65536").is_err());
/// assert!(parse_port("abc").is_err());
/// ```
pub fn parse_port(port: &str) -> Result<u16, ValidationError> {
    let invalid = |reason: &'static str| {
        ValidationError::new(
            Component::Port,
            ValidationErrorKind::InvalidPort {
                value: port.to_string(),
                reason,
            },
        )
    };

    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("The port does not appear to be valid"));
    }

    // Digits only, so the only remaining failure is exceeding 65535
    port.parse::<u16>().map_err(|_| invalid("Port number out of range"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn port_reason(port: &str) -> Option<&'static str> {
        match parse_port(port) {
            Err(e) => match e.kind() {
                ValidationErrorKind::InvalidPort { reason, .. } => Some(*reason),
                _ => None,
            },
            Ok(_) => None,
        }
    }

    #[test]
    fn port_bounds() {
        assert_eq!(parse_port("0").unwrap(), 0);
        assert_eq!(parse_port("65535").unwrap(), 65535);
        assert_eq!(port_reason("65536"), Some("Port number out of range"));
        assert_eq!(port_reason("70000"), Some("Port number out of range"));
    }

    #[test]
    fn leading_zeros_are_decimal() {
        assert_eq!(parse_port("0080").unwrap(), 80);
    }

    #[test]
    fn huge_port_is_out_of_range() {
        assert_eq!(
            port_reason("99999999999999999999999"),
            Some("Port number out of range")
        );
    }

    #[test]
    fn non_numeric_port_is_invalid() {
        assert_eq!(port_reason("abc"), Some("The port does not appear to be valid"));
        assert_eq!(port_reason(""), Some("The port does not appear to be valid"));
        assert_eq!(port_reason("-1"), Some("The port does not appear to be valid"));
        assert_eq!(port_reason("+80"), Some("The port does not appear to be valid"));
        assert_eq!(port_reason(" 80"), Some("The port does not appear to be valid"));
    }

    #[test]
    fn port_error_names_port_component() {
        let err = parse_port("abc").unwrap_err();
        assert_eq!(err.component(), Component::Port);
    }

    #[test]
    fn host_authority_defaults_accept_anything() {
        assert!(HostAuthority.validate_userinfo("any thing!").is_ok());
        assert!(HostAuthority.validate_host("not a host").is_ok());
        assert_eq!(HostAuthority.validate_port("8080").unwrap(), 8080);
    }

    #[test]
    fn permissive_components_accept_anything() {
        let parts = UriParts::split("x://y/z");
        assert!(PermissiveComponents.validate_path("/ spaces ").is_ok());
        assert!(PermissiveComponents.validate_params(Some(";;")).is_ok());
        assert!(PermissiveComponents.validate_query(None).is_ok());
        assert!(PermissiveComponents.validate_fragment(Some("#")).is_ok());
        assert!(PermissiveComponents.validate_uri(&parts).is_ok());
    }
}
