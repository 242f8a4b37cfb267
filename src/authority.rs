//! Syntactic decomposition of a URI authority.
//!
//! # Grammar
//!
//! ```text
//! authority = [ userinfo "@" ] host [ ":" port ]
//! host      = "[" 1*( any char except "]" ) "]" / 1*( any char except ":" "@" "[" "]" )
//! port      = *( any char except ":" "@" )
//! ```
//!
//! Userinfo runs to the last `@`. The grammar only locates the pieces;
//! whether the host or port makes sense is decided by
//! [`AuthorityRules`](crate::AuthorityRules).

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Component, ValidationError, ValidationErrorKind};

static AUTHORITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:(?P<userinfo>.*)@)?(?P<host>\[[^\]]+\]|[^:@\[\]]+)(?::(?P<port>[^:@]*))?$",
    )
    .expect("authority pattern is valid")
});

/// The pieces of an authority, borrowed from the input.
///
/// # Examples
///
/// ```
/// use scheme_uri::AuthorityComponents;
///
/// let auth = AuthorityComponents::parse("user@example.com:8080").unwrap();
/// assert_eq!(auth.userinfo(), Some("user"));
/// assert_eq!(auth.host(), "example.com");
/// assert_eq!(auth.port(), Some("8080"));
///
/// let auth = AuthorityComponents::parse("[::1]").unwrap();
/// assert_eq!(auth.host(), "[::1]");
/// assert!(auth.port().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AuthorityComponents<'a> {
    userinfo: Option<&'a str>,
    host: &'a str,
    port: Option<&'a str>,
}

impl<'a> AuthorityComponents<'a> {
    /// Splits an authority into userinfo, host and port.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationErrorKind::MalformedAuthority`] error if:
    /// - The authority is empty or its host is empty
    /// - An IP literal bracket is unbalanced
    /// - Anything other than a port follows the host
    pub fn parse(input: &'a str) -> Result<Self, ValidationError> {
        let malformed = || {
            ValidationError::new(
                Component::Authority,
                ValidationErrorKind::MalformedAuthority {
                    authority: input.to_string(),
                },
            )
        };

        let caps = AUTHORITY_RE.captures(input).ok_or_else(malformed)?;
        let host = caps.name("host").ok_or_else(malformed)?.as_str();

        Ok(Self {
            userinfo: caps.name("userinfo").map(|m| m.as_str()),
            host,
            port: caps.name("port").map(|m| m.as_str()),
        })
    }

    /// Returns the userinfo, if an `@` was present.
    #[must_use]
    pub const fn userinfo(&self) -> Option<&'a str> {
        self.userinfo
    }

    /// Returns the host, including brackets for IP literals.
    #[must_use]
    pub const fn host(&self) -> &'a str {
        self.host
    }

    /// Returns the raw port text, if a `:` followed the host.
    #[must_use]
    pub const fn port(&self) -> Option<&'a str> {
        self.port
    }
}

impl fmt::Display for AuthorityComponents<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(userinfo) = self.userinfo {
            write!(f, "{userinfo}@")?;
        }
        f.write_str(self.host)?;
        if let Some(port) = self.port {
            write!(f, ":{port}")?;
        }
        Ok(())
    }
}
