//! Error types for URI validation.

use std::fmt;

use thiserror::Error;

/// The part of a URI a check was run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Component {
    /// The URI as a whole
    Uri,
    /// The scheme (`https`)
    Scheme,
    /// The full authority (`user@host:port`)
    Authority,
    /// The userinfo before `@`
    Userinfo,
    /// The host
    Host,
    /// The port after `:`
    Port,
    /// The path
    Path,
    /// The `;params` of the last path segment
    Params,
    /// The query after `?`
    Query,
    /// The fragment after `#`
    Fragment,
}

impl Component {
    /// Returns the lowercase component name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Uri => "uri",
            Self::Scheme => "scheme",
            Self::Authority => "authority",
            Self::Userinfo => "userinfo",
            Self::Host => "host",
            Self::Port => "port",
            Self::Path => "path",
            Self::Params => "params",
            Self::Query => "query",
            Self::Fragment => "fragment",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Specific validation failures.
///
/// The `Display` output is phrased for end users of a form field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationErrorKind {
    /// Scheme is not in the registry's enabled set
    #[error("Scheme \"{scheme}\" is not allowed")]
    SchemeNotAllowed {
        /// The rejected scheme
        scheme: String,
    },
    /// Scheme is enabled but nothing is registered for it
    #[error("No validator is available for scheme \"{scheme}\"")]
    NoValidatorAvailable {
        /// The scheme without a validator
        scheme: String,
    },
    /// Authority does not match `[userinfo@]host[:port]`
    #[error("This does not appear to be a valid URL")]
    MalformedAuthority {
        /// The authority that failed to parse
        authority: String,
    },
    /// Port is not a base-10 integer or is out of range
    #[error("{reason}")]
    InvalidPort {
        /// The invalid value
        value: String,
        /// Reason for invalidity
        reason: &'static str,
    },
    /// Scheme is on a scheme validator's deny-list
    #[error("\"{scheme}\" is not a valid scheme for this validator")]
    DisallowedScheme {
        /// The denied scheme
        scheme: String,
    },
    /// URI exceeds the configured maximum length
    #[error("Ensure this value has at most {max} characters (it has {actual})")]
    TooLong {
        /// Maximum allowed length
        max: usize,
        /// Actual length
        actual: usize,
    },
    /// A scheme-specific rule rejected the component
    #[error("{reason}")]
    Rejected {
        /// Reason given by the rule
        reason: String,
    },
}

impl ValidationErrorKind {
    /// Returns the variant name, stable across message wording changes.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SchemeNotAllowed { .. } => "scheme_not_allowed",
            Self::NoValidatorAvailable { .. } => "no_validator_available",
            Self::MalformedAuthority { .. } => "malformed_authority",
            Self::InvalidPort { .. } => "invalid_port",
            Self::DisallowedScheme { .. } => "disallowed_scheme",
            Self::TooLong { .. } => "too_long",
            Self::Rejected { .. } => "rejected",
        }
    }
}

/// A failed validation: which component failed and why.
///
/// # Examples
///
/// ```
/// use scheme_uri::{Component, Registry, ValidationErrorKind};
///
/// let err = Registry::default().validate("ftp://example.com/").unwrap_err();
/// assert_eq!(err.component(), Component::Scheme);
/// assert!(matches!(err.kind(), ValidationErrorKind::SchemeNotAllowed { .. }));
/// assert_eq!(err.to_string(), "Scheme \"ftp\" is not allowed");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ValidationError {
    component: Component,
    kind: ValidationErrorKind,
}

impl ValidationError {
    /// Creates an error for the given component.
    #[must_use]
    pub const fn new(component: Component, kind: ValidationErrorKind) -> Self {
        Self { component, kind }
    }

    /// Creates a [`ValidationErrorKind::Rejected`] error, for use by custom rules.
    ///
    /// # Examples
    ///
    /// ```
    /// use scheme_uri::{Component, ValidationError};
    ///
    /// let err = ValidationError::rejected(Component::Host, "Host must be public");
    /// assert_eq!(err.to_string(), "Host must be public");
    /// ```
    #[must_use]
    pub fn rejected(component: Component, reason: impl Into<String>) -> Self {
        Self::new(
            component,
            ValidationErrorKind::Rejected {
                reason: reason.into(),
            },
        )
    }

    /// Returns the component that failed.
    #[must_use]
    pub const fn component(&self) -> Component {
        self.component
    }

    /// Returns the specific failure.
    #[must_use]
    pub const fn kind(&self) -> &ValidationErrorKind {
        &self.kind
    }

    /// Returns the user-facing message.
    #[must_use]
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ValidationError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("ValidationError", 3)?;
        state.serialize_field("component", &self.component)?;
        state.serialize_field("kind", self.kind.name())?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}
