//! Scheme registry and the top-level entry point.

use std::collections::{BTreeMap, BTreeSet};

use once_cell::sync::Lazy;
use tracing::{debug, trace};

use crate::config::RegistryConfig;
use crate::constants::{HTTP, HTTPS};
use crate::error::{Component, ValidationError, ValidationErrorKind};
use crate::scheme::SchemeValidator;
use crate::uri::UriParts;

static DEFAULT_REGISTRY: Lazy<Registry> = Lazy::new(Registry::default);

/// Validates a URI against the default registry.
///
/// The default registry enables `http` and `https`, both backed by one
/// shared [`SchemeValidator::host_based`], and places no limit on length.
///
/// # Errors
///
/// Returns a [`ValidationError`] describing the first check that failed.
///
/// # Examples
///
/// ```
/// use scheme_uri::{validate, ValidationErrorKind};
///
/// assert!(validate("https://user@example.com:443/path?q=1#frag").is_ok());
///
/// let err = validate("https://example.com:notaport/").unwrap_err();
/// assert!(matches!(err.kind(), ValidationErrorKind::InvalidPort { .. }));
/// ```
pub fn validate(uri: &str) -> Result<(), ValidationError> {
    DEFAULT_REGISTRY.validate(uri)
}

/// Returns the registry used by [`validate`].
#[must_use]
pub fn default_registry() -> &'static Registry {
    &DEFAULT_REGISTRY
}

/// Maps scheme names to validators and holds the enabled-scheme allow-list.
///
/// A registry is assembled up front and then only read, so one instance can
/// serve any number of threads.
///
/// # Examples
///
/// ```
/// use scheme_uri::{Registry, SchemeValidator, ValidationErrorKind};
///
/// let registry = Registry::new()
///     .register("http", SchemeValidator::host_based())
///     .register("mailto", SchemeValidator::new());
///
/// assert!(registry.validate("mailto:someone@example.com").is_ok());
///
/// let err = registry.validate("ftp://example.com/").unwrap_err();
/// assert!(matches!(err.kind(), ValidationErrorKind::SchemeNotAllowed { .. }));
/// ```
#[derive(Debug, Clone)]
pub struct Registry {
    validators: BTreeMap<String, SchemeValidator>,
    enabled: Option<BTreeSet<String>>,
    max_length: Option<usize>,
}

impl Registry {
    /// Creates an empty registry with no length limit.
    #[must_use]
    pub fn new() -> Self {
        Self {
            validators: BTreeMap::new(),
            enabled: None,
            max_length: None,
        }
    }

    /// Builds the `http`/`https` registry described by `config`.
    ///
    /// Both schemes share one validator, and therefore one set of
    /// authority rules.
    #[must_use]
    pub fn from_config(config: &RegistryConfig) -> Self {
        let validator = config
            .denied_schemes
            .iter()
            .fold(SchemeValidator::host_based(), |v, scheme| {
                v.deny_scheme(scheme.as_str())
            });

        let mut registry = Self::new()
            .register(HTTP, validator.clone())
            .register(HTTPS, validator)
            .with_max_length(config.max_length);
        if let Some(enabled) = &config.enabled_schemes {
            registry = registry.with_enabled_schemes(enabled.iter().map(String::as_str));
        }
        registry
    }

    /// Registers a validator for `scheme`, replacing any previous one.
    #[must_use]
    pub fn register(mut self, scheme: impl Into<String>, validator: SchemeValidator) -> Self {
        self.validators
            .insert(scheme.into().to_ascii_lowercase(), validator);
        self
    }

    /// Restricts accepted schemes to `schemes`.
    ///
    /// Without this call every registered scheme is accepted. Schemes may be
    /// enabled without a validator; such URIs fail with
    /// [`ValidationErrorKind::NoValidatorAvailable`].
    #[must_use]
    pub fn with_enabled_schemes<I, S>(mut self, schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enabled = Some(
            schemes
                .into_iter()
                .map(|s| s.into().to_ascii_lowercase())
                .collect(),
        );
        self
    }

    /// Sets the maximum URI length in characters; `None` disables the check.
    #[must_use]
    pub const fn with_max_length(mut self, max: Option<usize>) -> Self {
        self.max_length = max;
        self
    }

    /// Returns true if URIs with this (lowercase) scheme pass the allow-list.
    #[must_use]
    pub fn is_enabled(&self, scheme: &str) -> bool {
        match &self.enabled {
            Some(enabled) => enabled.contains(scheme),
            None => self.validators.contains_key(scheme),
        }
    }

    /// Returns the accepted schemes in sorted order.
    #[must_use]
    pub fn enabled_schemes(&self) -> Vec<&str> {
        match &self.enabled {
            Some(enabled) => enabled.iter().map(String::as_str).collect(),
            None => self.validators.keys().map(String::as_str).collect(),
        }
    }

    /// Returns the validator registered for `scheme`.
    #[must_use]
    pub fn get(&self, scheme: &str) -> Option<&SchemeValidator> {
        self.validators.get(scheme)
    }

    /// Returns the configured maximum length.
    #[must_use]
    pub const fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    /// Validates a raw URI.
    ///
    /// The scheme is checked against the allow-list, then a validator is
    /// looked up, then the length limit applies, and finally the scheme's
    /// own sequence runs.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] with:
    /// - `SchemeNotAllowed` if the scheme is not enabled
    /// - `NoValidatorAvailable` if the scheme is enabled but unregistered
    /// - `TooLong` if the URI exceeds the maximum length
    /// - otherwise the first failure from the scheme validator
    pub fn validate(&self, uri: &str) -> Result<(), ValidationError> {
        let parts = UriParts::split(uri);
        let result = self.validate_parts(uri, &parts);

        // Userinfo may hold credentials, so only the scheme is logged
        match &result {
            Ok(()) => trace!(scheme = parts.scheme(), "uri accepted"),
            Err(e) => debug!(
                scheme = parts.scheme(),
                component = %e.component(),
                kind = e.kind().name(),
                "uri rejected: {e}"
            ),
        }
        result
    }

    fn validate_parts(&self, uri: &str, parts: &UriParts<'_>) -> Result<(), ValidationError> {
        let scheme = parts.scheme();
        if !self.is_enabled(scheme) {
            return Err(ValidationError::new(
                Component::Scheme,
                ValidationErrorKind::SchemeNotAllowed {
                    scheme: scheme.to_string(),
                },
            ));
        }

        let validator = self.get(scheme).ok_or_else(|| {
            ValidationError::new(
                Component::Scheme,
                ValidationErrorKind::NoValidatorAvailable {
                    scheme: scheme.to_string(),
                },
            )
        })?;

        if let Some(max) = self.max_length {
            let actual = uri.chars().count();
            if actual > max {
                return Err(ValidationError::new(
                    Component::Uri,
                    ValidationErrorKind::TooLong { max, actual },
                ));
            }
        }

        validator.validate(parts)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::from_config(&RegistryConfig::default())
    }
}
