//! Per-scheme validation sequence.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::authority::AuthorityComponents;
use crate::error::{Component, ValidationError, ValidationErrorKind};
use crate::rules::{AuthorityRules, ComponentRules, HostAuthority, PermissiveComponents};
use crate::uri::UriParts;

/// Validates a decomposed URI for one scheme.
///
/// Checks run in a fixed order and stop at the first failure:
///
/// 1. scheme (deny-list)
/// 2. authority: parse, then userinfo, host, port
/// 3. path, params, query, fragment
/// 4. the URI as a whole
///
/// Authority checks only run when authority rules are installed. Clones
/// share their rules, so one [`HostAuthority`] can back several schemes.
///
/// # Examples
///
/// ```
/// use scheme_uri::{SchemeValidator, ValidationErrorKind};
///
/// let http = SchemeValidator::host_based();
/// assert!(http.validate_str("http://user@example.com:8080/a?b#c").is_ok());
///
/// let err = http.validate_str("http://example.com:99999/").unwrap_err();
/// assert!(matches!(err.kind(), ValidationErrorKind::InvalidPort { .. }));
/// ```
#[derive(Debug, Clone)]
pub struct SchemeValidator {
    denied_schemes: BTreeSet<String>,
    authority: Option<Arc<dyn AuthorityRules>>,
    components: Arc<dyn ComponentRules>,
}

impl SchemeValidator {
    /// Creates a validator with no authority rules and permissive components.
    #[must_use]
    pub fn new() -> Self {
        Self {
            denied_schemes: BTreeSet::new(),
            authority: None,
            components: Arc::new(PermissiveComponents),
        }
    }

    /// Creates a validator for host-based schemes like `http`.
    ///
    /// The authority is required and checked with [`HostAuthority`].
    #[must_use]
    pub fn host_based() -> Self {
        Self::new().with_authority(Arc::new(HostAuthority))
    }

    /// Installs authority rules. The authority becomes required.
    #[must_use]
    pub fn with_authority(mut self, rules: Arc<dyn AuthorityRules>) -> Self {
        self.authority = Some(rules);
        self
    }

    /// Replaces the path, params, query, fragment and whole-URI rules.
    #[must_use]
    pub fn with_components(mut self, rules: Arc<dyn ComponentRules>) -> Self {
        self.components = rules;
        self
    }

    /// Adds a scheme this validator refuses even when the registry allows it.
    #[must_use]
    pub fn deny_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.denied_schemes.insert(scheme.into().to_ascii_lowercase());
        self
    }

    /// Returns the installed authority rules, if any.
    #[must_use]
    pub const fn authority_rules(&self) -> Option<&Arc<dyn AuthorityRules>> {
        self.authority.as_ref()
    }

    /// Returns the component rules.
    #[must_use]
    pub const fn component_rules(&self) -> &Arc<dyn ComponentRules> {
        &self.components
    }

    /// Returns the deny-listed schemes.
    #[must_use]
    pub fn denied_schemes(&self) -> impl Iterator<Item = &str> {
        self.denied_schemes.iter().map(String::as_str)
    }

    /// Checks the scheme against the deny-list.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrorKind::DisallowedScheme`] if the scheme is denied.
    pub fn validate_scheme(&self, scheme: &str) -> Result<(), ValidationError> {
        if self.denied_schemes.contains(scheme) {
            return Err(ValidationError::new(
                Component::Scheme,
                ValidationErrorKind::DisallowedScheme {
                    scheme: scheme.to_string(),
                },
            ));
        }
        Ok(())
    }

    /// Parses and checks the authority.
    ///
    /// Returns `Ok(None)` without looking at the input when no authority
    /// rules are installed. A missing authority is treated as empty.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrorKind::MalformedAuthority`] if the authority
    /// does not parse, otherwise the first userinfo, host or port failure.
    pub fn validate_authority<'a>(
        &self,
        authority: Option<&'a str>,
    ) -> Result<Option<AuthorityComponents<'a>>, ValidationError> {
        let Some(rules) = &self.authority else {
            return Ok(None);
        };

        let components = AuthorityComponents::parse(authority.unwrap_or(""))?;
        if let Some(userinfo) = components.userinfo() {
            rules.validate_userinfo(userinfo)?;
        }
        rules.validate_host(components.host())?;
        if let Some(port) = components.port() {
            rules.validate_port(port)?;
        }

        Ok(Some(components))
    }

    /// Runs the full sequence over an already split URI.
    ///
    /// # Errors
    ///
    /// Returns the first failing component's error.
    pub fn validate(&self, parts: &UriParts<'_>) -> Result<(), ValidationError> {
        self.validate_scheme(parts.scheme())?;
        self.validate_authority(parts.authority())?;
        self.components.validate_path(parts.path())?;
        self.components.validate_params(parts.params())?;
        self.components.validate_query(parts.query())?;
        self.components.validate_fragment(parts.fragment())?;
        self.components.validate_uri(parts)
    }

    /// Splits `uri` and runs the full sequence.
    ///
    /// No registry allow-list applies here.
    ///
    /// # Errors
    ///
    /// Returns the first failing component's error.
    pub fn validate_str(&self, uri: &str) -> Result<(), ValidationError> {
        self.validate(&UriParts::split(uri))
    }
}

impl Default for SchemeValidator {
    fn default() -> Self {
        Self::new()
    }
}
