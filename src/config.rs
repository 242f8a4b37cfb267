//! Construction-time registry configuration.

/// Configuration for a [`Registry`](crate::Registry).
///
/// # Examples
///
/// ```
/// use scheme_uri::{Registry, RegistryConfig};
///
/// let config = RegistryConfig::new().with_enabled_schemes(["https"]);
/// let registry = Registry::from_config(&config);
///
/// assert!(registry.validate("https://example.com/").is_ok());
/// assert!(registry.validate("http://example.com/").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct RegistryConfig {
    /// Schemes the registry accepts.
    ///
    /// `None` accepts every registered scheme.
    /// Default: None
    pub enabled_schemes: Option<Vec<String>>,

    /// Schemes the built-in validators refuse.
    ///
    /// Default: empty
    pub denied_schemes: Vec<String>,

    /// Maximum URI length in characters. `None` disables the check.
    ///
    /// Default: None
    pub max_length: Option<usize>,
}

impl RegistryConfig {
    /// Creates a new configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the registry to the given schemes.
    #[must_use]
    pub fn with_enabled_schemes<I, S>(mut self, schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enabled_schemes = Some(schemes.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the schemes the built-in validators refuse.
    #[must_use]
    pub fn with_denied_schemes<I, S>(mut self, schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.denied_schemes = schemes.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the maximum URI length.
    #[must_use]
    pub const fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Disables the length check.
    #[must_use]
    pub const fn without_max_length(mut self) -> Self {
        self.max_length = None;
        self
    }
}
