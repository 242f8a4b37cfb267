//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use scheme_uri::prelude::*;
//!
//! let registry = Registry::from_config(&RegistryConfig::new().with_enabled_schemes(["https"]));
//! assert!(registry.validate("https://example.com/").is_ok());
//! ```

pub use crate::{
    // Entry points
    Registry, RegistryConfig, default_registry, validate,
    // Validators and capability units
    AuthorityRules, ComponentRules, HostAuthority, PermissiveComponents, SchemeValidator,
    // Parsed components
    AuthorityComponents, UriParts,
    // Errors
    Component, ValidationError, ValidationErrorKind,
};
