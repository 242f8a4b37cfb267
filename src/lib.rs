//! Pluggable, per-scheme URI validation.
//!
//! This crate checks that a string is an acceptable URI for one of a set of
//! enabled schemes. A URI is split into its generic components and each
//! component is handed to an independently replaceable check.
//!
//! # Overview
//!
//! ```text
//! scheme://[userinfo@]host[:port]/path;params?query#fragment
//! ```
//!
//! Validation flows through four layers:
//!
//! | Layer | Type | Responsibility |
//! |-------|------|----------------|
//! | Entry point | [`validate`], [`Registry::validate`] | Raw string in, `Result` out |
//! | Registry | [`Registry`] | Allow-list and scheme lookup |
//! | Scheme validator | [`SchemeValidator`] | Ordered, fail-fast component checks |
//! | Capability units | [`AuthorityRules`], [`ComponentRules`] | The checks themselves |
//!
//! # Quick Start
//!
//! ```rust
//! use scheme_uri::{validate, ValidationErrorKind};
//!
//! assert!(validate("https://user@example.com:443/path?q=1#frag").is_ok());
//!
//! let err = validate("ftp://example.com/").unwrap_err();
//! assert!(matches!(err.kind(), ValidationErrorKind::SchemeNotAllowed { .. }));
//! assert_eq!(err.to_string(), "Scheme \"ftp\" is not allowed");
//! ```
//!
//! # Custom Schemes
//!
//! Schemes are assembled from capability units. Schemes that share
//! authority semantics share the same rules instance:
//!
//! ```rust
//! use std::sync::Arc;
//! use scheme_uri::{AuthorityRules, Component, Registry, SchemeValidator, ValidationError};
//!
//! #[derive(Debug)]
//! struct DottedHost;
//!
//! impl AuthorityRules for DottedHost {
//!     fn validate_host(&self, host: &str) -> Result<(), ValidationError> {
//!         if !host.contains('.') {
//!             return Err(ValidationError::rejected(Component::Host, "Enter a full host name"));
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let web = SchemeValidator::new().with_authority(Arc::new(DottedHost));
//! let registry = Registry::new()
//!     .register("http", web.clone())
//!     .register("https", web)
//!     .with_enabled_schemes(["https"]);
//!
//! assert!(registry.validate("https://example.com/").is_ok());
//! assert!(registry.validate("https://intranet/").is_err());
//! assert!(registry.validate("http://example.com/").is_err());
//! ```
//!
//! # Errors
//!
//! Every failure is a [`ValidationError`] naming the failing [`Component`]
//! and a [`ValidationErrorKind`]; its `Display` output is suitable for
//! showing next to a form field.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod authority;
mod config;
mod constants;
mod error;
pub mod prelude;
mod registry;
mod rules;
mod scheme;
mod uri;

pub use authority::AuthorityComponents;
pub use config::RegistryConfig;
pub use constants::{URI_FIELD_MAX_LENGTH, HTTP, HTTPS, MAX_PORT};
pub use error::{Component, ValidationError, ValidationErrorKind};
pub use registry::{Registry, default_registry, validate};
pub use rules::{AuthorityRules, ComponentRules, HostAuthority, PermissiveComponents, parse_port};
pub use scheme::SchemeValidator;
pub use uri::UriParts;
