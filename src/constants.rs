//! Constants for URI validation.

/// Length of the credential form's URI field, in characters.
///
/// Registries do not limit length unless asked to; this is the usual value
/// passed to [`Registry::with_max_length`](crate::Registry::with_max_length).
pub const URI_FIELD_MAX_LENGTH: usize = 200;

/// Highest valid port number.
pub const MAX_PORT: u16 = u16::MAX;

/// The `http` scheme.
pub const HTTP: &str = "http";

/// The `https` scheme.
pub const HTTPS: &str = "https";
