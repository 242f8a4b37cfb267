//! Generic URI decomposition.

use std::borrow::Cow;

/// A URI split into its generic components.
///
/// Splitting never fails: anything that is not recognisably a component
/// ends up in the path, and component-level problems are left for the
/// validators to report.
///
/// # Structure
///
/// ```text
/// scheme://authority/path;params?query#fragment
/// ```
///
/// # Examples
///
/// ```
/// use scheme_uri::UriParts;
///
/// let parts = UriParts::split("HTTPS://user@example.com:443/a/b;v=1?q=1#top");
/// assert_eq!(parts.scheme(), "https");
/// assert_eq!(parts.authority(), Some("user@example.com:443"));
/// assert_eq!(parts.path(), "/a/b");
/// assert_eq!(parts.params(), Some("v=1"));
/// assert_eq!(parts.query(), Some("q=1"));
/// assert_eq!(parts.fragment(), Some("top"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriParts<'a> {
    scheme: Cow<'a, str>,
    authority: Option<&'a str>,
    path: &'a str,
    params: Option<&'a str>,
    query: Option<&'a str>,
    fragment: Option<&'a str>,
}

impl<'a> UriParts<'a> {
    /// Splits a URI into scheme, authority, path, params, query and fragment.
    ///
    /// The scheme is lowercased and is empty when none is present.
    #[must_use]
    pub fn split(input: &'a str) -> Self {
        let (scheme, rest) = Self::split_scheme(input);
        let (authority, rest) = Self::split_authority(rest);
        let (rest, fragment) = rest
            .split_once('#')
            .map_or((rest, None), |(r, f)| (r, Some(f)));
        let (rest, query) = rest
            .split_once('?')
            .map_or((rest, None), |(r, q)| (r, Some(q)));
        let (path, params) = Self::split_params(rest);

        Self {
            scheme,
            authority,
            path,
            params,
            query,
            fragment,
        }
    }

    /// Returns the lowercased scheme, or `""` if none.
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Returns the authority if the URI has a `//` section.
    ///
    /// `Some("")` means the section is present but empty (`https:///path`).
    #[must_use]
    pub const fn authority(&self) -> Option<&'a str> {
        self.authority
    }

    /// Returns the path without params.
    #[must_use]
    pub const fn path(&self) -> &'a str {
        self.path
    }

    /// Returns the `;params` of the last path segment, without the `;`.
    #[must_use]
    pub const fn params(&self) -> Option<&'a str> {
        self.params
    }

    /// Returns the query, without the `?`.
    #[must_use]
    pub const fn query(&self) -> Option<&'a str> {
        self.query
    }

    /// Returns the fragment, without the `#`.
    #[must_use]
    pub const fn fragment(&self) -> Option<&'a str> {
        self.fragment
    }

    fn split_scheme(input: &'a str) -> (Cow<'a, str>, &'a str) {
        let Some(colon_idx) = input.find(':') else {
            return (Cow::Borrowed(""), input);
        };
        let scheme = &input[..colon_idx];
        let rest = &input[colon_idx + 1..];

        if scheme.is_empty() || !scheme.chars().all(Self::is_scheme_char) {
            return (Cow::Borrowed(""), input);
        }

        // `host:8080` style input: a purely numeric remainder is a port, not a scheme
        if !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()) {
            return (Cow::Borrowed(""), input);
        }

        let scheme = if scheme.chars().any(|c| c.is_ascii_uppercase()) {
            Cow::Owned(scheme.to_ascii_lowercase())
        } else {
            Cow::Borrowed(scheme)
        };
        (scheme, rest)
    }

    fn split_authority(input: &'a str) -> (Option<&'a str>, &'a str) {
        let Some(rest) = input.strip_prefix("//") else {
            return (None, input);
        };
        let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
        (Some(&rest[..end]), &rest[end..])
    }

    fn split_params(input: &'a str) -> (&'a str, Option<&'a str>) {
        // Only the last segment carries params
        let last_segment_start = input.rfind('/').unwrap_or(0);
        match input[last_segment_start..].find(';') {
            Some(idx) => {
                let semi_idx = last_segment_start + idx;
                (&input[..semi_idx], Some(&input[semi_idx + 1..]))
            }
            None => (input, None),
        }
    }

    const fn is_scheme_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')
    }
}
