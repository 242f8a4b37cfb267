//! Property-based tests for the validation pipeline.
//!
//! These tests generate URIs and URI fragments from the authority grammar
//! and check that the registry accepts or rejects them with the expected
//! error kind.

use proptest::prelude::*;

use scheme_uri::{
    AuthorityComponents, MAX_PORT, Registry, UriParts, ValidationErrorKind, parse_port,
};

/// Strategies for generating grammar-conformant inputs.
mod strategies {
    use super::*;

    /// Generate a host label: 1-20 lowercase alphanumerics, inner hyphens allowed
    pub fn dns_label() -> impl Strategy<Value = String> {
        "[a-z0-9]([a-z0-9-]{0,18}[a-z0-9])?"
    }

    /// Generate a domain name of 1-4 labels
    pub fn domain() -> impl Strategy<Value = String> {
        prop::collection::vec(dns_label(), 1..=4).prop_map(|labels| labels.join("."))
    }

    /// Generate an IPv4 address
    pub fn ipv4() -> impl Strategy<Value = String> {
        (0u8..=255, 0u8..=255, 0u8..=255, 0u8..=255)
            .prop_map(|(a, b, c, d)| format!("{a}.{b}.{c}.{d}"))
    }

    /// Generate a bracketed IPv6 literal (full form only)
    pub fn ipv6_literal() -> impl Strategy<Value = String> {
        prop::collection::vec(0u16..=0xffff, 8).prop_map(|groups| {
            let addr = groups
                .iter()
                .map(|g| format!("{g:x}"))
                .collect::<Vec<_>>()
                .join(":");
            format!("[{addr}]")
        })
    }

    /// Generate any supported host
    pub fn host() -> impl Strategy<Value = String> {
        prop_oneof![
            8 => domain(),
            1 => ipv4(),
            1 => ipv6_literal(),
        ]
    }

    /// Generate userinfo free of authority and URI delimiters
    pub fn userinfo() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9._~!$&'()*,;=:-]{1,16}"
    }

    /// Generate a path of 0-4 segments
    pub fn path() -> impl Strategy<Value = String> {
        prop::collection::vec("[a-z0-9._-]{1,8}", 0..=4)
            .prop_map(|segments| segments.iter().map(|s| format!("/{s}")).collect())
    }

    /// Generate an optional `?query`
    pub fn query() -> impl Strategy<Value = String> {
        prop::option::of("[a-z0-9=&]{0,12}")
            .prop_map(|q| q.map(|q| format!("?{q}")).unwrap_or_default())
    }

    /// Generate an optional `#fragment`
    pub fn fragment() -> impl Strategy<Value = String> {
        prop::option::of("[a-z0-9-]{0,12}")
            .prop_map(|f| f.map(|f| format!("#{f}")).unwrap_or_default())
    }

    /// Generate a scheme other than http and https
    pub fn other_scheme() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9+.-]{0,10}".prop_filter("enabled scheme", |s| s != "http" && s != "https")
    }

    /// Generate a port above 65535
    pub fn out_of_range_port() -> impl Strategy<Value = u64> {
        (u64::from(MAX_PORT) + 1)..=u64::from(u32::MAX)
    }

    /// Generate non-numeric port text free of authority delimiters
    pub fn non_numeric_port() -> impl Strategy<Value = String> {
        "[a-zA-Z][a-zA-Z0-9]{0,8}"
    }
}

mod registry_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn schemes_outside_allow_list_are_rejected(scheme in other_scheme(), rest in "\\PC{0,64}") {
            let uri = format!("{scheme}:{rest}");
            let result = Registry::default().validate(&uri);
            prop_assert!(
                matches!(
                    result.as_ref().map_err(|e| e.kind()),
                    Err(ValidationErrorKind::SchemeNotAllowed { .. })
                ),
                "Expected SchemeNotAllowed for {}: {:?}", uri, result
            );
        }

        #[test]
        fn well_formed_http_uris_are_accepted(
            https in any::<bool>(),
            user in prop::option::of(userinfo()),
            host in host(),
            port in prop::option::of(0u16..=MAX_PORT),
            path in path(),
            query in query(),
            fragment in fragment(),
        ) {
            let scheme = if https { "https" } else { "http" };
            let user = user.map(|u| format!("{u}@")).unwrap_or_default();
            let port = port.map(|p| format!(":{p}")).unwrap_or_default();
            let uri = format!("{scheme}://{user}{host}{port}{path}{query}{fragment}");

            let result = Registry::default().validate(&uri);
            prop_assert!(result.is_ok(), "Rejected {}: {:?}", uri, result);
        }

        #[test]
        fn long_paths_are_not_length_limited(host in domain(), segment in "[a-z0-9]{200,400}") {
            let uri = format!("https://{host}/{segment}");
            let result = Registry::default().validate(&uri);
            prop_assert!(result.is_ok(), "Rejected {}: {:?}", uri, result);
        }

        #[test]
        fn out_of_range_ports_are_rejected(host in domain(), port in out_of_range_port()) {
            let uri = format!("https://{host}:{port}/");
            let result = Registry::default().validate(&uri);
            prop_assert!(
                matches!(
                    result.as_ref().map_err(|e| e.kind()),
                    Err(ValidationErrorKind::InvalidPort { .. })
                ),
                "Expected InvalidPort for {}: {:?}", uri, result
            );
        }

        #[test]
        fn non_numeric_ports_are_rejected(host in domain(), port in non_numeric_port()) {
            let uri = format!("http://{host}:{port}/");
            let result = Registry::default().validate(&uri);
            prop_assert!(
                matches!(
                    result.as_ref().map_err(|e| e.kind()),
                    Err(ValidationErrorKind::InvalidPort { .. })
                ),
                "Expected InvalidPort for {}: {:?}", uri, result
            );
        }

        #[test]
        fn validation_is_repeatable(uri in "\\PC{0,80}") {
            let registry = Registry::default();
            prop_assert_eq!(registry.validate(&uri), registry.validate(&uri));
        }
    }
}

mod component_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn every_port_in_range_parses(port in 0u16..=MAX_PORT) {
            prop_assert_eq!(parse_port(&port.to_string()).ok(), Some(port));
        }

        #[test]
        fn authorities_decompose(
            user in prop::option::of(userinfo()),
            host in host(),
            port in prop::option::of(0u16..=MAX_PORT),
        ) {
            let port = port.map(|p| p.to_string());
            let mut authority = String::new();
            if let Some(u) = &user {
                authority.push_str(u);
                authority.push('@');
            }
            authority.push_str(&host);
            if let Some(p) = &port {
                authority.push(':');
                authority.push_str(p);
            }

            let parsed = AuthorityComponents::parse(&authority);
            prop_assert!(parsed.is_ok(), "Failed to parse authority: {}", authority);
            let parsed = parsed.unwrap();
            prop_assert_eq!(parsed.userinfo(), user.as_deref());
            prop_assert_eq!(parsed.host(), host.as_str());
            prop_assert_eq!(parsed.port(), port.as_deref());
        }

        #[test]
        fn empty_host_is_malformed(port in 0u16..=MAX_PORT) {
            let authority = format!("@:{port}");
            let result = AuthorityComponents::parse(&authority);
            prop_assert!(
                matches!(
                    result.as_ref().map_err(|e| e.kind()),
                    Err(ValidationErrorKind::MalformedAuthority { .. })
                ),
                "Expected MalformedAuthority for {}", authority
            );
        }

        #[test]
        fn splitting_never_panics(uri in "\\PC{0,120}") {
            let parts = UriParts::split(&uri);
            prop_assert!(parts.path().len() <= uri.len());
        }
    }
}
