//! Translation of reqwest failures into the structural [`FetchError`] tree.
//!
//! reqwest only exposes a handful of coarse predicates (`is_timeout`,
//! `is_connect`, `is_builder`); resolver, TLS and socket causes are buried in
//! the `source()` chain as hyper, native-tls/rustls and `std::io` errors. The
//! chain below the reqwest layer is walked outermost first and the first
//! recognisable layer wins. The reqwest layer itself is never matched on, since
//! its message embeds the requested URL.

use crate::error::{CertificateFault, FetchError};
use std::error::Error as StdError;

/// Operation name recorded on URL-layer errors
const GET_OP: &str = "Get";

/// Map a reqwest error for `url` into a URL-layer [`FetchError`]
pub fn map_reqwest_error(url: &str, err: &reqwest::Error) -> FetchError {
    let host = err
        .url()
        .and_then(|u| u.host_str())
        .map(str::to_string)
        .or_else(|| host_of(url))
        .unwrap_or_default();

    let op = if err.is_connect() { "dial" } else { "read" };

    let cause = if err.is_timeout() {
        FetchError::timeout(root_message(err))
    } else if let Some(cause) = err
        .source()
        .and_then(|source| map_source_chain(source, &host, op))
    {
        cause
    } else if err.is_connect() {
        FetchError::network(op, root_message(err))
    } else {
        FetchError::other(root_message(err))
    };

    FetchError::url(GET_OP, url, cause)
}

/// Recognise DNS, certificate, timeout and socket causes in an error chain.
///
/// Keyword matching ignores `host`, which resolver and certificate messages
/// often quote. Returns `None` when no layer carries enough structure to
/// classify.
pub fn map_source_chain(
    err: &(dyn StdError + 'static),
    host: &str,
    op: &str,
) -> Option<FetchError> {
    let host_needle = host.to_lowercase();
    let mut current = Some(err);

    while let Some(layer) = current {
        let message = layer.to_string();
        let mut lower = message.to_lowercase();
        if !host_needle.is_empty() {
            lower = lower.replace(&host_needle, "");
        }

        if let Some(fault) = certificate_fault(&lower) {
            return Some(FetchError::certificate(fault, message));
        }

        if is_dns_failure(&lower) {
            return Some(FetchError::dns(host, root_message(layer)));
        }

        if let Some(io) = layer.downcast_ref::<std::io::Error>() {
            if io.kind() == std::io::ErrorKind::TimedOut {
                return Some(FetchError::timeout(message));
            }
            // An io layer may still wrap a resolver or TLS error further down.
            if io.get_ref().is_none() {
                return Some(FetchError::network(op, message));
            }
        }

        current = layer.source();
    }

    None
}

fn certificate_fault(lower: &str) -> Option<CertificateFault> {
    const UNKNOWN_AUTHORITY: &[&str] = &[
        "unknownissuer",
        "unknown issuer",
        "unable to get local issuer certificate",
        "self signed certificate",
        "self-signed certificate",
        "unknown ca",
    ];
    const HOSTNAME_MISMATCH: &[&str] = &[
        "notvalidforname",
        "not valid for name",
        "hostname mismatch",
        "certificate is not valid for",
    ];
    const INVALID: &[&str] = &[
        "invalid peer certificate",
        "certificate verify failed",
        "certificate has expired",
        "bad certificate",
    ];

    let contains_any = |needles: &[&str]| needles.iter().any(|needle| lower.contains(needle));

    if contains_any(UNKNOWN_AUTHORITY) {
        Some(CertificateFault::UnknownAuthority)
    } else if contains_any(HOSTNAME_MISMATCH) {
        Some(CertificateFault::HostnameMismatch)
    } else if contains_any(INVALID) {
        Some(CertificateFault::Invalid)
    } else {
        None
    }
}

fn is_dns_failure(lower: &str) -> bool {
    lower.contains("dns error")
        || lower.contains("failed to lookup address")
        || lower.contains("name or service not known")
        || lower.contains("no such host")
        || lower.contains("nodename nor servname")
}

/// Message of the innermost error in the chain
fn root_message(err: &(dyn StdError + 'static)) -> String {
    let mut root = err;
    while let Some(source) = root.source() {
        root = source;
    }
    root.to_string()
}

fn host_of(url: &str) -> Option<String> {
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
}
