use crate::classification::kind::OutcomeKind;
use crate::error::{CertificateFault, FetchError};
use crate::types::ProbeResponse;

/// Detail attached to every timeout outcome
pub const TIMEOUT_DETAIL: &str = "network timeout (dial/tls/headers/total)";

/// Classify the result of a single probe.
///
/// A response always wins over error inspection; the `Result` guarantees that
/// exactly one of the two is present.
pub fn classify(result: &Result<ProbeResponse, FetchError>) -> (OutcomeKind, String) {
    match result {
        Ok(response) => {
            let (kind, detail) = classify_status(response.status);
            (kind, detail.to_string())
        }
        Err(err) => classify_error(err),
    }
}

/// Map an HTTP status code to its kind and detail
pub fn classify_status(status: u16) -> (OutcomeKind, &'static str) {
    match status {
        200 => (OutcomeKind::Ok, "OK"),
        301 => (OutcomeKind::MovedPermanently, "Moved permanently"),
        403 => (OutcomeKind::Forbidden, "Forbidden"),
        404 => (OutcomeKind::NotFound, "Not Found"),
        429 => (OutcomeKind::TooManyRequests, "Too many requests"),
        500 => (OutcomeKind::InternalServerError, "Internal server error"),
        502 => (OutcomeKind::BadGateway, "Bad gateway"),
        _ => (OutcomeKind::UnknownCode, "unknown"),
    }
}

/// Map a transport error to its kind and detail.
///
/// Checks run from most to least specific over the whole error chain, since
/// resolver and TLS failures usually arrive wrapped in a URL-layer error.
pub fn classify_error(err: &FetchError) -> (OutcomeKind, String) {
    if err.is_timeout() {
        return (OutcomeKind::Timeout, TIMEOUT_DETAIL.to_string());
    }

    if let Some(dns) = err.find(|e| matches!(e, FetchError::Dns { .. })) {
        return (OutcomeKind::DnsError, dns.to_string());
    }

    for (fault, detail) in [
        (CertificateFault::UnknownAuthority, "x509: unknown authority"),
        (CertificateFault::HostnameMismatch, "x509: hostname mismatch"),
        (CertificateFault::Invalid, "x509: invalid certificate"),
    ] {
        let found = err.find(|e| matches!(e, FetchError::Certificate { fault: f, .. } if *f == fault));
        if found.is_some() {
            return (OutcomeKind::TlsCert, detail.to_string());
        }
    }

    if let Some(FetchError::Network { message, .. }) =
        err.find(|e| matches!(e, FetchError::Network { .. }))
    {
        return (OutcomeKind::NetOpError, message.clone());
    }

    if let Some(FetchError::Url { op, url, source }) =
        err.find(|e| matches!(e, FetchError::Url { .. }))
    {
        return (OutcomeKind::UrlError, format!("{op} {url}: {source}"));
    }

    (OutcomeKind::Unknown, err.to_string())
}
