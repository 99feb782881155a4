use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for endpoint-probe operations
pub type Result<T> = std::result::Result<T, ProbeError>;

/// Errors raised while setting up a probe run.
///
/// Individual probe failures never surface here; they are captured as
/// [`FetchError`] values and classified into report rows.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("General error: {message}")]
    General { message: String },
}

impl ProbeError {
    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }
}

/// Category of a certificate trust failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CertificateFault {
    /// Chain does not end in a trusted root (includes self-signed certificates)
    UnknownAuthority,
    /// Certificate is valid but not for the requested host name
    HostnameMismatch,
    /// Any other verification failure (expired, malformed, bad usage, ...)
    Invalid,
}

impl fmt::Display for CertificateFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::UnknownAuthority => "unknown authority",
            Self::HostnameMismatch => "hostname mismatch",
            Self::Invalid => "invalid certificate",
        };
        f.write_str(text)
    }
}

/// Transport-level failure of a single probe.
///
/// Errors nest the way they are produced by the network stack: the outermost
/// layer is usually [`FetchError::Url`], wrapping the lower-level cause. The
/// classifier searches the whole chain, so a DNS failure reported through the
/// URL layer is still recognised as a DNS failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// A deadline expired while dialing, handshaking or waiting for headers
    #[error("{message}")]
    Timeout { message: String },

    /// Host name resolution failed
    #[error("lookup {host}: {message}")]
    Dns { host: String, message: String },

    /// The peer certificate was rejected
    #[error("x509: {fault} ({message})")]
    Certificate {
        fault: CertificateFault,
        message: String,
    },

    /// Socket or connection level failure
    #[error("{op}: {message}")]
    Network { op: String, message: String },

    /// The URL layer failed to dispatch the request
    #[error("{op} \"{url}\": {source}")]
    Url {
        op: String,
        url: String,
        source: Box<FetchError>,
    },

    /// Anything the transport could not describe more precisely
    #[error("{0}")]
    Other(String),
}

impl FetchError {
    pub fn timeout<S: Into<String>>(message: S) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    pub fn dns<H: Into<String>, S: Into<String>>(host: H, message: S) -> Self {
        Self::Dns {
            host: host.into(),
            message: message.into(),
        }
    }

    pub fn certificate<S: Into<String>>(fault: CertificateFault, message: S) -> Self {
        Self::Certificate {
            fault,
            message: message.into(),
        }
    }

    pub fn network<O: Into<String>, S: Into<String>>(op: O, message: S) -> Self {
        Self::Network {
            op: op.into(),
            message: message.into(),
        }
    }

    /// Wrap `source` in a URL-layer error for the given operation and URL
    pub fn url<O: Into<String>, U: Into<String>>(op: O, url: U, source: FetchError) -> Self {
        Self::Url {
            op: op.into(),
            url: url.into(),
            source: Box::new(source),
        }
    }

    pub fn other<S: Into<String>>(message: S) -> Self {
        Self::Other(message.into())
    }

    /// Iterate over this error and every error it wraps, outermost first
    pub fn chain(&self) -> impl Iterator<Item = &FetchError> {
        std::iter::successors(Some(self), |err| match *err {
            Self::Url { source, .. } => Some(source.as_ref()),
            _ => None,
        })
    }

    /// Whether any layer of the chain is a timeout
    pub fn is_timeout(&self) -> bool {
        self.chain().any(|err| matches!(err, Self::Timeout { .. }))
    }

    /// First layer of the chain matching `predicate`
    pub fn find(&self, predicate: impl Fn(&FetchError) -> bool) -> Option<&FetchError> {
        self.chain().find(|err| predicate(*err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_error_display_wraps_inner_message() {
        let err = FetchError::url(
            "Get",
            "http://missing.example",
            FetchError::dns("missing.example", "no such host"),
        );

        assert_eq!(
            err.to_string(),
            "Get \"http://missing.example\": lookup missing.example: no such host"
        );
    }

    #[test]
    fn test_chain_walks_nested_layers() {
        let err = FetchError::url("Get", "http://a", FetchError::timeout("deadline elapsed"));
        let layers: Vec<_> = err.chain().collect();

        assert_eq!(layers.len(), 2);
        assert!(matches!(layers[1], FetchError::Timeout { .. }));
        assert!(err.is_timeout());
    }

    #[test]
    fn test_is_timeout_false_without_timeout_layer() {
        let err = FetchError::url("Get", "http://a", FetchError::network("dial", "refused"));
        assert!(!err.is_timeout());
        assert!(!FetchError::other("boom").is_timeout());
    }

    #[test]
    fn test_certificate_fault_display() {
        assert_eq!(CertificateFault::UnknownAuthority.to_string(), "unknown authority");
        assert_eq!(CertificateFault::HostnameMismatch.to_string(), "hostname mismatch");
        assert_eq!(CertificateFault::Invalid.to_string(), "invalid certificate");
    }
}
