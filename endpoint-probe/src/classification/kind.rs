use std::fmt;

/// Closed set of values of the `Status code` column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    Ok,
    MovedPermanently,
    Forbidden,
    NotFound,
    TooManyRequests,
    InternalServerError,
    BadGateway,
    /// HTTP response with a status outside the recognised set
    UnknownCode,
    Timeout,
    DnsError,
    TlsCert,
    NetOpError,
    UrlError,
    /// Catch-all for errors carrying no usable structure
    Unknown,
}

impl OutcomeKind {
    pub const ALL: [OutcomeKind; 14] = [
        Self::Ok,
        Self::MovedPermanently,
        Self::Forbidden,
        Self::NotFound,
        Self::TooManyRequests,
        Self::InternalServerError,
        Self::BadGateway,
        Self::UnknownCode,
        Self::Timeout,
        Self::DnsError,
        Self::TlsCert,
        Self::NetOpError,
        Self::UrlError,
        Self::Unknown,
    ];

    /// Token rendered in the report
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "200",
            Self::MovedPermanently => "301",
            Self::Forbidden => "403",
            Self::NotFound => "404",
            Self::TooManyRequests => "429",
            Self::InternalServerError => "500",
            Self::BadGateway => "502",
            Self::UnknownCode => "unknown code",
            Self::Timeout => "timeout",
            Self::DnsError => "dns_error",
            Self::TlsCert => "tls_cert",
            Self::NetOpError => "net_op_error",
            Self::UrlError => "url_error",
            Self::Unknown => "unknown",
        }
    }

    /// Parse a rendered token back into its kind
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == token)
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
