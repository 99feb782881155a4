use clap::Parser;
use endpoint_probe::ProbeConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ping_endpoints")]
#[command(
    author,
    version,
    about = "Check a list of endpoints concurrently and report how each one answered"
)]
pub struct Cli {
    /// User-Agent header to send (empty keeps the default browser agent)
    #[clap(short, long)]
    pub agent: Option<String>,

    /// Newline-delimited file of URLs (defaults to standard input)
    #[clap(short, long)]
    pub file: Option<PathBuf>,

    /// Optional TOML configuration file
    #[clap(short, long)]
    pub config: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[clap(short, long)]
    pub timeout: Option<u64>,

    /// Maximum number of requests in flight at once
    #[clap(short, long = "max-concurrent", value_parser = clap::value_parser!(u64).range(1..))]
    pub max_concurrent: Option<u64>,

    /// Enable verbose output with the effective settings
    #[clap(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    /// Settings given on the command line; unset flags stay `None`
    pub fn probe_overrides(&self) -> ProbeConfig {
        ProbeConfig {
            user_agent: self.agent.clone(),
            timeout_seconds: self.timeout,
            max_concurrent_requests: self.max_concurrent.map(|n| n as usize),
            follow_redirects: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_read_stdin() {
        let cli = Cli::try_parse_from(["ping_endpoints"]).unwrap();
        assert!(cli.file.is_none());
        assert!(cli.agent.is_none());
        assert!(!cli.verbose);
        assert_eq!(cli.probe_overrides(), ProbeConfig::default());
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from([
            "ping_endpoints",
            "-a",
            "sweeper/0.1",
            "-f",
            "urls.txt",
            "-t",
            "5",
            "-m",
            "8",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.file, Some(PathBuf::from("urls.txt")));
        assert!(cli.verbose);

        let overrides = cli.probe_overrides();
        assert_eq!(overrides.user_agent.as_deref(), Some("sweeper/0.1"));
        assert_eq!(overrides.timeout_seconds, Some(5));
        assert_eq!(overrides.max_concurrent_requests, Some(8));
    }

    #[test]
    fn test_long_flags() {
        let cli = Cli::try_parse_from([
            "ping_endpoints",
            "--agent",
            "",
            "--file",
            "list.txt",
            "--config",
            "ping.toml",
            "--max-concurrent",
            "2",
        ])
        .unwrap();

        assert_eq!(cli.agent.as_deref(), Some(""));
        assert_eq!(cli.config, Some(PathBuf::from("ping.toml")));
        assert_eq!(cli.max_concurrent, Some(2));
        assert!(cli.probe_overrides().user_agent_override().is_none());
    }

    #[test]
    fn test_zero_concurrency_is_rejected() {
        assert!(Cli::try_parse_from(["ping_endpoints", "-m", "0"]).is_err());
    }

    #[test]
    fn test_non_numeric_timeout_is_rejected() {
        assert!(Cli::try_parse_from(["ping_endpoints", "--timeout", "soon"]).is_err());
    }
}
