//! Server configuration from command-line flags and environment variables.

use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

const DEVELOPMENT: &str = "development";

/// Runtime configuration for the web server.
#[derive(Debug, Clone, Parser)]
#[command(name = "tunelith-web")]
#[command(about = "Tunelith website and contact form server")]
#[command(version)]
pub struct Config {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Address to bind
    #[arg(long, env = "HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Directory holding messages.txt and messages.json
    #[arg(long, env = "TUNELITH_DATA_DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// Deployment environment ("development" enables verbose diagnostics)
    #[arg(long = "env", env = "APP_ENV", default_value = "production")]
    pub environment: String,
}

impl Config {
    pub fn is_development(&self) -> bool {
        self.environment.eq_ignore_ascii_case(DEVELOPMENT)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Default tracing filter when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        if self.is_development() {
            "debug"
        } else {
            "info"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        Config::try_parse_from(std::iter::once("tunelith-web").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_explicit_flags() {
        let config = parse(&[
            "--port",
            "8080",
            "--host",
            "127.0.0.1",
            "--data-dir",
            "/var/lib/tunelith",
            "--env",
            "development",
        ]);

        assert_eq!(config.port, 8080);
        assert_eq!(config.socket_addr(), "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/tunelith"));
        assert!(config.is_development());
        assert_eq!(config.log_filter(), "debug");
    }

    #[test]
    fn test_production_is_not_development() {
        let config = parse(&["--env", "production"]);

        assert!(!config.is_development());
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_invalid_port_rejected() {
        let result = Config::try_parse_from(["tunelith-web", "--port", "99999"]);
        assert!(result.is_err());
    }
}
