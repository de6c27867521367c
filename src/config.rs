use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Environment prefix for layered settings, e.g. `HEALTHCONSULT_SERVER__PORT=8000`.
const ENV_PREFIX: &str = "HEALTHCONSULT";

/// Config file picked up from the working directory when none is given.
const CWD_CONFIG_FILE: &str = "config.yaml";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Address to bind
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Enable rate limiting
    #[arg(long, env = "RATE_LIMIT_ENABLED")]
    pub rate_limit_enabled: Option<bool>,

    /// Disable timeout middleware
    #[arg(long, env = "TIMEOUT_DISABLED")]
    pub timeout_disabled: Option<bool>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub resilience: ResilienceConfig,
    pub simulation: SimulationConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    /// Directory served under `/static`.
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ResilienceConfig {
    pub rate_limit_enabled: bool,
    pub timeout_disabled: bool,
    pub requests_per_second: f32,
    pub burst_size: f32,
    pub request_timeout_secs: u64,
}

/// Artificial latency standing in for a network round trip.
#[derive(Debug, Deserialize, Clone)]
pub struct SimulationConfig {
    pub chat_delay_ms: u64,
    pub contact_delay_ms: u64,
}

impl SimulationConfig {
    pub fn chat_delay(&self) -> Duration {
        Duration::from_millis(self.chat_delay_ms)
    }

    pub fn contact_delay(&self) -> Duration {
        Duration::from_millis(self.contact_delay_ms)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    pub idle_timeout_secs: u64,
    pub sweep_interval_secs: u64,
}

impl SessionConfig {
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs.max(1))
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Emit JSON lines instead of the compact text format.
    pub json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: 3000,
                host: "0.0.0.0".to_string(),
                static_dir: "static".to_string(),
            },
            resilience: ResilienceConfig {
                rate_limit_enabled: true,
                timeout_disabled: false,
                requests_per_second: 20.0,
                burst_size: 40.0,
                request_timeout_secs: 30,
            },
            simulation: SimulationConfig {
                chat_delay_ms: 1500,
                contact_delay_ms: 1500,
            },
            session: SessionConfig {
                idle_timeout_secs: 30 * 60,
                sweep_interval_secs: 60,
            },
            logging: LoggingConfig { json: false },
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    /// Build the configuration from defaults, an optional YAML file,
    /// `HEALTHCONSULT_*` variables and finally CLI flags.
    ///
    /// Priority: CLI flag > CLI env var > `HEALTHCONSULT_*` > config file > defaults.
    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("server.host", defaults.server.host)?
            .set_default("server.static_dir", defaults.server.static_dir)?
            .set_default(
                "resilience.rate_limit_enabled",
                defaults.resilience.rate_limit_enabled,
            )?
            .set_default(
                "resilience.timeout_disabled",
                defaults.resilience.timeout_disabled,
            )?
            .set_default(
                "resilience.requests_per_second",
                f64::from(defaults.resilience.requests_per_second),
            )?
            .set_default(
                "resilience.burst_size",
                f64::from(defaults.resilience.burst_size),
            )?
            .set_default(
                "resilience.request_timeout_secs",
                defaults.resilience.request_timeout_secs,
            )?
            .set_default("simulation.chat_delay_ms", defaults.simulation.chat_delay_ms)?
            .set_default(
                "simulation.contact_delay_ms",
                defaults.simulation.contact_delay_ms,
            )?
            .set_default(
                "session.idle_timeout_secs",
                defaults.session.idle_timeout_secs,
            )?
            .set_default(
                "session.sweep_interval_secs",
                defaults.session.sweep_interval_secs,
            )?
            .set_default("logging.json", defaults.logging.json)?;

        match &cli.config {
            Some(path) => {
                builder = builder.add_source(File::with_name(path).required(true));
            }
            None if Path::new(CWD_CONFIG_FILE).exists() => {
                builder = builder.add_source(File::with_name(CWD_CONFIG_FILE).required(false));
            }
            None => {}
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(rl) = cli.rate_limit_enabled {
            builder = builder.set_override("resilience.rate_limit_enabled", rl)?;
        }
        if let Some(td) = cli.timeout_disabled {
            builder = builder.set_override("resilience.timeout_disabled", td)?;
        }

        let cfg = builder.build()?;
        cfg.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_port() {
        let config = AppConfig::load_from_args(["healthconsult", "--port", "4100"]).unwrap();
        assert_eq!(config.server.port, 4100);
    }

    #[test]
    fn test_simulation_durations() {
        let config = AppConfig::default();
        assert_eq!(config.simulation.chat_delay(), Duration::from_millis(1500));
        assert_eq!(config.simulation.contact_delay(), Duration::from_millis(1500));
        assert_eq!(config.session.idle_timeout(), Duration::from_secs(1800));
    }
}
