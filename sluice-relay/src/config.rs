//! Configuration for the sluice relay server.
//!
//! Layered with the following priority (highest first):
//! 1. CLI arguments
//! 2. Environment variables (via clap `env` attributes)
//! 3. TOML config file (`~/.config/sluice-relay/config.toml`)
//! 4. Compiled defaults

use std::path::PathBuf;
use std::time::Duration;

/// Errors that can occur when loading relay configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),
}

// ---------------------------------------------------------------------------
// TOML file structs (all fields Option for partial overrides)
// ---------------------------------------------------------------------------

/// Top-level TOML config file structure.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ConfigFile {
    server: ServerFileConfig,
    limits: LimitsFileConfig,
    timeouts: TimeoutsFileConfig,
}

/// `[server]` section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ServerFileConfig {
    bind_addr: Option<String>,
}

/// `[limits]` section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct LimitsFileConfig {
    max_rooms: Option<usize>,
    max_rooms_per_ip: Option<usize>,
    max_frame_size: Option<usize>,
    outbox_capacity: Option<usize>,
}

/// `[timeouts]` section, all values in seconds.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct TimeoutsFileConfig {
    idle_secs: Option<u64>,
    write_stall_secs: Option<u64>,
    join_handshake_secs: Option<u64>,
    empty_room_grace_secs: Option<u64>,
    shutdown_ceiling_secs: Option<u64>,
}

// ---------------------------------------------------------------------------
// CLI arguments
// ---------------------------------------------------------------------------

/// Arguments for the `serve` subcommand.
#[derive(clap::Args, Debug, Default)]
pub struct ServeArgs {
    /// Address to bind the relay server to (host:port).
    #[arg(short, long, env = "SLUICE_ADDR")]
    pub bind: Option<String>,

    /// Port to listen on; overrides the port part of the bind address.
    #[arg(short, long, env = "SLUICE_PORT")]
    pub port: Option<u16>,

    /// Maximum number of live rooms across the relay (0 disables the cap).
    #[arg(long)]
    pub max_rooms: Option<usize>,

    /// Maximum number of live rooms opened from one source address
    /// (0 disables the cap).
    #[arg(long)]
    pub max_rooms_per_ip: Option<usize>,

    /// Log level filter (trace, debug, info, warn, error).
    #[arg(long, default_value = "info", env = "SLUICE_LOG")]
    pub log_level: String,

    /// Path to config file (default: `~/.config/sluice-relay/config.toml`).
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// Resolved configuration
// ---------------------------------------------------------------------------

/// Fully resolved relay server configuration.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Address to bind the server to (e.g., `0.0.0.0:9600`).
    pub bind_addr: String,
    /// Relay-wide live room cap. 0 disables the check.
    pub max_rooms: usize,
    /// Per-source-address live room cap. 0 disables the check.
    pub max_rooms_per_ip: usize,
    /// Ceiling on a single encoded frame, in bytes.
    pub max_frame_size: usize,
    /// Bound on each endpoint's outbound frame queue.
    pub outbox_capacity: usize,
    /// Transports idle beyond this are closed.
    pub idle_timeout: Duration,
    /// How long a full outbox may stall a sender before the slow endpoint
    /// is terminated.
    pub write_stall_timeout: Duration,
    /// Deadline from transport accept to a successful `join`.
    pub join_handshake_timeout: Duration,
    /// Empty rooms older than this are reaped.
    pub empty_room_grace: Duration,
    /// Hard ceiling on graceful shutdown.
    pub shutdown_ceiling: Duration,
    /// Log level filter string.
    pub log_level: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:9600".to_string(),
            max_rooms: 1024,
            max_rooms_per_ip: 16,
            max_frame_size: 1024 * 1024,
            outbox_capacity: 64,
            idle_timeout: Duration::from_secs(120),
            write_stall_timeout: Duration::from_secs(30),
            join_handshake_timeout: Duration::from_secs(15),
            empty_room_grace: Duration::from_secs(5),
            shutdown_ceiling: Duration::from_secs(10),
            log_level: "info".to_string(),
        }
    }
}

impl RelayConfig {
    /// Load configuration by merging CLI args, env vars, and a TOML file.
    ///
    /// If `--config` is given and the file does not exist, returns an error.
    /// Without `--config` the default path is tried and a missing file is
    /// treated as empty config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the explicit config file cannot be read
    /// or parsed.
    pub fn load(cli: &ServeArgs) -> Result<Self, ConfigError> {
        let file = load_config_file(cli.config.as_deref())?;
        Ok(Self::resolve(cli, &file))
    }

    /// Resolve a `RelayConfig` from CLI args and a parsed config file.
    ///
    /// Priority: CLI > file > default.
    #[must_use]
    fn resolve(cli: &ServeArgs, file: &ConfigFile) -> Self {
        let defaults = Self::default();

        let mut bind_addr = cli
            .bind
            .clone()
            .or_else(|| file.server.bind_addr.clone())
            .unwrap_or(defaults.bind_addr);
        if let Some(port) = cli.port {
            bind_addr = replace_port(&bind_addr, port);
        }

        let secs = |cli_less: Option<u64>, default: Duration| {
            cli_less.map_or(default, Duration::from_secs)
        };

        Self {
            bind_addr,
            max_rooms: cli
                .max_rooms
                .or(file.limits.max_rooms)
                .unwrap_or(defaults.max_rooms),
            max_rooms_per_ip: cli
                .max_rooms_per_ip
                .or(file.limits.max_rooms_per_ip)
                .unwrap_or(defaults.max_rooms_per_ip),
            max_frame_size: file
                .limits
                .max_frame_size
                .unwrap_or(defaults.max_frame_size),
            outbox_capacity: file
                .limits
                .outbox_capacity
                .unwrap_or(defaults.outbox_capacity),
            idle_timeout: secs(file.timeouts.idle_secs, defaults.idle_timeout),
            write_stall_timeout: secs(
                file.timeouts.write_stall_secs,
                defaults.write_stall_timeout,
            ),
            join_handshake_timeout: secs(
                file.timeouts.join_handshake_secs,
                defaults.join_handshake_timeout,
            ),
            empty_room_grace: secs(
                file.timeouts.empty_room_grace_secs,
                defaults.empty_room_grace,
            ),
            shutdown_ceiling: secs(
                file.timeouts.shutdown_ceiling_secs,
                defaults.shutdown_ceiling,
            ),
            log_level: cli.log_level.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Swap the port component of a `host:port` address string.
fn replace_port(addr: &str, port: u16) -> String {
    addr.rsplit_once(':')
        .map_or_else(|| format!("{addr}:{port}"), |(host, _)| format!("{host}:{port}"))
}

/// Load and parse a TOML config file.
fn load_config_file(explicit_path: Option<&std::path::Path>) -> Result<ConfigFile, ConfigError> {
    let path = if let Some(p) = explicit_path {
        let contents = std::fs::read_to_string(p).map_err(|e| ConfigError::ReadFile {
            path: p.to_path_buf(),
            source: e,
        })?;
        return Ok(toml::from_str(&contents)?);
    } else {
        let Some(config_dir) = dirs::config_dir() else {
            return Ok(ConfigFile::default());
        };
        config_dir.join("sluice-relay").join("config.toml")
    };

    match std::fs::read_to_string(&path) {
        Ok(contents) => Ok(toml::from_str(&contents)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ConfigFile::default()),
        Err(e) => Err(ConfigError::ReadFile { path, source: e }),
    }
}
