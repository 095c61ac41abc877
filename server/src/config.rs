use std::net::{IpAddr, SocketAddr};

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};

/// Command-line and environment settings for the `todo-server` binary.
///
/// Each flag falls back to an environment variable, which in turn may come
/// from a `.env` file loaded before parsing.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "todo-server",
    version,
    about = "In-memory TODO item service over HTTP"
)]
pub struct CliArgs {
    /// Interface to bind.
    ///
    /// Environment variable: `TODO_HOST`
    #[arg(long, env = "TODO_HOST", default_value_t = String::from("127.0.0.1"))]
    pub host: String,

    /// TCP port to listen on.
    ///
    /// Environment variable: `TODO_PORT`
    #[arg(long, env = "TODO_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Log output format.
    ///
    /// Environment variable: `TODO_LOG_FORMAT`
    #[arg(long, env = "TODO_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable, multi-line events.
    Pretty,
    /// One JSON object per event.
    Json,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub log_format: LogFormat,
}

impl TryFrom<CliArgs> for ServerConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.port == 0 {
            bail!("TODO_PORT must be greater than 0");
        }

        let ip: IpAddr = args
            .host
            .parse()
            .with_context(|| format!("TODO_HOST ({}) is not an IP address", args.host))?;

        Ok(Self {
            addr: SocketAddr::new(ip, args.port),
            log_format: args.log_format,
        })
    }
}
