//! MCP Lab server
//!
//! Run with: mcp-lab-server [--transport http|stdio]

use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mcp_lab::config::{ServerConfig, Transport, VersionPolicy, DEFAULT_BIND};
use mcp_lab::http::HttpServer;
use mcp_lab::mcp::{Dispatcher, McpServer};

#[derive(Parser, Debug)]
#[command(name = "mcp-lab-server")]
#[command(about = "JSON-RPC tool server exposing the MCP Lab demo tools")]
#[command(version)]
struct Args {
    /// Transport to serve on (http or stdio)
    #[arg(long, env = "MCP_LAB_TRANSPORT", default_value = "http")]
    transport: Transport,

    /// HTTP bind address
    #[arg(long, env = "MCP_LAB_BIND", default_value = DEFAULT_BIND)]
    bind: String,

    /// Reject requests that omit the "jsonrpc" field
    #[arg(long, env = "MCP_LAB_REQUIRE_VERSION")]
    require_version: bool,

    /// Allow cross-origin requests from any origin
    #[arg(long, env = "MCP_LAB_CORS")]
    cors: bool,

    /// Log output format
    #[arg(long, env = "MCP_LAB_LOG_FORMAT", value_enum, default_value = "text")]
    log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

impl Args {
    fn into_config(self) -> mcp_lab::Result<ServerConfig> {
        Ok(ServerConfig {
            transport: self.transport,
            bind: ServerConfig::parse_bind(&self.bind)?,
            version_policy: if self.require_version {
                VersionPolicy::Required
            } else {
                VersionPolicy::IfPresent
            },
            cors: self.cors,
        })
    }
}

fn init_logging(format: LogFormat) {
    // Always stderr: stdout carries protocol traffic in stdio mode
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log_format);

    let config = args.into_config()?;
    tracing::info!(
        version = mcp_lab::VERSION,
        transport = ?config.transport,
        version_policy = ?config.version_policy,
        "MCP Lab server starting..."
    );

    match config.transport {
        Transport::Stdio => {
            let server = McpServer::new(Dispatcher::new(config.version_policy));
            server.run()?;
        }
        Transport::Http => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(HttpServer::new(&config).start())?;
        }
    }

    Ok(())
}
