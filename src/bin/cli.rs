//! MCP Lab CLI
//!
//! Command-line client for listing and calling tools.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde_json::{json, Map, Value};

use mcp_lab::mcp::{methods, Dispatcher, McpRequest};

#[derive(Parser)]
#[command(name = "mcp-lab-cli")]
#[command(about = "MCP Lab command-line client")]
#[command(version)]
struct Cli {
    /// JSON-RPC endpoint URL
    #[arg(
        long,
        env = "MCP_LAB_ENDPOINT",
        default_value = "http://127.0.0.1:3000/api/mcp"
    )]
    endpoint: String,

    /// Dispatch in-process instead of calling the endpoint
    #[arg(long)]
    local: bool,

    /// Request id (a random UUID when omitted)
    #[arg(long)]
    id: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available tools
    List,
    /// Call a tool
    Call {
        /// Tool name
        tool: String,
        /// Argument as key=value (repeatable)
        #[arg(short, long = "arg", value_parser = parse_key_value)]
        args: Vec<(String, String)>,
        /// Arguments as a JSON object, merged under --arg values
        #[arg(long)]
        json: Option<String>,
    },
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{}'", s)),
    }
}

fn build_arguments(pairs: Vec<(String, String)>, raw: Option<&str>) -> anyhow::Result<Value> {
    let mut arguments = match raw {
        Some(raw) => match serde_json::from_str::<Value>(raw).context("invalid --json")? {
            Value::Object(map) => map,
            _ => bail!("--json must be a JSON object"),
        },
        None => Map::new(),
    };

    for (key, value) in pairs {
        arguments.insert(key, Value::String(value));
    }

    Ok(Value::Object(arguments))
}

fn build_request(id: String, command: Commands) -> anyhow::Result<McpRequest> {
    Ok(match command {
        Commands::List => McpRequest::new(id, methods::LIST_TOOLS, json!({})),
        Commands::Call { tool, args, json } => {
            let arguments = build_arguments(args, json.as_deref())?;
            McpRequest::new(
                id,
                methods::CALL_TOOL,
                json!({ "name": tool, "arguments": arguments }),
            )
        }
    })
}

#[cfg(feature = "client")]
async fn send_remote(endpoint: &str, request: &McpRequest) -> anyhow::Result<Value> {
    let response = reqwest::Client::new()
        .post(endpoint)
        .json(request)
        .send()
        .await
        .with_context(|| format!("request to {} failed", endpoint))?;

    let status = response.status();
    let body: Value = response
        .json()
        .await
        .with_context(|| format!("non-JSON response (HTTP {})", status))?;
    tracing::debug!(%status, "Received response");

    Ok(body)
}

#[cfg(not(feature = "client"))]
async fn send_remote(_endpoint: &str, _request: &McpRequest) -> anyhow::Result<Value> {
    bail!("built without the `client` feature; use --local")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let id = cli.id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    let request = build_request(id, cli.command)?;

    let response = if cli.local {
        let reply = Dispatcher::default().handle_request(request);
        serde_json::to_value(&reply.response)?
    } else {
        send_remote(&cli.endpoint, &request).await?
    };

    println!("{}", serde_json::to_string_pretty(&response)?);

    if response.get("error").is_some() {
        std::process::exit(1);
    }

    Ok(())
}
