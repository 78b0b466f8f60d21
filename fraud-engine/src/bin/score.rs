//! Transaction scorer binary
//!
//! Reads a transaction request as JSON (from a file argument or stdin),
//! scores it with the heuristic probability source, and prints the verdict
//! as JSON. Pass `--config <file.toml>` to override the default rule set.

use anyhow::Context;
use fraud_engine::{AlertPolicy, EngineConfig, FraudEngine, HeuristicModel, TransactionRequest};
use std::io::Read;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config_path: Option<PathBuf> = None;
    let mut input_path: Option<PathBuf> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args.next().context("--config requires a file path")?;
                config_path = Some(PathBuf::from(value));
            }
            "--help" | "-h" => {
                eprintln!("Usage: fraud-score [--config <file.toml>] [request.json]");
                return Ok(());
            }
            other => input_path = Some(PathBuf::from(other)),
        }
    }

    let config = match config_path {
        Some(path) => EngineConfig::from_file(&path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    let engine = FraudEngine::new(config)?;

    let raw = match input_path {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let request: TransactionRequest =
        serde_json::from_str(&raw).context("parsing transaction request")?;

    let verdict = engine
        .score_transaction(&request, &HeuristicModel::default())
        .await?;

    if let Some(alert) = AlertPolicy::on_non_approved().evaluate(&verdict) {
        tracing::warn!(message = %alert.message, "alert raised");
    }

    println!("{}", serde_json::to_string_pretty(&verdict)?);
    Ok(())
}
