//! CLI entrypoint for llm-ipsum
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::Result;
use clap::Parser;
use ipsum_application::{resolve_credentials, GenerateIpsumUseCase};
use ipsum_domain::GenerationRequest;
use ipsum_infrastructure::{OpenAiCompatGateway, ProcessEnv, ThreadRngPicker};
use ipsum_presentation::{Cli, Console, GenerationSpinner};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level. Logs go to stderr so
    // stdout stays reserved for the generated text.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting llm-ipsum");

    // Build the request from CLI parameters
    let request = GenerationRequest::new(cli.length)?
        .with_topic(cli.topic)
        .with_title(cli.title)
        .with_model(cli.model)
        .with_timeout_secs(cli.timeout)?;

    // Credentials resolve once, before anything touches the network.
    // A miss here is fatal and exits non-zero.
    let credentials = resolve_credentials(&ProcessEnv)?;

    // === Dependency Injection ===
    let gateway = Arc::new(OpenAiCompatGateway::new(credentials)?);
    let picker = Arc::new(ThreadRngPicker);
    let use_case = GenerateIpsumUseCase::new(gateway, picker);

    let spinner = (!cli.quiet).then(|| GenerationSpinner::start(&request.model));

    let result = use_case.execute(&request).await;

    if let Some(spinner) = spinner {
        spinner.finish();
    }

    match result {
        Ok(text) => Console::print_text(&text),
        // A failed completion skips printing; the run itself does not
        // signal failure.
        Err(e) => Console::print_error(e),
    }

    Ok(())
}
