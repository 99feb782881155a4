use crate::cli::Cli;
use crate::error::{CliError, Result};
use crate::input;
use crate::progress::{format_duration, probe_progress_bar};
use crate::ui;
use endpoint_probe::{
    run_probe, InputSource, ProbeConfig, ProgressTracker, ReportRenderer, TableRenderer,
    DEFAULT_USER_AGENT,
};
use std::sync::Arc;
use std::time::Instant;
use tokio::runtime::Runtime;

pub fn execute(cli: Cli) -> Result<()> {
    let rt = Runtime::new()
        .map_err(|e| CliError::Other(format!("Failed to create async runtime: {}", e)))?;

    rt.block_on(execute_async(cli))
}

async fn execute_async(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    let source = InputSource::from_path(cli.file.clone());
    let urls = input::load_urls(&source)?;

    if cli.verbose {
        print_settings(&config, &source, urls.len());
    }

    let pb = Arc::new(probe_progress_bar(urls.len()));
    let pb_clone = Arc::clone(&pb);
    let started = Instant::now();

    let report = run_probe(
        config,
        urls,
        Some(Box::new(move |p: &ProgressTracker| {
            pb_clone.set_position(p.completed_requests() as u64);
        })),
    )
    .await?;

    pb.finish();

    if cli.verbose {
        ui::success_message(&format!(
            "{} sites checked in {}",
            report.rows.len(),
            format_duration(started.elapsed())
        ));
    }

    println!("\n");
    println!("{}", TableRenderer::new().render(&report));
    Ok(())
}

/// File settings (when `--config` is given) overlaid with the command line flags
pub fn resolve_config(cli: &Cli) -> Result<ProbeConfig> {
    let base = match &cli.config {
        Some(path) => ProbeConfig::load_from_file(path)?,
        None => ProbeConfig::default(),
    };
    Ok(base.merge(cli.probe_overrides()))
}

fn print_settings(config: &ProbeConfig, source: &InputSource, url_count: usize) {
    let input = match source {
        InputSource::File(path) => path.display().to_string(),
        InputSource::Stdin => "standard input".to_string(),
    };
    ui::info_message(&format!("Reading URLs from: {input}"));
    ui::info_message(&format!(
        "User agent: {}",
        config.user_agent_override().unwrap_or(DEFAULT_USER_AGENT)
    ));
    ui::info_message(&format!(
        "Timeout: {}",
        config
            .timeout_seconds
            .map(|secs| format!("{secs}s"))
            .unwrap_or_else(|| "none".to_string())
    ));
    ui::info_message(&format!(
        "Concurrency cap: {}",
        config
            .concurrency_limit()
            .map(|limit| limit.to_string())
            .unwrap_or_else(|| "unbounded".to_string())
    ));
    ui::status_message(&format!("Probing {url_count} sites"));
}
