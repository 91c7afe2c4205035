mod cli;
mod terminal;

use std::io::{self, IsTerminal};

use anyhow::Context;
use clap::Parser;
use query_submitter::{
    QueryForm, QuerySubmitter, config::default_config::config_from_env,
    health_service::HealthService, telemetry,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{cli::Args, terminal::TerminalOutput};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; the environment may already be set.
    dotenvy::dotenv().ok();

    let args = Args::parse();

    tracing_subscriber::registry()
        .with(telemetry::cli_filter(args.verbose))
        .with(telemetry::stderr_layer())
        .init();

    if !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let cfg = args.apply(config_from_env()?);

    if args.check {
        let health = HealthService::new(cfg.timeout_secs)?;
        let status = health.check(&cfg.endpoint).await;
        println!("{}", serde_json::to_string_pretty(&status)?);
        anyhow::ensure!(status.ok, "search server at {} is not healthy", cfg.endpoint);
        return Ok(());
    }

    let question = args
        .question
        .clone()
        .context("a question is required unless --check is given")?;
    let mut form = QueryForm::new(question);
    if let Some(subject) = &args.subject {
        form = form.with_subject(subject.clone());
    }

    let submitter = QuerySubmitter::new(cfg)?;
    let output = TerminalOutput::new(args.raw);

    match submitter.submit(&form, &output).await {
        Ok(_) => Ok(()),
        Err(e) => {
            output.abandon();
            Err(e).with_context(|| format!("query to {} failed", submitter.url()))
        }
    }
}
