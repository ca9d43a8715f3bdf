use std::io::Read;

use anyhow::Context;
use clap::Parser;
use credibility_scorer::{
    analyze::{display_tier, AnalysisClient},
    config::{AppConfig, ClientConfig},
    logging, AnalysisSession, ScoreBundle, FALLBACK_NOTICE,
};

#[derive(Parser)]
#[command(
    name = "credibility_check",
    about = "Score a news snippet via the remote analyzer, falling back to the local heuristic",
    version
)]
struct Cli {
    /// Text to analyze (reads stdin if none provided)
    text: Vec<String>,

    /// Analyzer base URL; overrides the config file
    #[arg(long, env = "CREDIBILITY_API_BASE")]
    api_base: Option<String>,

    /// Whole-request timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Print the result bundle as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    logging::init_cli_tracing("warn");

    let cli = Cli::parse();
    let client_cfg = client_config(&cli)?;

    let raw = if cli.text.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("reading stdin")?;
        input
    } else {
        cli.text.join(" ")
    };

    let session = AnalysisSession::new(AnalysisClient::from_config(&client_cfg)?);
    let Some(outcome) = session.submit(&raw).await? else {
        // A single submission is never superseded.
        return Ok(());
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome.bundle)?);
    } else {
        print!("{}", render_report(&outcome.bundle));
    }
    if outcome.used_fallback {
        eprintln!("{FALLBACK_NOTICE}");
    }
    Ok(())
}

fn client_config(cli: &Cli) -> anyhow::Result<ClientConfig> {
    let mut cfg = AppConfig::load()?.client;
    if let Some(base) = &cli.api_base {
        cfg.base_url = base.clone();
    }
    if cli.timeout_ms.is_some() {
        cfg.timeout_ms = cli.timeout_ms;
    }
    Ok(cfg)
}

fn render_report(b: &ScoreBundle) -> String {
    format!(
        "Credibility: {:.0}/100 ({}) [{}]\n  language {:>5.1}  {}\n  facts    {:>5.1}  {}\n  source   {:>5.1}  {}\n",
        b.overall_score.round(),
        b.reliability_label,
        display_tier(b.overall_score).as_str(),
        b.language_score,
        b.language_analysis,
        b.fact_score,
        b.fact_analysis,
        b.source_score,
        b.source_analysis,
    )
}
