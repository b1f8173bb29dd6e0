//! Rank freight forwarders read from stdin.
//!
//! ```bash
//! printf 'name,cost,time,reliability,risk\nKuehne + Nagel,4.61,5.2,92,8\nDHL Express,5.21,6.0,88,15\n' \
//!     | oracle --preset emergency --format report
//! ```

mod input;
mod report;

use std::{
    fs,
    io::{stdin, stdout, Write as _},
    path::PathBuf,
};

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use forwarder_ranking::{rank, Preset, RankedResult, Weights};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "oracle",
    version,
    about = "Rank freight forwarders by cost, time, reliability and risk",
    long_about = "Reads `name,cost,time,reliability,risk` lines from stdin and ranks the \
        forwarders with TOPSIS, reporting a truth / indeterminacy / falsity breakdown for each."
)]
struct Cli {
    /// Start from a named weighting instead of the default weights
    #[arg(long, conflicts_with = "weights")]
    preset: Option<Preset>,

    /// Read weights from a JSON file with `cost`, `time`, `reliability` and `risk` keys
    #[arg(long)]
    weights: Option<PathBuf>,

    /// Override the cost weight
    #[arg(long)]
    cost: Option<f64>,

    /// Override the transit time weight
    #[arg(long)]
    time: Option<f64>,

    /// Override the reliability weight
    #[arg(long)]
    reliability: Option<f64>,

    /// Override the risk weight
    #[arg(long)]
    risk: Option<f64>,

    #[arg(long, value_enum, default_value_t = Format::Verdict)]
    format: Format,

    /// Closing line appended to the verdict and narration
    #[arg(long)]
    invocation: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// Winner with its confidence breakdown, followed by the full ranking
    Verdict,
    Ranking,
    /// Criteria weights and per-forwarder distances
    Report,
    /// Text for a speech synthesizer announcing the winner
    Narration,
    Json,
}

impl Cli {
    fn weights(&self) -> anyhow::Result<Weights> {
        let mut weights = match (&self.weights, self.preset) {
            (Some(path), _) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading weights from {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing weights from {}", path.display()))?
            }
            (None, Some(preset)) => preset.weights(),
            (None, None) => Weights::default(),
        };
        weights.cost = self.cost.unwrap_or(weights.cost);
        weights.time = self.time.unwrap_or(weights.time);
        weights.reliability = self.reliability.unwrap_or(weights.reliability);
        weights.risk = self.risk.unwrap_or(weights.risk);
        Ok(weights)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "oracle=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let weights = cli.weights()?;
    let forwarders = input::read_forwarders(stdin().lock())?;
    if forwarders.is_empty() {
        warn!("no forwarders on stdin");
    }
    let results = rank(&forwarders, &weights).context("ranking forwarders")?;
    if let Some(winner) = results.first() {
        info!(
            forwarders = results.len(),
            winner = %winner.name,
            score = %winner.score,
            digest = %winner.digest,
            "ranked"
        );
    }

    let out = render(cli.format, &weights, &results, cli.invocation.as_deref())?;
    stdout().lock().write_all(out.as_bytes())?;
    Ok(())
}

fn render(
    format: Format,
    weights: &Weights,
    results: &[RankedResult],
    invocation: Option<&str>,
) -> anyhow::Result<String> {
    let mut out = String::new();
    match format {
        Format::Verdict => {
            report::verdict(&mut out, results, invocation)?;
            out.push('\n');
            report::ranking(&mut out, results)?;
        }
        Format::Ranking => report::ranking(&mut out, results)?,
        // Weights are only validated once there is something to rank.
        Format::Report if results.is_empty() => report::verdict(&mut out, results, None)?,
        Format::Report => {
            let criteria = weights.criteria().context("building criteria from weights")?;
            report::analysis(&mut out, &criteria, results)?
        }
        Format::Narration => report::narration(&mut out, results, invocation)?,
        Format::Json => {
            out = serde_json::to_string_pretty(&report::json(results))?;
            out.push('\n');
        }
    }
    Ok(out)
}
