// crates/vouch-cli/src/commands/score.rs
//
// `vouch score <target>`: reputation score and summary for an address,
// globally or as seen by an observer.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use vouch_core::Address;
use vouch_reputation::{summarize, ReputationEngine, ReputationResult, Summary};

use super::{with_overrides, Context};
use crate::output::{format_fraction, format_json, format_table, OutputFormat};

/// Score command.
#[derive(Debug, Args)]
pub struct ScoreCmd {
    /// Address to score.
    #[arg()]
    pub target: String,

    /// Score as seen by this address, following its trust paths.
    #[arg(long)]
    pub observer: Option<String>,

    /// Maximum hops in a trust path (overrides config).
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Weight of transitive evidence in [0, 1] (overrides config).
    #[arg(long)]
    pub transitive_weight: Option<f64>,
}

/// A row in the summary table.
#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Address")]
    address: String,
    #[tabled(rename = "Score")]
    score: u8,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Confidence")]
    confidence: String,
    #[tabled(rename = "Belief")]
    belief: String,
    #[tabled(rename = "Disbelief")]
    disbelief: String,
    #[tabled(rename = "Uncertainty")]
    uncertainty: String,
    #[tabled(rename = "Direct")]
    direct: usize,
    #[tabled(rename = "Paths")]
    paths: usize,
}

/// A row in the trust path table.
#[derive(Tabled)]
struct PathRow {
    #[tabled(rename = "Hops")]
    hops: usize,
    #[tabled(rename = "Route")]
    route: String,
    #[tabled(rename = "Expectation")]
    expectation: String,
    #[tabled(rename = "Uncertainty")]
    uncertainty: String,
}

/// JSON shape of the score command's output.
#[derive(Serialize)]
struct ScoreReport<'a> {
    summary: &'a Summary,
    result: &'a ReputationResult,
}

/// Run the score command.
pub fn run(cmd: &ScoreCmd, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let options = with_overrides(&ctx.options, cmd.max_depth, cmd.transitive_weight);
    let engine = ReputationEngine::new(ctx.source.clone()).with_options(options)?;

    let target = Address::new(&cmd.target);
    let observer = cmd.observer.as_deref().map(Address::from);
    let result = engine.reputation_of(&target, observer.as_ref())?;
    let summary = summarize(&result);

    match ctx.format {
        OutputFormat::Json => {
            println!(
                "{}",
                format_json(&ScoreReport {
                    summary: &summary,
                    result: &result,
                })
            );
        }
        OutputFormat::Table => {
            println!("{}", format_table(&[summary_row(&result, &summary)]));
            if !result.paths.is_empty() {
                println!();
                println!("Trust paths from {}:", observer.map(|o| o.to_string()).unwrap_or_default());
                let rows: Vec<PathRow> = result
                    .paths
                    .iter()
                    .map(|p| PathRow {
                        hops: p.len(),
                        route: route_label(&p.addresses),
                        expectation: format_fraction(p.expectation()),
                        uncertainty: format_fraction(p.opinion.uncertainty),
                    })
                    .collect();
                println!("{}", format_table(&rows));
            }
        }
    }

    Ok(())
}

fn summary_row(result: &ReputationResult, summary: &Summary) -> SummaryRow {
    SummaryRow {
        address: result.target.to_string(),
        score: summary.score,
        category: summary.category.to_string(),
        confidence: format!("{}%", summary.confidence),
        belief: format!("{}%", summary.belief),
        disbelief: format!("{}%", summary.disbelief),
        uncertainty: format!("{}%", summary.uncertainty),
        direct: result.direct_count,
        paths: result.transitive_count,
    }
}

/// `a -> b -> c` using shortened addresses.
pub(crate) fn route_label(addresses: &[Address]) -> String {
    addresses
        .iter()
        .map(Address::short)
        .collect::<Vec<_>>()
        .join(" -> ")
}
