// crates/vouch-cli/src/commands/paths.rs
//
// `vouch paths <observer> <target>`: list the trust paths the engine would
// use, with the opinion each one transmits.

use clap::Args;
use tabled::Tabled;
use vouch_core::{Address, AttestationSource};
use vouch_reputation::{AttestationGraph, PathFinder};

use super::score::route_label;
use super::{with_overrides, Context};
use crate::output::{format_fraction, format_json, format_table, OutputFormat};

/// Trust path listing command.
#[derive(Debug, Args)]
pub struct PathsCmd {
    /// Address the paths start from.
    #[arg()]
    pub observer: String,

    /// Address the paths lead to.
    #[arg()]
    pub target: String,

    /// Maximum hops in a trust path (overrides config).
    #[arg(long)]
    pub max_depth: Option<usize>,
}

/// A row in the path listing.
#[derive(Tabled)]
struct PathRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Hops")]
    hops: usize,
    #[tabled(rename = "Route")]
    route: String,
    #[tabled(rename = "Belief")]
    belief: String,
    #[tabled(rename = "Disbelief")]
    disbelief: String,
    #[tabled(rename = "Uncertainty")]
    uncertainty: String,
    #[tabled(rename = "Expectation")]
    expectation: String,
}

/// Run the paths command.
pub fn run(cmd: &PathsCmd, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let options = with_overrides(&ctx.options, cmd.max_depth, None);
    options.validate()?;

    let graph = AttestationGraph::build(&ctx.source.all_attestations()?);
    let observer = Address::new(&cmd.observer);
    let target = Address::new(&cmd.target);
    let routes = PathFinder::new(&graph, options.max_path_depth)
        .with_model(options.evidence_model())
        .with_max_paths(options.max_paths)
        .routes(&observer, &target);

    match ctx.format {
        OutputFormat::Json => println!("{}", format_json(&routes)),
        OutputFormat::Table => {
            if routes.is_empty() {
                println!(
                    "No trust paths from {} to {} within {} hops.",
                    observer, target, options.max_path_depth
                );
                return Ok(());
            }
            let rows: Vec<PathRow> = routes
                .iter()
                .enumerate()
                .map(|(i, p)| PathRow {
                    index: i + 1,
                    hops: p.len(),
                    route: route_label(&p.addresses),
                    belief: format_fraction(p.opinion.belief),
                    disbelief: format_fraction(p.opinion.disbelief),
                    uncertainty: format_fraction(p.opinion.uncertainty),
                    expectation: format_fraction(p.expectation()),
                })
                .collect();
            println!("{}", format_table(&rows));
        }
    }

    Ok(())
}
