// crates/vouch-cli/src/commands/graph.rs
//
// `vouch graph`: attesters in the attestation graph with the number of
// active attestations each issued and their mean trust level.

use serde::Serialize;
use tabled::Tabled;
use vouch_core::AttestationSource;
use vouch_reputation::AttestationGraph;

use super::Context;
use crate::output::{format_json, format_table, OutputFormat};

/// A row in the graph display table.
#[derive(Tabled, Serialize)]
struct AttesterRow {
    #[tabled(rename = "Attester")]
    attester: String,
    #[tabled(rename = "Issued")]
    issued: usize,
    #[tabled(rename = "Mean Trust")]
    mean_trust: String,
}

fn attester_rows(graph: &AttestationGraph) -> Vec<AttesterRow> {
    graph
        .attesters()
        .into_iter()
        .map(|attester| {
            let issued = graph.attestations_from(attester);
            let total: u32 = issued
                .iter()
                .map(|a| u32::from(a.clamped_trust_level()))
                .sum();
            let mean = if issued.is_empty() {
                0.0
            } else {
                f64::from(total) / issued.len() as f64
            };
            AttesterRow {
                attester: attester.to_string(),
                issued: issued.len(),
                mean_trust: format!("{:.1}", mean),
            }
        })
        .collect()
}

/// Run the graph command.
pub fn run(ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let graph = AttestationGraph::build(&ctx.source.all_attestations()?);
    let rows = attester_rows(&graph);

    match ctx.format {
        OutputFormat::Json => println!("{}", format_json(&rows)),
        OutputFormat::Table => {
            println!(
                "Attestation graph: {} attesters, {} active attestations, {} subjects",
                graph.attester_count(),
                graph.edge_count(),
                graph.subjects().len()
            );
            println!();
            println!("{}", format_table(&rows));
        }
    }

    Ok(())
}
