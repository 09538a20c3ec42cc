// crates/vouch-cli/src/commands/mod.rs
//
// Command module declarations for the Vouch CLI.

pub mod graph;
pub mod paths;
pub mod score;

use vouch_core::MemorySource;
use vouch_reputation::ReputationOptions;

use crate::output::OutputFormat;

/// Everything a command needs: loaded attestations, engine options, and
/// the output format.
#[derive(Debug, Clone)]
pub struct Context {
    pub source: MemorySource,
    pub options: ReputationOptions,
    pub format: OutputFormat,
}

/// Apply command-line overrides on top of the configured options.
pub fn with_overrides(
    base: &ReputationOptions,
    max_depth: Option<usize>,
    transitive_weight: Option<f64>,
) -> ReputationOptions {
    let mut options = base.clone();
    if let Some(depth) = max_depth {
        options.max_path_depth = depth;
    }
    if let Some(weight) = transitive_weight {
        options.transitive_weight = weight;
    }
    options
}
