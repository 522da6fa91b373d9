// src/app.rs
use std::io::Write;

use anyhow::{Context, Result};
use log::info;

use crate::config::{Config, Mode};
use crate::query::Outcome;
use crate::{demo, input, presentation};

/// Run the configured mode, writing results to `out`.
///
/// # Errors
///
/// Fails when a batch file cannot be loaded, when a query is rejected in
/// strict mode, or when writing the output fails.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    match &config.mode {
        Mode::Single(query) => {
            let outcome = query.clone().into_outcome(config.strict)?;
            presentation::write_outcome(out, &outcome, config.format).context("failed to emit output")?;
        }
        Mode::Batch(path) => {
            let queries = input::load_batch(path).with_context(|| format!("failed to load {}", path.display()))?;
            info!("running {} queries from {}", queries.len(), path.display());

            // called by path: anyhow::Context is the one in scope
            let outcomes = queries
                .into_iter()
                .enumerate()
                .map(|(i, query)| {
                    let outcome = query.into_outcome(config.strict);
                    range_sums_shared_kernel::ErrorContext::with_context(outcome, || format!("query #{}", i + 1))
                })
                .collect::<range_sums_shared_kernel::Result<Vec<Outcome>>>()?;
            presentation::write_batch(out, &outcomes, config.format).context("failed to emit output")?;
        }
        Mode::Demo => {
            let cases = demo::run_demo(config.strict)?;
            presentation::write_demo(out, &cases, config.format).context("failed to emit output")?;
        }
    }
    Ok(())
}
