mod args;
mod parsers;
mod value_enum;

pub use args::{Args, Command};
pub use parsers::ValueList;
pub use value_enum::CliOutputFormat;

use clap::Parser;
use range_sums_shared_kernel::{PresentationError, Result};

use crate::config::{Config, ConfigBuilder, Mode};
use crate::query::Query;

/// `--strict` でのみ検査する（バッチ入力はクエリ評価時に検査）
fn validate_bound(strict: bool, lower: i64, upper: i64) -> Result<()> {
    if strict && lower > upper {
        return Err(PresentationError::InvalidValue {
            flag: "--lower".to_string(),
            value: lower.to_string(),
            reason: format!("must not exceed --upper ({upper}) in strict mode"),
        }
        .into());
    }
    Ok(())
}

fn make_mode(command: Command) -> Mode {
    match command {
        Command::RangeSum { values, lower, upper } => Mode::Single(Query::RangeSum { values: values.0, lower, upper }),
        Command::SubarraySum { values, k } => Mode::Single(Query::SubarraySum { values: values.0, k }),
        Command::PivotIndex { values } => Mode::Single(Query::PivotIndex { values: values.0 }),
        Command::Batch { path } => Mode::Batch(path),
        Command::Demo => Mode::Demo,
    }
}

/// Parse CLI arguments and materialise a [`Config`].
///
/// # Errors
///
/// Returns `Err` when the parsed arguments are invalid or when the
/// `Config` cannot be built from them.
pub fn load_config() -> Result<Config> {
    let args = Args::parse();
    build_config(args)
}

/// Convert parsed CLI arguments into a run configuration.
///
/// # Errors
///
/// Returns `Err` when `--strict` is set and `--lower` exceeds `--upper`, or
/// when the builder rejects the resolved options.
pub fn build_config(args: Args) -> Result<Config> {
    if let Command::RangeSum { lower, upper, .. } = &args.command {
        validate_bound(args.strict, *lower, *upper)?;
    }

    let config = ConfigBuilder::default()
        .format(args.format)
        .strict(args.strict)
        .mode(make_mode(args.command))
        .build()
        .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()))?;
    Ok(config)
}
