// src/presentation.rs
use std::io::Write;

use range_sums_shared_kernel::Result;
use serde::Serialize;

use crate::demo::DemoCase;
use crate::options::OutputFormat;
use crate::query::Outcome;

/// Single query: the bare answer in text mode, one object otherwise.
pub fn write_outcome<W: Write>(out: &mut W, outcome: &Outcome, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", outcome.answer)?,
        _ => write_structured(out, outcome, format)?,
    }
    Ok(())
}

/// Batch: one numbered line per query in text mode, an array otherwise.
pub fn write_batch<W: Write>(out: &mut W, outcomes: &[Outcome], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for (i, outcome) in outcomes.iter().enumerate() {
                writeln!(out, "#{} {}: {}", i + 1, outcome.query.kind(), outcome.answer)?;
            }
        }
        _ => write_structured(out, outcomes, format)?,
    }
    Ok(())
}

pub fn write_demo<W: Write>(out: &mut W, cases: &[DemoCase], format: OutputFormat) -> Result<()> {
    if format != OutputFormat::Text {
        return write_structured(out, cases, format);
    }

    let mut current = None;
    for case in cases {
        if current != Some(case.problem) {
            if current.is_some() {
                writeln!(out)?;
            }
            writeln!(out, "== {} ==", case.problem)?;
            current = Some(case.problem);
        }
        let marker = if case.passed() { "" } else { "  MISMATCH" };
        writeln!(out, "Test {}: {} (expected {}){marker}", case.test, case.actual, case.expected)?;
    }

    let passed = cases.iter().filter(|c| c.passed()).count();
    writeln!(out)?;
    writeln!(out, "[range_sums] Completed: {} cases, {passed} passed.", cases.len())?;
    Ok(())
}

fn write_structured<W, T>(out: &mut W, value: &T, format: OutputFormat) -> Result<()>
where
    W: Write,
    T: Serialize + ?Sized,
{
    match format {
        OutputFormat::Yaml => write_yaml(out, value),
        _ => {
            serde_json::to_writer_pretty(&mut *out, value)?;
            writeln!(out)?;
            Ok(())
        }
    }
}

#[cfg(feature = "yaml")]
fn write_yaml<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    let yaml = serde_yaml::to_string(value)?;
    out.write_all(yaml.as_bytes())?;
    Ok(())
}

#[cfg(not(feature = "yaml"))]
fn write_yaml<W: Write, T: Serialize + ?Sized>(_out: &mut W, _value: &T) -> Result<()> {
    Err(range_sums_shared_kernel::InfrastructureError::SerializationError {
        format: "YAML".to_string(),
        details: "built without the `yaml` feature".to_string(),
    }
    .into())
}
