//! Normalize command implementation

use serde::Serialize;
use std::io::{BufRead, Write};

use super::resolve;
use crate::cli::NormalizeArgs;
use giturl::Result;

#[derive(Serialize)]
struct Normalized<'a> {
    input: &'a str,
    canonical: String,
}

/// Run normalize command
pub fn run(args: &NormalizeArgs, json: bool) -> Result<()> {
    let inputs = if args.inputs.is_empty() {
        read_inputs(std::io::stdin().lock())?
    } else {
        args.inputs.clone()
    };

    let stdout = std::io::stdout();
    render(&mut stdout.lock(), &inputs, args.strict, json)
}

/// Non-blank lines of `reader`, trimmed
fn read_inputs(reader: impl BufRead) -> Result<Vec<String>> {
    let mut inputs = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            inputs.push(trimmed.to_string());
        }
    }
    tracing::debug!(count = inputs.len(), "read addresses from stdin");
    Ok(inputs)
}

fn render(out: &mut impl Write, inputs: &[String], strict: bool, json: bool) -> Result<()> {
    let normalized = inputs
        .iter()
        .map(|input| {
            Ok(Normalized {
                input,
                canonical: resolve(input, strict)?.to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if json {
        serde_json::to_writer_pretty(&mut *out, &normalized)?;
        writeln!(out)?;
    } else {
        for entry in &normalized {
            writeln!(out, "{}", entry.canonical)?;
        }
    }
    Ok(())
}
