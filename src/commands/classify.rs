//! Classify command implementation

use serde::Serialize;
use std::io::Write;

use crate::cli::ClassifyArgs;
use giturl::{Grammar, Result};

#[derive(Serialize)]
struct Classified<'a> {
    input: &'a str,
    grammar: Grammar,
}

/// Run classify command
pub fn run(args: &ClassifyArgs, json: bool) -> Result<()> {
    let stdout = std::io::stdout();
    render(&mut stdout.lock(), &args.inputs, json)
}

fn render(out: &mut impl Write, inputs: &[String], json: bool) -> Result<()> {
    let classified: Vec<Classified<'_>> = inputs
        .iter()
        .map(|input| Classified {
            input,
            grammar: giturl::classify(input),
        })
        .collect();

    if json {
        serde_json::to_writer_pretty(&mut *out, &classified)?;
        writeln!(out)?;
    } else {
        for entry in &classified {
            writeln!(out, "{:<13}{}", entry.grammar.as_str(), entry.input)?;
        }
    }
    Ok(())
}
