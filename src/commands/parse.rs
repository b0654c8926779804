//! Parse command implementation

use console::Style;
use serde::Serialize;
use std::io::Write;

use super::resolve;
use crate::cli::ParseArgs;
use giturl::{GitUrl, Grammar, Result};

/// One parsed address as shown to the user
#[derive(Serialize)]
struct ParsedAddress<'a> {
    input: &'a str,
    grammar: Grammar,
    #[serde(flatten)]
    url: GitUrl,
    canonical: String,
}

/// Run parse command
pub fn run(args: &ParseArgs, json: bool) -> Result<()> {
    let stdout = std::io::stdout();
    render(&mut stdout.lock(), &args.inputs, args.strict, json)
}

/// Parse every input first, so a bad one prints nothing
fn render(out: &mut impl Write, inputs: &[String], strict: bool, json: bool) -> Result<()> {
    let parsed = inputs
        .iter()
        .map(|input| {
            let url = resolve(input, strict)?;
            Ok(ParsedAddress {
                input,
                grammar: giturl::classify(input),
                canonical: url.to_string(),
                url,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if json {
        serde_json::to_writer_pretty(&mut *out, &parsed)?;
        writeln!(out)?;
        return Ok(());
    }

    for (index, address) in parsed.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        write_address(out, address)?;
    }
    Ok(())
}

fn write_address(out: &mut impl Write, address: &ParsedAddress<'_>) -> Result<()> {
    let label = Style::new().cyan();
    let url = &address.url;

    writeln!(out, "{}", Style::new().bold().apply_to(address.input))?;
    writeln!(out, "  {:<10}{}", label.apply_to("grammar"), address.grammar)?;
    writeln!(out, "  {:<10}{}", label.apply_to("scheme"), url.scheme)?;
    if let Some(user) = &url.user {
        writeln!(out, "  {:<10}{user}", label.apply_to("user"))?;
    }
    if !url.host.is_empty() {
        writeln!(out, "  {:<10}{}", label.apply_to("host"), url.host_name())?;
    }
    if let Some(port) = url.port() {
        writeln!(out, "  {:<10}{port}", label.apply_to("port"))?;
    }
    writeln!(out, "  {:<10}{}", label.apply_to("path"), url.path)?;
    if let Some(query) = &url.query {
        writeln!(out, "  {:<10}{query}", label.apply_to("query"))?;
    }
    if let Some(fragment) = &url.fragment {
        writeln!(out, "  {:<10}{fragment}", label.apply_to("fragment"))?;
    }
    writeln!(out, "  {:<10}{}", label.apply_to("canonical"), address.canonical)?;
    Ok(())
}
