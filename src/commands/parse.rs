use crate::OutputFormat;
use crate::runtime::duration::{format_duration_verbose, parse_duration};
use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ParsedDuration {
    pub input: String,
    pub seconds: u64,
    pub formatted: String,
}

pub fn parse_all(inputs: &[String]) -> Vec<ParsedDuration> {
    inputs
        .iter()
        .map(|input| {
            let seconds = parse_duration(input.as_str());
            ParsedDuration {
                input: input.clone(),
                seconds,
                formatted: format_duration_verbose(seconds),
            }
        })
        .collect()
}

pub fn parse(inputs: &[String], format: OutputFormat) -> Result<()> {
    let parsed = parse_all(inputs);

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&parsed)
                .context("Failed to serialize parsed durations")?;
            println!("{}", json);
        }
        OutputFormat::Text | OutputFormat::Html => {
            for p in &parsed {
                println!("{:<24} {:>8}s  {}", p.input, p.seconds, p.formatted);
            }
        }
    }

    Ok(())
}
