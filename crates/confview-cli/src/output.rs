//! Renderers for the configuration view

use anyhow::Result;
use confview_core::DisplayPair;
use std::fmt::Write;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!("unknown output format: {} (expected table, json, csv)", other)),
        }
    }
}

pub fn render(pairs: &[DisplayPair], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(pairs)),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(pairs)?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Csv => Ok(render_csv(pairs)),
    }
}

fn render_table(pairs: &[DisplayPair]) -> String {
    let width = pairs
        .iter()
        .map(|p| p.label.chars().count())
        .max()
        .unwrap_or(0)
        .max(3);

    let mut out = String::new();
    let _ = writeln!(out, "{:<width$}  {}", "KEY", "VALUE");
    let _ = writeln!(out, "{:-<1$}", "", width + 7);

    if pairs.is_empty() {
        out.push_str("(no configuration)\n");
    }
    for pair in pairs {
        let _ = writeln!(out, "{:<width$}  {}", pair.label, pair.value);
    }
    out
}

fn render_csv(pairs: &[DisplayPair]) -> String {
    let mut out = String::from("key,value\n");
    for pair in pairs {
        let _ = writeln!(
            out,
            "{},{}",
            csv_field(&pair.label),
            csv_field(&pair.value.to_string())
        );
    }
    out
}

fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
