//! Help data extraction from a schema.

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::error::{ArgError, Result};
use crate::schema::{ArgumentDeclaration, Schema};

pub(crate) const VERSION_HELP: &str = "Show version information";
pub(crate) const HELP_HELP: &str = "Show this help message";

#[derive(Debug, Serialize)]
pub(crate) struct HelpData {
    pub name: String,
    pub about: Option<String>,
    /// Everything after the program name on the usage line.
    pub usage: String,
    pub arguments: Vec<Row>,
    pub options: Vec<Row>,
}

#[derive(Debug, Serialize)]
pub(crate) struct Row {
    pub label: String,
    pub padding: String,
    pub desc: String,
}

fn placeholder(decl: &ArgumentDeclaration) -> String {
    format!("[{}]", decl.name().to_uppercase())
}

fn option_label(decl: &ArgumentDeclaration) -> String {
    let hint = placeholder(decl);
    match (decl.short_form(), decl.long_form()) {
        (Some(short), Some(long)) => format!("-{}, --{} {}", short, long, hint),
        (Some(short), None) => format!("-{} {}", short, hint),
        (None, Some(long)) => format!("--{} {}", long, hint),
        (None, None) => hint,
    }
}

/// Pads labels to a common display width.
fn aligned(entries: Vec<(String, String)>) -> Vec<Row> {
    let width = entries.iter().map(|(label, _)| label.width()).max().unwrap_or(0);
    entries
        .into_iter()
        .map(|(label, desc)| {
            let pad = width - label.width();
            Row {
                label,
                padding: " ".repeat(pad),
                desc,
            }
        })
        .collect()
}

pub(crate) fn extract_help_data(schema: &Schema) -> Result<HelpData> {
    let meta = schema.meta();
    let name = meta
        .name
        .clone()
        .ok_or_else(|| ArgError::invalid("a program name is required to render help"))?;

    let mut usage = String::new();
    for decl in schema.positionals().filter(|d| d.is_required()) {
        usage.push(' ');
        usage.push_str(&placeholder(decl));
    }
    if schema.has_options() {
        usage.push_str(" [OPTIONS]");
    }

    // The section lists every positional, but only appears once something
    // is required.
    let arguments = if schema.positionals().any(ArgumentDeclaration::is_required) {
        aligned(
            schema
                .positionals()
                .map(|d| (placeholder(d), d.description_text().unwrap_or_default().to_string()))
                .collect(),
        )
    } else {
        Vec::new()
    };

    let mut option_entries: Vec<(String, String)> = schema
        .named()
        .map(|d| (option_label(d), d.description_text().unwrap_or_default().to_string()))
        .collect();
    if meta.version_enabled {
        option_entries.push(("--version".to_string(), VERSION_HELP.to_string()));
    }
    if meta.help_enabled {
        option_entries.push(("-h, --help".to_string(), HELP_HELP.to_string()));
    }
    let options = aligned(option_entries);

    Ok(HelpData {
        name,
        about: meta.about.clone(),
        usage,
        arguments,
        options,
    })
}
