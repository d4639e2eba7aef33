use jpipe_core::expressions::render_text;
use serde::Serialize;
use serde_json::Value as JsonValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn print_result<T: Serialize>(format: OutputFormat, quiet: bool, result: &T) {
    if quiet {
        return;
    }
    match format {
        OutputFormat::Text => {
            if let Ok(json) = serde_json::to_string_pretty(result) {
                println!("{json}");
            }
        }
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string(result) {
                println!("{json}");
            }
        }
    }
}

/// Text: one value per line (strings unquoted). JSON: a single array.
pub fn print_values(format: OutputFormat, quiet: bool, values: &[&JsonValue]) {
    if quiet {
        return;
    }
    match format {
        OutputFormat::Text => {
            for v in values {
                println!("{}", render_text(v));
            }
        }
        OutputFormat::Json => print_result(format, quiet, &values),
    }
}

pub fn print_lines(format: OutputFormat, quiet: bool, lines: &[String]) {
    if quiet {
        return;
    }
    match format {
        OutputFormat::Text => {
            for line in lines {
                println!("{line}");
            }
        }
        OutputFormat::Json => print_result(format, quiet, &lines),
    }
}

pub fn print_error(format: OutputFormat, quiet: bool, message: &str) {
    if quiet {
        return;
    }
    match format {
        OutputFormat::Text => eprintln!("error: {message}"),
        OutputFormat::Json => {
            let err = serde_json::json!({"error": message});
            eprintln!("{}", serde_json::to_string(&err).unwrap_or_default());
        }
    }
}
