use jpipe_core::{parse_input_str, Pipeline};
use serde_json::Value as JsonValue;
use tokio::io::AsyncReadExt;

use crate::exit_codes;
use crate::output::print_error;
use crate::{InputArgs, OutputArgs};

/// Read and decode the upstream document. `Err` carries the exit code to
/// return; the error has already been reported.
pub async fn read_input(input: &InputArgs, output: &OutputArgs) -> Result<JsonValue, i32> {
    let content = match input.input.as_deref() {
        Some(path) if path.as_os_str() != "-" => match tokio::fs::read_to_string(path).await {
            Ok(c) => c,
            Err(e) => {
                print_error(
                    output.format,
                    output.quiet,
                    &format!("failed to read {}: {e}", path.display()),
                );
                return Err(exit_codes::RUNTIME_ERROR);
            }
        },
        _ => {
            let mut buf = String::new();
            if let Err(e) = tokio::io::stdin().read_to_string(&mut buf).await {
                print_error(
                    output.format,
                    output.quiet,
                    &format!("failed to read stdin: {e}"),
                );
                return Err(exit_codes::RUNTIME_ERROR);
            }
            buf
        }
    };

    match parse_input_str(&content, input.input_format.into()) {
        Ok(parsed) => {
            tracing::debug!(format = ?parsed.format, "decoded input");
            Ok(parsed.value)
        }
        Err(e) => {
            print_error(output.format, output.quiet, &e.to_string());
            Err(exit_codes::VALIDATION_FAILED)
        }
    }
}

/// Malformed stages still run (they select nothing, reject every item, or
/// render empty placeholders); say so once instead of failing the batch.
pub fn warn_invalid(pipeline: &Pipeline) {
    if let Err(err) = pipeline.validate() {
        for v in &err.violations {
            tracing::warn!(stage = %v.stage, "{}", v.message);
        }
    }
}

pub fn resolve_shell(arg: Option<String>) -> String {
    arg.or_else(|| std::env::var("JPIPE_SHELL").ok())
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| "sh".to_string())
}
