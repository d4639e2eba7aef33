use jpipe_core::Pipeline;
use serde::Serialize;

use crate::exit_codes;
use crate::output::{print_result, OutputFormat};
use crate::OutputArgs;

#[derive(Serialize)]
struct CheckResult {
    valid: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<CheckError>,
}

#[derive(Serialize)]
struct CheckError {
    stage: &'static str,
    message: String,
}

pub async fn check_cmd(
    path: Option<String>,
    filter: Option<String>,
    template: Option<String>,
    output: OutputArgs,
) -> i32 {
    let pipeline = Pipeline {
        select: path.unwrap_or_default(),
        filter: filter.unwrap_or_default(),
        template,
        limit: None,
    };

    match pipeline.validate() {
        Ok(()) => {
            if output.format == OutputFormat::Text && !output.quiet {
                println!("ok");
            } else {
                print_result(
                    output.format,
                    output.quiet,
                    &CheckResult {
                        valid: true,
                        errors: vec![],
                    },
                );
            }
            exit_codes::SUCCESS
        }
        Err(err) => {
            let errors: Vec<CheckError> = err
                .violations
                .iter()
                .map(|v| CheckError {
                    stage: v.stage.as_str(),
                    message: v.message.clone(),
                })
                .collect();
            if output.format == OutputFormat::Text && !output.quiet {
                eprintln!("error: check failed");
                for e in &errors {
                    eprintln!("- {}: {}", e.stage, e.message);
                }
            } else {
                print_result(
                    output.format,
                    output.quiet,
                    &CheckResult {
                        valid: false,
                        errors,
                    },
                );
            }
            exit_codes::VALIDATION_FAILED
        }
    }
}
