use serde::Serialize;

use crate::cmd::template::build_pipeline;
use crate::exit_codes;
use crate::output::{print_error, print_lines, print_result, OutputFormat};
use crate::utils::{read_input, resolve_shell, warn_invalid};
use crate::{ExecArgs, InputArgs, OutputArgs, StageArgs};

#[derive(Serialize)]
struct RunResult {
    executed: usize,
    succeeded: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    failed: Vec<CommandFailure>,
}

#[derive(Serialize)]
struct CommandFailure {
    index: usize,
    command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    exit_code: Option<i32>,
}

pub async fn run_cmd(
    template: &str,
    stages: StageArgs,
    exec: ExecArgs,
    input: InputArgs,
    output: OutputArgs,
) -> i32 {
    let root = match read_input(&input, &output).await {
        Ok(v) => v,
        Err(code) => return code,
    };

    let pipeline = build_pipeline(template, &stages);
    warn_invalid(&pipeline);
    let lines = pipeline.render(&root);

    if !exec.exec {
        print_lines(output.format, output.quiet, &lines);
        return exit_codes::SUCCESS;
    }

    let shell = resolve_shell(exec.shell);
    let mut result = RunResult {
        executed: 0,
        succeeded: 0,
        failed: Vec::new(),
    };

    for (index, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            tracing::debug!(index, "skipping empty command");
            continue;
        }
        tracing::info!(index, command = %line, shell = %shell, "running command");

        let status = tokio::process::Command::new(&shell)
            .arg("-c")
            .arg(line)
            .status()
            .await;
        result.executed += 1;

        match status {
            Ok(s) if s.success() => result.succeeded += 1,
            Ok(s) => {
                tracing::warn!(index, command = %line, code = ?s.code(), "command failed");
                result.failed.push(CommandFailure {
                    index,
                    command: line.clone(),
                    exit_code: s.code(),
                });
                if !exec.keep_going {
                    break;
                }
            }
            Err(e) => {
                print_error(
                    output.format,
                    output.quiet,
                    &format!("failed to spawn {shell}: {e}"),
                );
                return exit_codes::RUNTIME_ERROR;
            }
        }
    }

    if output.format == OutputFormat::Json {
        print_result(output.format, output.quiet, &result);
    } else if !output.quiet {
        for f in &result.failed {
            eprintln!(
                "error: command {} exited with {}: {}",
                f.index,
                f.exit_code
                    .map_or_else(|| "signal".to_string(), |c| c.to_string()),
                f.command
            );
        }
    }

    if result.failed.is_empty() {
        exit_codes::SUCCESS
    } else {
        exit_codes::RUN_FAILED
    }
}
