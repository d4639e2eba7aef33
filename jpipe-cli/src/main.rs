use clap::Parser;

mod args;
mod cmd;
mod commands;
mod exit_codes;
mod output;
mod utils;

pub use args::*;
use commands::Command;

#[derive(Debug, Parser)]
#[command(
    name = "jpipe",
    version,
    about = "Select, filter, and template JSON from one command into the next"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). JPIPE_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("error: failed to create tokio runtime: {e}");
            std::process::exit(exit_codes::RUNTIME_ERROR);
        }
    };

    let exit_code = rt.block_on(run_command(cli.command));
    std::process::exit(exit_code);
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_env("JPIPE_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

async fn run_command(command: Command) -> i32 {
    match command {
        Command::Select {
            path,
            input,
            output,
        } => cmd::select::select_cmd(&path, input, output).await,
        Command::Filter {
            expr,
            stages,
            input,
            output,
        } => cmd::filter::filter_cmd(&expr, stages, input, output).await,
        Command::Template {
            template,
            stages,
            input,
            output,
        } => cmd::template::template_cmd(&template, stages, input, output).await,
        Command::Run {
            template,
            stages,
            exec,
            input,
            output,
        } => cmd::run::run_cmd(&template, stages, exec, input, output).await,
        Command::Check {
            path,
            filter,
            template,
            output,
        } => cmd::check::check_cmd(path, filter, template, output).await,
    }
}
