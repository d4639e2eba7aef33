use clap::Subcommand;

use crate::args::*;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the values addressed by a path.
    Select {
        path: String,
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Print the selected items that pass a filter.
    Filter {
        /// Filter expression; takes the place of `--filter`.
        expr: String,
        #[command(flatten)]
        stages: StageArgs,
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Render a template once per selected item.
    Template {
        template: String,
        #[command(flatten)]
        stages: StageArgs,
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Select, filter, and template, then print or execute the result.
    Run {
        #[arg(long, short)]
        template: String,
        #[command(flatten)]
        stages: StageArgs,
        #[command(flatten)]
        exec: ExecArgs,
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Check path, filter, and template syntax without reading input.
    Check {
        #[arg(long)]
        path: Option<String>,
        #[arg(long)]
        filter: Option<String>,
        #[arg(long)]
        template: Option<String>,
        #[command(flatten)]
        output: OutputArgs,
    },
}
