use std::path::PathBuf;

use clap::Args;
use jpipe_core::InputFormat;

use crate::output::OutputFormat;

#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InputKind {
    Auto,
    Json,
    Yaml,
}

impl From<InputKind> for InputFormat {
    fn from(kind: InputKind) -> Self {
        match kind {
            InputKind::Auto => InputFormat::Auto,
            InputKind::Json => InputFormat::Json,
            InputKind::Yaml => InputFormat::Yaml,
        }
    }
}

#[derive(Debug, Args, Clone)]
pub struct InputArgs {
    /// File holding the upstream command's output; stdin when omitted or `-`.
    #[arg(long, short)]
    pub input: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = InputKind::Auto)]
    pub input_format: InputKind,
}

#[derive(Debug, Args, Clone)]
pub struct StageArgs {
    /// Path selecting the items, e.g. `events[*].attendees[*]`.
    #[arg(long, short, default_value = "")]
    pub select: String,
    /// Filter each selected item must pass, e.g. `status == 'active'`.
    #[arg(long, short, default_value = "")]
    pub filter: String,
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

#[derive(Debug, Args, Clone)]
pub struct ExecArgs {
    /// Run each rendered line as a shell command instead of printing it.
    #[arg(long)]
    pub exec: bool,
    /// Shell used with `--exec` (falls back to JPIPE_SHELL, then `sh`).
    #[arg(long)]
    pub shell: Option<String>,
    /// Keep running the remaining commands after one fails.
    #[arg(long)]
    pub keep_going: bool,
}
