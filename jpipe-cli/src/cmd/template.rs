use jpipe_core::Pipeline;

use crate::exit_codes;
use crate::output::print_lines;
use crate::utils::{read_input, warn_invalid};
use crate::{InputArgs, OutputArgs, StageArgs};

pub fn build_pipeline(template: &str, stages: &StageArgs) -> Pipeline {
    let mut pipeline = Pipeline::new()
        .select(stages.select.as_str())
        .filter(stages.filter.as_str())
        .template(template);
    pipeline.limit = stages.limit;
    pipeline
}

pub async fn template_cmd(
    template: &str,
    stages: StageArgs,
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
    print_lines(output.format, output.quiet, &lines);
    exit_codes::SUCCESS
}
