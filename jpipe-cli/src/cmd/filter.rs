use jpipe_core::Pipeline;

use crate::exit_codes;
use crate::output::print_values;
use crate::utils::{read_input, warn_invalid};
use crate::{InputArgs, OutputArgs, StageArgs};

pub async fn filter_cmd(
    expr: &str,
    mut stages: StageArgs,
    input: InputArgs,
    output: OutputArgs,
) -> i32 {
    let root = match read_input(&input, &output).await {
        Ok(v) => v,
        Err(code) => return code,
    };

    stages.filter = expr.to_string();
    let pipeline = build_pipeline(&stages);
    warn_invalid(&pipeline);

    let items = pipeline.items(&root);
    print_values(output.format, output.quiet, &items);
    exit_codes::SUCCESS
}

fn build_pipeline(stages: &StageArgs) -> Pipeline {
    let mut pipeline = Pipeline::new()
        .select(stages.select.as_str())
        .filter(stages.filter.as_str());
    pipeline.limit = stages.limit;
    pipeline
}
