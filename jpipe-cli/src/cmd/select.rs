use jpipe_core::Pipeline;

use crate::exit_codes;
use crate::output::print_values;
use crate::utils::{read_input, warn_invalid};
use crate::{InputArgs, OutputArgs};

pub async fn select_cmd(path: &str, input: InputArgs, output: OutputArgs) -> i32 {
    let root = match read_input(&input, &output).await {
        Ok(v) => v,
        Err(code) => return code,
    };

    let pipeline = Pipeline::new().select(path);
    warn_invalid(&pipeline);

    let items = pipeline.items(&root);
    print_values(output.format, output.quiet, &items);
    exit_codes::SUCCESS
}
