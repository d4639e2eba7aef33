#![forbid(unsafe_code)]

//! Select, filter, and template JSON values so that one command's output can
//! drive the next command.
//!
//! Every public operation is pure. Malformed paths, filters, and templates
//! degrade to a miss, `false`, or an empty string respectively; the `parse_*`
//! functions report the underlying error when it is needed.

pub mod error;
pub mod expressions;
pub mod parser;
pub mod pipeline;

pub use crate::error::{InputError, Stage, ValidationError, Violation};
pub use crate::expressions::{
    evaluate_filter, expand_template, get_by_path, parse_filter, parse_path, parse_template,
    select_path, substitute_template, try_evaluate_filter, Expansion, Expr, FilterError,
    PathError, Segment, TemplateError,
};
pub use crate::parser::{parse_input_str, InputFormat, ParsedInput};
pub use crate::pipeline::Pipeline;
