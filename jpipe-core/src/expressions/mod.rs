mod compare;
mod filter;
mod path;
mod template;
mod text;

pub use compare::{CompareOp, Literal};
pub use filter::{
    evaluate_filter, parse_filter, try_evaluate_filter, Expr, Field, FilterError, MAX_BINARY_OPS,
    MAX_NESTING,
};
pub use path::{get_by_path, parse_path, resolve, select, select_path, PathError, Segment};
pub use template::{
    expand_template, parse_template, substitute_template, Expansion, Part, Template, TemplateError,
};
pub use text::{is_primitive, render_text};
