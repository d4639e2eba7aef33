pub mod check;
pub mod filter;
pub mod run;
pub mod select;
pub mod template;
