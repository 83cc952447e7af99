//! CLI domain: parse, route, output, and presentation only.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{format_catalog_json, format_catalog_text, format_check_result};
pub use route::RunContext;
