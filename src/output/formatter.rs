//! Output formatting

use crate::container::Container;
use crate::error::Result;
use crate::output::human::format_human;
use crate::output::json::format_json;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

pub fn format_output(container: &Container, format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(format_human(container)),
        OutputFormat::Json => format_json(container),
    }
}
