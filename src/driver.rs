//! Driver: builds a container, fills it and prints it

use std::io::Write;

use log::{debug, info};

use crate::container::Container;
use crate::error::Result;
use crate::output::{format_output, OutputFormat};

/// Default container name
pub const DEFAULT_NAME: &str = "test";

/// Default number of generated items
pub const DEFAULT_COUNT: usize = 5;

/// Settings for a single run
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub name: String,
    pub count: usize,
    pub output_format: OutputFormat,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            count: DEFAULT_COUNT,
            output_format: OutputFormat::Human,
        }
    }
}

/// Append `item_0` through `item_{count - 1}`, in ascending order
pub fn populate(container: &mut Container, count: usize) {
    for i in 0..count {
        let item = format!("item_{}", i);
        debug!("adding {} to '{}'", item, container.name());
        container.add_item(item);
    }
}

/// Create a container from the config and populate it
pub fn build(config: &RunConfig) -> Container {
    let mut container = Container::new(config.name.as_str());
    populate(&mut container, config.count);
    container
}

/// Build the container and write its listing to `out`
pub fn run<W: Write>(config: &RunConfig, out: &mut W) -> Result<()> {
    let container = build(config);
    info!(
        "container '{}' holds {} items",
        container.name(),
        container.len()
    );

    let rendered = format_output(&container, &config.output_format)?;
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}
