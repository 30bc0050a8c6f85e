//! Itemlist - a named, ordered list of items and a driver that prints it
//!
//! # Example
//!
//! ```
//! use itemlist::{Container, format_output, OutputFormat};
//!
//! let mut container = Container::new("test");
//! container.add_item("item_0");
//! let text = format_output(&container, &OutputFormat::Human).unwrap();
//! assert_eq!(text, "Items in test:\n  - item_0\n");
//! ```

pub mod cli;
pub mod container;
pub mod driver;
pub mod error;
pub mod output;

pub use container::Container;
pub use driver::{build, populate, run, RunConfig};
pub use error::{ItemListError, Result};
pub use output::{format_output, OutputFormat};
