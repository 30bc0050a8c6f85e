//! Human-readable output formatting

use std::fmt::Write;

use crate::container::Container;

/// Render the header line followed by one `  - item` line per item.
/// Every line, including the last, ends with a newline.
pub fn format_human(container: &Container) -> String {
    let mut output = format!("Items in {}:\n", container.name());
    for item in container.items() {
        let _ = writeln!(output, "  - {}", item);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_human_empty() {
        let container = Container::new("test");
        assert_eq!(format_human(&container), "Items in test:\n");
    }

    #[test]
    fn test_format_human_items() {
        let mut container = Container::new("box");
        container.add_item("a");
        container.add_item("b");
        assert_eq!(format_human(&container), "Items in box:\n  - a\n  - b\n");
    }

    #[test]
    fn test_format_human_empty_name() {
        let container = Container::new("");
        assert_eq!(format_human(&container), "Items in :\n");
    }
}
