//! JSON output formatting

use crate::container::Container;
use crate::error::Result;

pub fn format_json(container: &Container) -> Result<String> {
    let mut output = serde_json::to_string_pretty(container)?;
    output.push('\n');
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_format_json() {
        let mut container = Container::new("test");
        container.add_item("item_0");
        container.add_item("item_1");

        let value: Value = serde_json::from_str(&format_json(&container).unwrap()).unwrap();
        assert_eq!(value, json!({ "name": "test", "items": ["item_0", "item_1"] }));
    }

    #[test]
    fn test_format_json_parses_back() {
        let mut container = Container::new("");
        container.add_item("x");
        let parsed: Container = serde_json::from_str(&format_json(&container).unwrap()).unwrap();
        assert_eq!(parsed, container);
    }
}
