use serde::{Deserialize, Serialize};

use crate::model::task::Priority;

/// Configuration from config.toml in the data directory.
/// Every field has a default so a missing or empty file is valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub add: AddConfig,
    #[serde(default)]
    pub list: ListConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddConfig {
    /// Priority assigned when `add` is given none
    #[serde(default)]
    pub default_priority: Priority,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListConfig {
    /// Whether a plain `list` includes completed tasks
    #[serde(default = "default_true")]
    pub show_completed: bool,
}

impl Default for ListConfig {
    fn default() -> Self {
        ListConfig {
            show_completed: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.add.default_priority, Priority::Medium);
        assert!(config.list.show_completed);
    }

    #[test]
    fn partial_toml_fills_missing_fields() {
        let config: AppConfig = toml::from_str(
            "\
[add]
default_priority = \"high\"
",
        )
        .unwrap();
        assert_eq!(config.add.default_priority, Priority::High);
        assert!(config.list.show_completed);
    }

    #[test]
    fn list_section_overrides() {
        let config: AppConfig = toml::from_str(
            "\
[list]
show_completed = false
",
        )
        .unwrap();
        assert!(!config.list.show_completed);
    }
}
