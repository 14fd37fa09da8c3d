use std::collections::BTreeMap;

use crate::core::config::PaletteConfig;

pub const DEFAULT_COLOR: &str = "#cccccc";
pub const DEFAULT_TYPE: &str = "Utility";

/// Type -> color lookup used to theme each icon.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorTable {
    colors: BTreeMap<String, String>,
    default_color: String,
    default_type: String,
}

impl Default for ColorTable {
    fn default() -> Self {
        Self::from_config(&PaletteConfig::default())
    }
}

impl ColorTable {
    pub fn from_config(cfg: &PaletteConfig) -> Self {
        Self {
            colors: cfg.colors.clone(),
            default_color: cfg.default_color.clone(),
            default_type: cfg.default_type.clone(),
        }
    }

    /// Type used for the gradient id; absent types fall back to the default type.
    pub fn effective_type<'a>(&'a self, tower_type: Option<&'a str>) -> &'a str {
        tower_type.unwrap_or(self.default_type.as_str())
    }

    /// Color for an explicit `type`; absent and unknown types get the default color.
    pub fn color_for(&self, tower_type: Option<&str>) -> &str {
        tower_type
            .and_then(|t| self.colors.get(t))
            .map(String::as_str)
            .unwrap_or(self.default_color.as_str())
    }

    pub fn contains(&self, tower_type: &str) -> bool {
        self.colors.contains_key(tower_type)
    }
}
