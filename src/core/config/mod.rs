pub mod config;

pub use config::{GeneratorConfig, IconConfig, PaletteConfig, PathsConfig};
