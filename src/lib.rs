pub mod core;
pub mod error;
pub mod generator;
pub mod icon;
pub mod tower;

// Curated re-exports
pub use self::core::config::GeneratorConfig;
pub use error::GenerateError;
pub use generator::{generate, generate_document, generate_with, GeneratedIcon, GenerationReport};
pub use tower::{derive_filename, TowerDocument, TowerKind};
