pub mod model;
pub mod naming;
pub mod palette;

pub use model::{TowerDocument, TowerKind, TowerRecord};
pub use naming::{derive_filename, image_path};
pub use palette::{ColorTable, DEFAULT_COLOR, DEFAULT_TYPE};
