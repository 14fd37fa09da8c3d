pub mod svg;

pub use svg::{render_icon, IconSpec};
