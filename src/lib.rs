pub mod origin;
pub mod render;
pub mod url_split;

pub use origin::{derive, OriginIds};
pub use render::{render, OutputFormat};
