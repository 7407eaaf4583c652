pub mod renderer;

pub use renderer::{BoardRenderer, GlyphSet};
