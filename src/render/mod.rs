pub mod renderer;
pub mod text;

pub use renderer::{Renderer, StatusLine};
pub use text::{board_to_text, glyph};
