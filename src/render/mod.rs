//! Rendering layer: math backends and the HTML writer for segment lists.

pub mod html;
pub mod math;

pub use html::{render_html, HtmlConfig};
pub use math::{create_renderer, MathBackend, MathRenderer};
