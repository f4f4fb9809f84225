//! View renderer for the catalogue client.
//!
//! Rendering is a pure function of a [`Screen`]: the same screen always
//! produces the same markup, and nothing here touches the network.

mod escape;
mod html;
pub mod routes;
mod screen;
mod text;

pub use escape::escape_html;
pub use html::render;
pub use screen::{Screen, View, ViewMode};
pub use text::render_text;
