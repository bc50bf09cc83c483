//! Render interrupt logic

pub mod renderer;

pub use renderer::{Renderer, TickReport};
