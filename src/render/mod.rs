//! Graph rendering: DOT generation and the Graphviz backend.

mod dot;
mod graphviz;

pub use dot::to_dot;
pub use graphviz::{open_in_viewer, prepare_output_dir, RenderedGraph, Renderer};
