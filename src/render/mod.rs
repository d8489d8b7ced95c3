//! Render module: Pure geometry between the viewport and the buffer.
//!
//! Layouts are computed once per viewport change. There is no retained
//! visual state here; the host's rendering layer draws cells by index
//! and feeds pointer coordinates back through [`GridLayout::resolve`].

mod layout;

pub use layout::{cell_size_for, CellMetrics, GridLayout};
