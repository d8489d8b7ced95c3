//! # Pixelgrid
//!
//! A pixel-art grid editing engine for embedded web-app canvases.
//!
//! Pixelgrid is the algorithmic core of a pixel-art mini-application:
//! the canvas model, the flood-fill algorithm, pointer-to-cell mapping
//! under responsive resizing, and the PNG export / project record
//! pipeline. Screen navigation, DOM construction, and host-platform
//! integration stay outside; the engine talks to them through plain
//! events and records.
//!
//! ## Core Concepts
//!
//! - **Decoupled buffer**: [`PixelBuffer`] holds only color data,
//!   addressed by row-major index; visual elements belong to the host
//! - **Pure layout**: [`GridLayout`] is recomputed from the viewport on
//!   every resize and never mutates the buffer
//! - **Session-scoped state**: [`EditorSession`] owns the buffer and the
//!   active tool/color; nothing is process-global
//!
//! ## Example
//!
//! ```rust
//! use pixelgrid::{EditorSession, GridSize, PointerEvent, Tool};
//!
//! // Start a 16x16 session and tell it the available viewport.
//! let mut session = EditorSession::new(GridSize::Size16);
//! session.update_viewport(360, 330);
//!
//! // A tap paints one cell with the active color.
//! session.set_tool(Tool::Brush);
//! session.handle_pointer(PointerEvent::Down { x: 30, y: 20 });
//! session.handle_pointer(PointerEvent::Up);
//! assert!(!session.buffer().is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
pub mod error;
pub mod export;
pub mod project;
pub mod render;
pub mod session;

// Re-exports for convenience
pub use buffer::{GridSize, PixelBuffer, Rgb};
pub use error::{Error, Result};
pub use project::ProjectRecord;
pub use render::{CellMetrics, GridLayout};
pub use session::{EditorSession, PointerEvent, Tool};
