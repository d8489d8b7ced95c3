//! Session module: Per-session editing state and input handling.
//!
//! This module contains:
//! - [`Tool`] / [`PointerEvent`]: The protocol between the host input
//!   layer and the engine
//! - [`EditorSession`]: Owner of the buffer, tool/color selection, and
//!   the Idle/Drawing stroke state machine

mod events;
#[allow(clippy::module_inception)]
mod session;

pub use events::{PointerEvent, Tool};
pub use session::EditorSession;
