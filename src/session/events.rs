//! Event types fed into the editing session.
//!
//! These enums define the protocol between the host's input layer
//! (mouse/touch callbacks, viewport observers) and the session state
//! machine. Mouse and touch are already unified here: the host maps
//! `touchmove` to `Move` using the point under the finger.

/// The drawing tools. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tool {
    /// Paint the active color onto the cell under the pointer.
    #[default]
    Brush,
    /// Reset the cell under the pointer to the empty state.
    Eraser,
    /// Flood-fill the 4-connected region under the pointer with the
    /// active color.
    Fill,
}

/// Pointer and viewport events from the host input layer.
///
/// Coordinates are viewport pixels with the origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Pointer/touch pressed down.
    Down {
        /// X coordinate in viewport pixels.
        x: u32,
        /// Y coordinate in viewport pixels.
        y: u32,
    },

    /// Pointer/touch moved while pressed.
    Move {
        /// X coordinate in viewport pixels.
        x: u32,
        /// Y coordinate in viewport pixels.
        y: u32,
    },

    /// Pointer/touch released, anywhere — including outside the grid.
    Up,
}
