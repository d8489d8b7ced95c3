//! EditorSession: The stateful heart of one editing run.
//!
//! The session exclusively owns the pixel buffer, the active tool and
//! color, and the current grid layout. It drives the stroke state
//! machine: `Idle -> Drawing` on pointer down over a cell (the tool is
//! applied once immediately), `Drawing -> Drawing` on moves over new
//! cells (drag-to-paint), `Drawing -> Idle` on pointer up anywhere.
//!
//! Tool and color are deliberately session-scoped fields, not globals:
//! the host UI calls [`EditorSession::set_tool`] / `set_color` and the
//! session looks the current values up at event time. One stable event
//! subscription per session is enough; nothing here is re-bound when the
//! grid is rebuilt.

use log::{debug, warn};

use crate::buffer::{GridSize, PixelBuffer, Rgb};
use crate::project::{self, ProjectRecord};
use crate::render::{CellMetrics, GridLayout};
use crate::Result;

use super::events::{PointerEvent, Tool};

/// Stroke state for drag-to-paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StrokeState {
    /// No active stroke.
    Idle,
    /// A stroke is in progress; `last_applied` suppresses redundant
    /// re-application while the pointer stays inside one cell.
    Drawing {
        /// The last cell index the tool was applied to.
        last_applied: usize,
    },
}

/// One editing session: buffer, tool/color state, layout, stroke machine.
pub struct EditorSession {
    /// The exclusively-owned canvas.
    buffer: PixelBuffer,
    /// Active drawing tool.
    tool: Tool,
    /// Active paint color.
    color: Rgb,
    /// Cell sizing bounds for layout computation.
    metrics: CellMetrics,
    /// Current grid placement; `None` until a viewport is reported.
    layout: Option<GridLayout>,
    /// Last known viewport, kept so grid-size changes can re-layout.
    viewport: Option<(u32, u32)>,
    /// Stroke state machine.
    stroke: StrokeState,
}

impl EditorSession {
    /// Start a session with an empty buffer of the chosen size.
    pub fn new(size: GridSize) -> Self {
        Self {
            buffer: PixelBuffer::new(size),
            tool: Tool::default(),
            color: Rgb::DEFAULT_PAINT,
            metrics: CellMetrics::default(),
            layout: None,
            viewport: None,
            stroke: StrokeState::Idle,
        }
    }

    /// Start a session with custom cell sizing bounds.
    pub fn with_metrics(size: GridSize, metrics: CellMetrics) -> Self {
        Self {
            metrics,
            ..Self::new(size)
        }
    }

    /// The session's buffer.
    #[inline]
    pub const fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// The active tool.
    #[inline]
    pub const fn tool(&self) -> Tool {
        self.tool
    }

    /// The active paint color.
    #[inline]
    pub const fn color(&self) -> Rgb {
        self.color
    }

    /// The current layout, if a viewport has been reported.
    #[inline]
    pub const fn layout(&self) -> Option<&GridLayout> {
        self.layout.as_ref()
    }

    /// Whether a stroke is currently in progress.
    #[inline]
    pub const fn is_drawing(&self) -> bool {
        matches!(self.stroke, StrokeState::Drawing { .. })
    }

    /// Select the active tool.
    #[inline]
    pub const fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    /// Select the active paint color.
    #[inline]
    pub const fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    /// Report the available viewport and (re)compute the grid layout.
    ///
    /// Pure recomputation: the buffer is untouched. Call this on every
    /// resize or orientation change.
    pub fn update_viewport(&mut self, width: u32, height: u32) {
        self.viewport = Some((width, height));
        let layout = GridLayout::compute(width, height, self.buffer.size(), self.metrics);
        debug!(
            "grid laid out: {} at {}px/cell in {}x{} viewport",
            self.buffer.size(),
            layout.cell_px(),
            width,
            height
        );
        self.layout = Some(layout);
    }

    /// Replace the canvas with an empty one of a new size.
    ///
    /// Discards all current art (no migration) and re-layouts against
    /// the last known viewport. Any in-progress stroke ends.
    pub fn resize_grid(&mut self, size: GridSize) {
        self.buffer.resize(size);
        self.stroke = StrokeState::Idle;
        if let Some((width, height)) = self.viewport {
            self.update_viewport(width, height);
        }
    }

    /// Load a stored project into this session.
    ///
    /// The buffer is resized to the record's grid size (discarding
    /// current content) and the layout refreshed. Any in-progress stroke
    /// ends.
    pub fn load(&mut self, record: &ProjectRecord) -> Result<()> {
        project::decode(record, &mut self.buffer)?;
        self.stroke = StrokeState::Idle;
        if let Some((width, height)) = self.viewport {
            self.update_viewport(width, height);
        }
        Ok(())
    }

    /// Feed a pointer event through the stroke state machine.
    ///
    /// Returns `true` when the buffer changed, so the host knows to
    /// refresh the affected cells.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Down { x, y } => self.pointer_down(x, y),
            PointerEvent::Move { x, y } => self.pointer_move(x, y),
            PointerEvent::Up => {
                // Releases anywhere end the stroke, even off-grid.
                self.stroke = StrokeState::Idle;
                false
            }
        }
    }

    fn pointer_down(&mut self, x: u32, y: u32) -> bool {
        let Some(layout) = self.layout else {
            // Recoverable: the grid container may not be mounted yet.
            warn!("pointer down with no layout; render target not available");
            return false;
        };
        let Some(index) = layout.resolve(x, y) else {
            return false;
        };
        self.stroke = StrokeState::Drawing {
            last_applied: index,
        };
        self.apply_tool(index)
    }

    fn pointer_move(&mut self, x: u32, y: u32) -> bool {
        let StrokeState::Drawing { last_applied } = self.stroke else {
            return false;
        };
        let Some(index) = self.layout.and_then(|l| l.resolve(x, y)) else {
            // Off-grid drag: the stroke stays active and resumes when
            // the pointer re-enters.
            return false;
        };
        if index == last_applied {
            return false;
        }
        self.stroke = StrokeState::Drawing {
            last_applied: index,
        };
        self.apply_tool(index)
    }

    /// Apply the active tool to one cell. Returns whether the buffer
    /// changed.
    fn apply_tool(&mut self, index: usize) -> bool {
        match self.tool {
            Tool::Brush => {
                if self.buffer.color_at(index) == Some(self.color) {
                    return false;
                }
                self.buffer.set_pixel(index, self.color);
                true
            }
            Tool::Eraser => {
                if self.buffer.color_at(index).is_none() {
                    return false;
                }
                self.buffer.clear_pixel(index);
                true
            }
            Tool::Fill => self.buffer.flood_fill(index, self.color) > 0,
        }
    }
}

impl std::fmt::Debug for EditorSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorSession")
            .field("buffer", &self.buffer)
            .field("tool", &self.tool)
            .field("color", &self.color)
            .field("drawing", &self.is_drawing())
            .finish()
    }
}
