//! GridLayout: Viewport-fitted cell geometry and pointer hit-testing.
//!
//! The layout is a pure function of the viewport dimensions and the grid
//! size. It is recomputed from scratch on every viewport change
//! (resize/orientation change) and never mutates the buffer; the buffer
//! and its visual geometry stay decoupled, linked only by cell index.

use crate::buffer::GridSize;

/// Bounds for the computed per-cell pixel dimension.
///
/// The minimum keeps large grids tappable on small screens; the maximum
/// stops small grids from ballooning on large viewports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMetrics {
    /// Smallest allowed cell edge in pixels.
    pub min_cell_px: u32,
    /// Largest allowed cell edge in pixels.
    pub max_cell_px: u32,
}

impl CellMetrics {
    /// Create new metrics.
    #[inline]
    pub const fn new(min_cell_px: u32, max_cell_px: u32) -> Self {
        Self {
            min_cell_px,
            max_cell_px,
        }
    }
}

impl Default for CellMetrics {
    /// 3px floor (the smallest usable touch target observed on phones)
    /// and a 30px ceiling.
    fn default() -> Self {
        Self::new(3, 30)
    }
}

/// Compute the cell edge length for a grid inside an available viewport.
///
/// `floor(min(width, height) / side)`, clamped to the metrics bounds, so
/// extreme viewports (0 or enormous) still yield a usable cell size.
#[inline]
pub const fn cell_size_for(
    available_width: u32,
    available_height: u32,
    size: GridSize,
    metrics: CellMetrics,
) -> u32 {
    let shorter = if available_width < available_height {
        available_width
    } else {
        available_height
    };
    let fitted = shorter / size.side();
    if fitted < metrics.min_cell_px {
        metrics.min_cell_px
    } else if fitted > metrics.max_cell_px {
        metrics.max_cell_px
    } else {
        fitted
    }
}

/// A computed placement of the grid inside a viewport.
///
/// Holds everything needed to translate pointer coordinates into buffer
/// indices: the cell edge length and the top-left corner of the grid
/// (centered in the viewport).
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Grid dimensions this layout was computed for.
    size: GridSize,
    /// Edge length of one cell in pixels.
    cell_px: u32,
    /// X of the grid's top-left corner in viewport pixels.
    origin_x: u32,
    /// Y of the grid's top-left corner in viewport pixels.
    origin_y: u32,
}

impl GridLayout {
    /// Compute a layout for a grid centered in the given viewport.
    ///
    /// When the clamped cell size makes the grid larger than the
    /// viewport, the grid is pinned to the top-left corner instead.
    pub const fn compute(
        viewport_width: u32,
        viewport_height: u32,
        size: GridSize,
        metrics: CellMetrics,
    ) -> Self {
        let cell_px = cell_size_for(viewport_width, viewport_height, size, metrics);
        let edge = cell_px * size.side();
        Self {
            size,
            cell_px,
            origin_x: viewport_width.saturating_sub(edge) / 2,
            origin_y: viewport_height.saturating_sub(edge) / 2,
        }
    }

    /// The grid size this layout was computed for.
    #[inline]
    pub const fn size(&self) -> GridSize {
        self.size
    }

    /// Edge length of one cell in pixels.
    #[inline]
    pub const fn cell_px(&self) -> u32 {
        self.cell_px
    }

    /// Edge length of the whole grid in pixels.
    #[inline]
    pub const fn edge_px(&self) -> u32 {
        self.cell_px * self.size.side()
    }

    /// Top-left corner of the grid in viewport pixels.
    #[inline]
    pub const fn origin(&self) -> (u32, u32) {
        (self.origin_x, self.origin_y)
    }

    /// Check if a viewport point lands inside the grid.
    #[inline]
    pub const fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.origin_x
            && px < self.origin_x + self.edge_px()
            && py >= self.origin_y
            && py < self.origin_y + self.edge_px()
    }

    /// Hit-test a viewport point to a buffer index.
    ///
    /// Returns `None` for points outside the grid. This is the
    /// point-under-pointer resolution used for both mouse moves and
    /// touch drags (touch events carry no per-cell target of their own).
    #[inline]
    pub const fn resolve(&self, px: u32, py: u32) -> Option<usize> {
        if !self.contains(px, py) {
            return None;
        }
        let cell_x = (px - self.origin_x) / self.cell_px;
        let cell_y = (py - self.origin_y) / self.cell_px;
        Some((cell_y * self.size.side() + cell_x) as usize)
    }

    /// Top-left viewport position of a cell, for the visual layer.
    ///
    /// Returns `None` for out-of-range indices.
    pub const fn cell_origin(&self, index: usize) -> Option<(u32, u32)> {
        if index >= self.size.cell_count() {
            return None;
        }
        let side = self.size.side();
        #[allow(clippy::cast_possible_truncation)]
        let (x, y) = (index as u32 % side, index as u32 / side);
        Some((
            self.origin_x + x * self.cell_px,
            self.origin_y + y * self.cell_px,
        ))
    }
}

impl std::fmt::Debug for GridLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "GridLayout({} @ {}px/cell, origin {},{})",
            self.size, self.cell_px, self.origin_x, self.origin_y
        )
    }
}
