//! PixelBuffer: The size×size grid of pixel colors.
//!
//! The buffer is pure data plus algorithms. It knows nothing about
//! viewports, pointers, or the host UI; the rendering layer addresses it
//! exclusively by cell index. Cells are stored in a contiguous `Vec` in
//! row-major order: `index = y * side + x`.

use std::collections::VecDeque;

use super::color::Rgb;

/// The grid side lengths the editor offers.
///
/// Anything outside this set is rejected (`new`) or clamped (`clamping`)
/// before a buffer is ever constructed, so `PixelBuffer` itself never has
/// to validate its dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GridSize {
    /// 8×8 grid.
    Size8,
    /// 16×16 grid (the default selection).
    Size16,
    /// 32×32 grid.
    Size32,
    /// 64×64 grid.
    Size64,
}

impl GridSize {
    /// All allowed sizes, smallest first.
    pub const ALL: [Self; 4] = [Self::Size8, Self::Size16, Self::Size32, Self::Size64];

    /// Construct from a raw side length, rejecting disallowed values.
    pub fn new(side: u32) -> Option<Self> {
        match side {
            8 => Some(Self::Size8),
            16 => Some(Self::Size16),
            32 => Some(Self::Size32),
            64 => Some(Self::Size64),
            _ => None,
        }
    }

    /// Construct from a raw side length, clamping to the nearest allowed
    /// value (ties round down).
    pub fn clamping(side: u32) -> Self {
        Self::ALL
            .into_iter()
            .min_by_key(|s| s.side().abs_diff(side))
            .unwrap_or_default()
    }

    /// The side length in cells.
    #[inline]
    pub const fn side(self) -> u32 {
        match self {
            Self::Size8 => 8,
            Self::Size16 => 16,
            Self::Size32 => 32,
            Self::Size64 => 64,
        }
    }

    /// The total number of cells (`side²`).
    #[inline]
    pub const fn cell_count(self) -> usize {
        (self.side() * self.side()) as usize
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::Size16
    }
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{0}x{0}", self.side())
    }
}

/// A square grid of optional pixel colors.
///
/// `None` is the empty (unpainted) state. The buffer is exclusively owned
/// by the active editing session: it is replaced wholesale on grid-size
/// change or project load and there is never a concurrent writer.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Grid dimensions.
    size: GridSize,
    /// Contiguous cell storage (row-major order). Always `side²` long.
    cells: Vec<Option<Rgb>>,
}

impl PixelBuffer {
    /// Create a new buffer with all cells empty.
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![None; size.cell_count()],
        }
    }

    /// Get the grid size.
    #[inline]
    pub const fn size(&self) -> GridSize {
        self.size
    }

    /// Get the side length in cells.
    #[inline]
    pub const fn side(&self) -> u32 {
        self.size.side()
    }

    /// Get the total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if every cell is empty (unpainted).
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Get a reference to the underlying cell slice.
    #[inline]
    pub fn cells(&self) -> &[Option<Rgb>] {
        &self.cells
    }

    /// Convert (x, y) coordinates to a linear index.
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn index_of(&self, x: u32, y: u32) -> Option<usize> {
        let side = self.side();
        if x < side && y < side {
            Some((y * side + x) as usize)
        } else {
            None
        }
    }

    /// Convert a linear index to (x, y) coordinates.
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub fn coords_of(&self, index: usize) -> Option<(u32, u32)> {
        if index < self.cells.len() {
            let side = self.side() as usize;
            Some(((index % side) as u32, (index / side) as u32))
        } else {
            None
        }
    }

    /// Get the color at a linear index.
    ///
    /// Returns `None` both for empty cells and for out-of-range indices.
    #[inline]
    pub fn color_at(&self, index: usize) -> Option<Rgb> {
        self.cells.get(index).copied().flatten()
    }

    /// Paint a cell.
    ///
    /// Out-of-range indices are silently ignored: stale indices from
    /// deferred event handlers must not be fatal.
    #[inline]
    pub fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = Some(color);
        }
    }

    /// Erase a cell back to the empty state.
    ///
    /// Same out-of-range behavior as [`set_pixel`](Self::set_pixel).
    #[inline]
    pub fn clear_pixel(&mut self, index: usize) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = None;
        }
    }

    /// Clear the entire buffer (all cells empty).
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Reallocate to a new grid size, discarding all current content.
    ///
    /// No migration or rescaling of existing art is performed; the editor
    /// replaces the canvas wholesale when the size changes.
    pub fn resize(&mut self, new_size: GridSize) {
        self.size = new_size;
        self.cells = vec![None; new_size.cell_count()];
    }

    /// Region-growing repaint of all 4-connected same-colored cells from
    /// a seed index. Returns the number of repainted cells.
    ///
    /// The target color is whatever the seed currently holds, including
    /// the empty state. A cell qualifies only on exact color equality.
    /// Out-of-range seeds and `target == new_color` are no-ops (the
    /// latter guards infinite re-entry into the already-filled region).
    pub fn flood_fill(&mut self, start: usize, new_color: Rgb) -> usize {
        let Some(target) = self.cells.get(start).copied() else {
            return 0;
        };
        if target == Some(new_color) {
            return 0;
        }

        let side = self.side() as usize;
        let mut visited = vec![false; self.cells.len()];
        let mut queue = VecDeque::new();
        let mut repainted = 0;

        visited[start] = true;
        queue.push_back(start);

        while let Some(index) = queue.pop_front() {
            if self.cells[index] != target {
                continue;
            }
            self.cells[index] = Some(new_color);
            repainted += 1;

            let (x, y) = (index % side, index / side);

            // 4-connected neighbors; grid edges block the step, rows
            // never wrap.
            let neighbors = [
                (x > 0).then(|| index - 1),
                (x + 1 < side).then(|| index + 1),
                (y > 0).then(|| index - side),
                (y + 1 < side).then(|| index + side),
            ];

            for neighbor in neighbors.into_iter().flatten() {
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    queue.push_back(neighbor);
                }
            }
        }

        repainted
    }

    /// Sample up to `max` distinct non-empty colors in first-encountered
    /// order during a forward scan.
    ///
    /// This is a cosmetic summary for thumbnails and list previews; it
    /// makes no attempt to find dominant colors.
    pub fn color_usage_sample(&self, max: usize) -> Vec<Rgb> {
        let mut sample = Vec::new();
        for color in self.cells.iter().copied().flatten() {
            if sample.len() >= max {
                break;
            }
            if !sample.contains(&color) {
                sample.push(color);
            }
        }
        sample
    }
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let painted = self.cells.iter().filter(|c| c.is_some()).count();
        f.debug_struct("PixelBuffer")
            .field("size", &self.size)
            .field("painted", &painted)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const GREEN: Rgb = Rgb::new(0, 255, 0);

    #[test]
    fn test_grid_size_new() {
        assert_eq!(GridSize::new(8), Some(GridSize::Size8));
        assert_eq!(GridSize::new(64), Some(GridSize::Size64));
        assert_eq!(GridSize::new(0), None);
        assert_eq!(GridSize::new(13), None);
        assert_eq!(GridSize::new(128), None);
    }

    #[test]
    fn test_grid_size_clamping() {
        assert_eq!(GridSize::clamping(0), GridSize::Size8);
        assert_eq!(GridSize::clamping(10), GridSize::Size8);
        assert_eq!(GridSize::clamping(20), GridSize::Size16);
        assert_eq!(GridSize::clamping(1000), GridSize::Size64);
    }

    #[test]
    fn test_new_buffer_all_empty() {
        for size in GridSize::ALL {
            let buffer = PixelBuffer::new(size);
            assert_eq!(buffer.len(), (size.side() * size.side()) as usize);
            assert!(buffer.is_empty());
        }
    }

    #[test]
    fn test_set_and_clear_pixel() {
        let mut buffer = PixelBuffer::new(GridSize::Size8);
        buffer.set_pixel(10, RED);
        assert_eq!(buffer.color_at(10), Some(RED));

        buffer.clear_pixel(10);
        assert_eq!(buffer.color_at(10), None);
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut buffer = PixelBuffer::new(GridSize::Size8);
        buffer.set_pixel(64, RED); // One past the end
        buffer.set_pixel(usize::MAX, RED);
        buffer.clear_pixel(9999);
        assert!(buffer.is_empty());
        assert_eq!(buffer.color_at(64), None);
    }

    #[test]
    fn test_index_coords_round_trip() {
        let buffer = PixelBuffer::new(GridSize::Size16);
        assert_eq!(buffer.index_of(5, 10), Some(10 * 16 + 5));
        assert_eq!(buffer.coords_of(10 * 16 + 5), Some((5, 10)));
        assert_eq!(buffer.index_of(16, 0), None);
        assert_eq!(buffer.index_of(0, 16), None);
        assert_eq!(buffer.coords_of(256), None);
    }

    #[test]
    fn test_resize_discards_content() {
        let mut buffer = PixelBuffer::new(GridSize::Size8);
        buffer.set_pixel(0, RED);

        buffer.resize(GridSize::Size16);
        assert_eq!(buffer.size(), GridSize::Size16);
        assert_eq!(buffer.len(), 256);
        assert_eq!(buffer.color_at(0), None);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_resize_to_same_size_still_discards() {
        let mut buffer = PixelBuffer::new(GridSize::Size8);
        buffer.set_pixel(0, RED);
        buffer.resize(GridSize::Size8);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_flood_fill_uniform_grid() {
        // All cells share one color: a fill seeded anywhere covers 100%
        // of the grid and no cell retains the old color.
        let mut buffer = PixelBuffer::new(GridSize::Size8);
        for i in 0..buffer.len() {
            buffer.set_pixel(i, Rgb::DEFAULT_PAINT);
        }
        let repainted = buffer.flood_fill(5, Rgb::WHITE);
        assert_eq!(repainted, buffer.len());
        assert!(buffer.cells().iter().all(|c| *c == Some(Rgb::WHITE)));
    }

    #[test]
    fn test_flood_fill_empty_grid() {
        // Filling the empty region paints every cell.
        let mut buffer = PixelBuffer::new(GridSize::Size8);
        let repainted = buffer.flood_fill(0, RED);
        assert_eq!(repainted, 64);
        assert!(buffer.cells().iter().all(|c| *c == Some(RED)));
    }

    #[test]
    fn test_flood_fill_stops_at_different_color() {
        // Paint index 0 on an otherwise empty 8x8 grid, then fill from
        // index 0. The seed's neighbors are empty (a different "color"),
        // so only index 0 changes.
        let mut buffer = PixelBuffer::new(GridSize::Size8);
        buffer.set_pixel(0, RED);

        let repainted = buffer.flood_fill(0, GREEN);
        assert_eq!(repainted, 1);
        assert_eq!(buffer.color_at(0), Some(GREEN));
        for i in 1..buffer.len() {
            assert_eq!(buffer.color_at(i), None);
        }
    }

    #[test]
    fn test_flood_fill_checkerboard_single_cell() {
        // On a checkerboard no 4-neighbor matches the seed, so the fill
        // touches exactly one cell.
        let mut buffer = PixelBuffer::new(GridSize::Size8);
        for y in 0..8 {
            for x in 0..8 {
                let index = buffer.index_of(x, y).unwrap();
                if (x + y) % 2 == 0 {
                    buffer.set_pixel(index, RED);
                } else {
                    buffer.set_pixel(index, GREEN);
                }
            }
        }

        let repainted = buffer.flood_fill(0, Rgb::WHITE);
        assert_eq!(repainted, 1);
        assert_eq!(buffer.color_at(0), Some(Rgb::WHITE));
        assert_eq!(buffer.color_at(2), Some(RED)); // Same color, not connected
    }

    #[test]
    fn test_flood_fill_no_op_when_target_equals_new() {
        let mut buffer = PixelBuffer::new(GridSize::Size8);
        for i in 0..buffer.len() {
            buffer.set_pixel(i, RED);
        }
        assert_eq!(buffer.flood_fill(0, RED), 0);
        assert!(buffer.cells().iter().all(|c| *c == Some(RED)));
    }

    #[test]
    fn test_flood_fill_out_of_range_seed() {
        let mut buffer = PixelBuffer::new(GridSize::Size8);
        assert_eq!(buffer.flood_fill(64, RED), 0);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_flood_fill_does_not_wrap_rows() {
        // Paint the left and right columns with an empty gap between; a
        // fill seeded at the left edge must not leak across the row
        // boundary to the right edge.
        let mut buffer = PixelBuffer::new(GridSize::Size8);
        for y in 0..8 {
            buffer.set_pixel(buffer.index_of(0, y).unwrap(), RED);
            buffer.set_pixel(buffer.index_of(7, y).unwrap(), RED);
        }

        let repainted = buffer.flood_fill(0, GREEN);
        assert_eq!(repainted, 8); // Left column only
        for y in 0..8 {
            assert_eq!(buffer.color_at(buffer.index_of(7, y).unwrap()), Some(RED));
        }
    }

    #[test]
    fn test_flood_fill_respects_boundaries() {
        // A painted vertical wall splits the empty region in two.
        let mut buffer = PixelBuffer::new(GridSize::Size8);
        for y in 0..8 {
            buffer.set_pixel(buffer.index_of(3, y).unwrap(), RED);
        }

        let repainted = buffer.flood_fill(0, GREEN);
        assert_eq!(repainted, 3 * 8); // Columns 0..3 only
        assert_eq!(buffer.color_at(buffer.index_of(4, 0).unwrap()), None);
        assert_eq!(buffer.color_at(buffer.index_of(3, 0).unwrap()), Some(RED));
    }

    #[test]
    fn test_color_usage_sample_order_and_cap() {
        let mut buffer = PixelBuffer::new(GridSize::Size8);
        buffer.set_pixel(3, GREEN);
        buffer.set_pixel(5, RED);
        buffer.set_pixel(7, GREEN);
        buffer.set_pixel(9, Rgb::WHITE);

        // First-encountered order during a forward scan.
        assert_eq!(buffer.color_usage_sample(2), vec![GREEN, RED]);
        assert_eq!(buffer.color_usage_sample(10), vec![GREEN, RED, Rgb::WHITE]);
        assert!(buffer.color_usage_sample(0).is_empty());
    }

    #[test]
    fn test_color_usage_sample_empty_buffer() {
        let buffer = PixelBuffer::new(GridSize::Size8);
        assert!(buffer.color_usage_sample(2).is_empty());
    }
}
