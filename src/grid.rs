#![forbid(unsafe_code)]
//! Fixed-size grid of tri-state modules and its pixel export.

use core::fmt;

use tracing::warn;

use crate::storage::{BitStorage, DefaultStorage};

/// RGB565 white: every channel bit set.
pub const RGB565_WHITE: u16 = 0xFFFF;

/// RGB565 black: every channel bit clear.
pub const RGB565_BLACK: u16 = 0x0000;

/// Quiet zone, in modules, used when no margin is given.
pub const DEFAULT_MARGIN: usize = 4;

/// Largest pixel buffer the RGB565 export will allocate.
pub const MAX_RGB565_PIXELS: usize = 1024 * 1024;

/// A two-dimensional grid of modules, each either empty, light (`false`) or dark (`true`).
///
/// A cell stays empty until it is first [`set`](BitGrid::set). Matrix construction relies on
/// this to tell reserved-but-undrawn areas apart from real data. The grid does not enforce
/// write-once semantics.
///
/// Internally two layers of the same storage layout are kept side by side: one records
/// whether a cell has been assigned, the other holds its value.
///
/// # Example
///
/// ```rust
/// use qrbits::grid::BitGrid;
///
/// let mut grid: BitGrid = BitGrid::new(2, 1);
/// grid.set(0, 0, true);
/// assert!(!grid.empty(0, 0));
/// assert!(grid.empty(1, 0));
/// assert_eq!(grid.to_string(), "# \n");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitGrid<S: BitStorage = DefaultStorage> {
    width: usize,
    height: usize,
    assigned: S,
    values: S,
}

impl BitGrid<DefaultStorage> {
    /// Creates a grid on the default storage layout with every cell empty.
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_storage(width, height)
    }
}

impl<S: BitStorage> BitGrid<S> {
    /// Creates a grid on an explicitly chosen storage layout with every cell empty.
    pub fn with_storage(width: usize, height: usize) -> Self {
        let cells = width
            .checked_mul(height)
            .expect("Grid dimensions overflow");
        Self {
            width,
            height,
            assigned: S::with_len(cells),
            values: S::with_len(cells),
        }
    }

    /// Returns the number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "Cell ({}, {}) outside {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        y * self.width + x
    }

    /// Returns `true` if the cell has not been assigned yet.
    pub fn empty(&self, x: usize, y: usize) -> bool {
        !self.assigned.get(self.index(x, y))
    }

    /// Returns the value of the cell at `(x, y)`.
    ///
    /// Check [`empty`](BitGrid::empty) first: an empty cell has no value and reads as `false`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the grid.
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.values.get(self.index(x, y))
    }

    /// Assigns the cell at `(x, y)`.
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        let i = self.index(x, y);
        self.assigned.set(i, true);
        self.values.set(i, value);
    }

    /// Returns the pixel dimensions `(width, height)` that
    /// [`to_rgb565_with_margin`](BitGrid::to_rgb565_with_margin) produces for the same arguments,
    /// or `None` if either side overflows `usize`.
    ///
    /// The size cap is not applied here; a size whose area is zero or above
    /// [`MAX_RGB565_PIXELS`] renders as an empty buffer.
    pub fn rgb565_size(&self, block_size: usize, margin: usize) -> Option<(usize, usize)> {
        let m = margin.checked_mul(2)?;
        let width = m.checked_add(self.width)?.checked_mul(block_size)?;
        let height = m.checked_add(self.height)?.checked_mul(block_size)?;
        Some((width, height))
    }

    /// Renders the grid with the given block size and the default quiet zone.
    pub fn to_rgb565(&self, block_size: usize) -> Vec<u16> {
        self.to_rgb565_with_margin(block_size, DEFAULT_MARGIN)
    }

    /// Renders the grid into the largest square-pixel image that fits `max_width` by
    /// `max_height`, using the default quiet zone.
    ///
    /// The block size is the smaller of the two per-axis fits, floored at one pixel per
    /// module. The image may be smaller than the box.
    pub fn to_rgb565_with_size(&self, max_width: usize, max_height: usize) -> Vec<u16> {
        let block_width = max_width / self.width.saturating_add(2 * DEFAULT_MARGIN);
        let block_height = max_height / self.height.saturating_add(2 * DEFAULT_MARGIN);
        let block_size = block_width.min(block_height).max(1);
        self.to_rgb565_with_margin(block_size, DEFAULT_MARGIN)
    }

    /// Renders the grid as row-major RGB565 pixels.
    ///
    /// Each module becomes a `block_size` square: black for dark cells, white for light and
    /// empty cells. A white quiet zone `margin` modules wide surrounds the grid.
    ///
    /// Returns an empty buffer when the image would hold no pixels or more than
    /// [`MAX_RGB565_PIXELS`].
    pub fn to_rgb565_with_margin(&self, block_size: usize, margin: usize) -> Vec<u16> {
        let dimensions = self
            .rgb565_size(block_size, margin)
            .and_then(|(w, h)| Some((w, h, w.checked_mul(h)?)));
        let (width, _height, size) = match dimensions {
            Some(d) if d.2 > 0 && d.2 <= MAX_RGB565_PIXELS => d,
            _ => {
                warn!(
                    block_size,
                    margin,
                    grid_width = self.width,
                    grid_height = self.height,
                    "RGB565 export rejected: pixel count out of range"
                );
                return Vec::new();
            }
        };

        let mut pixels = vec![RGB565_WHITE; size];
        for y in 0..self.height {
            for x in 0..self.width {
                if !self.values.get(y * self.width + x) {
                    continue;
                }
                let x0 = block_size * (x + margin);
                let y0 = block_size * (y + margin);
                for dy in 0..block_size {
                    let row = (y0 + dy) * width;
                    pixels[row + x0..row + x0 + block_size].fill(RGB565_BLACK);
                }
            }
        }
        pixels
    }
}

impl<S: BitStorage> fmt::Display for BitGrid<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let c = if self.empty(x, y) {
                    ' '
                } else if self.get(x, y) {
                    '#'
                } else {
                    '_'
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
