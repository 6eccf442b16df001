use crate::grid::{BitGrid, DEFAULT_MARGIN};
use crate::storage::BitStorage;

use image::error::{ImageError, LimitError, LimitErrorKind};
use image::{ImageBuffer, Luma};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/*---- Utilities ----*/

/// Largest image, in pixels, that [`grid_to_image`] will allocate.
pub const MAX_IMAGE_PIXELS: u64 = 64 * 1024 * 1024;

/// Block size and quiet zone used when rendering a grid to an image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Pixels per module, on both axes.
    pub block_size: u32,
    /// Quiet zone width, in modules.
    pub margin: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            block_size: 1,
            margin: DEFAULT_MARGIN as u32,
        }
    }
}

// Returns a string of SVG code for an image depicting
// the given grid, with the given number of border modules.
// Empty cells are drawn light. The string always uses Unix newlines (\n).
// Returns None if the bordered size overflows.
pub fn to_svg_string<S: BitStorage>(grid: &BitGrid<S>, border: usize) -> Option<String> {
    let border2 = border.checked_mul(2)?;
    let width = grid.width().checked_add(border2)?;
    let height = grid.height().checked_add(border2)?;

    let mut result = String::new();
    result += "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
    result += "<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\" \"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">\n";
    result += &format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" viewBox=\"0 0 {} {}\" stroke=\"none\">\n",
        width, height
    );
    result += "\t<rect width=\"100%\" height=\"100%\" fill=\"#FFFFFF\"/>\n";
    result += "\t<path d=\"";
    let mut first = true;
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if !grid.empty(x, y) && grid.get(x, y) {
                if !first {
                    result += " ";
                }
                first = false;
                // Cannot overflow: x + border < width.
                result += &format!("M{},{}h1v1h-1z", x + border, y + border);
            }
        }
    }
    result += "\" fill=\"#000000\"/>\n";
    result += "</svg>\n";
    Some(result)
}

/// Returns the image dimensions for `grid` under `options`, or `None` if a side does not fit
/// in `u32` or the area exceeds [`MAX_IMAGE_PIXELS`].
fn image_size<S: BitStorage>(grid: &BitGrid<S>, options: RenderOptions) -> Option<(u32, u32)> {
    let block = options.block_size.max(1);
    let border2 = options.margin.checked_mul(2)?;
    let side = |modules: usize| -> Option<u32> {
        u32::try_from(modules).ok()?.checked_add(border2)?.checked_mul(block)
    };
    let (width, height) = (side(grid.width())?, side(grid.height())?);
    (u64::from(width) * u64::from(height) <= MAX_IMAGE_PIXELS).then_some((width, height))
}

/// Converts a grid to a grayscale image buffer.
///
/// Dark cells become black blocks, light and empty cells white ones. The quiet zone is
/// white.
///
/// # Errors
///
/// Returns an [`ImageError::Limits`] error if the image dimensions overflow `u32` or the
/// image would hold more than [`MAX_IMAGE_PIXELS`] pixels.
///
/// # Example
///
/// ```rust
/// use qrbits::grid::BitGrid;
/// use qrbits::helper::{grid_to_image, RenderOptions};
///
/// let grid: BitGrid = BitGrid::new(21, 21);
/// let img = grid_to_image(&grid, RenderOptions::default()).unwrap();
/// assert_eq!(img.dimensions(), (29, 29));
/// ```
pub fn grid_to_image<S: BitStorage>(
    grid: &BitGrid<S>,
    options: RenderOptions,
) -> Result<ImageBuffer<Luma<u8>, Vec<u8>>, ImageError> {
    let (width, height) = image_size(grid, options).ok_or_else(|| {
        warn!(
            block_size = options.block_size,
            margin = options.margin,
            grid_width = grid.width(),
            grid_height = grid.height(),
            "image export rejected: dimensions out of range"
        );
        ImageError::Limits(LimitError::from_kind(LimitErrorKind::DimensionError))
    })?;
    let block = options.block_size.max(1);
    let m = options.margin as usize;

    Ok(ImageBuffer::from_fn(width, height, |px, py| {
        let x = (px / block) as usize;
        let y = (py / block) as usize;
        let dark = x >= m
            && y >= m
            && x - m < grid.width()
            && y - m < grid.height()
            && !grid.empty(x - m, y - m)
            && grid.get(x - m, y - m);
        if dark {
            Luma([0u8]) // Black
        } else {
            Luma([255u8]) // White
        }
    }))
}

/// Renders a grid and saves it to `path`. The format follows the file extension.
///
/// Missing parent directories are created.
///
/// # Errors
///
/// Returns an `image::ImageError` if the dimensions are rejected by [`grid_to_image`], the
/// directory cannot be created, or the image cannot be written.
pub fn save_grid_image<S: BitStorage>(
    grid: &BitGrid<S>,
    path: impl AsRef<Path>,
    options: RenderOptions,
) -> Result<(), ImageError> {
    let path = path.as_ref();
    let img = grid_to_image(grid, options)?;
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir)?;
        }
    }
    debug!(path = %path.display(), width = img.width(), height = img.height(), "saving grid image");
    img.save(path)
}
