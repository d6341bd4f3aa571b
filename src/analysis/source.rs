//! Read-only pixel access for the analysers.

use image::RgbaImage;

use crate::types::Region;

/// A rectangular grid of RGBA samples.
///
/// Analysers only ever read from a source; callers that need to transform
/// an image (e.g. deficiency simulation) do so on their own copy.
pub trait PixelSource {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// RGBA at `(x, y)`. Callers keep coordinates in bounds.
    fn pixel(&self, x: u32, y: u32) -> [u8; 4];

    /// The region covering the whole source.
    fn full_region(&self) -> Region {
        Region::full(self.width(), self.height())
    }
}

impl PixelSource for RgbaImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.get_pixel(x, y).0
    }
}

impl<S: PixelSource + ?Sized> PixelSource for &S {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        (**self).pixel(x, y)
    }
}

/// A plain row-major RGBA buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<[u8; 4]>,
}

impl PixelBuffer {
    /// Wrap row-major samples. Returns `None` if `data` is not `width * height` long.
    pub fn new(width: u32, height: u32, data: Vec<[u8; 4]>) -> Option<Self> {
        if data.len() as u64 != width as u64 * height as u64 {
            return None;
        }
        Some(Self { width, height, data })
    }

    /// A buffer filled with one value.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            data: vec![rgba; len],
        }
    }

    pub fn put(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let i = self.index(x, y);
        self.data[i] = rgba;
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

impl PixelSource for PixelBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.data[self.index(x, y)]
    }
}

/// Samples of `region` in row-major order.
///
/// The region must lie within the source.
pub fn region_pixels<S: PixelSource + ?Sized>(
    source: &S,
    region: Region,
) -> impl Iterator<Item = [u8; 4]> + '_ {
    (region.y..region.y + region.h).flat_map(move |y| {
        (region.x..region.x + region.w).map(move |x| source.pixel(x, y))
    })
}
