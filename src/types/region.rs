//! Rectangular sub-areas of an image.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SwatchError};

/// Smallest accepted side length for an analysed region.
pub const MIN_REGION_SIDE: u32 = 2;

/// An axis-aligned rectangle in image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Region {
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// The region covering a whole `width` x `height` image.
    pub const fn full(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Number of pixels covered.
    pub fn area(&self) -> u64 {
        self.w as u64 * self.h as u64
    }

    /// Reject selections thinner than two pixels on either side.
    pub fn validate(&self) -> Result<()> {
        if self.w < MIN_REGION_SIDE || self.h < MIN_REGION_SIDE {
            return Err(SwatchError::InvalidRegion {
                width: self.w,
                height: self.h,
            });
        }
        Ok(())
    }

    /// Whether the region lies entirely inside a `width` x `height` image.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.x as u64 + self.w as u64 <= width as u64
            && self.y as u64 + self.h as u64 <= height as u64
    }

    /// Like [`Region::fits_within`], reported as `RegionOutOfBounds`.
    pub fn check_bounds(&self, width: u32, height: u32) -> Result<()> {
        if !self.fits_within(width, height) {
            return Err(SwatchError::RegionOutOfBounds {
                region: *self,
                width,
                height,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}x{}", self.x, self.y, self.w, self.h)
    }
}

/// Parses `X,Y,WxH` (e.g. `10,20,64x48`).
impl FromStr for Region {
    type Err = SwatchError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.trim().splitn(3, ',').collect();
        if parts.len() != 3 {
            return Err(SwatchError::Parse {
                message: format!("Invalid region '{}': expected X,Y,WxH", s),
                help: Some("Use the format X,Y,WxH, for example: 0,0,64x64".to_string()),
            });
        }

        let x = parse_coord(parts[0], "x", s)?;
        let y = parse_coord(parts[1], "y", s)?;
        let (w, h) = parse_dimensions(parts[2])?;

        Ok(Self::new(x, y, w, h))
    }
}

fn parse_coord(part: &str, axis: &str, whole: &str) -> Result<u32> {
    part.trim().parse().map_err(|_| SwatchError::Parse {
        message: format!("Invalid {} offset '{}' in region '{}'", axis, part, whole),
        help: Some("Offsets must be non-negative integers".to_string()),
    })
}

/// Parse a "WxH" dimension string into (width, height).
fn parse_dimensions(s: &str) -> Result<(u32, u32)> {
    let s = s.trim();
    let parts: Vec<&str> = s.splitn(2, |c| c == 'x' || c == 'X').collect();
    if parts.len() != 2 {
        return Err(SwatchError::Parse {
            message: format!("Invalid dimensions '{}': expected WxH (e.g. 16x16)", s),
            help: Some("Use the format WxH, for example: 16x16, 8x16".to_string()),
        });
    }

    let w: u32 = parts[0].parse().map_err(|_| SwatchError::Parse {
        message: format!("Invalid width '{}' in dimensions '{}'", parts[0], s),
        help: Some("Width must be a non-negative integer".to_string()),
    })?;

    let h: u32 = parts[1].parse().map_err(|_| SwatchError::Parse {
        message: format!("Invalid height '{}' in dimensions '{}'", parts[1], s),
        help: Some("Height must be a non-negative integer".to_string()),
    })?;

    Ok((w, h))
}
