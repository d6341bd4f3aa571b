//! Colour-vision-deficiency simulation.
//!
//! A fixed 3x3 linear transform per deficiency, applied in raw sRGB channel
//! space. Results are rounded and clamped to `0..=255`; alpha is untouched.

use std::fmt;

use image::RgbaImage;

type Matrix = [[f64; 3]; 3];

const PROTAN: Matrix = [
    [0.56667, 0.43333, 0.00000],
    [0.55833, 0.44167, 0.00000],
    [0.00000, 0.24167, 0.75833],
];

const DEUTAN: Matrix = [
    [0.62500, 0.37500, 0.00000],
    [0.70000, 0.30000, 0.00000],
    [0.00000, 0.30000, 0.70000],
];

const TRITAN: Matrix = [
    [0.95000, 0.05000, 0.00000],
    [0.00000, 0.43333, 0.56667],
    [0.00000, 0.47500, 0.52500],
];

/// A simulated colour-vision deficiency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Deficiency {
    /// Red-blind (protanopia)
    Protan,
    /// Green-blind (deuteranopia)
    Deutan,
    /// Blue-blind (tritanopia)
    Tritan,
}

impl Deficiency {
    fn matrix(self) -> &'static Matrix {
        match self {
            Deficiency::Protan => &PROTAN,
            Deficiency::Deutan => &DEUTAN,
            Deficiency::Tritan => &TRITAN,
        }
    }

    /// Transform a single RGB triple.
    pub fn apply(self, rgb: [u8; 3]) -> [u8; 3] {
        let m = self.matrix();
        let [r, g, b] = rgb.map(f64::from);

        let mut out = [0u8; 3];
        for (channel, row) in out.iter_mut().zip(m) {
            let v = row[0] * r + row[1] * g + row[2] * b;
            *channel = v.round().clamp(0.0, 255.0) as u8;
        }
        out
    }

    /// A transformed copy of `image`. The input is left as is.
    pub fn simulate(self, image: &RgbaImage) -> RgbaImage {
        let mut out = image.clone();
        for pixel in out.pixels_mut() {
            let [r, g, b, a] = pixel.0;
            let [r, g, b] = self.apply([r, g, b]);
            pixel.0 = [r, g, b, a];
        }
        out
    }
}

impl fmt::Display for Deficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Deficiency::Protan => write!(f, "protan"),
            Deficiency::Deutan => write!(f, "deutan"),
            Deficiency::Tritan => write!(f, "tritan"),
        }
    }
}
