//! Core domain types for swatch.
//!
//! - `Colour` / `ColourKey` - RGB values and their packed 24-bit form
//! - `Region` - rectangular selections
//! - `ColourEntry` / `ColourTable` - analysis output

mod colour;
mod region;
mod table;

pub use colour::{Colour, ColourKey};
pub use region::{Region, MIN_REGION_SIDE};
pub use table::{ColourEntry, ColourTable};
