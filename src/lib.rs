#![allow(clippy::needless_range_loop)]

mod bounding_box;
mod classification;
mod curve;
mod error;
mod intersection;
mod misc;
mod region;
mod surface;

pub mod prelude {
    pub use crate::bounding_box::*;
    pub use crate::classification::*;
    pub use crate::curve::*;
    pub use crate::error::*;
    pub use crate::intersection::*;
    pub use crate::misc::*;
    pub use crate::region::*;
    pub use crate::surface::*;
}
