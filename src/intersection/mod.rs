pub mod arena;
pub mod candidate;
pub mod curve_curve;
pub mod geometric;
pub mod intersection_options;
pub mod linearization;
pub mod segment;
pub mod strategy;

pub use arena::*;
pub use candidate::*;
pub use geometric::*;
pub use intersection_options::*;
pub use linearization::*;
pub use segment::*;
pub use strategy::*;


/// Intersection between two objects trait
pub trait Intersects<'a, T> {
    type Output;
    type Option;

    fn find_intersection(&'a self, other: T, option: Self::Option) -> Self::Output;
}
