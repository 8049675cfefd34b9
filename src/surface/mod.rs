pub mod bezier_surface;
pub mod jacobian;
pub mod locate;
pub mod surface_intersection;
pub mod triangle;

pub use bezier_surface::*;
pub use jacobian::*;
pub use locate::*;
pub use triangle::*;
