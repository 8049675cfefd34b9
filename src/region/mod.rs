pub mod assembly;
pub mod curved_polygon;
pub mod duplicates;
pub mod intersection_region;

pub use assembly::*;
pub use curved_polygon::*;
pub use duplicates::*;
pub use intersection_region::*;
