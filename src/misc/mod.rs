pub mod binomial;
pub mod floating_point;
pub mod invertible;
pub mod planar;
pub mod sign;

pub use binomial::*;
pub use floating_point::*;
pub use invertible::*;
pub use planar::*;
pub use sign::*;
