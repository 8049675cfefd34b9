pub mod classify;
pub mod edge_intersection;

pub use classify::*;
pub use edge_intersection::*;

#[cfg(test)]
mod tests;
