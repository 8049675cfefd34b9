/// Types whose parametrization direction can be reversed.
pub trait Invertible: Clone {
    /// Reverse the parametrization in place.
    fn invert(&mut self);

    /// Return a copy traversed in the opposite direction.
    fn inverse(&self) -> Self {
        let mut reversed = self.clone();
        reversed.invert();
        reversed
    }
}
