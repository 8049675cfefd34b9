use nalgebra::RealField;
use num_traits::ToPrimitive;

/// Trait for floating point types (f32, f64)
/// Mainly used to identify the type of the field in nalgebra
pub trait FloatingPoint: RealField + ToPrimitive + Copy {
    /// Distance from `|self|` to the next representable value (unit in the last place).
    fn spacing(self) -> Self;
}

impl FloatingPoint for f32 {
    fn spacing(self) -> Self {
        let magnitude = self.abs();
        if !magnitude.is_finite() {
            return f32::NAN;
        }
        f32::from_bits(magnitude.to_bits() + 1) - magnitude
    }
}

impl FloatingPoint for f64 {
    fn spacing(self) -> Self {
        let magnitude = self.abs();
        if !magnitude.is_finite() {
            return f64::NAN;
        }
        f64::from_bits(magnitude.to_bits() + 1) - magnitude
    }
}

/// Convert a scalar into `f64` for diagnostics.
pub(crate) fn as_f64<T: FloatingPoint>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
