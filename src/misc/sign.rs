use super::FloatingPoint;

/// Sign of a scalar or of a polynomial over a whole domain.
/// `Zero` doubles as "mixed" when describing a polynomial.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    pub fn of<T: FloatingPoint>(value: T) -> Self {
        if value > T::zero() {
            Sign::Positive
        } else if value < T::zero() {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }
}

impl From<Sign> for i8 {
    fn from(sign: Sign) -> Self {
        match sign {
            Sign::Negative => -1,
            Sign::Zero => 0,
            Sign::Positive => 1,
        }
    }
}
