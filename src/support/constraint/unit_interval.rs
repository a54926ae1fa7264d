mod upper_open;

pub use upper_open::UnitIntervalUpperOpen;

/// Supplies 0 and 1 for types used with the unit interval constraints.
///
/// Implement this trait for your type `T` if you want to use it with
/// `Constrained<T, UnitIntervalUpperOpen>`.
/// Implementations should ensure that `zero() < one()` under the type's
/// `PartialOrd` so the interval is non-empty.
pub trait UnitBounds: PartialOrd {
    fn zero() -> Self;
    fn one() -> Self;
}

impl UnitBounds for f32 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
}

impl UnitBounds for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
}
