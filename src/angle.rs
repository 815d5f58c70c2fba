use std::f64::consts::TAU;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A unit in which plane angles are measured.
///
/// Implementations are views of the same physical quantity: a number of
/// turns (full revolutions), unrestricted in sign and magnitude. Each view
/// converts to and from turns by a fixed scale factor, so any two views
/// interconvert through [`convert`] and round-trip up to floating rounding.
pub trait AngleUnit: Copy {
    /// Reads this angle as a fraction of a full turn.
    fn to_turns(self) -> f64;

    /// Builds this view from a fraction of a full turn.
    fn from_turns(turns: f64) -> Self;

    /// One full revolution in this unit.
    #[must_use]
    fn full_circle() -> Self {
        Self::from_turns(1.0)
    }
}

/// Converts an angle between two unit views through the turn
/// representation.
///
/// Composing two conversions equals converting directly, up to floating
/// rounding.
#[must_use]
pub fn convert<A: AngleUnit, B: AngleUnit>(angle: A) -> B {
    B::from_turns(angle.to_turns())
}

macro_rules! angle_unit {
    ($name:ident, $per_turn:expr, $doc:literal) => {
        #[doc = $doc]
        ///
        /// The value is not range-restricted; callers decide whether and
        /// when to normalize.
        #[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
        pub struct $name(f64);

        impl $name {
            /// Wraps a raw value measured in this unit.
            #[must_use]
            pub const fn new(value: f64) -> Self {
                Self(value)
            }

            /// The raw value in this unit.
            #[must_use]
            pub const fn get(self) -> f64 {
                self.0
            }
        }

        impl AngleUnit for $name {
            #[inline]
            fn to_turns(self) -> f64 {
                self.0 / $per_turn
            }

            #[inline]
            fn from_turns(turns: f64) -> Self {
                Self(turns * $per_turn)
            }
        }

        impl Add for $name {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $name {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self(self.0 - rhs.0)
            }
        }

        impl Neg for $name {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                Self(-self.0)
            }
        }

        impl Mul<f64> for $name {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: f64) -> Self {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $name {
            type Output = Self;
            #[inline]
            fn div(self, rhs: f64) -> Self {
                Self(self.0 / rhs)
            }
        }
    };
}

angle_unit!(Turns, 1.0, "An angle measured in full revolutions.");
angle_unit!(Radians, TAU, "An angle measured in radians; `2*pi` radians make one turn.");
angle_unit!(Degrees, 360.0, "An angle measured in degrees; 360 degrees make one turn.");

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_relative_eq;
    use proptest::prelude::*;

    use super::*;

    const TOL: f64 = 1e-10;

    // ── full-circle constants ──

    #[test]
    fn full_circle_turns_is_one() {
        assert!((Turns::full_circle().get() - 1.0).abs() < TOL);
    }

    #[test]
    fn full_circle_radians_is_tau() {
        assert!((Radians::full_circle().get() - 2.0 * PI).abs() < TOL);
    }

    #[test]
    fn full_circle_degrees_is_360() {
        assert!((Degrees::full_circle().get() - 360.0).abs() < TOL);
    }

    // ── conversions ──

    #[test]
    fn half_turn_in_degrees_converts_to_pi_radians() {
        let rad: Radians = convert(Degrees::new(180.0));
        assert_relative_eq!(rad.get(), PI, max_relative = 1e-12);
    }

    #[test]
    fn full_circle_degrees_converts_to_one_turn() {
        let turns: Turns = convert(Degrees::new(360.0));
        assert!((turns.get() - 1.0).abs() < TOL);
    }

    #[test]
    fn conversion_preserves_sign_and_magnitude() {
        let rad: Radians = convert(Degrees::new(-720.0));
        assert!((rad.get() + 4.0 * PI).abs() < TOL);
    }

    // ── arithmetic ──

    #[test]
    fn unit_arithmetic_stays_in_unit() {
        let a = Degrees::new(90.0) + Degrees::new(45.0);
        assert!((a.get() - 135.0).abs() < TOL);
        let b = -Degrees::new(30.0);
        assert!((b.get() + 30.0).abs() < TOL);
        let c = Radians::new(PI) * 2.0;
        assert!((c.get() - 2.0 * PI).abs() < TOL);
        let d = Turns::new(1.0) / 4.0;
        assert!((d.get() - 0.25).abs() < TOL);
    }

    // ── round trips ──

    proptest! {
        #[test]
        fn turns_round_trip_through_each_unit(t in -1e4..1e4f64) {
            prop_assert!((Turns::from_turns(t).to_turns() - t).abs() <= TOL * t.abs().max(1.0));
            prop_assert!((Radians::from_turns(t).to_turns() - t).abs() <= TOL * t.abs().max(1.0));
            prop_assert!((Degrees::from_turns(t).to_turns() - t).abs() <= TOL * t.abs().max(1.0));
        }

        #[test]
        fn each_unit_round_trips_through_turns(x in -1e4..1e4f64) {
            let rad = Radians::from_turns(Radians::new(x).to_turns());
            prop_assert!((rad.get() - x).abs() <= TOL * x.abs().max(1.0));
            let deg = Degrees::from_turns(Degrees::new(x).to_turns());
            prop_assert!((deg.get() - x).abs() <= TOL * x.abs().max(1.0));
        }

        #[test]
        fn cross_unit_round_trip(deg in -1e4..1e4f64) {
            let there: Radians = convert(Degrees::new(deg));
            let back: Degrees = convert(there);
            prop_assert!((back.get() - deg).abs() <= TOL * deg.abs().max(1.0));
        }

        #[test]
        fn conversion_composition_equals_direct(t in -1e4..1e4f64) {
            let a = Turns::new(t);
            let via: Degrees = convert(convert::<_, Radians>(a));
            let direct: Degrees = convert(a);
            prop_assert!((via.get() - direct.get()).abs() <= TOL * direct.get().abs().max(1.0));
        }
    }
}
