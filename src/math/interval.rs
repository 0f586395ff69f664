use crate::math::quadrature::quadratureerror::QuadratureError;

/// Real-valued integration bound: every primitive integer and float type.
/// 64-bit and pointer-sized integers convert with `as`, so magnitudes above
/// 2^53 round to the nearest `f64`.
pub trait RealBound: Copy {
    fn to_f64(self) -> f64;
}

macro_rules! impl_real_bound {
    ($($t:ty),*) => {
        $(
            impl RealBound for $t {
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_real_bound!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// Closed integration interval with finite bounds.
///
/// Bounds are accepted from any `RealBound`, so integer and floating-point
/// limits mix freely while non-numeric ones do not compile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    lower: f64,
    upper: f64
}

impl Interval {
    pub fn new<A, B>(a: A, b: B) -> Result<Interval, QuadratureError> where
        A: RealBound,
        B: RealBound {
        let lower = a.to_f64();
        let upper = b.to_f64();
        if !lower.is_finite() || !upper.is_finite() {
            return Err(QuadratureError::NonFiniteBound { a: lower, b: upper });
        }
        Ok(Interval { lower, upper })
    }

    /// Requires `b > a`.
    pub fn ordered<A, B>(a: A, b: B) -> Result<Interval, QuadratureError> where
        A: RealBound,
        B: RealBound {
        let interval = Self::new(a, b)?;
        if interval.upper > interval.lower {
            Ok(interval)
        } else {
            Err(QuadratureError::UnorderedBounds { a: interval.lower, b: interval.upper })
        }
    }

    /// Allows either orientation but rejects `a == b`.
    pub fn non_degenerate<A, B>(a: A, b: B) -> Result<Interval, QuadratureError> where
        A: RealBound,
        B: RealBound {
        let interval = Self::new(a, b)?;
        if interval.upper == interval.lower {
            Err(QuadratureError::DegenerateInterval { a: interval.lower })
        } else {
            Ok(interval)
        }
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Signed width `b - a`. Overflows to ±inf when the bounds are more
    /// than `f64::MAX` apart; the quadrature rules use `half_width` and
    /// `step`, which stay finite.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn midpoint(&self) -> f64 {
        0.5 * self.upper + 0.5 * self.lower
    }

    pub fn half_width(&self) -> f64 {
        0.5 * self.upper - 0.5 * self.lower
    }

    pub fn is_reversed(&self) -> bool {
        self.upper < self.lower
    }

    /// Width of one of `n` equal subintervals.
    pub fn step(&self, n: usize) -> Result<f64, QuadratureError> {
        if n == 0 {
            return Err(QuadratureError::InvalidResolution { parameter: "n", value: n });
        }
        let n = n as f64;
        Ok(self.upper / n - self.lower / n)
    }

    /// Left endpoint of subinterval `i` when split into pieces of `step`.
    pub fn sample_point(&self, i: usize, step: f64) -> f64 {
        f64::mul_add(i as f64, step, self.lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_numeric_bounds() {
        let interval = Interval::ordered(0, 2.5_f32).unwrap();
        assert_eq!(interval.lower(), 0.0);
        assert_eq!(interval.upper(), 2.5);
        assert_eq!(interval.width(), 2.5);
        assert_eq!(interval.midpoint(), 1.25);
    }

    #[test]
    fn test_ordered_rejects_equal_and_reversed() {
        assert_eq!(
            Interval::ordered(1.0, 1.0),
            Err(QuadratureError::UnorderedBounds { a: 1.0, b: 1.0 })
        );
        assert_eq!(
            Interval::ordered(3, 1),
            Err(QuadratureError::UnorderedBounds { a: 3.0, b: 1.0 })
        );
    }

    #[test]
    fn test_non_degenerate_accepts_reversed() {
        let interval = Interval::non_degenerate(1.0, -1.0).unwrap();
        assert!(interval.is_reversed());
        assert_eq!(interval.half_width(), -1.0);
        assert_eq!(
            Interval::non_degenerate(0.5, 0.5),
            Err(QuadratureError::DegenerateInterval { a: 0.5 })
        );
    }

    #[test]
    fn test_non_finite_bounds() {
        assert!(matches!(
            Interval::new(f64::NAN, 1.0),
            Err(QuadratureError::NonFiniteBound { .. })
        ));
        assert!(matches!(
            Interval::ordered(0.0, f64::INFINITY),
            Err(QuadratureError::NonFiniteBound { .. })
        ));
    }

    #[test]
    fn test_wide_bounds_stay_finite() {
        let interval = Interval::ordered(-1e308, 1e308).unwrap();
        assert!(interval.width().is_infinite());
        assert_eq!(interval.half_width(), 1e308);
        assert_eq!(interval.midpoint(), 0.0);
        let step = interval.step(4).unwrap();
        assert_eq!(step, 5e307);
        for i in 0..4 {
            assert!(interval.sample_point(i, step).is_finite());
        }
    }

    #[test]
    fn test_wide_integer_bounds() {
        let interval = Interval::ordered(-3_i64, 5_usize).unwrap();
        assert_eq!(interval.lower(), -3.0);
        assert_eq!(interval.upper(), 5.0);
        let interval = Interval::non_degenerate(u64::MAX, 0_isize).unwrap();
        assert!(interval.is_reversed());
    }

    #[test]
    fn test_step_and_sample_points() {
        let interval = Interval::ordered(0.0, 1.0).unwrap();
        assert_eq!(
            interval.step(0),
            Err(QuadratureError::InvalidResolution { parameter: "n", value: 0 })
        );
        let step = interval.step(10).unwrap();
        assert_eq!(interval.sample_point(0, step), 0.0);
        // indexed sampling never overshoots the upper bound
        assert!(interval.sample_point(9, step) < 1.0);
    }
}
