use num_traits::{CheckedMul, FromPrimitive};

/// Exact powers of ten representable in an `f64` without rounding.
const POW10: [f64; 23] = [
    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13, 1e14, 1e15, 1e16,
    1e17, 1e18, 1e19, 1e20, 1e21, 1e22,
];

/// A parsed JSON number, handed to
/// [`JsonHandler::on_number()`](crate::JsonHandler::on_number) once per
/// number literal.
///
/// The value is `(-1 if negative) · mantissa · 10^exponent`, where the
/// exponent already folds together the decimal point position and any
/// explicit `e`/`E` exponent. For example, `-10.25e+2` is reported as
/// `mantissa = 1025`, `exponent = 0`, negative.
///
/// Numbers with more than 19–20 significant digits keep the most
/// significant digits; dropped integer digits are compensated through the
/// exponent, dropped fraction digits are truncated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct JsonNumber {
    neg: bool,
    mantissa: u64,
    exponent: i32,
}

impl JsonNumber {
    pub(crate) fn new(neg: bool, mantissa: u64, exponent: i32) -> Self {
        JsonNumber {
            neg,
            mantissa,
            exponent,
        }
    }

    /// `true` if the literal carried a leading minus sign. Note that `-0`
    /// is a valid JSON number.
    pub fn is_negative(&self) -> bool {
        self.neg
    }

    /// The decimal digits of the literal, with the decimal point removed.
    pub fn mantissa(&self) -> u64 {
        self.mantissa
    }

    /// The power of ten the mantissa is scaled by.
    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    /// Convert to an `f64`.
    ///
    /// Small values take an exact fast path; everything else goes through
    /// the standard library's correctly-rounded decimal conversion. Values
    /// beyond the `f64` range become infinite.
    pub fn as_f64(&self) -> f64 {
        let v = if self.mantissa < (1 << 53) && self.exponent.unsigned_abs() < POW10.len() as u32 {
            let m = self.mantissa as f64;
            if self.exponent >= 0 {
                m * POW10[self.exponent as usize]
            } else {
                m / POW10[self.exponent.unsigned_abs() as usize]
            }
        } else {
            format!("{}e{}", self.mantissa, self.exponent)
                .parse()
                .unwrap_or(f64::INFINITY)
        };
        if self.neg {
            -v
        } else {
            v
        }
    }

    /// Convert to an integer type, if the value is an integer that fits.
    ///
    /// Returns `None` for values with a fractional part (negative folded
    /// exponent) and for values out of `I`'s range. `2e2` converts to
    /// `200`; `2.5e1` does not convert even though it is mathematically
    /// integral, because a digit was dropped below the decimal point.
    ///
    /// ```
    /// # use saxson::{JsonHandler, JsonParser};
    /// struct Last(Option<i64>);
    /// impl JsonHandler for Last {
    ///     fn on_number(&mut self, n: saxson::JsonNumber) -> Result<(), saxson::HandlerError> {
    ///         self.0 = n.to_integer();
    ///         Ok(())
    ///     }
    /// }
    /// let mut parser = JsonParser::new(Last(None));
    /// parser.write(b"-42").unwrap();
    /// parser.write_eof().unwrap();
    /// assert_eq!(parser.handler.0, Some(-42));
    /// ```
    pub fn to_integer<I>(&self) -> Option<I>
    where
        I: FromPrimitive + CheckedMul,
    {
        if self.exponent < 0 {
            return None;
        }
        if self.mantissa == 0 {
            return I::from_u8(0);
        }
        let mut v = if self.neg {
            if self.mantissa > i64::MAX as u64 + 1 {
                return None;
            }
            I::from_i64((self.mantissa as i64).wrapping_neg())?
        } else {
            I::from_u64(self.mantissa)?
        };
        let ten = I::from_u8(10)?;
        for _ in 0..self.exponent {
            v = v.checked_mul(&ten)?;
        }
        Some(v)
    }
}

/// Scratch state of the number recognizer. Digits are folded in as they
/// stream past; no text is retained.
#[derive(Default, Debug)]
pub(crate) struct NumberAccumulator {
    neg: bool,
    mantissa: u64,
    /// Decimal point offset: one below zero per fraction digit, one above
    /// per integer digit dropped on mantissa overflow.
    scale: i32,
    /// Explicit exponent digits, always non-negative.
    exp: i32,
    exp_neg: bool,
}

impl NumberAccumulator {
    pub(crate) fn reset(&mut self) {
        *self = NumberAccumulator::default();
    }

    pub(crate) fn set_negative(&mut self) {
        self.neg = true;
    }

    pub(crate) fn set_exp_negative(&mut self) {
        self.exp_neg = true;
    }

    /// Fold `digit` into the mantissa. Returns `false` once the mantissa
    /// is saturated.
    fn fold(&mut self, digit: u8) -> bool {
        const LIMIT: u64 = u64::MAX / 10;
        if self.mantissa < LIMIT || (self.mantissa == LIMIT && digit as u64 <= u64::MAX % 10) {
            self.mantissa = self.mantissa * 10 + digit as u64;
            true
        } else {
            false
        }
    }

    pub(crate) fn push_int_digit(&mut self, digit: u8) {
        if !self.fold(digit) {
            self.scale = self.scale.saturating_add(1);
        }
    }

    pub(crate) fn push_frac_digit(&mut self, digit: u8) {
        if self.fold(digit) {
            self.scale = self.scale.saturating_sub(1);
        }
    }

    pub(crate) fn push_exp_digit(&mut self, digit: u8) {
        self.exp = self.exp.saturating_mul(10).saturating_add(digit as i32);
    }

    pub(crate) fn finish(&self) -> JsonNumber {
        let exp = if self.exp_neg { -self.exp } else { self.exp };
        JsonNumber::new(self.neg, self.mantissa, self.scale.saturating_add(exp))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn accumulate(int: &[u8], frac: &[u8], exp_neg: bool, exp: &[u8], neg: bool) -> JsonNumber {
        let mut acc = NumberAccumulator::default();
        if neg {
            acc.set_negative();
        }
        for &d in int {
            acc.push_int_digit(d);
        }
        for &d in frac {
            acc.push_frac_digit(d);
        }
        if exp_neg {
            acc.set_exp_negative();
        }
        for &d in exp {
            acc.push_exp_digit(d);
        }
        acc.finish()
    }

    /// `-10.25e+2` folds to mantissa 1025 with a net exponent of zero
    #[test]
    fn fraction_and_exponent_fold() {
        let n = accumulate(&[1, 0], &[2, 5], false, &[2], true);
        assert!(n.is_negative());
        assert_eq!(n.mantissa(), 1025);
        assert_eq!(n.exponent(), 0);
        assert_eq!(n.as_f64(), -1025.0);
    }

    #[test]
    fn zero() {
        let n = accumulate(&[0], &[], false, &[], false);
        assert_eq!(n.as_f64(), 0.0);
        assert_eq!(n.to_integer::<i64>(), Some(0));
    }

    #[test]
    fn negative_zero() {
        let n = accumulate(&[0], &[], false, &[], true);
        assert!(n.is_negative());
        assert_eq!(n.as_f64(), 0.0);
        assert!(n.as_f64().is_sign_negative());
    }

    #[test]
    fn simple_fraction() {
        let n = accumulate(&[0], &[1], false, &[], false);
        assert_eq!(n.mantissa(), 1);
        assert_eq!(n.exponent(), -1);
        assert_eq!(n.as_f64(), 0.1);
        assert_eq!(n.to_integer::<i64>(), None);
    }

    #[test]
    fn negative_exponent() {
        let n = accumulate(&[1], &[], true, &[1, 0], false);
        assert_eq!(n.exponent(), -10);
        assert_eq!(n.as_f64(), 1e-10);
    }

    #[test]
    fn to_integer_scales() {
        let n = accumulate(&[2], &[], false, &[2], false);
        assert_eq!(n.to_integer::<i64>(), Some(200));
        assert_eq!(n.to_integer::<u8>(), Some(200));
        assert_eq!(n.to_integer::<i8>(), None);
    }

    #[test]
    fn to_integer_min_max() {
        let n = accumulate(&[9, 2, 2, 3, 3, 7, 2, 0, 3, 6, 8, 5, 4, 7, 7, 5, 8, 0, 8], &[], false, &[], true);
        assert_eq!(n.to_integer::<i64>(), Some(i64::MIN));
        let n = accumulate(&[9, 2, 2, 3, 3, 7, 2, 0, 3, 6, 8, 5, 4, 7, 7, 5, 8, 0, 7], &[], false, &[], false);
        assert_eq!(n.to_integer::<i64>(), Some(i64::MAX));
    }

    /// Integer digits beyond the mantissa width scale the exponent instead
    /// of wrapping
    #[test]
    fn mantissa_overflow_keeps_magnitude() {
        let digits: Vec<u8> = std::iter::repeat(9).take(25).collect();
        let n = accumulate(&digits, &[], false, &[], false);
        assert!(n.exponent() > 0);
        let expected: f64 = "9".repeat(25).parse().unwrap();
        let ratio = n.as_f64() / expected;
        assert!(ratio > 0.999999 && ratio < 1.000001);
    }

    #[test]
    fn large_values_round_trip_through_text() {
        let n = JsonNumber::new(false, 123456789012345678, -30);
        assert_eq!(n.as_f64(), 123456789012345678e-30);
    }

    #[test]
    fn out_of_range_is_infinite() {
        let n = JsonNumber::new(false, 1, i32::MAX);
        assert!(n.as_f64().is_infinite());
    }
}
