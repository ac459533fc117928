// ============================================================================
// Scaled Decimal
// Exact fixed-point arithmetic over arbitrary-precision integers
// ============================================================================

use crate::errors::{DecimalError, DecimalResult};
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{Signed, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

/// Fixed-point decimal number with a per-value precision.
///
/// Internally stores `value × 10^decimals` as a [`BigInt`], so two instances
/// carrying different `decimals` can represent the same numeric value.
/// Comparisons and equality are scale-independent; the raw representation is
/// not.
///
/// Operands of different precisions mix freely: `add`/`sub` upscale exactly to
/// the larger precision, `mul` sums the precisions, and only `div` (whose true
/// quotient can be non-terminating) and [`to_raw`](Self::to_raw) ever round,
/// using round-half-away-from-zero.
///
/// # Example
/// ```rust
/// use scaled_decimal::{ScaledDecimal, DecimalError};
/// use num_bigint::BigInt;
///
/// let balance = ScaledDecimal::parse("34.567", 18)?;
/// let price = ScaledDecimal::parse("45.1234", 18)?;
/// let value = balance.mul(&price); // exact, carries 36 decimals
/// assert_eq!(value.to_raw(2)?, BigInt::from(155978u32)); // 1559.78
/// # Ok::<(), DecimalError>(())
/// ```
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaledDecimal {
    /// The decimal value multiplied by `10^decimals`. Sign lives here; there
    /// is no negative zero.
    unscaled: BigInt,
    /// Number of decimal places assumed to follow the point.
    decimals: u32,
}

/// 10^n
fn pow10(n: u32) -> BigInt {
    BigInt::from(10u32).pow(n)
}

/// Truncated division adjusted so a dropped remainder of one half or more
/// steps the quotient one unit away from zero, for both signs.
fn round_half_away_from_zero(numerator: &BigInt, denominator: &BigInt) -> BigInt {
    let (quotient, remainder) = numerator.div_rem(denominator);
    let twice_remainder = remainder.magnitude() * 2u32;
    if twice_remainder >= *denominator.magnitude() {
        if numerator.is_negative() == denominator.is_negative() {
            quotient + 1
        } else {
            quotient - 1
        }
    } else {
        quotient
    }
}

/// Convert an unscaled integer at `current_decimals` to the equivalent
/// representation at `target_decimals`.
///
/// Increasing the scale multiplies by a power of ten and is always exact.
/// Decreasing the scale rounds half away from zero, exactly once per call;
/// chaining two rescales therefore rounds twice, which is the documented
/// contract of the extraction API rather than a defect.
fn rescale(
    unscaled: &BigInt,
    current_decimals: u32,
    target_decimals: i32,
) -> DecimalResult<BigInt> {
    if target_decimals < 0 {
        return Err(DecimalError::NegativePower);
    }
    let target = target_decimals as u32;

    match target.cmp(&current_decimals) {
        Ordering::Equal => Ok(unscaled.clone()),
        Ordering::Greater => Ok(unscaled * pow10(target - current_decimals)),
        Ordering::Less => Ok(round_half_away_from_zero(
            unscaled,
            &pow10(current_decimals - target),
        )),
    }
}

impl ScaledDecimal {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Wrap a pre-scaled integer verbatim at the stated precision.
    ///
    /// `raw` is taken to be the numeric value already multiplied by
    /// `10^decimals`; no validation or normalization is applied.
    #[inline]
    pub fn from_raw(raw: BigInt, decimals: u32) -> Self {
        Self {
            unscaled: raw,
            decimals,
        }
    }

    /// Zero at the given precision.
    #[inline]
    pub fn zero(decimals: u32) -> Self {
        Self {
            unscaled: BigInt::zero(),
            decimals,
        }
    }

    /// Parse a base-10 decimal string (optional leading `-`, optional
    /// fractional part) into a scaled integer at the given precision.
    ///
    /// Precision loss is never silent: a fractional part longer than
    /// `decimals` is rejected rather than truncated or rounded. Zero-valued
    /// strings, including `"-0"`, normalize to canonical zero.
    ///
    /// # Errors
    /// - `FractionalComponentExceedsDecimals` if the input carries more
    ///   fractional digits than `decimals`
    /// - `InvalidInput` for empty or non-decimal strings
    ///
    /// # Examples
    /// - `"123"` -> 123 at any precision
    /// - `"34.567"` at 5 -> raw 3456700
    /// - `"-0.001"` at 3 -> raw -1
    pub fn parse(text: &str, decimals: u32) -> DecimalResult<Self> {
        let s = text.trim();

        let (is_negative, s) = if let Some(rest) = s.strip_prefix('-') {
            (true, rest)
        } else {
            (false, s)
        };

        let (int_digits, frac_digits) = if let Some(pos) = s.find('.') {
            (&s[..pos], &s[pos + 1..])
        } else {
            (s, "")
        };

        if int_digits.is_empty() && frac_digits.is_empty() {
            return Err(DecimalError::InvalidInput);
        }
        if !int_digits.bytes().all(|b| b.is_ascii_digit())
            || !frac_digits.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(DecimalError::InvalidInput);
        }
        if frac_digits.len() > decimals as usize {
            return Err(DecimalError::FractionalComponentExceedsDecimals);
        }

        // Concatenate the digits and right-pad the fraction up to `decimals`
        let mut digits = String::with_capacity(int_digits.len() + decimals as usize);
        digits.push_str(int_digits);
        digits.push_str(frac_digits);
        for _ in frac_digits.len()..decimals as usize {
            digits.push('0');
        }

        let magnitude = BigInt::from_str(&digits).map_err(|_| DecimalError::InvalidInput)?;
        let unscaled = if is_negative { -magnitude } else { magnitude };

        Ok(Self { unscaled, decimals })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The precision this value is stored at.
    #[inline]
    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    /// Check if the numeric value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.unscaled.is_zero()
    }

    /// Check if the numeric value is strictly positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.unscaled.is_positive()
    }

    /// Check if the numeric value is strictly negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.unscaled.is_negative()
    }

    /// Extract the raw integer representation at `target_decimals`.
    ///
    /// This is the rescale-and-extract primitive: exact when raising the
    /// precision, rounding half away from zero when lowering it. Rounding is
    /// applied exactly once per call.
    ///
    /// # Errors
    /// Returns `NegativePower` if `target_decimals` is negative.
    pub fn to_raw(&self, target_decimals: i32) -> DecimalResult<BigInt> {
        rescale(&self.unscaled, self.decimals, target_decimals)
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Internal: the unscaled value raised exactly to `decimals`.
    ///
    /// Caller guarantees `decimals >= self.decimals`.
    fn upscaled_to(&self, decimals: u32) -> BigInt {
        if decimals == self.decimals {
            self.unscaled.clone()
        } else {
            &self.unscaled * pow10(decimals - self.decimals)
        }
    }

    /// Add two values of possibly different precisions.
    ///
    /// Both operands are upscaled exactly to the larger precision; the result
    /// carries that precision. Never rounds, never fails.
    pub fn add(&self, rhs: &Self) -> Self {
        let decimals = self.decimals.max(rhs.decimals);
        Self {
            unscaled: self.upscaled_to(decimals) + rhs.upscaled_to(decimals),
            decimals,
        }
    }

    /// Subtract `rhs`, upscaling exactly to the larger precision.
    pub fn sub(&self, rhs: &Self) -> Self {
        let decimals = self.decimals.max(rhs.decimals);
        Self {
            unscaled: self.upscaled_to(decimals) - rhs.upscaled_to(decimals),
            decimals,
        }
    }

    /// Multiply two values. Always exact: the result carries the sum of the
    /// operand precisions, and precision is only lost — under the caller's
    /// control — at a later [`to_raw`](Self::to_raw).
    pub fn mul(&self, rhs: &Self) -> Self {
        Self {
            unscaled: &self.unscaled * &rhs.unscaled,
            decimals: self.decimals + rhs.decimals,
        }
    }

    /// Divide by `rhs`, rounding the true quotient half away from zero at
    /// `output_decimals`.
    ///
    /// Unlike `add`/`sub`/`mul`, division must fix an output precision at
    /// call time because the true quotient can be non-terminating. The result
    /// is rounded here; extracting it later at a coarser precision rounds a
    /// second, independent time.
    ///
    /// # Errors
    /// - `NegativePower` if `output_decimals` is negative
    /// - `DivisionByZero` if `rhs` is numerically zero, at any precision
    pub fn div(&self, rhs: &Self, output_decimals: i32) -> DecimalResult<Self> {
        if output_decimals < 0 {
            return Err(DecimalError::NegativePower);
        }
        if rhs.unscaled.is_zero() {
            return Err(DecimalError::DivisionByZero);
        }

        // quotient = round(a.un * 10^(out + b.d - a.d) / b.un); when the
        // exponent is negative the power of ten moves to the denominator,
        // which is the same value with the same single rounding.
        let exponent = i64::from(output_decimals) + i64::from(rhs.decimals)
            - i64::from(self.decimals);
        let unscaled = if exponent >= 0 {
            round_half_away_from_zero(&(&self.unscaled * pow10(exponent as u32)), &rhs.unscaled)
        } else {
            round_half_away_from_zero(&self.unscaled, &(&rhs.unscaled * pow10((-exponent) as u32)))
        };

        Ok(Self {
            unscaled,
            decimals: output_decimals as u32,
        })
    }

    /// Absolute value, exact.
    pub fn abs(&self) -> Self {
        Self {
            unscaled: self.unscaled.abs(),
            decimals: self.decimals,
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialEq for ScaledDecimal {
    /// Scale-independent value equality: `34.50` at 2 equals `34.5` at 1.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScaledDecimal {}

impl PartialOrd for ScaledDecimal {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScaledDecimal {
    /// Upscales both operands exactly to the larger precision and compares
    /// the integers. Never rounds.
    ///
    /// The default `min`/`max` thereby return the winning operand untouched,
    /// with its original precision; `min` on a numeric tie returns `self`.
    fn cmp(&self, other: &Self) -> Ordering {
        if self.decimals == other.decimals {
            return self.unscaled.cmp(&other.unscaled);
        }
        let decimals = self.decimals.max(other.decimals);
        self.upscaled_to(decimals).cmp(&other.upscaled_to(decimals))
    }
}

impl Neg for ScaledDecimal {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            unscaled: -self.unscaled,
            decimals: self.decimals,
        }
    }
}

impl Neg for &ScaledDecimal {
    type Output = ScaledDecimal;

    #[inline]
    fn neg(self) -> Self::Output {
        ScaledDecimal {
            unscaled: -&self.unscaled,
            decimals: self.decimals,
        }
    }
}

// Operator sugar over the inherent methods. Add/Sub/Mul are infallible on big
// integers; there is no Div impl because division needs an output precision.
impl Add for ScaledDecimal {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        ScaledDecimal::add(&self, &rhs)
    }
}

impl Add for &ScaledDecimal {
    type Output = ScaledDecimal;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        ScaledDecimal::add(self, rhs)
    }
}

impl Sub for ScaledDecimal {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        ScaledDecimal::sub(&self, &rhs)
    }
}

impl Sub for &ScaledDecimal {
    type Output = ScaledDecimal;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        ScaledDecimal::sub(self, rhs)
    }
}

impl Mul for ScaledDecimal {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        ScaledDecimal::mul(&self, &rhs)
    }
}

impl Mul for &ScaledDecimal {
    type Output = ScaledDecimal;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        ScaledDecimal::mul(self, rhs)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for ScaledDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ScaledDecimal({}, raw={}, decimals={})",
            self, self.unscaled, self.decimals
        )
    }
}

impl fmt::Display for ScaledDecimal {
    /// Canonical base-10 rendering with exactly `decimals` fractional digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.unscaled.is_negative() { "-" } else { "" };
        if self.decimals == 0 {
            return write!(f, "{}{}", sign, self.unscaled.magnitude());
        }

        let scale = BigUint::from(10u32).pow(self.decimals);
        let (int_part, frac_part) = self.unscaled.magnitude().div_rem(&scale);
        write!(
            f,
            "{}{}.{:0>width$}",
            sign,
            int_part,
            frac_part.to_string(),
            width = self.decimals as usize
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
