use num::{Integer,Zero,One,Float,BigInt,BigUint};
use num::traits::{CheckedMul,Pow};
use crate::{Boxed,Native};

/// Integers that can be raised to a power exactly.
///
/// The algorithms below only need the ring operations and a way to look
/// at the exponent's bits, so the same code works for native words,
/// boxed words, and integers that grow as needed.
pub trait PowInteger: Integer + Clone + CheckedMul {
  /// Is this the value `-1`.  Always `false` for unsigned types.
  fn is_minus_one(&self) -> bool;

  /// Is this less than 0.  Always `false` for unsigned types.
  fn is_negative(&self) -> bool;
}

macro_rules! pow_unsigned {
  ($($t:ty),*) => { $(
    impl PowInteger for $t {
      fn is_minus_one(&self) -> bool { false }
      fn is_negative(&self)  -> bool { false }
    }
  )* };
}

macro_rules! pow_signed {
  ($($t:ty),*) => { $(
    impl PowInteger for $t {
      fn is_minus_one(&self) -> bool { *self == -1 }
      fn is_negative(&self)  -> bool { *self < 0 }
    }
  )* };
}

pow_unsigned!(u8, u16, u32, u64, u128, usize, BigUint);
pow_signed!(i8, i16, i32, i64, i128, isize);

impl PowInteger for BigInt {
  fn is_minus_one(&self) -> bool { *self == -BigInt::one() }
  fn is_negative(&self)  -> bool { num::Signed::is_negative(self) }
}

impl<U: Native> PowInteger for Boxed<U> {
  fn is_minus_one(&self) -> bool { false }
  fn is_negative(&self)  -> bool { false }
}


// -----------------------------------------------------------------------------
// Identities

/// Powers we know without doing any multiplication.
/// Note that we pick `0 ** 0 == 1`.
pub fn simplify_identities<T>(base: &T, exponent: &T) -> Option<T>
  where T: Zero + One + PartialEq + Clone {
  if exponent.is_zero()              { return Some(T::one()) }
  if base.is_zero() || base.is_one() { return Some(base.clone()) }
  if exponent.is_one()               { return Some(base.clone()) }
  None
}

/// As `simplify_identities`, plus the cases that only make sense for
/// integers.  Negative powers are fractions, which we round to 0.
pub fn simplify_integer_identities<T: PowInteger>(base: &T, exponent: &T)
  -> Option<T> {
  if let Some(result) = simplify_identities(base, exponent) {
    return Some(result)
  }

  if base.is_minus_one() {
    return Some(if exponent.is_even() { T::one() } else { base.clone() })
  }

  if exponent.is_negative() { return Some(T::zero()) }
  None
}

fn mul_trapping<T: PowInteger>(x: &T, y: &T) -> T {
  match x.checked_mul(y) {
    Some(result) => result,
    None         => panic!("attempt to multiply with overflow")
  }
}


// -----------------------------------------------------------------------------
// Integer powers

/// Exponentiation by squaring, looking at the bits of the exponent from
/// least significant to most significant.
///
/// We only square the multiplier when there are bits left to use it on,
/// so we never overflow unless the answer does.  Panics on overflow.
pub fn pow_integer_bitwise<T: PowInteger>(base: &T, exponent: &T) -> T {
  if let Some(result) = simplify_integer_identities(base, exponent) {
    return result
  }

  let two            = T::one() + T::one();
  let mut result     = T::one();
  let mut multiplier = base.clone();
  let mut remaining  = exponent.clone();

  while !remaining.is_zero() {
    if remaining.is_odd() {
      result    = mul_trapping(&result, &multiplier);
      remaining = remaining - T::one();
      if remaining.is_zero() { break }
    }
    remaining  = remaining / two.clone();
    multiplier = mul_trapping(&multiplier, &multiplier);
  }
  result
}

/// Multiply `base` by itself `exponent` times.  Slow, but obviously
/// correct, so we use it to check `pow_integer_bitwise`.
pub fn pow_integer_iterate<T: PowInteger>(base: &T, exponent: &T) -> T {
  if let Some(result) = simplify_integer_identities(base, exponent) {
    return result
  }

  let mut result = T::one();
  let mut count  = T::zero();
  while count < *exponent {
    result = mul_trapping(&result, base);
    count  = count + T::one();
  }
  result
}

/// `base ** exponent` for any integer type.
pub fn pow<T: PowInteger>(base: &T, exponent: &T) -> T {
  pow_integer_bitwise(base, exponent)
}


// -----------------------------------------------------------------------------
// Floating point powers

/// `exp(exponent * ln(base))`.  Not valid for negative bases.
pub fn pow_floating_point<T: Float>(base: T, exponent: T) -> T {
  if let Some(result) = simplify_identities(&base, &exponent) {
    return result
  }
  (exponent * base.ln()).exp()
}


// -----------------------------------------------------------------------------
// Powers of boxed words

impl<U: Native> Boxed<U> {

  /// `self ** exponent`.  Panics if the result does not fit.
  pub fn pow(self, exponent: Self) -> Self {
    pow_integer_bitwise(&self, &exponent)
  }

  /// `self **= exponent`.
  pub fn pow_assign(&mut self, exponent: Self) {
    *self = self.pow(exponent)
  }

  /// `self ** exponent` modulo 2^W, and whether the exact power did
  /// not fit.
  pub fn pow_with_overflow(self, exponent: u32) -> (Self, bool) {
    if exponent == 0               { return (Self::ONE, false) }
    if self.0 <= U::ONE            { return (self, false) }

    let mut result     = Self::ONE;
    let mut multiplier = self;
    let mut remaining  = exponent;
    let mut overflow   = false;

    while remaining > 0 {
      if remaining & 1 == 1 {
        let (r, o) = result.multiply_with_overflow(multiplier);
        result     = r;
        overflow  |= o;
        remaining -= 1;
        if remaining == 0 { break }
      }
      remaining >>= 1;
      let (m, o) = multiplier.multiply_with_overflow(multiplier);
      multiplier = m;
      overflow  |= o;
    }
    (result, overflow)
  }

}

impl<U: Native> Pow<Boxed<U>> for Boxed<U> {
  type Output = Self;
  fn pow(self, exponent: Self) -> Self { Boxed::pow(self, exponent) }
}

impl<U: Native> Pow<u32> for Boxed<U> {
  type Output = Self;

  fn pow(self, exponent: u32) -> Self {
    let (result, overflow) = self.pow_with_overflow(exponent);
    assert!(!overflow, "attempt to multiply with overflow");
    result
  }
}
