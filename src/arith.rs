use num::{Integer,Zero,One,Num,Bounded};
use num::traits::{Unsigned,CheckedAdd,CheckedSub,CheckedMul,CheckedDiv,CheckedRem};
use crate::{Boxed,Native};

// -----------------------------------------------------------------------------
// Arithmetic that reports overflow.
//
// These never fail.  On overflow the result is the low W bits of the
// exact answer.  Division by 0 is reported as an overflow with result 0.

impl<U: Native> Boxed<U> {

  /// `self + rhs`, and whether the sum did not fit.
  pub fn add_with_overflow(self, rhs: Self) -> (Self, bool) {
    let (result, overflow) = self.0.overflowing_add(&rhs.0);
    (Boxed(result), overflow)
  }

  /// `self - rhs`, and whether the difference was negative.
  pub fn subtract_with_overflow(self, rhs: Self) -> (Self, bool) {
    let (result, overflow) = self.0.overflowing_sub(&rhs.0);
    (Boxed(result), overflow)
  }

  /// `self * rhs`, and whether the product did not fit.
  pub fn multiply_with_overflow(self, rhs: Self) -> (Self, bool) {
    let (result, overflow) = self.0.overflowing_mul(&rhs.0);
    (Boxed(result), overflow)
  }

  /// `self / rhs`, rounding down.  Dividing by 0 gives `(0, true)`.
  pub fn divide_with_overflow(self, rhs: Self) -> (Self, bool) {
    if rhs.is_zero() { return (Self::ZERO, true) }
    (Boxed(self.0 / rhs.0), false)
  }

  /// `self % rhs`.  Dividing by 0 gives `(0, true)`.
  pub fn remainder_with_overflow(self, rhs: Self) -> (Self, bool) {
    if rhs.is_zero() { return (Self::ZERO, true) }
    (Boxed(self.0 % rhs.0), false)
  }

  /// The next value.  The successor of `MAX` is 0.
  pub fn successor(self) -> Self {
    self.add_with_overflow(Self::ONE).0
  }

}


// -----------------------------------------------------------------------------
// Arithmetic that traps.
//
// These panic instead of producing a wrapped result, in all build profiles.

macro_rules! trapping {
  ($trait:ident, $method:ident, $reporting:ident, $msg:literal) => {
    impl<U: Native> std::ops::$trait for Boxed<U> {
      type Output = Self;

      fn $method(self, rhs: Self) -> Self {
        let (result, overflow) = self.$reporting(rhs);
        assert!(!overflow, $msg);
        result
      }
    }
  };
}

trapping!(Add, add, add_with_overflow,      "attempt to add with overflow");
trapping!(Sub, sub, subtract_with_overflow, "attempt to subtract with overflow");
trapping!(Mul, mul, multiply_with_overflow, "attempt to multiply with overflow");

// Unsigned division only overflows when dividing by 0.
trapping!(Div, div, divide_with_overflow,   "attempt to divide by zero");
trapping!(Rem, rem, remainder_with_overflow,
          "attempt to calculate the remainder with a divisor of zero");


macro_rules! assign {
  ($trait:ident, $method:ident, $op:tt) => {
    impl<U: Native> std::ops::$trait for Boxed<U> {
      fn $method(&mut self, rhs: Self) { *self = *self $op rhs }
    }
  };
}

assign!(AddAssign, add_assign, +);
assign!(SubAssign, sub_assign, -);
assign!(MulAssign, mul_assign, *);
assign!(DivAssign, div_assign, /);
assign!(RemAssign, rem_assign, %);


// -----------------------------------------------------------------------------
// So that boxes can be used with the generic numeric code in `num`.

macro_rules! checked {
  ($trait:ident, $method:ident, $reporting:ident) => {
    impl<U: Native> $trait for Boxed<U> {
      fn $method(&self, rhs: &Self) -> Option<Self> {
        match self.$reporting(*rhs) {
          (result, false) => Some(result),
          (_, true)       => None
        }
      }
    }
  };
}

checked!(CheckedAdd, checked_add, add_with_overflow);
checked!(CheckedSub, checked_sub, subtract_with_overflow);
checked!(CheckedMul, checked_mul, multiply_with_overflow);
checked!(CheckedDiv, checked_div, divide_with_overflow);
checked!(CheckedRem, checked_rem, remainder_with_overflow);

impl<U: Native> Zero for Boxed<U> {
  fn zero() -> Self { Self::ZERO }
  fn is_zero(&self) -> bool { self.0 == U::ZERO }
}

impl<U: Native> One for Boxed<U> {
  fn one() -> Self { Self::ONE }
}

impl<U: Native> Bounded for Boxed<U> {
  fn min_value() -> Self { Self::MIN }
  fn max_value() -> Self { Self::MAX }
}

impl<U: Native> Num for Boxed<U> {
  type FromStrRadixErr = U::FromStrRadixErr;

  fn from_str_radix(s: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
    U::from_str_radix(s, radix).map(Boxed)
  }
}

impl<U: Native> Unsigned for Boxed<U> {}

impl<U: Native> Integer for Boxed<U> {
  fn div_floor(&self, other: &Self) -> Self { Boxed(self.0.div_floor(&other.0)) }
  fn mod_floor(&self, other: &Self) -> Self { Boxed(self.0.mod_floor(&other.0)) }
  fn gcd(&self, other: &Self)       -> Self { Boxed(self.0.gcd(&other.0)) }
  fn lcm(&self, other: &Self)       -> Self { Boxed(self.0.lcm(&other.0)) }

  #[allow(deprecated)]
  fn divides(&self, other: &Self) -> bool { self.is_multiple_of(other) }

  fn is_multiple_of(&self, other: &Self) -> bool {
    self.0.is_multiple_of(&other.0)
  }

  fn is_even(&self) -> bool { self.0.is_even() }
  fn is_odd(&self)  -> bool { self.0.is_odd() }

  fn div_rem(&self, other: &Self) -> (Self, Self) {
    let (q, r) = self.0.div_rem(&other.0);
    (Boxed(q), Boxed(r))
  }
}
