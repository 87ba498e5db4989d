use crate::{Boxed,Native};

impl<U: Native> Boxed<U> {

  /// Logical shift to the left, and whether `amount` was at least the
  /// width of the word.  In that case every bit falls off the end and
  /// the result is 0.
  pub fn shift_left_with_overflow(self, amount: u32) -> (Self, bool) {
    if amount >= Self::bits() { return (Self::ZERO, true) }
    (Boxed(self.0 << amount as usize), false)
  }

  /// Logical shift to the right, filling with 0.  Shifting by the width
  /// of the word or more gives `(0, true)`.
  pub fn shift_right_with_overflow(self, amount: u32) -> (Self, bool) {
    if amount >= Self::bits() { return (Self::ZERO, true) }
    (Boxed(self.0 >> amount as usize), false)
  }

  /// A boxed shift amount as a `u32`.  Amounts that don't fit are
  /// clamped, as they are out of range for any word anyway.
  fn shift_amount(self) -> u32 {
    let amount = self.0.to_max_unsigned();
    if amount > u32::MAX as u64 { u32::MAX } else { amount as u32 }
  }

}


// Shifting by the width of the word or more traps.

macro_rules! do_shift {
  ($trait:ident, $method:ident, $reporting:ident, $msg:literal) => {
    impl<U: Native> std::ops::$trait<u32> for Boxed<U> {
      type Output = Self;

      fn $method(self, amount: u32) -> Self {
        let (result, overflow) = self.$reporting(amount);
        assert!(!overflow, $msg);
        result
      }
    }

    impl<U: Native> std::ops::$trait for Boxed<U> {
      type Output = Self;

      fn $method(self, amount: Self) -> Self {
        std::ops::$trait::$method(self, amount.shift_amount())
      }
    }
  };
}

do_shift!(Shl, shl, shift_left_with_overflow,  "attempt to shift left with overflow");
do_shift!(Shr, shr, shift_right_with_overflow, "attempt to shift right with overflow");

macro_rules! do_shift_assign {
  ($trait:ident, $method:ident, $op:tt) => {
    impl<U: Native> std::ops::$trait<u32> for Boxed<U> {
      fn $method(&mut self, amount: u32) { *self = *self $op amount }
    }

    impl<U: Native> std::ops::$trait for Boxed<U> {
      fn $method(&mut self, amount: Self) { *self = *self $op amount }
    }
  };
}

do_shift_assign!(ShlAssign, shl_assign, <<);
do_shift_assign!(ShrAssign, shr_assign, >>);
