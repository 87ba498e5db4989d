use std::fmt;
use std::hash::Hash;
use num::Integer;
use num::traits::{PrimInt,Unsigned,ConstZero,ConstOne,AsPrimitive};
use num::traits::ops::overflowing::{OverflowingAdd,OverflowingSub,OverflowingMul};
use crate::width::BitWidth;

/// A native unsigned machine word that can live in a `Boxed`.
///
/// The `overflowing_*` operations come from `num`: they return the low
/// bits of the exact result together with a flag saying if any high bits
/// were lost.
pub trait Native:
    PrimInt + Unsigned + Integer + BitWidth + Hash + Default
  + ConstZero + ConstOne + AsPrimitive<u64>
  + OverflowingAdd + OverflowingSub + OverflowingMul
  + fmt::Debug + fmt::Display + fmt::Binary + fmt::Octal
  + fmt::LowerHex + fmt::UpperHex
{
  const MIN: Self;
  const MAX: Self;

  /// Widen to the largest native unsigned type.  Never loses bits.
  #[inline(always)]
  fn to_max_unsigned(self) -> u64 { self.as_() }

  /// The low bits of `value`, and whether any bits did not fit.
  fn from_max_unsigned(value: u64) -> (Self, bool);
}

macro_rules! native {
  ($($t:ty),*) => { $(
    impl Native for $t {
      const MIN: Self = <$t>::MIN;
      const MAX: Self = <$t>::MAX;

      #[inline(always)]
      fn from_max_unsigned(value: u64) -> (Self, bool) {
        (value.as_(), value > Self::MAX.as_())
      }
    }
  )* };
}

native!(u8, u16, u32, u64, usize);
