use crate::native::Native;
use crate::width::{BitWidth,fixed_width};

/// Types that wrap a single value.
pub trait Boxable {
  /// The type that is in the box.
  type Unboxed;

  /// The value that is in the box.
  fn unboxed_value(&self) -> Self::Unboxed;
}

/// A native unsigned word in a box.
///
/// Every operation is passed through to the wrapped word, and must give
/// exactly the same bits as doing it on the word directly.  This is the
/// template for an arbitrary precision integer, so the operations are
/// written against the contract of a fixed-width word rather than in
/// terms of the machine instructions.
///
/// Values are immutable: "updating" a box makes a new one.
#[derive(Clone,Copy,Default,PartialEq,Eq,PartialOrd,Ord,Hash)]
pub struct Boxed<U: Native>(pub(crate) U);

/// A box around the widest native unsigned word.
pub type UIntBox = Boxed<u64>;


impl<U: Native> Boxed<U> {

  /// The value 0.
  pub const ZERO: Self = Boxed(U::ZERO);

  /// The value 1.
  pub const ONE: Self  = Boxed(U::ONE);

  /// The largest value that fits in the box.
  pub const MAX: Self  = Boxed(U::MAX);

  /// The smallest value that fits in the box.
  pub const MIN: Self  = Boxed(U::MIN);

  /// Box up a native value.
  #[inline(always)]
  pub fn new(value: U) -> Self { Boxed(value) }

  /// A box with the value 0.
  #[inline(always)]
  pub fn zero() -> Self { Self::ZERO }

  /// A copy of another box.
  #[inline(always)]
  pub fn from_boxed(other: &Self) -> Self { Boxed(other.0) }

  /// The size of the word in bits.
  pub fn bits() -> u32 { fixed_width::<U>() }

  /// Is this the value 0.
  #[inline(always)]
  pub fn is_zero(self) -> bool { self.0 == U::ZERO }

}

impl<U: Native> Boxable for Boxed<U> {
  type Unboxed = U;

  #[inline(always)]
  fn unboxed_value(&self) -> U { self.0 }
}

impl<U: Native> From<U> for Boxed<U> {
  fn from(value: U) -> Self { Boxed(value) }
}

impl<U: Native> BitWidth for Boxed<U> {
  fn bit_width() -> Option<u32> { U::bit_width() }
}
