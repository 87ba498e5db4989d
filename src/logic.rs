use crate::{Boxed,Native};

// These are O(1) for a native word, but a multi-word integer has to
// touch every limb, so callers should not assume constant time.

macro_rules! do_logic_eval {
  ($trait:ident, $method:ident, $op:tt) => {
    impl<U: Native> std::ops::$trait for Boxed<U> {
      type Output = Self;
      fn $method(self, rhs: Self) -> Self { Boxed(self.0 $op rhs.0) }
    }
  };
}

macro_rules! do_logic_assign {
  ($trait:ident, $method:ident, $op:tt) => {
    impl<U: Native> std::ops::$trait for Boxed<U> {
      fn $method(&mut self, rhs: Self) { *self = *self $op rhs }
    }
  };
}

do_logic_eval!(BitAnd, bitand, &);
do_logic_assign!(BitAndAssign, bitand_assign, &);
do_logic_eval!(BitOr, bitor, |);
do_logic_assign!(BitOrAssign, bitor_assign, |);
do_logic_eval!(BitXor, bitxor, ^);
do_logic_assign!(BitXorAssign, bitxor_assign, ^);

impl<U: Native> std::ops::Not for Boxed<U> {
  type Output = Self;

  /// Flip every bit of the word.
  fn not(self) -> Self { Boxed(self.0 ^ U::MAX) }
}

impl<U: Native> Boxed<U> {

  /// The word with no bits set.  This is the identity of `|` and `^`.
  pub const ALL_ZEROS: Self = Self::ZERO;

  /// The word with every bit set.  This is the identity of `&`.
  pub const ALL_ONES: Self = Self::MAX;

  pub fn all_zeros() -> Self { Self::ALL_ZEROS }

  pub fn not_assign(&mut self) { *self = !*self }
}
