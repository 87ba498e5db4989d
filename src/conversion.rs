use num::{One,BigUint};
use crate::{Boxed,Native};

impl<U: Native> Boxed<U> {

  /// Box up an integer literal.  Panics if it does not fit in the word.
  pub fn literal(value: u64) -> Self {
    let (result, lost) = U::from_max_unsigned(value);
    assert!(!lost, "literal {} out of range for {}",
            value, std::any::type_name::<U>());
    Boxed(result)
  }

  /// The value in the widest native unsigned type.
  pub fn to_native_max_unsigned(self) -> u64 { self.0.to_max_unsigned() }

  /// The value in the widest native signed type.
  /// Panics if it is too large to be a positive `i64`.
  pub fn to_native_max_signed(self) -> i64 {
    let value = self.0.to_max_unsigned();
    assert!(value <= i64::MAX as u64,
            "{} does not fit in a signed native word", value);
    value as i64
  }

  /// The low bits of a natural number, and whether any bits were lost.
  pub fn from_biguint(n: &BigUint) -> (Self, bool) {
    let modulus = BigUint::one() << Self::bits() as usize;
    let low     = n % &modulus;
    let digit   = low.iter_u64_digits().next().unwrap_or(0);
    (Boxed(U::from_max_unsigned(digit).0), *n >= modulus)
  }

}

impl<U: Native> From<Boxed<U>> for BigUint {
  fn from(x: Boxed<U>) -> Self { BigUint::from(x.0.to_max_unsigned()) }
}


#[cfg(test)]
mod test {
  use std::collections::hash_map::DefaultHasher;
  use std::hash::{Hash,Hasher};
  use num::BigUint;
  use crate::{Boxed,Boxable,UIntBox};

  fn hash_of<T: Hash>(x: &T) -> u64 {
    let mut h = DefaultHasher::new();
    x.hash(&mut h);
    h.finish()
  }

  #[test]
  fn literal() {
    assert_eq!(UIntBox::literal(12).unboxed_value(), 12);
    assert_eq!(Boxed::<u8>::literal(255).unboxed_value(), 255);
    assert_eq!(UIntBox::literal(u64::MAX), UIntBox::MAX);
  }

  #[test]
  #[should_panic(expected = "out of range")]
  fn literal_too_big() {
    Boxed::<u8>::literal(256);
  }

  #[test]
  fn native_max() {
    assert_eq!(Boxed::<u8>::MAX.to_native_max_unsigned(), 255);
    assert_eq!(UIntBox::MAX.to_native_max_unsigned(), u64::MAX);
    assert_eq!(UIntBox::new(42).to_native_max_signed(), 42);
    assert_eq!(Boxed::<u32>::MAX.to_native_max_signed(), u32::MAX as i64);
    assert_eq!(UIntBox::new(i64::MAX as u64).to_native_max_signed(), i64::MAX);
  }

  #[test]
  #[should_panic(expected = "does not fit")]
  fn native_max_signed_too_big() {
    UIntBox::MAX.to_native_max_signed();
  }

  #[test]
  fn round_trip_exhaustive() {
    for x in 0 ..= u8::MAX {
      assert_eq!(Boxed::new(x).unboxed_value(), x);
    }
    for x in 0 ..= u16::MAX {
      assert_eq!(Boxed::new(x).unboxed_value(), x);
    }
  }

  #[test]
  fn round_trip_sampled() {
    for _ in 0 .. 10000 {
      let x: u32 = rand::random();
      let y: u64 = rand::random();
      assert_eq!(Boxed::new(x).unboxed_value(), x);
      assert_eq!(UIntBox::new(y).unboxed_value(), y);
      assert_eq!(UIntBox::from_biguint(&BigUint::from(y)), (UIntBox::new(y), false));
    }
    assert_eq!(Boxed::new(usize::MAX).unboxed_value(), usize::MAX);
  }

  #[test]
  fn from_biguint_truncates() {
    let n = BigUint::from(0x1_2345_u32);
    assert_eq!(Boxed::<u16>::from_biguint(&n), (Boxed::new(0x2345), true));
    assert_eq!(Boxed::<u32>::from_biguint(&n), (Boxed::new(0x1_2345), false));

    let big = (BigUint::from(7_u32) << 200) + BigUint::from(9_u32);
    assert_eq!(UIntBox::from_biguint(&big), (UIntBox::new(9), true));
  }

  #[test]
  fn hash_matches_equality() {
    let a = UIntBox::new(1234);
    let c = UIntBox::from_boxed(&a);
    assert_eq!(a, c);
    assert_eq!(hash_of(&a), hash_of(&c));
    assert_eq!(hash_of(&UIntBox::ZERO), hash_of(&UIntBox::default()));
  }
}
