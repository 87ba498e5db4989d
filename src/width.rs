use std::ops::Shl;
use num::{Zero,One,BigInt,BigUint};
use num::traits::{PrimInt,Unsigned};

/// Shifting `1` left more times than this without it falling off the end
/// means the type has no fixed width.
pub const SHIFT_PROBE_LIMIT: u32 = 2048;

/// Integer types that know how many bits they have.
pub trait BitWidth {
  /// The number of bits in the type, or `None` for integers that grow
  /// as needed.
  fn bit_width() -> Option<u32>;
}

/// The width of a type that must have a fixed width.
pub fn fixed_width<T: BitWidth>() -> u32 {
  match T::bit_width() {
    Some(w) => w,
    None => panic!("{} has no fixed bit width", std::any::type_name::<T>())
  }
}

/// The width of an unsigned integer type whose maximum value is `max`.
///
/// Doubles a candidate width while squaring a matching divisor, so that
/// `divisor == 2^width`.  We stop before the divisor would exceed `max`,
/// which also keeps the square from overflowing.  Types whose maximum is
/// not of the form `2^n - 1` are rounded up to the next power of two.
pub fn bit_width_from_max(max: u64) -> u32 {
  // holds nothing but 0
  if max == 0 { return 0 }

  // holds exactly 0 and 1
  if max == 1 { return 1 }

  let mut width: u32   = 1;
  let mut divisor: u64 = 2;
  while (max / divisor) / divisor > 0 {
    divisor = divisor * divisor;
    width   = width * 2;
  }
  width * 2
}

/// The width of an unsigned type, found by looking at its maximum value.
/// Types too wide for `u64` fall back to `bit_width_by_shift`.
pub fn bit_width_unsigned<T>() -> Option<u32>
  where T: PrimInt + Unsigned {
  match T::max_value().to_u64() {
    Some(max) => Some(bit_width_of_max(max)),
    None      => bit_width_by_shift::<T>()
  }
}

/// As `bit_width_from_max`, but the common sizes are recognized directly.
pub fn bit_width_of_max(max: u64) -> u32 {
  if max == u64::MAX             { return 64 }
  if max == u32::MAX as u64      { return 32 }
  if max == u16::MAX as u64      { return 16 }
  if max == u8::MAX as u64       { return 8 }
  bit_width_from_max(max)
}

/// The width of a type that only knows how to shift.  We keep shifting
/// `1` to the left until it falls off the end.  If that takes more than
/// `SHIFT_PROBE_LIMIT` steps the value is just growing, and we report
/// that the type has no fixed width.
pub fn bit_width_by_shift<T>() -> Option<u32>
  where T: Zero + One + Shl<usize, Output = T> {
  let mut probe = T::one();
  let mut count = 0;
  while count <= SHIFT_PROBE_LIMIT {
    probe = probe << 1;
    count += 1;
    if probe.is_zero() { return Some(count) }
  }
  None
}


macro_rules! literal_width {
  ($($t:ty => $w:expr),*) => { $(
    impl BitWidth for $t {
      #[inline(always)]
      fn bit_width() -> Option<u32> { Some($w) }
    }
  )* };
}

literal_width!( u8 => 8,  u16 => 16,  u32 => 32,  u64 => 64,  u128 => 128
              , i8 => 8,  i16 => 16,  i32 => 32,  i64 => 64,  i128 => 128
              );

// The word size depends on the platform.
impl BitWidth for usize {
  fn bit_width() -> Option<u32> { bit_width_unsigned::<usize>() }
}

// Same size as `usize`.
impl BitWidth for isize {
  fn bit_width() -> Option<u32> { bit_width_unsigned::<usize>() }
}

impl BitWidth for BigUint {
  fn bit_width() -> Option<u32> { None }
}

impl BitWidth for BigInt {
  fn bit_width() -> Option<u32> { None }
}
