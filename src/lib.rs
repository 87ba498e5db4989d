pub mod native;
pub mod width;
pub mod core;
pub mod display;
pub mod conversion;
pub mod arith;
pub mod logic;
pub mod shift;
pub mod pow;

#[cfg(test)]
pub mod proptest;

pub use crate::core::{Boxed,Boxable,UIntBox};
pub use crate::native::Native;
pub use crate::width::{BitWidth,bit_width_from_max,bit_width_of_max,bit_width_unsigned,
                       bit_width_by_shift};
pub use crate::pow::{PowInteger,pow};
