use std::fmt;
use crate::{Boxed,Native};

impl<U: Native> fmt::Display for Boxed<U> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    fmt::Display::fmt(&self.0, f)
  }
}

// Shows the type in the box, e.g. `Boxed<u64>: 7`.
impl<U: Native> fmt::Debug for Boxed<U> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "Boxed<{}>: {:?}", std::any::type_name::<U>(), self.0)
  }
}

macro_rules! do_format {
  ($($trait:ident),*) => { $(
    impl<U: Native> fmt::$trait for Boxed<U> {
      fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::$trait::fmt(&self.0, f)
      }
    }
  )* };
}

do_format!(Binary, Octal, LowerHex, UpperHex);
