use ::proptest::prelude::*;
use ::proptest::strategy::*;
use ::proptest::arbitrary::*;
use ::proptest::test_runner::*;
use num::{One,BigUint};
use crate::{Boxed,Native};

/// Native words we can generate test values for.
pub trait TestNative: Native + Arbitrary<Parameters = ()> {}
impl<U: Native + Arbitrary<Parameters = ()>> TestNative for U {}

impl<U: TestNative> Arbitrary for Boxed<U> {
  type Parameters = ();
  type Strategy   = Map<StrategyFor<U>, fn(U) -> Boxed<U>>;

  fn arbitrary_with(_: ()) -> Self::Strategy {
    any::<U>().prop_map(Boxed::new as fn(U) -> Boxed<U>)
  }
}


/// Run a property on values from the given strategy.
/// The property returns `None` for inputs it does not apply to.
pub fn do_test_with<S: Strategy>(s: S, p: fn(S::Value) -> Option<bool>) {
  let mut cfg: Config = <_>::default();
  cfg.failure_persistence = None;
  let mut runner = TestRunner::new(cfg);
  runner.run(&s, |arg| {
    match p(arg) {
      Some(result) =>
        if result { Ok(()) }
        else {
          Err(TestCaseError::Fail("unexpected result".into()))
        },
      None => Err(TestCaseError::Reject("invalid input".into()))
    }
  }).unwrap()
}

/// Run a property on arbitrary values.
pub fn do_test<T: Arbitrary>(p: fn(T) -> Option<bool>) {
  do_test_with(any::<T>(), p)
}


impl<U: Native> Boxed<U> {
  /// The value, and its meaning as a natural number.
  pub fn sem(self) -> (Self, BigUint) {
    (self, self.into())
  }
}

/// 2^W for the given word.
pub fn lim<U: Native>() -> BigUint {
  BigUint::one() << (Boxed::<U>::bits() as usize)
}

/// The word whose meaning is `n` modulo 2^W.
pub fn word<U: Native>(n: &BigUint) -> Boxed<U> {
  Boxed::from_biguint(n).0
}


/// Make a test for each check, running it at every native width.
/// The checks are generic functions in a `checks` module.
macro_rules! widths {
  ($($check:ident),* $(,)?) => { $(
    #[test]
    fn $check() {
      checks::$check::<u8>();
      checks::$check::<u16>();
      checks::$check::<u32>();
      checks::$check::<u64>();
      checks::$check::<usize>();
    }
  )* };
}

pub(crate) use widths;
