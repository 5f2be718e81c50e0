//! Ready-to-call assertion closures.
//!
//! Each function binds a reporter and returns the matching [`Myt`] method as
//! a closure over `&dyn Operand`, so a test can start with one line:
//!
//! ```
//! use mighty::{funcs, Recorder};
//!
//! let rec = Recorder::test("len");
//! let (eq, neq) = funcs::eq_neq(&rec);
//! eq(&6usize, &"mighty".len(), None);
//! neq(&0usize, &"mighty".len(), None);
//! assert_eq!(rec.count(), 0);
//! ```
//!
//! The curried factories return closures that take the expected value and
//! hand back an [`Expect`] or [`ExpectNear`]:
//!
//! ```
//! use mighty::{funcs, Recorder};
//!
//! let rec = Recorder::test("parse");
//! let (eq, exp_eq) = funcs::eq_exp_eq(&rec);
//! eq(&42i64, &"42".parse::<i64>().unwrap(), None);
//! exp_eq(&42i64).result("42".parse::<i64>());
//! assert_eq!(rec.count(), 0);
//! ```

use std::error::Error as StdError;

use crate::myt::{Check, Expect, ExpectNear, Expected, Myt};
use crate::operand::Operand;
use crate::reporter::Reporter;

/// `Myt::new(tb).eq` as a closure.
pub fn eq<R: Reporter>(tb: &R) -> impl Fn(&dyn Operand, &dyn Operand, Option<&dyn StdError>) + '_ {
    let myt = Myt::new(tb);
    move |exp: &dyn Operand, got: &dyn Operand, cause: Option<&dyn StdError>| {
        myt.check_eq(exp, Some(got), cause, false)
    }
}

/// `Myt::new(tb).deq` as a closure.
pub fn deq<R: Reporter>(tb: &R) -> impl Fn(&dyn Operand, &dyn Operand, Option<&dyn StdError>) + '_ {
    let myt = Myt::new(tb);
    move |exp: &dyn Operand, got: &dyn Operand, cause: Option<&dyn StdError>| {
        myt.check_eq(exp, Some(got), cause, true)
    }
}

/// `Myt::new(tb).neq` as a closure.
pub fn neq<R: Reporter>(tb: &R) -> impl Fn(&dyn Operand, &dyn Operand, Option<&dyn StdError>) + '_ {
    let myt = Myt::new(tb);
    move |v1: &dyn Operand, v2: &dyn Operand, cause: Option<&dyn StdError>| {
        myt.check_neq(v1, Some(v2), cause)
    }
}

/// `Myt::new(tb).near` as a closure.
pub fn near<R: Reporter>(tb: &R) -> impl Fn(f64, f64, f64, Option<&dyn StdError>) + '_ {
    let myt = Myt::new(tb);
    move |exp: f64, got: f64, eps: f64, cause: Option<&dyn StdError>| {
        myt.check_near(exp, Some(got), eps, cause)
    }
}

/// [`eq`] and [`neq`] bound to the same reporter.
#[allow(clippy::type_complexity)]
pub fn eq_neq<R: Reporter>(
    tb: &R,
) -> (
    impl Fn(&dyn Operand, &dyn Operand, Option<&dyn StdError>) + '_,
    impl Fn(&dyn Operand, &dyn Operand, Option<&dyn StdError>) + '_,
) {
    (eq(tb), neq(tb))
}

/// `Myt::new(tb).exp_eq` as a closure over a borrowed expected value.
pub fn exp_eq<'a, R: Reporter>(tb: &'a R) -> impl Fn(&'a dyn Operand) -> Expect<'a, R> + 'a {
    curried(tb, Check::Eq)
}

/// `Myt::new(tb).exp_deq` as a closure over a borrowed expected value.
pub fn exp_deq<'a, R: Reporter>(tb: &'a R) -> impl Fn(&'a dyn Operand) -> Expect<'a, R> + 'a {
    curried(tb, Check::Deq)
}

/// `Myt::new(tb).exp_neq` as a closure over a borrowed first value.
pub fn exp_neq<'a, R: Reporter>(tb: &'a R) -> impl Fn(&'a dyn Operand) -> Expect<'a, R> + 'a {
    curried(tb, Check::Neq)
}

/// `Myt::new(tb).exp_near` as a closure.
pub fn exp_near<'a, R: Reporter>(tb: &'a R) -> impl Fn(f64, f64) -> ExpectNear<'a, R> + 'a {
    let myt = Myt::new(tb);
    move |exp: f64, eps: f64| ExpectNear::new(myt, exp, eps)
}

/// [`eq`] and [`exp_eq`] bound to the same reporter.
#[allow(clippy::type_complexity)]
pub fn eq_exp_eq<'a, R: Reporter>(
    tb: &'a R,
) -> (
    impl Fn(&dyn Operand, &dyn Operand, Option<&dyn StdError>) + 'a,
    impl Fn(&'a dyn Operand) -> Expect<'a, R> + 'a,
) {
    (eq(tb), exp_eq(tb))
}

fn curried<'a, R: Reporter>(tb: &'a R, check: Check) -> impl Fn(&'a dyn Operand) -> Expect<'a, R> + 'a {
    let myt = Myt::new(tb);
    move |exp: &'a dyn Operand| Expect::new(myt, check, Expected::Borrowed(exp))
}
