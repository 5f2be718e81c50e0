//! The assertion wrapper.

use std::error::Error as StdError;

use crate::failure::Failure;
use crate::frame;
use crate::near::{near, NearFn};
use crate::operand::Operand;
use crate::reporter::{Reporter, RunKind};

/// Wraps a [`Reporter`], arming it with short assertion methods.
///
/// Every method takes an optional upstream error as its last argument; the
/// assertion fails if that error is present, even when the values match.
/// A failure is only reported, never raised.
///
/// ```
/// use mighty::{Myt, Recorder};
///
/// let rec = Recorder::test("abs");
/// let m = Myt::new(&rec);
/// for (input, exp) in [(1.0f64, 1.0f64), (-1.0, 1.0)] {
///     m.eq(exp, input.abs(), None);
/// }
/// assert_eq!(rec.count(), 0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Myt<R> {
    tb: R,
    near: NearFn,
}

impl<R: Reporter> Myt<R> {
    /// Wraps `tb` using the default [`near`] strategy.
    pub fn new(tb: R) -> Self {
        Self { tb, near }
    }

    /// Wraps `tb` using a custom nearness strategy.
    pub fn with_near(tb: R, near: NearFn) -> Self {
        Self { tb, near }
    }

    /// Replaces the nearness strategy used by [`near`](Self::near) and
    /// [`exp_near`](Self::exp_near).
    pub fn set_near(&mut self, near: NearFn) {
        self.near = near;
    }

    /// The wrapped reporter.
    pub fn reporter(&self) -> &R {
        &self.tb
    }

    /// Whether the wrapped reporter belongs to a test or a benchmark.
    pub fn kind(&self) -> RunKind {
        self.tb.kind()
    }

    /// Reports an error if `exp != got`, or if `cause` is present.
    ///
    /// If the values differ and their types do too, a second message notes
    /// the mismatch: an unsuffixed literal such as `6` is an `i32`, which
    /// never equals a `usize`.
    ///
    /// Both values must be [`Operand`]s, which rules out borrowed data. Pass
    /// an owned copy instead, e.g. `got.to_string()` for a `&str` borrowed
    /// from a local buffer, or `slice.to_vec()` for a slice.
    pub fn eq<E: Operand, G: Operand>(&self, exp: E, got: G, cause: Option<&dyn StdError>) {
        self.check_eq(&exp, Some(&got), cause, false);
    }

    /// Like [`eq`](Self::eq), with a report laid out for large values.
    pub fn deq<E: Operand, G: Operand>(&self, exp: E, got: G, cause: Option<&dyn StdError>) {
        self.check_eq(&exp, Some(&got), cause, true);
    }

    /// Reports an error if `v1 == v2`, or if `cause` is present.
    pub fn neq<A: Operand, B: Operand>(&self, v1: A, v2: B, cause: Option<&dyn StdError>) {
        self.check_neq(&v1, Some(&v2), cause);
    }

    /// Reports an error if `got` is not near `exp` under the wrapper's
    /// nearness strategy, or if `cause` is present.
    pub fn near(&self, exp: f64, got: f64, eps: f64, cause: Option<&dyn StdError>) {
        self.check_near(exp, Some(got), eps, cause);
    }

    /// Takes the expected value; the returned [`Expect`] takes the rest.
    ///
    /// ```
    /// use mighty::{Myt, Recorder};
    ///
    /// let rec = Recorder::new();
    /// let m = Myt::new(&rec);
    /// m.exp_eq(6usize).result("mighty".parse::<String>().map(|s| s.len()));
    /// assert_eq!(rec.count(), 0);
    /// ```
    pub fn exp_eq<E: Operand>(&self, exp: E) -> Expect<'_, R> {
        Expect::new(self.by_ref(), Check::Eq, Expected::Owned(Box::new(exp)))
    }

    pub fn exp_deq<E: Operand>(&self, exp: E) -> Expect<'_, R> {
        Expect::new(self.by_ref(), Check::Deq, Expected::Owned(Box::new(exp)))
    }

    pub fn exp_neq<E: Operand>(&self, v1: E) -> Expect<'_, R> {
        Expect::new(self.by_ref(), Check::Neq, Expected::Owned(Box::new(v1)))
    }

    pub fn exp_near(&self, exp: f64, eps: f64) -> ExpectNear<'_, R> {
        ExpectNear::new(self.by_ref(), exp, eps)
    }

    /// A wrapper over a borrow of this one's reporter, same strategy.
    pub(crate) fn by_ref(&self) -> Myt<&R> {
        Myt {
            tb: &self.tb,
            near: self.near,
        }
    }

    pub(crate) fn check_eq(
        &self,
        exp: &dyn Operand,
        got: Option<&dyn Operand>,
        cause: Option<&dyn StdError>,
        deep: bool,
    ) {
        let equal = got.is_some_and(|got| exp.dyn_eq(got));
        if equal && cause.is_none() {
            return;
        }

        self.report(&Failure::not_equal(frame::caller(), exp, got, cause, deep));
        if equal {
            return;
        }
        if let Some(note) = got.and_then(|got| Failure::type_mismatch(exp, got)) {
            self.report(&note);
        }
    }

    pub(crate) fn check_neq(
        &self,
        v1: &dyn Operand,
        v2: Option<&dyn Operand>,
        cause: Option<&dyn StdError>,
    ) {
        let differ = v2.is_some_and(|v2| !v1.dyn_eq(v2));
        if differ && cause.is_none() {
            return;
        }
        self.report(&Failure::unexpectedly_equal(frame::caller(), v1, v2, cause));
    }

    pub(crate) fn check_near(
        &self,
        exp: f64,
        got: Option<f64>,
        eps: f64,
        cause: Option<&dyn StdError>,
    ) {
        let near = got.is_some_and(|got| (self.near)(exp, got, eps));
        if near && cause.is_none() {
            return;
        }
        self.report(&Failure::not_near(frame::caller(), exp, got, eps, cause));
    }

    fn report(&self, failure: &Failure) {
        self.tb.error(&failure.to_string());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Check {
    Eq,
    Deq,
    Neq,
}

/// An assertion waiting for its "got" value.
///
/// Created by [`Myt::exp_eq`], [`Myt::exp_deq`] and [`Myt::exp_neq`], or by
/// the closures from [`funcs::exp_eq`](crate::funcs::exp_eq) and its
/// siblings. The following two forms are equivalent:
///
/// ```
/// # use mighty::{Myt, Recorder};
/// # let rec = Recorder::new();
/// # let m = Myt::new(&rec);
/// # fn some_func() -> Result<i32, std::num::ParseIntError> { "4".parse() }
/// let got = some_func();
/// match &got {
///     Ok(v) => m.eq(4, *v, None),
///     Err(e) => m.eq(4, (), Some(e)),
/// }
///
/// m.exp_eq(4).result(some_func());
/// # assert_eq!(rec.count(), 0);
/// ```
#[derive(Debug)]
pub struct Expect<'a, R> {
    myt: Myt<&'a R>,
    check: Check,
    expected: Expected<'a>,
}

/// The expected value of an [`Expect`], kept by value or borrowed.
#[derive(Debug)]
pub(crate) enum Expected<'a> {
    Owned(Box<dyn Operand>),
    Borrowed(&'a dyn Operand),
}

impl Expected<'_> {
    fn get(&self) -> &dyn Operand {
        match self {
            Expected::Owned(value) => &**value,
            Expected::Borrowed(value) => *value,
        }
    }
}

impl<'a, R: Reporter> Expect<'a, R> {
    pub(crate) fn new(myt: Myt<&'a R>, check: Check, expected: Expected<'a>) -> Self {
        Self {
            myt,
            check,
            expected,
        }
    }

    /// Runs the check against `got` and an optional upstream error.
    pub fn got<G: Operand>(&self, got: G, cause: Option<&dyn StdError>) {
        self.run(Some(&got), cause);
    }

    /// Runs the check against an operation's outcome.
    ///
    /// An `Err` always fails: there is no value to compare, and the error is
    /// reported as the cause.
    pub fn result<T: Operand, E: StdError>(&self, result: Result<T, E>) {
        match result {
            Ok(got) => self.run(Some(&got), None),
            Err(err) => self.run(None, Some(&err)),
        }
    }

    fn run(&self, got: Option<&dyn Operand>, cause: Option<&dyn StdError>) {
        let expected = self.expected.get();
        match self.check {
            Check::Eq => self.myt.check_eq(expected, got, cause, false),
            Check::Deq => self.myt.check_eq(expected, got, cause, true),
            Check::Neq => self.myt.check_neq(expected, got, cause),
        }
    }
}

/// A `near` assertion waiting for its "got" value. Created by
/// [`Myt::exp_near`].
#[derive(Debug, Clone, Copy)]
pub struct ExpectNear<'a, R> {
    myt: Myt<&'a R>,
    expected: f64,
    eps: f64,
}

impl<'a, R: Reporter> ExpectNear<'a, R> {
    pub(crate) fn new(myt: Myt<&'a R>, expected: f64, eps: f64) -> Self {
        Self { myt, expected, eps }
    }

    pub fn got(&self, got: f64, cause: Option<&dyn StdError>) {
        self.myt.check_near(self.expected, Some(got), self.eps, cause);
    }

    pub fn result<E: StdError>(&self, result: Result<f64, E>) {
        match result {
            Ok(got) => self.got(got, None),
            Err(err) => self
                .myt
                .check_near(self.expected, None, self.eps, Some(&err)),
        }
    }
}
