//! Failure messages.
//!
//! There is a single error taxonomy: the assertion failed. A [`Failure`]
//! value is built when a check does not hold, and its `Display` output is the
//! exact message handed to the reporter.

use std::error::Error as StdError;

use difference::{Changeset, Difference};
use miette::Diagnostic;
use thiserror::Error;

use crate::frame::Caller;
use crate::operand::Operand;

/// Separator placing "got" under "Expected" for deep comparisons.
const ALIGN: &str = "\n\t    ";

/// Placeholder for the "got" slot when an operation produced only an error.
pub const NO_VALUE: &str = "<no value>";

/// A failed assertion.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum Failure {
    /// `eq`/`deq` did not hold, or a cause was given.
    #[error(
        "{caller}\n\tExpected: {expected},{separator} got: {got}{}{}",
        cause_suffix(.cause),
        diff_suffix(.diff)
    )]
    #[diagnostic(code(mighty::eq))]
    NotEqual {
        caller: Caller,
        expected: String,
        got: String,
        separator: &'static str,
        cause: Option<String>,
        diff: Option<String>,
    },

    /// `neq` did not hold, or a cause was given.
    #[error("{caller}\n\tExpected mismatch: {first}, got: {second}{}", cause_suffix(.cause))]
    #[diagnostic(code(mighty::neq))]
    UnexpectedlyEqual {
        caller: Caller,
        first: String,
        second: String,
        cause: Option<String>,
    },

    /// `near` did not hold, or a cause was given.
    #[error(
        "{caller}\n\tExpected: {expected}, got: {got}, with eps: {eps}{}",
        cause_suffix(.cause)
    )]
    #[diagnostic(code(mighty::near))]
    NotNear {
        caller: Caller,
        expected: f64,
        got: String,
        eps: f64,
        cause: Option<String>,
    },

    /// Supplementary note sent after a failed equality whose operands have
    /// different dynamic types.
    #[error("\tTypes of expected and got do not match! exp type: {expected}, got type: {got}")]
    #[diagnostic(
        code(mighty::types),
        help("integer and float literals default to i32 and f64; add a suffix such as `6usize` to the expected value")
    )]
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },
}

impl Failure {
    /// A failed `eq` (`deep == false`) or `deq` (`deep == true`).
    ///
    /// `got` is `None` when the checked operation returned only an error.
    pub fn not_equal(
        caller: Caller,
        expected: &dyn Operand,
        got: Option<&dyn Operand>,
        cause: Option<&dyn StdError>,
        deep: bool,
    ) -> Self {
        let (expected, got, separator, diff) = if deep {
            let expected = format!("{expected:#?}");
            let got = got.map_or_else(|| NO_VALUE.to_string(), |g| format!("{g:#?}"));
            let diff = line_diff(&expected, &got);
            (expected, got, ALIGN, diff)
        } else {
            let got = got.map_or_else(|| NO_VALUE.to_string(), |g| format!("{g:?}"));
            (format!("{expected:?}"), got, "", None)
        };
        Failure::NotEqual {
            caller,
            expected,
            got,
            separator,
            cause: cause.map(|e| e.to_string()),
            diff,
        }
    }

    /// A failed `neq`.
    pub fn unexpectedly_equal(
        caller: Caller,
        first: &dyn Operand,
        second: Option<&dyn Operand>,
        cause: Option<&dyn StdError>,
    ) -> Self {
        Failure::UnexpectedlyEqual {
            caller,
            first: format!("{first:?}"),
            second: second.map_or_else(|| NO_VALUE.to_string(), |s| format!("{s:?}")),
            cause: cause.map(|e| e.to_string()),
        }
    }

    /// A failed `near`.
    pub fn not_near(
        caller: Caller,
        expected: f64,
        got: Option<f64>,
        eps: f64,
        cause: Option<&dyn StdError>,
    ) -> Self {
        Failure::NotNear {
            caller,
            expected,
            got: got.map_or_else(|| NO_VALUE.to_string(), |g| g.to_string()),
            eps,
            cause: cause.map(|e| e.to_string()),
        }
    }

    /// The type note for two operands, if their dynamic types differ.
    pub fn type_mismatch(expected: &dyn Operand, got: &dyn Operand) -> Option<Self> {
        crate::operand::types_differ(expected, got).then(|| Failure::TypeMismatch {
            expected: expected.type_name(),
            got: got.type_name(),
        })
    }

    /// The caller the failure is attributed to, if any.
    pub fn caller(&self) -> Option<&Caller> {
        match self {
            Failure::NotEqual { caller, .. }
            | Failure::UnexpectedlyEqual { caller, .. }
            | Failure::NotNear { caller, .. } => Some(caller),
            Failure::TypeMismatch { .. } => None,
        }
    }
}

fn cause_suffix(cause: &Option<String>) -> String {
    match cause {
        Some(cause) => format!(", error: {cause}"),
        None => String::new(),
    }
}

fn diff_suffix(diff: &Option<String>) -> String {
    match diff {
        Some(diff) => format!("\n\tDiff (-expected +got):\n{diff}"),
        None => String::new(),
    }
}

/// Line diff of two multi-line renderings, `None` when both fit on one line.
fn line_diff(expected: &str, got: &str) -> Option<String> {
    if !expected.contains('\n') && !got.contains('\n') {
        return None;
    }
    let changeset = Changeset::new(expected, got, "\n");
    let mut out = Vec::new();
    for diff in &changeset.diffs {
        let (mark, chunk) = match diff {
            Difference::Same(x) => (' ', x),
            Difference::Add(x) => ('+', x),
            Difference::Rem(x) => ('-', x),
        };
        for line in chunk.lines() {
            out.push(format!("\t{mark} {line}"));
        }
    }
    Some(out.join("\n"))
}
