//! The failure-reporting capability assertions are bound to.

use std::rc::Rc;
use std::sync::{Arc, Mutex, MutexGuard};

/// What kind of run a reporter belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RunKind {
    /// A correctness test.
    #[default]
    Test,
    /// A benchmark.
    Benchmark,
}

impl RunKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunKind::Test => "test",
            RunKind::Benchmark => "bench",
        }
    }
}

impl std::fmt::Display for RunKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Something failures can be reported to.
///
/// Recording a failure must not abort the caller; whether a failure ends the
/// run is up to the reporter.
pub trait Reporter {
    /// Records one formatted failure message.
    fn error(&self, message: &str);

    /// Whether this reporter belongs to a test or a benchmark.
    fn kind(&self) -> RunKind {
        RunKind::Test
    }

    /// Name of the test or benchmark, empty when unnamed.
    fn name(&self) -> &str {
        ""
    }
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn error(&self, message: &str) {
        (**self).error(message)
    }

    fn kind(&self) -> RunKind {
        (**self).kind()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

macro_rules! forward_reporter {
    ($($ptr:ident),*) => {
        $(
            impl<R: Reporter + ?Sized> Reporter for $ptr<R> {
                fn error(&self, message: &str) {
                    (**self).error(message)
                }

                fn kind(&self) -> RunKind {
                    (**self).kind()
                }

                fn name(&self) -> &str {
                    (**self).name()
                }
            }
        )*
    };
}

forward_reporter!(Box, Rc, Arc);

/// A reporter that keeps every message in memory.
///
/// Handy as a test double and for checking what an assertion would report.
#[derive(Debug, Default)]
pub struct Recorder {
    name: String,
    kind: RunKind,
    messages: Mutex<Vec<String>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A recorder tagged with a test name.
    pub fn test(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: RunKind::Test,
            messages: Mutex::default(),
        }
    }

    /// A recorder tagged with a benchmark name.
    pub fn bench(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: RunKind::Benchmark,
            messages: Mutex::default(),
        }
    }

    /// Number of messages recorded so far.
    pub fn count(&self) -> usize {
        self.lock().len()
    }

    /// Copies of the recorded messages, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// Removes and returns the recorded messages.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lock())
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    // A panic while the lock is held can only come from a caller's own code;
    // the message list is still usable.
    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Reporter for Recorder {
    fn error(&self, message: &str) {
        self.lock().push(message.to_string());
    }

    fn kind(&self) -> RunKind {
        self.kind
    }

    fn name(&self) -> &str {
        &self.name
    }
}
