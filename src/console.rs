//! A reporter that prints failures to the terminal.
//!
//! Failures are written to stderr as they happen, with a colored header naming
//! the test or benchmark. Output goes through `eprint!`, so the test harness
//! captures it per test. The run keeps going; [`ConsoleReporter::finish`]
//! turns the tally into a `Result` so a `#[test]` can fail at the end. A
//! reporter dropped with failures before `finish` was called panics, so a
//! forgotten `finish` cannot let a failing test pass:
//!
//! ```
//! use mighty::{ConsoleReporter, Failed, Myt};
//!
//! fn reads_header() -> Result<(), Failed> {
//!     let tb = ConsoleReporter::test("reads_header").with_colors(false);
//!     let m = Myt::new(&tb);
//!     m.eq(b'M', b"MZ\x90"[0], None);
//!     m.eq(2, b"MZ".len() as i32, None);
//!     tb.finish()
//! }
//! # reads_header().unwrap();
//! ```

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use miette::Diagnostic;
use termcolor::{Buffer, Color, ColorSpec, WriteColor};
use thiserror::Error;

use crate::reporter::{Reporter, RunKind};

/// Returned by [`ConsoleReporter::finish`] when any assertion failed.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
#[error("{kind} '{name}' recorded {count} failed assertion(s)")]
#[diagnostic(code(mighty::failed), help("see the messages printed to stderr above"))]
pub struct Failed {
    pub kind: RunKind,
    pub name: String,
    pub count: usize,
}

/// Prints each failure to stderr and counts them.
#[derive(Debug)]
pub struct ConsoleReporter {
    name: String,
    kind: RunKind,
    use_colors: bool,
    failures: AtomicUsize,
    finished: AtomicBool,
}

impl ConsoleReporter {
    /// A reporter for the test called `name`.
    pub fn test(name: impl Into<String>) -> Self {
        Self::new(name.into(), RunKind::Test)
    }

    /// A reporter for the benchmark called `name`.
    pub fn bench(name: impl Into<String>) -> Self {
        Self::new(name.into(), RunKind::Benchmark)
    }

    fn new(name: String, kind: RunKind) -> Self {
        Self {
            name,
            kind,
            use_colors: atty::is(atty::Stream::Stderr),
            failures: AtomicUsize::new(0),
            finished: AtomicBool::new(false),
        }
    }

    /// Forces colors on or off; by default they follow whether stderr is a
    /// terminal.
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Whether failures are written with ANSI colors.
    pub fn use_colors(&self) -> bool {
        self.use_colors
    }

    /// Number of messages recorded so far.
    pub fn failures(&self) -> usize {
        self.failures.load(Ordering::Relaxed)
    }

    /// Whether anything was recorded.
    pub fn failed(&self) -> bool {
        self.failures() > 0
    }

    /// `Ok` if nothing was recorded.
    ///
    /// Marks the reporter finished, so dropping it afterwards does not panic.
    pub fn finish(&self) -> Result<(), Failed> {
        self.finished.store(true, Ordering::Relaxed);
        self.tally()
    }

    fn tally(&self) -> Result<(), Failed> {
        match self.failures() {
            0 => Ok(()),
            count => Err(Failed {
                kind: self.kind,
                name: self.name.clone(),
                count,
            }),
        }
    }

    /// Writes one failure in the console layout.
    pub fn render<W: WriteColor>(&self, out: &mut W, message: &str) -> io::Result<()> {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(out, "--- FAIL: {}", self.kind)?;
        if !self.name.is_empty() {
            write!(out, " {}", self.name)?;
        }
        out.reset()?;
        writeln!(out)?;
        for line in message.lines() {
            writeln!(out, "    {line}")?;
        }
        Ok(())
    }

    /// The text [`Reporter::error`] prints for `message`, ANSI colored when
    /// colors are on.
    pub fn rendered(&self, message: &str) -> String {
        let mut buf = if self.use_colors {
            Buffer::ansi()
        } else {
            Buffer::no_color()
        };
        // Writing into memory does not fail.
        let _ = self.render(&mut buf, message);
        String::from_utf8_lossy(buf.as_slice()).into_owned()
    }
}

impl Reporter for ConsoleReporter {
    fn error(&self, message: &str) {
        self.failures.fetch_add(1, Ordering::Relaxed);
        eprint!("{}", self.rendered(message));
    }

    fn kind(&self) -> RunKind {
        self.kind
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for ConsoleReporter {
    fn drop(&mut self) {
        if self.finished.load(Ordering::Relaxed) || std::thread::panicking() {
            return;
        }
        if let Err(failed) = self.tally() {
            panic!("{failed} and was dropped without finish()");
        }
    }
}
