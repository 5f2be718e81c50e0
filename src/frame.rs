//! Caller attribution.
//!
//! When an assertion fails the message should point at the test author's
//! line, not at a helper inside this crate. [`caller`] walks the live stack
//! and returns the first frame that follows this crate's own frames.
//!
//! Attribution needs symbols and line tables at run time. The default `test`
//! and `dev` profiles have them; a profile with `debug = false` or stripped
//! symbols leaves [`caller`] returning [`Caller::unknown`] or a frame without
//! file and line. [`stack`] and [`caller`] are never inlined, so at least one
//! frame of this crate is always on the stack to anchor the search.

use std::fmt;
use std::path::Path;

use once_cell::sync::Lazy;

/// Root module path of this crate, e.g. `"mighty"`.
static CRATE_PATH: Lazy<&'static str> = Lazy::new(|| {
    module_path!()
        .split("::")
        .next()
        .unwrap_or(module_path!())
});

const UNKNOWN_FUNC: &str = "<unknown_func>";
const UNKNOWN_FILE: &str = "<unknown_file>";

/// One resolved stack frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Demangled function name without hash, e.g. `my_tests::reads_byte`.
    pub function: String,
    /// Full path of the source file, if debug info had one.
    pub file: Option<String>,
    /// Source line, if debug info had one.
    pub line: Option<u32>,
}

/// Identity of the code that called into the assertion helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub function: String,
    /// Base name of the source file.
    pub file: String,
    /// Source line, `-1` when unknown.
    pub line: i64,
}

impl Caller {
    /// The sentinel returned when no external frame could be found.
    pub fn unknown() -> Self {
        Self {
            function: UNKNOWN_FUNC.to_string(),
            file: UNKNOWN_FILE.to_string(),
            line: -1,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.line == -1 && self.function == UNKNOWN_FUNC
    }
}

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Func: {}, File: {}:{}", self.function, self.file, self.line)
    }
}

/// Whether a demangled function name belongs to this crate.
///
/// Trait impls demangle as `<mighty::Foo as Trait>::method`, so a leading
/// `<` is ignored.
pub fn is_own(function: &str) -> bool {
    let name = function.trim_start_matches('<');
    name.strip_prefix(*CRATE_PATH)
        .is_some_and(|rest| rest.starts_with("::"))
}

/// Picks the first frame after this crate's frames.
///
/// Frames before the first own frame (the unwinder's, for a live stack) are
/// skipped, then every own frame. Exhausting the iterator yields
/// [`Caller::unknown`].
pub fn first_external<I>(frames: I) -> Caller
where
    I: IntoIterator<Item = Frame>,
{
    let mut inside = false;
    for frame in frames {
        if is_own(&frame.function) {
            inside = true;
            continue;
        }
        if !inside {
            continue;
        }
        return Caller {
            function: frame.function,
            file: frame
                .file
                .as_deref()
                .and_then(|f| Path::new(f).file_name())
                .map(|f| f.to_string_lossy().into_owned())
                .unwrap_or_else(|| UNKNOWN_FILE.to_string()),
            line: frame.line.map_or(-1, i64::from),
        };
    }
    Caller::unknown()
}

/// Resolves the current stack, innermost frame first.
///
/// Inlined functions show up as separate entries, in the order the debug
/// info reports them.
#[inline(never)]
pub fn stack() -> Vec<Frame> {
    let mut frames = Vec::new();
    backtrace::trace(|raw| {
        backtrace::resolve_frame(raw, |symbol| {
            let Some(name) = symbol.name() else {
                return;
            };
            frames.push(Frame {
                function: format!("{name:#}"),
                file: symbol.filename().map(|p| p.display().to_string()),
                line: symbol.lineno(),
            });
        });
        true
    });
    frames
}

/// The first caller outside this crate.
#[inline(never)]
pub fn caller() -> Caller {
    first_external(stack())
}
