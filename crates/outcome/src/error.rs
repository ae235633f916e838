//! The canonical error value and the `ErrorInfo` capability.

use std::fmt;

use crate::SourceLocation;

/// Minimal capability contract for error-like values.
///
/// Anything exposing a bare message and a human-facing rendering satisfies
/// it. Reporters and loggers should accept `&dyn ErrorInfo` (or
/// `impl ErrorInfo`) instead of depending on a concrete error type:
///
/// ```
/// use outcome::{Error, ErrorInfo};
///
/// fn report(e: &dyn ErrorInfo) -> String {
///     e.info().to_string()
/// }
///
/// let e = Error::new("disk full");
/// assert_eq!(report(&e), "disk full");
/// ```
///
/// Note that [`Outcome`](crate::Outcome)'s error parameter is *not* bounded
/// by this trait — the container is fully generic, and honoring the
/// capability is left to convention.
pub trait ErrorInfo {
    /// The bare error message.
    fn msg(&self) -> &str;

    /// The human-facing rendering; at least as informative as `msg()`.
    fn info(&self) -> &str;
}

/// An error value carrying a message and an optional pre-composed diagnostic.
///
/// Two ways to build one:
///
/// - [`Error::new`] — message only; `info()` falls back to the message.
/// - [`Error::with_location`] — message plus a [`SourceLocation`]; `info()`
///   returns a fixed-format multi-line diagnostic embedding the message,
///   function, file, and line. Usually spelled via the
///   [`err_at!`](crate::err_at) macro, which captures the location for you.
///
/// ```
/// use outcome::{Error, SourceLocation};
///
/// let e = Error::with_location("disk full", SourceLocation::new("disk.rs", 9, "flush"));
/// assert_eq!(e.info(), "Error: disk full\nFunction: flush\nFile: disk.rs:9");
/// ```
///
/// # `set()` and diagnostic staleness
///
/// [`Error::set`] overwrites the message in place and deliberately does
/// **not** recompose the diagnostic. An error relabeled during propagation
/// keeps the original message text inside `info()`'s framing. Downstream
/// code relies on the original text surviving there, so this asymmetry is
/// contract, not oversight.
#[derive(Clone, PartialEq, Eq)]
pub struct Error {
    msg: String,
    info: String,
}

// ── Constructors ──────────────────────────────────────────────────

impl Error {
    /// Build an error with only a message. The diagnostic stays empty.
    ///
    /// ```
    /// use outcome::Error;
    /// let e = Error::new("disk full");
    /// assert_eq!(e.msg(), "disk full");
    /// assert_eq!(e.info(), "disk full");
    /// ```
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            info: String::new(),
        }
    }

    /// Build an error with a message and call-site diagnostics.
    ///
    /// The diagnostic is composed eagerly, once, in the fixed form
    /// `"Error: {msg}\nFunction: {function}\nFile: {file}:{line}"`.
    pub fn with_location(msg: impl Into<String>, site: SourceLocation) -> Self {
        let msg = msg.into();
        let info = format!(
            "Error: {}\nFunction: {}\nFile: {}:{}",
            msg,
            site.function(),
            site.file(),
            site.line(),
        );
        Self { msg, info }
    }
}

// ── Accessors ─────────────────────────────────────────────────────

impl Error {
    /// The bare error message.
    #[inline]
    pub fn msg(&self) -> &str {
        &self.msg
    }

    /// The pre-composed diagnostic if one was captured, else the message.
    ///
    /// Never empty as long as the message is non-empty.
    #[inline]
    pub fn info(&self) -> &str {
        if self.info.is_empty() {
            &self.msg
        } else {
            &self.info
        }
    }

    /// Overwrite the message in place.
    ///
    /// Useful when relabeling an error inside
    /// [`Outcome::map_err`](crate::Outcome::map_err). The diagnostic is
    /// **not** recomposed — see the type-level docs on staleness.
    pub fn set(&mut self, msg: impl Into<String>) {
        self.msg = msg.into();
    }
}

impl ErrorInfo for Error {
    #[inline]
    fn msg(&self) -> &str {
        self.msg()
    }

    #[inline]
    fn info(&self) -> &str {
        self.info()
    }
}

// ── std::error::Error ─────────────────────────────────────────────

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.msg)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("Error");
        d.field("msg", &self.msg);
        if !self.info.is_empty() {
            d.field("info", &self.info);
        }
        d.finish()
    }
}
