//! Call-site capture for error diagnostics.
//!
//! A `SourceLocation` records where an error was raised: file path, line
//! number, and the enclosing function. It is meant to be produced by the
//! [`site!`](crate::site) macro rather than written out by hand — the macro
//! resolves all three fields at the point of invocation.

/// An immutable (file, line, function) triple captured at an error site.
///
/// All three fields are fixed at construction; there is no `Default` and no
/// mutation. The type is `Copy` — it is three words of `'static` data.
///
/// ```
/// use outcome::SourceLocation;
///
/// let loc = SourceLocation::new("src/disk.rs", 42, "disk::flush");
/// assert_eq!(loc.file(), "src/disk.rs");
/// assert_eq!(loc.line(), 42);
/// assert_eq!(loc.function(), "disk::flush");
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    file: &'static str,
    line: u32,
    function: &'static str,
}

impl SourceLocation {
    /// Construct a location from an explicit triple.
    ///
    /// Prefer [`site!`](crate::site), which fills the triple in for you.
    #[inline]
    pub const fn new(file: &'static str, line: u32, function: &'static str) -> Self {
        Self { file, line, function }
    }

    /// The file in which the error site lives.
    #[inline]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// The line number of the error site.
    #[inline]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// The fully qualified name of the enclosing function.
    #[inline]
    pub const fn function(&self) -> &'static str {
        self.function
    }
}

impl core::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

impl core::fmt::Debug for SourceLocation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SourceLocation")
            .field("file", &self.file)
            .field("line", &self.line)
            .field("function", &self.function)
            .finish()
    }
}
