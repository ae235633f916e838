//! # outcome — typed error-handling primitives
//!
//! A small foundational crate for code that refuses to signal failure
//! through panic or any other non-local control transfer: errors are plain
//! values, carried in a discriminated container, branched on explicitly.
//!
//! ## Design
//!
//! Three pieces, built together:
//!
//! - [`Outcome<T, E>`] — a two-variant sum type with total, non-consuming
//!   extraction (`ok()`/`err()` return `Option`s, never panic) and
//!   same-type combinators (`map`/`map_err`) that produce a fresh
//!   container instead of mutating.
//!
//! - [`Error`] / [`SourceLocation`] — the canonical error value: a message
//!   plus an optional diagnostic pre-composed from the call site the
//!   [`site!`] macro captured.
//!
//! - [`ErrorInfo`] — the two-method capability (`msg()`, `info()`) that
//!   lets reporters accept any error-like value without naming a concrete
//!   type.
//!
//! For success payloads that model exclusively-owned resources, where
//! handing out clones of the *handle* would be wrong, [`BoxedOutcome`]
//! keeps the same non-consuming `ok()` contract by deep-copying the
//! pointee instead.
//!
//! ## Quick Start
//!
//! ```rust
//! use outcome::{ensure, Fallible, Outcome};
//!
//! fn parse_port(raw: &str) -> Fallible<u16> {
//!     ensure!(!raw.is_empty(), "empty port string");
//!     match raw.parse() {
//!         Ok(port) => Outcome::Ok(port),
//!         Err(_) => Outcome::Err(outcome::err_at!("bad port: {}", raw)),
//!     }
//! }
//!
//! let r = parse_port("8080");
//! assert!(r.is_ok());
//! assert_eq!(r.ok(), Some(8080));
//!
//! let bad = parse_port("");
//! // info() renders "Error: empty port string\nFunction: ...\nFile: ...:N"
//! assert!(bad.err().is_some_and(|e| e.info().starts_with("Error: ")));
//! ```
//!
//! Two self-contained utilities ride along: [`EnumSpan`] for ranged
//! iteration over contiguous field-less enums, and [`Tagged`] for
//! distinguishing same-typed constructor arguments with a marker type.
//!
//! ## Dependencies
//!
//! Zero. By design.

#![forbid(unsafe_code)]

mod location;
mod error;
mod outcome;
mod boxed;
#[macro_use]
mod macros;
mod span;
mod tagged;

// ── Public API ────────────────────────────────────────────────────

pub use location::SourceLocation;
pub use error::{Error, ErrorInfo};
pub use outcome::Outcome;
pub use boxed::BoxedOutcome;
pub use span::{Contiguous, EnumSpan};
pub use tagged::Tagged;

// Macros (`site!`, `err_at!`, `fail!`, `ensure!`) are exported at the
// crate root by #[macro_export].

/// Convenience alias: an [`Outcome`] whose error branch is the canonical
/// [`Error`].
pub type Fallible<T> = Outcome<T, Error>;
