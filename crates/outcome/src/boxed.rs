//! `Outcome` for exclusively-owned, heap-allocated success payloads.

/// A two-state container whose success payload is a single-owner `Box`.
///
/// The generic [`Outcome`](crate::Outcome) hands out clones of its stored
/// value; for a payload that models an exclusively-owned resource handle,
/// cloning the *handle* is exactly what must not happen. This container
/// keeps the same non-consuming `ok()` contract by duplicating the
/// *pointee* instead: `ok()` allocates a fresh `Box` around a clone of the
/// referent and leaves the stored handle untouched.
///
/// The Ok branch is constructed only by transferring an existing `Box` in;
/// after the move the caller's handle is gone, so at most one owner of the
/// pointee ever exists.
///
/// Only the minimum contract is provided — `is_ok`/`is_err`/`ok`/`err` plus
/// the consuming extractors. There are no combinators; transform the
/// payload after extracting it.
///
/// ```
/// use outcome::{BoxedOutcome, Error};
///
/// let r: BoxedOutcome<Vec<u8>, Error> = BoxedOutcome::Ok(Box::new(vec![1, 2, 3]));
/// let copy = r.ok().unwrap();
///
/// // The original payload is still live and independent of the copy.
/// assert!(r.is_ok());
/// assert_eq!(*copy, vec![1, 2, 3]);
/// ```
#[derive(Debug, PartialEq, Eq)]
pub enum BoxedOutcome<T, E> {
    /// The success branch, holding the sole owner of the payload.
    Ok(Box<T>),
    /// The failure branch.
    Err(E),
}

impl<T, E> BoxedOutcome<T, E> {
    /// True if this holds the success branch.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, BoxedOutcome::Ok(_))
    }

    /// True if this holds the failure branch.
    #[inline]
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// A fresh `Box` holding a deep copy of the payload, or `None` for Err.
    ///
    /// The stored handle stays valid; the returned box points at a distinct
    /// allocation that compares equal to the original pointee. Allocation
    /// failure aborts, as everywhere else in the allocator's contract —
    /// it is not surfaced as a recoverable state.
    #[inline]
    pub fn ok(&self) -> Option<Box<T>>
    where
        T: Clone,
    {
        match self {
            BoxedOutcome::Ok(value) => Some(Box::new(T::clone(value))),
            BoxedOutcome::Err(_) => None,
        }
    }

    /// A clone of the error value, or `None` for Ok.
    #[inline]
    pub fn err(&self) -> Option<E>
    where
        E: Clone,
    {
        match self {
            BoxedOutcome::Ok(_) => None,
            BoxedOutcome::Err(error) => Some(error.clone()),
        }
    }

    /// Consume the container and move the original handle out.
    ///
    /// No `Clone` bound and no new allocation — this transfers ownership of
    /// the one live handle to the caller.
    #[inline]
    pub fn into_ok(self) -> Option<Box<T>> {
        match self {
            BoxedOutcome::Ok(value) => Some(value),
            BoxedOutcome::Err(_) => None,
        }
    }

    /// Consume the container and move the error out.
    #[inline]
    pub fn into_err(self) -> Option<E> {
        match self {
            BoxedOutcome::Ok(_) => None,
            BoxedOutcome::Err(error) => Some(error),
        }
    }
}
