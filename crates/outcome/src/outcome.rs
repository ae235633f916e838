//! The generic two-state success/failure container.

/// A discriminated container holding exactly one of a success value or an
/// error value.
///
/// Unlike `std::result::Result`, the extraction queries here are
/// *non-consuming*: `ok()` and `err()` borrow the container and hand back a
/// clone, so they can be called any number of times without invalidating
/// anything. Mis-querying the wrong branch yields `None`, never a panic.
///
/// The two variants are the only constructors — there is no default or
/// empty state, and nothing mutates a container after construction. The
/// combinators ([`map`](Outcome::map), [`map_err`](Outcome::map_err))
/// produce a brand-new container and leave the original intact.
///
/// `E` is fully generic; by convention it is [`Error`](crate::Error) (see
/// the [`Fallible`](crate::Fallible) alias), but the container places no
/// bound on it beyond storability.
///
/// ```
/// use outcome::{Error, Outcome};
///
/// fn parse_port(raw: &str) -> Outcome<u16, Error> {
///     match raw.parse() {
///         Ok(port) => Outcome::Ok(port),
///         Err(_) => Outcome::Err(Error::new(format!("bad port: {raw}"))),
///     }
/// }
///
/// let r = parse_port("8080");
/// assert!(r.is_ok());
/// assert_eq!(r.ok(), Some(8080));
/// assert_eq!(r.err(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Outcome<T, E> {
    /// The success branch.
    Ok(T),
    /// The failure branch.
    Err(E),
}

// ── Queries ───────────────────────────────────────────────────────

impl<T, E> Outcome<T, E> {
    /// True if this holds the success branch.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// True if this holds the failure branch. Exact complement of
    /// [`is_ok`](Outcome::is_ok).
    #[inline]
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// A clone of the success value, or `None` if this is the Err branch.
    ///
    /// Safe to call without checking `is_ok()` first, and safe to call
    /// repeatedly — the container is never consumed or mutated by it.
    #[inline]
    pub fn ok(&self) -> Option<T>
    where
        T: Clone,
    {
        match self {
            Outcome::Ok(value) => Some(value.clone()),
            Outcome::Err(_) => None,
        }
    }

    /// A clone of the error value, or `None` if this is the Ok branch.
    #[inline]
    pub fn err(&self) -> Option<E>
    where
        E: Clone,
    {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Err(error) => Some(error.clone()),
        }
    }

    /// Consume the container and take the success value, if any.
    ///
    /// The moving counterpart of [`ok`](Outcome::ok): no `Clone` bound,
    /// but the container is gone afterwards.
    #[inline]
    pub fn into_ok(self) -> Option<T> {
        match self {
            Outcome::Ok(value) => Some(value),
            Outcome::Err(_) => None,
        }
    }

    /// Consume the container and take the error value, if any.
    #[inline]
    pub fn into_err(self) -> Option<E> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Err(error) => Some(error),
        }
    }
}

// ── Combinators ───────────────────────────────────────────────────

impl<T, E> Outcome<T, E> {
    /// Transform the success value, passing an Err branch through untouched.
    ///
    /// This is a same-type map: `f` must return another `T`. The input
    /// container is read, not consumed — a new container is returned.
    ///
    /// ```
    /// use outcome::{Error, Outcome};
    ///
    /// let r: Outcome<i32, Error> = Outcome::Ok(20);
    /// assert_eq!(r.map(|v| v * 2).ok(), Some(40));
    ///
    /// let e: Outcome<i32, Error> = Outcome::Err(Error::new("boom"));
    /// assert_eq!(e.map(|v| v * 2).err().map(|err| err.msg().to_string()),
    ///            Some("boom".to_string()));
    /// ```
    pub fn map<F>(&self, f: F) -> Outcome<T, E>
    where
        F: FnOnce(T) -> T,
        T: Clone,
        E: Clone,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(f(value.clone())),
            Outcome::Err(error) => Outcome::Err(error.clone()),
        }
    }

    /// Transform the error value, passing an Ok branch through untouched.
    ///
    /// The usual pairing is with [`Error::set`](crate::Error::set) to
    /// relabel an error while propagating it upward:
    ///
    /// ```
    /// use outcome::{Error, Outcome};
    ///
    /// let r: Outcome<i32, Error> = Outcome::Err(Error::new("open failed"));
    /// let relabeled = r.map_err(|mut e| {
    ///     e.set("config: open failed");
    ///     e
    /// });
    /// assert_eq!(relabeled.err().map(|e| e.msg().to_string()),
    ///            Some("config: open failed".to_string()));
    /// ```
    pub fn map_err<F>(&self, f: F) -> Outcome<T, E>
    where
        F: FnOnce(E) -> E,
        T: Clone,
        E: Clone,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value.clone()),
            Outcome::Err(error) => Outcome::Err(f(error.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn ok_of(v: i32) -> Outcome<i32, Error> {
        Outcome::Ok(v)
    }

    fn err_of(msg: &str) -> Outcome<i32, Error> {
        Outcome::Err(Error::new(msg))
    }

    #[test]
    fn ok_state() {
        let r = ok_of(42);
        assert!(r.is_ok());
        assert!(!r.is_err());
        assert_eq!(r.ok(), Some(42));
        assert_eq!(r.err(), None);
    }

    #[test]
    fn err_state() {
        let r = err_of("bad input");
        assert!(!r.is_ok());
        assert!(r.is_err());
        assert_eq!(r.ok(), None);
        assert_eq!(r.err(), Some(Error::new("bad input")));
    }

    #[test]
    fn queries_are_idempotent() {
        let r = ok_of(7);
        assert_eq!(r.ok(), r.ok());
        assert_eq!(r.err(), r.err());
        // The container is still fully usable afterwards.
        assert!(r.is_ok());
        assert_eq!(r.ok(), Some(7));
    }

    #[test]
    fn map_transforms_ok() {
        let r = ok_of(21);
        let doubled = r.map(|v| v * 2);
        assert_eq!(doubled.ok(), Some(42));
        // Source container untouched.
        assert_eq!(r.ok(), Some(21));
    }

    #[test]
    fn map_is_identity_on_err() {
        let r = err_of("bad input");
        let mapped = r.map(|v| v * 2);
        assert_eq!(mapped.err(), Some(Error::new("bad input")));
        assert_eq!(mapped.ok(), None);
    }

    #[test]
    fn map_err_transforms_err() {
        let r = err_of("open failed");
        let relabeled = r.map_err(|mut e| {
            e.set("config: open failed");
            e
        });
        assert_eq!(relabeled.err(), Some(Error::new("config: open failed")));
    }

    #[test]
    fn map_err_is_identity_on_ok() {
        let r = ok_of(5);
        let mapped = r.map_err(|mut e| {
            e.set("never runs");
            e
        });
        assert_eq!(mapped.ok(), Some(5));
        assert_eq!(mapped.err(), None);
    }

    #[test]
    fn combinators_chain() {
        let r = ok_of(10).map(|v| v + 1).map(|v| v * 2);
        assert_eq!(r.ok(), Some(22));
    }

    #[test]
    fn into_ok_moves_without_clone() {
        struct NoClone(i32);
        let r: Outcome<NoClone, Error> = Outcome::Ok(NoClone(9));
        let taken = r.into_ok();
        assert_eq!(taken.map(|v| v.0), Some(9));
    }

    #[test]
    fn into_err_moves_without_clone() {
        struct NoClone;
        let r: Outcome<NoClone, Error> = Outcome::Err(Error::new("gone"));
        assert_eq!(r.into_err(), Some(Error::new("gone")));
    }

    #[test]
    fn generic_over_foreign_err() {
        // No ErrorInfo bound on E — a bare string works.
        let r: Outcome<i32, String> = Outcome::Err("plain".to_string());
        assert_eq!(r.err(), Some("plain".to_string()));
    }

    #[test]
    fn pattern_matching() {
        let r = ok_of(3);
        let v = match r {
            Outcome::Ok(v) => v,
            Outcome::Err(_) => -1,
        };
        assert_eq!(v, 3);
    }

    #[test]
    fn fresh_int_result_scenario() {
        let r: Outcome<i32, Error> = Outcome::Ok(42);
        assert_eq!((r.is_ok(), r.is_err()), (true, false));
        assert_eq!(r.ok(), Some(42));
        assert_eq!(r.err(), None);
    }

    #[test]
    fn send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Outcome<i32, Error>>();
    }
}
