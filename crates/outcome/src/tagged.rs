//! Marker-tagged newtypes for same-typed constructor arguments.

use core::marker::PhantomData;

/// A value of `T` distinguished at the type level by a zero-sized marker.
///
/// When a constructor takes several arguments of the same primitive type —
/// a width and a height, a port and a timeout — the call sites are one
/// transposition away from a silent bug. Tagging each argument makes the
/// transposition a type error instead:
///
/// ```
/// use outcome::Tagged;
///
/// struct WidthTag;
/// struct HeightTag;
/// type Width = Tagged<WidthTag, u32>;
/// type Height = Tagged<HeightTag, u32>;
///
/// fn area(w: Width, h: Height) -> u64 {
///     u64::from(*w.get()) * u64::from(*h.get())
/// }
///
/// assert_eq!(area(Width::new(4), Height::new(3)), 12);
/// // area(Height::new(3), Width::new(4)) would not compile.
/// ```
///
/// The wrapper is `#[repr(transparent)]` over `T`; the marker costs
/// nothing at runtime.
#[repr(transparent)]
pub struct Tagged<Marker, T> {
    value: T,
    _marker: PhantomData<Marker>,
}

impl<Marker, T> Tagged<Marker, T> {
    /// Wrap a value under this marker.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Borrow the underlying value.
    #[inline]
    pub const fn get(&self) -> &T {
        &self.value
    }

    /// Unwrap, discarding the tag.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

// Manual impls instead of derives: a derive would also bound the marker
// type, which is never constructed and need not be Clone/Eq/etc.

impl<Marker, T: Clone> Clone for Tagged<Marker, T> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<Marker, T: Copy> Copy for Tagged<Marker, T> {}

impl<Marker, T: PartialEq> PartialEq for Tagged<Marker, T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<Marker, T: Eq> Eq for Tagged<Marker, T> {}

impl<Marker, T: PartialOrd> PartialOrd for Tagged<Marker, T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<Marker, T: Ord> Ord for Tagged<Marker, T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl<Marker, T: core::hash::Hash> core::hash::Hash for Tagged<Marker, T> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<Marker, T: Default> Default for Tagged<Marker, T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<Marker, T: core::fmt::Debug> core::fmt::Debug for Tagged<Marker, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Tagged").field(&self.value).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PortTag;
    struct RetriesTag;
    type Port = Tagged<PortTag, u16>;
    type Retries = Tagged<RetriesTag, u16>;

    #[test]
    fn round_trip() {
        let p = Port::new(8080);
        assert_eq!(*p.get(), 8080);
        assert_eq!(p.into_inner(), 8080);
    }

    #[test]
    fn distinct_tags_over_same_primitive() {
        fn connect(port: Port, retries: Retries) -> (u16, u16) {
            (*port.get(), *retries.get())
        }
        assert_eq!(connect(Port::new(443), Retries::new(3)), (443, 3));
    }

    #[test]
    fn ordering_and_equality() {
        assert_eq!(Port::new(80), Port::new(80));
        assert!(Port::new(80) < Port::new(443));
    }

    #[test]
    fn copy_when_inner_is_copy() {
        let p = Port::new(22);
        let q = p;
        assert_eq!(p, q);
    }

    #[test]
    fn works_without_marker_bounds() {
        // The marker is never constructed, so it needs no derives at all.
        struct Opaque;
        let t: Tagged<Opaque, String> = Tagged::new("x".to_string());
        assert_eq!(t.get(), "x");
    }

    #[test]
    fn default_when_inner_has_default() {
        let p = Port::default();
        assert_eq!(*p.get(), 0);
    }
}
