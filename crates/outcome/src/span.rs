//! Ranged iteration over contiguous field-less enums.
//!
//! Replaces the C-style `for i in 0..N { let v = from(i); … }` loop with a
//! typed iterator. An enum opts in through the [`Contiguous`] trait —
//! usually via the [`impl_contiguous!`](crate::impl_contiguous) macro —
//! and then [`EnumSpan`] walks its variants in declaration order.
//!
//! The contract assumes the discriminants are contiguous (no gaps);
//! iteration over an enum with holes ends early at the first missing
//! discriminant.

use core::marker::PhantomData;

/// A field-less enum whose discriminants form a contiguous run.
///
/// Implement with [`impl_contiguous!`](crate::impl_contiguous):
///
/// ```
/// use outcome::{impl_contiguous, EnumSpan};
///
/// #[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// enum Level { Low, Mid, High }
/// impl_contiguous!(Level { Low, Mid, High });
///
/// let all: Vec<Level> = EnumSpan::all().collect();
/// assert_eq!(all, vec![Level::Low, Level::Mid, Level::High]);
/// ```
pub trait Contiguous: Copy {
    /// The first variant in declaration order.
    const FIRST: Self;
    /// The last variant in declaration order.
    const LAST: Self;

    /// The variant's discriminant.
    fn index(self) -> i64;

    /// The variant with the given discriminant, if one exists.
    fn from_index(index: i64) -> Option<Self>;
}

/// Double-ended iterator over an inclusive range of enum variants.
#[derive(Copy, Clone, Debug)]
pub struct EnumSpan<T> {
    front: i64,
    back: i64,
    done: bool,
    _marker: PhantomData<T>,
}

impl<T: Contiguous> EnumSpan<T> {
    /// Iterate every variant, `FIRST..=LAST`.
    pub fn all() -> Self {
        Self::between(T::FIRST, T::LAST)
    }

    /// Iterate an inclusive sub-range. Empty if `first` comes after `last`.
    pub fn between(first: T, last: T) -> Self {
        let front = first.index();
        let back = last.index();
        Self {
            front,
            back,
            done: front > back,
            _marker: PhantomData,
        }
    }
}

impl<T: Contiguous> Iterator for EnumSpan<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.done {
            return None;
        }
        let item = T::from_index(self.front);
        if self.front == self.back {
            self.done = true;
        } else {
            self.front += 1;
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let len = (self.back - self.front + 1) as usize;
        (len, Some(len))
    }
}

impl<T: Contiguous> DoubleEndedIterator for EnumSpan<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.done {
            return None;
        }
        let item = T::from_index(self.back);
        if self.front == self.back {
            self.done = true;
        } else {
            self.back -= 1;
        }
        item
    }
}

impl<T: Contiguous> ExactSizeIterator for EnumSpan<T> {}

/// Implement [`Contiguous`] for a field-less enum by listing its variants
/// in declaration order.
///
/// The enum must be `Copy` and carry no payloads. Discriminants are taken
/// from `as i64` casts, so explicit discriminant values work as long as
/// they stay contiguous.
#[macro_export]
macro_rules! impl_contiguous {
    ($ty:ident { $($variant:ident),+ $(,)? }) => {
        impl $crate::Contiguous for $ty {
            const FIRST: Self = $crate::impl_contiguous!(@first $ty; $($variant),+);
            const LAST: Self = $crate::impl_contiguous!(@last $ty; $($variant),+);

            fn index(self) -> i64 {
                self as i64
            }

            fn from_index(index: i64) -> ::core::option::Option<Self> {
                $(
                    if index == $ty::$variant as i64 {
                        return ::core::option::Option::Some($ty::$variant);
                    }
                )+
                ::core::option::Option::None
            }
        }
    };

    (@first $ty:ident; $first:ident $(, $rest:ident)*) => {
        $ty::$first
    };

    (@last $ty:ident; $only:ident) => {
        $ty::$only
    };
    (@last $ty:ident; $head:ident, $($rest:ident),+) => {
        $crate::impl_contiguous!(@last $ty; $($rest),+)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    enum Color {
        Red,
        Green,
        Blue,
    }
    impl_contiguous!(Color { Red, Green, Blue });

    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    enum Single {
        Only,
    }
    impl_contiguous!(Single { Only });

    #[test]
    fn all_visits_every_variant_in_order() {
        let seen: Vec<Color> = EnumSpan::all().collect();
        assert_eq!(seen, vec![Color::Red, Color::Green, Color::Blue]);
    }

    #[test]
    fn reversed_iteration() {
        let seen: Vec<Color> = EnumSpan::all().rev().collect();
        assert_eq!(seen, vec![Color::Blue, Color::Green, Color::Red]);
    }

    #[test]
    fn sub_range() {
        let seen: Vec<Color> = EnumSpan::between(Color::Green, Color::Blue).collect();
        assert_eq!(seen, vec![Color::Green, Color::Blue]);
    }

    #[test]
    fn inverted_range_is_empty() {
        let mut span = EnumSpan::between(Color::Blue, Color::Red);
        assert_eq!(span.next(), None);
    }

    #[test]
    fn single_variant_enum() {
        let seen: Vec<Single> = EnumSpan::all().collect();
        assert_eq!(seen, vec![Single::Only]);
    }

    #[test]
    fn exact_size() {
        assert_eq!(EnumSpan::<Color>::all().len(), 3);
        assert_eq!(EnumSpan::between(Color::Green, Color::Blue).len(), 2);
    }

    #[test]
    fn from_index_rejects_out_of_range() {
        assert_eq!(Color::from_index(-1), None);
        assert_eq!(Color::from_index(3), None);
        assert_eq!(Color::from_index(1), Some(Color::Green));
    }

    #[test]
    fn first_and_last_consts() {
        assert_eq!(Color::FIRST, Color::Red);
        assert_eq!(Color::LAST, Color::Blue);
    }
}
