use std::cmp::Ordering;
use std::convert::Infallible;
use std::error::Error;
use std::fmt;

/// Strict-weak "less than" used by both engines.
///
/// Every comparison either answers or fails; a failure aborts the sort that
/// asked and is handed back to the caller unchanged.
pub trait Comparator<T: ?Sized> {
    type Error;

    fn is_less(&mut self, a: &T, b: &T) -> Result<bool, Self::Error>;

    /// `a <= b`, derived as `!(b < a)`.
    #[inline]
    fn is_less_or_equal(&mut self, a: &T, b: &T) -> Result<bool, Self::Error> {
        self.is_less(b, a).map(|less| !less)
    }
}

impl<T: ?Sized, C: Comparator<T> + ?Sized> Comparator<T> for &mut C {
    type Error = C::Error;

    #[inline]
    fn is_less(&mut self, a: &T, b: &T) -> Result<bool, Self::Error> {
        (**self).is_less(a, b)
    }
}

/// The key type's own [`Ord`].
#[derive(Clone, Copy, Debug, Default)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    type Error = Infallible;

    #[inline]
    fn is_less(&mut self, a: &T, b: &T) -> Result<bool, Infallible> {
        Ok(a < b)
    }
}

/// [`PartialOrd`] keys; an unordered pair fails with [`Incomparable`].
#[derive(Clone, Copy, Debug, Default)]
pub struct PartialOrder;

impl<T: PartialOrd + ?Sized> Comparator<T> for PartialOrder {
    type Error = Incomparable;

    #[inline]
    fn is_less(&mut self, a: &T, b: &T) -> Result<bool, Incomparable> {
        a.partial_cmp(b)
            .map(|ord| ord == Ordering::Less)
            .ok_or(Incomparable)
    }
}

/// A three-way comparison closure that cannot fail.
pub struct OrderBy<F>(pub F);

impl<T: ?Sized, F> Comparator<T> for OrderBy<F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    type Error = Infallible;

    #[inline]
    fn is_less(&mut self, a: &T, b: &T) -> Result<bool, Infallible> {
        Ok((self.0)(a, b) == Ordering::Less)
    }
}

/// A three-way comparison closure that may fail with `E`.
pub struct TryOrderBy<F>(pub F);

impl<T: ?Sized, E, F> Comparator<T> for TryOrderBy<F>
where
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    type Error = E;

    #[inline]
    fn is_less(&mut self, a: &T, b: &T) -> Result<bool, E> {
        (self.0)(a, b).map(|ord| ord == Ordering::Less)
    }
}

/// Two keys had no defined order (for example a float `NaN`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Incomparable;

impl fmt::Display for Incomparable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("encountered a pair of keys with no defined order")
    }
}

impl Error for Incomparable {}
