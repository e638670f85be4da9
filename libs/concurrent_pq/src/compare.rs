use std::cmp::Ordering;

/// Ranks two elements against each other.
///
/// [`Ordering::Greater`] corresponds to a higher rank, [`Ordering::Less`] to a lower one. The
/// element with the highest rank is the next one to be popped.
///
/// Implementations need to be a strict weak ordering. An inconsistent comparison does not
/// lose or duplicate elements, but the pop order becomes unspecified.
pub trait Compare<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Compare<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Largest element according to [`Ord`] is popped first.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxFirst;

impl<T: Ord + ?Sized> Compare<T> for MaxFirst {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Smallest element according to [`Ord`] is popped first.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinFirst;

impl<T: Ord + ?Sized> Compare<T> for MinFirst {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}
