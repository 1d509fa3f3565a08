use crate::behavior::Circular;
use crate::ring::Ring;

/// A fixed capacity ring buffer.
///
/// `CircularArray<[T; N]>` holds up to `N - 1` elements and supports pushes
/// and pops at both ends. Popped elements are not dropped; they stay in their
/// slot until a later push overwrites them.
///
/// Cursor distances follow the [`Circular`] rule: one wrap check for the
/// whole ring, based on its state at the time of the query.
///
/// # Examples
///
/// ```
/// use inplace::CircularArray;
///
/// let mut ring: CircularArray<[i32; 5]> = CircularArray::new();
/// ring.push_back(0);
/// ring.push_back(1);
/// ring.push_back(2);
/// ring.push_back(3);
/// assert!(ring.is_full());
///
/// ring.pop_back();
/// assert_eq!(ring.len(), 3);
/// ring.push_back(4);
/// assert_eq!(*ring.back(), 4);
/// ```
pub type CircularArray<A> = Ring<A, Circular>;

#[cfg(test)]
mod tests {
    use super::CircularArray;
    use std::vec::Vec;

    #[test]
    fn ctor() {
        let default_ctor: CircularArray<[i32; 2]> = CircularArray::new();
        assert_eq!(default_ctor.len(), 0);
        assert_eq!(default_ctor.max_size(), 1);

        let collected: CircularArray<[i32; 6]> = [1, 2, 3].into_iter().collect();
        assert_eq!(*collected.front(), 1);
        assert_eq!(*collected.back(), 3);
        assert_eq!(collected.len(), 3);
        assert_eq!(collected.max_size(), 5);

        let exact: CircularArray<[i32; 4]> = [1, 2, 3].into_iter().collect();
        assert_eq!(exact.len(), 3);
        assert!(exact.is_full());
    }

    #[test]
    fn empty() {
        let mut c: CircularArray<[i32; 11]> = CircularArray::default();
        assert!(c.is_empty());
        c.push_back(42);
        assert!(!c.is_empty());
        c.pop_front();
        assert!(c.is_empty());
    }

    #[test]
    fn size() {
        let mut c: CircularArray<[i32; 11]> = CircularArray::new();
        assert_eq!(c.len(), 0);
        c.push_back(42);
        assert_eq!(c.len(), 1);
        c.pop_back();
        assert_eq!(c.len(), 0);
        c.push_front(43);
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn full() {
        let mut c: CircularArray<[i32; 5]> = CircularArray::new();
        assert!(c.is_empty());

        c.push_back(0);
        c.push_back(1);
        c.push_back(2);
        c.push_back(3);
        assert!(c.is_full());

        c.pop_back();
        assert!(!c.is_full());
        assert_eq!(c.len(), 3);

        c.push_back(4);
        assert_eq!(*c.back(), 4);
        assert!(c.is_full());

        assert!(c.try_push_back(42).is_err());
        assert_eq!(*c.back(), 4);
    }

    #[test]
    fn sort() {
        let mut values: CircularArray<[i32; 11]> =
            [2, 10, 4, 5, 1, 7, 8, 9, 3, 6].into_iter().collect();
        values.pop_front();
        values.push_back(2);
        values.make_contiguous().sort();
        let expected: CircularArray<[i32; 11]> = (1..=10).collect();
        assert_eq!(values, expected);
    }

    #[test]
    fn copies_are_independent() {
        let mut a: CircularArray<[i32; 4]> = [1, 2].into_iter().collect();
        let b = a;
        a.push_back(3);
        *a.front_mut() = 0;
        assert_eq!(b.iter().copied().collect::<Vec<_>>(), [1, 2]);
        assert_eq!(a.iter().copied().collect::<Vec<_>>(), [0, 2, 3]);
    }
}
