use super::{IntoIter, Iter, IterMut};
use crate::utils::*;

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            ring: self.ring,
            read: self.read,
            write: self.write,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.read == self.write {
            return None;
        }
        let read = self.read;
        self.read = wrap_add(self.read, 1, self.ring.len());
        Some(&self.ring[read])
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = count(self.read, self.write, self.ring.len());
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.read == self.write {
            return None;
        }
        self.write = wrap_sub(self.write, 1, self.ring.len());
        Some(&self.ring[self.write])
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        self.front.next().or_else(|| self.back.next())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.front.len() + self.back.len();
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        self.back.next_back().or_else(|| self.front.next_back())
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}

impl<A> Iterator for IntoIter<A>
where
    A: IntoIterator,
    A::IntoIter: DoubleEndedIterator + ExactSizeIterator,
{
    type Item = A::Item;

    #[inline]
    fn next(&mut self) -> Option<A::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<A> DoubleEndedIterator for IntoIter<A>
where
    A: IntoIterator,
    A::IntoIter: DoubleEndedIterator + ExactSizeIterator,
{
    #[inline]
    fn next_back(&mut self) -> Option<A::Item> {
        self.inner.next_back()
    }
}

impl<A> ExactSizeIterator for IntoIter<A>
where
    A: IntoIterator,
    A::IntoIter: DoubleEndedIterator + ExactSizeIterator,
{
}
