mod enumeration;

use std::iter::FusedIterator;

pub use enumeration::{BoundedAction, DiscreteAction, Enumeration, Enumerator};

/// A finite, ordered set of actions with random access.
///
/// `size` is the distance between the first and the past-the-end action and
/// `action(i)` is the action found `i` steps after the first one. Callers keep
/// `index < size()`.
pub trait ActionSpace {
    type Action;

    fn size(&self) -> usize;

    fn action(&self, index: usize) -> Self::Action;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    fn actions(&self) -> Actions<'_, Self> {
        Actions {
            space: self,
            front: 0,
            back: self.size(),
        }
    }
}

/// Forward traversal over an [`ActionSpace`].
#[derive(Debug)]
pub struct Actions<'a, S: ?Sized> {
    space: &'a S,
    front: usize,
    back: usize,
}

impl<'a, S: ?Sized> Clone for Actions<'a, S> {
    fn clone(&self) -> Self {
        Self {
            space: self.space,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, S: ActionSpace + ?Sized> Iterator for Actions<'a, S> {
    type Item = S::Action;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let action = self.space.action(self.front);
        self.front += 1;
        Some(action)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl<'a, S: ActionSpace + ?Sized> DoubleEndedIterator for Actions<'a, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.space.action(self.back))
    }
}

impl<'a, S: ActionSpace + ?Sized> ExactSizeIterator for Actions<'a, S> {}

impl<'a, S: ActionSpace + ?Sized> FusedIterator for Actions<'a, S> {}

impl<T: Clone> ActionSpace for [T] {
    type Action = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn action(&self, index: usize) -> T {
        self[index].clone()
    }
}

impl<T: Clone, const N: usize> ActionSpace for [T; N] {
    type Action = T;

    fn size(&self) -> usize {
        N
    }

    fn action(&self, index: usize) -> T {
        self[index].clone()
    }
}

impl<T: Clone> ActionSpace for Vec<T> {
    type Action = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn action(&self, index: usize) -> T {
        self[index].clone()
    }
}

impl<S: ActionSpace + ?Sized> ActionSpace for &S {
    type Action = S::Action;

    fn size(&self) -> usize {
        (**self).size()
    }

    fn action(&self, index: usize) -> S::Action {
        (**self).action(index)
    }
}
