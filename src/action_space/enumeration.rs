use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::{Hash, Hasher};
use std::iter::Map;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Range, Sub};

use super::ActionSpace;
use crate::error::EnumerationError;

/// An action type that maps one to one onto the integers `0..N`.
pub trait DiscreteAction: Sized {
    fn from_index(index: usize) -> Self;
    fn index(&self) -> usize;
}

/// A [`DiscreteAction`] whose values are exactly `0..COUNT`.
pub trait BoundedAction: DiscreteAction {
    const COUNT: usize;
}

macro_rules! discrete_integer {
    ($($t:ty),*) => {
        $(
            impl DiscreteAction for $t {
                #[inline(always)]
                fn from_index(index: usize) -> Self {
                    index as $t
                }

                #[inline(always)]
                fn index(&self) -> usize {
                    *self as usize
                }
            }
        )*
    };
}

discrete_integer!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl DiscreteAction for bool {
    fn from_index(index: usize) -> Self {
        index != 0
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl BoundedAction for bool {
    const COUNT: usize = 2;
}

/// A cursor over the integers that reads them as actions of type `T`.
///
/// Only the counter is stored, bounds live in the [`Enumeration`] that owns
/// the cursor. Backward moves are checked and never go below zero.
pub struct Enumerator<T> {
    index: usize,
    action: PhantomData<fn() -> T>,
}

impl<T> Enumerator<T> {
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            action: PhantomData,
        }
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    pub fn increment(&mut self) -> &mut Self {
        self.index += 1;
        self
    }

    pub fn decrement(&mut self) -> Result<&mut Self, EnumerationError> {
        *self = self.checked_sub(1)?;
        Ok(self)
    }

    /// The cursor `steps` positions back.
    pub fn checked_sub(&self, steps: usize) -> Result<Self, EnumerationError> {
        match self.index.checked_sub(steps) {
            Some(index) => Ok(Self::new(index)),
            None => Err(EnumerationError::BeforeStart {
                index: self.index,
                steps,
            }),
        }
    }

    /// Signed number of steps from `other` to `self`.
    pub fn distance(&self, other: &Self) -> isize {
        self.index as isize - other.index as isize
    }
}

impl<T: DiscreteAction> Enumerator<T> {
    #[inline(always)]
    pub fn get(&self) -> T {
        T::from_index(self.index)
    }
}

impl<T> Clone for Enumerator<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Enumerator<T> {}

impl<T> Default for Enumerator<T> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<T> Debug for Enumerator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Enumerator").field(&self.index).finish()
    }
}

impl<T> PartialEq for Enumerator<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T> Eq for Enumerator<T> {}

impl<T> PartialOrd for Enumerator<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Enumerator<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index.cmp(&other.index)
    }
}

impl<T> Hash for Enumerator<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

impl<T> From<usize> for Enumerator<T> {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl<T> Add<usize> for Enumerator<T> {
    type Output = Self;

    fn add(self, rhs: usize) -> Self {
        Self::new(self.index + rhs)
    }
}

impl<T> AddAssign<usize> for Enumerator<T> {
    fn add_assign(&mut self, rhs: usize) {
        self.index += rhs;
    }
}

impl<T> Sub for Enumerator<T> {
    type Output = isize;

    fn sub(self, rhs: Self) -> isize {
        self.distance(&rhs)
    }
}

/// The actions `begin, begin + 1, .., end - 1` of type `T`, produced on demand.
///
/// Nothing is allocated; iterating twice yields the same actions.
pub struct Enumeration<T> {
    begin: Enumerator<T>,
    end: Enumerator<T>,
}

impl<T> Enumeration<T> {
    pub fn new(begin: Enumerator<T>, end: Enumerator<T>) -> Result<Self, EnumerationError> {
        if begin > end {
            return Err(EnumerationError::ReversedBounds {
                begin: begin.index,
                end: end.index,
            });
        }
        Ok(Self { begin, end })
    }

    /// The first `count` actions.
    pub fn of(count: usize) -> Self {
        Self {
            begin: Enumerator::new(0),
            end: Enumerator::new(count),
        }
    }

    pub fn begin(&self) -> Enumerator<T> {
        self.begin
    }

    pub fn end(&self) -> Enumerator<T> {
        self.end
    }
}

impl<T: BoundedAction> Enumeration<T> {
    /// Every value of `T`.
    pub fn all() -> Self {
        Self::of(T::COUNT)
    }
}

impl<T> Clone for Enumeration<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Enumeration<T> {}

impl<T> Debug for Enumeration<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Enumeration")
            .field("begin", &self.begin.index)
            .field("end", &self.end.index)
            .finish()
    }
}

impl<T> PartialEq for Enumeration<T> {
    fn eq(&self, other: &Self) -> bool {
        self.begin == other.begin && self.end == other.end
    }
}

impl<T> Eq for Enumeration<T> {}

impl<T: DiscreteAction> ActionSpace for Enumeration<T> {
    type Action = T;

    fn size(&self) -> usize {
        (self.end - self.begin) as usize
    }

    fn action(&self, index: usize) -> T {
        (self.begin + index).get()
    }
}

impl<T: DiscreteAction> IntoIterator for Enumeration<T> {
    type Item = T;
    type IntoIter = Map<Range<usize>, fn(usize) -> T>;

    fn into_iter(self) -> Self::IntoIter {
        (self.begin.index..self.end.index).map(T::from_index as fn(usize) -> T)
    }
}
