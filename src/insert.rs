//! Insertion adapters.
//!
//! An adapter wraps a container and a target spot. Each call to `assign`
//! inserts one value there, so code that pushes values one at a time can fill
//! a [`List`] or a standard sequence without knowing which one it has.
//!
//! - [`Inserter`] inserts before an anchor position;
//! - [`FrontInserter`] inserts at the front;
//! - [`BackInserter`] inserts at the back.
//!
//! The containers opt in through [`InsertBefore`], [`PushFront`] and
//! [`PushBack`]. They are implemented for [`List`], `Vec`, `VecDeque`, and
//! (front and back only) `LinkedList`.
//!
//! # Examples
//!
//! ```
//! use cursor_list::insert::{back_inserter, front_inserter};
//! use cursor_list::List;
//! use std::collections::VecDeque;
//!
//! let mut list: List<i32> = List::new();
//! let mut deque: VecDeque<i32> = VecDeque::new();
//! for x in 1..=5 {
//!     front_inserter(&mut list).assign(x);
//!     back_inserter(&mut deque).assign(x);
//! }
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![5, 4, 3, 2, 1]);
//! assert_eq!(Vec::from(deque), vec![1, 2, 3, 4, 5]);
//! ```

use std::collections::{LinkedList, VecDeque};
use std::fmt::Debug;

use crate::{List, ListError, Position};

/// A sequence that can insert a value before a position.
pub trait InsertBefore<T> {
    /// A handle to a spot in the sequence.
    type Position: Copy;
    /// Reported when a position cannot be used.
    type Error;

    /// The position of the first element, or the end position if the
    /// sequence is empty.
    fn front_position(&self) -> Self::Position;

    /// Inserts `item` right before `pos`.
    ///
    /// Returns the position that designates the element `pos` designated
    /// before the call, so a sequence of insertions at the returned position
    /// keeps the inserted values in order.
    fn insert_before(&mut self, pos: Self::Position, item: T)
        -> Result<Self::Position, Self::Error>;
}

/// A sequence that can add a value at its front.
pub trait PushFront<T> {
    fn push_front(&mut self, item: T);
}

/// A sequence that can add a value at its back.
pub trait PushBack<T> {
    fn push_back(&mut self, item: T);
}

/// Inserts each assigned value before an anchor position.
///
/// On a [`List`], every assignment moves the list's cursor to the anchor and
/// adds the value before it, so afterwards **the cursor is on the new value**,
/// wherever it was before. The anchor keeps naming the same node, so repeated
/// assignments keep the values in order.
///
/// # Examples
///
/// ```
/// use cursor_list::insert::Inserter;
/// use cursor_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 5]);
/// let anchor = list.advance(list.begin()).unwrap();
/// let mut inserter = Inserter::new(&mut list, anchor);
/// inserter.extend(2..=4);
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
/// assert_eq!(list.get(), Ok(&4));
/// ```
pub struct Inserter<'a, C: ?Sized, P> {
    container: &'a mut C,
    anchor: P,
}

impl<'a, C: ?Sized, P: Copy> Inserter<'a, C, P> {
    pub fn new(container: &'a mut C, anchor: P) -> Self {
        Self { container, anchor }
    }

    /// The position the next value will be inserted before.
    pub fn anchor(&self) -> P {
        self.anchor
    }

    /// Inserts `item` before the anchor.
    ///
    /// # Errors
    ///
    /// Forwards the container's error when the anchor cannot be used, for
    /// example [`ListError::StalePosition`] once the anchored node of a
    /// [`List`] has been deleted. Nothing is inserted in that case.
    pub fn assign<T>(&mut self, item: T) -> Result<(), C::Error>
    where
        C: InsertBefore<T, Position = P>,
    {
        self.anchor = self.container.insert_before(self.anchor, item)?;
        Ok(())
    }
}

/// # Panics
///
/// Panics if the anchor cannot be used, like `Vec::insert` does for an index
/// past the end.
impl<'a, C, P, T> Extend<T> for Inserter<'a, C, P>
where
    C: InsertBefore<T, Position = P> + ?Sized,
    C::Error: Debug,
    P: Copy,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            if let Err(e) = self.assign(item) {
                panic!("cannot insert before the anchor: {:?}", e);
            }
        }
    }
}

/// Inserts each assigned value at the front of the container.
///
/// On a [`List`] the cursor moves to the front and the value is added before
/// it, leaving the cursor on the new value.
pub struct FrontInserter<'a, C: ?Sized> {
    container: &'a mut C,
}

impl<'a, C: ?Sized> FrontInserter<'a, C> {
    pub fn new(container: &'a mut C) -> Self {
        Self { container }
    }

    pub fn assign<T>(&mut self, item: T)
    where
        C: PushFront<T>,
    {
        self.container.push_front(item);
    }
}

impl<'a, C: PushFront<T> + ?Sized, T> Extend<T> for FrontInserter<'a, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.assign(item));
    }
}

/// Inserts each assigned value at the back of the container.
///
/// On a [`List`] the cursor moves to the back and the value is added after
/// it, leaving the cursor on the new value.
pub struct BackInserter<'a, C: ?Sized> {
    container: &'a mut C,
}

impl<'a, C: ?Sized> BackInserter<'a, C> {
    pub fn new(container: &'a mut C) -> Self {
        Self { container }
    }

    pub fn assign<T>(&mut self, item: T)
    where
        C: PushBack<T>,
    {
        self.container.push_back(item);
    }
}

impl<'a, C: PushBack<T> + ?Sized, T> Extend<T> for BackInserter<'a, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.assign(item));
    }
}

/// Creates an [`Inserter`] anchored at `anchor`.
pub fn inserter<C: ?Sized, P: Copy>(container: &mut C, anchor: P) -> Inserter<'_, C, P> {
    Inserter::new(container, anchor)
}

/// Creates a [`FrontInserter`].
pub fn front_inserter<C: ?Sized>(container: &mut C) -> FrontInserter<'_, C> {
    FrontInserter::new(container)
}

/// Creates a [`BackInserter`].
pub fn back_inserter<C: ?Sized>(container: &mut C) -> BackInserter<'_, C> {
    BackInserter::new(container)
}

impl<T> InsertBefore<T> for List<T> {
    type Position = Position;
    type Error = ListError;

    fn front_position(&self) -> Position {
        self.begin()
    }

    fn insert_before(&mut self, pos: Position, item: T) -> Result<Position, ListError> {
        self.insert(pos, item)?;
        Ok(pos)
    }
}

impl<T> PushFront<T> for List<T> {
    fn push_front(&mut self, item: T) {
        List::push_front(self, item);
    }
}

impl<T> PushBack<T> for List<T> {
    fn push_back(&mut self, item: T) {
        List::push_back(self, item);
    }
}

fn check_index(index: usize, len: usize) -> Result<(), ListError> {
    if index > len {
        return Err(ListError::IndexOutOfBounds { index, len });
    }
    Ok(())
}

impl<T> InsertBefore<T> for Vec<T> {
    type Position = usize;
    type Error = ListError;

    fn front_position(&self) -> usize {
        0
    }

    fn insert_before(&mut self, index: usize, item: T) -> Result<usize, ListError> {
        check_index(index, self.len())?;
        self.insert(index, item);
        Ok(index + 1)
    }
}

impl<T> PushFront<T> for Vec<T> {
    fn push_front(&mut self, item: T) {
        self.insert(0, item);
    }
}

impl<T> PushBack<T> for Vec<T> {
    fn push_back(&mut self, item: T) {
        self.push(item);
    }
}

impl<T> InsertBefore<T> for VecDeque<T> {
    type Position = usize;
    type Error = ListError;

    fn front_position(&self) -> usize {
        0
    }

    fn insert_before(&mut self, index: usize, item: T) -> Result<usize, ListError> {
        check_index(index, self.len())?;
        self.insert(index, item);
        Ok(index + 1)
    }
}

impl<T> PushFront<T> for VecDeque<T> {
    fn push_front(&mut self, item: T) {
        VecDeque::push_front(self, item);
    }
}

impl<T> PushBack<T> for VecDeque<T> {
    fn push_back(&mut self, item: T) {
        VecDeque::push_back(self, item);
    }
}

impl<T> PushFront<T> for LinkedList<T> {
    fn push_front(&mut self, item: T) {
        LinkedList::push_front(self, item);
    }
}

impl<T> PushBack<T> for LinkedList<T> {
    fn push_back(&mut self, item: T) {
        LinkedList::push_back(self, item);
    }
}
