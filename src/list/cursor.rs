use tracing::debug;

use crate::list::position::Position;
use crate::list::List;
use crate::ListError;

// private methods
impl<T> List<T> {
    fn current_node(&self) -> Result<usize, ListError> {
        self.cursor.ok_or_else(|| {
            debug!("no current element");
            ListError::Empty
        })
    }
}

/// Navigation of the list's cursor.
///
/// The cursor is the list's single "current" node. The moving operations
/// report whether they moved, and the reading operations fail with
/// [`ListError::Empty`] instead of touching a missing node.
///
/// # Examples
///
/// Walking the whole list forward and backward:
/// ```
/// use cursor_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
///
/// let mut forward = Vec::new();
/// list.go_to_begin();
/// loop {
///     forward.push(*list.get().unwrap());
///     if !list.go_next().unwrap() {
///         break;
///     }
/// }
/// assert_eq!(forward, vec![1, 2, 3]);
///
/// let mut backward = Vec::new();
/// list.go_to_end();
/// loop {
///     backward.push(*list.get().unwrap());
///     if !list.go_prev().unwrap() {
///         break;
///     }
/// }
/// assert_eq!(backward, vec![3, 2, 1]);
/// ```
impl<T> List<T> {
    /// Moves the cursor to the next node, if there is one.
    ///
    /// Returns `Ok(true)` if the cursor moved and `Ok(false)` if it was
    /// already on the last node, in which case it stays where it is.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Empty`] if the list is empty.
    pub fn go_next(&mut self) -> Result<bool, ListError> {
        let current = self.current_node()?;
        match self.node(current).next {
            Some(next) => {
                self.cursor = Some(next);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Moves the cursor to the previous node, if there is one.
    ///
    /// Returns `Ok(true)` if the cursor moved and `Ok(false)` if it was
    /// already on the first node, in which case it stays where it is.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Empty`] if the list is empty.
    pub fn go_prev(&mut self) -> Result<bool, ListError> {
        let current = self.current_node()?;
        match self.node(current).prev {
            Some(prev) => {
                self.cursor = Some(prev);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Moves the cursor to the first node. Does nothing on an empty list.
    #[inline]
    pub fn go_to_begin(&mut self) {
        self.cursor = self.head;
    }

    /// Moves the cursor to the last node. Does nothing on an empty list.
    #[inline]
    pub fn go_to_end(&mut self) {
        self.cursor = self.tail;
    }

    /// Provides a reference to the element under the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Empty`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::{List, ListError};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.get(), Err(ListError::Empty));
    /// list.add_after('a');
    /// assert_eq!(list.get(), Ok(&'a'));
    /// ```
    pub fn get(&self) -> Result<&T, ListError> {
        let current = self.current_node()?;
        Ok(&self.node(current).element)
    }

    /// Provides a mutable reference to the element under the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Empty`] if the list is empty.
    pub fn get_mut(&mut self) -> Result<&mut T, ListError> {
        let current = self.current_node()?;
        Ok(&mut self.node_mut(current).element)
    }

    /// Moves the cursor onto the node at `pos`.
    ///
    /// The end position is accepted on an empty list, where it is the only
    /// position and nothing changes.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::StalePosition`] if the node at `pos` has been
    /// deleted, and [`ListError::EndOfList`] for the end position of a
    /// non-empty list. The cursor does not move in either case.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let second = list.advance(list.begin()).unwrap();
    /// list.set_cursor(second).unwrap();
    /// assert_eq!(list.get(), Ok(&2));
    /// ```
    pub fn set_cursor(&mut self, pos: Position) -> Result<(), ListError> {
        match self.resolve(pos)? {
            Some(key) => {
                self.cursor = Some(key);
                Ok(())
            }
            None if self.is_empty() => Ok(()),
            None => {
                debug!("cursor cannot rest on the end position");
                Err(ListError::EndOfList)
            }
        }
    }
}
