use tracing::debug;

use crate::list::List;
use crate::ListError;

/// A forward iterator over a [`List`] that does not borrow it.
///
/// A `Position` names one node of a list, or the end position one past the
/// last node. It is a plain handle: moving it forward and reading through it
/// go through the list ([`List::advance`], [`List::at`], [`List::at_mut`]),
/// so it can be kept while the list is edited.
///
/// A position stays valid while its node is in the list, no matter how the
/// cursor moves or what is inserted around it. Once the node is deleted, the
/// position is *stale* and every use reports [`ListError::StalePosition`],
/// even if the list later reuses the node's storage.
///
/// Positions compare equal when they name the same node, and all end
/// positions are equal. A position only has meaning for the list it came
/// from.
///
/// # Examples
///
/// ```
/// use cursor_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let mut pos = list.begin();
/// while pos != list.end() {
///     *list.at_mut(pos).unwrap() *= 10;
///     pos = list.advance(pos).unwrap();
/// }
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![10, 20, 30]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    node: Option<NodeRef>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct NodeRef {
    key: usize,
    stamp: u64,
}

impl Position {
    /// The end position, which has no element.
    pub const END: Position = Position { node: None };

    /// Returns `true` if this is the end position.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::END
    }
}

// private methods
impl<T> List<T> {
    pub(crate) fn position_of(&self, key: usize) -> Position {
        let stamp = self.node(key).stamp;
        Position {
            node: Some(NodeRef { key, stamp }),
        }
    }

    fn position_of_opt(&self, key: Option<usize>) -> Position {
        key.map_or(Position::END, |key| self.position_of(key))
    }

    /// Resolve `pos` to the key of a live node, or `None` for the end
    /// position.
    pub(crate) fn resolve(&self, pos: Position) -> Result<Option<usize>, ListError> {
        match pos.node {
            None => Ok(None),
            Some(NodeRef { key, stamp }) => match self.nodes.get(key) {
                Some(node) if node.stamp == stamp => Ok(Some(key)),
                _ => {
                    debug!(key, stamp, "stale position");
                    Err(ListError::StalePosition)
                }
            },
        }
    }

    fn resolve_element(&self, pos: Position) -> Result<usize, ListError> {
        self.resolve(pos)?.ok_or_else(|| {
            debug!("end position has no element");
            ListError::EndOfList
        })
    }
}

impl<T> List<T> {
    /// Provides the position of the first node, or the end position if the
    /// list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.begin(), list.end());
    /// list.add_after(1);
    /// assert_ne!(list.begin(), list.end());
    /// ```
    #[inline]
    pub fn begin(&self) -> Position {
        self.position_of_opt(self.head)
    }

    /// Provides the end position, one past the last node.
    #[inline]
    pub fn end(&self) -> Position {
        Position::END
    }

    /// Provides the position of the cursor, or the end position if the list
    /// is empty.
    #[inline]
    pub fn cursor(&self) -> Position {
        self.position_of_opt(self.cursor)
    }

    /// Returns the position following `pos`.
    ///
    /// The cursor of the list is not moved.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EndOfList`] if `pos` is the end position and
    /// [`ListError::StalePosition`] if its node has been deleted.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::{List, ListError};
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2]);
    /// let second = list.advance(list.begin()).unwrap();
    /// assert_eq!(list.at(second), Ok(&2));
    /// let end = list.advance(second).unwrap();
    /// assert_eq!(end, list.end());
    /// assert_eq!(list.advance(end), Err(ListError::EndOfList));
    /// ```
    pub fn advance(&self, pos: Position) -> Result<Position, ListError> {
        let key = self.resolve_element(pos)?;
        Ok(self.position_of_opt(self.node(key).next))
    }

    /// Provides a reference to the element at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EndOfList`] if `pos` is the end position and
    /// [`ListError::StalePosition`] if its node has been deleted.
    pub fn at(&self, pos: Position) -> Result<&T, ListError> {
        let key = self.resolve_element(pos)?;
        Ok(&self.node(key).element)
    }

    /// Provides a mutable reference to the element at `pos`.
    ///
    /// # Errors
    ///
    /// Same as [`List::at`].
    pub fn at_mut(&mut self, pos: Position) -> Result<&mut T, ListError> {
        let key = self.resolve_element(pos)?;
        Ok(&mut self.node_mut(key).element)
    }
}
