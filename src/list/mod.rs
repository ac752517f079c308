use std::fmt::{Debug, Formatter};

use slab::Slab;
use tracing::trace;

use crate::list::position::Position;
use crate::ListError;

pub mod iterator;
pub mod position;

mod algorithms;
mod cursor;

/// The `List` is a doubly-linked list with a single movable cursor.
///
/// Nodes live in an arena and are linked by their keys. The forward link of a
/// node is the edge that keeps the next node in the chain; the backward link
/// is only a lookup field and is rewritten whenever its neighbours change.
///
/// The list owns exactly one cursor. Most editing operations are relative to
/// it: [`add_after`], [`add_before`] and [`delete_current`] work next to the
/// current node and leave the cursor on a well-defined node afterwards.
///
/// The `List` contains:
/// - the node arena `nodes`;
/// - the keys of the first node `head`, the last node `tail` and the current
///   node `cursor`, which are all `None` exactly when the list is empty;
/// - the stamp handed to the next inserted node, used to tell a live node
///   from a reused arena slot when a [`Position`] is resolved.
///
/// [`add_after`]: List::add_after
/// [`add_before`]: List::add_before
/// [`delete_current`]: List::delete_current
pub struct List<T> {
    nodes: Slab<Node<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    cursor: Option<usize>,
    next_stamp: u64,
}

pub(crate) struct Node<T> {
    pub(crate) next: Option<usize>,
    pub(crate) prev: Option<usize>,
    pub(crate) stamp: u64,
    pub(crate) element: T,
}

// private methods
impl<T> List<T> {
    /// Provides the node behind `key`.
    ///
    /// Only keys read from `head`, `tail`, `cursor` or another node's links
    /// may be passed here; those always name an occupied slot.
    fn node(&self, key: usize) -> &Node<T> {
        &self.nodes[key]
    }

    fn node_mut(&mut self, key: usize) -> &mut Node<T> {
        &mut self.nodes[key]
    }

    /// Make `prev` and `next` adjacent. A missing `prev` means `next` becomes
    /// the head, a missing `next` means `prev` becomes the tail.
    fn connect(&mut self, prev: Option<usize>, next: Option<usize>) {
        match prev {
            Some(prev) => self.node_mut(prev).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.node_mut(next).prev = prev,
            None => self.tail = prev,
        }
    }

    /// Create a node holding `element` between the adjacent `prev` and `next`,
    /// and return its key. The cursor is not touched.
    fn attach_node(&mut self, prev: Option<usize>, next: Option<usize>, element: T) -> usize {
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);
        let stamp = self.next_stamp;
        self.next_stamp += 1;
        let key = self.nodes.insert(Node {
            next,
            prev,
            stamp,
            element,
        });
        self.connect(prev, Some(key));
        self.connect(Some(key), next);
        trace!(key, stamp, ?prev, ?next, "attached node");
        #[cfg(debug_assertions)]
        {
            self.assert_adjacent(prev, Some(key));
            self.assert_adjacent(Some(key), next);
        }
        key
    }

    /// Splice the node `key` out of the chain and return it. Its former
    /// neighbours become adjacent. The cursor is not touched.
    fn detach_node(&mut self, key: usize) -> Node<T> {
        let node = self.nodes.remove(key);
        self.connect(node.prev, node.next);
        trace!(key, stamp = node.stamp, prev = ?node.prev, next = ?node.next, "detached node");
        #[cfg(debug_assertions)]
        self.assert_adjacent(node.prev, node.next);
        node
    }

    #[cfg(debug_assertions)]
    fn assert_adjacent(&self, prev: Option<usize>, next: Option<usize>) {
        match prev {
            Some(prev) => assert_eq!(self.node(prev).next, next),
            None => assert_eq!(self.head, next),
        }
        match next {
            Some(next) => assert_eq!(self.node(next).prev, prev),
            None => assert_eq!(self.tail, prev),
        }
    }
}

impl<T> List<T> {
    /// Create an empty `List`.
    ///
    /// # Examples
    /// ```
    /// use cursor_list::List;
    /// let list: List<u32> = List::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: None,
            tail: None,
            cursor: None,
            next_stamp: 0,
        }
    }

    /// Returns `true` if the `List` is empty, i.e. there is no current node.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cursor.is_none()
    }

    /// Returns the number of elements in the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// list.add_after(1);
    /// list.add_after(2);
    /// assert_eq!(list.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Inserts `element` right after the cursor and moves the cursor onto it.
    ///
    /// In an empty list the element becomes the only node. If the cursor was
    /// on the last node, the new node becomes the last one.
    ///
    /// Returns the position of the new node.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) amortised time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// list.add_after(1);
    /// list.add_after(3);
    /// list.go_to_begin();
    /// list.add_after(2);
    /// assert_eq!(list.get(), Ok(&2));
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    pub fn add_after(&mut self, element: T) -> Position {
        let key = match self.cursor {
            None => self.attach_node(None, None, element),
            Some(current) => {
                let next = self.node(current).next;
                self.attach_node(Some(current), next, element)
            }
        };
        self.cursor = Some(key);
        self.position_of(key)
    }

    /// Inserts `element` right before the cursor and moves the cursor onto it.
    ///
    /// In an empty list the element becomes the only node. If the cursor was
    /// on the first node, the new node becomes the first one.
    ///
    /// Returns the position of the new node.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// list.add_before(3);
    /// list.add_before(1);
    /// list.go_to_end();
    /// list.add_before(2);
    /// assert_eq!(list.get(), Ok(&2));
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    pub fn add_before(&mut self, element: T) -> Position {
        let key = match self.cursor {
            None => self.attach_node(None, None, element),
            Some(current) => {
                let prev = self.node(current).prev;
                self.attach_node(prev, Some(current), element)
            }
        };
        self.cursor = Some(key);
        self.position_of(key)
    }

    /// Removes the current node and returns its element, or `None` if the
    /// list is empty.
    ///
    /// The nodes around the removed one become adjacent. The cursor moves to
    /// the former successor; only when there is none does it move to the
    /// former predecessor. Removing the only node empties the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// list.go_to_begin();
    /// list.go_next().unwrap();
    /// assert_eq!(list.delete_current(), Some(2));
    /// assert_eq!(list.get(), Ok(&3)); // moved to the successor
    /// assert_eq!(list.delete_current(), Some(3));
    /// assert_eq!(list.get(), Ok(&1)); // no successor, so the predecessor
    /// assert_eq!(list.delete_current(), Some(1));
    /// assert!(list.is_empty());
    /// assert_eq!(list.delete_current(), None);
    /// ```
    pub fn delete_current(&mut self) -> Option<T> {
        let current = self.cursor?;
        let node = self.detach_node(current);
        self.cursor = node.next.or(node.prev);
        Some(node.element)
    }

    /// Removes all elements from the `List` by deleting the current node
    /// until the list is empty.
    ///
    /// Elements are dropped in the order the cursor visits them: from the
    /// cursor to the back, then from the node before the cursor to the front.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// list.clear();
    /// assert!(list.is_empty());
    /// list.clear();
    /// assert!(list.is_empty());
    /// ```
    pub fn clear(&mut self) {
        while self.delete_current().is_some() {}
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.head.map(|key| &self.node(key).element)
    }

    /// Provides a mutable reference to the front element, or `None` if the
    /// list is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let key = self.head?;
        Some(&mut self.node_mut(key).element)
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|key| &self.node(key).element)
    }

    /// Provides a mutable reference to the back element, or `None` if the
    /// list is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let key = self.tail?;
        Some(&mut self.node_mut(key).element)
    }

    /// Adds an element first in the list.
    ///
    /// The cursor is moved to the front and the element is added before it,
    /// so afterwards the cursor is on the new element.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// assert_eq!(list.get(), Ok(&1));
    /// ```
    pub fn push_front(&mut self, element: T) -> Position {
        self.cursor = self.head;
        self.add_before(element)
    }

    /// Appends an element to the back of the list.
    ///
    /// The cursor is moved to the back and the element is added after it,
    /// so afterwards the cursor is on the new element.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(2);
    /// assert_eq!(list.back(), Some(&2));
    /// assert_eq!(list.get(), Ok(&2));
    /// ```
    pub fn push_back(&mut self, element: T) -> Position {
        self.cursor = self.tail;
        self.add_after(element)
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty. The cursor ends on the new front.
    pub fn pop_front(&mut self) -> Option<T> {
        self.cursor = self.head;
        self.delete_current()
    }

    /// Removes the last element and returns it, or `None` if the list is
    /// empty. The cursor ends on the new back.
    pub fn pop_back(&mut self) -> Option<T> {
        self.cursor = self.tail;
        self.delete_current()
    }

    /// Inserts `element` right before the node at `pos` and returns the
    /// position of the new node.
    ///
    /// The cursor is moved to `pos` and then [`add_before`] runs, so the
    /// cursor ends on the new node whatever it pointed at before. Inserting
    /// before the end position appends the element at the back.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::StalePosition`] if the node at `pos` has been
    /// deleted. The list is unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 3]);
    /// let three = list.advance(list.begin()).unwrap();
    /// list.insert(three, 2).unwrap();
    /// list.insert(list.end(), 4).unwrap();
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    /// ```
    ///
    /// [`add_before`]: List::add_before
    pub fn insert(&mut self, pos: Position, element: T) -> Result<Position, ListError> {
        match self.resolve(pos)? {
            Some(key) => {
                self.cursor = Some(key);
                Ok(self.add_before(element))
            }
            None => Ok(self.push_back(element)),
        }
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use crate::list::List;
    use std::cell::RefCell;
    use std::iter::FromIterator;

    fn assert_linked<T>(list: &List<T>) {
        let mut forward = Vec::new();
        let mut key = list.head;
        while let Some(k) = key {
            forward.push(k);
            key = list.node(k).next;
        }
        let mut backward = Vec::new();
        let mut key = list.tail;
        while let Some(k) = key {
            backward.push(k);
            key = list.node(k).prev;
        }
        backward.reverse();
        assert_eq!(forward, backward);
        assert_eq!(forward.len(), list.len());
        assert_eq!(list.head.is_none(), list.cursor.is_none());
        assert_eq!(list.tail.is_none(), list.cursor.is_none());
    }

    fn contents<T: Clone>(list: &List<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        list.add_after(1);
        assert!(!list.is_empty());
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.back(), Some(&1));
        assert_eq!(list.get(), Ok(&1));
        assert_eq!(list.delete_current(), Some(1));
        assert!(list.is_empty());
        assert_linked(&list);
    }

    #[test]
    fn list_drop() {
        #[derive(Debug)]
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy> DropChecker<'a, T> {
            fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
                Self { value, dropped }
            }
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }

        // The cursor is on the back, so deletion walks towards the front.
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        list.add_after(DropChecker::new(1, &dropped));
        list.add_after(DropChecker::new(2, &dropped));
        list.add_after(DropChecker::new(3, &dropped));
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[3, 2, 1]);

        // From the middle: successors first, then predecessors.
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        for value in 1..=5 {
            list.add_after(DropChecker::new(value, &dropped));
        }
        list.go_to_begin();
        list.go_next().unwrap();
        list.go_next().unwrap();
        list.clear();
        assert_eq!(dropped.borrow().as_slice(), &[3, 4, 5, 2, 1]);
        assert!(list.is_empty());
    }

    #[test]
    fn list_add_after_moves_cursor_and_tail() {
        let mut list = List::new();
        list.add_after(1);
        list.add_after(3);
        assert_eq!(list.back(), Some(&3));
        list.go_to_begin();
        list.add_after(2);
        assert_eq!(list.get(), Ok(&2));
        assert_eq!(list.back(), Some(&3));
        assert_eq!(contents(&list), vec![1, 2, 3]);
        list.go_to_end();
        list.add_after(4);
        assert_eq!(list.back(), Some(&4));
        assert_eq!(list.get(), Ok(&4));
        assert_linked(&list);
    }

    #[test]
    fn list_add_before_moves_cursor_and_head() {
        let mut list = List::new();
        list.add_before(3);
        list.add_before(1);
        assert_eq!(list.front(), Some(&1));
        list.go_to_end();
        list.add_before(2);
        assert_eq!(list.get(), Ok(&2));
        assert_eq!(list.front(), Some(&1));
        assert_eq!(contents(&list), vec![1, 2, 3]);
        list.go_to_begin();
        list.add_before(0);
        assert_eq!(list.front(), Some(&0));
        assert_eq!(list.get(), Ok(&0));
        assert_linked(&list);
    }

    #[test]
    fn list_delete_middle() {
        let mut list = List::from_iter([1, 2, 3, 4, 5]);
        list.go_to_begin();
        list.go_next().unwrap();
        list.go_next().unwrap();
        assert_eq!(list.delete_current(), Some(3));
        // The cursor continues with the former successor.
        assert_eq!(list.get(), Ok(&4));
        assert_eq!(list.go_prev(), Ok(true));
        assert_eq!(list.get(), Ok(&2));
        assert_eq!(list.go_next(), Ok(true));
        assert_eq!(list.get(), Ok(&4));
        assert_eq!(contents(&list), vec![1, 2, 4, 5]);
        assert_linked(&list);
    }

    #[test]
    fn list_delete_tail_and_head() {
        let mut list = List::from_iter([1, 2, 3]);
        list.go_to_end();
        assert_eq!(list.delete_current(), Some(3));
        assert_eq!(list.get(), Ok(&2));
        assert_eq!(list.back(), Some(&2));
        assert_eq!(list.go_next(), Ok(false));

        list.go_to_begin();
        assert_eq!(list.delete_current(), Some(1));
        assert_eq!(list.get(), Ok(&2));
        assert_eq!(list.front(), Some(&2));
        assert_eq!(list.go_prev(), Ok(false));

        assert_eq!(list.delete_current(), Some(2));
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.delete_current(), None);
        assert_linked(&list);
    }

    #[test]
    fn list_clear_is_idempotent() {
        let mut list = List::from_iter(0..10);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        list.clear();
        assert!(list.is_empty());
        list.add_after(7);
        assert_eq!(contents(&list), vec![7]);
        assert_linked(&list);
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = List::new();
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);

        list.push_back(2);
        list.push_front(1);
        list.push_back(3);
        assert_eq!(list.get(), Ok(&3));
        assert_eq!(contents(&list), vec![1, 2, 3]);

        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.get(), Ok(&2));
        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.get(), Ok(&2));
        assert_eq!(list.pop_back(), Some(2));
        assert!(list.is_empty());
        assert_linked(&list);
    }

    #[test]
    fn list_front_and_back_mut() {
        let mut list = List::from_iter([1, 2, 3]);
        if let Some(x) = list.front_mut() {
            *x = 10;
        }
        if let Some(x) = list.back_mut() {
            *x = 30;
        }
        assert_eq!(contents(&list), vec![10, 2, 30]);
        list.clear();
        assert_eq!(list.front_mut(), None);
        assert_eq!(list.back_mut(), None);
    }

    #[test]
    fn list_insert_displaces_cursor() {
        let mut list = List::from_iter([1, 2, 4]);
        list.go_to_begin();
        let four = list.advance(list.advance(list.begin()).unwrap()).unwrap();
        let three = list.insert(four, 3).unwrap();
        assert_eq!(list.get(), Ok(&3));
        assert_eq!(list.cursor(), three);
        assert_eq!(contents(&list), vec![1, 2, 3, 4]);

        list.insert(list.end(), 5).unwrap();
        assert_eq!(list.get(), Ok(&5));
        assert_eq!(contents(&list), vec![1, 2, 3, 4, 5]);
        assert_linked(&list);
    }

    #[test]
    fn list_insert_into_empty() {
        let mut list = List::new();
        let pos = list.insert(list.end(), 1).unwrap();
        assert_eq!(list.begin(), pos);
        assert_eq!(contents(&list), vec![1]);
    }
}
