use crate::list::List;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Lists are equal when they hold equal elements in the same order. Where
/// their cursors rest does not matter.
impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

/// The clone has its cursor on the element at the same index.
impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        let mut list: List<T> = self.iter().cloned().collect();
        list.cursor = list.head;
        for _ in 0..self.cursor_index().unwrap_or(0) {
            if let Some(key) = list.cursor {
                list.cursor = list.node(key).next;
            }
        }
        list
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

impl<T> List<T> {
    /// Index of the cursor counted from the front, or `None` if the list is
    /// empty.
    fn cursor_index(&self) -> Option<usize> {
        let cursor = self.cursor?;
        let mut index = 0;
        let mut key = self.head;
        while let Some(k) = key {
            if k == cursor {
                return Some(index);
            }
            index += 1;
            key = self.node(k).next;
        }
        None
    }

    /// Returns `true` if the `List` contains an element equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }
}
