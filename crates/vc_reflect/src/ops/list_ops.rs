use alloc::boxed::Box;

use crate::Reflect;

// -----------------------------------------------------------------------------
// List

/// A trait for variable-length ordered sequences, such as `Vec<T>`.
///
/// Besides access, a list can allocate a default-initialized item of its
/// element type through [`List::new_item`], so that callers can populate an
/// element in full before inserting it.
///
/// # Examples
///
/// ```
/// use vc_reflect::{Reflect, ops::List};
///
/// let mut list: Vec<u32> = vec![1, 2];
///
/// let mut item = List::new_item(&list);
/// item.try_apply(&3_u32).unwrap();
/// List::try_push(&mut list, item).unwrap();
///
/// assert_eq!(list, [1, 2, 3]);
/// ```
pub trait List: Reflect {
    /// Returns a reference to the element at `index`, or `None` if out of bounds.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns a mutable reference to the element at `index`, or `None` if out of bounds.
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Appends an element, returning it back if its type is not the element type.
    fn try_push(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Removes the last element and returns it, or `None` if empty.
    fn pop(&mut self) -> Option<Box<dyn Reflect>>;

    /// Removes every element.
    fn clear(&mut self);

    /// Returns the number of elements.
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the elements.
    fn iter(&self) -> ListItemIter<'_>;

    /// Allocates a default-initialized value of the element type.
    fn new_item(&self) -> Box<dyn Reflect>;
}

impl dyn List {
    #[inline]
    pub fn get_as<T: Reflect>(&self, index: usize) -> Option<&T> {
        self.get(index).and_then(<dyn Reflect>::downcast_ref)
    }
}

// -----------------------------------------------------------------------------
// ListItemIter

/// An iterator over the elements of a [`List`].
pub struct ListItemIter<'a> {
    list: &'a dyn List,
    index: usize,
}

impl ListItemIter<'_> {
    #[inline(always)]
    pub const fn new(list: &dyn List) -> ListItemIter<'_> {
        ListItemIter { list, index: 0 }
    }
}

impl<'a> Iterator for ListItemIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.list.get(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.list.len() - self.index;
        (size, Some(size))
    }
}

impl ExactSizeIterator for ListItemIter<'_> {}
