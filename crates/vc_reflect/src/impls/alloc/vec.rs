use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat, list_try_apply};
use crate::info::{ListInfo, TypeInfo, TypePath, Typed};
use crate::ops::{ApplyError, List, ListItemIter, ReflectCloneError};

impl<T: TypePath> TypePath for Vec<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["alloc::vec::Vec<", T::type_path(), ">"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["Vec<", T::type_name(), ">"]))
    }

    #[inline]
    fn type_ident() -> &'static str {
        "Vec"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("alloc::vec")
    }
}

impl<T: Reflect + Typed + Default> Typed for Vec<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::List(ListInfo::new::<Self, T>()))
    }
}

impl<T: Reflect + Typed + Default> List for Vec<T> {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        <[T]>::get(self, index).map(|item| item as &dyn Reflect)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        <[T]>::get_mut(self, index).map(|item| item as &mut dyn Reflect)
    }

    fn try_push(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        Vec::push(self, value.take::<T>()?);
        Ok(())
    }

    fn pop(&mut self) -> Option<Box<dyn Reflect>> {
        Vec::pop(self).map(|item| Box::new(item) as Box<dyn Reflect>)
    }

    #[inline]
    fn clear(&mut self) {
        Vec::clear(self);
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn iter(&self) -> ListItemIter<'_> {
        ListItemIter::new(self)
    }

    #[inline]
    fn new_item(&self) -> Box<dyn Reflect> {
        Box::new(T::default())
    }
}

impl<T: Reflect + Typed + Default> Reflect for Vec<T> {
    crate::reflection::impl_reflect_cast_fn!(List);

    fn try_apply(&mut self, value: &dyn Reflect) -> Result<(), ApplyError> {
        list_try_apply(self, value)
    }

    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
        let mut items = Vec::with_capacity(Vec::len(self));
        for item in <[T]>::iter(self) {
            let cloned = item.reflect_clone()?.take::<T>().map_err(|_| {
                ReflectCloneError::NotSupport {
                    type_path: Cow::Borrowed(T::type_path()),
                }
            })?;
            items.push(cloned);
        }
        Ok(Box::new(items))
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::Reflect;
    use crate::info::{TypePath, Typed};
    use crate::ops::List;

    #[test]
    fn vec_type_path() {
        assert_eq!(<Vec<u8> as TypePath>::type_path(), "alloc::vec::Vec<u8>");
        assert_eq!(<Vec<Vec<u8>> as TypePath>::type_name(), "Vec<Vec<u8>>");

        let info = <Vec<i32> as Typed>::type_info().as_list().unwrap();
        assert!(info.item_is::<i32>());
    }

    #[test]
    fn vec_list_ops() {
        let mut list: Vec<i32> = vec![1, 2];
        assert!(List::try_push(&mut list, Box::new(3_i32)).is_ok());
        assert!(List::try_push(&mut list, Box::new(3_u8)).is_err());
        assert_eq!(List::len(&list), 3);
        assert_eq!(List::get(&list, 2).unwrap().downcast_ref::<i32>(), Some(&3));

        let item = List::new_item(&list);
        assert_eq!(item.take::<i32>().unwrap(), 0);
    }

    #[test]
    fn vec_apply_is_atomic() {
        let mut list: Vec<i32> = vec![7];
        list.try_apply(&vec![1_i32, 2, 3]).unwrap();
        assert_eq!(list, [1, 2, 3]);

        // An element of the wrong type leaves the target untouched.
        assert!(list.try_apply(&vec![1_u8]).is_err());
        assert_eq!(list, [1, 2, 3]);
    }

    #[test]
    fn vec_clone() {
        let list: Vec<u16> = vec![4, 5];
        let cloned = list.reflect_clone().unwrap();
        assert_eq!(cloned.take::<Vec<u16>>().unwrap(), list);
    }
}
