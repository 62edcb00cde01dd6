use alloc::borrow::Cow;
use alloc::boxed::Box;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat, pointer_try_apply};
use crate::info::{PointerInfo, TypeInfo, TypePath, Typed};
use crate::ops::{ApplyError, Pointer, ReflectCloneError};

impl<T: TypePath> TypePath for Option<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["core::option::Option<", T::type_path(), ">"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["Option<", T::type_name(), ">"]))
    }

    #[inline]
    fn type_ident() -> &'static str {
        "Option"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("core::option")
    }
}

impl<T: Reflect + Typed + Default> Typed for Option<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Pointer(PointerInfo::new::<Self, T>(true)))
    }
}

// Inherent `Option` methods share names with `Pointer`'s, paths are spelled out.
impl<T: Reflect + Typed + Default> Pointer for Option<T> {
    #[inline]
    fn pointee(&self) -> Option<&dyn Reflect> {
        Option::as_ref(self).map(|value| value as &dyn Reflect)
    }

    #[inline]
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        Option::as_mut(self).map(|value| value as &mut dyn Reflect)
    }

    #[inline]
    fn pointee_or_alloc(&mut self) -> &mut dyn Reflect {
        Option::<T>::get_or_insert_with(self, T::default)
    }

    #[inline]
    fn new_pointee(&self) -> Box<dyn Reflect> {
        Box::new(T::default())
    }

    fn replace(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        *self = Some(value.take::<T>()?);
        Ok(())
    }

    fn take_pointee(&mut self) -> Option<Box<dyn Reflect>> {
        Option::take(self).map(|value| Box::new(value) as Box<dyn Reflect>)
    }

    #[inline]
    fn is_nullable(&self) -> bool {
        true
    }
}

impl<T: Reflect + Typed + Default> Reflect for Option<T> {
    crate::reflection::impl_reflect_cast_fn!(Pointer);

    fn try_apply(&mut self, value: &dyn Reflect) -> Result<(), ApplyError> {
        pointer_try_apply(self, value)
    }

    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
        let Some(value) = self else {
            return Ok(Box::new(None::<T>));
        };
        let cloned = value.reflect_clone()?.take::<T>().map_err(|_| {
            ReflectCloneError::NotSupport {
                type_path: Cow::Borrowed(T::type_path()),
            }
        })?;
        Ok(Box::new(Some(cloned)))
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::format;
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::TypePath;
    use crate::ops::Pointer;

    #[test]
    fn option_type_path() {
        assert_eq!(<Option<u8> as TypePath>::type_path(), "core::option::Option<u8>");
        assert_eq!(<Option<String> as TypePath>::type_name(), "Option<String>");
    }

    #[test]
    fn option_alloc_and_take() {
        let mut value: Option<i64> = None;
        assert!(value.is_nullable());
        assert!(value.is_null());

        *value.pointee_or_alloc().downcast_mut::<i64>().unwrap() = 4;
        assert_eq!(value, Some(4));

        let taken = value.take_pointee().unwrap();
        assert_eq!(taken.take::<i64>().unwrap(), 4);
        assert_eq!(value, None);
    }

    #[test]
    fn option_alloc_through_dyn_pointer() {
        let mut value: Option<String> = None;
        let ptr: &mut dyn Pointer = &mut value;
        ptr.pointee_or_alloc().try_apply(&String::from("new")).unwrap();
        assert_eq!(value.as_deref(), Some("new"));

        let ptr: &mut dyn Pointer = &mut value;
        assert!(ptr.pointee_or_alloc().is::<String>());
        assert_eq!(value.as_deref(), Some("new"));
    }

    #[test]
    fn option_apply() {
        let mut value: Option<i64> = None;
        value.try_apply(&Some(8_i64)).unwrap();
        assert_eq!(value, Some(8));

        value.try_apply(&None::<i64>).unwrap();
        assert_eq!(value, None);

        assert!(Pointer::replace(&mut value, Box::new(1_i64)).is_ok());
        assert_eq!(value, Some(1));
    }

    #[test]
    fn option_debug() {
        let value: Option<u8> = Some(3);
        assert_eq!(format!("{:?}", value.as_reflect()), "Some(3)");
    }
}
