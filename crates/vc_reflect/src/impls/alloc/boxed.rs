use alloc::boxed::Box;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat, pointer_try_apply};
use crate::info::{PointerInfo, TypeInfo, TypePath, Typed};
use crate::ops::{ApplyError, Pointer, ReflectCloneError};

impl<T: TypePath> TypePath for Box<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["alloc::boxed::Box<", T::type_path(), ">"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["Box<", T::type_name(), ">"]))
    }

    #[inline]
    fn type_ident() -> &'static str {
        "Box"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("alloc::boxed")
    }
}

impl<T: Reflect + Typed + Default> Typed for Box<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Pointer(PointerInfo::new::<Self, T>(false)))
    }
}

/// A `Box` always holds a value, so it is never null.
impl<T: Reflect + Typed + Default> Pointer for Box<T> {
    #[inline]
    fn pointee(&self) -> Option<&dyn Reflect> {
        Some(&**self)
    }

    #[inline]
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        Some(&mut **self)
    }

    #[inline]
    fn pointee_or_alloc(&mut self) -> &mut dyn Reflect {
        &mut **self
    }

    #[inline]
    fn new_pointee(&self) -> Box<dyn Reflect> {
        Box::new(T::default())
    }

    fn replace(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        *self = value.downcast::<T>()?;
        Ok(())
    }

    #[inline]
    fn take_pointee(&mut self) -> Option<Box<dyn Reflect>> {
        None
    }

    #[inline]
    fn is_nullable(&self) -> bool {
        false
    }
}

impl<T: Reflect + Typed + Default> Reflect for Box<T> {
    crate::reflection::impl_reflect_cast_fn!(Pointer);

    fn try_apply(&mut self, value: &dyn Reflect) -> Result<(), ApplyError> {
        pointer_try_apply(self, value)
    }

    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
        let pointee = (**self).reflect_clone()?.downcast::<T>().map_err(|_| {
            ReflectCloneError::NotSupport {
                type_path: alloc::borrow::Cow::Borrowed(T::type_path()),
            }
        })?;
        Ok(Box::new(pointee))
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::{TypePath, Typed};
    use crate::ops::Pointer;

    #[test]
    fn box_is_non_nullable_pointer() {
        assert_eq!(<Box<String> as TypePath>::type_path(), "alloc::boxed::Box<alloc::string::String>");

        let info = <Box<u32> as Typed>::type_info().as_pointer().unwrap();
        assert!(!info.is_nullable());
        assert!(info.pointee_is::<u32>());

        let mut value: Box<u32> = Box::new(3);
        assert!(!value.is_null());
        assert!(value.take_pointee().is_none());
        assert_eq!(*value, 3);
    }

    #[test]
    fn box_apply_and_replace() {
        let mut value: Box<u32> = Box::new(3);
        value.try_apply(&Box::new(9_u32)).unwrap();
        assert_eq!(*value, 9);

        assert!(Pointer::replace(&mut value, Box::new(11_u32)).is_ok());
        assert_eq!(*value, 11);
        assert!(Pointer::replace(&mut value, Box::new(11_i8)).is_err());
    }
}
