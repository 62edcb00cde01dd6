// -----------------------------------------------------------------------------
// Modules

mod reflect;

// -----------------------------------------------------------------------------
// Exports

pub use reflect::Reflect;

// -----------------------------------------------------------------------------
// Internal API

/// Implements `set`, `reflect_kind`, `reflect_ref` and `reflect_mut` of
/// [`Reflect`] for the given kind.
macro_rules! impl_reflect_cast_fn {
    ($kind:ident) => {
        #[inline]
        fn set(
            &mut self,
            value: $crate::__macro_exports::Box<dyn $crate::Reflect>,
        ) -> ::core::result::Result<(), $crate::__macro_exports::Box<dyn $crate::Reflect>> {
            *self = <dyn $crate::Reflect>::take::<Self>(value)?;
            Ok(())
        }

        #[inline]
        fn reflect_kind(&self) -> $crate::info::ReflectKind {
            $crate::info::ReflectKind::$kind
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }

        #[inline]
        fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
            $crate::ops::ReflectMut::$kind(self)
        }
    };
}

pub(crate) use impl_reflect_cast_fn;
