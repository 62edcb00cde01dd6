/// Implements the `Reflect` methods of a `Clone + Debug` type.
///
/// Apart from the kind casts, `try_apply` only accepts the same type.
macro_rules! impl_simple_type_reflect {
    ($kind:ident) => {
        $crate::reflection::impl_reflect_cast_fn!($kind);

        #[inline]
        fn reflect_clone(
            &self,
        ) -> ::core::result::Result<
            $crate::__macro_exports::Box<dyn $crate::Reflect>,
            $crate::ops::ReflectCloneError,
        > {
            Ok($crate::__macro_exports::Box::new(Clone::clone(self)))
        }

        fn try_apply(
            &mut self,
            value: &dyn $crate::Reflect,
        ) -> ::core::result::Result<(), $crate::ops::ApplyError> {
            if let Some(value) = <dyn $crate::Reflect>::downcast_ref::<Self>(value) {
                Clone::clone_from(self, value);
                Ok(())
            } else {
                Err($crate::ops::ApplyError::MismatchedTypes {
                    from_type: $crate::__macro_exports::Cow::Borrowed(
                        $crate::info::DynamicTypePath::reflect_type_path(value),
                    ),
                    to_type: $crate::__macro_exports::Cow::Borrowed(
                        <Self as $crate::info::TypePath>::type_path(),
                    ),
                })
            }
        }

        fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            ::core::fmt::Debug::fmt(self, f)
        }
    };
}

/// Implements `TypePath`, `Typed` and `Reflect` for an opaque `Clone + Debug` type.
///
/// - `impl_reflect_opaque!(u8)`: a primitive, the path is the bare name.
/// - `impl_reflect_opaque!(String in "alloc::string")`: a named type in a module.
/// - `impl_reflect_opaque!(Celsius in "app", assign)`: also registers the
///   type's [`ReflectAssign`](crate::ops::ReflectAssign) hook.
///
/// The macro is crate-internal; an opaque type of another crate that needs a
/// hook implements `Typed` with [`OpaqueInfo::with_assign_hook`](crate::info::OpaqueInfo::with_assign_hook).
macro_rules! impl_reflect_opaque {
    (@info $ty:ty, assign) => {
        $crate::info::OpaqueInfo::new::<$ty>()
            .with_assign_hook($crate::info::AssignHook::of::<$ty>())
    };
    (@info $ty:ty) => {
        $crate::info::OpaqueInfo::new::<$ty>()
    };
    (@reflect $ty:ty $(, $flag:ident)?) => {
        impl $crate::info::Typed for $ty {
            fn type_info() -> &'static $crate::info::TypeInfo {
                static CELL: $crate::impls::NonGenericTypeInfoCell =
                    $crate::impls::NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    $crate::info::TypeInfo::Opaque(
                        $crate::impls::impl_reflect_opaque!(@info Self $(, $flag)?),
                    )
                })
            }
        }

        impl $crate::Reflect for $ty {
            $crate::impls::impl_simple_type_reflect!(Opaque);
        }
    };
    ($ident:ident in $module:literal $(, $flag:ident)?) => {
        impl $crate::info::TypePath for $ident {
            #[inline]
            fn type_path() -> &'static str {
                concat!($module, "::", stringify!($ident))
            }

            #[inline]
            fn type_name() -> &'static str {
                stringify!($ident)
            }

            #[inline]
            fn type_ident() -> &'static str {
                stringify!($ident)
            }

            #[inline]
            fn module_path() -> Option<&'static str> {
                Some($module)
            }
        }

        $crate::impls::impl_reflect_opaque!(@reflect $ident $(, $flag)?);
    };
    ($ty:ty) => {
        impl $crate::info::TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                stringify!($ty)
            }

            #[inline]
            fn type_name() -> &'static str {
                stringify!($ty)
            }

            #[inline]
            fn type_ident() -> &'static str {
                stringify!($ty)
            }
        }

        $crate::impls::impl_reflect_opaque!(@reflect $ty);
    };
}

pub(crate) use {impl_reflect_opaque, impl_simple_type_reflect};

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::Typed;
    use crate::ops::{AssignError, ReflectAssign};

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Celsius(f64);

    crate::impls::impl_reflect_opaque!(Celsius in "vc_reflect::tests", assign);

    impl ReflectAssign for Celsius {
        fn assign_from(&mut self, value: &dyn Reflect) -> Result<(), AssignError> {
            match value.downcast_ref::<f64>() {
                Some(degrees) => {
                    self.0 = *degrees;
                    Ok(())
                }
                None => Err(AssignError::unsupported::<Self>(value)),
            }
        }
    }

    #[test]
    fn opaque_assign_hook() {
        let hook = Celsius::type_info().assign_hook().unwrap();

        let mut value = Celsius::default();
        hook.call(&mut value, &21.5_f64).unwrap();
        assert_eq!(value, Celsius(21.5));

        assert!(hook.call(&mut value, &1_u8).is_err());
        assert_eq!(value, Celsius(21.5));

        assert!(String::type_info().assign_hook().is_none());
    }
}
