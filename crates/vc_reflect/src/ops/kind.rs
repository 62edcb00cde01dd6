use crate::Reflect;
use crate::info::{ReflectKind, ReflectKindError};
use crate::ops::{List, Pointer, Struct};

// -----------------------------------------------------------------------------
// ReflectRef

/// An immutable enumeration of ["kinds"] of a reflected type.
///
/// Returned by [`Reflect::reflect_ref`].
///
/// ["kinds"]: ReflectKind
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    List(&'a dyn List),
    Pointer(&'a dyn Pointer),
    Opaque(&'a dyn Reflect),
}

// -----------------------------------------------------------------------------
// ReflectMut

/// A mutable enumeration of ["kinds"] of a reflected type.
///
/// Returned by [`Reflect::reflect_mut`].
///
/// ["kinds"]: ReflectKind
pub enum ReflectMut<'a> {
    Struct(&'a mut dyn Struct),
    List(&'a mut dyn List),
    Pointer(&'a mut dyn Pointer),
    Opaque(&'a mut dyn Reflect),
}

macro_rules! impl_kind_cast {
    ($name:ident : $kind:ident => $($ref:tt)+) => {
        #[doc = concat!("Casts to `", stringify!($kind), "`, or returns a [`ReflectKindError`].")]
        #[inline]
        pub fn $name(self) -> Result<$($ref)+, ReflectKindError> {
            match self {
                Self::$kind(value) => Ok(value),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl<'a> ReflectRef<'a> {
    /// Returns the "kind" of this reflected type without any information.
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Pointer(_) => ReflectKind::Pointer,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    impl_kind_cast!(as_struct: Struct => &'a dyn Struct);
    impl_kind_cast!(as_list: List => &'a dyn List);
    impl_kind_cast!(as_pointer: Pointer => &'a dyn Pointer);
    impl_kind_cast!(as_opaque: Opaque => &'a dyn Reflect);
}

impl<'a> ReflectMut<'a> {
    /// Returns the "kind" of this reflected type without any information.
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Pointer(_) => ReflectKind::Pointer,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    impl_kind_cast!(as_struct: Struct => &'a mut dyn Struct);
    impl_kind_cast!(as_list: List => &'a mut dyn List);
    impl_kind_cast!(as_pointer: Pointer => &'a mut dyn Pointer);
    impl_kind_cast!(as_opaque: Opaque => &'a mut dyn Reflect);
}
