use core::{error, fmt};

use crate::info::{AssignHook, ListInfo, OpaqueInfo, PointerInfo, StructInfo, Type};

// -----------------------------------------------------------------------------
// ReflectKind

/// An enumeration of the "kinds" of a reflected type.
///
/// - `Struct`: a composite with named fields.
/// - `List`: a variable-length ordered sequence, e.g. `Vec<T>`.
/// - `Pointer`: an optional or owning reference, e.g. `Option<T>`, `Box<T>`.
/// - `Opaque`: everything else, scalars and strings included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    Struct,
    List,
    Pointer,
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Struct => f.pad("Struct"),
            Self::List => f.pad("List"),
            Self::Pointer => f.pad("Pointer"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}

/// Caused by a cast to a mismatched [`ReflectKind`].
#[derive(Debug)]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

impl fmt::Display for ReflectKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reflect kind mismatch: expected {}, received {}",
            self.expected, self.received
        )
    }
}

impl error::Error for ReflectKindError {}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time type information for a reflected type.
///
/// Obtained through [`Typed::type_info`](crate::info::Typed::type_info) or
/// [`DynamicTyped::reflect_type_info`](crate::info::DynamicTyped::reflect_type_info).
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Struct(StructInfo),
    List(ListInfo),
    Pointer(PointerInfo),
    Opaque(OpaqueInfo),
}

macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        #[doc = concat!("Returns the inner [`", stringify!($info), "`], or an error if the kind differs.")]
        pub const fn $name(&self) -> Result<&$info, ReflectKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_struct: Struct => StructInfo);
    impl_cast_method!(as_list: List => ListInfo);
    impl_cast_method!(as_pointer: Pointer => PointerInfo);
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);

    /// Returns the underlying [`Type`].
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Struct(info) => info.ty(),
            Self::List(info) => info.ty(),
            Self::Pointer(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
        }
    }

    crate::info::impl_type_fn!();

    /// Returns the [`ReflectKind`] of the underlying type.
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Pointer(_) => ReflectKind::Pointer,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    /// Returns the custom assignment hook registered for this type, if any.
    ///
    /// Only struct and opaque types can carry one.
    pub const fn assign_hook(&self) -> Option<&AssignHook> {
        match self {
            Self::Struct(info) => info.assign_hook(),
            Self::Opaque(info) => info.assign_hook(),
            Self::List(_) | Self::Pointer(_) => None,
        }
    }
}
