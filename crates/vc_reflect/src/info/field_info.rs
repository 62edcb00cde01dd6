use core::any::{Any, TypeId};

use crate::info::{TypeInfo, Typed};

// -----------------------------------------------------------------------------
// NamedField

/// The named field of a reflected struct.
///
/// An *embedded* field is a struct-typed field whose own fields are promoted
/// to the enclosing struct when matching members by name.
#[derive(Clone, Debug)]
pub struct NamedField {
    ty_id: TypeId,
    name: &'static str,
    // `TypeInfo` is created on first access; using a function pointer delays it.
    type_info: fn() -> &'static TypeInfo,
    embedded: bool,
}

impl NamedField {
    #[inline]
    pub fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            name,
            type_info: T::type_info,
            ty_id: TypeId::of::<T>(),
            embedded: false,
        }
    }

    /// Marks the field as embedded, see the type level documentation.
    #[inline]
    pub const fn with_embedded(mut self, embedded: bool) -> Self {
        self.embedded = embedded;
        self
    }

    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn is_embedded(&self) -> bool {
        self.embedded
    }

    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }
}
