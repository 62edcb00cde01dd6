//! Containers for static storage of type information.
//!
//! This is usually used to implement [`Typed`](crate::info::Typed) and
//! [`TypePath`](crate::info::TypePath).
//!
//! ## NonGenericTypeInfoCell
//!
//! For non generic types, [`NonGenericTypeInfoCell`] stores the [`TypeInfo`]
//! in a [`OnceLock`].
//!
//! ## GenericTypeCell
//!
//! For generic types, the `static CELL` inside the function is shared by
//! every instantiation. Therefore the inner of [`GenericTypeInfoCell`] and
//! [`GenericTypePathCell`] is a map keyed by [`TypeId`], wrapped in [`RwLock`].
//!
//! ```
//! use vc_reflect::impls::{GenericTypePathCell, concat};
//! use vc_reflect::info::TypePath;
//!
//! struct Wrapper<T>(T);
//!
//! impl<T: TypePath> TypePath for Wrapper<T> {
//!     fn type_path() -> &'static str {
//!         static CELL: GenericTypePathCell = GenericTypePathCell::new();
//!         CELL.get_or_insert::<Self>(|| concat(&["my_crate::Wrapper<", T::type_path(), ">"]))
//!     }
//!     fn type_name() -> &'static str {
//!         static CELL: GenericTypePathCell = GenericTypePathCell::new();
//!         CELL.get_or_insert::<Self>(|| concat(&["Wrapper<", T::type_name(), ">"]))
//!     }
//!     fn type_ident() -> &'static str {
//!         "Wrapper"
//!     }
//! }
//!
//! assert_eq!(Wrapper::<u8>::type_path(), "my_crate::Wrapper<u8>");
//! assert_eq!(Wrapper::<bool>::type_path(), "my_crate::Wrapper<bool>");
//! ```

use alloc::boxed::Box;
use alloc::string::String;
use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use crate::hash::{TypeIdMap, new_type_id_map};
use crate::info::TypeInfo;

mod sealed {
    use super::TypeInfo;
    use alloc::string::String;
    pub trait TypedProperty: Send + Sync + 'static {}

    impl TypedProperty for String {}
    impl TypedProperty for TypeInfo {}
}

use sealed::TypedProperty;

/// A container for non-generic types, see the module documentation.
pub struct NonGenericTypeCell<T: TypedProperty>(OnceLock<T>);

pub type NonGenericTypeInfoCell = NonGenericTypeCell<TypeInfo>;

impl<T: TypedProperty> NonGenericTypeCell<T> {
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.0.get_or_init(f)
    }
}

/// A container for generic types, see the module documentation.
pub struct GenericTypeCell<T: TypedProperty>(RwLock<TypeIdMap<&'static T>>);

pub type GenericTypeInfoCell = GenericTypeCell<TypeInfo>;

pub type GenericTypePathCell = GenericTypeCell<String>;

impl<T: TypedProperty> GenericTypeCell<T> {
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(new_type_id_map()))
    }

    /// Returns the value stored for `G`, creating it with `f` on first access.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> T) -> &T {
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    // `f` may query other cells of the same function (nested generics),
    // so it must run without holding the lock.
    #[inline(never)]
    fn get_or_insert_by_type_id(&self, type_id: TypeId, f: impl FnOnce() -> T) -> &T {
        match self.get_by_type_id(type_id) {
            Some(info) => info,
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&'static T> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }

    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, value: T) -> &'static T {
        *self
            .0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(type_id)
            .or_insert_with(|| Box::leak(Box::new(value)))
    }
}
