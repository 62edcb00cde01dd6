//! Items used by the code generated from `vc_reflect_derive`.
//!
//! Not public API.

pub use alloc::borrow::Cow;
pub use alloc::boxed::Box;

use crate::Reflect;
use crate::ops::ReflectCloneError;

/// Clones one field of a derived struct through [`Reflect::reflect_clone`].
pub fn reflect_clone_field<T: Reflect>(
    field: &T,
    type_path: &'static str,
    name: &'static str,
) -> Result<T, ReflectCloneError> {
    field
        .reflect_clone()?
        .take::<T>()
        .map_err(|_| ReflectCloneError::FieldNotCloneable {
            type_path: Cow::Borrowed(type_path),
            field: Cow::Borrowed(name),
        })
}
