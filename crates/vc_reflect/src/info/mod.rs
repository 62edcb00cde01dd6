//! Provide compile-time type information.
//!
//! ## Menu
//!
//! - [`TypePath`]: A trait for obtaining type names, without prefix `::`.
//! - [`DynamicTypePath`]: Provide dynamic dispatch for `TypePath`.
//! - [`Type`]: A `TypeId` together with the type's `TypePath` accessors.
//!
//! - [`TypeInfo`]: A enum representing compile-time type information, one of:
//!     - [`StructInfo`]: field names, field type info, methods and an optional assign hook.
//!     - [`ListInfo`]: For list-like (e.g. `Vec<i32>`), including item type info.
//!     - [`PointerInfo`]: For `Option<T>` and `Box<T>`, including pointee type info.
//!     - [`OpaqueInfo`]: For scalars, strings and other internally invisible types.
//!
//! - [`NamedField`]: A struct field, with its name, type info and embedded flag.
//! - [`MethodInfo`]: A getter or setter registered on a struct, callable by name.
//! - [`AssignHook`]: A type-erased [`ReflectAssign`](crate::ops::ReflectAssign) implementation.
//!
//! - [`ReflectKind`]: The kind of a reflected type, e.g. `Struct`, `Opaque`.
//!
//! - [`Typed`]: A trait for obtaining `TypeInfo` data.
//! - [`DynamicTyped`]: Provide dynamic dispatch for `Typed`.

// -----------------------------------------------------------------------------
// Modules

mod assign_hook;
mod field_info;
mod list_info;
mod method_info;
mod opaque_info;
mod pointer_info;
mod struct_info;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use type_path::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use assign_hook::AssignHook;
pub use field_info::NamedField;
pub use list_info::ListInfo;
pub use method_info::{MethodInfo, MethodKind};
pub use opaque_info::OpaqueInfo;
pub use pointer_info::PointerInfo;
pub use struct_info::StructInfo;
pub use type_info::{ReflectKind, ReflectKindError, TypeInfo};
pub use type_path::{DynamicTypePath, Type, TypePath};
pub use typed::{DynamicTyped, Typed};
