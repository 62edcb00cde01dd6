//! Provide interfaces for data operation.
//!
//! ## Menu
//!
//! The following are subtraits of [`Reflect`], each providing access to one
//! ["kind"](crate::info::ReflectKind) of data:
//!
//! - [`Struct`]: For struct (e.g. `A{ .. }`) .
//! - [`List`]: For list-like (e.g. `Vec<i32>`) .
//! - [`Pointer`]: For optional or owning references (e.g. `Option<T>`, `Box<T>`) .
//!
//! [`ReflectAssign`] is the custom conversion hook a type can register on its info.
//!
//! [`Reflect`]: crate::Reflect

// -----------------------------------------------------------------------------
// Modules

mod apply_error;
mod assign;
mod clone_error;
mod invoke_error;
mod kind;
mod list_ops;
mod pointer_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use apply_error::ApplyError;
pub use assign::{AssignError, ReflectAssign};
pub use clone_error::ReflectCloneError;
pub use invoke_error::InvokeError;

pub use kind::{ReflectMut, ReflectRef};

pub use list_ops::{List, ListItemIter};
pub use pointer_ops::Pointer;
pub use struct_ops::{Struct, StructFieldIter};
