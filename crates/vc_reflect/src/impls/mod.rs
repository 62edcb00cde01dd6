//! Provide some utilities for implementing reflection traits.
//!
//! - [`concat`]: An efficient string concatenation function.
//! - [`NonGenericTypeInfoCell`]: Used to implement [`Typed`] for non-generic types.
//! - [`GenericTypePathCell`]: Used to implement [`TypePath`] for generic types.
//! - [`GenericTypeInfoCell`]: Used to implement [`Typed`] for generic types.
//! - `xxx_try_apply`: Used to implement [`Reflect::try_apply`] (e.g. [`list_try_apply`]).
//! - `xxx_debug`: Used to implement [`Reflect::reflect_debug`] (e.g. [`list_debug`]).
//!
//! ## Implemented Menu
//!
//! - basic:
//!     - `i8`-`i128`, `u8`-`u128`, `isize`, `usize`, `f32`, `f64`
//!     - `bool`, `char`
//!     - `&'static str`, `String`
//! - core:
//!     - `Option<T>`, as a nullable pointer
//!     - `core::time::Duration`
//! - alloc:
//!     - `Vec<T>`, as a list
//!     - `Box<T>`, as a non-nullable pointer
//!
//! [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug
//! [`Reflect::try_apply`]: crate::Reflect::try_apply
//! [`TypePath`]: crate::info::TypePath
//! [`Typed`]: crate::info::Typed

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod utils;

mod alloc;
mod core;
mod native;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell};

pub use utils::*;

pub(crate) use utils::{impl_reflect_opaque, impl_simple_type_reflect};

/// An efficient string concatenation function.
///
/// This is usually used for the implementation of `TypePath`.
///
/// # Example
///
/// ```
/// use vc_reflect::impls;
///
/// let s = impls::concat(&["module", "::", "name", "<", "T" , ">"]);
///
/// assert_eq!(s.capacity(), 15);
/// ```
#[inline(never)]
pub fn concat(arr: &[&str]) -> ::alloc::string::String {
    let len = arr.iter().map(|item| item.len()).sum();
    let mut res = ::alloc::string::String::with_capacity(len);
    for &item in arr {
        res.push_str(item);
    }
    res
}
