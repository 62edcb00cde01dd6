//! Copies values between independently defined types, by member name.
//!
//! Given a source and a destination that both implement
//! [`Reflect`](vc_reflect::Reflect), [`copy`] fills the destination's fields
//! from the source's fields and methods that carry the same name:
//!
//! - `Option<T>` and `Box<T>` are followed on the source side, and allocated
//!   on demand on the destination side.
//! - A struct copied into a `Vec` becomes a single element; a `Vec` copied
//!   into a `Vec` rebuilds it element by element.
//! - Fields marked `#[reflect(embed)]` have their members promoted.
//! - Numbers convert between widths when the value fits, `&str` and `String`
//!   convert to `String`.
//! - Registered getters on the source fill destination fields that have no
//!   source field of the same name, and registered setters on the
//!   destination receive source fields of their name.
//! - A type's assign hook ([`ReflectAssign`](vc_reflect::ops::ReflectAssign))
//!   is tried before any structural copy.
//!
//! Members that cannot be converted are skipped. The only error is a
//! destination that was not passed mutably.
//!
//! ```
//! use vc_reflect::derive::Reflect;
//!
//! #[derive(Reflect, Default)]
//! struct User {
//!     name: String,
//!     age: i32,
//! }
//!
//! #[derive(Reflect, Default)]
//! struct Employee {
//!     name: String,
//!     age: i64,
//!     salary: u32,
//! }
//!
//! let user = User { name: "Ann".into(), age: 30 };
//! let mut employee = Employee { salary: 10, ..Default::default() };
//!
//! vc_copier::copy(&mut employee, &user).unwrap();
//!
//! assert_eq!(employee.name, "Ann");
//! assert_eq!(employee.age, 30);
//! assert_eq!(employee.salary, 10);
//!
//! // Shared references are not addressable.
//! assert!(vc_copier::copy(&employee, &user).is_err());
//! ```

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod bridge;
mod coerce;
mod convert;
mod copier;
mod destination;
mod error;
mod matcher;
mod normalize;
mod options;
mod stats;

// -----------------------------------------------------------------------------
// Exports

pub use copier::{Copier, copy};
pub use destination::Destination;
pub use error::CopyError;
pub use options::CopyOptions;
pub use stats::CopyStats;

// -----------------------------------------------------------------------------
// Internal API

/// Emits a per-member trace record, only in Debug mode with the `debug` feature.
macro_rules! trace_member {
    ($($arg:tt)*) => {
        if cfg!(all(debug_assertions, feature = "debug")) {
            ::log::trace!($($arg)*);
        }
    };
}

pub(crate) use trace_member;
