//! Runtime reflection for plain Rust data.
//!
//! A reflected value exposes one of four shapes:
//!
//! - [`Struct`](ops::Struct): named fields, possibly embedded, plus
//!   registered getter and setter methods.
//! - [`List`](ops::List): an ordered sequence of one item type, like `Vec<T>`.
//! - [`Pointer`](ops::Pointer): a single indirection, like `Option<T>` or `Box<T>`.
//! - Opaque: everything else, compared and copied as a whole.
//!
//! Static metadata for each type is available through [`Typed`](info::Typed),
//! and values are read and written through [`Reflect`].
//!
//! ```
//! use vc_reflect::{Reflect, derive::Reflect};
//! use vc_reflect::ops::Struct;
//!
//! #[derive(Reflect, Default)]
//! struct Player {
//!     name: String,
//!     level: u32,
//! }
//!
//! let mut player = Player::default();
//! *player.field_mut("level").unwrap().downcast_mut::<u32>().unwrap() = 7;
//! assert_eq!(player.level, 7);
//! ```

// -----------------------------------------------------------------------------
// Extern Self

// Usually, we need to use `crate` in the crate itself and use `vc_reflect` in doc testing.
// But `macro_utils::Manifest` can only choose one, so we must have an
// `extern self` to ensure `vc_reflect` can be used as an alias for `crate`.
extern crate self as vc_reflect;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod hash;
mod reflection;

pub mod impls;
pub mod info;
pub mod ops;

// -----------------------------------------------------------------------------
// Top-Level exports

pub mod __macro_exports;

pub use reflection::Reflect;
pub use vc_reflect_derive as derive;
