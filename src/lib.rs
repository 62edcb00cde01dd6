//! Reflection-driven value copying.
//!
//! This crate bundles the workspace crates behind one dependency:
//!
//! - [`reflect`]: the runtime reflection layer (`Reflect`, `Struct`, `List`, `Pointer`).
//! - [`copier`]: the copying engine that moves data between two reflected shapes.
//!
//! ```
//! use vc_copy::reflect::derive::Reflect;
//!
//! #[derive(Reflect, Default)]
//! struct User { name: String, age: i32 }
//!
//! #[derive(Reflect, Default)]
//! struct Employee { name: String, age: i64 }
//!
//! let user = User { name: "Jinzhu".into(), age: 18 };
//! let mut employee = Employee::default();
//!
//! vc_copy::copy(&mut employee, &user).unwrap();
//!
//! assert_eq!(employee.name, "Jinzhu");
//! assert_eq!(employee.age, 18);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use vc_copier as copier;
pub use vc_reflect as reflect;

pub use vc_copier::{CopyError, CopyOptions, CopyStats, Copier, Destination, copy};
