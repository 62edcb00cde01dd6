mod common;
pub use common::*;

mod simple_type;
pub(crate) use simple_type::{impl_reflect_opaque, impl_simple_type_reflect};
