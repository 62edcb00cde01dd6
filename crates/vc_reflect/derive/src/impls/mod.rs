// -----------------------------------------------------------------------------
// Modules

mod struct_clone;
mod struct_kind;
mod trait_type_path;
mod trait_typed;

// -----------------------------------------------------------------------------
// Internal API

use struct_clone::get_struct_clone_impl;
use trait_type_path::impl_trait_type_path;
use trait_typed::impl_trait_typed;

pub(crate) use struct_kind::impl_struct;
