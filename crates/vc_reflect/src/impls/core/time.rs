use core::time::Duration;

crate::impls::impl_reflect_opaque!(Duration in "core::time");
