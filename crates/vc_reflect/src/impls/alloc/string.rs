use alloc::string::String;

crate::impls::impl_reflect_opaque!(String in "alloc::string");
