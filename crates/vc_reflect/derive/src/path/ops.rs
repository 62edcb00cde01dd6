use proc_macro2::TokenStream;
use quote::quote;

#[inline(always)]
pub(crate) fn struct_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::ops::Struct
    }
}

#[inline(always)]
pub(crate) fn struct_field_iter_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::ops::StructFieldIter
    }
}

#[inline(always)]
pub(crate) fn reflect_ref_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::ops::ReflectRef
    }
}

#[inline(always)]
pub(crate) fn reflect_mut_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::ops::ReflectMut
    }
}

#[inline(always)]
pub(crate) fn apply_error_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::ops::ApplyError
    }
}

#[inline(always)]
pub(crate) fn reflect_clone_error_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::ops::ReflectCloneError
    }
}
