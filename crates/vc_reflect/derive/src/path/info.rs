use proc_macro2::TokenStream;
use quote::quote;

#[inline(always)]
pub(crate) fn type_path_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::info::TypePath
    }
}

#[inline(always)]
pub(crate) fn typed_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::info::Typed
    }
}

#[inline(always)]
pub(crate) fn type_info_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::info::TypeInfo
    }
}

#[inline(always)]
pub(crate) fn struct_info_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::info::StructInfo
    }
}

#[inline(always)]
pub(crate) fn named_field_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::info::NamedField
    }
}

#[inline(always)]
pub(crate) fn method_info_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::info::MethodInfo
    }
}

#[inline(always)]
pub(crate) fn assign_hook_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::info::AssignHook
    }
}

#[inline(always)]
pub(crate) fn reflect_kind_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::info::ReflectKind
    }
}
