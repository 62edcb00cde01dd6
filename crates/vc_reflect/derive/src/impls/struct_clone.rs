use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};

use crate::derive_data::ReflectStruct;

// Generate `Reflect::reflect_clone` tokens.
pub(crate) fn get_struct_clone_impl(info: &ReflectStruct) -> TokenStream {
    use crate::path::fp::{CloneFP, DefaultFP, ResultFP};

    let meta = info.meta();
    let vc_reflect_path = meta.vc_reflect_path();
    let macro_exports_ = crate::path::macro_exports_(vc_reflect_path);
    let reflect_ = crate::path::reflect_(vc_reflect_path);
    let reflect_clone_error_ = crate::path::reflect_clone_error_(vc_reflect_path);
    let type_path_ = crate::path::type_path_(vc_reflect_path);

    if let Some(span) = meta.attrs().clone {
        return quote_spanned! { span =>
            #[inline]
            fn reflect_clone(&self) -> #ResultFP<#macro_exports_::Box<dyn #reflect_>, #reflect_clone_error_> {
                #ResultFP::Ok(#macro_exports_::Box::new(<Self as #CloneFP>::clone(self)))
            }
        };
    }

    let mut tokens = TokenStream::new();

    for field in info.fields() {
        let field_ty = &field.data.ty;
        let member = field.to_member();

        if field.is_active() {
            let name = &field.name;
            tokens.extend(quote! {
                #member: #macro_exports_::reflect_clone_field::<#field_ty>(
                    &self.#member,
                    <Self as #type_path_>::type_path(),
                    #name,
                )?,
            });
        } else {
            tokens.extend(quote! {
                #member: <#field_ty as #DefaultFP>::default(),
            });
        }
    }

    quote! {
        fn reflect_clone(&self) -> #ResultFP<#macro_exports_::Box<dyn #reflect_>, #reflect_clone_error_> {
            #ResultFP::Ok(#macro_exports_::Box::new(
                Self {
                    #tokens
                }
            ) as #macro_exports_::Box<dyn #reflect_>)
        }
    }
}
