use proc_macro2::TokenStream;
use quote::{ToTokens, quote, quote_spanned};

use super::{get_struct_clone_impl, impl_trait_type_path, impl_trait_typed};

use crate::derive_data::ReflectStruct;

/// Implement full reflect for struct type.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    // trait: TypePath
    let type_path_trait_tokens = impl_trait_type_path(meta);

    // trait: Typed
    let typed_trait_tokens = impl_trait_typed(meta, info.to_info_tokens());

    // trait: Struct
    let struct_trait_tokens = impl_trait_struct(info);

    // trait: Reflect
    let reflect_trait_tokens = impl_trait_reflect(info);

    quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        #struct_trait_tokens

        #reflect_trait_tokens
    }
}

/// Generate `Struct` trait implementation tokens.
fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    use crate::path::fp::OptionFP;

    let meta = info.meta();
    let vc_reflect_path = meta.vc_reflect_path();
    let struct_ = crate::path::struct_(vc_reflect_path);
    let reflect_ = crate::path::reflect_(vc_reflect_path);
    let struct_field_iter_ = crate::path::struct_field_iter_(vc_reflect_path);
    // `quote` binds every `#ident` of a repetition with `let`, which cannot
    // shadow the unit struct.
    let option_ = OptionFP.to_token_stream();

    let field_names = info
        .active_fields()
        .map(|field| field.name.as_str())
        .collect::<Vec<_>>();
    let members = info
        .active_fields()
        .map(|field| field.to_member())
        .collect::<Vec<_>>();
    let field_indices = (0..members.len()).collect::<Vec<usize>>();
    let field_count = members.len();

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(true);

    quote! {
        impl #impl_generics #struct_ for #real_ident #ty_generics #where_clause {
            fn field(&self, name: &str) -> #option_<&dyn #reflect_> {
                match name {
                    #(#field_names => #option_::Some(&self.#members),)*
                    _ => #option_::None,
                }
            }

            fn field_mut(&mut self, name: &str) -> #option_<&mut dyn #reflect_> {
                match name {
                    #(#field_names => #option_::Some(&mut self.#members),)*
                    _ => #option_::None,
                }
            }

            fn field_at(&self, index: usize) -> #option_<&dyn #reflect_> {
                match index {
                    #(#field_indices => #option_::Some(&self.#members),)*
                    _ => #option_::None,
                }
            }

            fn field_at_mut(&mut self, index: usize) -> #option_<&mut dyn #reflect_> {
                match index {
                    #(#field_indices => #option_::Some(&mut self.#members),)*
                    _ => #option_::None,
                }
            }

            fn name_at(&self, index: usize) -> #option_<&str> {
                match index {
                    #(#field_indices => #option_::Some(#field_names),)*
                    _ => #option_::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_count
            }

            #[inline]
            fn iter_fields(&self) -> #struct_field_iter_<'_> {
                #struct_field_iter_::new(self)
            }
        }
    }
}

/// Generate `Reflect` trait implementation tokens.
fn impl_trait_reflect(info: &ReflectStruct) -> TokenStream {
    use crate::path::fp::{CloneFP, DebugFP, OptionFP, ResultFP};

    let meta = info.meta();
    let vc_reflect_path = meta.vc_reflect_path();

    let reflect_ = crate::path::reflect_(vc_reflect_path);
    let macro_exports_ = crate::path::macro_exports_(vc_reflect_path);
    let reflect_kind_ = crate::path::reflect_kind_(vc_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(vc_reflect_path);
    let reflect_mut_ = crate::path::reflect_mut_(vc_reflect_path);
    let apply_error_ = crate::path::apply_error_(vc_reflect_path);
    let struct_try_apply_ = crate::path::struct_try_apply_(vc_reflect_path);

    // Same type with `Clone` is a plain `clone_from`.
    let same_type_apply = match meta.attrs().clone {
        Some(span) => quote_spanned! { span =>
            if let #OptionFP::Some(__val__) = <dyn #reflect_>::downcast_ref::<Self>(value) {
                #CloneFP::clone_from(self, __val__);
                return #ResultFP::Ok(());
            }
        },
        None => TokenStream::new(),
    };

    let reflect_clone_tokens = get_struct_clone_impl(info);

    let reflect_debug_tokens = match meta.attrs().debug {
        Some(span) => quote_spanned! { span =>
            #[inline]
            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                <Self as #DebugFP>::fmt(self, f)
            }
        },
        None => TokenStream::new(),
    };

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(true);

    quote! {
        impl #impl_generics #reflect_ for #real_ident #ty_generics #where_clause {
            fn set(&mut self, value: #macro_exports_::Box<dyn #reflect_>) -> #ResultFP<(), #macro_exports_::Box<dyn #reflect_>> {
                *self = <dyn #reflect_>::take::<Self>(value)?;
                #ResultFP::Ok(())
            }

            #[inline]
            fn reflect_kind(&self) -> #reflect_kind_ {
                #reflect_kind_::Struct
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::Struct(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #reflect_mut_<'_> {
                #reflect_mut_::Struct(self)
            }

            fn try_apply(&mut self, value: &dyn #reflect_) -> #ResultFP<(), #apply_error_> {
                #same_type_apply
                #struct_try_apply_(self, value)
            }

            #reflect_clone_tokens

            #reflect_debug_tokens
        }
    }
}
