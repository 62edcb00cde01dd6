use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{GenericParam, Generics, Ident, ImplGenerics, LitStr, Path, Type, TypeGenerics};

use super::TypeAttributes;

/// Type level data shared by every generated implementation.
pub(crate) struct ReflectMeta<'a> {
    vc_reflect_path: Path,
    ident: &'a Ident,
    generics: &'a Generics,
    attrs: TypeAttributes,
    // field types that mention a type parameter, in declaration order.
    active_types: Vec<Type>,
}

impl core::fmt::Debug for ReflectMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReflectMeta")
            .field("vc_reflect_path", &self.vc_reflect_path.to_token_stream())
            .field("ident", &self.ident)
            .field("attrs", &self.attrs)
            .finish()
    }
}

impl<'a> ReflectMeta<'a> {
    pub fn new(
        ident: &'a Ident,
        generics: &'a Generics,
        attrs: TypeAttributes,
        field_types: impl Iterator<Item = &'a Type>,
    ) -> syn::Result<Self> {
        for param in &generics.params {
            match param {
                GenericParam::Type(_) => {}
                GenericParam::Lifetime(param) => {
                    return Err(syn::Error::new_spanned(
                        param,
                        "`Reflect` can not be derived for types with lifetime parameters",
                    ));
                }
                GenericParam::Const(param) => {
                    return Err(syn::Error::new_spanned(
                        param,
                        "`Reflect` can not be derived for types with const parameters",
                    ));
                }
            }
        }

        let type_params = generics
            .type_params()
            .map(|param| param.ident.clone())
            .collect::<Vec<_>>();

        let mut active_types: Vec<Type> = Vec::new();
        for ty in field_types {
            if is_any_ident_in_token_stream(&type_params, ty.to_token_stream())
                && !active_types.contains(ty)
            {
                active_types.push(ty.clone());
            }
        }

        Ok(Self {
            vc_reflect_path: crate::path::vc_reflect(),
            ident,
            generics,
            attrs,
            active_types,
        })
    }

    #[inline]
    pub fn vc_reflect_path(&self) -> &Path {
        &self.vc_reflect_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn real_ident(&self) -> &Ident {
        self.ident
    }

    /// Whether `TypePath` and `Typed` must be stored per instantiation.
    #[inline]
    pub fn impl_with_generic(&self) -> bool {
        self.generics.type_params().next().is_some()
    }

    /// The ident reported by `TypePath::type_ident`.
    pub fn type_ident(&self) -> LitStr {
        match &self.attrs.type_path {
            Some(path) => {
                let last = &path.segments[path.segments.len() - 1].ident;
                LitStr::new(&last.to_string(), last.span())
            }
            None => LitStr::new(&self.ident.to_string(), self.ident.span()),
        }
    }

    /// A `&'static str` expression of the module path.
    pub fn module_path(&self) -> TokenStream {
        match &self.attrs.type_path {
            Some(path) => {
                let module = path
                    .segments
                    .iter()
                    .take(path.segments.len() - 1)
                    .map(|segment| segment.ident.to_string())
                    .collect::<Vec<_>>()
                    .join("::");
                LitStr::new(&module, self.ident.span()).to_token_stream()
            }
            None => quote!(::core::module_path!()),
        }
    }

    /// A `&'static str` expression of the path without generics.
    fn base_type_path(&self) -> TokenStream {
        match &self.attrs.type_path {
            Some(path) => {
                let full = path
                    .segments
                    .iter()
                    .map(|segment| segment.ident.to_string())
                    .collect::<Vec<_>>()
                    .join("::");
                LitStr::new(&full, self.ident.span()).to_token_stream()
            }
            None => {
                let ident = self.type_ident();
                quote!(::core::concat!(::core::module_path!(), "::", #ident))
            }
        }
    }

    /// Expression of `TypePath::type_path`.
    ///
    /// `&'static str` for non-generic types, `String` for generic types.
    pub fn type_path(&self) -> TokenStream {
        let base = self.base_type_path();
        self.with_generics(base, quote!(type_path))
    }

    /// Expression of `TypePath::type_name`.
    ///
    /// `&'static str` for non-generic types, `String` for generic types.
    pub fn type_name(&self) -> TokenStream {
        let base = self.type_ident().to_token_stream();
        self.with_generics(base, quote!(type_name))
    }

    fn with_generics(&self, base: TokenStream, method: TokenStream) -> TokenStream {
        if !self.impl_with_generic() {
            return base;
        }

        let type_path_ = crate::path::type_path_(&self.vc_reflect_path);
        let concat_ = crate::path::concat_(&self.vc_reflect_path);

        let mut parts = vec![base, quote!("<")];
        for (index, param) in self.generics.type_params().enumerate() {
            if index != 0 {
                parts.push(quote!(", "));
            }
            let ident = &param.ident;
            parts.push(quote!(<#ident as #type_path_>::#method()));
        }
        parts.push(quote!(">"));

        quote! {
            #concat_(&[ #(#parts),* ])
        }
    }

    /// Return the required generic parameters.
    ///
    /// The three parameters returned are `impl_generics`, `ty_generics`, `where_clause`.
    ///
    /// - Type Itself: `Any + Send + Sync`, if exists type params.
    /// - Type Params: `TypePath`.
    /// - Field Type (with type param): `Reflect + Typed`, if `add_reflect_typed`.
    pub fn split_generics(
        &self,
        add_reflect_typed: bool,
    ) -> (ImplGenerics<'_>, TypeGenerics<'_>, TokenStream) {
        use crate::path::fp::{AnyFP, SendFP, SyncFP};

        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        let mut generic_where_clause = quote! { where };

        if self.impl_with_generic() {
            generic_where_clause.extend(quote! { Self: #AnyFP + #SendFP + #SyncFP, });
        }

        // Maintain existing where clause bounds, if any.
        if let Some(where_clause) = where_clause {
            let predicates = where_clause.predicates.iter();
            generic_where_clause.extend(quote! { #(#predicates,)* });
        }

        let type_path_ = crate::path::type_path_(&self.vc_reflect_path);
        for param in self.generics.type_params() {
            let ident = &param.ident;
            generic_where_clause.extend(quote! { #ident: #type_path_, });
        }

        if add_reflect_typed {
            let reflect_ = crate::path::reflect_(&self.vc_reflect_path);
            let typed_ = crate::path::typed_(&self.vc_reflect_path);
            for ty in &self.active_types {
                generic_where_clause.extend(quote! { #ty: #reflect_ + #typed_, });
            }
        }

        (impl_generics, ty_generics, generic_where_clause)
    }
}

// Do any of the identifiers in `idents` appear in `token_stream`?
fn is_any_ident_in_token_stream(idents: &[Ident], token_stream: TokenStream) -> bool {
    for token_tree in token_stream {
        match token_tree {
            proc_macro2::TokenTree::Ident(ident) => {
                if idents.contains(&ident) {
                    return true;
                }
            }
            proc_macro2::TokenTree::Group(group) => {
                if is_any_ident_in_token_stream(idents, group.stream()) {
                    return true;
                }
            }
            _ => {}
        }
    }
    false
}
