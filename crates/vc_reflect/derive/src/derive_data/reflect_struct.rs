use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Field, Fields, Member};

use super::{FieldAttributes, MethodKind, ReflectMeta, TypeAttributes};

/// A field of the derived struct.
pub(crate) struct StructField<'a> {
    pub data: &'a Field,
    pub attrs: FieldAttributes,
    /// The name used by reflection, without the `r#` prefix.
    pub name: String,
}

impl StructField<'_> {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.attrs.ignore.is_none()
    }

    pub fn to_member(&self) -> Member {
        match &self.data.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => unreachable!("named struct field"),
        }
    }
}

/// A struct with named fields.
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        const ERR_MSG: &str = "`Reflect` can only be derived for structs with named fields";

        let data = match &input.data {
            Data::Struct(data) => data,
            Data::Enum(data) => return Err(syn::Error::new(data.enum_token.span, ERR_MSG)),
            Data::Union(data) => return Err(syn::Error::new(data.union_token.span, ERR_MSG)),
        };
        let Fields::Named(named) = &data.fields else {
            return Err(syn::Error::new(input.ident.span(), ERR_MSG));
        };

        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;

        let mut fields = Vec::with_capacity(named.named.len());
        for field in &named.named {
            let name = match &field.ident {
                Some(ident) => ident.unraw().to_string(),
                None => unreachable!("named struct field"),
            };
            fields.push(StructField {
                data: field,
                attrs: FieldAttributes::parse_attrs(&field.attrs)?,
                name,
            });
        }

        let field_types = fields
            .iter()
            .filter(|field| field.is_active())
            .map(|field| &field.data.ty);
        let meta = ReflectMeta::new(&input.ident, &input.generics, attrs, field_types)?;

        Ok(Self { meta, fields })
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    #[inline]
    pub fn fields(&self) -> &[StructField<'a>] {
        &self.fields
    }

    /// Fields visible to reflection, in declaration order.
    pub fn active_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields.iter().filter(|field| field.is_active())
    }

    /// Generate the `TypeInfo` expression.
    ///
    /// Similar to following:
    ///
    /// ```ignore
    /// _path_::TypeInfo::Struct(
    ///     _path_::StructInfo::new::<Self>(&[
    ///         _path_::NamedField::new::<FieldType>("name").with_embedded(false),
    ///         ......
    ///     ])
    ///     .with_methods([ ... ])
    ///     .with_assign_hook(_path_::AssignHook::of::<Self>())
    /// )
    /// ```
    pub fn to_info_tokens(&self) -> TokenStream {
        let vc_reflect_path = self.meta.vc_reflect_path();
        let type_info_ = crate::path::type_info_(vc_reflect_path);
        let struct_info_ = crate::path::struct_info_(vc_reflect_path);
        let named_field_ = crate::path::named_field_(vc_reflect_path);
        let method_info_ = crate::path::method_info_(vc_reflect_path);
        let assign_hook_ = crate::path::assign_hook_(vc_reflect_path);

        let fields = self.active_fields().map(|field| {
            let ty = &field.data.ty;
            let name = &field.name;
            let embedded = field.attrs.embed.is_some();
            quote! {
                #named_field_::new::<#ty>(#name).with_embedded(#embedded)
            }
        });

        let attrs = self.meta.attrs();

        let with_methods = if attrs.methods.is_empty() {
            TokenStream::new()
        } else {
            let methods = attrs.methods.iter().map(|attr| {
                let name = &attr.name;
                let method = &attr.method;
                match attr.kind {
                    MethodKind::Getter => quote! {
                        #method_info_::getter::<Self, _>(#name, Self::#method)
                    },
                    MethodKind::Setter => quote! {
                        #method_info_::setter::<Self, _, _>(#name, Self::#method)
                    },
                }
            });
            quote! {
                .with_methods([ #(#methods),* ])
            }
        };

        let with_assign_hook = match attrs.assign {
            Some(span) => quote::quote_spanned! { span =>
                .with_assign_hook(#assign_hook_::of::<Self>())
            },
            None => TokenStream::new(),
        };

        quote! {
            #type_info_::Struct(
                #struct_info_::new::<Self>(&[ #(#fields),* ])
                    #with_methods
                    #with_assign_hook
            )
        }
    }
}
