//! Parsing of `#[reflect(...)]` attributes.
//!
//! Type level:
//!
//! - `type_path = "a::b::C"`
//! - `clone`, `debug`, `assign`
//! - `getter(name, name = method, ...)`, `setter(...)`
//!
//! Field level:
//!
//! - `embed`, `ignore`

use proc_macro2::Span;
use syn::ext::IdentExt;
use syn::meta::ParseNestedMeta;
use syn::spanned::Spanned;
use syn::{Attribute, Ident, LitStr, Path, Token};

use crate::REFLECT_ATTRIBUTE_NAME;

fn reflect_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident(REFLECT_ATTRIBUTE_NAME))
}

fn set_flag(flag: &mut Option<Span>, meta: &ParseNestedMeta) -> syn::Result<()> {
    if flag.is_some() {
        return Err(meta.error("duplicate flag"));
    }
    *flag = Some(meta.path.span());
    Ok(())
}

// -----------------------------------------------------------------------------
// Type Attributes

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum MethodKind {
    Getter,
    Setter,
}

/// A method registered through `getter(...)` or `setter(...)`.
#[derive(Debug)]
pub(crate) struct MethodAttribute {
    pub kind: MethodKind,
    /// The name used for matching.
    pub name: String,
    /// The inherent method that is called.
    pub method: Ident,
}

#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    pub type_path: Option<Path>,
    pub clone: Option<Span>,
    pub debug: Option<Span>,
    pub assign: Option<Span>,
    pub methods: Vec<MethodAttribute>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in reflect_attrs(attrs) {
            attr.parse_nested_meta(|meta| this.parse_meta(meta))?;
        }
        Ok(this)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("type_path") {
            let lit: LitStr = meta.value()?.parse()?;
            let path = lit.parse_with(Path::parse_mod_style)?;
            if path.leading_colon.is_some() {
                return Err(syn::Error::new(
                    lit.span(),
                    "did not expect a leading double colon (`::`)",
                ));
            }
            if self.type_path.replace(path).is_some() {
                return Err(meta.error("duplicate `type_path`"));
            }
            Ok(())
        } else if meta.path.is_ident("clone") {
            set_flag(&mut self.clone, &meta)
        } else if meta.path.is_ident("debug") {
            set_flag(&mut self.debug, &meta)
        } else if meta.path.is_ident("assign") {
            set_flag(&mut self.assign, &meta)
        } else if meta.path.is_ident("getter") {
            self.parse_methods(MethodKind::Getter, &meta)
        } else if meta.path.is_ident("setter") {
            self.parse_methods(MethodKind::Setter, &meta)
        } else {
            Err(meta.error(
                "unsupported attribute, expected `type_path`, `clone`, `debug`, `assign`, `getter` or `setter`",
            ))
        }
    }

    fn parse_methods(&mut self, kind: MethodKind, meta: &ParseNestedMeta) -> syn::Result<()> {
        meta.parse_nested_meta(|inner| {
            let Some(name) = inner.path.get_ident() else {
                return Err(inner.error("expected a method name"));
            };
            let method = if inner.input.peek(Token![=]) {
                inner.value()?.parse::<Ident>()?
            } else {
                name.clone()
            };

            let name = name.unraw().to_string();
            if self.methods.iter().any(|m| m.kind == kind && m.name == name) {
                return Err(inner.error("duplicate method name"));
            }
            self.methods.push(MethodAttribute { kind, name, method });
            Ok(())
        })
    }
}

// -----------------------------------------------------------------------------
// Field Attributes

#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    pub embed: Option<Span>,
    pub ignore: Option<Span>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in reflect_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("embed") {
                    set_flag(&mut this.embed, &meta)
                } else if meta.path.is_ident("ignore") {
                    set_flag(&mut this.ignore, &meta)
                } else {
                    Err(meta.error("unsupported attribute, expected `embed` or `ignore`"))
                }
            })?;
        }

        if let (Some(_), Some(span)) = (this.embed, this.ignore) {
            return Err(syn::Error::new(
                span,
                "`embed` and `ignore` can not be used together",
            ));
        }
        Ok(this)
    }
}
