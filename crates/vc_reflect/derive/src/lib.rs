//! See following macros:
//!
//! - [`Reflect`](derive_reflect)
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Struct Reflection Derivation
///
/// `#[derive(Reflect)]` implements the following traits for a struct with
/// named fields:
///
/// - `TypePath`
/// - `Typed`
/// - `Struct`
/// - `Reflect`
///
/// Tuple structs, unit structs, enums and unions are rejected.
///
/// ## Custom Type Path
///
/// By default the type path is `module_path!()` followed by the type ident.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(type_path = "you::me::Foo")]
/// struct Foo { /* ... */ }
/// ```
///
/// This path does not need to include generics (they will be automatically appended).
///
/// ## Standard Traits
///
/// The macro cannot detect which standard traits a type implements. Flags
/// declare them so that the generated code can use them:
///
/// - `clone`: `Reflect::reflect_clone` and same-type `try_apply` use `Clone`.
/// - `debug`: `Reflect::reflect_debug` uses `Debug`.
///
/// ```rust, ignore
/// #[derive(Reflect, Clone, Debug)]
/// #[reflect(clone, debug)]
/// struct Foo { /* ... */ }
/// ```
///
/// Without `clone`, fields are cloned one by one through `reflect_clone`.
///
/// ## Assignment Hook
///
/// `assign` registers the type's `ReflectAssign` implementation in its
/// `StructInfo`, so that copying into this type tries the hook first.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(assign)]
/// struct Foo { /* ... */ }
///
/// impl ReflectAssign for Foo { /* ... */ }
/// ```
///
/// ## Methods
///
/// Inherent methods can be registered by name:
///
/// - `getter(name)`: `fn name(&self) -> R`.
/// - `setter(name)`: `fn name(&mut self, value: A) -> R`, the result is ignored.
/// - `getter(name = method)`, `setter(name = method)`: register `method`
///   under a different name.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(getter(double_age), setter(role = set_role))]
/// struct Foo { /* ... */ }
/// ```
///
/// The return type of a getter and the argument type of a setter must
/// implement `Reflect + Typed`, and the argument type also `Default`.
///
/// ## Field Attributes
///
/// - `embed`: the members of this field are promoted into the containing
///   struct when matched by name.
/// - `ignore`: the field is invisible to reflection. `reflect_clone` without
///   the `clone` flag fills it with `Default::default()`.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Employee {
///     #[reflect(embed)]
///     base: Base,
///     #[reflect(ignore)]
///     cache: Vec<u8>,
/// }
/// ```
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    let info = match derive_data::ReflectStruct::from_input(&ast) {
        Ok(info) => info,
        Err(err) => return err.into_compile_error().into(),
    };

    let reflect_impls = impls::impl_struct(&info);

    quote! {
        const _: () = {
            #reflect_impls
        };
    }
    .into()
}
