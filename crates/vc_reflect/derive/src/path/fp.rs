//! Fully qualified paths of std items.
//!
//! Generated code must not depend on what the user's module has in scope,
//! so prelude items are spelled out: `quote!(#OptionFP::Some(x))`.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

macro_rules! define_fp {
    ($($name:ident => { $($path:tt)* })*) => {
        $(
            pub(crate) struct $name;

            impl ToTokens for $name {
                #[inline]
                fn to_tokens(&self, tokens: &mut TokenStream) {
                    tokens.extend(quote!($($path)*));
                }
            }
        )*
    };
}

define_fp! {
    AnyFP => { ::core::any::Any }
    CloneFP => { ::core::clone::Clone }
    DebugFP => { ::core::fmt::Debug }
    DefaultFP => { ::core::default::Default }
    OptionFP => { ::core::option::Option }
    ResultFP => { ::core::result::Result }
    SendFP => { ::core::marker::Send }
    SyncFP => { ::core::marker::Sync }
}
