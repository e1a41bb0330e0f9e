use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput};

/// #[derive(Absurd)] emits an empty-match impl of `::tola_fn::Absurd`.
///
/// The empty match is what proves the enum uninhabited, so any input with
/// a constructor is rejected before expansion.
pub fn expand_derive_absurd(input: DeriveInput) -> syn::Result<TokenStream2> {
    let data = match &input.data {
        Data::Enum(data) => data,
        Data::Struct(_) | Data::Union(_) => {
            return Err(syn::Error::new(
                input.ident.span(),
                "Absurd can only be derived for enums",
            ));
        }
    };

    if let Some(variant) = data.variants.first() {
        return Err(syn::Error::new(
            variant.span(),
            "Absurd can only be derived for enums with no variants",
        ));
    }

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::tola_fn::Absurd for #ident #ty_generics #where_clause {
            #[inline(always)]
            fn absurd<__T>(self) -> __T {
                match self {}
            }
        }
    })
}
