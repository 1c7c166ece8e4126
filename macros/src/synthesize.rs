//! Code synthesis for the `ResilientCodable` derive
//!
//! Turns an analyzed field list into the generated `ResilientDecode` impl
//! and, when the declaration does not already claim the capability, the
//! empty `Codable` impl. Emission is structured: token trees are assembled
//! from typed `syn` nodes rather than concatenated text.

use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::analyze::{self, Analysis, TargetStyle};

/// Expand the derive: analysis, then synthesis. The first diagnostic is
/// returned unmodified so the entry point can surface it as a compile error.
pub fn expand(input: &DeriveInput) -> Result<TokenStream, syn::Error> {
    let analysis = analyze::analyze(input)?;

    let decode_impl = generate_decode_impl(&analysis);
    let conformance_impl = generate_conformance_impl(&analysis).unwrap_or_default();

    Ok(quote! {
        #decode_impl
        #conformance_impl
    })
}

/// Generate the `ResilientDecode` impl: one isolated decode attempt per
/// eligible field, in declaration order, each falling back to the field's
/// declared default on absence or coercion failure. Obtaining the container
/// itself is the one step that propagates failure.
fn generate_decode_impl(analysis: &Analysis) -> TokenStream {
    let name = &analysis.ident;
    let (impl_generics, ty_generics, where_clause) = analysis.generics.split_for_impl();

    let field_attempts = analysis.fields.iter().map(|field| {
        let field_name = &field.name;
        let field_ty = &field.ty;
        let default = &field.default;
        let key = field_name.to_string();
        quote! {
            let mut #field_name: #field_ty = #default;
            if let Ok(Some(__value)) = __container.decode_if_present::<#field_ty>(#key) {
                #field_name = __value;
            }
        }
    });

    let construct = match analysis.style {
        TargetStyle::Named => {
            let field_names = analysis.fields.iter().map(|field| &field.name);
            quote! { Self { #(#field_names),* } }
        }
        // Positional fields never make it into the field list, so a tuple
        // struct is constructed with no arguments.
        TargetStyle::Tuple => quote! { Self() },
        TargetStyle::Unit => quote! { Self },
    };

    quote! {
        impl #impl_generics ::resilient_codable::ResilientDecode for #name #ty_generics #where_clause {
            fn decode_resilient<__D>(__decoder: &__D) -> ::resilient_codable::Result<Self>
            where
                __D: ::resilient_codable::Decoder,
            {
                let __container = __decoder.keyed_container()?;
                #(#field_attempts)*
                Ok(#construct)
            }
        }
    }
}

/// Generate the empty `Codable` capability impl. The declaration claiming
/// the capability already suppresses it; the `Serialize` half of the marker
/// is whatever implementation the type carries on its own.
fn generate_conformance_impl(analysis: &Analysis) -> Option<TokenStream> {
    if analysis.declares_codable {
        return None;
    }

    let name = &analysis.ident;
    let (impl_generics, ty_generics, where_clause) = analysis.generics.split_for_impl();

    Some(quote! {
        impl #impl_generics ::resilient_codable::Codable for #name #ty_generics #where_clause {}
    })
}
