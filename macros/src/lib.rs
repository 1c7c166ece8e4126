//! Procedural macros for the resilient-codable crate
//!
//! This crate provides the `ResilientCodable` derive macro, which synthesizes
//! a lenient decoding routine for a struct: each field with a declared
//! default is decoded independently from a keyed container, and any field
//! whose value is missing or malformed simply keeps its default instead of
//! failing the whole decode.

use proc_macro::TokenStream;

mod analyze;
mod diagnostic;
mod synthesize;

// Tests
#[cfg(test)]
mod tests;

/// Derive macro for resilient decoding
///
/// Generates an implementation of `resilient_codable::ResilientDecode` with
/// one isolated decode attempt per field carrying a
/// `#[resilient(default = ...)]` attribute, plus an empty
/// `resilient_codable::Codable` capability impl when the type does not
/// already declare that capability via `#[resilient(conforms(Codable))]`.
///
/// # Example
///
/// ```ignore
/// use resilient_codable::ResilientCodable;
/// use serde::Serialize;
///
/// #[derive(ResilientCodable, Serialize)]
/// struct Foo {
///     #[resilient(default = 0)]
///     foo: i32,
///
///     #[resilient(default = String::from("bar"))]
///     bar: String,
/// }
/// ```
///
/// Decoding `{"foo": "one"}` yields `foo == 0` (the value did not coerce)
/// and `bar == "bar"` (the key was absent). Only a payload that cannot
/// produce a keyed container at all fails the decode.
#[proc_macro_derive(ResilientCodable, attributes(resilient))]
pub fn derive_resilient_codable(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as syn::DeriveInput);

    synthesize::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
