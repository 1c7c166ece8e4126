//! Diagnostics reported by the `ResilientCodable` derive
//!
//! Every kind has a fixed error severity and a stable, domain-qualified
//! code. Reporting one aborts the expansion for that derive site with zero
//! generated declarations; sibling derive sites are unaffected.

use quote::ToTokens;

/// Domain prefix qualifying every diagnostic code.
const DOMAIN: &str = "resilient_codable_macros";

/// The misuse cases the derive rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// The derive target is not a struct.
    IllegalDeclaration,
    /// A field wrote `#[resilient(default)]` without an explicit value.
    MissingDefault,
}

impl DiagnosticKind {
    /// Stable identifier for this diagnostic, qualified by the macro domain.
    pub fn code(self) -> String {
        let id = match self {
            Self::IllegalDeclaration => "illegal_declaration",
            Self::MissingDefault => "missing_default",
        };
        format!("{DOMAIN}::{id}")
    }

    /// Human-readable description of the misuse.
    pub fn message(self) -> &'static str {
        match self {
            Self::IllegalDeclaration => {
                "`#[derive(ResilientCodable)]` can only be applied to a `struct`"
            }
            Self::MissingDefault => {
                "an explicit default value must be provided, e.g. `#[resilient(default = ...)]`"
            }
        }
    }

    /// Build the compile error for this diagnostic, anchored at `anchor`.
    pub fn at<A: ToTokens>(self, anchor: A) -> syn::Error {
        syn::Error::new_spanned(anchor, format!("{} [{}]", self.message(), self.code()))
    }
}
