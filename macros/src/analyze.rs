//! Declaration analysis for the `ResilientCodable` derive
//!
//! This module walks the derive input and extracts, for every named field
//! that declares a default value, the field's name, type, and default
//! expression. Unsupported targets are rejected with diagnostics before any
//! code is generated.

use darling::ast;
use darling::util::{Override, PathList};
use darling::{FromDeriveInput, FromField};
use syn::{Data, DeriveInput};

use crate::diagnostic::DiagnosticKind;

/// Receiver for the struct that derives `ResilientCodable`
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(resilient), supports(struct_any))]
struct TargetReceiver {
    /// The struct identifier
    ident: syn::Ident,
    /// Generics carried over to the generated impls
    generics: syn::Generics,
    /// The struct data with parsed fields
    data: ast::Data<(), FieldReceiver>,
    /// Capabilities the declaration already claims, written as
    /// `#[resilient(conforms(Codable))]` on the struct itself
    #[darling(default)]
    conforms: PathList,
}

/// Receiver for the fields in the struct
#[derive(Debug, FromField)]
#[darling(attributes(resilient))]
struct FieldReceiver {
    /// The field identifier (`None` for positional fields)
    ident: Option<syn::Ident>,
    /// The field type
    ty: syn::Type,
    /// Declared default value; `Override::Inherit` when the attribute was
    /// written as a bare `default` with no expression
    #[darling(default)]
    default: Option<Override<syn::Expr>>,
}

/// A field eligible for resilient decoding: named, with a declared default
/// to fall back to when its value is missing or malformed.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: syn::Ident,
    pub ty: syn::Type,
    pub default: syn::Expr,
}

/// How the target struct's fields are laid out, deciding the shape of the
/// generated constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetStyle {
    Named,
    Tuple,
    Unit,
}

/// Everything synthesis needs, extracted from a valid derive target.
#[derive(Debug)]
pub struct Analysis {
    pub ident: syn::Ident,
    pub generics: syn::Generics,
    pub style: TargetStyle,
    pub fields: Vec<FieldSpec>,
    pub declares_codable: bool,
}

/// Analyze a derive target, producing the ordered field list or the first
/// diagnostic encountered.
pub fn analyze(input: &DeriveInput) -> Result<Analysis, syn::Error> {
    if !matches!(input.data, Data::Struct(_)) {
        return Err(DiagnosticKind::IllegalDeclaration.at(&input.ident));
    }

    let receiver = TargetReceiver::from_derive_input(input)
        .map_err(|err| syn::Error::new(err.span(), err.to_string()))?;

    let ast::Data::Struct(fields) = &receiver.data else {
        unreachable!("darling ensures this is a struct")
    };

    let style = match fields.style {
        ast::Style::Struct => TargetStyle::Named,
        ast::Style::Tuple => TargetStyle::Tuple,
        ast::Style::Unit => TargetStyle::Unit,
    };

    let mut specs = Vec::new();
    for field in fields.iter() {
        // Fields without a declared default have no fallback value to revert
        // to and take no part in the generated decode.
        let Some(default) = &field.default else {
            continue;
        };

        // Positional fields cannot be keyed by name; they are skipped
        // without a diagnostic.
        let Some(name) = &field.ident else {
            continue;
        };

        match default {
            Override::Explicit(expr) => specs.push(FieldSpec {
                name: name.clone(),
                ty: field.ty.clone(),
                default: expr.clone(),
            }),
            // A bare `default` gives the synthesizer nothing to fall back
            // to. The whole analysis aborts; no partial generation.
            Override::Inherit => {
                return Err(DiagnosticKind::MissingDefault.at(name));
            }
        }
    }

    let declares_codable = receiver
        .conforms
        .iter()
        .any(|path| path.is_ident("Codable"));

    Ok(Analysis {
        ident: receiver.ident,
        generics: receiver.generics,
        style,
        fields: specs,
        declares_codable,
    })
}
