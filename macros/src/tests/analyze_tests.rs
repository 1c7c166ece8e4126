//! Tests for declaration analysis

use syn::{DeriveInput, parse_quote};

use crate::analyze::{TargetStyle, analyze};

#[test]
fn collects_fields_in_declaration_order() {
    let input: DeriveInput = parse_quote! {
        struct Record {
            #[resilient(default = 0)]
            alpha: i32,
            #[resilient(default = String::new())]
            beta: String,
            #[resilient(default = false)]
            gamma: bool,
        }
    };

    let analysis = analyze(&input).unwrap();

    let names: Vec<String> = analysis
        .fields
        .iter()
        .map(|field| field.name.to_string())
        .collect();
    assert_eq!(names, ["alpha", "beta", "gamma"]);

    assert_eq!(analysis.fields[0].ty, parse_quote!(i32));
    assert_eq!(analysis.fields[1].ty, parse_quote!(String));
    assert_eq!(analysis.fields[2].ty, parse_quote!(bool));
    assert_eq!(analysis.fields[0].default, parse_quote!(0));
    assert_eq!(analysis.fields[1].default, parse_quote!(String::new()));
    assert_eq!(analysis.style, TargetStyle::Named);
}

#[test]
fn fields_without_default_are_excluded() {
    let input: DeriveInput = parse_quote! {
        struct Record {
            #[resilient(default = 0)]
            kept: i32,
            dropped: String,
        }
    };

    let analysis = analyze(&input).unwrap();

    assert_eq!(analysis.fields.len(), 1);
    assert_eq!(analysis.fields[0].name.to_string(), "kept");
}

#[test]
fn positional_fields_are_skipped_without_diagnostic() {
    let input: DeriveInput = parse_quote! {
        struct Pair(#[resilient(default = 0)] i32, u64);
    };

    let analysis = analyze(&input).unwrap();

    assert!(analysis.fields.is_empty());
    assert_eq!(analysis.style, TargetStyle::Tuple);
}

#[test]
fn unit_struct_has_no_fields() {
    let input: DeriveInput = parse_quote! {
        struct Marker;
    };

    let analysis = analyze(&input).unwrap();

    assert!(analysis.fields.is_empty());
    assert_eq!(analysis.style, TargetStyle::Unit);
}

#[test]
fn enum_target_is_rejected() {
    let input: DeriveInput = parse_quote! {
        enum Direction {
            North,
            South,
        }
    };

    let err = analyze(&input).unwrap_err();

    assert!(
        err.to_string()
            .contains("resilient_codable_macros::illegal_declaration")
    );
    assert_eq!(err.into_iter().count(), 1, "exactly one diagnostic");
}

#[test]
fn union_target_is_rejected() {
    let input: DeriveInput = parse_quote! {
        union Raw {
            word: u32,
            bytes: [u8; 4],
        }
    };

    let err = analyze(&input).unwrap_err();

    assert!(
        err.to_string()
            .contains("resilient_codable_macros::illegal_declaration")
    );
}

#[test]
fn bare_default_is_rejected() {
    let input: DeriveInput = parse_quote! {
        struct Record {
            #[resilient(default)]
            foo: i32,
        }
    };

    let err = analyze(&input).unwrap_err();

    assert!(
        err.to_string()
            .contains("resilient_codable_macros::missing_default")
    );
    assert_eq!(err.into_iter().count(), 1, "exactly one diagnostic");
}

#[test]
fn bare_default_aborts_even_with_well_formed_siblings() {
    let input: DeriveInput = parse_quote! {
        struct Record {
            #[resilient(default = 0)]
            fine: i32,
            #[resilient(default)]
            broken: i32,
            #[resilient(default = 1)]
            also_fine: i32,
        }
    };

    let err = analyze(&input).unwrap_err();

    assert!(
        err.to_string()
            .contains("resilient_codable_macros::missing_default")
    );
}

#[test]
fn declared_codable_conformance_is_detected() {
    let input: DeriveInput = parse_quote! {
        #[resilient(conforms(Codable))]
        struct Record {
            #[resilient(default = 0)]
            foo: i32,
        }
    };

    assert!(analyze(&input).unwrap().declares_codable);
}

#[test]
fn other_conformances_do_not_count_as_codable() {
    let input: DeriveInput = parse_quote! {
        #[resilient(conforms(Clone, Serialize))]
        struct Record {
            #[resilient(default = 0)]
            foo: i32,
        }
    };

    assert!(!analyze(&input).unwrap().declares_codable);
}
