use crate::DiffKind;
use crate::GraphQLTypeDiff;
use crate::tests::utils;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::GraphQLTypeNode;
use crate::types::ListType;
use crate::types::NonNullType;
use crate::types::ScalarType;
use proptest::prelude::*;

#[test]
fn field_missing_renders_in_fixed_format() {
    let this_type = utils::user_type();
    let other_type = utils::user_type_without_id();

    let diff = GraphQLTypeDiff::new(
        &this_type,
        &other_type,
        DiffKind::FieldMissing,
        "field 'id' removed",
        /* backward_compatible = */ false,
    );

    assert_eq!(
        diff.to_text(),
        "[diffType=FieldMissing, description=\"field 'id' removed\"]",
    );
    assert_eq!(diff.to_string(), diff.to_text());
}

#[test]
fn accessors_return_constructor_inputs() {
    let this_type = utils::user_type();
    let other_type = utils::date_scalar();

    let diff = GraphQLTypeDiff::new(
        &this_type,
        &other_type,
        DiffKind::BaseTypeDiff,
        "User changed from an object type to a scalar type",
        false,
    );

    assert!(std::ptr::eq(diff.this_type(), &this_type));
    assert!(std::ptr::eq(diff.other_type(), &other_type));
    assert_eq!(diff.kind(), DiffKind::BaseTypeDiff);
    assert_eq!(
        diff.description(),
        "User changed from an object type to a scalar type",
    );
    assert!(!diff.backward_compatible());
    assert!(diff.is_breaking());
}

#[test]
fn backward_compatible_diff_is_not_breaking() {
    let this_type: GraphQLTypeNode = EnumType::new("Color")
        .with_value(EnumValue::new("RED"))
        .into();
    let other_type: GraphQLTypeNode = EnumType::new("Color")
        .with_value(EnumValue::new("RED"))
        .with_value(EnumValue::new("GREEN"))
        .into();

    let diff = GraphQLTypeDiff::new(
        &this_type,
        &other_type,
        DiffKind::EnumDiff,
        "value GREEN added to Color",
        true,
    );

    assert!(diff.backward_compatible());
    assert!(!diff.is_breaking());
}

#[test]
fn wrapper_nodes_may_be_referenced() {
    // A diff between `[String]` and `String!` points at wrapper nodes rather
    // than named types.
    let this_type: GraphQLTypeNode =
        ListType::new(ScalarType::new("String")).into();
    let other_type: GraphQLTypeNode =
        NonNullType::new(ScalarType::new("String")).unwrap().into();

    let diff = GraphQLTypeDiff::new(
        &this_type,
        &other_type,
        DiffKind::BaseTypeDiff,
        "[String] became String!",
        false,
    );

    assert_eq!(diff.this_type().to_graphql_string(), "[String]");
    assert_eq!(diff.other_type().to_graphql_string(), "String!");
    assert_eq!(
        diff.to_text(),
        "[diffType=BaseTypeDiff, description=\"[String] became String!\"]",
    );
}

#[test]
fn description_is_not_escaped() {
    let this_type = utils::date_scalar();
    let other_type = utils::date_scalar();

    let diff = GraphQLTypeDiff::new(
        &this_type,
        &other_type,
        DiffKind::TypeDescriptionDiff,
        "was \"a date\", now [description=\"x\"]",
        true,
    );

    assert_eq!(
        diff.to_text(),
        "[diffType=TypeDescriptionDiff, \
        description=\"was \"a date\", now [description=\"x\"]\"]",
    );
}

#[test]
fn records_with_identical_values_are_indistinguishable() {
    let this_type = utils::user_type();
    let other_type = utils::user_type_without_id();
    let this_type_copy = this_type.clone();
    let other_type_copy = other_type.clone();

    let diff_a = GraphQLTypeDiff::new(
        &this_type,
        &other_type,
        DiffKind::FieldMissing,
        "field 'id' removed",
        false,
    );
    let diff_b = GraphQLTypeDiff::new(
        &this_type_copy,
        &other_type_copy,
        DiffKind::FieldMissing,
        String::from("field 'id' removed"),
        false,
    );

    assert_eq!(diff_a, diff_b);
    assert_eq!(diff_a.to_text(), diff_b.to_text());
    assert_eq!(diff_a.this_type(), diff_b.this_type());
    assert_eq!(diff_a.other_type(), diff_b.other_type());
}

#[test]
fn serializes_with_camel_case_field_names() {
    let this_type = utils::date_scalar();
    let other_type: GraphQLTypeNode = ScalarType::new("Date")
        .with_description("An ISO-8601 calendar date.")
        .into();

    let diff = GraphQLTypeDiff::new(
        &this_type,
        &other_type,
        DiffKind::TypeDescriptionDiff,
        "description added to Date",
        true,
    );

    let json = serde_json::to_value(&diff).unwrap();
    assert_eq!(json["diffType"], "TypeDescriptionDiff");
    assert_eq!(json["description"], "description added to Date");
    assert_eq!(json["backwardsCompatible"], true);
    assert_eq!(json["thisType"]["Scalar"]["name"], "Date");
    assert_eq!(
        json["otherType"]["Scalar"]["description"],
        "An ISO-8601 calendar date.",
    );
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "non-empty description")]
fn empty_description_is_rejected_in_debug_builds() {
    let this_type = utils::date_scalar();
    let other_type = utils::date_scalar();

    GraphQLTypeDiff::new(
        &this_type,
        &other_type,
        DiffKind::TypeMissing,
        "",
        false,
    );
}

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn diff_values_can_be_shared_across_threads() {
    assert_send_sync::<GraphQLTypeDiff<'static>>();
    assert_send_sync::<DiffKind>();
    assert_send_sync::<GraphQLTypeNode>();

    let this_type = utils::user_type();
    let other_type = utils::user_type_without_id();
    let diff = GraphQLTypeDiff::new(
        &this_type,
        &other_type,
        DiffKind::FieldMissing,
        "field 'id' removed",
        false,
    );

    let rendered = std::thread::scope(|scope| {
        scope.spawn(|| diff.to_text()).join().unwrap()
    });
    assert_eq!(rendered, diff.to_text());
}

proptest! {
    #[test]
    fn to_text_matches_format_for_any_kind_and_description(
        kind_idx in 0..DiffKind::ALL.len(),
        description in "\\PC{1,40}",
        backward_compatible in any::<bool>(),
    ) {
        let this_type = utils::user_type();
        let other_type = utils::user_type_without_id();
        let kind = DiffKind::ALL[kind_idx];

        let diff = GraphQLTypeDiff::new(
            &this_type,
            &other_type,
            kind,
            description.clone(),
            backward_compatible,
        );

        prop_assert_eq!(diff.kind(), kind);
        prop_assert_eq!(diff.description(), description.as_str());
        prop_assert_eq!(diff.backward_compatible(), backward_compatible);

        let expected = format!(
            "[diffType={}, description=\"{}\"]",
            kind.as_str(),
            description,
        );
        prop_assert_eq!(diff.to_text(), expected);

        // Rendering is deterministic.
        prop_assert_eq!(diff.to_text(), diff.to_text());
    }
}
