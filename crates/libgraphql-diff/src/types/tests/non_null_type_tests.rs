use crate::types::GraphQLTypeNode;
use crate::types::ListType;
use crate::types::NonNullType;
use crate::types::ScalarType;
use crate::types::TypeNodeError;

#[test]
fn wraps_named_type() {
    let non_null = NonNullType::new(ScalarType::new("ID")).unwrap();
    assert_eq!(non_null.of_type().name(), Some("ID"));
}

#[test]
fn wraps_list_type() {
    let non_null =
        NonNullType::new(ListType::new(ScalarType::new("ID"))).unwrap();
    assert!(non_null.of_type().as_list().is_some());
}

#[test]
fn rejects_nested_non_null() {
    let inner = NonNullType::new(ScalarType::new("ID")).unwrap();
    let err = NonNullType::new(inner).unwrap_err();
    assert_eq!(err, TypeNodeError::NestedNonNull {
        inner_type: "ID!".to_string(),
    });
}

#[test]
fn deserialization_rejects_nested_non_null() {
    // Serialize a valid `ID!` and splice it in as the inner type of another
    // non-null wrapper.
    let valid: GraphQLTypeNode =
        NonNullType::new(ScalarType::new("ID")).unwrap().into();
    let valid_json = serde_json::to_value(&valid).unwrap();
    let nested_json = serde_json::json!({
        "NonNull": { "of_type": valid_json },
    });

    let err = serde_json::from_value::<GraphQLTypeNode>(nested_json).unwrap_err();
    assert!(err.to_string().contains("cannot wrap another non-null type"));
}

#[test]
fn deserialization_accepts_valid_non_null() {
    let valid: GraphQLTypeNode =
        NonNullType::new(ListType::new(ScalarType::new("ID"))).unwrap().into();
    let json = serde_json::to_string(&valid).unwrap();
    let parsed: GraphQLTypeNode = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, valid);
}
