use stylebridge::{
    to_aggregate_feature_identifier, to_aggregate_feature_type, to_feature_identifier,
    to_feature_type, Error, FeatureIdentifier, FeatureType, HostExpression, HostLiteral,
    LiteralKind,
};

fn lit(json: &str) -> HostLiteral {
    HostLiteral::from_json(json).unwrap()
}

fn id(json: &str) -> FeatureIdentifier {
    to_feature_identifier(&lit(json)).unwrap()
}

#[test]
fn aggregate_feature_types_in_order() {
    assert_eq!(
        to_aggregate_feature_type(&lit(r#"["Point", "Polygon"]"#)).unwrap(),
        vec![FeatureType::Point, FeatureType::Polygon]
    );
}

#[test]
fn unknown_only_from_its_own_name() {
    assert_eq!(to_feature_type(&lit("\"Unknown\"")).unwrap(), FeatureType::Unknown);
    for name in ["Circle", "MultiPoint", "polygon", "Point ", "UNKNOWN"] {
        let err = to_feature_type(&HostLiteral::from(name)).unwrap_err();
        assert!(matches!(err, Error::UnknownFeatureType(_)), "{} should not map", name);
    }
}

#[test]
fn aggregate_feature_type_errors() {
    let err = to_aggregate_feature_type(&lit(r#"["Point", "Circle"]"#)).unwrap_err();
    assert!(matches!(err, Error::AggregateElementError { index: 1, .. }));
    assert!(matches!(err.root_cause(), Error::UnknownFeatureType(_)));
    let err = to_aggregate_feature_type(&lit(r#"["Point", ["Polygon"]]"#)).unwrap_err();
    assert_eq!(err, Error::InvalidAggregateNesting { index: 1 });
}

#[test]
fn identifiers_keep_numeric_kind() {
    assert_eq!(id("12"), FeatureIdentifier::UInt(12));
    assert_eq!(id("-12"), FeatureIdentifier::Int(-12));
    assert_eq!(id("12.5"), FeatureIdentifier::Double(12.5));
    assert_eq!(id("\"way/123\""), FeatureIdentifier::String("way/123".into()));
    assert_eq!(
        to_feature_identifier(&lit("null")).unwrap_err(),
        Error::UnsupportedIdentifierKind(LiteralKind::Null)
    );
    assert_eq!(
        to_feature_identifier(&lit("[1]")).unwrap_err(),
        Error::UnsupportedIdentifierKind(LiteralKind::Sequence)
    );
}

#[test]
fn aggregate_identifiers() {
    assert_eq!(
        to_aggregate_feature_identifier(&lit(r#"[1, "a", -2]"#)).unwrap(),
        vec![
            FeatureIdentifier::UInt(1),
            FeatureIdentifier::String("a".into()),
            FeatureIdentifier::Int(-2),
        ]
    );
}

#[test]
fn expression_entry_points_fold_aggregates() {
    let expr = HostExpression::Aggregate(vec![
        HostExpression::constant(7u64),
        HostExpression::constant("x"),
    ]);
    assert_eq!(
        expr.aggregate_feature_identifier().unwrap(),
        vec![FeatureIdentifier::UInt(7), FeatureIdentifier::String("x".into())]
    );
    let expr = HostExpression::Aggregate(vec![HostExpression::key_path("$type")]);
    assert!(matches!(
        expr.aggregate_feature_type(),
        Err(Error::NonConstantExpression(_))
    ));
}

#[test]
fn feature_values_go_back_to_literals() {
    assert_eq!(HostLiteral::from(FeatureType::LineString), HostLiteral::from("LineString"));
    let polygon = HostLiteral::from(FeatureType::Polygon);
    assert_eq!(to_feature_type(&polygon).unwrap(), FeatureType::Polygon);
    let id = FeatureIdentifier::Int(-3);
    assert_eq!(to_feature_identifier(&HostLiteral::from(id.clone())).unwrap(), id);
}
