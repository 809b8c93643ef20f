#![cfg(test)]

use msgidl_compiler::{
    parse_message, parse_service, ArrayKind, DefaultValue, IdlError, Metadata, ParserConfig,
};
use proptest::prelude::*;

const SENSOR_STATE: &str = r#"# File level comment, separated by a blank line

# Constants
int32 MAX_COUNT = 10   # upper limit
string GREETING = "hi"
# Some fields
std_msgs/Header header
geometry_msgs/Point[] points
int8[3] int8_values [1, 2, 3]
string name 'robot'      # display name
wstring<=10 label
time stamp
"#;

fn init() {
    let _ = pretty_env_logger::try_init();
}

#[test]
fn test_parse_message() {
    init();
    let meta = Metadata::message("sensor_msgs", "SensorState");
    let schema = parse_message(meta, SENSOR_STATE, &ParserConfig::default()).expect("parse_message failed");

    // Constants
    assert_eq!(schema.constants.len(), 2);
    let max = &schema.constants[0];
    assert_eq!(max.line, 4);
    assert_eq!(max.name, "MAX_COUNT");
    assert_eq!(max.value, "10");
    assert_eq!(max.target_type(), "int32");
    assert_eq!(max.comment, "upper limit. Constants");
    let greeting = &schema.constants[1];
    assert_eq!(greeting.value, r#""hi""#);
    assert_eq!(greeting.comment, "");

    // Fields
    assert_eq!(schema.fields.len(), 6);
    let header = &schema.fields[0];
    assert_eq!(header.line, 7);
    assert_eq!(header.comment, "Some fields");
    assert_eq!(header.resolved.package.as_deref(), Some("std_msgs"));
    assert!(header.is_single_complex());
    assert_eq!(header.package_reference(), "std_msgs_msg.");

    let points = &schema.fields[1];
    assert_eq!(points.array, ArrayKind::Unbounded);
    assert!(!points.is_single_complex());
    assert_eq!(points.target_name, "Points");

    let values = &schema.fields[2];
    assert_eq!(values.array, ArrayKind::Fixed(3));
    assert_eq!(
        values.default,
        Some(DefaultValue::List(vec!["1".to_string(), "2".to_string(), "3".to_string()]))
    );
    assert_eq!(values.target_name, "Int8Values");

    let name = &schema.fields[3];
    assert_eq!(name.default_text.as_deref(), Some("'robot'"));
    assert_eq!(name.default, Some(DefaultValue::Scalar(r#""robot""#.to_string())));
    assert_eq!(name.comment, "display name");

    let label = &schema.fields[4];
    assert_eq!(label.string_bound, Some(10));
    assert_eq!(label.resolved.name, "U16String");
    assert_eq!(label.package_reference(), "");

    let stamp = &schema.fields[5];
    assert_eq!(stamp.resolved.package.as_deref(), Some("time"));

    // Imports, ordered by package
    let imports: Vec<(&str, &str)> = schema.imports.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
    assert_eq!(
        imports,
        vec![
            ("geometry_msgs", "geometry_msgs_msg"),
            ("primitives", "primitives"),
            ("std_msgs", "std_msgs_msg"),
            ("time", "time"),
        ]
    );
}

#[test]
fn test_comment_attachment() {
    init();
    let text = "# first\n#\n# second\nint8 a\n# orphan\n\nint8 b   # inline\n# above\nint8 c   # inline\n";
    let schema = parse_message(Metadata::message("test_msgs", "Comments"), text, &ParserConfig::default()).unwrap();

    let comments: Vec<&str> = schema.fields.iter().map(|f| f.comment.as_str()).collect();
    assert_eq!(comments, vec!["first\nsecond", "inline", "inline. above"]);
}

#[test]
fn test_empty_message() {
    let schema = parse_message(Metadata::message("std_msgs", "Empty"), "", &ParserConfig::default()).unwrap();
    assert!(schema.fields.is_empty());
    assert!(schema.constants.is_empty());
    assert!(schema.imports.is_empty());
}

#[test]
fn test_partial_result_on_unknown_constant() {
    init();
    let text = "int8 a\nFoo BAR = 1\nint8 never_reached\n";
    let failure = parse_message(Metadata::message("test_msgs", "Bad"), text, &ParserConfig::default()).unwrap_err();

    assert!(matches!(failure.error, IdlError::UnknownConstantType { line: 2, .. }));
    let partial = failure.partial.expect("partial schema");
    assert_eq!(partial.fields.len(), 1);
    assert_eq!(partial.constants.len(), 1);
    assert_eq!(partial.constants[0].name, "BAR");
}

#[test]
fn test_frame_graph_service() {
    let service = parse_service("tf2_msgs", "FrameGraph", "---\nstring frame_yaml\n", &ParserConfig::default()).unwrap();
    assert!(service.request.fields.is_empty());
    assert_eq!(service.response.fields.len(), 1);
    assert_eq!(service.response.fields[0].line, 2);
    assert_eq!(service.response.meta.name, "FrameGraph_Response");
}

#[test]
fn test_custom_configuration() {
    let config = ParserConfig::from_json(
        r#"{ "common_package": "base_msgs", "reserved_words": ["name"], "import_suffix": "" }"#,
    )
    .unwrap();
    let schema = parse_message(Metadata::message("nav_msgs", "Odometry"), "Header header\nstring name\nstring type", &config).unwrap();

    assert_eq!(schema.fields[0].resolved.package.as_deref(), Some("base_msgs"));
    assert_eq!(schema.fields[0].package_reference(), "base_msgs.");
    assert_eq!(schema.fields[1].native_name, "_name");
    assert_eq!(schema.fields[2].native_name, "type");
}

fn array_kind() -> impl Strategy<Value = ArrayKind> {
    prop_oneof![
        Just(ArrayKind::Scalar),
        (1usize..1024).prop_map(ArrayKind::Fixed),
        Just(ArrayKind::Unbounded),
        (1usize..1024).prop_map(ArrayKind::Bounded),
    ]
}

#[test]
fn test_bounded_string_round_trip() {
    let line = "wstring[<=3]<=10 names";
    let schema = parse_message(Metadata::message("test_msgs", "Strings"), line, &ParserConfig::default()).unwrap();
    let field = &schema.fields[0];
    assert_eq!(field.array, ArrayKind::Bounded(3));
    assert_eq!(field.string_bound, Some(10));
    assert_eq!(field.to_string(), line);
}

proptest! {
    #[test]
    fn field_line_round_trip(
        package in prop::option::of("[a-z]{2,8}_msgs"),
        type_ in prop::sample::select(vec![
            "int8", "uint32", "float64", "bool", "byte", "string", "wstring", "Point", "GoalInfo",
        ]),
        array in array_kind(),
        string_bound in prop::option::of(1usize..256),
        name in "[a-z][a-z0-9_]{0,8}",
    ) {
        let string_bound = string_bound.filter(|_| matches!(type_, "string" | "wstring"));

        let mut line = String::new();
        if let Some(package) = &package {
            line.push_str(package);
            line.push('/');
        }
        line.push_str(type_);
        line.push_str(&array.to_string());
        if let Some(bound) = string_bound {
            line.push_str(&format!("<={}", bound));
        }
        line.push(' ');
        line.push_str(&name);

        let schema = parse_message(Metadata::message("test_msgs", "Generated"), &line, &ParserConfig::default()).unwrap();
        let field = &schema.fields[0];
        prop_assert_eq!(field.array, array);
        prop_assert_eq!(field.string_bound, string_bound);
        prop_assert_eq!(&field.name, &name);
        prop_assert_eq!(field.to_string(), line);
    }
}
