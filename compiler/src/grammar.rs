use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    pub static ref COMMENT_LINE: Regex = Regex::new(r"^#\s*(?P<text>.*)$").unwrap();

    // A constant needs `=` right after its name; the value stops at the first
    // `#` so that a trailing comment never contributes to it.
    pub static ref CONSTANT_LINE: Regex = Regex::new(r"(?x)
        ^
        (?:(?P<package>[[:word:]]+)/)?
        (?P<type>[[:word:]]+)
        (?P<array>\[(?P<bounded><=)?(?P<size>\d*)\])?
        \s+
        (?P<name>[[:word:]]+)
        \s*=\s*
        (?P<value>[^\#]+)?
        (?:\s*\#\s*(?P<comment>.*))?
        $
    ").unwrap();

    pub static ref FIELD_LINE: Regex = Regex::new(r"(?x)
        ^
        (?:(?P<package>[[:word:]]+)/)?
        (?P<type>[[:word:]]+)
        (?P<array>\[(?P<bounded><=)?(?P<size>\d*)\])?
        (?:(?P<string_bounded><=)(?P<string_size>\d*))?     # bounded strings
        \s+
        (?P<name>[[:word:]]+)
        \s*
        (?P<default>[^\#]+)?
        (?:\s+\#\s*(?P<comment>.*))?
        $
    ").unwrap();
}

/// Array suffix as written: `[N]`, `[]` or `[<=N]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayMarker<'a> {
    pub bounded: bool,
    /// Digits between the brackets, possibly empty.
    pub size:    &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstantDecl<'a> {
    pub package: Option<&'a str>,
    pub type_:   &'a str,
    pub array:   Option<ArrayMarker<'a>>,
    pub name:    &'a str,
    pub value:   &'a str,
    pub comment: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDecl<'a> {
    pub package:      Option<&'a str>,
    pub type_:        &'a str,
    pub array:        Option<ArrayMarker<'a>>,
    /// Digits after a `<=` directly following the type token.
    pub string_bound: Option<&'a str>,
    pub name:         &'a str,
    pub default:      Option<&'a str>,
    pub comment:      Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Declaration<'a> {
    Constant(ConstantDecl<'a>),
    Field(FieldDecl<'a>),
}

/// Classify a trimmed, non-blank, non-comment line. The constant grammar is
/// tried first. Returns `None` when neither grammar matches.
pub fn classify_line(line: &str) -> Option<Declaration<'_>> {
    if let Some(caps) = CONSTANT_LINE.captures(line) {
        return Some(Declaration::Constant(ConstantDecl {
            package: group(&caps, "package"),
            type_:   required(&caps, "type"),
            array:   array_marker(&caps),
            name:    required(&caps, "name"),
            value:   group(&caps, "value").unwrap_or_default(),
            comment: group(&caps, "comment"),
        }));
    }

    FIELD_LINE.captures(line).map(|caps| {
        Declaration::Field(FieldDecl {
            package:      group(&caps, "package"),
            type_:        required(&caps, "type"),
            array:        array_marker(&caps),
            string_bound: caps
                .name("string_bounded")
                .map(|_| caps.name("string_size").map_or("", |m| m.as_str())),
            name:         required(&caps, "name"),
            default:      group(&caps, "default"),
            comment:      group(&caps, "comment"),
        })
    })
}

/// Text of a comment-only line, `None` for any other line.
pub fn comment_text(line: &str) -> Option<&str> {
    COMMENT_LINE
        .captures(line)
        .and_then(|caps| caps.name("text"))
        .map(|m| m.as_str())
}

fn array_marker<'a>(caps: &Captures<'a>) -> Option<ArrayMarker<'a>> {
    caps.name("array").map(|_| ArrayMarker {
        bounded: caps.name("bounded").is_some(),
        size:    caps.name("size").map_or("", |m| m.as_str()),
    })
}

/// Trimmed capture; empty captures count as absent.
fn group<'a>(caps: &Captures<'a>, name: &str) -> Option<&'a str> {
    caps.name(name)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
}

fn required<'a>(caps: &Captures<'a>, name: &str) -> &'a str {
    caps.name(name).map_or("", |m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(line: &str) -> FieldDecl<'_> {
        match classify_line(line) {
            Some(Declaration::Field(f)) => f,
            other => panic!("expected a field for {:?}, got {:?}", line, other),
        }
    }

    fn constant(line: &str) -> ConstantDecl<'_> {
        match classify_line(line) {
            Some(Declaration::Constant(c)) => c,
            other => panic!("expected a constant for {:?}, got {:?}", line, other),
        }
    }

    #[test]
    fn test_plain_field() {
        let f = field("unique_identifier_msgs/UUID goal_id");
        assert_eq!(f.package, Some("unique_identifier_msgs"));
        assert_eq!(f.type_, "UUID");
        assert_eq!(f.array, None);
        assert_eq!(f.name, "goal_id");
        assert_eq!(f.default, None);
        assert_eq!(f.comment, None);
    }

    #[test]
    fn test_array_markers() {
        assert_eq!(field("uint8[512] junk").array, Some(ArrayMarker { bounded: false, size: "512" }));
        assert_eq!(field("string[] names").array, Some(ArrayMarker { bounded: false, size: "" }));
        assert_eq!(
            field("BasicTypes[<=3] basic_types_values").array,
            Some(ArrayMarker { bounded: true, size: "3" })
        );
    }

    #[test]
    fn test_bounded_string() {
        let f = field(r#"string<=22 bounded_string_value "this is yet another""#);
        assert_eq!(f.array, None);
        assert_eq!(f.string_bound, Some("22"));
        assert_eq!(f.default, Some(r#""this is yet another""#));

        let f = field("string[<=5]<=10 names");
        assert_eq!(f.array, Some(ArrayMarker { bounded: true, size: "5" }));
        assert_eq!(f.string_bound, Some("10"));
    }

    #[test]
    fn test_field_default_and_comment() {
        let f = field("float64[3] float64_values_default [3.1415, 0.0, -3.1415]");
        assert_eq!(f.default, Some("[3.1415, 0.0, -3.1415]"));

        let f = field("int8 x 5    # five");
        assert_eq!(f.default, Some("5"));
        assert_eq!(f.comment, Some("five"));
    }

    #[test]
    fn test_comment_with_equals_is_not_a_constant() {
        let f = field(
            "float32 v_ref                      # ADC channel voltage reference, use to calculate LSB voltage(lsb=scale/resolution)",
        );
        assert_eq!(f.name, "v_ref");
        assert_eq!(f.default, None);
        assert_eq!(
            f.comment,
            Some("ADC channel voltage reference, use to calculate LSB voltage(lsb=scale/resolution)")
        );
    }

    #[test]
    fn test_constants() {
        let c = constant("uint8 NUM_ACTUATOR_CONTROLS = 8");
        assert_eq!((c.type_, c.name, c.value), ("uint8", "NUM_ACTUATOR_CONTROLS", "8"));

        let c = constant("uint8 TYPE_LED    = 0");
        assert_eq!(c.value, "0");

        let c = constant("byte BYTE_CONST=50");
        assert_eq!((c.name, c.value), ("BYTE_CONST", "50"));

        let c = constant("uint8 BATTERY_WARNING_CRITICAL = 2        # critical voltage, return / abort immediately");
        assert_eq!(c.value, "2");
        assert_eq!(c.comment, Some("critical voltage, return / abort immediately"));
    }

    #[test]
    fn test_malformed() {
        assert_eq!(classify_line("uint8"), None);
        assert_eq!(classify_line("uint8[x] junk"), None);
        assert_eq!(classify_line("pkg/ junk"), None);
    }

    #[test]
    fn test_comment_text() {
        assert_eq!(comment_text("# hello"), Some("hello"));
        assert_eq!(comment_text("#"), Some(""));
        assert_eq!(comment_text("int8 x # no"), None);
    }
}
