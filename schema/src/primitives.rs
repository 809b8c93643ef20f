use serde::Serialize;

/// Support package for primitives with hand-written (de)serialisation.
pub const PRIMITIVES_PACKAGE: &str = "primitives";

/// Package providing the legacy `time` and `duration` scalars.
pub const TIME_PACKAGE: &str = "time";

/// Descriptor of one IDL scalar keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrimitiveType {
    /// Keyword as written in IDL sources.
    pub idl_name:             &'static str,
    /// Name the rest of the pipeline refers to the type by.
    pub canonical:            &'static str,
    /// Scalar type in the generated target language.
    pub target_type:          &'static str,
    /// C type used by the native message structs.
    pub native_type:          &'static str,
    /// Suffix of the native runtime's sequence/array helpers.
    pub native_struct:        &'static str,
    /// Support package a field of this type must import, if any.
    pub package:              Option<&'static str>,
    /// No generated sequence handlers exist; the emitter must use the
    /// support package instead.
    pub custom_serialization: bool,
}

impl PrimitiveType {
    const fn plain(
        idl_name: &'static str,
        target_type: &'static str,
        native_struct: &'static str,
        native_type: &'static str,
    ) -> Self {
        PrimitiveType {
            idl_name,
            canonical: idl_name,
            target_type,
            native_type,
            native_struct,
            package: None,
            custom_serialization: false,
        }
    }

    /// Variable-length text types get their default values quoted.
    pub fn is_textual(&self) -> bool {
        is_textual_type(self.canonical)
    }
}

pub static PRIMITIVE_TYPES: [PrimitiveType; 17] = [
    PrimitiveType {
        idl_name:             "string",
        canonical:            "string",
        target_type:          "string",
        native_type:          "String",
        native_struct:        "String",
        package:              Some(PRIMITIVES_PACKAGE),
        custom_serialization: true,
    },
    PrimitiveType {
        idl_name:             "wstring",
        canonical:            "U16String",
        target_type:          "string",
        native_type:          "U16String",
        native_struct:        "U16String",
        package:              Some(PRIMITIVES_PACKAGE),
        custom_serialization: true,
    },
    PrimitiveType {
        idl_name:             "time",
        canonical:            "time",
        target_type:          "Time",
        native_type:          "time",
        native_struct:        "Time",
        package:              Some(TIME_PACKAGE),
        custom_serialization: true,
    },
    PrimitiveType {
        idl_name:             "duration",
        canonical:            "duration",
        target_type:          "Duration",
        native_type:          "duration",
        native_struct:        "Duration",
        package:              Some(TIME_PACKAGE),
        custom_serialization: true,
    },
    // char sequences use schar in the generated handlers but uchar everywhere else
    PrimitiveType {
        idl_name:             "char",
        canonical:            "char",
        target_type:          "byte",
        native_type:          "uchar",
        native_struct:        "char",
        package:              None,
        custom_serialization: true,
    },
    PrimitiveType::plain("float32", "float32", "float",   "float"),
    PrimitiveType::plain("float64", "float64", "double",  "double"),
    PrimitiveType::plain("bool",    "bool",    "boolean", "bool"),
    PrimitiveType::plain("byte",    "byte",    "octet",   "uint8_t"),
    PrimitiveType::plain("int8",    "int8",    "int8",    "int8_t"),
    PrimitiveType::plain("int16",   "int16",   "int16",   "int16_t"),
    PrimitiveType::plain("int32",   "int32",   "int32",   "int32_t"),
    PrimitiveType::plain("int64",   "int64",   "int64",   "int64_t"),
    PrimitiveType::plain("uint8",   "uint8",   "uint8",   "uint8_t"),
    PrimitiveType::plain("uint16",  "uint16",  "uint16",  "uint16_t"),
    PrimitiveType::plain("uint32",  "uint32",  "uint32",  "uint32_t"),
    PrimitiveType::plain("uint64",  "uint64",  "uint64",  "uint64_t"),
];

/// Exact-match lookup of an IDL keyword.
pub fn lookup_primitive(idl_name: &str) -> Option<&'static PrimitiveType> {
    PRIMITIVE_TYPES.iter().find(|p| p.idl_name == idl_name)
}

/// True for the type names whose default literals are strings, including the
/// canonical `U16String` spelling of `wstring`.
pub fn is_textual_type(name: &str) -> bool {
    matches!(name, "string" | "wstring" | "U16String")
}
