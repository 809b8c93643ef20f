/// Package that conventionally defines the shared utility messages.
pub const COMMON_PACKAGE: &str = "std_msgs";

/// Types that resolve to [`COMMON_PACKAGE`] when referenced without a package
/// qualifier from any other package.
pub const COMMON_TYPES: [&str; 31] = [
    "Bool",
    "ColorRGBA",
    "Duration",
    "Empty",
    "Float32MultiArray",
    "Float32",
    "Float64MultiArray",
    "Float64",
    "Header",
    "Int8MultiArray",
    "Int8",
    "Int16MultiArray",
    "Int16",
    "Int32MultiArray",
    "Int32",
    "Int64MultiArray",
    "Int64",
    "MultiArrayDimension",
    "MultiArrayLayout",
    "String",
    "Time",
    "UInt8MultiArray",
    "UInt8",
    "UInt16MultiArray",
    "UInt16",
    "UInt32MultiArray",
    "UInt32",
    "UInt64MultiArray",
    "UInt64",
    "Char",
    "Byte",
];

pub fn is_common_type(name: &str) -> bool {
    COMMON_TYPES.contains(&name)
}
