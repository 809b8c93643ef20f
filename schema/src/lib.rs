//! Static tables shared by every msgidl parse: the primitive type table and
//! the list of well-known types living in the common vocabulary package.
//!
//! ```
//! use msgidl_schema::*;
//!
//! let uint8 = lookup_primitive("uint8").unwrap();
//! assert_eq!(uint8.native_type, "uint8_t");
//! assert!(!uint8.custom_serialization);
//!
//! let wstring = lookup_primitive("wstring").unwrap();
//! assert_eq!(wstring.canonical, "U16String");
//! assert_eq!(wstring.package, Some(PRIMITIVES_PACKAGE));
//!
//! assert!(is_common_type("Header"));
//! assert!(lookup_primitive("Header").is_none());
//! ```

pub mod primitives;
pub mod vocabulary;

pub use primitives::*;
pub use vocabulary::*;
