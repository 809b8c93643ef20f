//! Parser configuration.
//!
//! Every parse takes a `&ParserConfig`; there is no process-wide state. The
//! defaults reproduce the built-in tables, and a JSON file can override any
//! subset of keys:
//!
//! ```json
//! {
//!     "common_package": "std_msgs",
//!     "reserved_words": ["type", "func"],
//!     "import_suffix": "_msg"
//! }
//! ```

use std::{fs, path::Path};

use msgidl_schema::{COMMON_PACKAGE, COMMON_TYPES};
use serde::{Deserialize, Serialize};

use crate::error::IdlError;

/// Keywords of the generated target language. Declared names colliding with
/// these get a leading underscore in their native identifier.
pub const RESERVED_WORDS: [&str; 25] = [
    "break", "default", "func", "interface", "select",
    "case", "defer", "go", "map", "struct",
    "chan", "else", "goto", "package", "switch",
    "const", "fallthrough", "if", "range", "type",
    "continue", "for", "import", "return", "var",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Package unqualified common-vocabulary types resolve to.
    pub common_package: String,
    pub common_types:   Vec<String>,
    pub reserved_words: Vec<String>,
    /// Appended to a message package name to form its import alias.
    pub import_suffix:  String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            common_package: COMMON_PACKAGE.to_string(),
            common_types:   COMMON_TYPES.iter().map(|s| s.to_string()).collect(),
            reserved_words: RESERVED_WORDS.iter().map(|s| s.to_string()).collect(),
            import_suffix:  "_msg".to_string(),
        }
    }
}

impl ParserConfig {
    pub fn from_json(text: &str) -> Result<Self, IdlError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, IdlError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn is_common_type(&self, name: &str) -> bool {
        self.common_types.iter().any(|t| t == name)
    }

    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.iter().any(|w| w == name)
    }

    pub fn import_alias(&self, package: &str) -> String {
        format!("{}{}", package, self.import_suffix)
    }
}
