//! msgidl
//!
//! File-level entry points for the msgidl front end.
//!
//! - `parse_file` / `parse_source` for a single `.msg` or `.srv` file
//! - `parse_files` for a batch, collecting failures instead of stopping
//! - `to_json` for dumping the parsed model

use std::{fs, path::{Path, PathBuf}};

use serde::Serialize;

pub use msgidl_compiler::{
    parse_message, parse_service, ArrayKind, Constant, DefaultValue, Field, IdlError, Interface,
    InterfaceId, Metadata, ParseResult, ParserConfig, Partial, ResolvedType, Schema, SchemaKind,
    Service,
};
pub use msgidl_schema::PrimitiveType;

/// The parsed content of one interface file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "interface", rename_all = "lowercase")]
pub enum ParsedInterface {
    Message(Schema),
    Service(Service),
}

impl ParsedInterface {
    pub fn package(&self) -> &str {
        match self {
            ParsedInterface::Message(schema) => &schema.meta.package,
            ParsedInterface::Service(service) => &service.package,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ParsedInterface::Message(schema) => &schema.meta.name,
            ParsedInterface::Service(service) => &service.name,
        }
    }
}

/// Parse `text` as the interface `id` names.
pub fn parse_source(id: &InterfaceId, text: &str, config: &ParserConfig) -> ParseResult<ParsedInterface> {
    match id.interface {
        Interface::Message => parse_message(id.message(), text, config)
            .map(ParsedInterface::Message)
            .map_err(|failure| failure.map(ParsedInterface::Message)),
        Interface::Service => parse_service(&id.package, &id.name, text, config)
            .map(ParsedInterface::Service)
            .map_err(|failure| failure.map(ParsedInterface::Service)),
    }
}

/// Read and parse one `.msg` / `.srv` file. Package and name come from the path.
pub fn parse_file(path: impl AsRef<Path>, config: &ParserConfig) -> ParseResult<ParsedInterface> {
    let path = path.as_ref();
    let id = InterfaceId::from_path(path).map_err(Partial::fatal)?;
    let text = fs::read_to_string(path).map_err(|e| Partial::fatal(e.into()))?;
    log::debug!("parsing {} as {}/{}", path.display(), id.package, id.name);
    parse_source(&id, &text, config)
}

/// Outcome of `parse_files`.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub parsed:   Vec<ParsedInterface>,
    pub failures: Vec<(PathBuf, IdlError)>,
}

impl BatchReport {
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Parse every file, keeping going past failures.
pub fn parse_files<I, P>(paths: I, config: &ParserConfig) -> BatchReport
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut report = BatchReport::default();
    for path in paths {
        let path = path.as_ref();
        match parse_file(path, config) {
            Ok(parsed) => report.parsed.push(parsed),
            Err(failure) => {
                log::warn!("{}: {}", path.display(), failure.error);
                report.failures.push((path.to_path_buf(), failure.into_error()));
            }
        }
    }
    log::info!("parsed {} files, {} failed", report.parsed.len(), report.failures.len());
    report
}

/// Pretty-printed JSON of a parsed interface.
pub fn to_json(parsed: &ParsedInterface) -> Result<String, IdlError> {
    Ok(serde_json::to_string_pretty(parsed)?)
}

pub mod error {
    pub use msgidl_compiler::error::{IdlError, ParseResult, Partial};
}

pub mod naming {
    pub use msgidl_compiler::naming::{
        action_name_from_message, action_name_from_service, camel_to_snake, native_name,
        service_name_from_half, snake_to_camel,
    };
}

pub mod schema {
    pub use msgidl_schema::{is_common_type, lookup_primitive, PrimitiveType, COMMON_TYPES, PRIMITIVE_TYPES};
}
