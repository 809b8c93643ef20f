//! msgidl-compiler
//!
//! This crate implements:
//!  1) A line grammar for `.msg` / `.srv` interface files (fields, constants, comments),
//!  2) Type resolution against primitives, the common vocabulary and packages,
//!  3) Default value normalisation (array splitting, text quoting),
//!  4) Identifier naming transforms (`snake_to_camel`, `camel_to_snake`, native names),
//!  5) Service splitting into request / response schemas,
//!  6) Error types (`IdlError`, `Partial`) and `ParserConfig`.

pub mod error;
pub mod types;
pub mod utils;
pub mod config;
pub mod grammar;
pub mod naming;
pub mod defaults;
pub mod resolver;
pub mod parser;
pub mod compiler;

pub use compiler::parse_message;
pub use compiler::parse_service;
pub use compiler::split_service;
pub use config::ParserConfig;
pub use error::{IdlError, ParseResult, Partial};
pub use types::{
    ArrayKind, Constant, DefaultValue, Field, Interface, InterfaceId, Metadata, ResolvedType, Schema,
    SchemaKind, Service,
};
