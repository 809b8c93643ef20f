use std::{collections::BTreeMap, fmt, path::Path};

use msgidl_schema::PrimitiveType;
use serde::{Deserialize, Serialize};

use crate::error::IdlError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaKind {
    Message,
    Request,
    Response,
}

impl SchemaKind {
    /// Directory the interface lives in inside its package.
    pub fn dir(&self) -> &'static str {
        match self {
            SchemaKind::Message => "msg",
            SchemaKind::Request | SchemaKind::Response => "srv",
        }
    }
}

/// Identity of one schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub package: String,
    pub name:    String,
    pub kind:    SchemaKind,
}

impl Metadata {
    pub fn new(package: impl Into<String>, name: impl Into<String>, kind: SchemaKind) -> Self {
        Metadata {
            package: package.into(),
            name:    name.into(),
            kind,
        }
    }

    pub fn message(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(package, name, SchemaKind::Message)
    }

    /// `<package>/<dir>`
    pub fn import_path(&self) -> String {
        format!("{}/{}", self.package, self.kind.dir())
    }

    /// `<package>_<dir>`
    pub fn module_name(&self) -> String {
        format!("{}_{}", self.package, self.kind.dir())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interface {
    Message,
    Service,
}

/// Identity of a source file before it is split into schemas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceId {
    pub package:   String,
    pub name:      String,
    pub interface: Interface,
}

impl InterfaceId {
    /// Derive the identity from a `.../<package>/<msg|srv>/<Name>.<msg|srv>` path.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, IdlError> {
        let path = path.as_ref();
        let invalid = || IdlError::InvalidPath(path.display().to_string());

        let name = path.file_stem().and_then(|s| s.to_str()).ok_or_else(invalid)?;
        let interface = match path.extension().and_then(|s| s.to_str()) {
            Some("msg") => Interface::Message,
            Some("srv") => Interface::Service,
            _ => return Err(invalid()),
        };
        let mut dirs = path.parent().into_iter().flat_map(|p| p.iter().rev());
        let _kind_dir = dirs.next().ok_or_else(invalid)?;
        let package = dirs
            .next()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty() && *s != "/")
            .ok_or_else(invalid)?;

        Ok(InterfaceId {
            package:   package.to_string(),
            name:      name.to_string(),
            interface,
        })
    }

    /// Metadata of the message this file declares.
    pub fn message(&self) -> Metadata {
        Metadata::message(&self.package, &self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "size", rename_all = "snake_case")]
pub enum ArrayKind {
    Scalar,
    Fixed(usize),
    Unbounded,
    Bounded(usize),
}

impl ArrayKind {
    pub fn is_array(&self) -> bool {
        !matches!(self, ArrayKind::Scalar)
    }

    /// Element count of a fixed-size array.
    pub fn size(&self) -> Option<usize> {
        match self {
            ArrayKind::Fixed(n) => Some(*n),
            _ => None,
        }
    }

    /// Maximum element count of a bounded sequence.
    pub fn bound(&self) -> Option<usize> {
        match self {
            ArrayKind::Bounded(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for ArrayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayKind::Scalar => Ok(()),
            ArrayKind::Fixed(n) => write!(f, "[{}]", n),
            ArrayKind::Unbounded => write!(f, "[]"),
            ArrayKind::Bounded(n) => write!(f, "[<={}]", n),
        }
    }
}

/// Result of type resolution for a field or constant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedType {
    /// Canonical type name.
    pub name:         String,
    /// Package the type is defined in; `None` for plain scalars.
    pub package:      Option<String>,
    pub same_package: bool,
    /// Qualifier the emitter must reference the type through, registered as
    /// an import on the owning schema.
    pub alias:        Option<String>,
    pub primitive:    Option<&'static PrimitiveType>,
}

impl ResolvedType {
    pub fn is_primitive(&self) -> bool {
        self.primitive.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultValue {
    Scalar(String),
    List(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub line:          usize,
    /// Package qualifier as written, if any.
    pub package_token: Option<String>,
    pub type_token:    String,
    pub resolved:      ResolvedType,
    pub array:         ArrayKind,
    /// Upper bound of a bounded string scalar (`string<=N`).
    pub string_bound:  Option<usize>,
    pub default_text:  Option<String>,
    pub default:       Option<DefaultValue>,
    pub name:          String,
    pub target_name:   String,
    pub native_name:   String,
    pub comment:       String,
}

impl Field {
    pub fn is_single_complex(&self) -> bool {
        !self.array.is_array() && !self.resolved.is_primitive()
    }

    /// `alias.` when the type lives behind an import, empty otherwise.
    pub fn package_reference(&self) -> String {
        match &self.resolved.alias {
            Some(alias) if !self.resolved.is_primitive() => format!("{}.", alias),
            _ => String::new(),
        }
    }
}

/// Renders the declaration part of the field as an IDL line.
impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(package) = &self.package_token {
            write!(f, "{}/", package)?;
        }
        write!(f, "{}{}", self.type_token, self.array)?;
        if let Some(bound) = self.string_bound {
            write!(f, "<={}", bound)?;
        }
        write!(f, " {}", self.name)?;
        if let Some(default) = &self.default_text {
            write!(f, " {}", default)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Constant {
    pub line:       usize,
    pub type_token: String,
    /// `None` when the type is not a known primitive.
    pub primitive:  Option<&'static PrimitiveType>,
    pub name:       String,
    pub value:      String,
    pub comment:    String,
}

impl Constant {
    pub fn target_type(&self) -> String {
        match self.primitive {
            Some(p) => p.target_type.to_string(),
            None => format!("<missing translation from constant type {}>", self.type_token),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schema {
    pub meta:      Metadata,
    pub fields:    Vec<Field>,
    pub constants: Vec<Constant>,
    /// Package -> alias
    pub imports:   BTreeMap<String, String>,
}

impl Schema {
    pub fn new(meta: Metadata) -> Self {
        Schema {
            meta,
            fields:    Vec::new(),
            constants: Vec::new(),
            imports:   BTreeMap::new(),
        }
    }

    pub fn register_import(&mut self, resolved: &ResolvedType) {
        if let (Some(package), Some(alias)) = (&resolved.package, &resolved.alias) {
            self.imports.insert(package.clone(), alias.clone());
        }
    }
}

/// A two-part request/response interface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Service {
    pub package:  String,
    pub name:     String,
    pub request:  Schema,
    pub response: Schema,
}

impl Service {
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        let package = package.into();
        let name = name.into();
        Service {
            request: Schema::new(Metadata::new(
                &package,
                format!("{}_Request", name),
                SchemaKind::Request,
            )),
            response: Schema::new(Metadata::new(
                &package,
                format!("{}_Response", name),
                SchemaKind::Response,
            )),
            package,
            name,
        }
    }
}
