use msgidl_schema::{is_textual_type, lookup_primitive};

use crate::{
    config::ParserConfig,
    defaults::{sanitize_default, split_default_values},
    error::{IdlError, ParseResult, Partial},
    grammar::{classify_line, comment_text, ArrayMarker, ConstantDecl, Declaration, FieldDecl},
    naming::{native_name, snake_to_camel},
    resolver::resolve_type,
    types::{ArrayKind, Constant, DefaultValue, Field, Metadata, Schema},
    utils::malformed,
};

/// Documentation collected from comment-only lines, waiting for the next
/// declaration.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CommentBuffer {
    text: String,
}

impl CommentBuffer {
    pub fn push(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if !self.text.is_empty() {
            self.text.push('\n');
        }
        self.text.push_str(text);
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Documentation of a declaration: its inline comment, then `. `, then
    /// the buffered comments. Empties the buffer.
    pub fn attach(&mut self, inline: Option<&str>) -> String {
        let preceding = std::mem::take(&mut self.text);
        let inline = inline.unwrap_or_default();
        if preceding.is_empty() {
            inline.to_string()
        } else if inline.is_empty() {
            preceding
        } else {
            format!("{}. {}", inline, preceding)
        }
    }
}

/// What one source line contributes to a schema.
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed {
    Constant(Constant),
    Field(Field),
    Skip,
}

/// Builds one schema from its lines. Comment state lives in the parser, so
/// every schema or service section starts from an empty buffer.
pub struct SchemaParser<'c> {
    config:   &'c ParserConfig,
    schema:   Schema,
    comments: CommentBuffer,
}

impl<'c> SchemaParser<'c> {
    pub fn new(meta: Metadata, config: &'c ParserConfig) -> Self {
        SchemaParser {
            config,
            schema:   Schema::new(meta),
            comments: CommentBuffer::default(),
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn finish(self) -> Schema {
        self.schema
    }

    /// Parse `text` line by line, stopping at the first error.
    pub fn parse_text(self, text: &str) -> ParseResult<Schema> {
        self.parse_lines(text.split('\n').enumerate().map(|(i, line)| (i + 1, line)))
    }

    /// Parse already numbered lines, stopping at the first error.
    pub fn parse_lines<'t>(mut self, lines: impl IntoIterator<Item = (usize, &'t str)>) -> ParseResult<Schema> {
        for (number, line) in lines {
            if let Err(error) = self.feed_line(number, line) {
                log::debug!("{}/{}: {}", self.schema.meta.package, self.schema.meta.name, error);
                return Err(Partial::new(self.schema, error));
            }
        }
        log::debug!(
            "parsed {}/{}: {} fields, {} constants",
            self.schema.meta.package,
            self.schema.meta.name,
            self.schema.fields.len(),
            self.schema.constants.len()
        );
        Ok(self.schema)
    }

    /// Add one line to the schema. A constant of unknown type is still added
    /// before the error is returned.
    pub fn feed_line(&mut self, number: usize, line: &str) -> Result<(), IdlError> {
        match self.parse_line(number, line)? {
            Parsed::Field(field) => {
                self.schema.register_import(&field.resolved);
                self.schema.fields.push(field);
            }
            Parsed::Constant(constant) => {
                let unknown = constant.primitive.is_none();
                let type_name = constant.type_token.clone();
                self.schema.constants.push(constant);
                if unknown {
                    log::warn!(
                        "{}/{} line {}: unknown constant type {}",
                        self.schema.meta.package,
                        self.schema.meta.name,
                        number,
                        type_name
                    );
                    return Err(IdlError::UnknownConstantType { line: number, type_name });
                }
            }
            Parsed::Skip => {}
        }
        Ok(())
    }

    /// Classify one line and build its declaration without adding it to the
    /// schema. Comment and blank lines update the comment buffer.
    pub fn parse_line(&mut self, number: usize, line: &str) -> Result<Parsed, IdlError> {
        let line = line.trim();

        if let Some(text) = comment_text(line) {
            self.comments.push(text);
            return Ok(Parsed::Skip);
        }
        if line.is_empty() {
            self.comments.clear();
            return Ok(Parsed::Skip);
        }

        match classify_line(line) {
            Some(Declaration::Constant(decl)) => {
                log::trace!("line {}: constant {}", number, decl.name);
                Ok(Parsed::Constant(self.build_constant(number, &decl)))
            }
            Some(Declaration::Field(decl)) => {
                log::trace!("line {}: field {}", number, decl.name);
                self.build_field(number, line, &decl).map(Parsed::Field)
            }
            None => Err(malformed(number, line)),
        }
    }

    fn build_constant(&mut self, number: usize, decl: &ConstantDecl) -> Constant {
        Constant {
            line:       number,
            type_token: decl.type_.to_string(),
            primitive:  lookup_primitive(decl.type_),
            name:       decl.name.to_string(),
            value:      decl.value.to_string(),
            comment:    self.comments.attach(decl.comment),
        }
    }

    fn build_field(&mut self, number: usize, line: &str, decl: &FieldDecl) -> Result<Field, IdlError> {
        let array = array_kind(number, decl.array)?;
        let string_bound = match decl.string_bound {
            None => None,
            Some(_) if !is_textual_type(decl.type_) => {
                return Err(malformed(number, line));
            }
            Some(size) => Some(parse_size(number, size)?),
        };

        let resolved = resolve_type(decl.type_, decl.package, &self.schema.meta, self.config);
        let default = decl.default.map(|text| {
            if array.is_array() {
                DefaultValue::List(split_default_values(&resolved.name, text))
            } else {
                DefaultValue::Scalar(sanitize_default(&resolved.name, text))
            }
        });

        Ok(Field {
            line:          number,
            package_token: decl.package.map(str::to_string),
            type_token:    decl.type_.to_string(),
            resolved,
            array,
            string_bound,
            default_text:  decl.default.map(str::to_string),
            default,
            name:          decl.name.to_string(),
            target_name:   snake_to_camel(decl.name),
            native_name:   native_name(decl.name, self.config),
            comment:       self.comments.attach(decl.comment),
        })
    }
}

/// A `<=` marker wins over a plain size; the digits become the bound.
fn array_kind(number: usize, marker: Option<ArrayMarker>) -> Result<ArrayKind, IdlError> {
    Ok(match marker {
        None => ArrayKind::Scalar,
        Some(ArrayMarker { bounded: true, size }) => ArrayKind::Bounded(parse_size(number, size)?),
        Some(ArrayMarker { bounded: false, size: "" }) => ArrayKind::Unbounded,
        Some(ArrayMarker { bounded: false, size }) => ArrayKind::Fixed(parse_size(number, size)?),
    })
}

fn parse_size(number: usize, size: &str) -> Result<usize, IdlError> {
    size.parse().map_err(|_| IdlError::InvalidArraySize {
        line: number,
        size: size.to_string(),
    })
}
