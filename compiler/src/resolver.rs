use msgidl_schema::lookup_primitive;

use crate::{
    config::ParserConfig,
    types::{Metadata, ResolvedType, SchemaKind},
};

/// Resolve a field type token against the owning schema.
///
/// Rules, first match wins:
/// 1. known primitives resolve to their table entry; an explicit package on
///    them is ignored,
/// 2. unqualified types inside a service half belong to the owning package,
/// 3. a qualifier equal to the owning package is a same-package reference,
/// 4. any other qualifier is a cross-package reference,
/// 5. unqualified common-vocabulary types resolve to the common package,
///    unless the schema already lives there,
/// 6. everything else is a same-package type.
pub fn resolve_type(
    type_token: &str,
    package: Option<&str>,
    meta: &Metadata,
    config: &ParserConfig,
) -> ResolvedType {
    if let Some(primitive) = lookup_primitive(type_token) {
        return ResolvedType {
            name:         primitive.canonical.to_string(),
            package:      primitive.package.map(str::to_string),
            same_package: false,
            alias:        primitive.package.map(str::to_string),
            primitive:    Some(primitive),
        };
    }

    match package {
        None if meta.kind != SchemaKind::Message => same_package(type_token, meta, config),
        Some(package) if package == meta.package => same_package(type_token, meta, config),
        Some(package) => foreign(type_token, package, config),
        None if config.is_common_type(type_token) && meta.package != config.common_package => {
            foreign(type_token, &config.common_package, config)
        }
        None => same_package(type_token, meta, config),
    }
}

/// Messages refer to their siblings unqualified; service halves live in a
/// different module and have to import the package's messages.
fn same_package(type_token: &str, meta: &Metadata, config: &ParserConfig) -> ResolvedType {
    let alias = match meta.kind {
        SchemaKind::Message => None,
        SchemaKind::Request | SchemaKind::Response => Some(config.import_alias(&meta.package)),
    };
    ResolvedType {
        name:         type_token.to_string(),
        package:      Some(meta.package.clone()),
        same_package: true,
        alias,
        primitive:    None,
    }
}

fn foreign(type_token: &str, package: &str, config: &ParserConfig) -> ResolvedType {
    ResolvedType {
        name:         type_token.to_string(),
        package:      Some(package.to_string()),
        same_package: false,
        alias:        Some(config.import_alias(package)),
        primitive:    None,
    }
}
