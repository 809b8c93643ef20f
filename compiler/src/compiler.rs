use crate::{
    config::ParserConfig,
    error::{IdlError, ParseResult, Partial},
    parser::SchemaParser,
    types::{Metadata, Schema, Service},
};

/// Line separating the request and response halves of a service.
pub const SERVICE_DELIMITER: &str = "---";

/// The lines of one half of a service, numbered against the whole source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    pub first_line: usize,
    pub lines:      Vec<&'a str>,
}

impl<'a> Section<'a> {
    fn starting_at(first_line: usize) -> Self {
        Section { first_line, lines: Vec::new() }
    }

    pub fn numbered(&self) -> impl Iterator<Item = (usize, &'a str)> + '_ {
        self.lines
            .iter()
            .enumerate()
            .map(move |(i, line)| (self.first_line + i, *line))
    }
}

/// Split a service source on its delimiter line. A source without a
/// delimiter is all request; a second delimiter is an error.
pub fn split_service(source: &str) -> Result<(Section<'_>, Section<'_>), IdlError> {
    let mut request = Section::starting_at(1);
    let mut response: Option<Section> = None;

    for (i, line) in source.split('\n').enumerate() {
        let number = i + 1;
        if line.trim() == SERVICE_DELIMITER {
            if response.is_some() {
                return Err(IdlError::TooManyDelimiters { line: number });
            }
            response = Some(Section::starting_at(number + 1));
            continue;
        }
        match response.as_mut() {
            Some(section) => section.lines.push(line),
            None => request.lines.push(line),
        }
    }

    let response = response
        .unwrap_or_else(|| Section::starting_at(request.first_line + request.lines.len()));
    Ok((request, response))
}

/// Parse the text of a message. On failure the error carries the schema
/// assembled up to the failing line.
pub fn parse_message(meta: Metadata, text: &str, config: &ParserConfig) -> ParseResult<Schema> {
    SchemaParser::new(meta, config).parse_text(text)
}

/// Parse the text of a service into its two halves. Each half is parsed with
/// its own comment state.
pub fn parse_service(
    package: &str,
    name: &str,
    source: &str,
    config: &ParserConfig,
) -> ParseResult<Service> {
    let (request_lines, response_lines) = split_service(source).map_err(Partial::fatal)?;
    let Service { package, name, request, response } = Service::new(package, name);

    let request = match SchemaParser::new(request.meta, config).parse_lines(request_lines.numbered()) {
        Ok(schema) => schema,
        Err(failure) => {
            return Err(failure.map(|request| Service { package, name, request, response }));
        }
    };
    match SchemaParser::new(response.meta, config).parse_lines(response_lines.numbered()) {
        Ok(response) => Ok(Service { package, name, request, response }),
        Err(failure) => Err(failure.map(|response| Service { package, name, request, response })),
    }
}
