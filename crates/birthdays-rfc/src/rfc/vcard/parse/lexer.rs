//! Physical and logical lines of a vCard document.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::rfc::vcard::core::VCardParameter;

/// Joins folded lines (RFC 6350 §3.2).
///
/// A line break followed by one space or tab is removed together with that
/// whitespace character. CRLF and bare LF are both accepted; the result uses
/// LF only.
#[must_use]
pub fn unfold(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for (i, physical) in input.split('\n').enumerate() {
        let physical = physical.strip_suffix('\r').unwrap_or(physical);
        match physical.strip_prefix([' ', '\t']) {
            Some(continuation) if i > 0 => out.push_str(continuation),
            _ => {
                if i > 0 {
                    out.push('\n');
                }
                out.push_str(physical);
            }
        }
    }

    out
}

/// Returns the non-blank logical lines of unfolded input.
#[must_use]
pub fn split_lines(input: &str) -> Vec<String> {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.trim_end_matches('\r').to_string())
        .collect()
}

/// One logical line split into `[group.]name[;param]*:value`.
#[derive(Debug, Clone)]
pub struct ContentLine {
    pub group: Option<String>,
    /// Uppercased.
    pub name: String,
    pub params: Vec<VCardParameter>,
    /// Everything after the first unquoted colon, untouched.
    pub value: String,
}

impl ContentLine {
    /// ## Errors
    /// Returns [`ParseErrorKind::InvalidPropertyName`] when there is no value
    /// separator or the name is not `[A-Za-z0-9-]+`, and
    /// [`ParseErrorKind::InvalidParameter`] for a `=value` without a name.
    pub fn parse(line: &str, line_num: usize) -> ParseResult<Self> {
        let (separators, colon) = scan(line).ok_or_else(|| {
            ParseError::new(
                ParseErrorKind::InvalidPropertyName,
                line_num,
                "missing colon separator",
            )
        })?;

        let head = &line[..colon];
        let name_end = separators.first().copied().unwrap_or(colon);
        let (group, name) = split_group(&head[..name_end]);

        if !is_name(name) {
            return Err(ParseError::new(
                ParseErrorKind::InvalidPropertyName,
                line_num,
                format!("invalid property name: {name}"),
            ));
        }

        let params = separators
            .iter()
            .enumerate()
            .map(|(i, &start)| {
                let end = separators.get(i + 1).copied().unwrap_or(colon);
                &head[start + 1..end]
            })
            .filter(|segment| !segment.is_empty())
            .map(|segment| parse_parameter(segment, line_num))
            .collect::<ParseResult<Vec<_>>>()?;

        Ok(Self {
            group: group.map(String::from),
            name: name.to_ascii_uppercase(),
            params,
            value: line[colon + 1..].to_string(),
        })
    }
}

/// Shorthand for [`ContentLine::parse`].
///
/// ## Errors
/// See [`ContentLine::parse`].
pub fn parse_content_line(line: &str, line_num: usize) -> ParseResult<ContentLine> {
    ContentLine::parse(line, line_num)
}

/// Byte offsets of the unquoted `;` before the value and of the value `:`.
fn scan(line: &str) -> Option<(Vec<usize>, usize)> {
    let mut in_quotes = false;
    let mut separators = Vec::new();

    for (i, b) in line.bytes().enumerate() {
        match b {
            b'"' => in_quotes = !in_quotes,
            b';' if !in_quotes => separators.push(i),
            b':' if !in_quotes => return Some((separators, i)),
            _ => {}
        }
    }

    None
}

fn is_name(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

/// `item1.BDAY` -> (`item1`, `BDAY`). An invalid prefix is left on the name.
fn split_group(s: &str) -> (Option<&str>, &str) {
    match s.split_once('.') {
        Some((group, name)) if is_name(group) => (Some(group), name),
        _ => (None, s),
    }
}

/// `NAME=v1,"v,2"` or a bare vCard 2.1 value such as `HOME` (read as `TYPE`).
fn parse_parameter(segment: &str, line_num: usize) -> ParseResult<VCardParameter> {
    let Some((name, values)) = segment.split_once('=') else {
        return Ok(VCardParameter::multi("TYPE", split_values(segment)));
    };

    if name.is_empty() {
        return Err(ParseError::new(
            ParseErrorKind::InvalidParameter,
            line_num,
            "missing parameter name",
        ));
    }

    Ok(VCardParameter::multi(name, split_values(values)))
}

/// Splits on unquoted commas, drops the quotes and decodes RFC 6868 carets.
fn split_values(raw: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in raw.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => values.push(decode_carets(&std::mem::take(&mut current))),
            _ => current.push(c),
        }
    }
    values.push(decode_carets(&current));

    values
}

fn decode_carets(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        let decoded = match (c, chars.peek()) {
            ('^', Some('n')) => '\n',
            ('^', Some('\'')) => '"',
            ('^', Some('^')) => '^',
            _ => {
                out.push(c);
                continue;
            }
        };
        chars.next();
        out.push(decoded);
    }

    out
}
