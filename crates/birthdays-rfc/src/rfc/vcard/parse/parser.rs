//! Splitting a document into cards.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::lexer::{ContentLine, parse_content_line, split_lines, unfold};
use crate::rfc::vcard::core::{VCard, VCardProperty, VCardVersion, names};

/// Reads every card of a `.vcf` document, in document order.
///
/// Lines outside `BEGIN:VCARD`/`END:VCARD` are ignored. Inside a card, lines
/// that are not valid content lines are logged and skipped.
///
/// ## Errors
/// Fails when a card is never closed, when a card starts inside another one,
/// or when a card declares a version other than 2.1, 3.0 or 4.0.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse(input: &str) -> ParseResult<Vec<VCard>> {
    let unfolded = unfold(input);
    let lines = split_lines(&unfolded);
    tracing::trace!(lines = lines.len(), "Unfolded document");

    let mut cards = Vec::new();
    // Line number of the open BEGIN and the card being filled
    let mut open: Option<(usize, VCard)> = None;

    for (idx, line) in lines.iter().enumerate() {
        let line_num = idx + 1;
        match (open.take(), Marker::of(line)) {
            (None, Some(Marker::Begin)) => open = Some((line_num, VCard::new())),
            (None, _) => tracing::trace!(line = line_num, "Skipping content outside vCard"),
            (Some((_, card)), Some(Marker::End)) => cards.push(card),
            (Some((start, _)), Some(Marker::Begin)) => {
                return Err(ParseError::new(
                    ParseErrorKind::UnexpectedEof,
                    start,
                    "vCard not closed before next BEGIN:VCARD",
                ));
            }
            (Some((start, mut card)), None) => {
                read_line(&mut card, line, line_num)?;
                open = Some((start, card));
            }
        }
    }

    if let Some((start, _)) = open {
        return Err(ParseError::new(
            ParseErrorKind::UnexpectedEof,
            start,
            "vCard not closed with END:VCARD",
        ));
    }

    tracing::debug!(count = cards.len(), "Parsed vCards");
    Ok(cards)
}

/// Reads a document expected to hold one card and returns the first.
///
/// ## Errors
/// Same as [`parse`], plus [`ParseErrorKind::UnexpectedEof`] when the
/// document has no card at all.
pub fn parse_single(input: &str) -> ParseResult<VCard> {
    parse(input)?.into_iter().next().ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::UnexpectedEof,
            1,
            "no vCard found in document",
        )
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Begin,
    End,
}

impl Marker {
    /// `BEGIN:VCARD` / `END:VCARD`, any case, surrounding blanks allowed.
    fn of(line: &str) -> Option<Self> {
        let (name, value) = line.trim().split_once(':')?;
        if !value.trim().eq_ignore_ascii_case("VCARD") {
            return None;
        }
        if name.eq_ignore_ascii_case(names::BEGIN) {
            Some(Self::Begin)
        } else if name.eq_ignore_ascii_case(names::END) {
            Some(Self::End)
        } else {
            None
        }
    }
}

fn read_line(card: &mut VCard, line: &str, line_num: usize) -> ParseResult<()> {
    let content_line = match parse_content_line(line, line_num) {
        Ok(content_line) => content_line,
        Err(e) => {
            tracing::warn!(error = %e, "Skipping unreadable content line");
            return Ok(());
        }
    };

    if content_line.name == names::VERSION {
        card.version = content_line.value.trim().parse::<VCardVersion>().map_err(|()| {
            ParseError::new(
                ParseErrorKind::UnsupportedVersion,
                line_num,
                format!("unsupported vCard version: {}", content_line.value),
            )
        })?;
    } else {
        card.add_property(VCardProperty::from(content_line));
    }

    Ok(())
}

impl From<ContentLine> for VCardProperty {
    fn from(line: ContentLine) -> Self {
        Self {
            group: line.group,
            name: line.name,
            params: line.params,
            raw_value: line.value,
        }
    }
}
