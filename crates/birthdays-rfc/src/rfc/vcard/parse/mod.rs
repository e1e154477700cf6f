//! vCard parsing (RFC 6350).
//!
//! ## Features
//!
//! - Supports vCard 2.1, 3.0 and 4.0 headers
//! - Handles line folding/unfolding
//! - Parses property groups (item1.BDAY)
//! - RFC 6868 caret encoding for parameters
//! - Skips content lines it cannot read instead of rejecting the document

mod error;
mod lexer;
mod parser;
mod values;


pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use lexer::{ContentLine, parse_content_line, split_lines, unfold};
pub use parser::{parse, parse_single};
pub use values::{split_component, split_structured, unescape_text};
