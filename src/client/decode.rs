//! Response Decoder
//!
//! Parses the TSV response body into typed phrases. One phrase per line,
//! seven tab-separated fields per line:
//!
//! ```text
//! <tokens> \t <matchCount> \t <volumeCount> \t <firstYear> \t <lastYear> \t <id> \t <score>
//! ```
//!
//! where `<tokens>` is a space-separated list of `<text>_<tagDigit>` terms.
//! Malformed input is surfaced as an error naming the offending line and
//! field; nothing is silently dropped or defaulted.

use crate::error::{Error, Result};
use crate::model::phrase::{Phrase, Tag, Token};

/// Decodes a full response body. An empty body yields an empty vector;
/// phrase order follows line order.
pub(crate) fn decode_body(body: &str) -> Result<Vec<Phrase>> {
    body.lines()
        .enumerate()
        .map(|(index, line)| decode_line(line, index + 1))
        .collect()
}

/// Decodes one response line. `line_number` is 1-based and used only for
/// error messages.
fn decode_line(line: &str, line_number: usize) -> Result<Phrase> {
    let fields: Vec<&str> = line.split('\t').collect();
    // Fields beyond the seventh are ignored for forward compatibility.
    if fields.len() < 7 {
        return Err(Error::invalid(format!(
            "line {}: expected 7 tab-separated fields, got {}",
            line_number,
            fields.len()
        )));
    }

    let tokens = fields[0]
        .split(' ')
        .map(|term| decode_token(term, line_number))
        .collect::<Result<Vec<Token>>>()?;

    Ok(Phrase::new(
        tokens,
        parse_field(fields[1], "matchCount", line_number)?,
        parse_field(fields[2], "volumeCount", line_number)?,
        parse_field(fields[3], "firstYear", line_number)?,
        parse_field(fields[4], "lastYear", line_number)?,
        parse_field(fields[5], "id", line_number)?,
        parse_field(fields[6], "score", line_number)?,
    ))
}

/// Decodes a `<text>_<tagDigit>` wire term.
///
/// The tag digit is the term's final character and the separator before it
/// must be an underscore. Splitting is anchored at the right because token
/// text may itself contain underscores as ordinary characters.
fn decode_token(term: &str, line_number: usize) -> Result<Token> {
    let mut chars = term.char_indices().rev();

    let digit = match chars.next().and_then(|(_, c)| c.to_digit(10)) {
        Some(digit) => digit,
        None => {
            return Err(Error::invalid(format!(
                "line {}: term {:?} does not end with a tag digit",
                line_number, term
            )));
        }
    };

    let text_end = match chars.next() {
        Some((index, '_')) => index,
        _ => {
            return Err(Error::invalid(format!(
                "line {}: term {:?} is missing the '_' tag separator",
                line_number, term
            )));
        }
    };

    if text_end == 0 {
        return Err(Error::invalid(format!(
            "line {}: term {:?} has empty token text",
            line_number, term
        )));
    }

    let tag = Tag::from_ordinal(digit)
        .map_err(|e| Error::invalid(format!("line {}: term {:?}: {}", line_number, term, e)))?;

    Ok(Token::new(term[..text_end].to_string(), tag))
}

fn parse_field<T: std::str::FromStr>(raw: &str, name: &str, line_number: usize) -> Result<T> {
    raw.parse().map_err(|_| {
        Error::invalid(format!(
            "line {}: malformed {} field: {:?}",
            line_number, name, raw
        ))
    })
}
