//! Line-level encoding and decoding of delimited records.
//!
//! One record is one line of comma-separated fields. On encode, a field
//! containing the delimiter or a quote is wrapped in quotes with internal
//! quotes doubled; everything else is written bare. On decode the full
//! quoted form is understood regardless of which fields the writer chose to
//! quote, so hand-edited files with unnecessary quoting still load.
//!
//! Records are strictly line-oriented: line breaks inside a field are
//! flattened to spaces on encode. A quote appearing inside an unquoted
//! field is taken literally on decode; the writer never produces that form.

/// The field delimiter.
pub const DELIMITER: char = ',';

const QUOTE: char = '"';

/// Errors produced while splitting or parsing a persisted line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The line did not contain the expected number of fields.
    #[error("expected {expected} fields, found {found}")]
    FieldCount {
        /// The arity of the record type.
        expected: usize,
        /// The number of fields present in the line.
        found: usize,
    },

    /// A quoted field was still open at the end of the line.
    #[error("unterminated quoted field")]
    UnterminatedQuote,

    /// Data followed the closing quote of a quoted field.
    #[error("unexpected data after closing quote")]
    DanglingQuote,

    /// A field failed its typed parse.
    #[error("invalid {field}: {value:?}")]
    InvalidField {
        /// Name of the offending field.
        field: &'static str,
        /// The raw field content.
        value: String,
    },
}

/// Encode fields into one line.
#[must_use]
pub fn encode_line(fields: &[String]) -> String {
    let mut line = String::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            line.push(DELIMITER);
        }
        encode_field(field, &mut line);
    }
    line
}

fn encode_field(field: &str, out: &mut String) {
    if field.contains(DELIMITER) || field.contains(QUOTE) {
        out.push(QUOTE);
        for ch in field.chars() {
            match ch {
                QUOTE => {
                    out.push(QUOTE);
                    out.push(QUOTE);
                }
                '\n' | '\r' => out.push(' '),
                other => out.push(other),
            }
        }
        out.push(QUOTE);
    } else {
        for ch in field.chars() {
            match ch {
                '\n' | '\r' => out.push(' '),
                other => out.push(other),
            }
        }
    }
}

/// Split one line into its fields, reversing quoting and quote-doubling.
///
/// # Errors
///
/// Returns [`CodecError::UnterminatedQuote`] if a quoted field never closes
/// and [`CodecError::DanglingQuote`] if anything other than a delimiter
/// follows a closing quote.
pub fn split_line(line: &str) -> Result<Vec<String>, CodecError> {
    let mut fields = Vec::new();
    let mut chars = line.chars().peekable();

    loop {
        let mut field = String::new();

        if chars.peek() == Some(&QUOTE) {
            chars.next();
            loop {
                match chars.next() {
                    Some(QUOTE) => {
                        if chars.peek() == Some(&QUOTE) {
                            chars.next();
                            field.push(QUOTE);
                        } else {
                            break;
                        }
                    }
                    Some(ch) => field.push(ch),
                    None => return Err(CodecError::UnterminatedQuote),
                }
            }
            fields.push(field);
            match chars.next() {
                None => return Ok(fields),
                Some(DELIMITER) => {}
                Some(_) => return Err(CodecError::DanglingQuote),
            }
        } else {
            loop {
                match chars.next() {
                    None => {
                        fields.push(field);
                        return Ok(fields);
                    }
                    Some(DELIMITER) => {
                        fields.push(field);
                        break;
                    }
                    Some(ch) => field.push(ch),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn plain_fields_roundtrip() {
        let input = fields(&["P1", "Basic", "10.00", "1"]);
        let line = encode_line(&input);
        assert_eq!(line, "P1,Basic,10.00,1");
        assert_eq!(split_line(&line).unwrap(), input);
    }

    #[test]
    fn embedded_delimiter_is_quoted() {
        let input = fields(&["F1", "Lockers, showers and sauna"]);
        let line = encode_line(&input);
        assert_eq!(line, "F1,\"Lockers, showers and sauna\"");
        assert_eq!(split_line(&line).unwrap(), input);
    }

    #[test]
    fn embedded_quote_is_doubled() {
        let input = fields(&["F2", "the \"good\" treadmill"]);
        let line = encode_line(&input);
        assert_eq!(line, "F2,\"the \"\"good\"\" treadmill\"");
        assert_eq!(split_line(&line).unwrap(), input);
    }

    #[test]
    fn empty_fields_survive() {
        let input = fields(&["a", "", "c", ""]);
        let line = encode_line(&input);
        assert_eq!(line, "a,,c,");
        assert_eq!(split_line(&line).unwrap(), input);
    }

    #[test]
    fn line_breaks_are_flattened() {
        let input = fields(&["one\ntwo", "three\r\nfour, five"]);
        let line = encode_line(&input);
        assert_eq!(line, "one two,\"three  four, five\"");
    }

    #[test]
    fn unnecessary_quoting_still_decodes() {
        assert_eq!(
            split_line("\"P1\",\"Basic\"").unwrap(),
            fields(&["P1", "Basic"])
        );
    }

    #[test]
    fn unterminated_quote_is_an_error() {
        assert_eq!(
            split_line("F1,\"half open"),
            Err(CodecError::UnterminatedQuote)
        );
    }

    #[test]
    fn data_after_closing_quote_is_an_error() {
        assert_eq!(split_line("\"a\"b,c"), Err(CodecError::DanglingQuote));
    }

    #[test]
    fn stray_quote_inside_bare_field_is_literal() {
        assert_eq!(split_line("a\"b,c").unwrap(), fields(&["a\"b", "c"]));
    }

    #[test]
    fn accepted_line_reencodes_to_normalized_form() {
        let line = "M1,\"Jones, Ada\",ada@example.com";
        let decoded = split_line(line).unwrap();
        assert_eq!(encode_line(&decoded), line);
    }
}
