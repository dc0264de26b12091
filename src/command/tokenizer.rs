//! Delimiter based argument splitting.
//!
//! The splitter is deliberately literal: consecutive delimiters yield empty
//! tokens, and tokens are not trimmed individually. A section holding `k`
//! delimiters always produces `k + 1` tokens.

use super::args::Args;
use super::error::Error;

/// Split an argument section into tokens.
///
/// The section is trimmed of surrounding whitespace first. An empty
/// section fails with [`Error::NoArgs`]; a section with more than
/// [`MAX_ARGS`](super::MAX_ARGS) tokens fails with [`Error::ArgumentOverflow`].
///
/// # Examples
///
/// ```rust
/// use serialcmd::command::tokenizer::split;
///
/// let args = split(" 3,,200 ", ',').unwrap();
/// assert_eq!(args.as_slice(), &["3", "", "200"]);
/// ```
pub fn split(section: &str, delimiter: char) -> Result<Args<'_>, Error> {
    let section = trim(section);
    if section.is_empty() {
        return Err(Error::NoArgs);
    }

    let mut args = Args::new();
    for token in section.split(delimiter) {
        args.push(token)?;
    }
    Ok(args)
}

/// Trim surrounding spaces and the control characters `\t` through `\r`,
/// vertical tab included.
pub(crate) fn trim(text: &str) -> &str {
    text.trim_matches(|c: char| matches!(c, ' ' | '\t'..='\r'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::MAX_ARGS;

    #[test]
    fn empty_section_has_no_args() {
        assert_eq!(split("", ' '), Err(Error::NoArgs));
        assert_eq!(split(" \t\r\n", ' '), Err(Error::NoArgs));
        assert_eq!(split("\x0b\x0c", ' '), Err(Error::NoArgs));
    }

    #[test]
    fn vertical_tab_is_trimmed() {
        assert_eq!(trim("\x0bset on\x0b\r\n"), "set on");
        let args = split("\x0b1 2\x0b", ' ').unwrap();
        assert_eq!(args.as_slice(), &["1", "2"]);
    }

    #[test]
    fn consecutive_delimiters_are_kept() {
        let args = split("a  b", ' ').unwrap();
        assert_eq!(args.as_slice(), &["a", "", "b"]);
    }

    #[test]
    fn tokens_are_not_trimmed() {
        let args = split("a , b", ',').unwrap();
        assert_eq!(args.as_slice(), &["a ", " b"]);
    }

    #[test]
    fn trailing_delimiter_yields_empty_token() {
        let args = split("a,b,", ',').unwrap();
        assert_eq!(args.as_slice(), &["a", "b", ""]);
    }

    #[test]
    fn capacity_is_enforced() {
        assert_eq!(split("0 1 2 3 4 5 6 7 8 9", ' ').map(|a| a.len()), Ok(MAX_ARGS));
        assert_eq!(split("0 1 2 3 4 5 6 7 8 9 10", ' '), Err(Error::ArgumentOverflow));
    }
}
