//! Console move source: turns a typed line into a ply request
//!
//! Accepted line format is `RC X RC`, e.g. `21 M 32`: source row and
//! column, a one-letter command, destination row and column.

use checkers_core::Coord;

/// Parsed line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Line {
    /// Blank line or `#` comment
    Skip,
    Help,
    Ply(Request),
}

/// A ply as typed by the user, not yet validated by the engine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Request {
    pub from: Coord,
    pub to: Coord,
    pub tag: char,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("wrong format, expected `RC M RC` or `RC C RC` (type h for help)")]
pub struct FormatError;

pub const HELP: &str = "\
Movement: RC M RC   e.g. 21 M 32
Capture:  RC C RC   e.g. 32 C 43 (jumps the piece on 43)
Rows and columns are digits 0-7.";

pub fn parse_line(line: &str) -> Result<Line, FormatError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(Line::Skip);
    }
    if line.eq_ignore_ascii_case("h") {
        return Ok(Line::Help);
    }

    let chars: Vec<char> = line.chars().collect();
    match chars.as_slice() {
        &[r0, c0, ' ', tag, ' ', r1, c1] if tag.is_alphanumeric() => Ok(Line::Ply(Request {
            from: Coord::new(digit(r0)?, digit(c0)?),
            to: Coord::new(digit(r1)?, digit(c1)?),
            tag,
        })),
        _ => Err(FormatError),
    }
}

fn digit(c: char) -> Result<i8, FormatError> {
    c.to_digit(10).map(|d| d as i8).ok_or(FormatError)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move() {
        let line = parse_line("21 M 32\n").unwrap();
        assert_eq!(
            line,
            Line::Ply(Request {
                from: Coord::new(2, 1),
                to: Coord::new(3, 2),
                tag: 'M',
            })
        );
    }

    #[test]
    fn test_digits_out_of_board_still_parse() {
        // Range is the engine's call, not the parser's
        let Line::Ply(req) = parse_line("98 c 07").unwrap() else {
            panic!("expected a ply");
        };
        assert_eq!(req.from, Coord::new(9, 8));
        assert_eq!(req.tag, 'c');
    }

    #[test]
    fn test_unknown_tag_is_passed_through() {
        let Line::Ply(req) = parse_line("21 x 32").unwrap() else {
            panic!("expected a ply");
        };
        assert_eq!(req.tag, 'x');
    }

    #[test]
    fn test_help_and_skip() {
        assert_eq!(parse_line("h"), Ok(Line::Help));
        assert_eq!(parse_line(" H "), Ok(Line::Help));
        assert_eq!(parse_line(""), Ok(Line::Skip));
        assert_eq!(parse_line("# opening"), Ok(Line::Skip));
    }

    #[test]
    fn test_malformed() {
        for bad in ["21M32", "2 M 32", "21 M 3a", "21  M 32", "21 - 32", "21 M 32 x", "help"] {
            assert_eq!(parse_line(bad), Err(FormatError), "{:?}", bad);
        }
    }
}
