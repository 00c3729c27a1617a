//! Conversion from Life Lexicon pictures to seeds.
//!
//! Lexicon entries draw patterns as text, one row per line, with `O` for a
//! live cell and `.` for a dead one:
//!
//! ```text
//! .O.
//! ..O
//! OOO
//! ```

use crate::compute::Coordinate;

use super::Seed;

/// Character marking a live cell in a lexicon picture.
pub const LEXICON_LIVE: char = 'O';

/// Character marking a dead cell in a lexicon picture.
pub const LEXICON_DEAD: char = '.';

/// Convert a lexicon picture into a seed.
///
/// Each line is one row. Within a line only `O` and `.` occupy a column; any
/// other character is skipped. The picture is shifted down by `blank_rows`
/// and right by `blank_columns`, which leaves room for patterns that grow up
/// or to the left. Cells come out in reading order.
pub fn parse_lexicon(text: &str, blank_columns: usize, blank_rows: usize) -> Seed {
    let cells = text.lines().enumerate().flat_map(|(row, line)| {
        line.chars()
            .filter(|&c| c == LEXICON_LIVE || c == LEXICON_DEAD)
            .enumerate()
            .filter(|&(_, c)| c == LEXICON_LIVE)
            .map(move |(column, _)| Coordinate::new(row + blank_rows, column + blank_columns))
    });
    Seed::from_cells(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glider() {
        let seed = parse_lexicon(".O.\n..O\nOOO\n", 0, 0);
        assert_eq!(
            seed.cells(),
            vec![
                Coordinate::new(0, 1),
                Coordinate::new(1, 2),
                Coordinate::new(2, 0),
                Coordinate::new(2, 1),
                Coordinate::new(2, 2)
            ]
        );
    }

    #[test]
    fn test_offsets() {
        let seed = parse_lexicon("O\n", 3, 5);
        assert_eq!(seed.cells(), vec![Coordinate::new(5, 3)]);
    }

    #[test]
    fn test_other_characters_skipped() {
        // Lexicon text is usually indented and may carry CRLF endings.
        let seed = parse_lexicon("\t.O\r\n  O.O\r\n", 0, 0);
        assert_eq!(
            seed.cells(),
            vec![
                Coordinate::new(0, 1),
                Coordinate::new(1, 0),
                Coordinate::new(1, 2)
            ]
        );
    }

    #[test]
    fn test_blank_lines_still_count_as_rows() {
        let seed = parse_lexicon("O\n\nO", 0, 0);
        assert_eq!(
            seed.cells(),
            vec![Coordinate::new(0, 0), Coordinate::new(2, 0)]
        );
    }

    #[test]
    fn test_empty_picture() {
        assert!(parse_lexicon("", 1, 1).cells().is_empty());
        assert!(parse_lexicon("...\n...", 0, 0).cells().is_empty());
    }

    #[test]
    fn test_writes_coordinate_list() {
        let seed = parse_lexicon("OO\n", 1, 2);
        let mut out = Vec::new();
        seed.write_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "2\n2 1\n2 2\n");
    }
}
