//! Miscellaneous project utilities.

use std::fmt::{self, Formatter};
use std::iter::Iterator;

/// Format `cols * rows` characters into a grid headed by column letters,
/// with a 1-based line number before each row.
/// `piece_iter` must yield exactly `cols * rows` items.
pub fn format_grid<T: Iterator<Item = char>>(
    mut piece_iter: T,
    cols: usize,
    rows: usize,
    f: &mut Formatter,
) -> fmt::Result {
    write!(f, "   ")?;
    for letter in (b'A'..).take(cols) {
        write!(f, " {}", letter as char)?;
    }

    for row in 0..rows {
        write!(f, "\n{:>3}", row + 1)?;
        for _ in 0..cols {
            write!(f, " {}", piece_iter.next().ok_or(fmt::Error)?)?;
        }
    }

    match piece_iter.next() {
        None => Ok(()),
        _ => Err(fmt::Error),
    }
}
