use std::iter::FusedIterator;

use crate::model::Marker;
use crate::transform::cursor::Cursor;

/// Lazy left-to-right search for marker tokens.
///
/// After a match the search resumes one character past the match start, so
/// every marker separated from the previous one by at least a byte is found.
#[derive(Debug, Clone)]
pub struct MarkerScanner<'a> {
    cursor: Cursor<'a>,
    token: &'a str,
    next_index: usize,
    done: bool,
}

impl<'a> MarkerScanner<'a> {
    pub fn new(text: &'a str, token: &'a str) -> Self {
        Self { cursor: Cursor::new(text), token, next_index: 0, done: token.is_empty() }
    }
}

impl Iterator for MarkerScanner<'_> {
    type Item = Marker;

    fn next(&mut self) -> Option<Marker> {
        if self.done {
            return None;
        }
        let Some(offset) = self.cursor.find(self.token) else {
            self.done = true;
            return None;
        };

        let step = self.token.chars().next().map_or(1, char::len_utf8);
        if self.cursor.seek(offset + step).is_none() {
            self.done = true;
        }

        let marker = Marker { index: self.next_index, offset };
        self.next_index += 1;
        Some(marker)
    }
}

impl FusedIterator for MarkerScanner<'_> {}
