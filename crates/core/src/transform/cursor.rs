/// Forward-only position over a borrowed source string.
///
/// Positions are byte offsets. Every operation that could step outside the
/// text (or off a char boundary) returns `None` instead of panicking.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    text: &'a str,
    position: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.text.len()
    }

    /// Remaining text from the current position.
    pub fn rest(&self) -> &'a str {
        self.text.get(self.position..).unwrap_or("")
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Move to an absolute position. Fails if it is past the end or not on a char boundary.
    pub fn seek(&mut self, position: usize) -> Option<usize> {
        if position > self.text.len() || !self.text.is_char_boundary(position) {
            return None;
        }
        self.position = position;
        Some(position)
    }

    /// Move forward by `bytes`.
    pub fn advance(&mut self, bytes: usize) -> Option<usize> {
        let target = self.position.checked_add(bytes)?;
        self.seek(target)
    }

    /// Consume characters while `pred` holds; returns the new position.
    pub fn skip_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let rest = self.rest();
        let skipped = rest.char_indices().find(|&(_, c)| !pred(c)).map_or(rest.len(), |(i, _)| i);
        self.position += skipped;
        self.position
    }

    /// Absolute offset of the next occurrence of `needle` at or after the cursor.
    ///
    /// Does not move the cursor.
    pub fn find(&self, needle: &str) -> Option<usize> {
        self.rest().find(needle).map(|i| self.position + i)
    }

    /// Borrow `start..end` of the underlying text.
    pub fn slice(&self, start: usize, end: usize) -> Option<&'a str> {
        if start > end {
            return None;
        }
        self.text.get(start..end)
    }
}
