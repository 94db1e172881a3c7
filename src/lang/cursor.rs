use super::Column;

/// ## Position within a single input line
///
/// Only moves forward, except when the mnemonic matcher rolls
/// back a failed attempt with [`Cursor::reset`].
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(line: &'a str) -> Cursor<'a> {
        Cursor { line, pos: 0 }
    }

    pub fn line(&self) -> &'a str {
        self.line
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn reset(&mut self, pos: usize) {
        debug_assert!(pos <= self.pos);
        self.pos = pos;
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    pub fn rest(&self) -> &'a str {
        &self.line[self.pos..]
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.line.len()
    }

    pub fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if !ch.is_ascii_whitespace() {
                break;
            }
            self.bump();
        }
    }

    pub fn column_from(&self, start: usize) -> Column {
        start..self.pos
    }
}
