use peekmore::{PeekMore, PeekMoreIterator};

use super::Location;

/// Character cursor over one whitespace-stripped input.
///
/// There is no token stream: the grammar pulls characters straight from here
/// and classifies them as it goes.
pub struct Cursor {
    char_stream: PeekMoreIterator<std::vec::IntoIter<char>>,
    pos: usize,
    len: usize,
}

impl Cursor {
    pub fn new(buffer: &str) -> Self {
        let chars = buffer.chars().collect::<Vec<_>>();
        let len = chars.len();
        Self {
            char_stream: chars.into_iter().peekmore(),
            pos: 0,
            len,
        }
    }

    pub fn peek(&mut self) -> Option<char> {
        self.char_stream.peek().copied()
    }

    pub fn consume(&mut self) -> Option<char> {
        let ch = self.char_stream.next();
        if ch.is_some() {
            self.pos += 1;
        }
        debug_assert!(self.pos <= self.len);
        ch
    }

    /// Consumes the maximal run of characters accepted by `accept`.
    pub fn eat_while(&mut self, accept: impl Fn(char) -> bool) -> String {
        let mut run = String::new();
        while let Some(ch) = self.peek() {
            if !accept(ch) {
                break;
            }
            run.push(ch);
            self.consume();
        }
        run
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn location(&self) -> Location {
        Location::at(self.pos)
    }
}
