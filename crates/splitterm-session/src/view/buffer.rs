//! LineBuffer: bounded line history fed with raw terminal output.

use std::borrow::Cow;
use std::collections::VecDeque;

use tracing::trace;
use vte::Perform;

/// Completed lines plus the line currently being written.
///
/// Output runs through a [`vte::Parser`]; only printable characters and a
/// few control bytes reach the history, so it can be searched as plain text.
/// Once `max_lines` completed lines are held, each new line evicts the
/// oldest.
pub(crate) struct LineBuffer {
    parser: vte::Parser,
    lines: Lines,
}

/// The `Perform` side of the buffer.
struct Lines {
    done: VecDeque<String>,
    current: String,
    max_lines: usize,
    evicted: usize,
}

impl Lines {
    fn finish_line(&mut self) {
        let line = std::mem::take(&mut self.current);
        if self.max_lines == 0 {
            self.evicted += 1;
            return;
        }
        while self.done.len() >= self.max_lines {
            self.done.pop_front();
            self.evicted += 1;
        }
        self.done.push_back(line);
    }
}

impl Perform for Lines {
    fn print(&mut self, c: char) {
        self.current.push(c);
    }

    fn execute(&mut self, byte: u8) {
        match byte {
            0x08 => {
                self.current.pop();
            }
            0x09 => self.current.push('\t'),
            0x0A..=0x0C => self.finish_line(),
            _ => trace!("ignored control byte 0x{byte:02X}"),
        }
    }
}

impl LineBuffer {
    pub fn new(max_lines: usize) -> Self {
        Self {
            parser: vte::Parser::new(),
            lines: Lines {
                done: VecDeque::new(),
                current: String::new(),
                max_lines,
                evicted: 0,
            },
        }
    }

    /// Append output. Returns how many old lines were evicted.
    pub fn feed(&mut self, data: &[u8]) -> usize {
        self.parser.advance(&mut self.lines, data);
        std::mem::take(&mut self.lines.evicted)
    }

    /// Number of searchable lines, counting a non-empty current line.
    pub fn len(&self) -> usize {
        self.lines.done.len() + usize::from(!self.lines.current.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn line(&self, index: usize) -> Option<Cow<'_, str>> {
        let lines = &self.lines;
        match lines.done.get(index) {
            Some(line) => Some(Cow::Borrowed(line.as_str())),
            None if index == lines.done.len() && !lines.current.is_empty() => {
                Some(Cow::Borrowed(lines.current.as_str()))
            }
            None => None,
        }
    }

    /// Every searchable line, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = Cow<'_, str>> {
        (0..self.len()).filter_map(|ix| self.line(ix))
    }

    pub fn clear(&mut self) {
        self.lines.done.clear();
        self.lines.current.clear();
        self.lines.evicted = 0;
        self.parser = vte::Parser::new();
    }
}
