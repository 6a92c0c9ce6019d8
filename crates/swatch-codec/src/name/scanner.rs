//! Bracket-group scanner.
//!
//! Walks a name one character at a time and yields every complete
//! `[@key:value]` group. Text outside groups is skipped. A backslash makes
//! the next character literal: it can neither open nor close a group, and
//! the backslash itself is dropped. Keys and values are trimmed, but an
//! escaped whitespace character is never trimmed away.

/// One `[@key:value]` group, with the key and value trimmed and unescaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketField {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Not inside any group.
    Outside,
    /// Just read `[`; only `@` continues the group.
    Opened,
    /// Reading the key, up to `:`.
    Key,
    /// Reading the value, up to `]`.
    Value,
}

/// Key or value text, remembering which part of it was escaped.
#[derive(Debug, Default)]
struct Buffer {
    text: String,
    /// Byte offset of the first escaped character.
    first_escaped: Option<usize>,
    /// Byte offset just past the last escaped character.
    escaped_end: usize,
}

impl Buffer {
    fn push(&mut self, ch: char, escaped: bool) {
        if escaped {
            self.first_escaped.get_or_insert(self.text.len());
            self.escaped_end = self.text.len() + ch.len_utf8();
        }
        self.text.push(ch);
    }

    fn clear(&mut self) {
        *self = Self::default();
    }

    /// The text without unescaped leading and trailing whitespace.
    fn trimmed(&self) -> &str {
        let lead = self.text.len() - self.text.trim_start().len();
        let start = self.first_escaped.map_or(lead, |first| lead.min(first));
        let end = self.text.trim_end().len().max(self.escaped_end);
        if start >= end {
            ""
        } else {
            &self.text[start..end]
        }
    }
}

#[derive(Debug)]
struct Scanner {
    state: State,
    escaped: bool,
    key: Buffer,
    value: Buffer,
    fields: Vec<BracketField>,
}

impl Scanner {
    fn new() -> Self {
        Self {
            state: State::Outside,
            escaped: false,
            key: Buffer::default(),
            value: Buffer::default(),
            fields: Vec::new(),
        }
    }

    fn open(&mut self) {
        self.state = State::Opened;
        self.key.clear();
        self.value.clear();
    }

    fn close(&mut self) {
        let key = self.key.trimmed();
        if key.is_empty() {
            tracing::debug!(value = %self.value.text, "dropping bracket group with empty key");
        } else {
            self.fields.push(BracketField {
                key: key.to_string(),
                value: self.value.trimmed().to_string(),
            });
        }
        self.state = State::Outside;
    }

    fn push(&mut self, ch: char, escaped: bool) {
        match self.state {
            State::Key => self.key.push(ch, escaped),
            State::Value => self.value.push(ch, escaped),
            // `[` followed by an escaped character is not a group.
            State::Opened => self.state = State::Outside,
            State::Outside => {}
        }
    }

    fn step(&mut self, ch: char) {
        if self.escaped {
            self.escaped = false;
            self.push(ch, true);
            return;
        }

        match (self.state, ch) {
            (_, '\\') => self.escaped = true,
            // An unescaped `[` always starts over, abandoning any open group.
            (_, '[') => self.open(),
            (State::Opened, '@') => self.state = State::Key,
            (State::Opened, _) => self.state = State::Outside,
            (State::Key, ':') => self.state = State::Value,
            (State::Key, ']') => {
                tracing::debug!(key = %self.key.text, "dropping bracket group without ':'");
                self.state = State::Outside;
            }
            (State::Value, ']') => self.close(),
            (State::Key | State::Value, _) => self.push(ch, false),
            (State::Outside, _) => {}
        }
    }

    fn finish(self) -> Vec<BracketField> {
        if matches!(self.state, State::Key | State::Value) {
            tracing::debug!(key = %self.key.text, "dropping unterminated bracket group");
        }
        self.fields
    }
}

/// Scan `input` for `[@key:value]` groups, in order of appearance.
pub fn scan(input: &str) -> Vec<BracketField> {
    let mut scanner = Scanner::new();
    for ch in input.chars() {
        scanner.step(ch);
    }
    scanner.finish()
}

/// Escape a value so [`scan`] reads it back verbatim.
///
/// `\`, `[` and `]` are always escaped, as is whitespace at either end.
pub fn escape(value: &str) -> String {
    escape_with(value, |ch| matches!(ch, '\\' | '[' | ']'))
}

/// Like [`escape`], but also escapes `:` so the text can be used as a key.
pub fn escape_key(key: &str) -> String {
    escape_with(key, |ch| matches!(ch, '\\' | '[' | ']' | ':'))
}

fn escape_with(text: &str, special: impl Fn(char) -> bool) -> String {
    let lead = text.len() - text.trim_start().len();
    let trail = text.trim_end().len().max(lead);
    let mut out = String::with_capacity(text.len());
    for (i, ch) in text.char_indices() {
        if special(ch) || i < lead || i >= trail {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}
