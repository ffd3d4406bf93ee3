//! Plain-text search over the buffer.
//!
//! Offsets are counted in `char`s over the text with `\r\n` folded to `\n`,
//! which is how the text widget steps its cursor across line endings.

use iced::widget;

/// Which controls the find bar shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FindMode {
    Find,
    Replace,
}

/// A located occurrence of the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FindMatch {
    pub(crate) start: usize,
    pub(crate) len: usize,
}

/// Find bar state owned by the editor.
#[derive(Debug, Clone)]
pub(crate) struct FindState {
    mode: Option<FindMode>,
    query: String,
    replacement: String,
    input_id: widget::Id,
    current: Option<FindMatch>,
    next_from: usize,
}

impl Default for FindState {
    fn default() -> Self {
        Self {
            mode: None,
            query: String::new(),
            replacement: String::new(),
            input_id: widget::Id::unique(),
            current: None,
            next_from: 0,
        }
    }
}

impl FindState {
    /// `None` while the bar is hidden.
    pub(crate) fn mode(&self) -> Option<FindMode> {
        self.mode
    }

    pub(crate) fn query(&self) -> &str {
        &self.query
    }

    pub(crate) fn replacement(&self) -> &str {
        &self.replacement
    }

    pub(crate) fn input_id(&self) -> &widget::Id {
        &self.input_id
    }

    pub(crate) fn current(&self) -> Option<FindMatch> {
        self.current
    }

    pub(crate) fn open(&mut self, mode: FindMode) {
        self.mode = Some(mode);
    }

    /// Hide the bar; the query is kept for the next search.
    pub(crate) fn close(&mut self) -> bool {
        self.current = None;
        self.mode.take().is_some()
    }

    pub(crate) fn set_query(&mut self, query: String) {
        self.query = query;
        self.current = None;
        self.next_from = 0;
    }

    pub(crate) fn set_replacement(&mut self, replacement: String) {
        self.replacement = replacement;
    }

    /// Locate the next occurrence after the previous hit, wrapping to the
    /// top of the buffer.
    pub(crate) fn advance(&mut self, text: &str) -> Option<FindMatch> {
        let found = find_wrapping(text, &self.query, self.next_from);
        self.current = found;
        if let Some(found) = found {
            self.next_from = found.start + found.len;
        }
        found
    }

    /// Continue searching after replaced text of `inserted` chars.
    pub(crate) fn resume_after(&mut self, start: usize, inserted: usize) {
        self.current = None;
        self.next_from = start + inserted;
    }
}

/// First match at or after `from`, else the first match before it.
///
/// An all-lowercase query matches without regard to case.
pub(crate) fn find_wrapping(
    text: &str,
    query: &str,
    from: usize,
) -> Option<FindMatch> {
    if query.is_empty() {
        return None;
    }

    let haystack = search_chars(text);
    let needle: Vec<char> = query.chars().collect();
    let ignore_case = !query.chars().any(char::is_uppercase);

    let last_start = haystack.len().checked_sub(needle.len())?;
    let matches_at = |start: usize| {
        haystack[start..start + needle.len()]
            .iter()
            .zip(&needle)
            .all(|(&a, &b)| chars_equal(a, b, ignore_case))
    };

    let from = from.min(last_start + 1);
    (from..=last_start)
        .chain(0..from)
        .find(|&start| matches_at(start))
        .map(|start| FindMatch {
            start,
            len: needle.len(),
        })
}

/// Text covered by `found`, as it appears in the buffer.
pub(crate) fn matched_text(text: &str, found: FindMatch) -> String {
    search_chars(text)
        .into_iter()
        .skip(found.start)
        .take(found.len)
        .collect()
}

fn search_chars(text: &str) -> Vec<char> {
    let mut chars = Vec::with_capacity(text.len());
    let mut iter = text.chars().peekable();
    while let Some(c) = iter.next() {
        if c == '\r' && iter.peek() == Some(&'\n') {
            continue;
        }
        chars.push(c);
    }
    chars
}

fn chars_equal(a: char, b: char, ignore_case: bool) -> bool {
    a == b || (ignore_case && a.to_lowercase().eq(b.to_lowercase()))
}
