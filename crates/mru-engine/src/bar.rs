//! Input bar with inline completion hints.
//!
//! The bar owns one fixed-length byte buffer holding everything that is
//! drawn: the banner, the typed text and the hint region. Callers draw
//! [`Bar::data`] verbatim after every mutating call; the buffer is always
//! fully blank padded, so no zone boundaries leak out.
//!
//! ```text
//! > v                              vim    vi
//! > vim                          [ vim ]  vi      ← after one cycle
//! ```
//!
//! Every operation is total. Out-of-range edits are silent no-ops.

use crate::layout::BarLayout;
use crate::store;

const BLANK: u8 = b' ';

/// Fixed-capacity input buffer with completion state.
#[derive(Debug, Clone)]
pub struct Bar {
    layout: BarLayout,
    buf: Box<[u8]>,
    /// Absolute offset one past the last typed byte.
    cursor: usize,
    /// Candidates that fit in the hint region, in store order.
    candidates: Vec<String>,
    selected: Option<usize>,
}

impl Bar {
    /// Creates a blank bar stamped with the layout's banner.
    pub fn new(layout: BarLayout) -> Self {
        let mut buf = vec![BLANK; layout.capacity()].into_boxed_slice();
        let banner = layout.banner().as_bytes();
        buf[..banner.len()].copy_from_slice(banner);

        Self {
            cursor: layout.field_start(),
            layout,
            buf,
            candidates: Vec::new(),
            selected: None,
        }
    }

    /// The whole drawable buffer.
    pub fn data(&self) -> &[u8] {
        &self.buf
    }

    /// What the field holds so far, without padding.
    pub fn txt(&self) -> &str {
        // Typed bytes are ASCII and completions are clipped on a char boundary.
        std::str::from_utf8(&self.buf[self.layout.field_start()..self.cursor]).unwrap_or_default()
    }

    pub fn layout(&self) -> &BarLayout {
        &self.layout
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_candidate(&self) -> Option<&str> {
        self.selected.map(|i| self.candidates[i].as_str())
    }

    /// The line to launch: the selected candidate in full while one is
    /// active, otherwise the field text.
    ///
    /// Any edit drops the selection, so an active selection always means the
    /// field holds that candidate, possibly clipped to the field width.
    pub fn command_line(&self) -> &str {
        self.selected_candidate().unwrap_or_else(|| self.txt())
    }

    /// Types one character.
    ///
    /// Dropped when the field is full or `ch` is not printable ASCII.
    pub fn insert(&mut self, ch: u8, entries: &[String]) {
        if !is_typeable(ch) || !self.layout.has_room(self.cursor) {
            return;
        }
        self.buf[self.cursor] = ch;
        self.cursor += 1;
        self.refresh_hints(entries);
    }

    /// Erases the character before the cursor.
    pub fn delete(&mut self, entries: &[String]) {
        if self.cursor <= self.layout.field_start() {
            return;
        }
        let width = self.txt().chars().next_back().map_or(1, char::len_utf8);
        self.cursor -= width;
        self.buf[self.cursor..self.cursor + width].fill(BLANK);
        self.refresh_hints(entries);
    }

    /// Advances to the next candidate and copies it into the field.
    ///
    /// Candidates are not recomputed, so repeated calls walk the same list
    /// and wrap after the last one.
    pub fn cycle(&mut self) {
        if self.candidates.is_empty() {
            return;
        }

        if let Some(old) = self.selected {
            self.stamp_decorators(old, false);
        }

        let next = match self.selected {
            Some(i) => (i + 1) % self.candidates.len(),
            None => 0,
        };
        self.selected = Some(next);
        self.stamp_decorators(next, true);
        self.fill_field(next);
    }

    /// Recomputes candidates for the current text and redraws the hints.
    fn refresh_hints(&mut self, entries: &[String]) {
        self.blank_hints();

        let typed = self.txt().to_string();
        let mut offset = self.layout.hint_start();
        for name in store::matches(entries, &typed) {
            if !self.layout.span_fits(offset, name) {
                break;
            }
            let (_, name_range, _) = self.layout.span_parts(offset, name);
            self.buf[name_range].copy_from_slice(name.as_bytes());
            offset += self.layout.span_len(name);
            self.candidates.push(name.to_string());
        }
    }

    fn blank_hints(&mut self) {
        let hints = self.layout.hint_region();
        self.buf[hints].fill(BLANK);
        self.candidates.clear();
        self.selected = None;
    }

    /// Draws or erases the brackets around candidate `index`.
    fn stamp_decorators(&mut self, index: usize, on: bool) {
        let offset = self
            .layout
            .span_offset(self.candidates[..index].iter().map(String::as_str));
        let (left, _, right) = self.layout.span_parts(offset, &self.candidates[index]);

        if on {
            self.buf[left].copy_from_slice(self.layout.hint_left().as_bytes());
            self.buf[right].copy_from_slice(self.layout.hint_right().as_bytes());
        } else {
            self.buf[left].fill(BLANK);
            self.buf[right].fill(BLANK);
        }
    }

    /// Replaces the field with candidate `index`, clipped to the field width
    /// on a char boundary.
    fn fill_field(&mut self, index: usize) {
        let field = self.layout.field();
        let start = field.start;
        self.buf[field].fill(BLANK);

        let name = self.candidates[index].as_str();
        let mut len = name.len().min(self.layout.field_width());
        while !name.is_char_boundary(len) {
            len -= 1;
        }
        self.buf[start..start + len].copy_from_slice(&name.as_bytes()[..len]);
        self.cursor = start + len;
    }
}

impl Default for Bar {
    fn default() -> Self {
        Self::new(BarLayout::default())
    }
}

fn is_typeable(ch: u8) -> bool {
    ch.is_ascii_graphic() || ch == b' '
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Insert(u8),
        Delete,
        Cycle,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            4 => prop::sample::select(b"abc .-_xyz".to_vec()).prop_map(Op::Insert),
            1 => Just(Op::Delete),
            2 => Just(Op::Cycle),
        ]
    }

    fn entry_list() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[abcé]{1,40}", 0..40)
    }

    proptest! {
        #[test]
        fn buffer_stays_within_capacity(entries in entry_list(), ops in prop::collection::vec(op(), 0..120)) {
            let mut bar = Bar::default();
            for op in ops {
                match op {
                    Op::Insert(ch) => bar.insert(ch, &entries),
                    Op::Delete => bar.delete(&entries),
                    Op::Cycle => bar.cycle(),
                }
                let layout = bar.layout();
                prop_assert_eq!(bar.data().len(), layout.capacity());
                prop_assert!(bar.cursor() >= layout.field_start());
                prop_assert!(bar.cursor() <= layout.field_end());
                prop_assert_eq!(bar.txt().len(), bar.cursor() - layout.field_start());
                prop_assert!(bar.data().starts_with(layout.banner().as_bytes()));
            }
        }

        #[test]
        fn candidates_are_leading_matches(entries in entry_list(), typed in "[abc]{1,4}") {
            let mut bar = Bar::default();
            for ch in typed.bytes() {
                bar.insert(ch, &entries);
            }
            let all: Vec<&str> = store::matches(&entries, &typed).collect();
            prop_assert!(bar.candidates().len() <= all.len());
            for (candidate, expected) in bar.candidates().iter().zip(&all) {
                prop_assert_eq!(candidate.as_str(), *expected);
                prop_assert!(candidate.starts_with(&typed));
            }
        }

        #[test]
        fn cycle_wraps_after_candidate_count(entries in entry_list(), first in prop::sample::select(b"abc".to_vec())) {
            let mut bar = Bar::default();
            bar.insert(first, &entries);
            let n = bar.candidates().len();
            prop_assume!(n > 0);

            bar.cycle();
            let selected = bar.selected();
            let data = bar.data().to_vec();
            for _ in 0..n {
                bar.cycle();
            }
            prop_assert_eq!(bar.selected(), selected);
            prop_assert_eq!(bar.data(), &data[..]);
        }
    }
}
