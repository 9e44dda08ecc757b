//! Zone boundaries of the bar buffer.
//!
//! The bar is one contiguous run of bytes split into three zones:
//!
//! ```text
//! ┌────────┬──────────────────────────┬─────────────────────────────────┐
//! │ banner │ input field (chmax wide) │ hint region (up to capacity)    │
//! └────────┴──────────────────────────┴─────────────────────────────────┘
//! 0        field_start                field_end = hint_start   capacity
//! ```
//!
//! Every offset the bar touches is computed here so bounds are checked in
//! one place.

use std::ops::Range;

use crate::diagnostic::LauncherError;

/// Default prompt banner.
pub const DEFAULT_BANNER: &str = "> ";

/// Default input field width.
pub const DEFAULT_FIELD_WIDTH: usize = 30;

/// Default drawable buffer length.
pub const DEFAULT_CAPACITY: usize = 255;

/// Default decorator placed before the selected hint.
pub const DEFAULT_HINT_LEFT: &str = " [ ";

/// Default decorator placed after the selected hint.
pub const DEFAULT_HINT_RIGHT: &str = " ] ";

/// Zone boundary descriptor for a bar buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarLayout {
    banner: String,
    field_width: usize,
    capacity: usize,
    hint_left: String,
    hint_right: String,
}

impl BarLayout {
    /// Creates a layout, rejecting one whose banner and field do not fit.
    pub fn new(
        banner: impl Into<String>,
        field_width: usize,
        capacity: usize,
        hint_left: impl Into<String>,
        hint_right: impl Into<String>,
    ) -> Result<Self, LauncherError> {
        let banner = banner.into();
        if banner.len() + field_width > capacity {
            return Err(LauncherError::InvalidLayout {
                banner: banner.len(),
                field: field_width,
                capacity,
            });
        }

        Ok(Self {
            banner,
            field_width,
            capacity,
            hint_left: hint_left.into(),
            hint_right: hint_right.into(),
        })
    }

    pub fn banner(&self) -> &str {
        &self.banner
    }

    /// Maximum number of typed characters.
    pub fn field_width(&self) -> usize {
        self.field_width
    }

    /// Total buffer length.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn hint_left(&self) -> &str {
        &self.hint_left
    }

    pub fn hint_right(&self) -> &str {
        &self.hint_right
    }

    /// First byte of the input field.
    pub fn field_start(&self) -> usize {
        self.banner.len()
    }

    /// One past the last byte of the input field.
    pub fn field_end(&self) -> usize {
        self.field_start() + self.field_width
    }

    pub fn field(&self) -> Range<usize> {
        self.field_start()..self.field_end()
    }

    /// First byte of the hint region.
    pub fn hint_start(&self) -> usize {
        self.field_end()
    }

    pub fn hint_region(&self) -> Range<usize> {
        self.hint_start()..self.capacity
    }

    /// Bytes one rendered hint occupies, decorators included.
    pub fn span_len(&self, name: &str) -> usize {
        self.hint_left.len() + name.len() + self.hint_right.len()
    }

    /// Whether a hint of `name` starting at `offset` stays inside the buffer.
    pub fn span_fits(&self, offset: usize, name: &str) -> bool {
        offset + self.span_len(name) <= self.capacity
    }

    /// Offset of the `index`-th rendered hint, given the names before it.
    pub fn span_offset<'a, I>(&self, preceding: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        preceding
            .into_iter()
            .fold(self.hint_start(), |off, name| off + self.span_len(name))
    }

    /// Ranges of the left decorator, the name and the right decorator of a
    /// hint beginning at `offset`.
    pub fn span_parts(&self, offset: usize, name: &str) -> (Range<usize>, Range<usize>, Range<usize>) {
        let name_start = offset + self.hint_left.len();
        let name_end = name_start + name.len();
        (
            offset..name_start,
            name_start..name_end,
            name_end..name_end + self.hint_right.len(),
        )
    }

    /// Whether `cursor` may accept another typed character.
    pub fn has_room(&self, cursor: usize) -> bool {
        cursor - self.field_start() < self.field_width
    }
}

impl Default for BarLayout {
    fn default() -> Self {
        Self {
            banner: DEFAULT_BANNER.to_string(),
            field_width: DEFAULT_FIELD_WIDTH,
            capacity: DEFAULT_CAPACITY,
            hint_left: DEFAULT_HINT_LEFT.to_string(),
            hint_right: DEFAULT_HINT_RIGHT.to_string(),
        }
    }
}
