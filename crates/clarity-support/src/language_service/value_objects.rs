// Copyright 2026 the clarity-support authors
// SPDX-License-Identifier: Apache-2.0

//! Value objects for the language service.
//!
//! Value objects are immutable types defined by their attributes:
//!
//! - **`ByteOffset`** - A position in source text as a byte offset
//! - **`Position`** - A line/column position in source text
//! - **`TextEdit`** - A replacement the host editor applies to its buffer
//! - **`Completion`** - A code completion suggestion
//!
//! Diagnostics are defined in
//! [`source_analysis`](crate::source_analysis::Diagnostic) and re-exported
//! from the service module for a single import surface.

use ecow::EcoString;

use crate::source_analysis::Span;

/// A byte offset in a source buffer (0-indexed).
///
/// This newtype provides type safety to prevent mixing positions and offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ByteOffset(pub u32);

impl ByteOffset {
    /// Creates a new byte offset.
    #[must_use]
    pub const fn new(offset: u32) -> Self {
        Self(offset)
    }

    /// Returns the raw byte offset value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// A position in a source buffer (line and column, both 0-indexed).
///
/// The `column` field is a **byte offset within the line**, not a character
/// count. Callers must ensure that it always lies on a valid UTF-8 character
/// boundary in the corresponding source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Line number (0-indexed).
    pub line: u32,
    /// Column offset in bytes from the start of the line (0-indexed).
    pub column: u32,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Converts a byte offset to a position given source text.
    ///
    /// Returns `None` if the offset is out of bounds.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "source buffers over 4GB are not supported"
    )]
    pub fn from_byte_offset(source: &str, offset: ByteOffset) -> Option<Self> {
        let offset_val = offset.get() as usize;
        if offset_val > source.len() {
            return None;
        }

        let mut line = 0;
        let mut line_start = 0;

        for (i, ch) in source.char_indices() {
            if i >= offset_val {
                return Some(Self::new(line, (offset_val - line_start) as u32));
            }
            if ch == '\n' {
                line += 1;
                line_start = i + 1;
            }
        }

        Some(Self::new(line, (offset_val - line_start) as u32))
    }

    /// Converts a position to a byte offset given source text.
    ///
    /// Returns `None` if the position is out of bounds.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "source buffers over 4GB are not supported"
    )]
    pub fn to_byte_offset(self, source: &str) -> Option<ByteOffset> {
        let mut current_line = 0;
        let mut line_start = 0;

        for (i, ch) in source.char_indices() {
            if current_line == self.line && (i - line_start) as u32 == self.column {
                return Some(ByteOffset::new(i as u32));
            }
            if ch == '\n' {
                if current_line == self.line {
                    // Passed the line without reaching the column.
                    return None;
                }
                current_line += 1;
                line_start = i + 1;
            }
        }

        // Handle a position at the end of the last line.
        if current_line == self.line && (source.len() - line_start) as u32 == self.column {
            return Some(ByteOffset::new(source.len() as u32));
        }

        None
    }
}

/// A text replacement the host editor applies to its buffer.
///
/// The core never mutates editor state itself: a completion that inserts a
/// snippet carries one of these, and applying it is the editor's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    /// The range of source text to replace.
    pub range: Span,
    /// The replacement text.
    pub replacement: EcoString,
}

impl TextEdit {
    /// Creates a new text edit.
    #[must_use]
    pub fn new(range: Span, replacement: impl Into<EcoString>) -> Self {
        Self {
            range,
            replacement: replacement.into(),
        }
    }
}

/// A code completion suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// The text to insert (or the label of the attached edit).
    pub label: EcoString,
    /// The kind of completion (keyword, function, etc.).
    pub kind: CompletionKind,
    /// Short category description shown alongside the label.
    pub detail: Option<EcoString>,
    /// Optional longer documentation.
    pub documentation: Option<EcoString>,
    /// Optional snippet edit replacing the typed query.
    pub edit: Option<TextEdit>,
    /// Ranking boost; higher sorts earlier, ties keep table order.
    pub rank: u8,
}

/// The kind of a completion item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompletionKind {
    /// A definition or control-flow keyword.
    Keyword,
    /// A built-in function.
    Function,
    /// A keyword constant.
    Constant,
    /// An arithmetic or logic operator.
    Operator,
    /// A type signature.
    Type,
    /// A multi-line code skeleton.
    Snippet,
    /// A comment section header.
    Section,
}

impl Completion {
    /// Creates a new completion.
    #[must_use]
    pub fn new(label: impl Into<EcoString>, kind: CompletionKind) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: None,
            documentation: None,
            edit: None,
            rank: 0,
        }
    }

    /// Adds detail text.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<EcoString>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Adds documentation.
    #[must_use]
    pub fn with_documentation(mut self, documentation: impl Into<EcoString>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }

    /// Attaches a snippet edit.
    #[must_use]
    pub fn with_edit(mut self, edit: TextEdit) -> Self {
        self.edit = Some(edit);
        self
    }

    /// Sets the ranking boost.
    #[must_use]
    pub fn with_rank(mut self, rank: u8) -> Self {
        self.rank = rank;
        self
    }
}
