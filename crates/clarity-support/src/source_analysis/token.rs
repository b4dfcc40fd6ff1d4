// Copyright 2026 the clarity-support authors
// SPDX-License-Identifier: Apache-2.0

//! Token types for Clarity lexical analysis.
//!
//! The lexer classifies each lexeme into a [`TokenKind`] that maps directly
//! onto a highlighting style tag. Tokens are ephemeral: they are produced for
//! a single highlighting pass and not retained afterwards — the hosting
//! editor owns their lifecycle.

use ecow::EcoString;

use super::Span;

/// The highlight classification of a lexeme.
///
/// This is a closed set of style categories, not a grammar: the lexer
/// classifies words by symbol-table membership and syntactic shape, and the
/// editor maps each kind onto a style. [`TokenKind::Unclassified`] marks a
/// consumed character with no visual classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A line comment: `;; comment text`
    Comment,
    /// A parenthesis: `(` or `)`
    Bracket,
    /// A definition keyword: `define-public`, `define-map`
    DefinitionKeyword,
    /// A control-flow keyword: `let`, `match`, `unwrap!`
    ControlKeyword,
    /// A built-in function: `ft-transfer?`, `map-get?`, `concat`
    Function,
    /// A keyword constant: `tx-sender`, `block-height`, `true`
    Atom,
    /// An arithmetic or logic operator: `-`, `pow`, `and`, `is-eq`
    Operator,
    /// A type signature: `uint`, `principal`, `trait`
    Type,
    /// An integer literal: `42`, `u100`
    Number,
    /// A string, hex-buffer, or principal literal
    String,
    /// An identifier with no table classification
    Variable,
    /// A brace or square bracket: `{`, `}`, `[`, `]`
    Delimiter,
    /// A tuple field name (reserved for richer highlighting)
    Property,
    /// A built-in context keyword (reserved for richer highlighting)
    Builtin,
    /// A consumed character with no classification
    Unclassified,
}

impl TokenKind {
    /// Returns `true` if this kind is a literal value class.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Self::Number | Self::String)
    }

    /// Returns `true` if this kind is a keyword class (definition or control).
    #[must_use]
    pub const fn is_keyword(&self) -> bool {
        matches!(self, Self::DefinitionKeyword | Self::ControlKeyword)
    }

    /// Returns `true` if this kind is a bracketing character class.
    #[must_use]
    pub const fn is_bracketing(&self) -> bool {
        matches!(self, Self::Bracket | Self::Delimiter)
    }

    /// Returns `true` if this kind carries no visual classification.
    #[must_use]
    pub const fn is_unclassified(&self) -> bool {
        matches!(self, Self::Unclassified)
    }

    /// Returns the highlighting style tag for this kind.
    ///
    /// Tags follow editor highlighting conventions, so a host can feed them
    /// straight into its style map.
    #[must_use]
    pub const fn style_tag(&self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::Bracket => "bracket",
            Self::DefinitionKeyword => "definitionKeyword",
            Self::ControlKeyword => "controlKeyword",
            Self::Function => "function",
            Self::Atom => "atom",
            Self::Operator => "operator",
            Self::Type => "type",
            Self::Number => "number",
            Self::String => "string",
            Self::Variable => "variable",
            Self::Delimiter => "delimiter",
            Self::Property => "property",
            Self::Builtin => "builtin",
            Self::Unclassified => "unclassified",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.style_tag())
    }
}

/// A classified lexeme with its source location.
///
/// Tokens are cheap to clone: the lexeme uses [`EcoString`] and the span is
/// `Copy`.
///
/// # Examples
///
/// ```
/// use clarity_support::source_analysis::{Span, Token, TokenKind};
///
/// let token = Token::new(TokenKind::Variable, "counter", Span::new(0, 7));
/// assert_eq!(token.kind(), TokenKind::Variable);
/// assert_eq!(token.lexeme(), "counter");
/// assert_eq!(token.span().len(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    lexeme: EcoString,
    span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<EcoString>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// Returns the kind of this token.
    #[must_use]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Returns the source text of this token.
    #[must_use]
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Consumes the token and returns its lexeme.
    #[must_use]
    pub fn into_lexeme(self) -> EcoString {
        self.lexeme
    }

    /// Returns the source span of this token.
    #[must_use]
    pub fn span(&self) -> Span {
        self.span
    }
}
