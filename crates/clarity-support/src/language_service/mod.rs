// Copyright 2026 the clarity-support authors
// SPDX-License-Identifier: Apache-2.0

//! Language service API for editor integration.
//!
//! The service composes the three cores behind one interface the hosting
//! editor invokes on its own cadence:
//!
//! - **Highlighting** - streaming token classification, restartable from any
//!   offset (typically invoked per visible-region repaint)
//! - **Completions** - query-triggered suggestions (typically invoked on
//!   identifier keystrokes or an explicit request)
//! - **Diagnostics** - full-document lint findings (typically invoked on a
//!   debounce timer after edits; debounce policy belongs to the editor)
//!
//! No state is shared between the three operations beyond the process-wide
//! read-only symbol tables, so a host may invoke them concurrently across
//! open documents. Results are recomputed fresh per call; nothing is cached
//! across edits.
//!
//! # Usage
//!
//! ```
//! use camino::Utf8PathBuf;
//! use clarity_support::language_service::{LanguageService, SimpleLanguageService};
//!
//! let mut service = SimpleLanguageService::new();
//! let file = Utf8PathBuf::from("counter.clar");
//! service.update_file(file.clone(), "(define-data-var counter uint 0)".to_string());
//!
//! assert!(service.diagnostics(&file).is_empty());
//! assert!(!service.highlight(&file).is_empty());
//! ```

mod value_objects;

pub use value_objects::{ByteOffset, Completion, CompletionKind, Position, TextEdit};

// Re-export the shared source-analysis types at the service level so hosts
// need a single import surface.
pub use crate::source_analysis::{Diagnostic, Severity, Span, Token, TokenKind};

use std::collections::HashMap;

use camino::Utf8PathBuf;
use tracing::debug;

use crate::lint;
use crate::queries::completion_provider;
use crate::source_analysis::Lexer;

/// The language service trait.
///
/// This trait defines the query interface a hosting editor consumes. All
/// methods are synchronous and total: malformed or mid-edit text yields
/// degraded results (empty lists, unclassified tokens), never an error.
pub trait LanguageService {
    /// Updates the content of a file.
    fn update_file(&mut self, file: Utf8PathBuf, content: String);

    /// Removes a file from the service.
    fn remove_file(&mut self, file: &Utf8PathBuf);

    /// Returns lint diagnostics for a file.
    ///
    /// Recomputed fresh on every call; unknown files yield an empty list.
    fn diagnostics(&self, file: &Utf8PathBuf) -> Vec<Diagnostic>;

    /// Returns code completions at a position.
    ///
    /// `explicit` marks a completion request the author triggered directly,
    /// which enables suggestions even with an empty query prefix.
    fn completions(
        &self,
        file: &Utf8PathBuf,
        position: Position,
        explicit: bool,
    ) -> Vec<Completion>;

    /// Returns the full highlight token sequence for a file.
    fn highlight(&self, file: &Utf8PathBuf) -> Vec<Token>;

    /// Returns highlight tokens from a byte offset to end of file.
    ///
    /// Spans stay absolute, so a host can re-highlight just the visible
    /// region and splice the result.
    fn highlight_from(&self, file: &Utf8PathBuf, offset: ByteOffset) -> Vec<Token>;
}

/// A simple in-memory language service implementation.
///
/// Stores document text keyed by path and recomputes every query from
/// scratch, which is well within editor latency budgets for contract-sized
/// sources.
#[derive(Debug, Clone, Default)]
pub struct SimpleLanguageService {
    /// Cached file contents.
    files: HashMap<Utf8PathBuf, String>,
}

impl SimpleLanguageService {
    /// Creates a new, empty language service.
    #[must_use]
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
        }
    }

    fn source(&self, file: &Utf8PathBuf) -> Option<&str> {
        self.files.get(file).map(String::as_str)
    }
}

impl LanguageService for SimpleLanguageService {
    fn update_file(&mut self, file: Utf8PathBuf, content: String) {
        debug!(%file, bytes = content.len(), "updating file");
        self.files.insert(file, content);
    }

    fn remove_file(&mut self, file: &Utf8PathBuf) {
        debug!(%file, "removing file");
        self.files.remove(file);
    }

    fn diagnostics(&self, file: &Utf8PathBuf) -> Vec<Diagnostic> {
        self.source(file).map(lint::lint_source).unwrap_or_default()
    }

    fn completions(
        &self,
        file: &Utf8PathBuf,
        position: Position,
        explicit: bool,
    ) -> Vec<Completion> {
        self.source(file)
            .map(|source| completion_provider::compute_completions(source, position, explicit))
            .unwrap_or_default()
    }

    fn highlight(&self, file: &Utf8PathBuf) -> Vec<Token> {
        self.source(file)
            .map(|source| Lexer::new(source).collect())
            .unwrap_or_default()
    }

    fn highlight_from(&self, file: &Utf8PathBuf, offset: ByteOffset) -> Vec<Token> {
        self.source(file)
            .map(|source| Lexer::with_offset(source, offset.get() as usize).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source_analysis::TokenKind;

    fn service_with(source: &str) -> (SimpleLanguageService, Utf8PathBuf) {
        let mut service = SimpleLanguageService::new();
        let file = Utf8PathBuf::from("contract.clar");
        service.update_file(file.clone(), source.to_string());
        (service, file)
    }

    #[test]
    fn diagnostics_reflect_the_latest_content() {
        let (mut service, file) = service_with("(ok 1)");
        assert!(
            service
                .diagnostics(&file)
                .iter()
                .any(|d| d.message.contains("at least one definition"))
        );

        service.update_file(file.clone(), "(define-public (go) (ok true))".to_string());
        assert!(service.diagnostics(&file).is_empty());
    }

    #[test]
    fn completions_flow_through_the_service() {
        let (service, file) = service_with("(def");
        let completions = service.completions(&file, Position::new(0, 4), false);
        assert!(completions.iter().any(|c| c.label == "define-public"));
    }

    #[test]
    fn highlight_returns_classified_tokens() {
        let (service, file) = service_with("(define-public (go) (ok true))");
        let tokens = service.highlight(&file);
        assert_eq!(tokens[1].kind(), TokenKind::DefinitionKeyword);
    }

    #[test]
    fn highlight_from_offset_matches_suffix() {
        let (service, file) = service_with("(ok true)");
        let from_start = service.highlight(&file);
        let from_offset = service.highlight_from(&file, ByteOffset::new(1));
        assert_eq!(from_offset.len(), from_start.len() - 1);
        assert_eq!(from_offset[0].lexeme(), "ok");
    }

    #[test]
    fn unknown_files_yield_empty_results() {
        let service = SimpleLanguageService::new();
        let file = Utf8PathBuf::from("missing.clar");
        assert!(service.diagnostics(&file).is_empty());
        assert!(
            service
                .completions(&file, Position::new(0, 0), true)
                .is_empty()
        );
        assert!(service.highlight(&file).is_empty());
    }

    #[test]
    fn removed_files_stop_producing_results() {
        let (mut service, file) = service_with("(ok 1)");
        assert!(!service.highlight(&file).is_empty());
        service.remove_file(&file);
        assert!(service.highlight(&file).is_empty());
    }
}
