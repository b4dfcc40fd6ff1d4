// Copyright 2026 the clarity-support authors
// SPDX-License-Identifier: Apache-2.0

//! Diagnostic types for structural lint findings.
//!
//! Diagnostics carry source locations ([`Span`]) for precise squiggle
//! placement. They integrate with [`miette`] so a host can render rich
//! terminal reports from the same values the editor consumes.
//!
//! Every diagnostic is advisory: findings never block editing, saving, or
//! deployment of a contract.

use ecow::EcoString;
use thiserror::Error;

use super::Span;

/// Diagnostic severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// A structural mistake the contract author must fix.
    Error,
    /// A heuristic finding worth double-checking.
    Warning,
}

/// A lint finding (error or warning) anchored to a source range.
///
/// `Diagnostic` implements [`std::error::Error`] and [`miette::Diagnostic`]
/// for presentation only; no entry point in this crate returns it as a
/// failure value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Diagnostic {
    /// The severity of the finding.
    pub severity: Severity,
    /// The human-readable message.
    pub message: EcoString,
    /// The source range the finding applies to.
    pub span: Span,
}

impl Diagnostic {
    /// Creates a new error diagnostic.
    #[must_use]
    pub fn error(message: impl Into<EcoString>, span: Span) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            span,
        }
    }

    /// Creates a new warning diagnostic.
    #[must_use]
    pub fn warning(message: impl Into<EcoString>, span: Span) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            span,
        }
    }
}

impl miette::Diagnostic for Diagnostic {
    fn severity(&self) -> Option<miette::Severity> {
        Some(match self.severity {
            Severity::Error => miette::Severity::Error,
            Severity::Warning => miette::Severity::Warning,
        })
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = miette::LabeledSpan> + '_>> {
        Some(Box::new(std::iter::once(
            miette::LabeledSpan::new_with_span(None, self.span),
        )))
    }
}
