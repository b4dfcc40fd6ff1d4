// Copyright 2026 the clarity-support authors
// SPDX-License-Identifier: Apache-2.0

//! Example demonstrating the language service API.
//!
//! Shows how a hosting editor drives highlighting, completion, and lint
//! diagnostics through one service object.

use camino::Utf8PathBuf;
use clarity_support::language_service::{LanguageService, Position, SimpleLanguageService};

fn main() {
    println!("Clarity Language Service Example\n");
    println!("================================\n");

    let mut service = SimpleLanguageService::new();
    let file = Utf8PathBuf::from("example.clar");

    // Example 1: clean contract, no diagnostics
    println!("1. Clean Contract");
    service.update_file(
        file.clone(),
        "(define-data-var counter uint 0)".to_string(),
    );
    let diagnostics = service.diagnostics(&file);
    println!(
        "   Diagnostics: {}",
        if diagnostics.is_empty() {
            "None"
        } else {
            "Some findings"
        }
    );
    println!();

    // Example 2: structural findings
    println!("2. Structural Findings");
    println!("   Source: (list foo bar");
    service.update_file(file.clone(), "(list foo bar".to_string());
    for diagnostic in service.diagnostics(&file) {
        println!(
            "     - [{:?}] {} at {}..{}",
            diagnostic.severity,
            diagnostic.message,
            diagnostic.span.start(),
            diagnostic.span.end()
        );
    }
    println!();

    // Example 3: completions
    println!("3. Code Completions");
    println!("   Source: (def");
    service.update_file(file.clone(), "(def".to_string());
    let completions = service.completions(&file, Position::new(0, 4), false);
    for completion in completions.iter().take(5) {
        println!("     - {} ({:?})", completion.label, completion.kind);
    }
    println!("   ... and {} more", completions.len().saturating_sub(5));
    println!();

    // Example 4: highlighting
    println!("4. Syntax Highlighting");
    service.update_file(
        file.clone(),
        "(define-public (greet) (ok \"hello\"))".to_string(),
    );
    for token in service.highlight(&file) {
        println!("     {:>18}  {:?}", token.kind().to_string(), token.lexeme());
    }
}
