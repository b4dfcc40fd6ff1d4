// Copyright 2026 the clarity-support authors
// SPDX-License-Identifier: Apache-2.0

//! Query modules for language service operations.
//!
//! Each provider implements a specific language service capability:
//!
//! - [`completion_provider`] - Suggest completions at the cursor position
//!
//! Providers are pure functions of `(text, position)`: they hold no state,
//! share nothing but the symbol tables, and are safe to call concurrently
//! across documents.

pub mod completion_provider;
