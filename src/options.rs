// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

/// Limits applied to every pattern an engine compiles.
/// `None` keeps the default of the backend.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineOptions {
    /// The maximum number of backtracking steps of a single search,
    /// a search that needs more fails with `Error::Runtime`.
    pub backtrack_limit: Option<usize>,

    /// The size limit (in bytes) of the compiled automata that
    /// plain sub-expressions are delegated to.
    pub delegate_size_limit: Option<usize>,
}

impl EngineOptions {
    pub fn with_backtrack_limit(mut self, limit: usize) -> Self {
        self.backtrack_limit = Some(limit);
        self
    }

    pub fn with_delegate_size_limit(mut self, limit: usize) -> Self {
        self.delegate_size_limit = Some(limit);
        self
    }
}
