// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use crate::matcher::{Match, Replacer};

/// A `Replacer` backed by a closure, built with `replacer`.
pub struct ReplacerFn<F> {
    replacement_fn: F,
}

impl<F> Replacer for ReplacerFn<F>
where
    F: FnMut(&dyn Match) -> String,
{
    fn replacement(&mut self, m: &dyn Match) -> String {
        (self.replacement_fn)(m)
    }
}

/// Wraps a function so it can be passed to `Regexp::replace_func`.
///
/// e.g.
///
/// ```
/// use regex_matcher::{replacer, Engine, FancyEngine, Regexp};
///
/// let engine = FancyEngine::new();
/// let re = engine.compile("[0-9]+", 0).unwrap();
/// let mut double = replacer(|m| {
///     let n: u32 = m.group_by_idx(0).parse().unwrap();
///     (n * 2).to_string()
/// });
/// assert_eq!(re.replace_func("3 apples, 21 pears", &mut double).unwrap(), "6 apples, 42 pears");
/// ```
pub fn replacer<F>(replacement_fn: F) -> ReplacerFn<F>
where
    F: FnMut(&dyn Match) -> String,
{
    ReplacerFn { replacement_fn }
}

/// Replaces every match with the same text, `$` and `\` included.
pub struct NoExpand<'a>(pub &'a str);

impl Replacer for NoExpand<'_> {
    fn replacement(&mut self, _m: &dyn Match) -> String {
        self.0.to_owned()
    }
}
