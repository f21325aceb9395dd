// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::ops::Range;

use crate::{error::Error, template};

/// Compile flags. The value of each bit is defined by the engine,
/// obtain them from the `Engine::flag_*` methods and combine with `|`.
pub type Flags = u32;

/// A successful match against a subject.
///
/// Group 0 is the whole match, groups 1..=`groups()` are the capture
/// groups in the order of their opening parenthesis.
/// A group that did not take part in the match reads as an empty string,
/// use the `*_present_*` methods to tell it apart from an empty capture.
pub trait Match {
    /// The number of capture groups in the pattern, the whole match excluded.
    fn groups(&self) -> usize;

    fn group_by_idx(&self, idx: usize) -> &str;

    fn group_present_by_idx(&self, idx: usize) -> bool;

    /// Unknown names and non-participating groups both yield an empty string.
    fn group_by_name(&self, name: &str) -> &str;

    fn group_present_by_name(&self, name: &str) -> bool;

    /// The byte range of the whole match within the subject.
    fn range(&self) -> Range<usize>;

    /// Moves to the next non-overlapping match.
    ///
    /// Returns `Ok(false)` and leaves the match exhausted when there is
    /// no further match, or when the match is already exhausted.
    /// All group values read before the call belong to the previous match.
    fn try_next(&mut self) -> Result<bool, Error>;

    /// Same as `try_next`, a failure of the engine is logged and
    /// treated as the end of the matches.
    fn next(&mut self) -> bool {
        match self.try_next() {
            Ok(found) => found,
            Err(e) => {
                log::warn!("{}", e);
                false
            }
        }
    }
}

/// Produces the replacement text for every match of `Regexp::replace_func`.
pub trait Replacer {
    fn replacement(&mut self, m: &dyn Match) -> String;
}

/// A compiled pattern.
pub trait Regexp {
    /// Returns the leftmost match, or `None` if the pattern matches nowhere in `subject`.
    fn search<'a>(&'a self, subject: &'a str) -> Result<Option<Box<dyn Match + 'a>>, Error>;

    /// Replaces every match with the expansion of `template`.
    ///
    /// Group references in the template are in Perl/Java style:
    /// `$0`, `$1`, `$12`, `${name}`, and `\x` stands for a literal `x`.
    /// A malformed template fails the whole call, nothing is partially replaced.
    fn replace(&self, subject: &str, template: &str) -> Result<String, Error> {
        replace_each(self, subject, |m| template::expand(template, m))
    }

    /// Replaces every match with the text the replacer returns for it, verbatim.
    fn replace_func(&self, subject: &str, replacer: &mut dyn Replacer) -> Result<String, Error> {
        replace_each(self, subject, |m| Ok(replacer.replacement(m)))
    }
}

/// A regex engine.
pub trait Engine {
    fn compile(&self, pattern: &str, flags: Flags) -> Result<Box<dyn Regexp>, Error>;

    /// Escapes all meta characters of `text` so that the result,
    /// embedded in a pattern, matches `text` literally.
    fn quote(&self, text: &str) -> String;

    /// `.` matches newlines too.
    fn flag_dot_all(&self) -> Flags;

    /// Whitespace and `#` comments in the pattern are ignored.
    fn flag_extended(&self) -> Flags;

    /// Character classes and properties follow Unicode.
    fn flag_unicode(&self) -> Flags;

    fn flag_case_insensitive(&self) -> Flags;

    /// `^` and `$` match at line boundaries.
    fn flag_multiline(&self) -> Flags;
}

/// Walks all matches of `regexp` in `subject` from left to right and joins
/// the untouched text between them with the replacement of each match.
pub fn replace_each<R, F>(regexp: &R, subject: &str, mut replacement: F) -> Result<String, Error>
where
    R: Regexp + ?Sized,
    F: FnMut(&dyn Match) -> Result<String, Error>,
{
    let mut m = match regexp.search(subject)? {
        Some(m) => m,
        None => return Ok(subject.to_owned()),
    };

    let mut parts = String::with_capacity(subject.len());
    let mut last_end = 0;

    loop {
        let range = m.range();

        // text between the previous match and this one
        parts.push_str(&subject[last_end..range.start]);
        parts.push_str(&replacement(&*m)?);
        last_end = range.end;

        if !m.try_next()? {
            break;
        }
    }

    parts.push_str(&subject[last_end..]);
    Ok(parts)
}
