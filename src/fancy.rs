// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::ops::Range;

use fancy_regex::{Captures, RegexBuilder};

use crate::{
    error::Error,
    matcher::{Engine, Flags, Match, Regexp},
    options::EngineOptions,
};

// the same bits as libpcre
pub const FLAG_CASELESS: Flags = 0x0000_0001;
pub const FLAG_MULTILINE: Flags = 0x0000_0002;
pub const FLAG_DOTALL: Flags = 0x0000_0004;
pub const FLAG_EXTENDED: Flags = 0x0000_0008;
pub const FLAG_UCP: Flags = 0x2000_0000;

const SUPPORTED_FLAGS: Flags =
    FLAG_CASELESS | FLAG_MULTILINE | FLAG_DOTALL | FLAG_EXTENDED | FLAG_UCP;

/// An engine backed by `fancy-regex`, which supports look-around
/// and backreferences on top of the `regex` syntax.
///
/// Matching is always Unicode-aware: `\w`, `\d`, `\s` and `\b` follow
/// Unicode whether or not `flag_unicode()` is passed, the backend cannot
/// restrict them to ASCII. The flag is accepted for portability.
#[derive(Debug, Clone, Default)]
pub struct FancyEngine {
    options: EngineOptions,
}

impl FancyEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: EngineOptions) -> Self {
        Self { options }
    }
}

impl Engine for FancyEngine {
    fn compile(&self, pattern: &str, flags: Flags) -> Result<Box<dyn Regexp>, Error> {
        let unsupported = flags & !SUPPORTED_FLAGS;
        if unsupported != 0 {
            return Err(Error::Compile {
                pattern: pattern.to_owned(),
                message: format!("unsupported flags {:#x}", unsupported),
            });
        }

        let mut builder = RegexBuilder::new(&with_inline_flags(pattern, flags));
        if let Some(limit) = self.options.backtrack_limit {
            builder.backtrack_limit(limit);
        }
        if let Some(limit) = self.options.delegate_size_limit {
            builder.delegate_size_limit(limit);
        }

        let regex = builder.build().map_err(|e| Error::Compile {
            pattern: pattern.to_owned(),
            message: e.to_string(),
        })?;

        log::debug!("compiled pattern {:?} with flags {:#x}", pattern, flags);
        Ok(Box::new(FancyRegexp { regex }))
    }

    fn quote(&self, text: &str) -> String {
        fancy_regex::escape(text).into_owned()
    }

    fn flag_dot_all(&self) -> Flags {
        FLAG_DOTALL
    }

    fn flag_extended(&self) -> Flags {
        FLAG_EXTENDED
    }

    fn flag_unicode(&self) -> Flags {
        FLAG_UCP
    }

    fn flag_case_insensitive(&self) -> Flags {
        FLAG_CASELESS
    }

    fn flag_multiline(&self) -> Flags {
        FLAG_MULTILINE
    }
}

// Turns flag bits into a leading inline flag group, e.g. `(?is)`.
// Unicode is always on in this backend so FLAG_UCP adds nothing.
fn with_inline_flags(pattern: &str, flags: Flags) -> String {
    let inline: String = [
        (FLAG_CASELESS, 'i'),
        (FLAG_MULTILINE, 'm'),
        (FLAG_DOTALL, 's'),
        (FLAG_EXTENDED, 'x'),
    ]
    .iter()
    .filter(|(flag, _)| flags & flag != 0)
    .map(|(_, c)| *c)
    .collect();

    if inline.is_empty() {
        pattern.to_owned()
    } else {
        format!("(?{}){}", inline, pattern)
    }
}

pub struct FancyRegexp {
    regex: fancy_regex::Regex,
}

impl Regexp for FancyRegexp {
    fn search<'a>(&'a self, subject: &'a str) -> Result<Option<Box<dyn Match + 'a>>, Error> {
        let captures = self
            .regex
            .captures(subject)
            .map_err(|e| Error::Runtime(e.to_string()))?;

        Ok(captures.map(|captures| {
            Box::new(FancyMatch {
                regex: &self.regex,
                subject,
                captures: Some(captures),
                last_end: 0,
            }) as Box<dyn Match + 'a>
        }))
    }
}

struct FancyMatch<'a> {
    regex: &'a fancy_regex::Regex,
    subject: &'a str,
    captures: Option<Captures<'a>>, // None once exhausted
    last_end: usize,
}

impl Match for FancyMatch<'_> {
    fn groups(&self) -> usize {
        self.regex.captures_len() - 1
    }

    fn group_by_idx(&self, idx: usize) -> &str {
        self.captures
            .as_ref()
            .and_then(|c| c.get(idx))
            .map_or("", |m| m.as_str())
    }

    fn group_present_by_idx(&self, idx: usize) -> bool {
        self.captures
            .as_ref()
            .is_some_and(|c| c.get(idx).is_some())
    }

    fn group_by_name(&self, name: &str) -> &str {
        self.captures
            .as_ref()
            .and_then(|c| c.name(name))
            .map_or("", |m| m.as_str())
    }

    fn group_present_by_name(&self, name: &str) -> bool {
        self.captures
            .as_ref()
            .is_some_and(|c| c.name(name).is_some())
    }

    fn range(&self) -> Range<usize> {
        match self.captures.as_ref().and_then(|c| c.get(0)) {
            Some(m) => m.range(),
            None => self.last_end..self.last_end,
        }
    }

    fn try_next(&mut self) -> Result<bool, Error> {
        let Some(current) = self.captures.take().and_then(|c| c.get(0)) else {
            // there is no current match, so there is no next one either
            return Ok(false);
        };

        self.last_end = current.end();

        // step over one char after an empty match so that it is not found again
        let mut position = current.end();
        if current.start() == current.end() {
            match self.subject[position..].chars().next() {
                Some(c) => position += c.len_utf8(),
                None => return Ok(false),
            }
        }

        self.captures = self
            .regex
            .captures_from_pos(self.subject, position)
            .map_err(|e| Error::Runtime(e.to_string()))?;

        Ok(self.captures.is_some())
    }
}
