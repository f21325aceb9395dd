// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::{self, Display};

use crate::charwithposition::Position;

#[derive(Debug, PartialEq, Clone)]
pub enum Error {
    /// The pattern is invalid or the flag combination is not supported.
    Compile { pattern: String, message: String },

    /// The replacement template is malformed.
    /// The position points to the `\` or `$` that starts the bad sequence.
    Template { message: String, position: Position },

    /// The engine gave up while matching, e.g. the backtracking limit was exceeded.
    Runtime(String),

    /// `registry::install` was called more than once.
    EngineAlreadyInstalled,
}

impl Error {
    pub(crate) fn template(message: &str, position: Position) -> Self {
        Error::Template {
            message: message.to_owned(),
            position,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Compile { pattern, message } => {
                write!(f, "Cannot compile pattern \"{}\": {}", pattern, message)
            }
            Error::Template { message, position } => write!(
                f,
                "Malformed replacement template at char {}: {}.",
                position.index, message
            ),
            Error::Runtime(message) => write!(f, "Matching aborted: {}", message),
            Error::EngineAlreadyInstalled => {
                f.write_str("A regex engine has already been installed.")
            }
        }
    }
}

impl std::error::Error for Error {}
