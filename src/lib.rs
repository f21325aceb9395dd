// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

mod charwithposition;
mod error;
mod fancy;
mod matcher;
mod options;
mod replacer;

pub mod registry;
pub mod template;

pub use charwithposition::Position;
pub use error::Error;
pub use fancy::{
    FancyEngine, FancyRegexp, FLAG_CASELESS, FLAG_DOTALL, FLAG_EXTENDED, FLAG_MULTILINE, FLAG_UCP,
};
pub use matcher::{replace_each, Engine, Flags, Match, Regexp, Replacer};
pub use options::EngineOptions;
pub use replacer::{replacer, NoExpand, ReplacerFn};
