// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

// The process-wide engine.
//
// Passing a `&dyn Engine` to whatever compiles patterns is preferred,
// the slot below is for embedders that pick the engine once at startup
// and need to reach it from code that cannot take it as an argument.

use once_cell::sync::OnceCell;

use crate::{error::Error, matcher::Engine};

pub type SharedEngine = dyn Engine + Send + Sync;

static ENGINE: OnceCell<Box<SharedEngine>> = OnceCell::new();

/// Installs the engine used by `engine()`.
/// It can be installed only once, later calls fail with `Error::EngineAlreadyInstalled`.
pub fn install<E>(engine: E) -> Result<(), Error>
where
    E: Engine + Send + Sync + 'static,
{
    ENGINE
        .set(Box::new(engine))
        .map_err(|_| Error::EngineAlreadyInstalled)?;

    log::debug!("regex engine installed");
    Ok(())
}

/// The installed engine, `None` before `install` is called.
pub fn engine() -> Option<&'static SharedEngine> {
    ENGINE.get().map(|engine| engine.as_ref())
}

const SELF_CHECK_PATTERN: &str = "(?<!redherring )'(?<num>[0-9]+)'";
const SELF_CHECK_SUBJECT: &str = "My favourite redherring '7' number is '23' and also '7'. Yeah!";

/// Runs a quick match on a known sentence to check that an engine works,
/// the result should be "23,7".
///
/// Returns "errored" if the pattern cannot be compiled or the engine fails.
pub fn self_check(engine: &dyn Engine) -> String {
    let re = match engine.compile(SELF_CHECK_PATTERN, 0) {
        Ok(re) => re,
        Err(_) => return "errored".to_owned(),
    };

    let mut m = match re.search(SELF_CHECK_SUBJECT) {
        Ok(Some(m)) => m,
        Ok(None) => return String::new(),
        Err(_) => return "errored".to_owned(),
    };

    let mut nums = vec![m.group_by_name("num").to_owned()];
    while m.next() {
        nums.push(m.group_by_name("num").to_owned());
    }
    nums.join(",")
}
