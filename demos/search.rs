// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use regex_matcher::{replacer, Engine, FancyEngine, Regexp};

pub fn main() {
    let engine = FancyEngine::new();
    let re = engine
        .compile("(?<!redherring )'(?<num>[0-9]+)'", 0)
        .unwrap();
    let text = "My favourite redherring '7' number is '23' and also '7'. Yeah!";

    // walk the matches one by one
    if let Some(mut m) = re.search(text).unwrap() {
        loop {
            println!("Found number: {}", m.group_by_name("num"));
            if !m.next() {
                break;
            }
        }
    } else {
        println!("No match found");
    }

    // replace with a template
    println!("{}", re.replace(text, "<${num}>").unwrap());

    // replace with a function
    let mut doubled = replacer(|m| {
        let n: u32 = m.group_by_name("num").parse().unwrap_or(0);
        (n * 2).to_string()
    });
    println!("{}", re.replace_func(text, &mut doubled).unwrap());
}
