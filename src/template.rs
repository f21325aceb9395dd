// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

// Replacement templates, Perl/Java dialect:
//
// - `\x`      a literal `x`, whatever `x` is
// - `$N...`   the group with index N, see `Interpreter::expand_group_index`
// - `${name}` the group with the given name
// - any other char is copied as is

use std::iter::Peekable;

use crate::{
    charwithposition::{CharWithPosition, CharsWithPositionIter, Position},
    error::Error,
    matcher::Match,
};

/// Expands `template` against the match `m`.
pub fn expand(template: &str, m: &dyn Match) -> Result<String, Error> {
    let mut output = String::with_capacity(template.len());
    expand_to(template, m, &mut output)?;
    Ok(output)
}

/// Same as `expand` but appends to `dst`.
/// On error `dst` is left unchanged.
pub fn expand_to(template: &str, m: &dyn Match, dst: &mut String) -> Result<(), Error> {
    let mut chars = template.chars();
    let mut upstream = CharsWithPositionIter::new(&mut chars).peekable();
    let mut interpreter = Interpreter::new(&mut upstream, m);
    let output = interpreter.expand()?;
    dst.push_str(&output);
    Ok(())
}

struct Interpreter<'a, 'b> {
    upstream: &'a mut Peekable<CharsWithPositionIter<'b>>,
    m: &'a dyn Match,
    last_position: Position,
}

impl<'a, 'b> Interpreter<'a, 'b> {
    fn new(upstream: &'a mut Peekable<CharsWithPositionIter<'b>>, m: &'a dyn Match) -> Self {
        Self {
            upstream,
            m,
            last_position: Position::new(0, 0),
        }
    }

    fn next_char(&mut self) -> Option<char> {
        match self.upstream.next() {
            Some(CharWithPosition {
                character,
                position,
            }) => {
                self.last_position = position;
                Some(character)
            }
            None => None,
        }
    }

    fn peek_char(&mut self) -> Option<char> {
        self.upstream.peek().map(|item| item.character)
    }

    fn peek_char_and_equals(&mut self, expected_char: char) -> bool {
        matches!(self.upstream.peek(), Some(CharWithPosition { character, .. }) if *character == expected_char)
    }
}

impl Interpreter<'_, '_> {
    fn expand(&mut self) -> Result<String, Error> {
        let mut output = String::new();

        while let Some(current_char) = self.next_char() {
            match current_char {
                '\\' => {
                    let start_position = self.last_position;
                    match self.next_char() {
                        Some(c) => output.push(c),
                        None => {
                            // `\` | EOF
                            return Err(Error::template(
                                "character to be escaped is missing",
                                start_position,
                            ));
                        }
                    }
                }
                '$' => {
                    let start_position = self.last_position;
                    if self.peek_char_and_equals('{') {
                        self.next_char(); // consume '{'
                        self.expand_group_name(start_position, &mut output)?;
                    } else {
                        self.expand_group_index(start_position, &mut output)?;
                    }
                }
                _ => output.push(current_char),
            }
        }

        Ok(output)
    }

    fn expand_group_name(
        &mut self,
        start_position: Position,
        output: &mut String,
    ) -> Result<(), Error> {
        // ${name}?  //
        //   ^    ^__// to here
        //   |_______// current char

        let mut name = String::new();

        // a missing `}` simply ends the name at the end of the template
        while let Some(c) = self.next_char() {
            if c == '}' {
                break;
            }
            name.push(c);
        }

        if name.is_empty() {
            return Err(Error::template("group name is missing", start_position));
        }

        output.push_str(self.m.group_by_name(&name));
        Ok(())
    }

    /// Reads the longest run of digits whose value does not exceed the
    /// number of groups, e.g. with 3 groups `$12` is group 1 followed by
    /// a literal `2`, with 12 groups it is group 12.
    fn expand_group_index(
        &mut self,
        start_position: Position,
        output: &mut String,
    ) -> Result<(), Error> {
        let groups = self.m.groups();
        let mut index: Option<usize> = None;

        while let Some(digit) = self.peek_char().and_then(|c| c.to_digit(10)) {
            let extended = index
                .unwrap_or(0)
                .checked_mul(10)
                .and_then(|n| n.checked_add(digit as usize));

            match extended {
                Some(n) if n <= groups => {
                    self.next_char(); // consume digit
                    index = Some(n);
                }
                _ => break,
            }
        }

        match index {
            Some(idx) => {
                output.push_str(self.m.group_by_idx(idx));
                Ok(())
            }
            None => Err(Error::template("group index is missing", start_position)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::ops::Range;

    use pretty_assertions::assert_eq;

    use crate::{charwithposition::Position, error::Error, matcher::Match};

    use super::{expand, expand_to};

    // A fixed set of groups, `None` marks a group that did not participate.
    struct FixedMatch {
        groups: Vec<Option<&'static str>>,
        names: Vec<(&'static str, usize)>,
    }

    impl FixedMatch {
        fn new(groups: &[Option<&'static str>]) -> Self {
            Self {
                groups: groups.to_vec(),
                names: vec![],
            }
        }

        fn with_names(mut self, names: &[(&'static str, usize)]) -> Self {
            self.names = names.to_vec();
            self
        }

        fn index_of(&self, name: &str) -> Option<usize> {
            self.names
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, idx)| *idx)
        }
    }

    impl Match for FixedMatch {
        fn groups(&self) -> usize {
            self.groups.len() - 1
        }

        fn group_by_idx(&self, idx: usize) -> &str {
            self.groups.get(idx).copied().flatten().unwrap_or("")
        }

        fn group_present_by_idx(&self, idx: usize) -> bool {
            matches!(self.groups.get(idx), Some(Some(_)))
        }

        fn group_by_name(&self, name: &str) -> &str {
            self.index_of(name)
                .map(|idx| self.group_by_idx(idx))
                .unwrap_or("")
        }

        fn group_present_by_name(&self, name: &str) -> bool {
            self.index_of(name)
                .is_some_and(|idx| self.group_present_by_idx(idx))
        }

        fn range(&self) -> Range<usize> {
            0..self.group_by_idx(0).len()
        }

        fn try_next(&mut self) -> Result<bool, Error> {
            Ok(false)
        }
    }

    fn abc_match() -> FixedMatch {
        FixedMatch::new(&[Some("abc"), Some("a"), Some("b"), None])
    }

    fn template_error(template: &str, m: &dyn Match) -> (String, Position) {
        match expand(template, m) {
            Err(Error::Template { message, position }) => (message, position),
            other => panic!("expected a template error, got {:?}", other),
        }
    }

    #[test]
    fn test_expand_literal() {
        let m = abc_match();

        assert_eq!(expand("", &m).unwrap(), "");
        assert_eq!(expand("plain text", &m).unwrap(), "plain text");
        assert_eq!(expand("文字🌏", &m).unwrap(), "文字🌏");
    }

    #[test]
    fn test_expand_group_index() {
        let m = abc_match();

        assert_eq!(expand("$0", &m).unwrap(), "abc");
        assert_eq!(expand("[$1-$2]", &m).unwrap(), "[a-b]");
        assert_eq!(expand("$2$1", &m).unwrap(), "ba");

        // non-participating group
        assert_eq!(expand("<$3>", &m).unwrap(), "<>");

        // leading zeros are part of the number
        assert_eq!(expand("$01", &m).unwrap(), "a");
        assert_eq!(expand("$00", &m).unwrap(), "abc");
    }

    #[test]
    fn test_expand_group_index_stops_at_group_count() {
        let m = abc_match();

        // 3 groups, `$12` is group 1 and a literal `2`
        assert_eq!(expand("$12", &m).unwrap(), "a2");
        assert_eq!(expand("$39", &m).unwrap(), "9");
        assert_eq!(expand("$2345", &m).unwrap(), "b345");

        // with 12 groups the same template refers to group 12
        let mut groups: Vec<Option<&'static str>> = vec![Some("whole")];
        groups.extend((1..=12).map(|i| if i == 12 { Some("twelve") } else { Some("x") }));
        let m = FixedMatch::new(&groups);

        assert_eq!(expand("$12", &m).unwrap(), "twelve");
        assert_eq!(expand("$13", &m).unwrap(), "x3");
        assert_eq!(expand("$120", &m).unwrap(), "twelve0");
    }

    #[test]
    fn test_expand_huge_group_index() {
        let m = abc_match();

        // digits beyond the range of usize must not overflow
        assert_eq!(
            expand("$199999999999999999999999", &m).unwrap(),
            "a99999999999999999999999"
        );
    }

    #[test]
    fn test_expand_group_name() {
        let m = abc_match().with_names(&[("first", 1), ("third", 3)]);

        assert_eq!(expand("${first}!", &m).unwrap(), "a!");
        assert_eq!(expand("${third}", &m).unwrap(), "");
        assert_eq!(expand("${unknown}", &m).unwrap(), "");

        // the name runs to the end when `}` is missing
        assert_eq!(expand("x${first", &m).unwrap(), "xa");
        assert_eq!(expand("${fir}st}", &m).unwrap(), "st}");
    }

    #[test]
    fn test_expand_escape() {
        let m = abc_match();

        assert_eq!(expand("\\$1 literal", &m).unwrap(), "$1 literal");
        assert_eq!(expand("\\\\$1", &m).unwrap(), "\\a");
        assert_eq!(expand("\\${first}", &m).unwrap(), "${first}");
        assert_eq!(expand("\\n", &m).unwrap(), "n");
        assert_eq!(expand("\\文", &m).unwrap(), "文");
    }

    #[test]
    fn test_expand_errors() {
        let m = abc_match();

        assert_eq!(
            template_error("abc\\", &m),
            (
                "character to be escaped is missing".to_owned(),
                Position::new(3, 3)
            )
        );

        assert_eq!(
            template_error("a${}b", &m),
            ("group name is missing".to_owned(), Position::new(1, 1))
        );

        assert_eq!(
            template_error("cost: $", &m),
            ("group index is missing".to_owned(), Position::new(6, 6))
        );

        assert_eq!(
            template_error("文$x", &m),
            ("group index is missing".to_owned(), Position::new(1, 3))
        );

        // with no groups even `$1` has no qualifying digit
        let m = FixedMatch::new(&[Some("abc")]);
        assert_eq!(
            template_error("$1", &m),
            ("group index is missing".to_owned(), Position::new(0, 0))
        );
    }

    #[test]
    fn test_expand_to() {
        let m = abc_match();
        let mut dst = "head:".to_owned();

        expand_to("$1$2", &m, &mut dst).unwrap();
        assert_eq!(dst, "head:ab");

        // nothing is appended on failure
        assert!(expand_to("$1\\", &m, &mut dst).is_err());
        assert_eq!(dst, "head:ab");
    }
}
