// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Position {
    pub index: usize,  // The character index in the text
    pub offset: usize, // The utf-8 byte offset in the text
}

impl Position {
    pub fn new(index: usize, offset: usize) -> Self {
        Self { index, offset }
    }
}

#[derive(Debug, PartialEq)]
pub struct CharWithPosition {
    pub character: char,
    pub position: Position,
}

impl CharWithPosition {
    pub fn new(character: char, position: Position) -> Self {
        Self {
            character,
            position,
        }
    }
}

pub struct CharsWithPositionIter<'a> {
    upstream: &'a mut dyn Iterator<Item = char>,
    current_position: Position,
}

impl<'a> CharsWithPositionIter<'a> {
    pub fn new(upstream: &'a mut dyn Iterator<Item = char>) -> Self {
        Self {
            upstream,
            current_position: Position::new(0, 0),
        }
    }
}

impl Iterator for CharsWithPositionIter<'_> {
    type Item = CharWithPosition;

    /// Returns the next char along with the position it starts at.
    fn next(&mut self) -> Option<Self::Item> {
        let c = self.upstream.next()?;
        let last_position = self.current_position;

        self.current_position.index += 1;
        self.current_position.offset += c.len_utf8();

        Some(CharWithPosition::new(c, last_position))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{CharWithPosition, CharsWithPositionIter, Position};

    #[test]
    fn test_chars_with_position_iter() {
        {
            let mut chars = "a$1".chars();
            let mut iter = CharsWithPositionIter::new(&mut chars);

            assert_eq!(
                iter.next(),
                Some(CharWithPosition::new('a', Position::new(0, 0)))
            );
            assert_eq!(
                iter.next(),
                Some(CharWithPosition::new('$', Position::new(1, 1)))
            );
            assert_eq!(
                iter.next(),
                Some(CharWithPosition::new('1', Position::new(2, 2)))
            );
            assert!(iter.next().is_none());
        }

        {
            // multi-byte chars advance the offset by their utf-8 length
            let mut chars = "文\\🌏x".chars();
            let mut iter = CharsWithPositionIter::new(&mut chars);

            assert_eq!(
                iter.next(),
                Some(CharWithPosition::new('文', Position::new(0, 0)))
            );
            assert_eq!(
                iter.next(),
                Some(CharWithPosition::new('\\', Position::new(1, 3)))
            );
            assert_eq!(
                iter.next(),
                Some(CharWithPosition::new('🌏', Position::new(2, 4)))
            );
            assert_eq!(
                iter.next(),
                Some(CharWithPosition::new('x', Position::new(3, 8)))
            );
            assert!(iter.next().is_none());
        }
    }
}
