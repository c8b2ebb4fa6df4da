// Copyright 2026 the Sentraq Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard navigation.

use crate::position::Command;

/// Maps a `KeyboardEvent.key` value to a carousel command.
///
/// `ArrowLeft`/`ArrowRight` step; digits `1`–`9` jump to that slide when it
/// exists. Returns `None` for every other key, including digits past
/// `total`, so callers leave the default action alone for those.
#[must_use]
pub fn key_command(key: &str, total: usize) -> Option<Command> {
    match key {
        "ArrowLeft" => Some(Command::Previous),
        "ArrowRight" => Some(Command::Next),
        _ => {
            let &[digit @ b'1'..=b'9'] = key.as_bytes() else {
                return None;
            };
            let index = usize::from(digit - b'1');
            (index < total).then_some(Command::Goto(index))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_step() {
        assert_eq!(key_command("ArrowLeft", 3), Some(Command::Previous));
        assert_eq!(key_command("ArrowRight", 3), Some(Command::Next));
    }

    #[test]
    fn digits_jump_within_range() {
        assert_eq!(key_command("1", 3), Some(Command::Goto(0)));
        assert_eq!(key_command("3", 3), Some(Command::Goto(2)));
        assert_eq!(key_command("9", 9), Some(Command::Goto(8)));
    }

    #[test]
    fn digit_past_total_is_unhandled() {
        assert_eq!(key_command("7", 3), None);
        assert_eq!(key_command("4", 3), None);
    }

    #[test]
    fn other_keys_are_unhandled() {
        for key in ["0", "10", "a", "Enter", "ArrowUp", ""] {
            assert_eq!(key_command(key, 9), None, "key={key:?}");
        }
    }
}
