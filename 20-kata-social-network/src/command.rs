//! Classification of raw input lines into commands.
//!
//! Lines are matched on textual markers in a fixed order and the first match
//! wins:
//!
//! - `<user> -> <message>` posts a message
//! - `<user> follows <other>` follows another user
//! - `<user> wall` shows the user's wall
//! - `<user>` on its own reads that user's posts
//!
//! Anything else is [`Command::Unrecognized`]. Classification never fails;
//! whether the named users exist is checked when the command runs.

pub const POST_DELIMITER: &str = " -> ";
pub const FOLLOW_DELIMITER: &str = " follows ";
pub const WALL_MARKER: &str = " wall";

/// A classified input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Post { author: String, content: String },
    Follow { follower: String, followee: String },
    /// `target` is everything before the wall marker.
    Wall { target: String },
    Read { user: String },
    Unrecognized,
}

impl Command {
    /// Classifies `line` against the names in `is_user`.
    ///
    /// Surrounding whitespace is ignored. Only the first occurrence of a
    /// delimiter splits the line, so a message may itself contain `" -> "`.
    pub fn classify<F>(line: &str, is_user: F) -> Self
    where
        F: Fn(&str) -> bool,
    {
        let line = line.trim();

        if let Some((author, content)) = line.split_once(POST_DELIMITER) {
            Command::Post {
                author: author.to_string(),
                content: content.to_string(),
            }
        } else if let Some((follower, followee)) = line.split_once(FOLLOW_DELIMITER) {
            Command::Follow {
                follower: follower.to_string(),
                followee: followee.to_string(),
            }
        } else if let Some((target, _)) = line.split_once(WALL_MARKER) {
            Command::Wall {
                target: target.to_string(),
            }
        } else if is_user(line) {
            Command::Read {
                user: line.to_string(),
            }
        } else {
            Command::Unrecognized
        }
    }
}
