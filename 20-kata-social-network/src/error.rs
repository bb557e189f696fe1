//! Error types for roster setup and command execution.
//!
//! Every [`CommandError`] is recovered by the engine and surfaced as a single
//! error entry in the transcript. Its `Display` text is exactly what the user
//! sees after the `"> "` prompt marker.

use thiserror::Error;

/// A command that was recognised but could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("{author} cannot posts.")]
    UnknownAuthor { author: String },

    /// Self-follow, or either side missing from the roster.
    #[error("{follower} or {followee} doesn't exists.")]
    InvalidFollow { follower: String, followee: String },

    #[error("{user} has no posts")]
    NoPosts { user: String },

    #[error("No posts")]
    NoWallPosts,

    #[error("{user} doesn't exist")]
    UnknownUser { user: String },
}

/// Rejected roster passed to [`crate::engine::Engine::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("roster requires at least one user")]
    Empty,

    #[error("user names cannot be empty")]
    EmptyName,

    #[error("user name '{0}' cannot contain whitespace")]
    Whitespace(String),

    #[error("user '{0}' appears more than once")]
    Duplicate(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_transcript_wording() {
        let unknown = CommandError::UnknownAuthor {
            author: "Dave".into(),
        };
        assert_eq!(unknown.to_string(), "Dave cannot posts.");

        let follow = CommandError::InvalidFollow {
            follower: "Alice".into(),
            followee: "Alice".into(),
        };
        assert_eq!(follow.to_string(), "Alice or Alice doesn't exists.");

        assert_eq!(
            CommandError::NoPosts { user: "Bob".into() }.to_string(),
            "Bob has no posts"
        );
        assert_eq!(CommandError::NoWallPosts.to_string(), "No posts");
        assert_eq!(
            CommandError::UnknownUser { user: "Eve".into() }.to_string(),
            "Eve doesn't exist"
        );
    }
}
