//! Line-oriented command interpreter for a tiny social network.
//!
//! A fixed roster of users can post messages, follow each other, read a
//! user's posts, and view a wall that merges a user's posts with those of
//! everyone they follow. Each module focuses on a concrete responsibility:
//!
//! - [`command`] classifies a raw input line into a [`command::Command`].
//! - [`engine`] owns all state and turns each line into transcript entries.
//! - [`graph`] and [`posts`] hold the follow relationships and the posts.
//! - [`humanize`] renders post ages such as "2 minutes ago".
//! - [`clock`] abstracts the time source so tests can control it.
//! - [`entry`] defines the transcript entries and writes them as text or JSON lines.
//! - [`cli`] and [`repl`] wire the engine to a terminal.

pub mod cli;
pub mod clock;
pub mod command;
pub mod engine;
pub mod entry;
pub mod error;
pub mod graph;
pub mod humanize;
pub mod posts;
pub mod repl;
