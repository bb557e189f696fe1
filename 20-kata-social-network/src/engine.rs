//! The command engine: owns the social graph and the post store, and turns
//! each submitted line into transcript entries.

use tracing::{debug, info};

use crate::{
    clock::Clock,
    command::Command,
    entry::LogEntry,
    error::{CommandError, RosterError},
    graph::SocialGraph,
    humanize::relative_time,
    posts::PostStore,
};

pub const GREETING: &str = "Welcome to Kata Social Network";

pub const DEFAULT_ROSTER: [&str; 3] = ["Alice", "Bob", "Charlie"];

/// Processes one command at a time against in-memory state.
///
/// Nothing here locks; a host sharing an engine between tasks must hand it
/// to one command at a time.
pub struct Engine<C> {
    graph: SocialGraph,
    posts: PostStore,
    clock: C,
}

impl<C: Clock> Engine<C> {
    pub fn new<I, S>(roster: I, clock: C) -> Result<Self, RosterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            graph: SocialGraph::new(roster)?,
            posts: PostStore::new(),
            clock,
        })
    }

    /// An engine for Alice, Bob and Charlie.
    ///
    /// [`DEFAULT_ROSTER`] is non-empty with distinct, whitespace-free names,
    /// so roster validation cannot fail here.
    pub fn with_default_roster(clock: C) -> Self {
        Self::new(DEFAULT_ROSTER, clock).expect("default roster is valid")
    }

    pub fn greeting(&self) -> LogEntry {
        LogEntry::banner(GREETING)
    }

    pub fn graph(&self) -> &SocialGraph {
        &self.graph
    }

    pub fn posts(&self) -> &PostStore {
        &self.posts
    }

    /// Runs one input line.
    ///
    /// The result always starts with the echoed line. Unrecognised input
    /// produces only the echo.
    pub fn submit(&mut self, line: &str) -> Vec<LogEntry> {
        let mut entries = vec![LogEntry::echo(line)];

        let command = Command::classify(line, |name| self.graph.contains(name));
        debug!(?command, "classified input");

        let result = match command {
            Command::Post { author, content } => self.post(author, content),
            Command::Follow { follower, followee } => self.graph.follow(&follower, &followee),
            Command::Wall { target } => self.wall(&target, &mut entries),
            Command::Read { user } => self.read(&user, &mut entries),
            Command::Unrecognized => Ok(()),
        };

        if let Err(error) = result {
            info!(%error, "command rejected");
            entries.push(LogEntry::error(&error));
        }
        entries
    }

    fn post(&mut self, author: String, content: String) -> Result<(), CommandError> {
        if !self.graph.contains(&author) {
            return Err(CommandError::UnknownAuthor { author });
        }

        debug!(%author, "post recorded");
        self.posts.append(author, content, self.clock.now());
        Ok(())
    }

    fn read(&self, user: &str, entries: &mut Vec<LogEntry>) -> Result<(), CommandError> {
        let now = self.clock.now();
        let before = entries.len();

        entries.extend(self.posts.by_author(user).map(|post| {
            LogEntry::post(format_args!(
                "{} ({})",
                post.content(),
                relative_time(post.timestamp(), now)
            ))
        }));

        if entries.len() == before {
            return Err(CommandError::NoPosts {
                user: user.to_string(),
            });
        }
        Ok(())
    }

    fn wall(&self, target: &str, entries: &mut Vec<LogEntry>) -> Result<(), CommandError> {
        let name = target.split_whitespace().next().unwrap_or_default();
        let user = self
            .graph
            .user(name)
            .ok_or_else(|| CommandError::UnknownUser {
                user: name.to_string(),
            })?;

        let now = self.clock.now();
        let before = entries.len();

        entries.extend(
            self.posts
                .iter()
                .filter(|post| post.author() == user.name() || user.is_following(post.author()))
                .map(|post| {
                    LogEntry::post(format_args!(
                        "{} - {} ({})",
                        post.author(),
                        post.content(),
                        relative_time(post.timestamp(), now)
                    ))
                }),
        );

        if entries.len() == before {
            return Err(CommandError::NoWallPosts);
        }
        Ok(())
    }
}
