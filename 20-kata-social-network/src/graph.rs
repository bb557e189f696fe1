//! Users and who they follow.

use tracing::debug;

use crate::error::{CommandError, RosterError};

/// A roster member and the users they follow, in the order they were followed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    name: String,
    follows: Vec<String>,
}

impl User {
    fn new(name: String) -> Self {
        Self {
            name,
            follows: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn follows(&self) -> &[String] {
        &self.follows
    }

    pub fn is_following(&self, name: &str) -> bool {
        self.follows.iter().any(|followed| followed == name)
    }
}

/// The fixed roster and its follow relationships.
///
/// Users are kept in roster order. A linear scan is fine for a roster typed
/// on a command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialGraph {
    users: Vec<User>,
}

impl SocialGraph {
    pub fn new<I, S>(roster: I) -> Result<Self, RosterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut users: Vec<User> = Vec::new();
        for name in roster {
            let name = name.into();
            if name.is_empty() {
                return Err(RosterError::EmptyName);
            }
            if name.chars().any(char::is_whitespace) {
                return Err(RosterError::Whitespace(name));
            }
            if users.iter().any(|user| user.name == name) {
                return Err(RosterError::Duplicate(name));
            }
            users.push(User::new(name));
        }

        if users.is_empty() {
            return Err(RosterError::Empty);
        }
        Ok(Self { users })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.user(name).is_some()
    }

    pub fn user(&self, name: &str) -> Option<&User> {
        self.users.iter().find(|user| user.name == name)
    }

    /// Records that `follower` follows `followee`.
    ///
    /// Following someone already followed changes nothing and is not an error.
    pub fn follow(&mut self, follower: &str, followee: &str) -> Result<(), CommandError> {
        let valid =
            follower != followee && self.contains(follower) && self.contains(followee);
        let user = match self.users.iter_mut().find(|user| user.name == follower) {
            Some(user) if valid => user,
            _ => {
                return Err(CommandError::InvalidFollow {
                    follower: follower.to_string(),
                    followee: followee.to_string(),
                });
            }
        };

        if user.is_following(followee) {
            debug!(follower, followee, "already following");
        } else {
            user.follows.push(followee.to_string());
            debug!(follower, followee, "follow recorded");
        }
        Ok(())
    }
}
