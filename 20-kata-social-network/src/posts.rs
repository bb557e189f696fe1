//! Append-only storage for authored posts.

use std::time::SystemTime;

/// An immutable message written by a roster member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    author: String,
    content: String,
    timestamp: SystemTime,
}

impl Post {
    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn timestamp(&self) -> SystemTime {
        self.timestamp
    }
}

/// Every post ever made, kept in the order they were written.
///
/// Readers see the newest post first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostStore {
    posts: Vec<Post>,
}

impl PostStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, author: String, content: String, timestamp: SystemTime) {
        self.posts.push(Post {
            author,
            content,
            timestamp,
        });
    }

    /// Iterates posts newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Post> {
        self.posts.iter().rev()
    }

    pub fn by_author<'a>(&'a self, author: &'a str) -> impl Iterator<Item = &'a Post> {
        self.iter().filter(move |post| post.author == author)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
