//! Authoritative in-memory post collection.
//!
//! The store only changes in response to confirmed server results; every
//! method here is the local half of a completed remote call.

use std::collections::HashSet;

use crate::state::Post;

/// Ordered post collection, most recently created first.
///
/// Invariant: no two elements share an `id` once any method returns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostStore {
    /// Posts in display order.
    posts: Vec<Post>,
}

impl PostStore {
    /// What: Build a store from an initial list, collapsing duplicate ids.
    ///
    /// Inputs:
    /// - `posts`: Posts in server order.
    ///
    /// Output:
    /// - Store holding the first occurrence of each id.
    #[must_use]
    pub fn from_posts(posts: Vec<Post>) -> Self {
        let mut store = Self::default();
        store.replace_all(posts);
        store
    }

    /// What: Replace the whole collection with a freshly loaded list.
    ///
    /// Inputs:
    /// - `posts`: Posts as returned by `GET /posts`.
    ///
    /// Output:
    /// - None; the previous contents are discarded.
    ///
    /// Details:
    /// - The first occurrence of a repeated id wins so the id invariant holds
    ///   even if the service misbehaves.
    pub fn replace_all(&mut self, posts: Vec<Post>) {
        let mut seen: HashSet<u64> = HashSet::with_capacity(posts.len());
        let before = posts.len();
        self.posts = posts.into_iter().filter(|p| seen.insert(p.id)).collect();
        if self.posts.len() != before {
            tracing::warn!(
                dropped = before - self.posts.len(),
                "collapsed duplicate post ids in loaded list"
            );
        }
    }

    /// Drop every post.
    pub fn clear(&mut self) {
        self.posts.clear();
    }

    /// What: Insert a newly created post at the front.
    ///
    /// Inputs:
    /// - `post`: Post as returned by `POST /posts`.
    ///
    /// Output:
    /// - None.
    ///
    /// Details:
    /// - An existing element with the same id is removed first. Some services
    ///   hand out the same id for every create, so this is what keeps ids
    ///   unique.
    pub fn prepend(&mut self, post: Post) {
        if let Some(existing) = self.remove(post.id) {
            tracing::debug!(id = existing.id, "replacing post with reused id on create");
        }
        self.posts.insert(0, post);
    }

    /// What: Swap in the server's version of an edited post.
    ///
    /// Inputs:
    /// - `post`: Full post returned by `PATCH /posts/{id}`.
    ///
    /// Output:
    /// - `true` when an element with `post.id` was replaced; `false` when no
    ///   such element exists (nothing changes).
    pub fn replace(&mut self, post: Post) -> bool {
        match self.posts.iter_mut().find(|p| p.id == post.id) {
            Some(slot) => {
                *slot = post;
                true
            }
            None => false,
        }
    }

    /// Remove the post with `id`, preserving the order of the rest.
    pub fn remove(&mut self, id: u64) -> Option<Post> {
        let idx = self.position(id)?;
        Some(self.posts.remove(idx))
    }

    /// Index of the post with `id`.
    #[must_use]
    pub fn position(&self, id: u64) -> Option<usize> {
        self.posts.iter().position(|p| p.id == id)
    }

    /// The post with `id`.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// All posts in display order.
    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Number of posts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Whether the store holds no posts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
