//! Tag-based cache invalidation
//!
//! Reads are grouped under a [`Tag`]; a successful mutation invalidates a
//! fixed set of tags so every view of that data refetches on next access.
//!
//! ```text
//! mutation ok ──► Invalidate::invalidate(tag) ──┬─► TagCache   (drop entries, bump generation)
//!                                                └─► extra sinks (host-side caches)
//! ```

use dashmap::DashMap;
use shared::Payload;
use std::fmt;
use std::sync::Arc;

/// Logical data group that can be invalidated as a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
    CurrentUser,
    User,
    ProfileStats,
    UsersTable,
    Project,
    Projects,
    ProjectsTable,
    ProjectsReviewer,
    ProjectsFlagged,
    ProjectsCreator,
    ProjectsUser,
    ProjectsBacker,
    ProjectsSaved,
    ProjectsLikes,
    ProjectsDidILikeThis,
    ProjectsDidISaveThis,
    ProjectsReview,
    DidIBack,
    ProjectBackers,
    BackingsTable,
    BackingRewards,
    Rewards,
    Updates,
    Comments,
    DisputesTable,
    StatsGeneral,
    StatsOverview,
    StatsTopProjects,
    StatsTopUsers,
    StatsCategories,
    StatsCreatorsBackers,
    StatsBackingsRefunds,
}

impl Tag {
    pub const ALL: [Tag; 32] = [
        Tag::CurrentUser,
        Tag::User,
        Tag::ProfileStats,
        Tag::UsersTable,
        Tag::Project,
        Tag::Projects,
        Tag::ProjectsTable,
        Tag::ProjectsReviewer,
        Tag::ProjectsFlagged,
        Tag::ProjectsCreator,
        Tag::ProjectsUser,
        Tag::ProjectsBacker,
        Tag::ProjectsSaved,
        Tag::ProjectsLikes,
        Tag::ProjectsDidILikeThis,
        Tag::ProjectsDidISaveThis,
        Tag::ProjectsReview,
        Tag::DidIBack,
        Tag::ProjectBackers,
        Tag::BackingsTable,
        Tag::BackingRewards,
        Tag::Rewards,
        Tag::Updates,
        Tag::Comments,
        Tag::DisputesTable,
        Tag::StatsGeneral,
        Tag::StatsOverview,
        Tag::StatsTopProjects,
        Tag::StatsTopUsers,
        Tag::StatsCategories,
        Tag::StatsCreatorsBackers,
        Tag::StatsBackingsRefunds,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::CurrentUser => "current-user",
            Self::User => "user",
            Self::ProfileStats => "profile-stats",
            Self::UsersTable => "users-table",
            Self::Project => "project",
            Self::Projects => "projects",
            Self::ProjectsTable => "projects-table",
            Self::ProjectsReviewer => "projects-reviewer",
            Self::ProjectsFlagged => "projects-flagged",
            Self::ProjectsCreator => "projects-creator",
            Self::ProjectsUser => "projects-user",
            Self::ProjectsBacker => "projects-backer",
            Self::ProjectsSaved => "projects-saved",
            Self::ProjectsLikes => "projects-likes",
            Self::ProjectsDidILikeThis => "projects-did-i-like-this",
            Self::ProjectsDidISaveThis => "projects-did-i-save-this",
            Self::ProjectsReview => "projects-review",
            Self::DidIBack => "did-i-back",
            Self::ProjectBackers => "project-backers",
            Self::BackingsTable => "backings-table",
            Self::BackingRewards => "backing-rewards",
            Self::Rewards => "rewards",
            Self::Updates => "updates",
            Self::Comments => "comments",
            Self::DisputesTable => "disputes-table",
            Self::StatsGeneral => "stats-general",
            Self::StatsOverview => "stats-overview",
            Self::StatsTopProjects => "stats-top-projects",
            Self::StatsTopUsers => "stats-top-users",
            Self::StatsCategories => "stats-categories",
            Self::StatsCreatorsBackers => "stats-creators-backers",
            Self::StatsBackingsRefunds => "stats-backings-refunds",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sink for invalidation signals.
///
/// Infallible and synchronous: a failing sink must not turn a successful
/// mutation into a failure.
pub trait Invalidate: Send + Sync {
    fn invalidate(&self, tag: Tag);

    fn invalidate_all(&self, tags: &[Tag]) {
        for tag in tags {
            self.invalidate(*tag);
        }
    }
}

impl<T: Invalidate + ?Sized> Invalidate for Arc<T> {
    fn invalidate(&self, tag: Tag) {
        (**self).invalidate(tag);
    }
}

/// In-memory cache of tagged read bodies.
///
/// Entries are keyed by request path, query and (for authenticated
/// reads) a fingerprint of the bearer token. Each tag carries a
/// generation counter bumped on every invalidation; a read only stores its
/// body if the generation it started under is still current, so a response
/// that raced an invalidation is never cached.
#[derive(Debug, Clone, Default)]
pub struct TagCache {
    inner: Arc<TagCacheInner>,
}

#[derive(Debug, Default)]
struct TagCacheInner {
    /// tag → generation
    generations: DashMap<Tag, u64>,
    /// tag → (cache key → body)
    entries: DashMap<Tag, DashMap<String, Payload>>,
}

impl TagCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached body for `key` under `tag`
    pub fn get(&self, tag: Tag, key: &str) -> Option<Payload> {
        let entries = self.inner.entries.get(&tag)?;
        entries.get(key).map(|body| body.value().clone())
    }

    /// Number of invalidations `tag` has seen
    pub fn generation(&self, tag: Tag) -> u64 {
        self.inner.generations.get(&tag).map(|g| *g).unwrap_or(0)
    }

    /// Store a body read under `seen_generation`. Returns `false` (and stores
    /// nothing) if the tag was invalidated since.
    pub fn store(&self, tag: Tag, key: String, body: Payload, seen_generation: u64) -> bool {
        // The generation entry stays locked while inserting so an
        // invalidation cannot slip in between the check and the write.
        let generation = self.inner.generations.entry(tag).or_insert(0);
        if *generation != seen_generation {
            return false;
        }
        self.inner.entries.entry(tag).or_default().insert(key, body);
        drop(generation);
        true
    }

    /// Number of cached bodies under `tag`
    pub fn len(&self, tag: Tag) -> usize {
        self.inner.entries.get(&tag).map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.inner.entries.iter().all(|e| e.value().is_empty())
    }
}

impl Invalidate for TagCache {
    fn invalidate(&self, tag: Tag) {
        let mut generation = self.inner.generations.entry(tag).or_insert(0);
        *generation += 1;
        let dropped = self
            .inner
            .entries
            .remove(&tag)
            .map(|(_, entries)| entries.len())
            .unwrap_or(0);
        tracing::debug!(tag = %tag, generation = *generation, dropped, "Tag invalidated");
    }
}
