//! Endpoint descriptors
//!
//! Each backend operation is declared once as a `const` [`Endpoint`]: its
//! verb, whether it reads or mutates, the tags it invalidates on success,
//! the not-found message it recognizes and its session requirements. The
//! shared call path in [`crate::CrowdfundClient`] does the rest.

use crate::cache::Tag;
use crate::http::Verb;

/// How a read's body may be cached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// Not grouped under any tag, never cached
    Uncached,
    /// Grouped under a tag but always fetched from the network
    NoStore(Tag),
    /// Cached until the tag is invalidated
    Tagged(Tag),
}

impl CachePolicy {
    pub fn tag(self) -> Option<Tag> {
        match self {
            Self::Uncached => None,
            Self::NoStore(tag) | Self::Tagged(tag) => Some(tag),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointKind {
    Read(CachePolicy),
    Mutation,
}

/// What a successful call does to the session cookie
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEffect {
    Keep,
    Clear,
}

/// Static descriptor of one backend operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Action name, used in logs
    pub name: &'static str,
    pub verb: Verb,
    pub kind: EndpointKind,
    /// Tags fired after a successful call
    pub invalidates: &'static [Tag],
    /// Backend error string meaning "no such entity" (reads only)
    pub not_found: Option<&'static str>,
    /// Attach the session token as a bearer credential
    pub auth: bool,
    pub session: SessionEffect,
}

impl Endpoint {
    const fn base(name: &'static str, verb: Verb, kind: EndpointKind) -> Self {
        Self {
            name,
            verb,
            kind,
            invalidates: &[],
            not_found: None,
            auth: false,
            session: SessionEffect::Keep,
        }
    }

    /// GET grouped under `tag`, always refetched
    pub const fn read(name: &'static str, tag: Tag) -> Self {
        Self::base(name, Verb::Get, EndpointKind::Read(CachePolicy::NoStore(tag)))
    }

    /// GET whose body is cached under `tag`
    pub const fn cached(name: &'static str, tag: Tag) -> Self {
        Self::base(name, Verb::Get, EndpointKind::Read(CachePolicy::Tagged(tag)))
    }

    /// GET outside any tag
    pub const fn get(name: &'static str) -> Self {
        Self::base(name, Verb::Get, EndpointKind::Read(CachePolicy::Uncached))
    }

    pub const fn mutation(name: &'static str, verb: Verb, invalidates: &'static [Tag]) -> Self {
        let mut endpoint = Self::base(name, verb, EndpointKind::Mutation);
        endpoint.invalidates = invalidates;
        endpoint
    }

    pub const fn authenticated(mut self) -> Self {
        self.auth = true;
        self
    }

    pub const fn not_found(mut self, message: &'static str) -> Self {
        self.not_found = Some(message);
        self
    }

    /// Drop the session cookie after a successful call
    pub const fn clears_session(mut self) -> Self {
        self.session = SessionEffect::Clear;
        self
    }

    pub fn is_read(&self) -> bool {
        matches!(self.kind, EndpointKind::Read(_))
    }

    /// Tag under which the body is cached, for [`CachePolicy::Tagged`] reads
    pub fn cache_tag(&self) -> Option<Tag> {
        match self.kind {
            EndpointKind::Read(CachePolicy::Tagged(tag)) => Some(tag),
            _ => None,
        }
    }

    /// Whether `message` is this endpoint's not-found error
    pub fn is_not_found(&self, message: &str) -> bool {
        self.is_read() && self.not_found == Some(message)
    }
}
