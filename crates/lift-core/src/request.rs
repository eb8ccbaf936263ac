//! Transport requests and the batch handed to the simulation.

use crate::{BuildingConfig, Direction, Floor, LiftError, LiftResult};

// ── Request ───────────────────────────────────────────────────────────────────

/// One passenger trip from `source` to `destination`.
///
/// Immutable once created.  Use [`BuildingConfig::request`] to build a
/// validated request; [`Request::new`] performs no checks.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Request {
    pub source:      Floor,
    pub destination: Floor,
}

impl Request {
    #[inline]
    pub const fn new(source: Floor, destination: Floor) -> Self {
        Self { source, destination }
    }

    /// Derived travel direction.
    #[inline]
    pub fn direction(&self) -> Direction {
        Direction::of(self.source, self.destination)
    }
}

impl std::fmt::Display for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination)
    }
}

// ── RequestBatch ──────────────────────────────────────────────────────────────

/// An ordered collection of requests gathered before scheduling begins.
///
/// The simulation only ever reads a batch; sorted or grouped views are
/// derived copies, so the original order is preserved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RequestBatch {
    requests: Vec<Request>,
}

impl RequestBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `requests` as-is.  No bounds or floor checks are made; see
    /// [`validate`][Self::validate].
    pub fn from_requests(requests: Vec<Request>) -> Self {
        Self { requests }
    }

    /// Append a request, rejecting it if the batch is already full or the
    /// request is not valid for `config`.
    pub fn push_checked(&mut self, request: Request, config: &BuildingConfig) -> LiftResult<()> {
        if self.is_full(config) {
            return Err(LiftError::TooManyRequests(config.max_requests));
        }
        let request = config.request(request.source, request.destination)?;
        self.requests.push(request);
        Ok(())
    }

    /// Check every request and the batch size against `config`.
    pub fn validate(&self, config: &BuildingConfig) -> LiftResult<()> {
        if self.requests.len() > config.max_requests {
            return Err(LiftError::TooManyRequests(config.max_requests));
        }
        for r in &self.requests {
            config.request(r.source, r.destination)?;
        }
        Ok(())
    }

    /// `true` once the batch holds `config.max_requests` requests.
    #[inline]
    pub fn is_full(&self, config: &BuildingConfig) -> bool {
        self.requests.len() >= config.max_requests
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn requests(&self) -> &[Request] {
        &self.requests
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Request> {
        self.requests.iter()
    }
}

impl FromIterator<Request> for RequestBatch {
    fn from_iter<I: IntoIterator<Item = Request>>(iter: I) -> Self {
        Self { requests: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a RequestBatch {
    type Item = &'a Request;
    type IntoIter = std::slice::Iter<'a, Request>;

    fn into_iter(self) -> Self::IntoIter {
        self.requests.iter()
    }
}
