//! Per-pass registry of subdivided edges.
//!
//! Adjacent quads share edges; the registry makes sure the second face to
//! reach an edge reuses the midpoint the first one created. It is keyed by the
//! canonical `(min, max)` endpoint pair, so traversal direction does not matter.

use rustc_hash::FxHashMap;

/// Canonical undirected edge key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    /// Smaller endpoint index.
    pub low: u32,
    /// Larger endpoint index.
    pub high: u32,
}

impl EdgeKey {
    /// Key for the edge between `a` and `b`, in either order.
    #[inline]
    #[must_use]
    pub fn new(a: u32, b: u32) -> Self {
        if a < b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }
}

/// A subdivided edge and the index of its midpoint vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeRecord {
    /// Smaller endpoint index.
    pub endpoint_low: u32,
    /// Larger endpoint index.
    pub endpoint_high: u32,
    /// Index of the midpoint vertex.
    pub midpoint: u32,
}

/// Edges subdivided during the current refinement pass.
///
/// Discard it between passes: faces of the next pass use the new vertex
/// indices, so no record from the previous pass can match.
#[derive(Debug, Default)]
pub struct EdgeRegistry {
    records: FxHashMap<EdgeKey, EdgeRecord>,
}

impl EdgeRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry sized for `edges` records.
    #[must_use]
    pub fn with_capacity(edges: usize) -> Self {
        Self {
            records: FxHashMap::with_capacity_and_hasher(edges, Default::default()),
        }
    }

    /// Midpoint of edge `a`–`b`, calling `create` to allocate it if the edge
    /// has not been split yet in this pass.
    ///
    /// `create` runs at most once per edge.
    pub fn midpoint_or_insert_with(
        &mut self,
        a: u32,
        b: u32,
        create: impl FnOnce() -> u32,
    ) -> u32 {
        let key = EdgeKey::new(a, b);
        self.records
            .entry(key)
            .or_insert_with(|| EdgeRecord {
                endpoint_low: key.low,
                endpoint_high: key.high,
                midpoint: create(),
            })
            .midpoint
    }

    /// The record for edge `a`–`b`, if it has been split.
    #[must_use]
    pub fn get(&self, a: u32, b: u32) -> Option<&EdgeRecord> {
        self.records.get(&EdgeKey::new(a, b))
    }

    /// Number of edges split so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no edge has been split.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
