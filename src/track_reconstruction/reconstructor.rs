//! # Hit accumulation and track building
//!
//! [`TrackReconstructor`] owns a bounded buffer of detector hits and
//! partitions it into candidate tracks on demand. Accumulation and
//! reconstruction are decoupled: `reconstruct()` never mutates the buffer,
//! so it can be called repeatedly (and cheaply re-run after more hits
//! arrive) with deterministic results.

use crate::constants::Tracks;
use crate::track_reconstruction::hit::Hit;
use crate::track_reconstruction::track::Track;
use crate::track_reconstruction::RecoParams;
use itertools::Itertools;

/// Accumulates detector hits and groups them into straight-line track
/// candidates.
///
/// Capacity
/// --------
/// The buffer never grows past `params.max_hits`; hits submitted beyond the
/// cap are **silently dropped** so upstream producers need not branch on
/// capacity. The default capacity is effectively unbounded.
///
/// Grouping policy
/// ---------------
/// Hits are scanned in storage (insertion) order. A candidate group grows
/// while the longitudinal step to the next hit satisfies
/// `|Δz| ≤ params.z_gap_max`; a larger step closes the group. Closed groups
/// with at least `params.min_hits_per_track` hits become [`Track`]s, emitted
/// in formation order; smaller groups are discarded. The procedure is
/// deterministic and order-preserving, and assigns every buffered hit to at
/// most one track.
///
/// Concurrency
/// -----------
/// Single-threaded by contract: the buffer is exclusively owned and no
/// operation suspends or blocks. Callers needing concurrent access must
/// serialize externally (one reconstructor per worker, or an external lock).
#[derive(Debug, Clone, Default)]
pub struct TrackReconstructor {
    hits: Vec<Hit>,
    params: RecoParams,
}

impl TrackReconstructor {
    /// Create a reconstructor with default parameters (effectively
    /// unbounded capacity).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reconstructor with an explicit hit capacity and default
    /// grouping thresholds.
    pub fn with_max_hits(max_hits: usize) -> Self {
        TrackReconstructor {
            hits: Vec::new(),
            params: RecoParams {
                max_hits,
                ..RecoParams::default()
            },
        }
    }

    /// Create a reconstructor from a full parameter set.
    pub fn with_params(params: RecoParams) -> Self {
        TrackReconstructor {
            hits: Vec::new(),
            params,
        }
    }

    /// Append a hit to the buffer.
    ///
    /// A no-op once the buffer holds `max_hits` hits: the overflowing hit is
    /// dropped without any error signal.
    pub fn add_hit(&mut self, hit: Hit) {
        if self.hits.len() < self.params.max_hits {
            self.hits.push(hit);
        }
    }

    /// Empty the hit buffer.
    pub fn clear(&mut self) {
        self.hits.clear();
    }

    /// Number of hits currently buffered. O(1).
    pub fn num_hits(&self) -> usize {
        self.hits.len()
    }

    /// The buffered hits, in insertion order.
    pub fn hits(&self) -> &[Hit] {
        &self.hits
    }

    /// The active parameter set.
    pub fn params(&self) -> &RecoParams {
        &self.params
    }

    /// Partition the buffered hits into track candidates.
    ///
    /// The buffer is read, never mutated: repeated calls without an
    /// intervening [`add_hit`](Self::add_hit) or [`clear`](Self::clear)
    /// produce identical track membership.
    ///
    /// Return
    /// ------
    /// * The accepted tracks in formation order; empty when fewer hits are
    ///   buffered than `min_hits_per_track`.
    pub fn reconstruct(&self) -> Tracks {
        let mut tracks = Tracks::new();

        // Indices of the last hit of each group: a group ends where the z
        // step to the following hit exceeds the gap. A NaN step never
        // compares greater, so non-finite coordinates extend the current
        // group rather than splitting it.
        let group_ends = self
            .hits
            .iter()
            .tuple_windows()
            .positions(|(prev, next)| (next.z - prev.z).abs() > self.params.z_gap_max)
            .map(|i| i + 1)
            .chain(std::iter::once(self.hits.len()));

        let mut start = 0;
        for end in group_ends {
            if end > start && end - start >= self.params.min_hits_per_track {
                tracks.push(Track::from_hits(self.hits[start..end].iter().copied()));
            }
            start = end;
        }

        tracks
    }
}
