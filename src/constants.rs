//! # Constants and type definitions for minireco
//!
//! This module centralizes the **unit-carrying type aliases**, **default
//! reconstruction parameters**, and **container types** shared across the
//! crate.
//!
//! ## Overview
//!
//! - Natural units are used throughout: c = 1, momenta and energies in GeV,
//!   masses in GeV/c² (numerically identical to GeV).
//! - Detector positions are expressed in an arbitrary but consistent length
//!   unit; only ratios and residuals of positions enter the fit, so the
//!   choice does not affect any result.
//! - Container aliases keep the per-track hit storage inline-optimized for
//!   the short tracks this crate targets.

use crate::track_reconstruction::hit::Hit;
use crate::track_reconstruction::track::Track;
use smallvec::SmallVec;

// -------------------------------------------------------------------------------------------------
// Default reconstruction parameters
// -------------------------------------------------------------------------------------------------

/// Default hit capacity of a [`TrackReconstructor`](crate::TrackReconstructor):
/// effectively unbounded.
pub const DEFAULT_MAX_HITS: usize = usize::MAX;

/// Default minimum number of hits required before a candidate group is
/// emitted as a [`Track`]. Groups below this size are discarded.
pub const DEFAULT_MIN_HITS_PER_TRACK: usize = 3;

/// Default maximum longitudinal step between consecutive hits of one
/// candidate track. A larger step closes the current group.
pub const DEFAULT_Z_GAP_MAX: f64 = 25.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Energy, momentum, or mass in natural units (GeV, c = 1)
pub type GeV = f64;

/// Detector position coordinate (arbitrary consistent length unit)
pub type Length = f64;

/// A small, inline-optimized container for the hits of a single track.
pub type Hits = SmallVec<[Hit; 8]>;

/// The ordered set of tracks produced by one reconstruction pass.
pub type Tracks = Vec<Track>;
