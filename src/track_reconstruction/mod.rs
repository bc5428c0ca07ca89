//! # Track reconstruction
//!
//! This module turns an accumulated buffer of detector [`Hit`](hit::Hit)s
//! into fitted straight-line [`Track`](crate::Track)s.
//!
//! ## Pipeline overview
//!
//! 1. **Accumulation** – hits are appended to a
//!    [`TrackReconstructor`](crate::TrackReconstructor) in arrival order,
//!    bounded by a configured capacity (overflow is silently dropped).
//!
//! 2. **Grouping** – `reconstruct()` scans the buffer in storage order and
//!    closes a candidate group whenever the longitudinal step to the next
//!    hit exceeds `z_gap_max`. Groups with at least `min_hits_per_track`
//!    hits are emitted as tracks, smaller ones are discarded.
//!
//! 3. **Fitting** – each [`Track`](crate::Track) exposes a weighted
//!    least-squares straight-line fit of its x-vs-z and y-vs-z projections
//!    and the summed squared residuals of both as its chi-square.
//!
//! All tunables live in [`RecoParams`], built through the validating
//! [`RecoParamsBuilder`].
//!
//! ## Example
//!
//! ```rust
//! use minireco::{Hit, RecoParams, TrackReconstructor};
//!
//! let params = RecoParams::builder()
//!     .max_hits(1024)
//!     .z_gap_max(15.0)
//!     .build()
//!     .unwrap();
//!
//! let mut reco = TrackReconstructor::with_params(params);
//! for i in 0..10 {
//!     reco.add_hit(Hit::new(i as f64 * 0.5, i as f64 * 0.3, i as f64 * 10.0, 1.0));
//! }
//!
//! let tracks = reco.reconstruct();
//! for track in &tracks {
//!     println!("{} hits, chi2 = {:.3}", track.hits.len(), track.chi2());
//! }
//! ```

use crate::constants::{DEFAULT_MAX_HITS, DEFAULT_MIN_HITS_PER_TRACK, DEFAULT_Z_GAP_MAX};
use crate::reco_errors::RecoError;
use std::cmp::Ordering::Greater;
use std::fmt;

pub mod hit;
pub mod reconstructor;
pub mod track;
pub mod tracks_ext;

/// Configuration parameters for [`TrackReconstructor`](crate::TrackReconstructor).
///
/// Fields
/// ------
/// * `max_hits` – capacity of the hit buffer. Hits submitted beyond this
///   count are silently dropped. The default (`usize::MAX`) is effectively
///   unbounded.
/// * `min_hits_per_track` – minimum group size required before a candidate
///   group is emitted as a track; smaller groups are discarded rather than
///   emitted as degenerate one- or two-hit tracks. Default 3.
/// * `z_gap_max` – maximum longitudinal step `|Δz|` between consecutive
///   hits of one candidate group; a larger step closes the group.
///   Default 25.0.
///
/// Defaults
/// --------
/// ```rust
/// use minireco::RecoParams;
/// let params = RecoParams::default();
/// assert_eq!(params.min_hits_per_track, 3);
/// ```
///
/// See also
/// --------
/// * [`RecoParamsBuilder`] – fluent construction with validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RecoParams {
    pub max_hits: usize,
    pub min_hits_per_track: usize,
    pub z_gap_max: f64,
}

impl RecoParams {
    /// Construct parameters with the default values.
    ///
    /// Equivalent to [`RecoParams::default()`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new [`RecoParamsBuilder`] to override defaults step by step.
    pub fn builder() -> RecoParamsBuilder {
        RecoParamsBuilder::new()
    }
}

impl Default for RecoParams {
    fn default() -> Self {
        RecoParams {
            max_hits: DEFAULT_MAX_HITS,
            min_hits_per_track: DEFAULT_MIN_HITS_PER_TRACK,
            z_gap_max: DEFAULT_Z_GAP_MAX,
        }
    }
}

impl fmt::Display for RecoParams {
    /// Compact by default; aligned multi-line with the alternate flag (`{:#}`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "Track Reconstruction Parameters")?;
            writeln!(f, "-------------------------------")?;
            if self.max_hits == usize::MAX {
                writeln!(f, "  max_hits           = unbounded")?;
            } else {
                writeln!(f, "  max_hits           = {}", self.max_hits)?;
            }
            writeln!(f, "  min_hits_per_track = {}", self.min_hits_per_track)?;
            write!(f, "  z_gap_max          = {:.3}", self.z_gap_max)
        } else {
            write!(
                f,
                "RecoParams(max_hits={}, min_hits_per_track={}, z_gap_max={:.2})",
                self.max_hits, self.min_hits_per_track, self.z_gap_max
            )
        }
    }
}

/// Builder for [`RecoParams`], with validation.
#[derive(Debug, Clone, Default)]
pub struct RecoParamsBuilder {
    params: RecoParams,
}

impl RecoParamsBuilder {
    /// Create a new builder initialized with default values.
    pub fn new() -> Self {
        Self {
            params: RecoParams::default(),
        }
    }

    pub fn max_hits(mut self, v: usize) -> Self {
        self.params.max_hits = v;
        self
    }

    pub fn min_hits_per_track(mut self, v: usize) -> Self {
        self.params.min_hits_per_track = v;
        self
    }

    pub fn z_gap_max(mut self, v: f64) -> Self {
        self.params.z_gap_max = v;
        self
    }

    /// Return true iff x > 0.0 and comparable (i.e., not NaN).
    #[inline]
    fn gt0(x: f64) -> bool {
        x.partial_cmp(&0.0) == Some(Greater)
    }

    /// Finalize the builder and produce a [`RecoParams`] instance.
    ///
    /// Validation rules
    /// ----------------
    /// * `min_hits_per_track >= 2` – a smaller threshold would emit tracks
    ///   that cannot constrain a line fit.
    /// * `z_gap_max > 0.0` and not NaN.
    ///
    /// `max_hits` is unrestricted; a zero capacity is legal and simply drops
    /// every submitted hit.
    ///
    /// Return
    /// ------
    /// * `Ok(RecoParams)` if all values are valid.
    /// * `Err(RecoError::InvalidRecoParameter)` otherwise.
    pub fn build(self) -> Result<RecoParams, RecoError> {
        let p = &self.params;

        if p.min_hits_per_track < 2 {
            return Err(RecoError::InvalidRecoParameter(
                "min_hits_per_track must be >= 2".into(),
            ));
        }
        if !Self::gt0(p.z_gap_max) {
            return Err(RecoError::InvalidRecoParameter(
                "z_gap_max must be > 0".into(),
            ));
        }

        Ok(self.params)
    }
}

#[cfg(test)]
mod reco_params_tests {
    use super::*;

    #[test]
    fn builder_defaults_round_trip() {
        let params = RecoParams::builder().build().unwrap();
        assert_eq!(params, RecoParams::default());
    }

    #[test]
    fn builder_overrides() {
        let params = RecoParams::builder()
            .max_hits(5)
            .min_hits_per_track(4)
            .z_gap_max(12.5)
            .build()
            .unwrap();
        assert_eq!(params.max_hits, 5);
        assert_eq!(params.min_hits_per_track, 4);
        assert_eq!(params.z_gap_max, 12.5);
    }

    #[test]
    fn builder_rejects_invalid_values() {
        assert!(RecoParams::builder().min_hits_per_track(1).build().is_err());
        assert!(RecoParams::builder().z_gap_max(0.0).build().is_err());
        assert!(RecoParams::builder().z_gap_max(-3.0).build().is_err());
        assert!(RecoParams::builder().z_gap_max(f64::NAN).build().is_err());
    }

    #[test]
    fn zero_capacity_is_legal() {
        let params = RecoParams::builder().max_hits(0).build().unwrap();
        assert_eq!(params.max_hits, 0);
    }

    #[test]
    fn display_forms() {
        let params = RecoParams::builder().max_hits(100).build().unwrap();
        let compact = format!("{params}");
        assert!(compact.contains("max_hits=100"));

        let pretty = format!("{params:#}");
        assert!(pretty.contains("Track Reconstruction Parameters"));
        assert!(format!("{:#}", RecoParams::default()).contains("unbounded"));
    }
}
