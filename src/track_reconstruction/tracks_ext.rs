//! # Set-level track metrics
//!
//! Convenience queries over a reconstructed track set: total hit counts,
//! distribution statistics, and best-track selection by chi-square. Useful
//! for quick reporting in a surrounding analysis driver without walking the
//! set by hand.

use crate::track_reconstruction::track::Track;
use std::cmp::Ordering;
use std::fmt;

/// Summary statistics for per-track hit counts.
///
/// Fields
/// ------
/// * `min` – smallest number of hits on any track.
/// * `p25` – 25th percentile (first quartile) of hit counts.
/// * `median` – 50th percentile.
/// * `p95` – 95th percentile, the upper tail of the distribution.
/// * `max` – largest number of hits on any track.
///
/// Percentiles use the *nearest-rank* convention: index `round(q × (N−1))`
/// for quantile `q ∈ [0,1]`, clamped to the valid range, which stays stable
/// for small track sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackSetStats {
    pub min: usize,
    pub p25: usize,
    pub median: usize,
    pub p95: usize,
    pub max: usize,
}

impl fmt::Display for TrackSetStats {
    /// Compact by default; multi-line table with the alternate flag (`{:#}`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "Hits per track — summary")?;
            writeln!(f, "------------------------")?;
            writeln!(f, "min    : {}", self.min)?;
            writeln!(f, "p25    : {}", self.p25)?;
            writeln!(f, "median : {}", self.median)?;
            writeln!(f, "p95    : {}", self.p95)?;
            write!(f, "max    : {}", self.max)
        } else {
            write!(
                f,
                "min={}, p25={}, median={}, p95={}, max={}",
                self.min, self.p25, self.median, self.p95, self.max
            )
        }
    }
}

/// Set-level queries over reconstructed tracks.
pub trait TracksExt {
    /// Total number of hits across all tracks.
    fn total_hits(&self) -> usize;

    /// Distribution statistics of per-track hit counts.
    ///
    /// Return
    /// ------
    /// * `None` for an empty set, `Some(TrackSetStats)` otherwise.
    fn hit_count_stats(&self) -> Option<TrackSetStats>;

    /// The track with the lowest chi-square.
    ///
    /// NaN chi-squares sort last, so a finite-quality track is always
    /// preferred when one exists. Ties resolve to the earliest track.
    ///
    /// Return
    /// ------
    /// * `None` for an empty set, `Some(&Track)` otherwise.
    fn best_track(&self) -> Option<&Track>;
}

impl TracksExt for [Track] {
    #[inline]
    fn total_hits(&self) -> usize {
        self.iter().map(|track| track.hits.len()).sum()
    }

    fn hit_count_stats(&self) -> Option<TrackSetStats> {
        let mut counts: Vec<usize> = self.iter().map(|track| track.hits.len()).collect();
        if counts.is_empty() {
            return None;
        }
        counts.sort_unstable();

        #[inline]
        fn q_index(n: usize, q: f64) -> usize {
            let pos = q * (n as f64 - 1.0);
            let idx = pos.round() as isize;
            idx.clamp(0, (n as isize) - 1) as usize
        }

        let n = counts.len();
        Some(TrackSetStats {
            min: counts[0],
            p25: counts[q_index(n, 0.25)],
            median: counts[q_index(n, 0.50)],
            p95: counts[q_index(n, 0.95)],
            max: counts[n - 1],
        })
    }

    fn best_track(&self) -> Option<&Track> {
        self.iter()
            .map(|track| (track, track.chi2()))
            .min_by(|(_, a), (_, b)| match (a.is_nan(), b.is_nan()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            })
            .map(|(track, _)| track)
    }
}

#[cfg(test)]
mod tracks_ext_tests {
    use super::*;
    use crate::track_reconstruction::hit::Hit;

    fn straight_track(n: usize, drift: f64) -> Track {
        Track::from_hits((0..n).map(|i| {
            let z = i as f64 * 10.0;
            Hit::new(drift * z, 0.0, z, 1.0)
        }))
    }

    fn kinked_track(n: usize, kink: f64) -> Track {
        Track::from_hits((0..n).map(|i| {
            let z = i as f64 * 10.0;
            let x = if i % 2 == 0 { kink } else { -kink };
            Hit::new(x, 0.0, z, 1.0)
        }))
    }

    #[test]
    fn empty_set() {
        let tracks: Vec<Track> = Vec::new();
        assert_eq!(tracks.total_hits(), 0);
        assert!(tracks.hit_count_stats().is_none());
        assert!(tracks.best_track().is_none());
    }

    #[test]
    fn totals_and_stats() {
        let tracks = vec![
            straight_track(3, 0.1),
            straight_track(5, 0.2),
            straight_track(8, 0.0),
        ];
        assert_eq!(tracks.total_hits(), 16);

        let stats = tracks.hit_count_stats().unwrap();
        assert_eq!(stats.min, 3);
        assert_eq!(stats.median, 5);
        assert_eq!(stats.max, 8);
    }

    #[test]
    fn best_track_prefers_lowest_chi2() {
        let tracks = vec![kinked_track(5, 1.0), straight_track(5, 0.3)];
        let best = tracks.best_track().unwrap();
        assert_eq!(best, &tracks[1]);
    }

    #[test]
    fn best_track_sorts_nan_last() {
        let nan_track = Track::from_hits([
            Hit::new(f64::NAN, 0.0, 0.0, 1.0),
            Hit::new(1.0, 0.0, 10.0, 1.0),
            Hit::new(2.0, 0.0, 20.0, 1.0),
        ]);
        let tracks = vec![nan_track, kinked_track(4, 2.0)];
        let best = tracks.best_track().unwrap();
        assert_eq!(best, &tracks[1]);
    }

    #[test]
    fn stats_display_forms() {
        let tracks = vec![straight_track(3, 0.0), straight_track(9, 0.0)];
        let stats = tracks.hit_count_stats().unwrap();
        assert!(format!("{stats}").contains("min=3"));
        assert!(format!("{stats:#}").contains("median"));
    }
}
