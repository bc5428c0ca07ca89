//! # Fitted track and chi-square
//!
//! A [`Track`] is an ordered snapshot of the hits assigned to one candidate
//! trajectory. Its quality metric is the chi-square of a straight-line
//! hypothesis: the track is fitted independently in the x-vs-z and y-vs-z
//! projections (`x = a_x + b_x·z`, `y = a_y + b_y·z`) by weighted least
//! squares, and the weighted squared residuals of both projections are
//! summed.
//!
//! The full fit (intercepts, slopes, per-projection residual sums) is
//! exposed through [`Track::line_fit`] as a [`TrackFit`];
//! [`Track::chi2`] is the scalar shortcut the analysis layer usually wants.

use crate::constants::Hits;
use crate::track_reconstruction::hit::Hit;
use nalgebra::{Matrix2, Vector2};
use std::fmt;

/// A reconstructed track: an ordered group of hits believed to belong to
/// one particle.
///
/// Read-only snapshot semantics: a track is produced by
/// [`TrackReconstructor::reconstruct`](crate::TrackReconstructor::reconstruct)
/// (or assembled directly for testing) and never updated afterwards. The
/// hit order is the order in which the reconstructor assigned the hits, not
/// necessarily sorted by z.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub hits: Hits,
}

/// Straight-line fit of one projection, `value = intercept + slope·z`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit {
    pub intercept: f64,
    pub slope: f64,
    /// Weighted sum of squared residuals of this projection.
    pub chi2: f64,
}

/// The complete straight-line fit of a track: both transverse projections
/// against the longitudinal coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackFit {
    pub xz: LineFit,
    pub yz: LineFit,
}

impl TrackFit {
    /// Total chi-square: the summed residuals of both projections.
    pub fn chi2(&self) -> f64 {
        self.xz.chi2 + self.yz.chi2
    }
}

impl fmt::Display for TrackFit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TrackFit(x = {:.4} + {:.4}·z, y = {:.4} + {:.4}·z, chi2 = {:.6})",
            self.xz.intercept,
            self.xz.slope,
            self.yz.intercept,
            self.yz.slope,
            self.chi2()
        )
    }
}

/// Weighted least-squares line through `(z, value)` pairs.
///
/// Solves the 2×2 normal equations for `(intercept, slope)` and evaluates
/// the weighted residual sum in a second pass. When the normal matrix is
/// singular (all hits at a single z) the fit degrades to a zero-slope line
/// through the weighted mean, which keeps the residual sum finite and ≥ 0.
fn fit_projection(points: &[(f64, f64, f64)]) -> LineFit {
    let (mut sw, mut swz, mut swzz, mut swv, mut swzv) = (0.0, 0.0, 0.0, 0.0, 0.0);
    for &(z, v, w) in points {
        sw += w;
        swz += w * z;
        swzz += w * z * z;
        swv += w * v;
        swzv += w * z * v;
    }

    let normal = Matrix2::new(sw, swz, swz, swzz);
    let rhs = Vector2::new(swv, swzv);

    let (intercept, slope) = match normal.try_inverse() {
        Some(inverse) => {
            let solution = inverse * rhs;
            (solution[0], solution[1])
        }
        // Singular abscissa: no slope is constrained.
        None => (swv / sw, 0.0),
    };

    let chi2 = points
        .iter()
        .map(|&(z, v, w)| {
            let residual = v - (intercept + slope * z);
            w * residual * residual
        })
        .sum();

    LineFit {
        intercept,
        slope,
        chi2,
    }
}

impl Track {
    /// Create a track from an assembled hit container.
    pub fn new(hits: Hits) -> Self {
        Track { hits }
    }

    /// Create a track by collecting hits, preserving their order.
    pub fn from_hits(hits: impl IntoIterator<Item = Hit>) -> Self {
        Track {
            hits: hits.into_iter().collect(),
        }
    }

    /// Fit both transverse projections of this track.
    ///
    /// Return
    /// ------
    /// * A [`TrackFit`] holding intercept, slope, and weighted residual sum
    ///   per projection.
    ///
    /// Notes
    /// -----
    /// * With fewer than 2 hits no fit is meaningful: the returned fit has
    ///   zero slope, the single hit's coordinates (or 0.0 for an empty
    ///   track) as intercepts, and exactly zero residuals.
    /// * Non-finite hit coordinates or weights propagate into the fit
    ///   parameters and residual sums; no error is raised.
    pub fn line_fit(&self) -> TrackFit {
        if self.hits.len() < 2 {
            let (x0, y0) = self
                .hits
                .first()
                .map(|h| (h.x, h.y))
                .unwrap_or((0.0, 0.0));
            let point = |intercept| LineFit {
                intercept,
                slope: 0.0,
                chi2: 0.0,
            };
            return TrackFit {
                xz: point(x0),
                yz: point(y0),
            };
        }

        let xz: Vec<(f64, f64, f64)> =
            self.hits.iter().map(|h| (h.z, h.x, h.weight)).collect();
        let yz: Vec<(f64, f64, f64)> =
            self.hits.iter().map(|h| (h.z, h.y, h.weight)).collect();

        TrackFit {
            xz: fit_projection(&xz),
            yz: fit_projection(&yz),
        }
    }

    /// Chi-square of the straight-line hypothesis for this track.
    ///
    /// The weighted sum of squared residuals of the x-vs-z and y-vs-z line
    /// fits. Exactly `0.0` for tracks with fewer than 2 hits; otherwise
    /// ≥ 0, and 0 (up to rounding) only for perfectly collinear hits.
    pub fn chi2(&self) -> f64 {
        self.line_fit().chi2()
    }
}
