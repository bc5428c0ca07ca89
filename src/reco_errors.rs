use thiserror::Error;

/// Errors reported by the configuration boundary of the crate.
///
/// The numeric core (kinematics, hit accumulation, track fitting) is total
/// over its input domain and never returns an error: degenerate inputs
/// propagate as IEEE-754 non-finite values, and capacity overflow in
/// [`TrackReconstructor::add_hit`](crate::TrackReconstructor::add_hit) is a
/// silent no-op. Only explicit configuration (parameter builders, histogram
/// construction) is validated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecoError {
    #[error("Invalid reconstruction parameter: {0}")]
    InvalidRecoParameter(String),

    #[error("Invalid histogram binning: {0}")]
    InvalidHistogramBinning(String),
}
