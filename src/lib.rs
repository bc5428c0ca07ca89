pub mod constants;
pub mod kinematics;
pub mod reco_errors;
pub mod track_reconstruction;

pub use constants::{GeV, Hits, Tracks};
pub use kinematics::histogram::Histogram;
pub use kinematics::particle::{invariant_mass, Particle};
pub use kinematics::selection::{diphoton_mass, select_photons, PhotonCandidate, SelectionCuts};
pub use reco_errors::RecoError;
pub use track_reconstruction::hit::Hit;
pub use track_reconstruction::reconstructor::TrackReconstructor;
pub use track_reconstruction::track::{LineFit, Track, TrackFit};
pub use track_reconstruction::tracks_ext::{TrackSetStats, TracksExt};
pub use track_reconstruction::{RecoParams, RecoParamsBuilder};
