//! # Diphoton candidate selection
//!
//! Quality cuts for reconstructed photon candidates and the pairing of the
//! two survivors into an invariant mass.
//!
//! The cut set reproduces the standard diphoton analysis chain: a tight
//! identification flag, a transverse-momentum floor, a pseudorapidity
//! acceptance window with the barrel/endcap transition region excluded, and
//! track/calorimeter isolation ratios. Candidates arrive pre-reconstructed
//! from an upstream event loop; this module only decides and combines.

use crate::constants::GeV;
use crate::kinematics::particle::{invariant_mass, Particle};

/// One reconstructed photon candidate, as delivered by the event loop.
///
/// Plain data: all quantities are detector-level measurements in GeV (for
/// momenta/energies) or radians (for `phi`). No invariants are enforced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhotonCandidate {
    /// Transverse momentum (GeV).
    pub pt: GeV,
    /// Pseudorapidity.
    pub eta: f64,
    /// Azimuthal angle (radians).
    pub phi: f64,
    /// Total energy (GeV).
    pub energy: GeV,
    /// Tight identification flag from the upstream reconstruction.
    pub is_tight_id: bool,
    /// Summed track pt in a ΔR = 0.3 cone around the candidate (GeV).
    pub ptcone30: GeV,
    /// Summed calorimeter Et in a ΔR = 0.2 cone around the candidate (GeV).
    pub etcone20: GeV,
}

impl PhotonCandidate {
    /// Build the four-momentum of this candidate.
    ///
    /// Return
    /// ------
    /// * A [`Particle`] constructed from `(pt, eta, phi, energy)`.
    pub fn four_momentum(&self) -> Particle {
        Particle::from_pt_eta_phi_energy(self.pt, self.eta, self.phi, self.energy)
    }
}

/// Photon selection cuts.
///
/// Fields
/// ------
/// * `min_pt` – transverse-momentum floor (GeV).
/// * `max_abs_eta` – outer edge of the pseudorapidity acceptance.
/// * `crack_eta_low`, `crack_eta_high` – excluded |η| band covering the
///   barrel/endcap transition; candidates with
///   `crack_eta_low < |η| < crack_eta_high` are rejected.
/// * `max_iso_ratio` – upper bound applied to both `ptcone30/pt` and
///   `etcone20/pt`.
///
/// The [`Default`] values are the standard public diphoton cuts: 15 GeV,
/// |η| < 2.37, crack 1.37–1.52, isolation ratios below 0.065.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionCuts {
    pub min_pt: GeV,
    pub max_abs_eta: f64,
    pub crack_eta_low: f64,
    pub crack_eta_high: f64,
    pub max_iso_ratio: f64,
}

impl Default for SelectionCuts {
    fn default() -> Self {
        SelectionCuts {
            min_pt: 15.0,
            max_abs_eta: 2.37,
            crack_eta_low: 1.37,
            crack_eta_high: 1.52,
            max_iso_ratio: 0.065,
        }
    }
}

impl SelectionCuts {
    /// Identification and acceptance stage of the selection.
    ///
    /// A candidate passes when it carries the tight-ID flag, sits above the
    /// pt floor, and falls inside the η acceptance without landing in the
    /// excluded crack band. Isolation is deliberately not part of this
    /// stage; see [`SelectionCuts::is_isolated`].
    ///
    /// Arguments
    /// ---------
    /// * `candidate`: the photon candidate to test.
    ///
    /// Return
    /// ------
    /// * `true` if the candidate passes identification and acceptance.
    pub fn passes(&self, candidate: &PhotonCandidate) -> bool {
        let abs_eta = candidate.eta.abs();
        candidate.is_tight_id
            && candidate.pt > self.min_pt
            && abs_eta < self.max_abs_eta
            && !(abs_eta > self.crack_eta_low && abs_eta < self.crack_eta_high)
    }

    /// Isolation stage of the selection.
    ///
    /// Both cone ratios must sit below `max_iso_ratio`. A non-positive or
    /// non-finite pt makes the ratios non-finite and the candidate fails,
    /// never panics.
    pub fn is_isolated(&self, candidate: &PhotonCandidate) -> bool {
        candidate.ptcone30 / candidate.pt < self.max_iso_ratio
            && candidate.etcone20 / candidate.pt < self.max_iso_ratio
    }
}

/// Indices of the candidates passing identification and acceptance.
///
/// Input order is preserved; isolation is not applied here.
///
/// Arguments
/// ---------
/// * `candidates`: the photon candidates of one event.
/// * `cuts`: the selection configuration.
///
/// Return
/// ------
/// * Indices into `candidates`, in input order.
pub fn select_photons(candidates: &[PhotonCandidate], cuts: &SelectionCuts) -> Vec<usize> {
    candidates
        .iter()
        .enumerate()
        .filter(|(_, c)| cuts.passes(c))
        .map(|(i, _)| i)
        .collect()
}

/// Diphoton invariant mass of one event, if the event qualifies.
///
/// The event contributes a mass only when **exactly two** candidates pass
/// identification and acceptance and both of them are isolated; anything
/// else yields `None`. The two survivors are promoted to four-momenta and
/// combined.
///
/// Arguments
/// ---------
/// * `candidates`: the photon candidates of one event.
/// * `cuts`: the selection configuration.
///
/// Return
/// ------
/// * `Some(mass)` (GeV) for a qualifying event, `None` otherwise.
///
/// See also
/// --------
/// * [`invariant_mass`] – the underlying pair combination.
pub fn diphoton_mass(candidates: &[PhotonCandidate], cuts: &SelectionCuts) -> Option<GeV> {
    let selected = select_photons(candidates, cuts);
    let [i1, i2] = selected.as_slice() else {
        return None;
    };

    let (g1, g2) = (&candidates[*i1], &candidates[*i2]);
    if !cuts.is_isolated(g1) || !cuts.is_isolated(g2) {
        return None;
    }

    Some(invariant_mass(g1.four_momentum(), g2.four_momentum()))
}
