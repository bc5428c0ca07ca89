//! # Relativistic kinematics
//!
//! Four-momentum handling and the photon-pair analysis built on top of it.
//!
//! The central type is [`Particle`](crate::kinematics::particle::Particle),
//! an immutable four-momentum value supporting relativistic combination and
//! the usual derived quantities (momentum magnitude, energy, pseudorapidity,
//! transverse momentum, azimuth, rapidity). Everything works in natural
//! units (c = 1, GeV).
//!
//! [`selection`] applies the standard diphoton candidate cuts (tight ID,
//! transverse momentum, acceptance, isolation) and pairs the surviving
//! photons into an invariant mass, and [`histogram`] accumulates those
//! masses into a fixed-binning in-memory spectrum.

pub mod histogram;
pub mod particle;
pub mod selection;
