use approx::{assert_abs_diff_eq, assert_relative_eq};
use minireco::{invariant_mass, Particle};

#[test]
fn test_energy_momentum_relation() {
    // E² = p² + m² over a spread of kinematic regimes.
    let cases = [
        (0.0, 0.0, 0.0, 0.938),   // at rest
        (0.3, -0.4, 1.2, 0.105),  // soft muon
        (250.0, 10.0, 900.0, 0.0), // hard photon
    ];
    for (px, py, pz, m) in cases {
        let particle = Particle::new(px, py, pz, m);
        let p = particle.p();
        let e = particle.energy();
        assert!(e >= p);
        assert_relative_eq!(e * e, p * p + m * m, max_relative = 1e-12);
    }
}

#[test]
fn test_eta_conventions() {
    assert_eq!(Particle::new(0.0, 0.0, 0.0, 0.0).eta(), 0.0);
    assert_eq!(Particle::new(0.0, 0.0, 0.0, 1.0).eta(), 0.0);

    // Transverse particle: eta = 0 up to rounding.
    let transverse = Particle::new(7.0, -3.0, 0.0, 0.0);
    assert_abs_diff_eq!(transverse.eta(), 0.0, epsilon = 1e-15);

    // 45° polar angle: eta = -ln(tan(22.5°)) ≈ 0.8814.
    let diagonal = Particle::new(5.0, 0.0, 5.0, 0.0);
    assert_relative_eq!(diagonal.eta(), 0.881373587019543, max_relative = 1e-12);
}

#[test]
fn test_combination_conserves_four_momentum() {
    let pion = Particle::new(1.2, -0.7, 8.0, 0.1396);
    let kaon = Particle::new(-0.4, 2.1, 5.5, 0.4937);

    let sum = pion + kaon;
    assert_relative_eq!(sum.px, pion.px + kaon.px, max_relative = 1e-15);
    assert_relative_eq!(sum.py, pion.py + kaon.py, max_relative = 1e-15);
    assert_relative_eq!(sum.pz, pion.pz + kaon.pz, max_relative = 1e-15);
    assert_relative_eq!(
        sum.energy(),
        pion.energy() + kaon.energy(),
        max_relative = 1e-12
    );

    // Combination is symmetric.
    let flipped = kaon + pion;
    assert_relative_eq!(sum.mass, flipped.mass, max_relative = 1e-14);
}

#[test]
fn test_invariant_mass_is_non_negative() {
    // Collinear massless pairs drive E² − |p|² to rounding noise; the
    // clamp keeps the mass at exactly zero instead of NaN.
    let a = Particle::new(13.37, 0.0, 0.0, 0.0);
    let b = Particle::new(0.01, 0.0, 0.0, 0.0);
    let m = invariant_mass(a, b);
    assert!(m >= 0.0);
    assert!(m.is_finite());

    // Equal-and-opposite momenta: the pair mass is the full energy.
    let c = Particle::new(-13.37, 0.0, 0.0, 0.0);
    assert_relative_eq!(invariant_mass(a, c), 2.0 * 13.37, max_relative = 1e-12);
}

#[test]
fn test_z_to_dimuon_mass() {
    // Two 45.6 GeV muons, back to back in the transverse plane:
    // the pair mass reproduces the parent mass scale.
    let mu_plus = Particle::new(45.6, 0.0, 0.0, 0.105_66);
    let mu_minus = Particle::new(-45.6, 0.0, 0.0, 0.105_66);

    let mass = invariant_mass(mu_plus, mu_minus);
    assert_relative_eq!(mass, 2.0 * mu_plus.energy(), max_relative = 1e-12);
    assert!(mass > 91.0 && mass < 91.5);
}

#[test]
fn test_collider_coordinate_construction() {
    let pt = 60.0;
    let eta: f64 = 1.8;
    let phi = -0.4;
    let energy = pt * eta.cosh(); // massless

    let gamma = Particle::from_pt_eta_phi_energy(pt, eta, phi, energy);
    assert_relative_eq!(gamma.pt(), pt, max_relative = 1e-12);
    assert_relative_eq!(gamma.eta(), eta, max_relative = 1e-12);
    assert_relative_eq!(gamma.phi(), phi, max_relative = 1e-12);
    assert_abs_diff_eq!(gamma.mass, 0.0, epsilon = 1e-5);
}
