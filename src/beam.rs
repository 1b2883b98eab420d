//! Beams taking part in the collision

use crate::{
    error::Result,
    linalg::{self, Momentum},
    numeric::Float,
    species::{BeamRole, Species, PROTON_MASS},
};
use prefix_num_ops::real::*;

/// A beam: what it is made of, and how fast it goes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Beam {
    /// Particle species
    species: Species,

    /// Momentum per nucleon along the beam axis (AGeV/c)
    momentum: Float,
}
//
impl Beam {
    /// Describe a beam of a known species
    pub fn new(species: Species, momentum: Float) -> Self {
        Self { species, momentum }
    }

    /// Describe a beam from its legacy (mass number, charge) codes
    pub fn from_codes(role: BeamRole, mass_number: i32, charge: i32, momentum: Float) -> Result<Self> {
        Ok(Self::new(
            Species::from_codes(role, mass_number, charge)?,
            momentum,
        ))
    }

    /// Particle species
    pub fn species(&self) -> Species {
        self.species
    }

    /// Legacy mass number code (A, or 0 for photons, -1 for pions)
    pub fn mass_number(&self) -> i32 {
        self.species.mass_number()
    }

    /// Charge code (Z)
    pub fn charge(&self) -> i32 {
        self.species.charge()
    }

    /// Momentum per nucleon (AGeV/c)
    pub fn momentum(&self) -> Float {
        self.momentum
    }

    /// Total energy of a beam particle (GeV)
    pub fn energy(&self) -> Float {
        self.species.energy(self.momentum)
    }

    /// Momentum of a beam particle (GeV/c)
    ///
    /// The per-nucleon momentum is weighted by the mass number code, which
    /// means that photons (code 0) contribute no momentum and pions (code -1)
    /// contribute the opposite of their momentum. Stored outputs of the run
    /// header have always been computed this way.
    ///
    pub fn weighted_momentum(&self) -> Float {
        self.mass_number() as Float * self.momentum
    }

    /// Lab frame 4-momentum of a beam particle
    pub fn four_momentum(&self) -> Momentum {
        linalg::along_beam(self.weighted_momentum(), self.energy())
    }

    /// Lab frame 4-momentum of a proton moving at the per-nucleon momentum
    pub fn nucleon_four_momentum(&self) -> Momentum {
        let p = self.momentum;
        linalg::along_beam(p, sqrt(p * p + PROTON_MASS * PROTON_MASS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::RunError,
        linalg::{E, Z},
        numeric::assert_close,
    };

    #[test]
    fn codes_are_decoded() {
        let beam = Beam::from_codes(BeamRole::Target, 208, 82, -158.).unwrap();
        assert_eq!(beam.mass_number(), 208);
        assert_eq!(beam.charge(), 82);
        assert_eq!(beam.momentum(), -158.);
    }

    #[test]
    fn invalid_codes_are_rejected() {
        assert_eq!(
            Beam::from_codes(BeamRole::Target, -3, 0, 1.),
            Err(RunError::InvalidMassNumber {
                role: BeamRole::Target,
                value: -3
            })
        );
    }

    #[test]
    fn nucleus_momentum_scales_with_mass_number() {
        let beam = Beam::from_codes(BeamRole::Projectile, 12, 6, 2.).unwrap();
        assert_eq!(beam.weighted_momentum(), 24.);
        let p = beam.four_momentum();
        assert_eq!(p[Z], 24.);
        assert_eq!(p[E], beam.energy());
    }

    #[test]
    fn photon_and_pion_momentum_weights() {
        let photon = Beam::new(Species::Photon { charge: 0 }, 3.);
        assert_eq!(photon.weighted_momentum(), 0.);
        let pion = Beam::new(Species::Pion { charge: 1 }, 3.);
        assert_eq!(pion.weighted_momentum(), -3.);
    }

    #[test]
    fn nucleon_momentum_ignores_species() {
        let photon = Beam::new(Species::Photon { charge: 0 }, 3.);
        let p = photon.nucleon_four_momentum();
        assert_eq!(p[Z], 3.);
        assert_close(p[E], sqrt(9. + PROTON_MASS * PROTON_MASS), 2.);
    }
}
