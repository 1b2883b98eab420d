//! Beam particle species and the mass conventions of the run header
//!
//! Historically, the kind of particle in a beam was encoded in its mass number:
//! a positive value is a nucleus with that many nucleons, zero is a photon and
//! -1 is a pion. This module turns these codes into an explicit [`Species`]
//! once, so that the kinematics never have to branch on magic numbers.

use crate::{
    error::{Result, RunError},
    numeric::Float,
};
use prefix_num_ops::real::*;
use std::fmt::{self, Display};

/// Proton mass (GeV/c²)
pub const PROTON_MASS: Float = 0.938272029;

/// Neutron mass (GeV/c²)
pub const NEUTRON_MASS: Float = 0.939565360;

/// Charged pion mass (GeV/c²)
pub const PION_MASS: Float = 0.13957018;

/// Mass number code of a photon beam
pub const PHOTON_CODE: i32 = 0;

/// Mass number code of a pion beam
pub const PION_CODE: i32 = -1;

/// Which side of the collision a beam is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BeamRole {
    /// Incoming beam
    Projectile,
    /// Beam (or fixed target) it collides with
    Target,
}

impl Display for BeamRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Projectile => "Projectile",
            Self::Target => "Target",
        })
    }
}

/// Nucleus made of `charge` protons and `mass_number - charge` neutrons
///
/// The mass number is always positive, as nuclei can only be built through
/// [`Nucleus::new`]. The charge is not checked against the mass number.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nucleus {
    /// Number of nucleons (A), positive
    mass_number: i32,

    /// Number of protons (Z)
    charge: i32,
}
//
impl Nucleus {
    /// Describe a nucleus from its mass number and charge
    ///
    /// # Errors
    ///
    /// Non-positive mass numbers are rejected with
    /// [`RunError::InvalidMassNumber`], on behalf of the beam `role`.
    ///
    pub fn new(role: BeamRole, mass_number: i32, charge: i32) -> Result<Self> {
        if mass_number > 0 {
            Ok(Self {
                mass_number,
                charge,
            })
        } else {
            Err(RunError::InvalidMassNumber {
                role,
                value: mass_number,
            })
        }
    }

    /// Number of nucleons (A)
    pub fn mass_number(&self) -> i32 {
        self.mass_number
    }

    /// Number of protons (Z)
    pub fn charge(&self) -> i32 {
        self.charge
    }

    /// Total energy (GeV) of the nucleus, given its momentum per nucleon
    ///
    /// The nucleus is treated as a bunch of free nucleons, each carrying the
    /// same momentum, without any binding energy.
    ///
    pub fn energy(&self, momentum: Float) -> Float {
        let p2 = momentum * momentum;
        let num_protons = self.charge as Float;
        let num_neutrons = (i64::from(self.mass_number) - i64::from(self.charge)) as Float;
        num_protons * sqrt(p2 + PROTON_MASS * PROTON_MASS)
            + num_neutrons * sqrt(p2 + NEUTRON_MASS * NEUTRON_MASS)
    }
}

/// Kind of particle that makes up a beam
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    /// Atomic nucleus
    Nucleus(Nucleus),

    /// Massless photon
    Photon {
        /// Charge code, carried for bookkeeping only
        charge: i32,
    },

    /// Pion
    Pion {
        /// Charge code, carried for bookkeeping only
        charge: i32,
    },
}

impl Species {
    /// Decode the legacy (mass number, charge) pair of a beam
    ///
    /// # Errors
    ///
    /// Mass numbers below -1 do not map to any species and are rejected with
    /// [`RunError::InvalidMassNumber`].
    ///
    pub fn from_codes(role: BeamRole, mass_number: i32, charge: i32) -> Result<Self> {
        match mass_number {
            PHOTON_CODE => Ok(Self::Photon { charge }),
            PION_CODE => Ok(Self::Pion { charge }),
            a => Nucleus::new(role, a, charge).map(Self::Nucleus),
        }
    }

    /// Describe a nucleus, see [`Nucleus::new`]
    pub fn nucleus(role: BeamRole, mass_number: i32, charge: i32) -> Result<Self> {
        Nucleus::new(role, mass_number, charge).map(Self::Nucleus)
    }

    /// Legacy mass number code of this species
    pub fn mass_number(&self) -> i32 {
        match self {
            Self::Nucleus(nucleus) => nucleus.mass_number(),
            Self::Photon { .. } => PHOTON_CODE,
            Self::Pion { .. } => PION_CODE,
        }
    }

    /// Charge code of this species
    pub fn charge(&self) -> i32 {
        match *self {
            Self::Nucleus(nucleus) => nucleus.charge(),
            Self::Photon { charge } | Self::Pion { charge } => charge,
        }
    }

    /// Total energy (GeV) of a beam particle of this species, given its
    /// momentum per nucleon (GeV/c)
    pub fn energy(&self, momentum: Float) -> Float {
        match self {
            Self::Nucleus(nucleus) => nucleus.energy(momentum),
            Self::Photon { .. } => momentum,
            Self::Pion { .. } => sqrt(momentum * momentum + PION_MASS * PION_MASS),
        }
    }
}
