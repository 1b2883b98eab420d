//! Run header: the description of a collision run, as stored by event
//! generators next to their events
//!
//!
//! # Introduction (for the physicist)
//!
//! A run header records what was collided (projectile and target species and
//! their momenta per nucleon), the sampled impact parameter and reaction plane
//! ranges, the cross-section, and how many events were requested. From the
//! beams, it derives the lab energies of both beams, the nucleon-nucleon and
//! whole-system center-of-mass energies √s, and the boost (β, γ) of the
//! center-of-mass frame.
//!
//! Beam species follow the usual mass number convention: A > 0 is a nucleus,
//! A = 0 a photon and A = -1 a pion.
//!
//!
//! # Introduction (for the computer guy)
//!
//! * [`run::RunDescriptor`] is an immutable value, built either from typed
//!   [`beam::Beam`]s or from the legacy integer codes
//!   ([`run::RawRunHeader`]), in which case unknown mass numbers are rejected
//!   with a [`error::RunError`] before any kinematics can be computed.
//! * Warnings go through a [`diagnostics::DiagnosticSink`], which defaults to
//!   `tracing`.
//! * The report layout (see [`output`]) doubles as the run card format read
//!   by [`config`].

#![warn(missing_docs)]

pub mod beam;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod linalg;
pub mod numeric;
pub mod output;
pub mod run;
pub mod species;

pub use crate::{
    beam::Beam,
    diagnostics::{Diagnostic, DiagnosticSink, TracingSink},
    error::{Result, RunError},
    numeric::Float,
    run::{AzimuthRange, ImpactParameter, Kinematics, RawRunHeader, RunDescriptor},
    species::{BeamRole, Nucleus, Species},
};
