//! Run header: the description of a simulated collision run
//!
//! A [`RunDescriptor`] is filled once, when the run starts, and never mutated
//! afterwards. On top of the stored attributes, it provides the usual
//! kinematic quantities derived from the beams: their energies, the
//! center-of-mass energy and the boost from the lab to the center-of-mass
//! frame.

use crate::{
    beam::Beam,
    diagnostics::{Diagnostic, DiagnosticSink, TracingSink},
    error::Result,
    linalg,
    numeric::Float,
    species::{BeamRole, Species},
};

/// Name of the run header object
pub const NAME: &str = "run";

/// Title of the run header object
pub const TITLE: &str = "Run Header";

/// Impact parameter sampling
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ImpactParameter {
    /// Minimal impact parameter (fm)
    pub min: Float,

    /// Maximal impact parameter (fm)
    pub max: Float,

    /// Generator-specific impact parameter weighting mode
    pub weighting: i32,
}

/// Range of the reaction plane azimuthal angle (rad)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AzimuthRange {
    /// Minimal azimuthal angle (rad)
    pub min: Float,

    /// Maximal azimuthal angle (rad)
    pub max: Float,
}

/// Run header attributes in their raw, legacy-coded form
///
/// This is what event generators and run cards provide. Beams are described by
/// their mass number code, see [`Species::from_codes`].
///
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawRunHeader {
    /// Event generator name
    pub generator: String,

    /// Free-text comment
    pub comment: String,

    /// Decayer name
    pub decayer: String,

    /// Projectile mass number code
    pub a_proj: i32,

    /// Projectile charge
    pub z_proj: i32,

    /// Projectile momentum per nucleon (AGeV/c)
    pub p_proj: Float,

    /// Target mass number code
    pub a_targ: i32,

    /// Target charge
    pub z_targ: i32,

    /// Target momentum per nucleon (AGeV/c)
    pub p_targ: Float,

    /// Minimal impact parameter (fm)
    pub b_min: Float,

    /// Maximal impact parameter (fm)
    pub b_max: Float,

    /// Impact parameter weighting mode
    pub b_weight: i32,

    /// Minimal azimuthal angle (rad)
    pub phi_min: Float,

    /// Maximal azimuthal angle (rad)
    pub phi_max: Float,

    /// Cross-section (mb)
    pub sigma: Float,

    /// Requested number of events
    pub num_events: i32,
}

/// Kinematic quantities derived from a run header, all in natural units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kinematics {
    /// Projectile energy (GeV)
    pub projectile_energy: Float,

    /// Target energy (GeV)
    pub target_energy: Float,

    /// Nucleon-nucleon center-of-mass energy (GeV)
    pub nn_sqrt_s: Float,

    /// Center-of-mass energy of the whole system (GeV)
    pub sqrt_s: Float,

    /// Center-of-mass velocity in the lab frame (c)
    pub beta_cm: Float,

    /// Center-of-mass Lorentz factor in the lab frame
    pub gamma_cm: Float,
}

/// Description of a collision run
#[derive(Debug, Clone, PartialEq)]
pub struct RunDescriptor {
    generator: String,
    comment: String,
    decayer: String,
    projectile: Beam,
    target: Beam,
    impact: ImpactParameter,
    azimuth: AzimuthRange,
    sigma: Float,
    num_events: i32,
}
//
impl RunDescriptor {
    // ### CONSTRUCTION ###

    /// Describe a run, all attributes being given at once
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        generator: impl Into<String>,
        comment: impl Into<String>,
        decayer: impl Into<String>,
        projectile: Beam,
        target: Beam,
        impact: ImpactParameter,
        azimuth: AzimuthRange,
        sigma: Float,
        num_events: i32,
    ) -> Self {
        Self {
            generator: generator.into(),
            comment: comment.into(),
            decayer: decayer.into(),
            projectile,
            target,
            impact,
            azimuth,
            sigma,
            num_events,
        }
    }

    /// Describe a run from its legacy-coded attributes
    ///
    /// Beam mass number codes which do not designate a nucleus, a photon or a
    /// pion are reported to `sink`, then rejected. When both beams are
    /// invalid, both are reported and the projectile error is returned.
    ///
    pub fn from_codes(raw: RawRunHeader, sink: &dyn DiagnosticSink) -> Result<Self> {
        let projectile =
            Beam::from_codes(BeamRole::Projectile, raw.a_proj, raw.z_proj, raw.p_proj);
        let target = Beam::from_codes(BeamRole::Target, raw.a_targ, raw.z_targ, raw.p_targ);
        let errors = [&projectile, &target]
            .into_iter()
            .filter_map(|beam| beam.as_ref().err().copied());
        for error in errors {
            sink.report(&Diagnostic::Rejected(error));
        }
        Ok(Self::new(
            raw.generator,
            raw.comment,
            raw.decayer,
            projectile?,
            target?,
            ImpactParameter {
                min: raw.b_min,
                max: raw.b_max,
                weighting: raw.b_weight,
            },
            AzimuthRange {
                min: raw.phi_min,
                max: raw.phi_max,
            },
            raw.sigma,
            raw.num_events,
        ))
    }

    /// Build the zero/empty run header, warning `sink` about it
    ///
    /// This only exists as a placeholder: its beams are photons at rest, so
    /// the center-of-mass boost is NaN. It should not be used in practice.
    ///
    pub fn unset_with(sink: &dyn DiagnosticSink) -> Self {
        sink.report(&Diagnostic::UnsetRunHeader);
        let at_rest = Beam::new(Species::Photon { charge: 0 }, 0.);
        Self::new(
            "",
            "",
            "",
            at_rest,
            at_rest,
            ImpactParameter::default(),
            AzimuthRange::default(),
            0.,
            0,
        )
    }

    /// Convert back to legacy-coded attributes
    pub fn to_raw(&self) -> RawRunHeader {
        RawRunHeader {
            generator: self.generator.clone(),
            comment: self.comment.clone(),
            decayer: self.decayer.clone(),
            a_proj: self.projectile.mass_number(),
            z_proj: self.projectile.charge(),
            p_proj: self.projectile.momentum(),
            a_targ: self.target.mass_number(),
            z_targ: self.target.charge(),
            p_targ: self.target.momentum(),
            b_min: self.impact.min,
            b_max: self.impact.max,
            b_weight: self.impact.weighting,
            phi_min: self.azimuth.min,
            phi_max: self.azimuth.max,
            sigma: self.sigma,
            num_events: self.num_events,
        }
    }

    // ### ACCESSORS ###

    /// Object name, as used by event file formats
    pub fn name(&self) -> &'static str {
        NAME
    }

    /// Object title, as used by event file formats
    pub fn title(&self) -> &'static str {
        TITLE
    }

    /// Event generator name
    pub fn generator(&self) -> &str {
        &self.generator
    }

    /// Free-text comment
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Decayer name
    pub fn decayer(&self) -> &str {
        &self.decayer
    }

    /// Projectile beam
    pub fn projectile(&self) -> &Beam {
        &self.projectile
    }

    /// Target beam
    pub fn target(&self) -> &Beam {
        &self.target
    }

    /// Projectile mass number code
    pub fn projectile_mass_number(&self) -> i32 {
        self.projectile.mass_number()
    }

    /// Projectile charge
    pub fn projectile_charge(&self) -> i32 {
        self.projectile.charge()
    }

    /// Projectile momentum per nucleon (AGeV/c)
    pub fn projectile_momentum(&self) -> Float {
        self.projectile.momentum()
    }

    /// Target mass number code
    pub fn target_mass_number(&self) -> i32 {
        self.target.mass_number()
    }

    /// Target charge
    pub fn target_charge(&self) -> i32 {
        self.target.charge()
    }

    /// Target momentum per nucleon (AGeV/c)
    pub fn target_momentum(&self) -> Float {
        self.target.momentum()
    }

    /// Impact parameter sampling
    pub fn impact_parameter(&self) -> ImpactParameter {
        self.impact
    }

    /// Azimuthal angle range
    pub fn azimuth(&self) -> AzimuthRange {
        self.azimuth
    }

    /// Cross-section (mb)
    pub fn sigma(&self) -> Float {
        self.sigma
    }

    /// Requested number of events
    pub fn num_events(&self) -> i32 {
        self.num_events
    }

    // ### DERIVED KINEMATICS ###

    /// Projectile energy (GeV)
    pub fn projectile_energy(&self) -> Float {
        self.projectile.energy()
    }

    /// Target energy (GeV)
    pub fn target_energy(&self) -> Float {
        self.target.energy()
    }

    /// Center-of-mass energy of a proton-proton collision at the beams'
    /// momenta per nucleon (GeV)
    pub fn nn_sqrt_s(&self) -> Float {
        let total = self.projectile.nucleon_four_momentum() + self.target.nucleon_four_momentum();
        linalg::invariant_mass(&total)
    }

    /// Center-of-mass energy of the whole system (GeV)
    pub fn sqrt_s(&self) -> Float {
        linalg::invariant_mass(&self.total_momentum())
    }

    /// Velocity of the center-of-mass frame in the lab frame (c)
    pub fn beta_cm(&self) -> Float {
        linalg::velocity_along_beam(&self.total_momentum())
    }

    /// Lorentz factor of the center-of-mass frame in the lab frame
    pub fn gamma_cm(&self) -> Float {
        linalg::lorentz_factor(self.beta_cm())
    }

    /// Compute all derived kinematics at once
    pub fn kinematics(&self) -> Kinematics {
        Kinematics {
            projectile_energy: self.projectile_energy(),
            target_energy: self.target_energy(),
            nn_sqrt_s: self.nn_sqrt_s(),
            sqrt_s: self.sqrt_s(),
            beta_cm: self.beta_cm(),
            gamma_cm: self.gamma_cm(),
        }
    }

    /// Lab frame 4-momentum of the colliding system
    fn total_momentum(&self) -> linalg::Momentum {
        self.projectile.four_momentum() + self.target.four_momentum()
    }
}

impl Default for RunDescriptor {
    /// Zero/empty run header, which is reported as a `tracing` warning
    fn default() -> Self {
        Self::unset_with(&TracingSink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::RunError, numeric::assert_close};
    use std::cell::RefCell;

    fn au_au() -> RawRunHeader {
        RawRunHeader {
            generator: "UrQMD".into(),
            comment: "Au+Au fixed target".into(),
            decayer: "".into(),
            a_proj: 197,
            z_proj: 79,
            p_proj: 1.23,
            a_targ: 197,
            z_targ: 79,
            p_targ: 0.,
            b_min: 0.,
            b_max: 15.,
            b_weight: 1,
            phi_min: 0.,
            phi_max: 0.,
            sigma: 6500.,
            num_events: 1000,
        }
    }

    fn collect(raw: RawRunHeader) -> (Result<RunDescriptor>, Vec<Diagnostic>) {
        let seen = RefCell::new(Vec::new());
        let sink = |d: &Diagnostic| seen.borrow_mut().push(d.clone());
        let run = RunDescriptor::from_codes(raw, &sink);
        (run, seen.into_inner())
    }

    #[test]
    fn valid_codes_are_accepted_silently() {
        let (run, diagnostics) = collect(au_au());
        let run = run.unwrap();
        assert!(diagnostics.is_empty());
        assert_eq!(run.generator(), "UrQMD");
        assert_eq!(run.projectile_mass_number(), 197);
        assert_eq!(run.target_charge(), 79);
        assert_eq!(run.impact_parameter().max, 15.);
        assert_eq!(run.num_events(), 1000);
    }

    #[test]
    fn raw_attributes_survive_a_round_trip() {
        let raw = au_au();
        let run = RunDescriptor::from_codes(raw.clone(), &TracingSink).unwrap();
        assert_eq!(run.to_raw(), raw);
    }

    #[test]
    fn charged_photon_survives_a_round_trip() {
        let raw = RawRunHeader {
            a_proj: 0,
            z_proj: 3,
            p_proj: 5.,
            ..au_au()
        };
        let run = RunDescriptor::from_codes(raw.clone(), &TracingSink).unwrap();
        assert_eq!(run.projectile_charge(), 3);
        assert_eq!(run.to_raw(), raw);
        assert!(run
            .to_string()
            .contains("Projectile charge             : 3\n"));
    }

    #[test]
    fn invalid_target_is_reported_and_rejected() {
        let raw = RawRunHeader {
            a_targ: -5,
            ..au_au()
        };
        let expected = RunError::InvalidMassNumber {
            role: BeamRole::Target,
            value: -5,
        };
        let (run, diagnostics) = collect(raw);
        assert_eq!(run, Err(expected));
        assert_eq!(diagnostics, vec![Diagnostic::Rejected(expected)]);
    }

    #[test]
    fn both_invalid_beams_are_reported() {
        let raw = RawRunHeader {
            a_proj: -2,
            a_targ: -3,
            ..au_au()
        };
        let (run, diagnostics) = collect(raw);
        assert_eq!(
            run,
            Err(RunError::InvalidMassNumber {
                role: BeamRole::Projectile,
                value: -2
            })
        );
        assert_eq!(diagnostics.len(), 2);
    }

    #[test]
    fn unset_header_warns_and_is_empty() {
        let seen = RefCell::new(Vec::new());
        let run = RunDescriptor::unset_with(&|d: &Diagnostic| seen.borrow_mut().push(d.clone()));
        assert_eq!(seen.into_inner(), vec![Diagnostic::UnsetRunHeader]);
        assert_eq!(run.to_raw(), RawRunHeader::default());
        assert_eq!(run.name(), "run");
        assert_eq!(run.title(), "Run Header");
    }

    #[test]
    fn default_is_the_unset_header() {
        assert_eq!(RunDescriptor::default(), RunDescriptor::unset_with(&TracingSink));
    }

    #[test]
    fn target_energy_uses_target_species() {
        // Photon projectile hitting a proton at rest
        let raw = RawRunHeader {
            a_proj: 0,
            z_proj: 0,
            p_proj: 2.,
            a_targ: 1,
            z_targ: 1,
            p_targ: 0.,
            ..au_au()
        };
        let run = RunDescriptor::from_codes(raw, &TracingSink).unwrap();
        assert_eq!(run.projectile_energy(), 2.);
        assert_eq!(run.target_energy(), crate::species::PROTON_MASS);

        // Pion target: only its own code matters, not the projectile's
        let raw = RawRunHeader {
            a_targ: -1,
            p_targ: 0.,
            ..au_au()
        };
        let run = RunDescriptor::from_codes(raw, &TracingSink).unwrap();
        assert_eq!(run.target_energy(), crate::species::PION_MASS);
    }

    #[test]
    fn symmetric_collider_is_at_rest() {
        let raw = RawRunHeader {
            p_proj: 100.,
            p_targ: -100.,
            ..au_au()
        };
        let run = RunDescriptor::from_codes(raw, &TracingSink).unwrap();
        assert_eq!(run.beta_cm(), 0.);
        assert_eq!(run.gamma_cm(), 1.);
        assert_close(run.sqrt_s(), 2. * run.projectile_energy(), 4.);
        assert_close(run.nn_sqrt_s(), 2. * run.projectile.nucleon_four_momentum()[linalg::E], 4.);
    }

    #[test]
    fn kinematics_gathers_all_accessors() {
        let run = RunDescriptor::from_codes(au_au(), &TracingSink).unwrap();
        let k = run.kinematics();
        assert_eq!(k.projectile_energy, run.projectile_energy());
        assert_eq!(k.target_energy, run.target_energy());
        assert_eq!(k.nn_sqrt_s, run.nn_sqrt_s());
        assert_eq!(k.sqrt_s, run.sqrt_s());
        assert_eq!(k.beta_cm, run.beta_cm());
        assert_eq!(k.gamma_cm, run.gamma_cm());
    }
}
