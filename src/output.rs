//! This module is in charge of the human-readable rendition of run headers
//!
//! The layout of the report is fixed, and relied upon by people who diff run
//! headers from different productions, so it must be kept byte-for-byte
//! stable. The run card reader (see `config`) parses that same layout.

use crate::{
    numeric::Float,
    run::{Kinematics, RunDescriptor, TITLE},
};
use std::fmt::{self, Display, Write};

/// Number of significant digits of floating-point numbers in reports, which
/// is the default precision of C++ output streams
pub const SIG_DIGITS: usize = 6;

/// Width of the label column of reports
const LABEL_WIDTH: usize = 30;

/// Width of the ruler and banner lines of reports
const RULER_WIDTH: usize = 50;

/// Field labels of run header reports, in display order
#[allow(missing_docs)]
pub mod labels {
    pub const GENERATOR: &str = "Generator";
    pub const COMMENT: &str = "Comment";
    pub const DECAYER: &str = "Decayer";
    pub const PROJECTILE_MASS: &str = "Projectile mass";
    pub const PROJECTILE_CHARGE: &str = "Projectile charge";
    pub const PROJECTILE_MOMENTUM: &str = "Projectile momentum (AGeV/c)";
    pub const TARGET_MASS: &str = "Target mass";
    pub const TARGET_CHARGE: &str = "Target charge";
    pub const TARGET_MOMENTUM: &str = "Target momentum (AGeV/c)";
    pub const B_MIN: &str = "Minimal impact parameter (fm)";
    pub const B_MAX: &str = "Maximal impact parameter (fm)";
    pub const B_WEIGHT: &str = "Impact parameter weighting";
    pub const PHI_MIN: &str = "Minimal azimuthal angle (rad)";
    pub const PHI_MAX: &str = "Maximal azimuthal angle (rad)";
    pub const SIGMA: &str = "Cross-section (mb)";
    pub const NUM_EVENTS: &str = "Requested number of events";
}

/// Marker surrounding the title of reports
pub const BANNER_MARKER: &str = "-I-";

impl RunDescriptor {
    /// Print the run header to the standard output
    pub fn print(&self) {
        print!("{self}");
    }
}

impl Display for RunDescriptor {
    /// Fixed layout listing of every attribute, with labels and units
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use labels::*;
        let raw = self.to_raw();
        write_ruler(f)?;
        let title_width = RULER_WIDTH - 2 * BANNER_MARKER.len();
        writeln!(f, "{BANNER_MARKER}{TITLE:^title_width$}{BANNER_MARKER}")?;
        write_entry(f, GENERATOR, &raw.generator)?;
        write_entry(f, COMMENT, &raw.comment)?;
        write_entry(f, DECAYER, &raw.decayer)?;
        write_entry(f, PROJECTILE_MASS, raw.a_proj)?;
        write_entry(f, PROJECTILE_CHARGE, raw.z_proj)?;
        write_entry(f, PROJECTILE_MOMENTUM, General(raw.p_proj))?;
        write_entry(f, TARGET_MASS, raw.a_targ)?;
        write_entry(f, TARGET_CHARGE, raw.z_targ)?;
        write_entry(f, TARGET_MOMENTUM, General(raw.p_targ))?;
        write_entry(f, B_MIN, General(raw.b_min))?;
        write_entry(f, B_MAX, General(raw.b_max))?;
        write_entry(f, B_WEIGHT, raw.b_weight)?;
        write_entry(f, PHI_MIN, General(raw.phi_min))?;
        write_entry(f, PHI_MAX, General(raw.phi_max))?;
        write_entry(f, SIGMA, General(raw.sigma))?;
        write_entry(f, NUM_EVENTS, raw.num_events)?;
        write_ruler(f)
    }
}

impl Display for Kinematics {
    /// Derived kinematics, in the same key-value style as run headers
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_entry(f, "Projectile energy (GeV)", General(self.projectile_energy))?;
        write_entry(f, "Target energy (GeV)", General(self.target_energy))?;
        write_entry(f, "NN sqrt(s) (GeV)", General(self.nn_sqrt_s))?;
        write_entry(f, "System sqrt(s) (GeV)", General(self.sqrt_s))?;
        write_entry(f, "Center-of-mass beta", General(self.beta_cm))?;
        write_entry(f, "Center-of-mass gamma", General(self.gamma_cm))
    }
}

/// Horizontal separator of reports
fn write_ruler(f: &mut impl Write) -> fmt::Result {
    writeln!(f, "{:-<RULER_WIDTH$}", "")
}

/// Key-value output that uses fixed-size columns for better readability
fn write_entry(f: &mut impl Write, label: &str, value: impl Display) -> fmt::Result {
    writeln!(f, "{label:<LABEL_WIDTH$}: {value}")
}

/// Floating-point number displayed like C's `%g` at report precision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct General(pub Float);

impl Display for General {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_general(f, self.0, SIG_DIGITS)
    }
}

/// Write a floating-point number using C's "general" notation
///
/// Like the `%g` format of the C printf function, this picks the scientific
/// notation when the decimal exponent of the number, once rounded to
/// `sig_digits` significant digits, is below -4 or no smaller than
/// `sig_digits`, and the naive notation otherwise. Trailing zeroes and a
/// dangling decimal point are removed in both cases, and the exponent is
/// written with a sign and at least two digits.
///
pub fn write_general(writer: &mut impl Write, x: Float, sig_digits: usize) -> fmt::Result {
    let sig_digits = sig_digits.max(1);
    if x.is_nan() {
        return writer.write_str("nan");
    }
    if x.is_infinite() {
        return writer.write_str(if x > 0. { "inf" } else { "-inf" });
    }
    if x == 0. {
        // Zero is special because it has no order of magnitude
        return writer.write_str(if x.is_sign_negative() { "-0" } else { "0" });
    }

    // Let the scientific formatter do the rounding, so that numbers like
    // 999999.5 get the exponent of their rounded value
    let scientific = format!("{:.*e}", sig_digits - 1, x);
    let (mantissa, exponent) = scientific.split_once('e').ok_or(fmt::Error)?;
    let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;

    if exponent < -4 || exponent >= sig_digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        write!(
            writer,
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        // Since Rust's precision controls the number of digits after the
        // decimal point, adjust it to the magnitude of the number
        let decimals = (sig_digits as i32 - 1 - exponent) as usize;
        writer.write_str(trim_fraction(&format!("{x:.decimals$}")))
    }
}

/// Strip trailing zeroes of the fractional part, and the decimal point if it
/// ends up dangling
fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
