//! Mechanism for loading run headers from run cards
//!
//! A run card uses the layout of run header reports: one `label : value` line
//! per attribute, in report order. Ruler and banner lines, blank lines and
//! lines starting with `#` are ignored, so the printout of a run header is a
//! valid run card.

use crate::{
    diagnostics::{DiagnosticSink, TracingSink},
    output::{labels::*, BANNER_MARKER},
    run::{RawRunHeader, RunDescriptor},
};

use eyre::{bail, eyre, Result, WrapErr};

use std::{fs, path::Path, str::FromStr};

/// Load a run header from a run card file, reporting diagnostics to `tracing`
pub fn load(path: impl AsRef<Path>) -> Result<RunDescriptor> {
    load_with(path, &TracingSink)
}

/// Load a run header from a run card file, reporting diagnostics to `sink`
pub fn load_with(path: impl AsRef<Path>, sink: &dyn DiagnosticSink) -> Result<RunDescriptor> {
    let path = path.as_ref();
    let card = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read run card {}", path.display()))?;
    tracing::debug!("Loaded run card {}", path.display());
    parse(&card, sink).wrap_err_with(|| format!("Invalid run card {}", path.display()))
}

/// Decode the contents of a run card
pub fn parse(card: &str, sink: &dyn DiagnosticSink) -> Result<RunDescriptor> {
    // Iterate over the meaningful lines of the card
    let mut card_iter = card
        .lines()
        .map(str::trim)
        .filter(|line| !is_decoration(line));

    // This closure fetches the next run card item, checking that it carries
    // the expected label, and handling unexpected end-of-file too.
    let mut next_item = |label: &'static str| -> Result<CardItem> {
        let line = card_iter
            .next()
            .ok_or_else(|| eyre!("Missing run card entry \"{}\"", label))?;
        CardItem::new(label, line)
    };

    // Decode the run card items into concrete values
    let raw = RawRunHeader {
        generator: next_item(GENERATOR)?.text(),
        comment: next_item(COMMENT)?.text(),
        decayer: next_item(DECAYER)?.text(),
        a_proj: next_item(PROJECTILE_MASS)?.parse()?,
        z_proj: next_item(PROJECTILE_CHARGE)?.parse()?,
        p_proj: next_item(PROJECTILE_MOMENTUM)?.parse()?,
        a_targ: next_item(TARGET_MASS)?.parse()?,
        z_targ: next_item(TARGET_CHARGE)?.parse()?,
        p_targ: next_item(TARGET_MOMENTUM)?.parse()?,
        b_min: next_item(B_MIN)?.parse()?,
        b_max: next_item(B_MAX)?.parse()?,
        b_weight: next_item(B_WEIGHT)?.parse()?,
        phi_min: next_item(PHI_MIN)?.parse()?,
        phi_max: next_item(PHI_MAX)?.parse()?,
        sigma: next_item(SIGMA)?.parse()?,
        num_events: next_item(NUM_EVENTS)?.parse()?,
    };

    // Anything after the last entry is most likely a mistake
    if let Some(extra) = card_iter.next() {
        bail!("Unexpected run card line after the last entry: \"{}\"", extra);
    }

    RunDescriptor::from_codes(raw, sink).wrap_err("Run card describes an invalid beam")
}

/// Truth that a (trimmed) run card line carries no data
fn is_decoration(line: &str) -> bool {
    line.is_empty()
        || line.starts_with('#')
        || line.starts_with(BANNER_MARKER)
        || line.chars().all(|c| c == '-')
}

/// A value from the run card, tagged with the label of the attribute which it
/// is supposed to map for error reporting purposes.
struct CardItem<'data> {
    label: &'static str,
    value: &'data str,
}
//
impl<'data> CardItem<'data> {
    /// Split a run card line, checking that it has the expected label
    fn new(label: &'static str, line: &'data str) -> Result<Self> {
        let (found, value) = line
            .split_once(':')
            .ok_or_else(|| eyre!("Expected run card entry \"{}\", found \"{}\"", label, line))?;
        if found.trim() != label {
            bail!(
                "Expected run card entry \"{}\", found \"{}\"",
                label,
                found.trim()
            );
        }
        Ok(Self {
            label,
            value: value.trim(),
        })
    }

    /// Take this data as free text
    fn text(self) -> String {
        self.value.to_owned()
    }

    /// Parse this data using Rust's standard parsing logic
    fn parse<T: FromStr>(self) -> Result<T>
    where
        <T as FromStr>::Err: std::error::Error + Send + Sync + 'static,
    {
        self.value
            .parse::<T>()
            .wrap_err_with(|| format!("Could not parse run card entry \"{}\"", self.label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{diagnostics::Diagnostic, numeric::Float};
    use std::cell::RefCell;

    const CARD: &str = "\
--------------------------------------------------
-I-                 Run Header                 -I-
Generator                     : UrQMD v3.4
Comment                       : b: 0-15 fm
Decayer                       :
Projectile mass               : 197
Projectile charge             : 79
Projectile momentum (AGeV/c)  : 1.23
Target mass                   : 197
Target charge                 : 79
Target momentum (AGeV/c)      : 0
Minimal impact parameter (fm) : 0
Maximal impact parameter (fm) : 15
Impact parameter weighting    : 1
Minimal azimuthal angle (rad) : 0
Maximal azimuthal angle (rad) : 6.28319
Cross-section (mb)            : 1e+04
Requested number of events    : 500
--------------------------------------------------
";

    fn quiet() -> impl DiagnosticSink {
        |_: &Diagnostic| {}
    }

    #[test]
    fn parses_a_report() {
        let run = parse(CARD, &quiet()).unwrap();
        assert_eq!(run.generator(), "UrQMD v3.4");
        assert_eq!(run.comment(), "b: 0-15 fm");
        assert_eq!(run.decayer(), "");
        assert_eq!(run.projectile_mass_number(), 197);
        assert_eq!(run.projectile_momentum(), 1.23);
        assert_eq!(run.azimuth().max, 6.28319);
        assert_eq!(run.sigma(), 1e4 as Float);
        assert_eq!(run.num_events(), 500);
    }

    #[test]
    fn printed_headers_parse_back() {
        let run = parse(CARD, &quiet()).unwrap();
        assert_eq!(parse(&run.to_string(), &quiet()).unwrap(), run);
    }

    #[test]
    fn comments_and_blank_lines_are_ignored() {
        let card = format!("# Generated by hand\n\n{CARD}\n# The end\n");
        assert!(parse(&card, &quiet()).is_ok());
    }

    #[test]
    fn missing_entries_are_reported() {
        let truncated: String = CARD.lines().take(10).map(|l| format!("{l}\n")).collect();
        let error = parse(&truncated, &quiet()).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Missing run card entry \"Target momentum (AGeV/c)\""
        );
    }

    #[test]
    fn misplaced_entries_are_reported() {
        let card = CARD.replace("Comment ", "Remark ");
        let error = parse(&card, &quiet()).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Expected run card entry \"Comment\", found \"Remark\""
        );
    }

    #[test]
    fn unparseable_values_are_reported() {
        let card = CARD.replace(": 500", ": many");
        let error = parse(&card, &quiet()).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Could not parse run card entry \"Requested number of events\""
        );
    }

    #[test]
    fn trailing_lines_are_reported() {
        let card = format!("{CARD}Extra : 1\n");
        assert!(parse(&card, &quiet()).is_err());
    }

    #[test]
    fn invalid_beams_are_reported_and_rejected() {
        let seen = RefCell::new(Vec::new());
        let sink = |d: &Diagnostic| seen.borrow_mut().push(d.clone());
        let card = CARD.replace("Target mass                   : 197", "Target mass : -4");
        let error = parse(&card, &sink).unwrap_err();
        assert_eq!(error.to_string(), "Run card describes an invalid beam");
        assert!(error.root_cause().to_string().starts_with("Target mass -4 not valid!"));
        assert_eq!(seen.into_inner().len(), 1);
    }
}
