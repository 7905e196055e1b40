//! Magnitude namer
//!
//! Maps a number to a scaled value and a named unit ("1.5 million").
//! The value is divided by 1000 while it stays at or above 1000 and more
//! names remain. Past the last name the result switches to a bare
//! power-of-ten description instead.
//!
//! # Examples
//! ```ignore
//! let opts = NamerOptions::default();
//! assert_eq!(humanize(1_500_000.0, &opts).to_string(), "1.5 million");
//! assert_eq!(humanize(999.0, &opts).to_string(), "999");
//! assert_eq!(humanize(1e123, &opts).to_string(), "10^123 (123-digit number)");
//! ```

use std::fmt;

/// Unit names by thousands-exponent. The tail is positional, not exact:
/// "googol" and "centillion" sit at 10^102 and 10^105.
pub const UNIT_NAMES: [&str; 36] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
    "sextillion",
    "septillion",
    "octillion",
    "nonillion",
    "decillion",
    "undecillion",
    "duodecillion",
    "tredecillion",
    "quattuordecillion",
    "quindecillion",
    "sexdecillion",
    "septendecillion",
    "octodecillion",
    "novemdecillion",
    "vigintillion",
    "unvigintillion",
    "duovigintillion",
    "trevigintillion",
    "quattuorvigintillion",
    "quinvigintillion",
    "sexvigintillion",
    "septenvigintillion",
    "octovigintillion",
    "novemvigintillion",
    "trigintillion",
    "untrigintillion",
    "duotrigintillion",
    "googol",
    "centillion",
];

/// 10^(3 × UNIT_NAMES.len()): values at or above this skip the named units
pub const NAMED_CEILING: f64 = 1e108;

/// Decimal places kept on the scaled value
pub const DEFAULT_DECIMALS: u32 = 2;

/// Unit index above which a "(10^N)" annotation is appended
pub const DEFAULT_NOTATION_CUTOFF: usize = 10;

/// Tie-break used when rounding the scaled value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rounding {
    /// 0.125 -> 0.13 (f64::round)
    #[default]
    HalfAwayFromZero,
    /// 0.125 -> 0.12 (banker's rounding)
    HalfEven,
}

impl Rounding {
    /// Parse rounding name from config, unknown names fall back to the default
    pub fn from_name(s: &str) -> Self {
        match s.to_lowercase().replace('-', "_").as_str() {
            "half_even" => Self::HalfEven,
            _ => Self::HalfAwayFromZero,
        }
    }

    /// Name as written in the config file
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HalfAwayFromZero => "half_away_from_zero",
            Self::HalfEven => "half_even",
        }
    }

    /// Round `value` to `decimals` places
    pub fn apply(&self, value: f64, decimals: u32) -> f64 {
        let factor = 10f64.powi(decimals.min(15) as i32);
        let scaled = value * factor;
        let rounded = match self {
            Self::HalfAwayFromZero => scaled.round(),
            Self::HalfEven => scaled.round_ties_even(),
        };
        rounded / factor
    }
}

/// Presentation knobs for the namer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamerOptions {
    pub decimals: u32,
    pub notation_cutoff: usize,
    pub rounding: Rounding,
}

impl Default for NamerOptions {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
            notation_cutoff: DEFAULT_NOTATION_CUTOFF,
            rounding: Rounding::default(),
        }
    }
}

/// Result of naming a number
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Magnitude {
    /// Scaled value with a unit from [`UNIT_NAMES`]
    Named {
        value: f64,
        unit_index: usize,
        /// Whether to append "(10^N)" after the unit name
        annotated: bool,
    },
    /// At or beyond [`NAMED_CEILING`]: only the base-10 exponent is reported
    Exponent { exponent: i32 },
    /// Positive infinity
    Overflow,
    /// NaN
    Undefined,
}

impl Magnitude {
    /// The (scaled value, unit string) pair
    ///
    /// Named results give the rounded value and the unit label ("" for ones).
    /// The fallback gives the exponent and the full "10^N (N-digit number)"
    /// description; non-finite results give `inf`/`NaN` with their label.
    pub fn parts(&self) -> (f64, String) {
        let scaled = match self {
            Magnitude::Named { value, .. } => *value,
            Magnitude::Exponent { exponent } => f64::from(*exponent),
            Magnitude::Overflow => f64::INFINITY,
            Magnitude::Undefined => f64::NAN,
        };
        (scaled, self.unit_label())
    }

    /// Descriptive unit string: the name plus annotation, or the whole
    /// fallback description for non-named results
    pub fn unit_label(&self) -> String {
        match self {
            Magnitude::Named {
                unit_index,
                annotated,
                ..
            } => {
                let name = UNIT_NAMES.get(*unit_index).copied().unwrap_or_default();
                if *annotated {
                    format!("{} (10^{})", name, unit_index * 3)
                } else {
                    name.to_string()
                }
            }
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Magnitude::Named { value, .. } => {
                let label = self.unit_label();
                if label.is_empty() {
                    write!(f, "{}", value)
                } else {
                    write!(f, "{} {}", value, label)
                }
            }
            Magnitude::Exponent { exponent } => {
                write!(f, "10^{} ({}-digit number)", exponent, exponent)
            }
            Magnitude::Overflow => write!(f, "∞ (beyond floating-point range)"),
            Magnitude::Undefined => write!(f, "NaN"),
        }
    }
}

/// Name the magnitude of `value`
pub fn humanize(value: f64, opts: &NamerOptions) -> Magnitude {
    if value.is_nan() {
        return Magnitude::Undefined;
    }
    if value == f64::INFINITY {
        return Magnitude::Overflow;
    }
    if value >= NAMED_CEILING {
        return Magnitude::Exponent {
            exponent: decimal_exponent(value),
        };
    }

    let last = UNIT_NAMES.len() - 1;
    let mut scaled = value;
    let mut unit_index = 0;

    while scaled >= 1000.0 && unit_index < last {
        scaled /= 1000.0;
        unit_index += 1;
    }

    let mut rounded = opts.rounding.apply(scaled, opts.decimals);

    // 999.996 rounds up to 1000; carry into the next unit
    if rounded >= 1000.0 && unit_index < last {
        rounded = opts.rounding.apply(rounded / 1000.0, opts.decimals);
        unit_index += 1;
    }

    Magnitude::Named {
        value: rounded,
        unit_index,
        annotated: unit_index > opts.notation_cutoff,
    }
}

/// floor(log10(value)) for a finite positive value, read off the shortest
/// scientific representation so exact powers of ten don't land one below
fn decimal_exponent(value: f64) -> i32 {
    let sci = format!("{:e}", value);
    sci.split_once('e')
        .and_then(|(_, exp)| exp.parse().ok())
        .unwrap_or_else(|| value.log10().floor() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(value: f64) -> Magnitude {
        humanize(value, &NamerOptions::default())
    }

    #[test]
    fn test_ceiling_matches_unit_count() {
        assert_eq!(UNIT_NAMES.len() * 3, 108);
        assert_eq!(format!("{:e}", NAMED_CEILING), "1e108");
        assert_eq!(UNIT_NAMES[35], "centillion");
    }

    #[test]
    fn test_million() {
        let m = name(1_500_000.0);
        assert_eq!(m.parts(), (1.5, "million".to_string()));
        assert_eq!(m.to_string(), "1.5 million");
    }

    #[test]
    fn test_ones_unit_has_no_suffix() {
        let m = name(999.0);
        assert_eq!(m.parts(), (999.0, String::new()));
        assert_eq!(m.to_string(), "999");
    }

    #[test]
    fn test_zero() {
        assert_eq!(name(0.0).to_string(), "0");
    }

    #[test]
    fn test_principal_values() {
        assert_eq!(name(324_000.0).to_string(), "324 thousand");
        assert_eq!(name(31_428_000.0).to_string(), "31.43 million");
    }

    #[test]
    fn test_annotation_above_cutoff() {
        // index 10 (nonillion) is not annotated, index 11 (decillion) is
        assert_eq!(name(2e30).to_string(), "2 nonillion");
        assert_eq!(name(2e33).to_string(), "2 decillion (10^33)");
        assert_eq!(name(5e36).unit_label(), "undecillion (10^36)");
    }

    #[test]
    fn test_custom_cutoff() {
        let opts = NamerOptions {
            notation_cutoff: 1,
            ..NamerOptions::default()
        };
        assert_eq!(humanize(2e6, &opts).to_string(), "2 million (10^6)");
        assert_eq!(humanize(2e3, &opts).to_string(), "2 thousand");
    }

    #[test]
    fn test_exponent_fallback() {
        assert_eq!(name(1e123).to_string(), "10^123 (123-digit number)");
        assert_eq!(name(NAMED_CEILING).to_string(), "10^108 (108-digit number)");
        assert_eq!(name(3.7e250).to_string(), "10^250 (250-digit number)");
        assert_eq!(
            name(1e123).parts(),
            (123.0, "10^123 (123-digit number)".to_string())
        );
    }

    #[test]
    fn test_just_below_ceiling_is_named() {
        let m = name(9.99e107);
        assert_eq!(m.parts(), (999.0, "centillion (10^105)".to_string()));
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(name(f64::INFINITY), Magnitude::Overflow);
        assert_eq!(name(f64::NAN), Magnitude::Undefined);
        assert!(!name(f64::INFINITY).to_string().is_empty());

        let (scaled, label) = name(f64::INFINITY).parts();
        assert_eq!(scaled, f64::INFINITY);
        assert_eq!(label, "∞ (beyond floating-point range)");
        let (scaled, label) = name(f64::NAN).parts();
        assert!(scaled.is_nan());
        assert_eq!(label, "NaN");
    }

    #[test]
    fn test_rounding_carries_into_next_unit() {
        let m = name(999_999.0);
        assert_eq!(m.parts(), (1.0, "million".to_string()));
    }

    #[test]
    fn test_scaled_value_in_range() {
        let mut value = 1000.0;
        while value < NAMED_CEILING / 1000.0 {
            let m = name(value * 1.7);
            let (scaled, _) = m.parts();
            assert!((1.0..1000.0).contains(&scaled), "{value}: {scaled}");
            value *= 13.0;
        }
    }

    #[test]
    fn test_round_trip_within_tolerance() {
        for value in [1234.0, 56_789_012.0, 3.3e17, 7.25e44, 1.01e99] {
            let m = name(value);
            let Magnitude::Named {
                value: scaled,
                unit_index,
                ..
            } = m
            else {
                panic!("expected named magnitude for {value}");
            };
            let unit = 1000f64.powi(unit_index as i32);
            let tolerance = 0.005 * unit * 1.0001;
            assert!((scaled * unit - value).abs() <= tolerance, "{value} -> {m}");
        }
    }

    #[test]
    fn test_rounding_modes() {
        assert_eq!(Rounding::HalfAwayFromZero.apply(2.5, 0), 3.0);
        assert_eq!(Rounding::HalfEven.apply(2.5, 0), 2.0);
        assert_eq!(Rounding::HalfEven.apply(3.5, 0), 4.0);
        assert_eq!(Rounding::HalfAwayFromZero.apply(1.234, 2), 1.23);
    }

    #[test]
    fn test_rounding_names() {
        assert_eq!(Rounding::from_name("half-even"), Rounding::HalfEven);
        assert_eq!(Rounding::from_name("HALF_EVEN"), Rounding::HalfEven);
        assert_eq!(Rounding::from_name("bogus"), Rounding::HalfAwayFromZero);
        assert_eq!(
            Rounding::from_name(Rounding::HalfAwayFromZero.as_str()),
            Rounding::HalfAwayFromZero
        );
    }
}
