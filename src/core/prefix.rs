//! The decimal prefix selection for the stopwatch display.
//!
//! A raw elapsed-days value is unreadable for short runs (`0.000104 days`),
//! so the stopwatch display scales it with a metric-style prefix chosen from
//! the magnitude: days, decidays, centidays, millidays or microdays. The
//! scaled value always lands in a human-readable range.
//!
//! Zero is a special case: it is displayed as `0.000` with the milliday
//! label rather than the day label, because a freshly reset stopwatch is
//! about to count upward through millidays. This asymmetry is intentional.

/// The decimal day units, largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Day,
    Deciday,
    Centiday,
    Milliday,
    Microday,
}

impl Unit {
    /// The factor a raw elapsed-days value is multiplied by for this unit.
    #[must_use]
    pub fn scale_factor(&self) -> f64 {
        match self {
            Unit::Day => 1.0,
            Unit::Deciday => 10.0,
            Unit::Centiday => 100.0,
            Unit::Milliday => 1_000.0,
            Unit::Microday => 1_000_000.0,
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Unit::Day => "D [day]",
            Unit::Deciday => "dD [deciday]",
            Unit::Centiday => "cD [centiday]",
            Unit::Milliday => "mD [milliday]",
            Unit::Microday => "\u{3bc}D [microday]",
        };

        f.write_str(label)
    }
}

/// An elapsed-days value scaled into a readable range, with its unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scaled {
    /// The scaled value, already formatted by magnitude.
    pub value: String,
    pub unit: Unit,
}

/// It chooses the unit for an elapsed-days value and formats the scaled
/// value. Thresholds are evaluated top-down, first match wins.
#[must_use]
pub fn scale(elapsed_days: f64) -> Scaled {
    if elapsed_days == 0.0 {
        // Even for zero, show the milliday unit.
        return Scaled {
            value: "0.000".to_owned(),
            unit: Unit::Milliday,
        };
    }

    let unit = if elapsed_days >= 1.0 {
        Unit::Day
    } else if elapsed_days >= 0.1 {
        Unit::Deciday
    } else if elapsed_days >= 0.01 {
        Unit::Centiday
    } else if elapsed_days >= 0.001 {
        Unit::Milliday
    } else {
        Unit::Microday
    };

    Scaled {
        value: format_by_magnitude(elapsed_days * unit.scale_factor()),
        unit,
    }
}

/// Formats a scaled value with a precision that keeps roughly three
/// significant digits: `X.XX`, `XX.X` or `XXX`.
fn format_by_magnitude(value: f64) -> String {
    if value < 10.0 {
        format!("{value:.2}")
    } else if value < 100.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.0}")
    }
}
