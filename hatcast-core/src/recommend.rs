use std::fmt;

/// Temperature, in degrees Fahrenheit, below which a woolly hat is
/// recommended.
///
/// The original program's notes said 40F while the shipped comparison used
/// 60F; the shipped value is the one kept here.
pub const HAT_THRESHOLD_F: f64 = 60.0;

/// Outcome of the threshold rule. Stateless, no hysteresis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    WoollyHat,
    HatOptional,
}

impl Recommendation {
    pub fn for_temp_f(temp_f: f64) -> Self {
        Self::with_threshold(temp_f, HAT_THRESHOLD_F)
    }

    /// Strictly below the threshold means hat; the threshold itself means
    /// optional.
    pub fn with_threshold(temp_f: f64, threshold_f: f64) -> Self {
        if temp_f < threshold_f {
            Recommendation::WoollyHat
        } else {
            Recommendation::HatOptional
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::WoollyHat => f.write_str("Recommend woolly hat"),
            Recommendation::HatOptional => f.write_str("A hat is optional"),
        }
    }
}
