/// Current conditions extracted from a provider response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conditions {
    /// Current temperature in degrees Fahrenheit.
    pub temp_f: f64,
}
