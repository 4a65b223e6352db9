/// Harmonic ratios a candidate period is tested against, in tie-break order.
pub const DEFAULT_HARMONICS: [f64; 11] = [
    1.0,
    1.0 / 2.0,
    2.0,
    1.0 / 3.0,
    3.0,
    1.0 / 4.0,
    4.0,
    1.0 / 5.0,
    5.0,
    1.0 / 10.0,
    10.0,
];

/// Tuning knobs for candidate-to-catalogue matching.
///
/// The DM band, angular cut and angular weight are empirical. They are kept
/// as parameters rather than constants so a survey can retune them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct MatchParams {
    /// Candidate/catalogue period ratios considered harmonically related.
    pub harmonics: Vec<f64>,
    /// Lower bound of the admissible DM ratio (inclusive).
    pub dm_ratio_min: f64,
    /// Upper bound of the admissible DM ratio (inclusive).
    pub dm_ratio_max: f64,
    /// Entries further than this from a candidate with a known position are
    /// rejected, in degrees.
    pub max_separation_deg: f64,
    /// Angular separation is divided by this before entering the score.
    pub angular_weight: f64,
    /// Length of the shortlist.
    pub max_results: usize,
    /// Fractional tolerance for flagging a ratio as a confident match.
    pub close_tolerance: f64,
}

impl Default for MatchParams {
    fn default() -> Self {
        Self {
            harmonics: DEFAULT_HARMONICS.to_vec(),
            dm_ratio_min: 0.85,
            dm_ratio_max: 1.15,
            max_separation_deg: 10.0,
            angular_weight: 10.0,
            max_results: 5,
            close_tolerance: 0.05,
        }
    }
}

impl MatchParams {
    pub fn with_max_results(mut self, k: usize) -> Self {
        self.max_results = k;
        self
    }

    pub fn dm_ratio_admissible(&self, ratio_dm: f64) -> bool {
        (self.dm_ratio_min..=self.dm_ratio_max).contains(&ratio_dm)
    }

    /// Unknown separations never gate an entry.
    pub fn separation_admissible(&self, separation_deg: Option<f64>) -> bool {
        separation_deg.map_or(true, |sep| sep <= self.max_separation_deg)
    }
}
