use std::f64::consts::FRAC_PI_2;

/// Tunable constants for profile generation
#[derive(Debug, Clone)]
pub struct ProfileConfig {
    pub components: usize, // Number of wave components summed per profile
    pub max_amplitude: i32, // Component amplitude is drawn from [-max_amplitude, max_amplitude]
    pub min_dilation: f64, // Angular frequency bounds (oscillations per unit distance)
    pub max_dilation: f64,
    pub min_phase: f64, // Phase offset bounds in radians
    pub max_phase: f64,
    pub width: usize,  // Number of horizontal samples in the profile
    pub max_step: i32, // Largest allowed height change between adjacent samples
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            components: 100,
            max_amplitude: 4,
            min_dilation: 0.01,
            max_dilation: 0.05,
            min_phase: 0.0,
            max_phase: FRAC_PI_2,
            width: 400,
            max_step: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_phase_bound_truncates_to_157() {
        // pi/2 * 100 = 157.07...; the generator truncates this to 157.
        let config = ProfileConfig::default();
        assert_eq!((config.max_phase * 100.0) as i64, 157);
    }
}
