use rand::Rng;

use crate::config::ProfileConfig;

/// Parameters for a single wave component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveComponent {
    pub amplitude: i32,
    pub phase: f64,
    pub dilation: f64,
}

/// Generate random wave components
///
/// Each component takes exactly three draws from `rng`, in the order
/// amplitude, phase, dilation, with components drawn in index order.
/// Phase and dilation are quantized to hundredths: the configured bounds
/// are scaled to integer hundredths, a uniform integer is drawn over the
/// inclusive range, and the result divided back down. The phase bounds
/// are truncated when scaled (pi/2 becomes 157); the dilation bounds are
/// rounded (0.01..0.05 becomes 1..5).
pub fn generate_components<R: Rng>(
    count: usize,
    config: &ProfileConfig,
    rng: &mut R,
) -> Vec<WaveComponent> {
    let phase_lo = (config.min_phase * 100.0) as i64;
    let phase_hi = (config.max_phase * 100.0) as i64;
    let dilation_lo = (config.min_dilation * 100.0).round() as i64;
    let dilation_hi = (config.max_dilation * 100.0).round() as i64;

    let mut components = Vec::with_capacity(count);

    for _ in 0..count {
        let amplitude = rng.gen_range(-config.max_amplitude..=config.max_amplitude);
        let phase = rng.gen_range(phase_lo..=phase_hi) as f64 / 100.0;
        let dilation = rng.gen_range(dilation_lo..=dilation_hi) as f64 / 100.0;

        components.push(WaveComponent {
            amplitude,
            phase,
            dilation,
        });
    }

    components
}
