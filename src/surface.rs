use rayon::prelude::*;

use crate::wave::WaveComponent;

/// Height of the surface at `x`: the superposition of every component's
/// sinusoid, summed in component index order.
pub fn evaluate(x: f64, components: &[WaveComponent]) -> f64 {
    let mut height = 0.0;
    for c in components {
        height += c.amplitude as f64 * (c.dilation * (x - c.phase)).sin();
    }
    height
}

/// Sample the surface at the integer positions `0..width`, truncating each
/// height toward zero (2.9 becomes 2, -2.9 becomes -2).
///
/// Positions are evaluated in parallel; the component set is already fixed
/// at this point, so the output order and values do not depend on scheduling.
pub fn sample(width: usize, components: &[WaveComponent]) -> Vec<i32> {
    (0..width)
        .into_par_iter()
        .map(|x| evaluate(x as f64, components) as i32)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_components_give_flat_surface() {
        assert_eq!(sample(16, &[]), vec![0; 16]);
    }

    #[test]
    fn single_component_matches_closed_form() {
        let c = WaveComponent {
            amplitude: 3,
            phase: 0.25,
            dilation: 0.02,
        };
        let expected = 3.0 * (0.02f64 * (10.0 - 0.25)).sin();
        assert!((evaluate(10.0, &[c]) - expected).abs() < 1e-12);
    }

    #[test]
    fn sample_truncates_toward_zero() {
        // 3 * sin(0.5 * 7) is about -1.05; truncation gives -1 where
        // flooring would give -2.
        let c = WaveComponent {
            amplitude: 3,
            phase: 0.0,
            dilation: 0.5,
        };
        let raw = sample(8, &[c]);
        assert_eq!(raw[0], 0);
        assert_eq!(raw[7], -1);
    }

    #[test]
    fn sample_length_matches_width() {
        let c = WaveComponent {
            amplitude: 2,
            phase: 1.0,
            dilation: 0.03,
        };
        assert_eq!(sample(400, &[c]).len(), 400);
        assert!(sample(0, &[c]).is_empty());
    }
}
