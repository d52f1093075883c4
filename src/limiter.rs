use serde::Serialize;

/// Which bound a sample was clamped to during slope limiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ClampDirection {
    /// The raw sample rose too fast and was held at `prev + max_step`.
    Up,
    /// The raw sample fell too fast and was held at `prev - max_step`.
    Down,
}

/// One sample adjusted by the slope limiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClampEvent {
    pub index: usize,
    pub direction: ClampDirection,
}

/// Bound every step of `raw` to at most `max_step`, scanning left to right.
///
/// Each decision compares against the previous *limited* value, not the raw
/// one, so a sustained steep stretch flattens into a ramp of `max_step` per
/// sample instead of being truncated independently at each position. The
/// comparisons are strict: a step of exactly `max_step` passes through
/// untouched and is not reported.
pub fn limit_slope(raw: &[i32], max_step: i32) -> (Vec<i32>, Vec<ClampEvent>) {
    let mut limited = Vec::with_capacity(raw.len());
    let mut clamps = Vec::new();

    for (index, &height) in raw.iter().enumerate() {
        if index == 0 {
            limited.push(height);
            continue;
        }

        let prev = limited[index - 1];
        if height > prev + max_step {
            limited.push(prev + max_step);
            clamps.push(ClampEvent {
                index,
                direction: ClampDirection::Up,
            });
        } else if height < prev - max_step {
            limited.push(prev - max_step);
            clamps.push(ClampEvent {
                index,
                direction: ClampDirection::Down,
            });
        } else {
            limited.push(height);
        }
    }

    (limited, clamps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_propagate_from_limited_value() {
        // The drop at index 2 is measured from the clamped 3, not the
        // raw 100, so the result ramps back down to 0.
        let (limited, clamps) = limit_slope(&[0, 100, -100], 3);
        assert_eq!(limited, vec![0, 3, 0]);
        assert_eq!(
            clamps,
            vec![
                ClampEvent {
                    index: 1,
                    direction: ClampDirection::Up
                },
                ClampEvent {
                    index: 2,
                    direction: ClampDirection::Down
                },
            ]
        );
    }

    #[test]
    fn exact_max_step_passes_unclamped() {
        let (limited, clamps) = limit_slope(&[0, 3, 6, 3, 0], 3);
        assert_eq!(limited, vec![0, 3, 6, 3, 0]);
        assert!(clamps.is_empty());
    }

    #[test]
    fn descent_to_exactly_max_step_below_clamped_value_is_accepted() {
        // Index 1 clamps to 3; the raw 0 at index 2 is then exactly
        // max_step below the clamped value and passes through.
        let (limited, clamps) = limit_slope(&[0, 100, 0], 3);
        assert_eq!(limited, vec![0, 3, 0]);
        assert_eq!(clamps.len(), 1);
        assert_eq!(clamps[0].index, 1);
    }

    #[test]
    fn sustained_climb_becomes_bounded_ramp() {
        let (limited, clamps) = limit_slope(&[0, 10, 20, 30], 3);
        assert_eq!(limited, vec![0, 3, 6, 9]);
        let indices: Vec<usize> = clamps.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        assert!(clamps
            .iter()
            .all(|c| c.direction == ClampDirection::Up));
    }

    #[test]
    fn single_element_profile_is_unchanged() {
        let (limited, clamps) = limit_slope(&[5], 3);
        assert_eq!(limited, vec![5]);
        assert!(clamps.is_empty());
    }

    #[test]
    fn empty_profile_is_unchanged() {
        let (limited, clamps) = limit_slope(&[], 3);
        assert!(limited.is_empty());
        assert!(clamps.is_empty());
    }

    #[test]
    fn negative_start_clamps_symmetrically() {
        let (limited, clamps) = limit_slope(&[-2, -40, 5], 4);
        assert_eq!(limited, vec![-2, -6, -2]);
        assert_eq!(clamps[0].direction, ClampDirection::Down);
        assert_eq!(clamps[1].direction, ClampDirection::Up);
    }
}
