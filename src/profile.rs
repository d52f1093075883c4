use rand::Rng;
use serde::Serialize;

use crate::config::ProfileConfig;
use crate::limiter::{limit_slope, ClampEvent};
use crate::surface;
use crate::wave;

/// A finished terrain profile: the slope-limited heights plus the record
/// of every sample the limiter adjusted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub heights: Vec<i32>,
    pub clamps: Vec<ClampEvent>,
}

/// Run the full pipeline: draw the wave components, sample the raw surface
/// at every position, then limit the slope.
pub fn generate<R: Rng>(config: &ProfileConfig, rng: &mut R) -> Profile {
    let components = wave::generate_components(config.components, config, rng);
    let raw = surface::sample(config.width, &components);
    let (heights, clamps) = limit_slope(&raw, config.max_step);

    Profile { heights, clamps }
}
