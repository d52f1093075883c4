use terrain_profiler::prelude::*;

/// Render a small seeded profile as an ASCII silhouette, one column per
/// sample. Rendering is the caller's job; this is what a consumer of the
/// library looks like.
fn main() {
    let config = ProfileConfig {
        width: 72,
        ..ProfileConfig::default()
    };
    let mut rng = Seed::Phrase("rolling hills".to_string()).rng();
    let profile = generate(&config, &mut rng);

    let min = profile.heights.iter().min().copied().unwrap_or(0);
    let max = profile.heights.iter().max().copied().unwrap_or(0);

    for row in (min..=max).rev() {
        let line: String = profile
            .heights
            .iter()
            .map(|&h| if h >= row { '#' } else { ' ' })
            .collect();
        println!("{}", line);
    }

    println!(
        "{} samples, height range {}..{}, {} clamped",
        profile.heights.len(),
        min,
        max,
        profile.clamps.len()
    );
}
