use std::time::Instant;
use terrain_profiler::prelude::*;

fn main() {
    println!("Running Terrain Profiler Benchmarks");
    println!("===================================");

    // Parameters for different profile sizes
    let sizes = [
        (100, 400),      // the defaults
        (1_000, 10_000),
        (10_000, 100_000),
    ];

    for &(components, width) in &sizes {
        println!("\nProfile size: {} components x {} samples", components, width);

        let config = ProfileConfig {
            components,
            width,
            ..ProfileConfig::default()
        };
        let mut rng = Seed::Number(42).rng();

        // Benchmark component generation
        let start = Instant::now();
        let parameter_set = generate_components(config.components, &config, &mut rng);
        println!("  Component generation: {:.2?}", start.elapsed());

        // Benchmark surface sampling
        let start = Instant::now();
        let raw = terrain_profiler::surface::sample(config.width, &parameter_set);
        println!("  Surface sampling: {:.2?}", start.elapsed());

        // Benchmark slope limiting
        let start = Instant::now();
        let (_, clamps) = limit_slope(&raw, config.max_step);
        println!(
            "  Slope limiting: {:.2?} ({} samples clamped)",
            start.elapsed(),
            clamps.len()
        );
    }
}
