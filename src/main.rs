use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use terrain_profiler::prelude::*;

/// Command-line tool to generate a slope-limited terrain height profile
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Random seed, numeric or free text; omit to seed from system entropy
    #[arg(short, long)]
    seed: Option<String>,

    /// Number of wave components to sum
    #[arg(short = 'n', long, default_value_t = 100)]
    components: usize,

    /// Maximum amplitude magnitude of a single component
    #[arg(short, long, default_value_t = 4)]
    amplitude: i32,

    /// Lower dilation (angular frequency) bound
    #[arg(long, default_value_t = 0.01)]
    min_dilation: f64,

    /// Upper dilation bound
    #[arg(long, default_value_t = 0.05)]
    max_dilation: f64,

    /// Lower phase bound in radians
    #[arg(long, default_value_t = 0.0)]
    min_phase: f64,

    /// Upper phase bound in radians
    #[arg(long, default_value_t = std::f64::consts::FRAC_PI_2)]
    max_phase: f64,

    /// Number of horizontal samples in the profile
    #[arg(short, long, default_value_t = 400)]
    width: usize,

    /// Largest allowed height change between adjacent samples
    #[arg(long, default_value_t = 3)]
    max_step: i32,

    /// Output format: text, csv or json
    #[arg(short, long, default_value = "text")]
    format: ExportFormat,

    /// Output file path
    #[arg(short, long, default_value = "profile.txt")]
    output: PathBuf,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    println!("Generating terrain profile...");
    println!(
        "Profile dimensions: {} samples from {} wave components, max step {}",
        args.width, args.components, args.max_step
    );

    let seed = match &args.seed {
        Some(arg) => Seed::parse(arg),
        None => Seed::Entropy,
    };
    match &args.seed {
        Some(arg) => println!("seeding rng with {}", arg),
        None => println!("seeding rng with system entropy"),
    }

    let config = ProfileConfig {
        components: args.components,
        max_amplitude: args.amplitude,
        min_dilation: args.min_dilation,
        max_dilation: args.max_dilation,
        min_phase: args.min_phase,
        max_phase: args.max_phase,
        width: args.width,
        max_step: args.max_step,
    };

    // Run the generation pipeline
    let mut rng = seed.rng();
    let profile = generate(&config, &mut rng);

    // Advisory notices for every sample the limiter adjusted
    for clamp in &profile.clamps {
        println!("too steep at {}", clamp.index);
    }

    let min_height = profile.heights.iter().min().copied().unwrap_or(0);
    let max_height = profile.heights.iter().max().copied().unwrap_or(0);
    println!(
        "Profile height range: min = {}, max = {}, {} samples clamped",
        min_height,
        max_height,
        profile.clamps.len()
    );

    // Export the profile
    println!("Exporting to {}...", args.output.display());
    save_profile(&profile, args.format, &args.output)?;

    println!("Done!");
    Ok(())
}
