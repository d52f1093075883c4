// Export main modules
pub mod config;
pub mod export;
pub mod limiter;
pub mod profile;
pub mod seed;
pub mod surface;
pub mod wave;

// Re-export everything for public use
pub use config::ProfileConfig;
pub use export::{export_profile, save_profile, ExportFormat};
pub use limiter::{limit_slope, ClampDirection, ClampEvent};
pub use profile::{generate, Profile};
pub use seed::Seed;
pub use wave::{generate_components, WaveComponent};

pub mod prelude {
    pub use crate::config::ProfileConfig;
    pub use crate::export::{export_profile, save_profile, ExportFormat};
    pub use crate::limiter::{limit_slope, ClampDirection, ClampEvent};
    pub use crate::profile::{generate, Profile};
    pub use crate::seed::Seed;
    pub use crate::wave::{generate_components, WaveComponent};
}
