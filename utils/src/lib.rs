pub mod surf_logging;

pub use surf_logging::SurfLogging;
