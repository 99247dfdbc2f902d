//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::AllowancePaths;
pub use settings::Settings;
