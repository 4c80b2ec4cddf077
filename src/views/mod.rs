pub mod settings;
pub mod shared;
pub mod study;

pub use settings::SettingsView;
pub use study::StudyView;
