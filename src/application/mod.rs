pub mod bootstrapper;

pub use bootstrapper::AppBootstrapper;
