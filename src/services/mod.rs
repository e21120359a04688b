pub mod registrar;

pub use registrar::PluginRegistrar;
