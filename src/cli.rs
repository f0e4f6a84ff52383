pub mod command;
pub mod run;

pub use run::run_app;
