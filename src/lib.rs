pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{FileFoyerRepository, InMemoryFoyerRepository, LocalStorage};
pub use config::AppConfig;
pub use domain::model::{Bloc, Foyer, Universite};
pub use domain::ports::{FoyerRepository, Storage};
pub use domain::services::{FoyerService, FoyerServiceImpl};
pub use utils::error::{FoyerError, Result};
