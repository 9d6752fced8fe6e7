// Adapters layer: concrete repository and storage implementations.

pub mod file;
pub mod memory;
pub mod storage;

pub use file::FileFoyerRepository;
pub use memory::InMemoryFoyerRepository;
pub use storage::LocalStorage;
