pub mod directory;

pub use directory::DirectoryPage;
