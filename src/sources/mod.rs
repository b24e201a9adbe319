pub mod builtin;
pub mod json_file;
pub mod traits;

pub use builtin::BuiltinSource;
pub use json_file::JsonFileSource;
pub use traits::CatalogSource;
