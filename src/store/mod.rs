mod data_store;
pub mod error;
pub mod files;
mod loader;
mod manifest;
mod parse;
mod report;
pub mod validation;

pub use data_store::DataStore;
pub use error::StoreError;
pub use loader::DataStoreLoader;
pub use report::LoadReport;
pub use validation::RatingInversion;
