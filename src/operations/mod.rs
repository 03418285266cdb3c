pub mod assembly;
pub mod generation;
pub mod query;
