// crates/qthloc-core/src/model/mod.rs
pub mod city;
pub mod convert;
pub mod dataset;

pub use city::CityRecord;
pub use dataset::CityDataset;
