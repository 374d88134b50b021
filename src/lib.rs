pub mod config;
pub mod crawler;
pub mod data_models;
pub mod exporters;
pub mod extractors;
pub mod fetcher;
pub mod jobs;
pub mod parser;

pub use data_models::ParsedRecord;
pub use parser::SearchParser;
