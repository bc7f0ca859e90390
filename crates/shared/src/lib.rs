pub mod models;
pub mod region;
