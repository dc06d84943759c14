//! Core data structures for the contact process Ising model.

pub mod data;

pub use data::census::Census;
pub use data::initial::InitialCondition;
pub use data::site::SiteState;
