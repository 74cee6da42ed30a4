pub(crate) mod utils;

pub mod boundaries;
pub mod gateways;
pub mod interactors;
pub mod models;
