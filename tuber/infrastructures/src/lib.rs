pub(crate) mod utils;

pub mod boundaries;

pub mod gateways {
    pub mod clocks;
    pub mod fetchers;
    pub mod repositories;
}
