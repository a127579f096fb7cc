#![forbid(unsafe_code)]

#[macro_use]
pub mod prelude;

pub mod repr;
pub mod roster;
pub mod traits;
