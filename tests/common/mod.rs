#![allow(dead_code)]

mod assertions;
mod fixtures;
mod test_app;

pub use assertions::{assert_ship_finite, assert_ship_invariants};
pub use fixtures::*;
pub use test_app::{TestApp, TestAppBuilder};
