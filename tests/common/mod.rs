#![allow(dead_code)]

mod assertions;
mod fixtures;
mod test_app;

pub use assertions::{assert_controller_valid, assert_vec2_eq, assert_vec3_eq};
pub use fixtures::*;
pub use test_app::{TestApp, TestAppBuilder};
