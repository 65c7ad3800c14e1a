mod controller;

pub use controller::{bind_camera_target_system, camera_follow_system};
