mod collision;
mod integrator;

pub use collision::{
    circle_overlaps_box, overlap_circle, resolve_collisions_system, resolve_overlap,
};
pub use integrator::{integrate_body, integrate_bodies_system};
