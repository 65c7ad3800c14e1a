use bevy::prelude::*;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::components::StaticCollider;
use crate::resources::LevelConfig;

/// A platform to be spawned, centred on `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformSpec {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl PlatformSpec {
    pub fn top(&self) -> f32 {
        self.center.y + self.half_extents.y
    }

    pub fn left(&self) -> f32 {
        self.center.x - self.half_extents.x
    }

    pub fn right(&self) -> f32 {
        self.center.x + self.half_extents.x
    }
}

/// Lay out a floor around the origin (top surface at y = 0) followed by a run
/// of platforms to the right. The same config always yields the same level.
pub fn generate_level(config: &LevelConfig) -> Vec<PlatformSpec> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let half_thickness = config.platform_thickness / 2.0;

    let ground = PlatformSpec {
        center: Vec2::new(0.0, -half_thickness),
        half_extents: Vec2::new(config.ground_width / 2.0, half_thickness),
    };

    let mut platforms = Vec::with_capacity(config.platform_count + 1);
    platforms.push(ground);

    let mut cursor = ground.right();
    let mut top = 0.0_f32;
    for _ in 0..config.platform_count {
        let gap = sample(&mut rng, config.gap);
        let width = sample(&mut rng, config.platform_width);
        let rise = sample(&mut rng, (-config.height_step, config.height_step));
        top = (top + rise).max(0.0);

        let platform = PlatformSpec {
            center: Vec2::new(cursor + gap + width / 2.0, top - half_thickness),
            half_extents: Vec2::new(width / 2.0, half_thickness),
        };
        cursor = platform.right();
        platforms.push(platform);
    }

    platforms
}

/// Uniform sample from `(min, max)`; an empty or inverted range yields `min`.
fn sample(rng: &mut ChaCha8Rng, (min, max): (f32, f32)) -> f32 {
    if min < max {
        rng.gen_range(min..=max)
    } else {
        min
    }
}

pub fn spawn_level_system(mut commands: Commands, config: Res<LevelConfig>) {
    let platforms = generate_level(&config);
    info!(
        "Spawning level with {} platforms (seed {})",
        platforms.len(),
        config.seed
    );

    for (index, platform) in platforms.iter().enumerate() {
        commands.spawn((
            Name::new(format!("Platform {}", index)),
            StaticCollider::ground(platform.half_extents),
            Transform::from_translation(platform.center.extend(0.0)),
        ));
    }
}
