use rand::Rng;
use thiserror::Error;
use tracing::info;

use crate::archetype::Archetype;
use crate::entity::{EntityRef, ENTITY_CAPACITY};
use crate::grid;
use crate::world::World;
use crate::Vec2;

/// Initial world population: one player at the origin plus resources
/// scattered uniformly in `±scatter_extent` on both axes, snapped to the tile
/// grid.
#[derive(Debug, Clone)]
pub struct WorldgenConfig {
    pub rock_count: usize,
    pub tree_count: usize,
    pub scatter_extent: f32,
}

impl Default for WorldgenConfig {
    fn default() -> Self {
        Self {
            rock_count: 10,
            tree_count: 10,
            scatter_extent: 200.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum WorldgenError {
    #[error("world population {requested} exceeds entity capacity {capacity}")]
    PopulationExceedsCapacity { requested: usize, capacity: usize },
    #[error("scatter extent must be finite and non-negative, got {extent}")]
    InvalidScatterExtent { extent: f32 },
}

/// Populates a fresh world and returns the player handle. The config is
/// validated up front so a bad population count is a recoverable error here
/// rather than pool exhaustion later.
pub fn generate(
    world: &mut World,
    config: &WorldgenConfig,
    rng: &mut impl Rng,
) -> Result<EntityRef, WorldgenError> {
    if !config.scatter_extent.is_finite() || config.scatter_extent < 0.0 {
        return Err(WorldgenError::InvalidScatterExtent {
            extent: config.scatter_extent,
        });
    }
    let requested = 1 + config.rock_count + config.tree_count;
    if requested > ENTITY_CAPACITY {
        return Err(WorldgenError::PopulationExceedsCapacity {
            requested,
            capacity: ENTITY_CAPACITY,
        });
    }

    let player = world.spawn(Archetype::Player, Vec2::default());
    world.set_player(Some(player));

    for _ in 0..config.rock_count {
        let position = scatter_position(config.scatter_extent, rng);
        world.spawn(Archetype::Rock, position);
    }
    for _ in 0..config.tree_count {
        let position = scatter_position(config.scatter_extent, rng);
        world.spawn(Archetype::Tree, position);
    }

    info!(
        rocks = config.rock_count,
        trees = config.tree_count,
        entity_count = world.pool().live_count(),
        "world_generated"
    );
    Ok(player)
}

fn scatter_position(extent: f32, rng: &mut impl Rng) -> Vec2 {
    grid::snap(Vec2 {
        x: rng.gen_range(-extent..=extent),
        y: rng.gen_range(-extent..=extent),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generates_the_player_and_scattered_resources() {
        let mut world = World::new();
        let config = WorldgenConfig::default();
        let mut rng = StdRng::seed_from_u64(1);

        let player = generate(&mut world, &config, &mut rng).expect("valid config");

        assert_eq!(world.player(), Some(player));
        assert_eq!(
            world.pool().get(player).expect("player").position,
            Vec2::default()
        );
        assert_eq!(
            world.pool().live_count(),
            1 + config.rock_count + config.tree_count
        );

        for (handle, entity) in world.pool().iter() {
            if handle == player {
                continue;
            }
            assert!(
                matches!(entity.archetype, Archetype::Rock | Archetype::Tree),
                "{:?}",
                entity.archetype
            );
            assert_eq!(
                grid::snap(entity.position),
                entity.position,
                "resource not tile-snapped at {:?}",
                entity.position
            );
            assert!(entity.position.x.abs() <= config.scatter_extent);
            assert!(entity.position.y.abs() <= config.scatter_extent);
        }
    }

    #[test]
    fn same_seed_produces_the_same_layout() {
        let config = WorldgenConfig::default();

        let mut world_a = World::new();
        generate(&mut world_a, &config, &mut StdRng::seed_from_u64(42)).expect("valid");
        let mut world_b = World::new();
        generate(&mut world_b, &config, &mut StdRng::seed_from_u64(42)).expect("valid");

        let layout_a: Vec<_> = world_a
            .pool()
            .iter()
            .map(|(_, entity)| (entity.archetype, entity.position))
            .collect();
        let layout_b: Vec<_> = world_b
            .pool()
            .iter()
            .map(|(_, entity)| (entity.archetype, entity.position))
            .collect();
        assert_eq!(layout_a, layout_b);
    }

    #[test]
    fn rejects_a_population_over_pool_capacity() {
        let mut world = World::new();
        let config = WorldgenConfig {
            rock_count: ENTITY_CAPACITY,
            ..WorldgenConfig::default()
        };
        let result = generate(&mut world, &config, &mut StdRng::seed_from_u64(0));
        assert_eq!(
            result,
            Err(WorldgenError::PopulationExceedsCapacity {
                requested: 1 + ENTITY_CAPACITY + 10,
                capacity: ENTITY_CAPACITY,
            })
        );
    }

    #[test]
    fn rejects_a_non_finite_scatter_extent() {
        let mut world = World::new();
        let config = WorldgenConfig {
            scatter_extent: f32::NAN,
            ..WorldgenConfig::default()
        };
        let result = generate(&mut world, &config, &mut StdRng::seed_from_u64(0));
        assert!(matches!(
            result,
            Err(WorldgenError::InvalidScatterExtent { .. })
        ));
    }
}
