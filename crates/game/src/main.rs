use rand::rngs::StdRng;
use rand::SeedableRng;
use sim::{
    advance, generate, hud_snapshot, inventory_entries, EntityRef, InputAction, InputSnapshot,
    Vec2, World, WorldgenConfig, WorldgenError,
};
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const SEED_ENV_VAR: &str = "FORAGE_SEED";
const TICKS_ENV_VAR: &str = "FORAGE_TICKS";
const FIXED_DT_SECONDS: f32 = 1.0 / 60.0;
const SNAPSHOT_INTERVAL_TICKS: u32 = 60;
const MOVE_DEADZONE_UNITS: f32 = 1.0;

/// Headless demo run: the scripted driver below stands in for the excluded
/// window/input layers and exercises the whole core.
#[derive(Debug, Clone)]
struct DemoConfig {
    seed: u64,
    ticks: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: 7,
            ticks: 1800,
        }
    }
}

#[derive(Debug, Error)]
enum DemoError {
    #[error("failed to parse {var}='{value}' as an unsigned integer: {source}")]
    ParseEnvVar {
        var: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error(transparent)]
    Worldgen(#[from] WorldgenError),
}

fn main() {
    init_tracing();
    info!("=== Forage Proto Startup ===");

    let config = match demo_config_from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "startup_failed");
            std::process::exit(1);
        }
    };

    if let Err(err) = run_demo(&config) {
        error!(error = %err, "demo_failed");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}

fn demo_config_from_env() -> Result<DemoConfig, DemoError> {
    let mut config = DemoConfig::default();
    if let Ok(raw) = std::env::var(SEED_ENV_VAR) {
        config.seed = parse_env_value(SEED_ENV_VAR, &raw)?;
    }
    if let Ok(raw) = std::env::var(TICKS_ENV_VAR) {
        config.ticks = parse_env_value(TICKS_ENV_VAR, &raw)?;
    }
    Ok(config)
}

fn parse_env_value<T: std::str::FromStr<Err = std::num::ParseIntError>>(
    var: &'static str,
    raw: &str,
) -> Result<T, DemoError> {
    raw.trim()
        .parse::<T>()
        .map_err(|source| DemoError::ParseEnvVar {
            var,
            value: raw.to_string(),
            source,
        })
}

fn run_demo(config: &DemoConfig) -> Result<(), DemoError> {
    let mut world = World::new();
    let mut rng = StdRng::seed_from_u64(config.seed);
    let player = generate(&mut world, &WorldgenConfig::default(), &mut rng)?;
    info!(seed = config.seed, ticks = config.ticks, "demo_config");

    for tick_index in 0..config.ticks {
        let mut input = scripted_input(&world, player);
        let view = advance(&mut world, &mut input, FIXED_DT_SECONDS);

        if tick_index % SNAPSHOT_INTERVAL_TICKS == 0 {
            let snapshot = hud_snapshot(&world, &view);
            info!(
                tick = tick_index,
                entity_count = snapshot.entity_count,
                item_count = snapshot.item_count,
                selected = snapshot.selected_entity.is_some(),
                "demo_tick"
            );
        }
    }

    for entry in inventory_entries(&world) {
        info!(item = entry.label, count = entry.count, "inventory_total");
    }
    info!(entity_count = world.pool().live_count(), "demo_complete");
    Ok(())
}

/// One tick of scripted play: aim the cursor at the nearest remaining point
/// of interest, hold activate, and walk the player toward it so dropped loot
/// ends up inside the pickup radius.
fn scripted_input(world: &World, player: EntityRef) -> InputSnapshot {
    let Some(player_position) = world.pool().get(player).map(|entity| entity.position) else {
        return InputSnapshot::empty();
    };
    let Some(target) = nearest_point_of_interest(world, player_position) else {
        return InputSnapshot::empty();
    };

    movement_toward(
        InputSnapshot::empty()
            .with_cursor_world(Some(target))
            .with_activate_pressed(true),
        player_position,
        target,
    )
}

/// Nearest harvestable resource or dropped item; replaced only on strictly
/// smaller distance so the scan is stable in slot order.
fn nearest_point_of_interest(world: &World, player_position: Vec2) -> Option<Vec2> {
    let mut best: Option<(f32, Vec2)> = None;
    for (_, entity) in world.pool().iter() {
        if !entity.destroyable && !entity.is_item {
            continue;
        }
        let dx = entity.position.x - player_position.x;
        let dy = entity.position.y - player_position.y;
        let distance_sq = dx * dx + dy * dy;
        match best {
            Some((best_distance_sq, _)) if best_distance_sq <= distance_sq => {}
            _ => best = Some((distance_sq, entity.position)),
        }
    }
    best.map(|(_, position)| position)
}

fn movement_toward(input: InputSnapshot, from: Vec2, to: Vec2) -> InputSnapshot {
    let mut input = input;
    if to.x > from.x + MOVE_DEADZONE_UNITS {
        input = input.with_action_down(InputAction::MoveRight, true);
    } else if to.x < from.x - MOVE_DEADZONE_UNITS {
        input = input.with_action_down(InputAction::MoveLeft, true);
    }
    if to.y > from.y + MOVE_DEADZONE_UNITS {
        input = input.with_action_down(InputAction::MoveUp, true);
    } else if to.y < from.y - MOVE_DEADZONE_UNITS {
        input = input.with_action_down(InputAction::MoveDown, true);
    }
    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use sim::Archetype;

    #[test]
    fn parse_env_value_accepts_plain_integers() {
        assert_eq!(parse_env_value::<u64>(SEED_ENV_VAR, " 42 ").expect("parses"), 42);
        assert_eq!(parse_env_value::<u32>(TICKS_ENV_VAR, "600").expect("parses"), 600);
    }

    #[test]
    fn parse_env_value_reports_the_variable_name() {
        let err = parse_env_value::<u64>(SEED_ENV_VAR, "not-a-number").expect_err("rejects");
        assert!(err.to_string().contains(SEED_ENV_VAR), "{err}");
    }

    #[test]
    fn nearest_point_of_interest_skips_the_player() {
        let mut world = World::new();
        let player = world.spawn(Archetype::Player, Vec2::default());
        world.set_player(Some(player));
        assert_eq!(nearest_point_of_interest(&world, Vec2::default()), None);

        let tree_position = Vec2 { x: 40.0, y: 0.0 };
        world.spawn(Archetype::Tree, tree_position);
        assert_eq!(
            nearest_point_of_interest(&world, Vec2::default()),
            Some(tree_position)
        );
    }

    #[test]
    fn nearest_point_of_interest_includes_dropped_items() {
        let mut world = World::new();
        world.spawn(Archetype::Tree, Vec2 { x: 100.0, y: 0.0 });
        let item_position = Vec2 { x: 24.0, y: 0.0 };
        world.spawn(Archetype::ItemWood, item_position);

        assert_eq!(
            nearest_point_of_interest(&world, Vec2::default()),
            Some(item_position)
        );
    }

    #[test]
    fn movement_toward_holds_the_axis_flags_for_the_target() {
        let input = movement_toward(
            InputSnapshot::empty(),
            Vec2::default(),
            Vec2 { x: 10.0, y: -10.0 },
        );
        assert!(input.is_down(InputAction::MoveRight));
        assert!(input.is_down(InputAction::MoveDown));
        assert!(!input.is_down(InputAction::MoveLeft));
        assert!(!input.is_down(InputAction::MoveUp));
    }

    #[test]
    fn movement_toward_idles_inside_the_deadzone() {
        let input = movement_toward(
            InputSnapshot::empty(),
            Vec2 { x: 5.0, y: 5.0 },
            Vec2 { x: 5.2, y: 4.9 },
        );
        for action in [
            InputAction::MoveUp,
            InputAction::MoveDown,
            InputAction::MoveLeft,
            InputAction::MoveRight,
        ] {
            assert!(!input.is_down(action), "{action:?}");
        }
    }

    #[test]
    fn scripted_demo_harvests_and_banks_loot() {
        let mut world = World::new();
        let mut rng = StdRng::seed_from_u64(3);
        let player = generate(
            &mut world,
            &WorldgenConfig {
                rock_count: 1,
                tree_count: 1,
                scatter_extent: 24.0,
            },
            &mut rng,
        )
        .expect("valid config");

        for _ in 0..3600 {
            let mut input = scripted_input(&world, player);
            advance(&mut world, &mut input, FIXED_DT_SECONDS);
        }

        assert_eq!(world.inventory().count(Archetype::ItemRock), 1);
        assert_eq!(world.inventory().count(Archetype::ItemWood), 1);
        assert_eq!(world.pool().live_count(), 1, "only the player remains");
    }
}
