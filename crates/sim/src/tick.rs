use tracing::debug;

use crate::archetype::{def_of, Archetype};
use crate::entity::EntityRef;
use crate::input::{InputAction, InputSnapshot};
use crate::world::World;
use crate::Vec2;

pub const SELECTION_RADIUS: f32 = 16.0;
pub const PICKUP_RADIUS: f32 = 20.0;
pub const PLAYER_MOVE_SPEED: f32 = 50.0;

/// Derived per-tick state, rebuilt from scratch at the top of every tick and
/// never persisted. The handle is only guaranteed to resolve until the next
/// destroy; `EntityPool::get` reports a same-tick destroy as `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameView {
    pub selected: Option<EntityRef>,
}

/// Runs one simulation tick in the fixed order: rebuild the frame view from
/// the cursor, sweep item pickups, apply the activate interaction, then
/// integrate player movement. Later steps observe earlier steps' mutations.
pub fn advance(world: &mut World, input: &mut InputSnapshot, fixed_dt_seconds: f32) -> FrameView {
    let view = FrameView {
        selected: input
            .cursor_world()
            .and_then(|cursor| select_at(world, cursor)),
    };

    run_pickup_sweep(world);

    if input.take_activate_pressed() {
        if let Some(selected) = view.selected {
            apply_activate(world, selected);
        }
    }

    integrate_player_movement(world, input, fixed_dt_seconds);

    view
}

/// Nearest destroyable entity strictly within `SELECTION_RADIUS` of the query
/// point. The best candidate is replaced only on strictly smaller distance,
/// so the first qualifying entity in slot order wins ties.
pub fn select_at(world: &World, query: Vec2) -> Option<EntityRef> {
    let radius_sq = SELECTION_RADIUS * SELECTION_RADIUS;
    let mut best: Option<(f32, EntityRef)> = None;

    for (handle, entity) in world.pool().iter() {
        if !entity.destroyable {
            continue;
        }
        let dx = entity.position.x - query.x;
        let dy = entity.position.y - query.y;
        let distance_sq = dx * dx + dy * dy;
        if distance_sq >= radius_sq {
            continue;
        }
        match best {
            Some((best_distance_sq, _)) if best_distance_sq <= distance_sq => {}
            _ => best = Some((distance_sq, handle)),
        }
    }

    best.map(|(_, handle)| handle)
}

/// Transfers every item strictly within `PICKUP_RADIUS` of the player into
/// the inventory and frees its slot. Handles are collected before mutating so
/// the sweep sees each live item exactly once, in slot order.
fn run_pickup_sweep(world: &mut World) {
    let Some(player) = world.player() else {
        return;
    };
    let Some(player_position) = world.pool().get(player).map(|entity| entity.position) else {
        return;
    };

    let radius_sq = PICKUP_RADIUS * PICKUP_RADIUS;
    let mut picked: Vec<(EntityRef, Archetype)> = Vec::new();
    for (handle, entity) in world.pool().iter() {
        if !entity.is_item {
            continue;
        }
        let dx = entity.position.x - player_position.x;
        let dy = entity.position.y - player_position.y;
        if dx * dx + dy * dy >= radius_sq {
            continue;
        }
        picked.push((handle, entity.archetype));
    }

    for (handle, archetype) in picked {
        world.inventory_mut().add(archetype);
        world.destroy(handle);
        debug!(
            archetype = ?archetype,
            count = world.inventory().count(archetype),
            "item_picked_up"
        );
    }
}

/// Health transition for the selected entity: damaged while health stays
/// positive, otherwise loot spawn (per the archetype table) followed by
/// destruction. There is no resurrection path.
fn apply_activate(world: &mut World, selected: EntityRef) {
    let Some(entity) = world.pool_mut().get_mut(selected) else {
        return;
    };
    entity.health -= 1;
    if entity.health > 0 {
        debug!(archetype = ?entity.archetype, health = entity.health, "entity_damaged");
        return;
    }

    let archetype = entity.archetype;
    let position = entity.position;
    if let Some(loot) = def_of(archetype).loot {
        world.spawn(loot, position);
        debug!(source = ?archetype, loot = ?loot, "loot_spawned");
    }
    world.destroy(selected);
}

fn integrate_player_movement(world: &mut World, input: &InputSnapshot, fixed_dt_seconds: f32) {
    let Some(player) = world.player() else {
        return;
    };
    let delta = movement_delta(input, fixed_dt_seconds, PLAYER_MOVE_SPEED);
    if delta.x == 0.0 && delta.y == 0.0 {
        return;
    }
    if let Some(entity) = world.pool_mut().get_mut(player) {
        entity.position.x += delta.x;
        entity.position.y += delta.y;
    }
}

fn movement_delta(input: &InputSnapshot, fixed_dt_seconds: f32, speed: f32) -> Vec2 {
    let mut x = 0.0f32;
    let mut y = 0.0f32;

    if input.is_down(InputAction::MoveRight) {
        x += 1.0;
    }
    if input.is_down(InputAction::MoveLeft) {
        x -= 1.0;
    }
    if input.is_down(InputAction::MoveUp) {
        y += 1.0;
    }
    if input.is_down(InputAction::MoveDown) {
        y -= 1.0;
    }

    let len_sq = x * x + y * y;
    if len_sq > 0.0 {
        let inv_len = len_sq.sqrt().recip();
        x *= inv_len;
        y *= inv_len;
    }

    Vec2 {
        x: x * speed * fixed_dt_seconds,
        y: y * speed * fixed_dt_seconds,
    }
}
