pub mod archetype;
pub mod entity;
pub mod grid;
pub mod input;
pub mod tick;
pub mod view;
pub mod world;
pub mod worldgen;

pub use archetype::{def_of, setup, Archetype, ArchetypeDef, ARCHETYPE_COUNT};
pub use entity::{Entity, EntityPool, EntityRef, ENTITY_CAPACITY};
pub use grid::{
    snap, tile_to_world, visible_tile_range, world_to_tile, TileRect, TILE_WIDTH,
    VISIBLE_TILE_RADIUS_X, VISIBLE_TILE_RADIUS_Y,
};
pub use input::{InputAction, InputSnapshot};
pub use tick::{
    advance, select_at, FrameView, PICKUP_RADIUS, PLAYER_MOVE_SPEED, SELECTION_RADIUS,
};
pub use view::{
    hud_snapshot, inventory_entries, render_entities, HudSnapshot, InventoryEntry, RenderEntity,
};
pub use world::{Inventory, World};
pub use worldgen::{generate, WorldgenConfig, WorldgenError};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}
