use crate::archetype::{def_of, Archetype};
use crate::entity::EntityRef;
use crate::tick::FrameView;
use crate::world::World;
use crate::Vec2;

/// One renderable row per live entity, in slot order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderEntity {
    pub archetype: Archetype,
    pub position: Vec2,
    pub sprite_key: &'static str,
    pub selected: bool,
}

pub fn render_entities(world: &World, view: &FrameView) -> Vec<RenderEntity> {
    world
        .pool()
        .iter()
        .map(|(handle, entity)| RenderEntity {
            archetype: entity.archetype,
            position: entity.position,
            sprite_key: def_of(entity.archetype).sprite_key,
            selected: view.selected == Some(handle),
        })
        .collect()
}

/// Inventory listing row for the UI layer: non-zero counts joined with the
/// archetype's display name and icon reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryEntry {
    pub archetype: Archetype,
    pub label: &'static str,
    pub icon_key: &'static str,
    pub count: u32,
}

pub fn inventory_entries(world: &World) -> Vec<InventoryEntry> {
    world
        .inventory()
        .nonzero_entries()
        .map(|(archetype, count)| {
            let def = def_of(archetype);
            InventoryEntry {
                archetype,
                label: def.label,
                icon_key: def.sprite_key,
                count,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct HudSnapshot {
    pub entity_count: usize,
    pub item_count: usize,
    pub selected_entity: Option<EntityRef>,
    pub selected_position: Option<Vec2>,
    pub selected_health: Option<i32>,
    pub inventory: Vec<InventoryEntry>,
}

pub fn hud_snapshot(world: &World, view: &FrameView) -> HudSnapshot {
    let selected = view
        .selected
        .and_then(|handle| world.pool().get(handle))
        .map(|entity| (entity.position, entity.health));

    HudSnapshot {
        entity_count: world.pool().live_count(),
        item_count: world
            .pool()
            .iter()
            .filter(|(_, entity)| entity.is_item)
            .count(),
        selected_entity: view.selected,
        selected_position: selected.map(|(position, _)| position),
        selected_health: selected.map(|(_, health)| health),
        inventory: inventory_entries(world),
    }
}
