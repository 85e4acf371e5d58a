use tracing::debug;

use crate::archetype::{self, Archetype, ARCHETYPE_COUNT};
use crate::entity::{EntityPool, EntityRef};
use crate::Vec2;

/// Aggregate per-archetype item counts, driven only by pickup events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Inventory {
    counts: [u32; ARCHETYPE_COUNT],
}

impl Inventory {
    pub fn count(&self, archetype: Archetype) -> u32 {
        self.counts[archetype.index()]
    }

    pub(crate) fn add(&mut self, archetype: Archetype) {
        let count = &mut self.counts[archetype.index()];
        *count = count.saturating_add(1);
    }

    /// Entries with a positive count, in stable ascending archetype order.
    pub fn nonzero_entries(&self) -> impl Iterator<Item = (Archetype, u32)> + '_ {
        Archetype::ALL
            .into_iter()
            .map(|archetype| (archetype, self.count(archetype)))
            .filter(|(_, count)| *count > 0)
    }
}

/// The single persistent state container: the entity pool, the aggregate
/// inventory, and the player handle assigned at world generation.
#[derive(Debug, Default)]
pub struct World {
    pool: EntityPool,
    inventory: Inventory,
    player: Option<EntityRef>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims a pool slot and fully initializes it from the archetype table.
    pub fn spawn(&mut self, archetype: Archetype, position: Vec2) -> EntityRef {
        let handle = self.pool.create();
        let entity = self.pool.get_mut(handle).expect("slot was just created");
        archetype::setup(entity, archetype);
        entity.position = position;
        debug!(archetype = ?archetype, slot = handle.index(), "entity_spawned");
        handle
    }

    pub fn destroy(&mut self, handle: EntityRef) {
        let archetype = self.pool.get(handle).map(|entity| entity.archetype);
        self.pool.destroy(handle);
        debug!(archetype = ?archetype, slot = handle.index(), "entity_destroyed");
    }

    pub fn pool(&self) -> &EntityPool {
        &self.pool
    }

    pub fn pool_mut(&mut self) -> &mut EntityPool {
        &mut self.pool
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub(crate) fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    pub fn player(&self) -> Option<EntityRef> {
        self.player
    }

    pub fn set_player(&mut self, player: Option<EntityRef>) {
        self.player = player;
    }
}
