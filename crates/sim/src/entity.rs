use crate::archetype::Archetype;
use crate::Vec2;

/// Hard cap on the world population, not a transient resource limit.
pub const ENTITY_CAPACITY: usize = 1024;

/// A validated index into the entity pool. The generation counter makes a
/// handle held across a destroy+reuse cycle detectably stale instead of
/// silently reading the slot's new occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityRef {
    index: u32,
    generation: u32,
}

impl EntityRef {
    pub fn index(self) -> usize {
        self.index as usize
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Entity {
    pub archetype: Archetype,
    pub position: Vec2,
    pub health: i32,
    pub destroyable: bool,
    pub is_item: bool,
}

#[derive(Debug, Clone, Copy, Default)]
struct Slot {
    valid: bool,
    generation: u32,
    entity: Entity,
}

/// Fixed-capacity entity store. Slots are reused in ascending index order and
/// fully zeroed on destroy; a dead slot never leaks the previous occupant's
/// state into the next one.
#[derive(Debug)]
pub struct EntityPool {
    slots: Vec<Slot>,
}

impl Default for EntityPool {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityPool {
    pub fn new() -> Self {
        Self {
            slots: vec![Slot::default(); ENTITY_CAPACITY],
        }
    }

    /// Claims the first free slot. Panics when all slots are live: exhaustion
    /// means game content outgrew the fixed capacity, which is not a
    /// recoverable error.
    pub fn create(&mut self) -> EntityRef {
        let (index, slot) = self
            .slots
            .iter_mut()
            .enumerate()
            .find(|(_, slot)| !slot.valid)
            .unwrap_or_else(|| panic!("entity pool exhausted: all {ENTITY_CAPACITY} slots are live"));
        slot.valid = true;
        slot.entity = Entity::default();
        EntityRef {
            index: index as u32,
            generation: slot.generation,
        }
    }

    /// Zeroes the slot and retires the handle's generation. Destroying a slot
    /// that is not live (or through a stale handle) is a caller-logic error
    /// and panics; callers must check validity first.
    pub fn destroy(&mut self, handle: EntityRef) {
        let slot = &mut self.slots[handle.index()];
        if !slot.valid || slot.generation != handle.generation {
            panic!(
                "destroy of invalid entity slot {} (generation {})",
                handle.index, handle.generation
            );
        }
        slot.entity = Entity::default();
        slot.valid = false;
        slot.generation = slot.generation.wrapping_add(1);
    }

    pub fn get(&self, handle: EntityRef) -> Option<&Entity> {
        let slot = self.slots.get(handle.index())?;
        (slot.valid && slot.generation == handle.generation).then_some(&slot.entity)
    }

    pub fn get_mut(&mut self, handle: EntityRef) -> Option<&mut Entity> {
        let slot = self.slots.get_mut(handle.index())?;
        (slot.valid && slot.generation == handle.generation).then_some(&mut slot.entity)
    }

    pub fn contains(&self, handle: EntityRef) -> bool {
        self.get(handle).is_some()
    }

    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.valid).count()
    }

    /// Fresh traversal of the currently live entities in ascending slot order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityRef, &Entity)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.valid)
            .map(|(index, slot)| {
                (
                    EntityRef {
                        index: index as u32,
                        generation: slot.generation,
                    },
                    &slot.entity,
                )
            })
    }
}
