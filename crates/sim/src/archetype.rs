use crate::entity::Entity;

pub const TREE_BASE_HEALTH: i32 = 3;
pub const ROCK_BASE_HEALTH: i32 = 3;

/// The static kind of an entity. `None` is the zeroed state of an unused pool
/// slot; it has no definition row and is never queried by gameplay code.
///
/// Ordering follows declaration order and is the stable order used for
/// inventory listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Archetype {
    #[default]
    None,
    Rock,
    Tree,
    Player,
    ItemRock,
    ItemWood,
}

pub const ARCHETYPE_COUNT: usize = 6;

impl Archetype {
    pub const ALL: [Archetype; ARCHETYPE_COUNT] = [
        Archetype::None,
        Archetype::Rock,
        Archetype::Tree,
        Archetype::Player,
        Archetype::ItemRock,
        Archetype::ItemWood,
    ];

    pub(crate) const fn index(self) -> usize {
        match self {
            Archetype::None => 0,
            Archetype::Rock => 1,
            Archetype::Tree => 2,
            Archetype::Player => 3,
            Archetype::ItemRock => 4,
            Archetype::ItemWood => 5,
        }
    }
}

/// One row of the static attribute table: everything that is fixed per kind.
/// `loot` is the archetype spawned at the entity's position when a destroyable
/// entity runs out of health.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchetypeDef {
    pub archetype: Archetype,
    pub label: &'static str,
    pub sprite_key: &'static str,
    pub base_health: i32,
    pub destroyable: bool,
    pub is_item: bool,
    pub loot: Option<Archetype>,
}

// Row order must match `Archetype::index` minus the `None` slot; checked by test.
const ARCHETYPE_DEFS: [ArchetypeDef; ARCHETYPE_COUNT - 1] = [
    ArchetypeDef {
        archetype: Archetype::Rock,
        label: "Rock",
        sprite_key: "objects/rock_0",
        base_health: ROCK_BASE_HEALTH,
        destroyable: true,
        is_item: false,
        loot: Some(Archetype::ItemRock),
    },
    ArchetypeDef {
        archetype: Archetype::Tree,
        label: "Tree",
        sprite_key: "objects/tree_0",
        base_health: TREE_BASE_HEALTH,
        destroyable: true,
        is_item: false,
        loot: Some(Archetype::ItemWood),
    },
    ArchetypeDef {
        archetype: Archetype::Player,
        label: "Player",
        sprite_key: "actors/player",
        base_health: 0,
        destroyable: false,
        is_item: false,
        loot: None,
    },
    ArchetypeDef {
        archetype: Archetype::ItemRock,
        label: "Rock",
        sprite_key: "items/rock",
        base_health: 0,
        destroyable: false,
        is_item: true,
        loot: None,
    },
    ArchetypeDef {
        archetype: Archetype::ItemWood,
        label: "Wood",
        sprite_key: "items/wood",
        base_health: 0,
        destroyable: false,
        is_item: true,
        loot: None,
    },
];

pub fn def_of(archetype: Archetype) -> &'static ArchetypeDef {
    ARCHETYPE_DEFS
        .get(archetype.index().wrapping_sub(1))
        .unwrap_or_else(|| panic!("no archetype definition for {archetype:?}"))
}

/// Applies an archetype's static attributes onto a freshly created entity
/// slot. This is the only path by which an entity acquires a meaningful kind;
/// the caller positions it afterwards.
pub fn setup(entity: &mut Entity, archetype: Archetype) {
    let def = def_of(archetype);
    entity.archetype = archetype;
    entity.health = def.base_health;
    entity.destroyable = def.destroyable;
    entity.is_item = def.is_item;
}
