// Party composition
pub const MAX_PARTY_SIZE: usize = 4;
pub const NUM_STATS: usize = 8;
pub const NUM_EQUIPMENT_SLOTS: usize = 5;
pub const STARTING_GOLD: u64 = 25;

// Recent-event memory (bias against repeat encounters)
pub const EVENT_MEMORY_SIZE: usize = 5;

// XP and leveling
pub const XP_PER_LEVEL: u64 = 100;
pub const MAX_LEVEL: u32 = 50;
pub const HP_PER_LEVEL: u32 = 12;
pub const HEAL_TO_FULL_ON_LEVEL_UP: bool = true;

// Depth scaling rates (multiplicative-linear growth per depth)
pub const DAMAGE_SCALING_RATE: f64 = 0.10;
pub const HEALING_SCALING_RATE: f64 = 0.08;
pub const REWARD_SCALING_RATE: f64 = 0.15;
pub const STAT_REQUIREMENT_SCALING_RATE: f64 = 0.05;

// Revive effects never leave a hero below this HP
pub const REVIVE_MIN_HP: u32 = 1;

// Wipe handling defaults
pub const LOSE_GOLD_ON_WIPE: bool = false;

// Save format
pub const SAVE_VERSION_MAGIC: u64 = 0x44454C5645535630; // "DELVESV0" in hex
pub const SAVE_FILE_NAME: &str = "party.dat";
