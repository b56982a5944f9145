use crate::content::registry::ContentRegistry;
use crate::core::error::EngineError;
use crate::events::types::{Ability, DungeonEvent};
use crate::items::rarity::RarityTable;
use crate::items::types::ItemTemplate;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// On-disk shape of a content file. The rarity table deserializes through
/// its validating constructor, so a malformed table fails at parse time
/// with the same error the constructor would give.
#[derive(Debug, Deserialize)]
pub struct ContentPack {
    pub rarity_table: RarityTable,
    #[serde(default)]
    pub item_templates: Vec<ItemTemplate>,
    #[serde(default)]
    pub events: Vec<DungeonEvent>,
    #[serde(default)]
    pub abilities: Vec<Ability>,
}

/// Parses and validates a JSON content document.
pub fn load_str(json: &str) -> Result<ContentRegistry, EngineError> {
    let pack: ContentPack = serde_json::from_str(json)
        .map_err(|err| EngineError::configuration(format!("content file: {err}")))?;
    ContentRegistry::new(
        pack.rarity_table,
        pack.item_templates,
        pack.events,
        pack.abilities,
    )
}

pub fn load_file(path: &Path) -> Result<ContentRegistry, EngineError> {
    info!(path = %path.display(), "loading content file");
    let json = fs::read_to_string(path).map_err(|err| {
        EngineError::configuration(format!("reading {}: {err}", path.display()))
    })?;
    load_str(&json)
}
