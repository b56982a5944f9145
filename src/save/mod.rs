use crate::core::constants::{SAVE_FILE_NAME, SAVE_VERSION_MAGIC};
use crate::party::types::Party;
use chrono::Utc;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::info;

/// A full run snapshot. The engine treats persistence as an atomic
/// boundary: the whole party state goes in and comes out together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveData {
    pub party: Party,
    pub saved_at: i64,
}

/// Saves and loads run snapshots in a checksummed binary format.
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Uses the platform config directory for the save file.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "delve").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "could not determine config directory")
        })?;
        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;
        Ok(Self {
            save_path: config_dir.join(SAVE_FILE_NAME),
        })
    }

    /// Uses an explicit path instead of the platform default.
    pub fn with_path(save_path: PathBuf) -> Self {
        Self { save_path }
    }

    /// Saves a snapshot of the party, stamped with the current time.
    ///
    /// File format:
    /// - Version magic (8 bytes)
    /// - Data length (4 bytes)
    /// - Serialized snapshot (variable length)
    /// - SHA256 checksum (32 bytes)
    pub fn save(&self, party: &Party) -> io::Result<()> {
        let snapshot = SaveData {
            party: party.clone(),
            saved_at: Utc::now().timestamp(),
        };
        let data = bincode::serialize(&snapshot)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let data_len = data.len() as u32;

        // Checksum covers version + length + data
        let mut hasher = Sha256::new();
        hasher.update(SAVE_VERSION_MAGIC.to_le_bytes());
        hasher.update(data_len.to_le_bytes());
        hasher.update(&data);
        let checksum = hasher.finalize();

        let mut file = fs::File::create(&self.save_path)?;
        file.write_all(&SAVE_VERSION_MAGIC.to_le_bytes())?;
        file.write_all(&data_len.to_le_bytes())?;
        file.write_all(&data)?;
        file.write_all(&checksum)?;

        info!(path = %self.save_path.display(), depth = party.depth, "saved run snapshot");
        Ok(())
    }

    /// Loads a snapshot, verifying the version magic and checksum.
    pub fn load(&self) -> io::Result<SaveData> {
        let mut file = fs::File::open(&self.save_path)?;

        let mut version_bytes = [0u8; 8];
        file.read_exact(&mut version_bytes)?;
        let version = u64::from_le_bytes(version_bytes);
        if version != SAVE_VERSION_MAGIC {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "invalid save version: expected 0x{:016X}, got 0x{:016X}",
                    SAVE_VERSION_MAGIC, version
                ),
            ));
        }

        let mut length_bytes = [0u8; 4];
        file.read_exact(&mut length_bytes)?;
        let data_len = u32::from_le_bytes(length_bytes);

        let mut data = vec![0u8; data_len as usize];
        file.read_exact(&mut data)?;

        let mut stored_checksum = [0u8; 32];
        file.read_exact(&mut stored_checksum)?;

        let mut hasher = Sha256::new();
        hasher.update(version_bytes);
        hasher.update(length_bytes);
        hasher.update(&data);
        let computed_checksum = hasher.finalize();
        if stored_checksum != computed_checksum.as_slice() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "checksum verification failed",
            ));
        }

        let snapshot: SaveData = bincode::deserialize(&data)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        info!(path = %self.save_path.display(), depth = snapshot.party.depth, "loaded run snapshot");
        Ok(snapshot)
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }

    pub fn delete(&self) -> io::Result<()> {
        fs::remove_file(&self.save_path)
    }
}
