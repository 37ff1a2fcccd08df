use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use controls::{ParamState, PresetBank};
use serde::{Deserialize, Serialize};

/// On-disk form of the preset bank: slot digit (as a string key) to full
/// parameter snapshot, momenta included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetFile {
    pub version: u32,
    #[serde(default)]
    pub slots: BTreeMap<String, ParamState>,
}

impl Default for PresetFile {
    fn default() -> Self {
        Self {
            version: 1,
            slots: BTreeMap::new(),
        }
    }
}

impl PresetFile {
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("failed to read preset file at {}", path.display()))?;
            let file: Self = toml::from_str(&contents)
                .with_context(|| format!("failed to parse preset file at {}", path.display()))?;
            if file.version != 1 {
                bail!(
                    "unsupported preset file version {} at {}",
                    file.version,
                    path.display()
                );
            }
            Ok(file)
        } else {
            Ok(Self::default())
        }
    }

    pub fn persist(&self, path: &Path) -> Result<()> {
        let dir = path
            .parent()
            .ok_or_else(|| anyhow::anyhow!("preset path has no parent: {}", path.display()))?;
        fs::create_dir_all(dir).with_context(|| {
            format!(
                "failed to prepare directory for preset file at {}",
                dir.display()
            )
        })?;
        let serialized = toml::to_string_pretty(self)
            .with_context(|| "failed to serialize preset file to TOML".to_string())?;
        fs::write(path, serialized)
            .with_context(|| format!("failed to write preset file to {}", path.display()))?;
        Ok(())
    }

    pub fn into_bank(self) -> Result<PresetBank> {
        let mut bank = PresetBank::new();
        for (raw_slot, state) in self.slots {
            let slot: u8 = match raw_slot.parse() {
                Ok(slot) if slot <= 9 => slot,
                _ => bail!("invalid preset slot '{raw_slot}' (expected a digit 0-9)"),
            };
            bank.store(slot, state);
        }
        Ok(bank)
    }

    pub fn from_bank(bank: &PresetBank) -> Self {
        Self {
            version: 1,
            slots: bank
                .entries()
                .map(|(slot, state)| (slot.to_string(), *state))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_between_file_and_bank() {
        let mut bank = PresetBank::new();
        let mut state = ParamState::default();
        state.zoom = 1.75;
        state.zoom_vel = -0.002;
        bank.store(3, state);
        bank.store(7, ParamState::default());

        let file = PresetFile::from_bank(&bank);
        assert_eq!(file.slots.len(), 2);
        assert!(file.slots.contains_key("3"));

        let back = file.into_bank().unwrap();
        assert_eq!(back, bank);
    }

    #[test]
    fn rejects_out_of_range_slots() {
        let mut file = PresetFile::default();
        file.slots.insert("12".to_string(), ParamState::default());
        assert!(file.into_bank().is_err());

        let mut file = PresetFile::default();
        file.slots.insert("x".to_string(), ParamState::default());
        assert!(file.into_bank().is_err());
    }

    #[test]
    fn round_trips_through_toml() {
        let mut bank = PresetBank::new();
        let mut state = ParamState::default();
        state.rotation = 2.5;
        state.position.x = -0.25;
        bank.store(0, state);

        let file = PresetFile::from_bank(&bank);
        let serialized = toml::to_string_pretty(&file).unwrap();
        let parsed: PresetFile = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed, file);
    }
}
