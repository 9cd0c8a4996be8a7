//! Board and data-location configuration.
//!
//! - `BoardConfig`: slot count, row split, equipment capacity and the
//!   well-known icon names the catalog resolves.
//! - `DataPaths`: where the four catalog files and character art live.
//!
//! The engine never hardcodes the layout; the defaults below describe the
//! standard 13-slot board.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::layout::{Row, SlotIndex};

/// Board configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Total number of board slots.
    pub slot_count: u8,

    /// Number of slots in the front row. Slots `0..front_row_len` are
    /// front, the rest are back.
    pub front_row_len: u8,

    /// Maximum items a single unit may carry.
    pub max_equipment: usize,

    /// Icon name of the equipment-clearing tool.
    pub clear_tool_icon: String,

    /// Icon name of the front-row position badge.
    pub front_icon: String,

    /// Icon name of the back-row position badge.
    pub back_icon: String,

    /// Icon name of the either-row position badge.
    pub either_icon: String,

    /// Transfer records kept in the session history. Oldest records are
    /// dropped first.
    pub history_limit: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            slot_count: 13,
            front_row_len: 6,
            max_equipment: 3,
            clear_tool_icon: "精密拆装扳手".to_string(),
            front_icon: "前台".to_string(),
            back_icon: "后台".to_string(),
            either_icon: "前后台".to_string(),
            history_limit: 512,
        }
    }
}

impl BoardConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set slot count and front row length.
    ///
    /// Panics if the front row is longer than the board.
    #[must_use]
    pub fn with_layout(mut self, slot_count: u8, front_row_len: u8) -> Self {
        assert!(
            front_row_len <= slot_count,
            "Front row cannot exceed slot count"
        );
        self.slot_count = slot_count;
        self.front_row_len = front_row_len;
        self
    }

    /// Set the per-unit equipment capacity.
    #[must_use]
    pub fn with_max_equipment(mut self, max: usize) -> Self {
        self.max_equipment = max;
        self
    }

    /// Set how many transfer records the history keeps.
    #[must_use]
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Set the icon name of the clear tool.
    #[must_use]
    pub fn with_clear_tool_icon(mut self, name: impl Into<String>) -> Self {
        self.clear_tool_icon = name.into();
        self
    }

    /// Row of a slot, or `None` when the slot is off the board.
    #[must_use]
    pub fn row_of(&self, slot: SlotIndex) -> Option<Row> {
        if slot.0 >= self.slot_count {
            None
        } else if slot.0 < self.front_row_len {
            Some(Row::Front)
        } else {
            Some(Row::Back)
        }
    }

    /// Iterate over every slot on the board.
    pub fn slots(&self) -> impl Iterator<Item = SlotIndex> {
        (0..self.slot_count).map(SlotIndex)
    }
}

/// Locations of the catalog files.
///
/// Mirrors the layout shipped with the data: four JSON files at the root
/// and character portraits under `Assets/character`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataPaths {
    /// Directory holding the catalog files.
    pub root: PathBuf,
    pub character_file: String,
    pub equipment_file: String,
    pub bonds_file: String,
    pub others_file: String,
    /// Character portrait directory, relative to `root`.
    pub character_assets: PathBuf,
}

impl DataPaths {
    /// Paths rooted at `root` with the standard file names.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            character_file: "character.json".to_string(),
            equipment_file: "equipment.json".to_string(),
            bonds_file: "bonds.json".to_string(),
            others_file: "others.json".to_string(),
            character_assets: PathBuf::from("Assets").join("character"),
        }
    }

    /// Resolve the data root by walking up from `start` until a directory
    /// containing `marker` is found. Falls back to `start`.
    ///
    /// ```
    /// use bond_board::core::DataPaths;
    ///
    /// let dir = std::env::temp_dir();
    /// let paths = DataPaths::discover(&dir, "no-such-marker-file.toml");
    /// assert_eq!(paths.root, dir);
    /// ```
    pub fn discover(start: &Path, marker: &str) -> Self {
        let root = start
            .ancestors()
            .find(|dir| dir.join(marker).is_file())
            .unwrap_or(start);
        Self::new(root)
    }

    #[must_use]
    pub fn character_json(&self) -> PathBuf {
        self.root.join(&self.character_file)
    }

    #[must_use]
    pub fn equipment_json(&self) -> PathBuf {
        self.root.join(&self.equipment_file)
    }

    #[must_use]
    pub fn bonds_json(&self) -> PathBuf {
        self.root.join(&self.bonds_file)
    }

    #[must_use]
    pub fn others_json(&self) -> PathBuf {
        self.root.join(&self.others_file)
    }

    /// Absolute character portrait directory.
    #[must_use]
    pub fn character_assets_dir(&self) -> PathBuf {
        self.root.join(&self.character_assets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let config = BoardConfig::default();
        assert_eq!(config.slot_count, 13);
        assert_eq!(config.max_equipment, 3);
        assert_eq!(config.slots().count(), 13);
        assert_eq!(config.history_limit, 512);
    }

    #[test]
    fn test_with_history_limit() {
        let config = BoardConfig::default().with_history_limit(8);
        assert_eq!(config.history_limit, 8);
        assert_eq!(config.slot_count, 13);
    }

    #[test]
    fn test_row_of() {
        let config = BoardConfig::default();
        assert_eq!(config.row_of(SlotIndex(0)), Some(Row::Front));
        assert_eq!(config.row_of(SlotIndex(5)), Some(Row::Front));
        assert_eq!(config.row_of(SlotIndex(6)), Some(Row::Back));
        assert_eq!(config.row_of(SlotIndex(12)), Some(Row::Back));
        assert_eq!(config.row_of(SlotIndex(13)), None);
    }

    #[test]
    fn test_builder() {
        let config = BoardConfig::new()
            .with_layout(4, 2)
            .with_max_equipment(1)
            .with_clear_tool_icon("wrench");

        assert_eq!(config.slot_count, 4);
        assert_eq!(config.row_of(SlotIndex(2)), Some(Row::Back));
        assert_eq!(config.max_equipment, 1);
        assert_eq!(config.clear_tool_icon, "wrench");
    }

    #[test]
    #[should_panic(expected = "Front row cannot exceed slot count")]
    fn test_invalid_layout() {
        let _ = BoardConfig::new().with_layout(3, 4);
    }

    #[test]
    fn test_data_paths() {
        let paths = DataPaths::new("/data");
        assert_eq!(paths.character_json(), PathBuf::from("/data/character.json"));
        assert_eq!(paths.others_json(), PathBuf::from("/data/others.json"));
        assert_eq!(
            paths.character_assets_dir(),
            PathBuf::from("/data/Assets/character")
        );
    }

    #[test]
    fn test_discover_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("board.toml"), "").unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let paths = DataPaths::discover(&nested, "board.toml");
        assert_eq!(paths.root, dir.path());
    }
}
