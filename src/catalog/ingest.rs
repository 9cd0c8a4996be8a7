//! Character catalog ingestion.
//!
//! Turns raw character rows (as scraped from the upstream character list)
//! into `CharacterRecord`s. Fetching the list and downloading portraits
//! happen elsewhere; portrait availability reaches this module through the
//! `PortraitSource` trait, and each row ends up as an explicit
//! `ItemOutcome` instead of a swallowed failure.

use std::path::Path;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::definition::{NameKey, PositionAffinity};
use super::record::CharacterRecord;
use crate::core::{DataPaths, Result};

/// One unparsed row of the upstream character list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCharacterRow {
    /// Portrait alt text, usually `"<name>.png"`.
    pub image_alt: String,
    /// Portrait URL.
    pub image_src: String,
    pub cost: String,
    /// Bond names separated by commas, full-width commas or spaces.
    pub bonds: String,
    /// `前`, `后` or `前后`.
    pub position: String,
}

/// Result of making a portrait available locally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PortraitStatus {
    /// Already on disk.
    Cached,
    /// Downloaded now.
    Fetched,
    /// Could not be obtained.
    Failed(String),
}

/// Provides character portraits during ingestion.
pub trait PortraitSource {
    /// Make the portrait for `name` available, fetching from `url` if needed.
    fn ensure_portrait(&mut self, name: &str, url: &str) -> PortraitStatus;
}

/// Why a row was not ingested.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    BlankName,
    DuplicateName(String),
    MissingImage(String),
    PortraitFailed { name: String, reason: String },
}

/// Per-row ingestion result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemOutcome<T> {
    Accepted(T),
    Skipped(SkipReason),
}

/// Ingestion progress, reported once before and once after each row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IngestProgress {
    pub percent: u8,
    pub message: String,
}

/// Aggregated result of an ingestion run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Accepted records in row order.
    pub records: Vec<CharacterRecord>,
    /// Skipped rows as `(row index, reason)`.
    pub skipped: Vec<(usize, SkipReason)>,
}

impl IngestReport {
    /// Pretty JSON for `character.json`.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }

    /// Write `character.json` under `paths`, creating the data directory.
    pub fn write_to(&self, paths: &DataPaths) -> Result<()> {
        std::fs::create_dir_all(&paths.root)?;
        std::fs::write(paths.character_json(), self.to_json()?)?;
        Ok(())
    }
}

/// Decode the position text. Anything unrecognized reads as front.
#[must_use]
pub fn parse_position(raw: &str) -> PositionAffinity {
    match raw.trim() {
        "后" => PositionAffinity::Back,
        "前后" => PositionAffinity::Either,
        _ => PositionAffinity::Front,
    }
}

/// Split the bond text on commas, full-width commas and spaces.
#[must_use]
pub fn parse_bonds(raw: &str) -> Vec<String> {
    raw.split([',', '，', ' '])
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse an integer, falling back to `default`.
#[must_use]
pub fn parse_int_or(raw: &str, default: i64) -> i64 {
    raw.trim().parse().unwrap_or(default)
}

/// Rounded percentage of `current` out of `total`, clamped to 0..=100.
#[must_use]
pub fn progress_percent(current: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let percent = (current as f64 * 100.0 / total as f64).round();
    percent.clamp(0.0, 100.0) as u8
}

/// Character name from portrait alt text: trimmed, extension removed.
fn name_from_alt(alt: &str) -> String {
    let alt = alt.trim();
    Path::new(alt)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(alt)
        .to_string()
}

/// Character ingestion over a stream of raw rows.
pub struct CharacterIngest<'a, P: PortraitSource> {
    portraits: &'a mut P,
    /// Portrait path prefix written into records.
    asset_prefix: String,
    seen: FxHashSet<NameKey>,
}

impl<'a, P: PortraitSource> CharacterIngest<'a, P> {
    /// Create an ingest writing portrait paths under `Assets/character`.
    pub fn new(portraits: &'a mut P) -> Self {
        Self {
            portraits,
            asset_prefix: "Assets/character".to_string(),
            seen: FxHashSet::default(),
        }
    }

    /// Override the portrait path prefix.
    #[must_use]
    pub fn with_asset_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.asset_prefix = prefix.into();
        self
    }

    /// Ingest a single row.
    pub fn ingest_row(&mut self, row: &RawCharacterRow) -> ItemOutcome<CharacterRecord> {
        let name = name_from_alt(&row.image_alt);
        if name.trim().is_empty() {
            return ItemOutcome::Skipped(SkipReason::BlankName);
        }
        if !self.seen.insert(NameKey::new(&name)) {
            return ItemOutcome::Skipped(SkipReason::DuplicateName(name));
        }
        if row.image_src.trim().is_empty() {
            return ItemOutcome::Skipped(SkipReason::MissingImage(name));
        }

        if let PortraitStatus::Failed(reason) =
            self.portraits.ensure_portrait(&name, row.image_src.trim())
        {
            return ItemOutcome::Skipped(SkipReason::PortraitFailed { name, reason });
        }

        ItemOutcome::Accepted(CharacterRecord {
            cost: Some(parse_int_or(&row.cost, 0)),
            bonds: Some(parse_bonds(&row.bonds)),
            position: Some(parse_position(&row.position).code()),
            file: Some(format!("{}/{}.png", self.asset_prefix, name)),
            name: Some(name),
        })
    }

    /// Ingest every row, reporting progress along the way.
    pub fn run<F>(mut self, rows: &[RawCharacterRow], mut progress: F) -> IngestReport
    where
        F: FnMut(IngestProgress),
    {
        let total = rows.len();
        let mut report = IngestReport::default();

        for (i, row) in rows.iter().enumerate() {
            progress(IngestProgress {
                percent: progress_percent(i, total),
                message: format!("Processing character ({}/{})", i + 1, total),
            });

            match self.ingest_row(row) {
                ItemOutcome::Accepted(record) => {
                    progress(IngestProgress {
                        percent: progress_percent(i + 1, total),
                        message: format!(
                            "Processed {} ({}/{})",
                            record.name.as_deref().unwrap_or_default(),
                            i + 1,
                            total
                        ),
                    });
                    report.records.push(record);
                }
                ItemOutcome::Skipped(reason) => {
                    debug!(row = i, ?reason, "character row skipped");
                    report.skipped.push((i, reason));
                }
            }
        }

        progress(IngestProgress {
            percent: 100,
            message: "Character data update complete".to_string(),
        });
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Portrait source that fails for a fixed set of names.
    struct StubPortraits {
        failing: Vec<&'static str>,
        requested: Vec<String>,
    }

    impl PortraitSource for StubPortraits {
        fn ensure_portrait(&mut self, name: &str, _url: &str) -> PortraitStatus {
            self.requested.push(name.to_string());
            if self.failing.contains(&name) {
                PortraitStatus::Failed("404".to_string())
            } else {
                PortraitStatus::Fetched
            }
        }
    }

    fn row(alt: &str, src: &str, cost: &str, bonds: &str, position: &str) -> RawCharacterRow {
        RawCharacterRow {
            image_alt: alt.to_string(),
            image_src: src.to_string(),
            cost: cost.to_string(),
            bonds: bonds.to_string(),
            position: position.to_string(),
        }
    }

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("前"), PositionAffinity::Front);
        assert_eq!(parse_position(" 后 "), PositionAffinity::Back);
        assert_eq!(parse_position("前后"), PositionAffinity::Either);
        assert_eq!(parse_position("?"), PositionAffinity::Front);
    }

    #[test]
    fn test_parse_bonds_separators() {
        assert_eq!(parse_bonds("A，B C,,D"), vec!["A", "B", "C", "D"]);
        assert!(parse_bonds("  ").is_empty());
    }

    #[test]
    fn test_parse_int_or() {
        assert_eq!(parse_int_or("4", 0), 4);
        assert_eq!(parse_int_or("x", 0), 0);
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(0, 0), 0);
        assert_eq!(progress_percent(1, 3), 33);
        assert_eq!(progress_percent(2, 3), 67);
        assert_eq!(progress_percent(5, 3), 100);
    }

    #[test]
    fn test_accepted_row() {
        let mut portraits = StubPortraits { failing: vec![], requested: vec![] };
        let mut ingest = CharacterIngest::new(&mut portraits);

        let outcome = ingest.ingest_row(&row("Kafka.png", "/img/k.png", "5", "A，B", "后"));
        let ItemOutcome::Accepted(record) = outcome else {
            panic!("expected accepted row");
        };
        assert_eq!(record.name.as_deref(), Some("Kafka"));
        assert_eq!(record.cost, Some(5));
        assert_eq!(record.bonds, Some(vec!["A".to_string(), "B".to_string()]));
        assert_eq!(record.position, Some(1));
        assert_eq!(record.file.as_deref(), Some("Assets/character/Kafka.png"));
    }

    #[test]
    fn test_skips_are_explicit() {
        let mut portraits = StubPortraits { failing: vec!["Bad"], requested: vec![] };
        let rows = vec![
            row("  ", "/a", "1", "", ""),
            row("Good.png", "/g", "1", "X", "前"),
            row("good.png", "/g2", "1", "X", "前"),
            row("NoImg.png", "", "1", "X", "前"),
            row("Bad.png", "/b", "1", "X", "前"),
        ];

        let report = CharacterIngest::new(&mut portraits).run(&rows, |_| {});

        assert_eq!(report.records.len(), 1);
        assert_eq!(
            report.skipped,
            vec![
                (0, SkipReason::BlankName),
                (2, SkipReason::DuplicateName("good".to_string())),
                (3, SkipReason::MissingImage("NoImg".to_string())),
                (
                    4,
                    SkipReason::PortraitFailed {
                        name: "Bad".to_string(),
                        reason: "404".to_string()
                    }
                ),
            ]
        );
        assert_eq!(portraits.requested, vec!["Good", "Bad"]);
    }

    #[test]
    fn test_progress_ends_at_100() {
        let mut portraits = StubPortraits { failing: vec![], requested: vec![] };
        let rows = vec![row("A.png", "/a", "1", "X", "前")];
        let mut seen = Vec::new();

        CharacterIngest::new(&mut portraits).run(&rows, |p| seen.push(p.percent));

        assert_eq!(seen, vec![0, 100, 100]);
    }

    #[test]
    fn test_report_json_loads_back() {
        let mut portraits = StubPortraits { failing: vec![], requested: vec![] };
        let rows = vec![row("A.png", "/a", "2", "X Y", "前后")];
        let report = CharacterIngest::new(&mut portraits).run(&rows, |_| {});

        let json = report.to_json().unwrap();
        let records: Vec<CharacterRecord> = serde_json::from_str(&json).unwrap();
        let def = records[0].to_definition().unwrap();
        assert_eq!(def.position, PositionAffinity::Either);
        assert_eq!(def.bonds.len(), 2);
    }

    #[test]
    fn test_write_to() {
        let dir = tempfile::tempdir().unwrap();
        let paths = DataPaths::new(dir.path().join("data"));
        IngestReport::default().write_to(&paths).unwrap();
        assert_eq!(std::fs::read_to_string(paths.character_json()).unwrap(), "[]");
    }
}
