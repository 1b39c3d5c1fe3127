//! Hardpoint accounting for omnipods.
//!
//! Hardpoints are not quirks in the API, but the tables show them in the
//! same cell as one synthetic "HARDPOINTS" entry summarising the pod's
//! weapon mounts. The summary is colour-tagged shorthand ("2E, 1B"), built
//! here so the quirk matrix never has to know about weapon types.

use crate::api::records::RawHardpoint;
use crate::core::error::{QuirkError, Result};
use crate::mech::quirk::{Quirk, RawValue};

/// Name of the synthetic quirk carrying the hardpoint summary. It must
/// never take part in shared-quirk detection (the value embeds markup and
/// is pod-specific by definition).
pub const HARDPOINTS_QUIRK: &str = "HARDPOINTS";

/// Weapon hardpoint categories, in the fixed order they appear in the
/// summary string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HardpointKind {
    Beam,
    Missile,
    Ballistic,
    Ams,
    Ecm,
}

impl HardpointKind {
    pub fn all() -> [HardpointKind; 5] {
        [
            HardpointKind::Beam,
            HardpointKind::Missile,
            HardpointKind::Ballistic,
            HardpointKind::Ams,
            HardpointKind::Ecm,
        ]
    }

    /// Parse the API's type string. The feed spells missile "missle";
    /// accept both.
    pub fn parse(raw: &str) -> Result<HardpointKind> {
        match raw.to_ascii_lowercase().as_str() {
            "beam" => Ok(HardpointKind::Beam),
            "missle" | "missile" => Ok(HardpointKind::Missile),
            "ballistic" => Ok(HardpointKind::Ballistic),
            "ams" => Ok(HardpointKind::Ams),
            "ecm" => Ok(HardpointKind::Ecm),
            other => Err(QuirkError::UnknownHardpoint(other.into())),
        }
    }

    /// One-letter (or acronym) shorthand used in table cells.
    fn shortcode(&self) -> &'static str {
        match self {
            HardpointKind::Beam => "E",
            HardpointKind::Missile => "M",
            HardpointKind::Ballistic => "B",
            HardpointKind::Ams => "AMS",
            HardpointKind::Ecm => "ECM",
        }
    }

    /// Colour the shorthand is tagged with in the rendered table.
    fn color(&self) -> &'static str {
        match self {
            HardpointKind::Beam => "orange",
            HardpointKind::Missile => "teal",
            HardpointKind::Ballistic => "purple",
            HardpointKind::Ams => "red",
            HardpointKind::Ecm => "green",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// Per-kind hardpoint totals for one omnipod.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HardpointCounts {
    counts: [u32; 5],
}

impl HardpointCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate raw hardpoint entries from one pod sub-assembly.
    pub fn accumulate(&mut self, entries: &[RawHardpoint]) -> Result<()> {
        for entry in entries {
            let kind = HardpointKind::parse(&entry.kind)?;
            self.counts[kind.index()] += entry.count()?;
        }
        Ok(())
    }

    pub fn get(&self, kind: HardpointKind) -> u32 {
        self.counts[kind.index()]
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Fold the totals into the synthetic HARDPOINTS quirk, or `None` when
    /// the pod mounts nothing. Each present kind renders as
    /// `<font color="...">{count}{code}</font>` in fixed kind order.
    pub fn to_quirk(&self) -> Result<Option<Quirk>> {
        if self.is_empty() {
            return Ok(None);
        }
        let summary = HardpointKind::all()
            .iter()
            .filter(|kind| self.get(**kind) > 0)
            .map(|kind| {
                format!(
                    "<font color=\"{}\">{}{}</font>",
                    kind.color(),
                    self.get(*kind),
                    kind.shortcode()
                )
            })
            .collect::<Vec<_>>()
            .join(", ");
        // HARDPOINTS carries the non-percent HARDPOINT keyword, so the
        // constructor keeps the summary verbatim.
        Quirk::new(HARDPOINTS_QUIRK, RawValue::Text(summary)).map(Some)
    }
}
