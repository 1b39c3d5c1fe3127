//! Battlemech chassis: fixed components, quirks vary per variant.
//!
//! The table has a single quirk column, so the reduction runs across
//! variants only (1-D).

use crate::api::records::RawMech;
use crate::core::error::Result;
use crate::matrix::{shared_quirks, to_string_matrix, Cell, SHARED_LABEL};
use crate::mech::quirk::Quirk;
use crate::mech::QuirkTable;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// One battlemech family and its finished comparison table.
#[derive(Debug, Clone)]
pub struct Battlemech {
    name: String,
    matrix: Vec<Vec<String>>,
}

impl Battlemech {
    /// Build a chassis table from the family name and its variant records.
    pub fn new(family: &str, variants: &[RawMech]) -> Result<Battlemech> {
        let name = family.to_uppercase();

        let mut quirk_map: BTreeMap<String, Vec<Quirk>> = BTreeMap::new();
        for raw in variants {
            let mut quirks = raw
                .details
                .quirks
                .iter()
                .map(|q| Quirk::new(q.translated_name.clone(), q.value.clone()))
                .collect::<Result<Vec<_>>>()?;
            quirks.sort();
            quirk_map.insert(raw.translated_name.clone(), quirks);
        }

        let matrix = Self::build_matrix(&name, quirk_map);
        Ok(Battlemech { name, matrix })
    }

    /// Promote quirks common to every variant into the SHARED row and strip
    /// them from each variant's cell. Rows come out sorted by variant name.
    fn build_matrix(name: &str, quirk_map: BTreeMap<String, Vec<Quirk>>) -> Vec<Vec<String>> {
        let lists: Vec<&[Quirk]> = quirk_map.values().map(|v| v.as_slice()).collect();
        let shared = shared_quirks(&lists);

        let mut rows: Vec<Vec<Cell>> = quirk_map
            .into_iter()
            .map(|(variant, quirks)| {
                vec![
                    Cell::text(variant),
                    Cell::Quirks(remove_shared_once(quirks, &shared)),
                ]
            })
            .collect();
        rows.push(vec![Cell::text(SHARED_LABEL), Cell::Quirks(shared)]);

        let mut matrix = to_string_matrix(rows);
        matrix.insert(0, vec![name.to_string(), "Quirks".to_string()]);
        matrix
    }
}

/// Remove the first occurrence of each shared quirk from the list. A
/// variant carrying the same quirk twice keeps the extra copy.
fn remove_shared_once(mut quirks: Vec<Quirk>, shared: &[Quirk]) -> Vec<Quirk> {
    for s in shared {
        if let Some(pos) = quirks.iter().position(|q| q == s) {
            quirks.remove(pos);
        }
    }
    quirks
}

impl QuirkTable for Battlemech {
    fn name(&self) -> &str {
        &self.name
    }

    fn matrix(&self) -> &[Vec<String>] {
        &self.matrix
    }
}

impl PartialEq for Battlemech {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Battlemech {}

impl Ord for Battlemech {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl PartialOrd for Battlemech {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn variant(name: &str, quirks: serde_json::Value) -> RawMech {
        serde_json::from_value(json!({
            "translated_name": name,
            "faction": "InnerSphere",
            "family": "atlas",
            "details": {"quirks": quirks}
        }))
        .unwrap()
    }

    #[test]
    fn test_shared_quirks_promoted_to_shared_row() {
        let variants = vec![
            variant("AS7-D", json!([
                {"translated_name": "ARMOR_BONUS", "value": "10"},
                {"translated_name": "TORSO_SPEED", "value": "0.1"}
            ])),
            variant("AS7-K", json!([
                {"translated_name": "ARMOR_BONUS", "value": "10"}
            ])),
        ];
        let mech = Battlemech::new("atlas", &variants).unwrap();
        let matrix = mech.matrix();

        assert_eq!(matrix[0], vec!["ATLAS".to_string(), "Quirks".to_string()]);
        // Rows sorted by variant, shared row last.
        assert_eq!(matrix[1][0], "AS7-D");
        assert_eq!(matrix[1][1], "TORSO_SPEED: 10%");
        assert_eq!(matrix[2][0], "AS7-K");
        assert_eq!(matrix[2][1], "--");
        assert_eq!(matrix[3][0], "SHARED");
        assert_eq!(matrix[3][1], "ARMOR_BONUS: 10");
    }

    #[test]
    fn test_no_common_quirks_empty_shared_row() {
        let variants = vec![
            variant("HBK-4G", json!([{"translated_name": "BALLISTIC_COOLDOWN", "value": "0.1"}])),
            variant("HBK-4P", json!([{"translated_name": "ENERGY_COOLDOWN", "value": "0.1"}])),
        ];
        let mech = Battlemech::new("hunchback", &variants).unwrap();
        let matrix = mech.matrix();
        assert_eq!(matrix[3][0], "SHARED");
        assert_eq!(matrix[3][1], "--");
    }

    #[test]
    fn test_duplicate_shared_quirk_removed_once_per_variant() {
        let variants = vec![
            variant("X-1", json!([
                {"translated_name": "ARMOR_BONUS", "value": "10"},
                {"translated_name": "ARMOR_BONUS", "value": "10"}
            ])),
            variant("X-2", json!([
                {"translated_name": "ARMOR_BONUS", "value": "10"}
            ])),
        ];
        let mech = Battlemech::new("marauder", &variants).unwrap();
        let matrix = mech.matrix();
        // X-1 keeps its second copy, X-2 is emptied.
        assert_eq!(matrix[1][1], "ARMOR_BONUS: 10");
        assert_eq!(matrix[2][1], "--");
        assert_eq!(matrix[3][1], "ARMOR_BONUS: 10");
    }

    #[test]
    fn test_mechs_sort_by_name() {
        let a = Battlemech::new("atlas", &[]).unwrap();
        let b = Battlemech::new("banshee", &[]).unwrap();
        assert!(a < b);
    }
}
