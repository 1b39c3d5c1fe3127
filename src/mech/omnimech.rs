//! Omnimech chassis: quirks vary per variant *and* per component.
//!
//! The table is a full variant × component grid, so shared detection runs
//! once per component column. Columns are independent; hardpoints and
//! quirks are component-scoped, and comparing across components would be
//! meaningless.

use crate::api::records::RawOmnipod;
use crate::core::error::{QuirkError, Result};
use crate::matrix::{shared_quirks, to_string_matrix, Cell, SHARED_LABEL};
use crate::mech::component::Component;
use crate::mech::hardpoints::HARDPOINTS_QUIRK;
use crate::mech::omnipod::Omnipod;
use crate::mech::quirk::Quirk;
use crate::mech::QuirkTable;
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

/// One omnimech chassis and its finished comparison table.
#[derive(Debug, Clone)]
pub struct Omnimech {
    name: String,
    matrix: Vec<Vec<String>>,
}

impl Omnimech {
    /// Build a chassis table from the raw pod records of one chassis.
    pub fn new(chassis: &str, records: &HashMap<String, RawOmnipod>) -> Result<Omnimech> {
        let name = chassis.to_uppercase();
        let pods = records
            .values()
            .map(Omnipod::from_record)
            .collect::<Result<Vec<_>>>()?;
        let matrix = Self::build_matrix(&name, &pods)?;
        Ok(Omnimech { name, matrix })
    }

    fn find_pod<'a>(
        pods: &'a [Omnipod],
        variant: &str,
        component: Component,
    ) -> Result<&'a Omnipod> {
        pods.iter()
            .find(|pod| pod.variant() == variant && pod.component() == component)
            .ok_or_else(|| QuirkError::MissingPod {
                variant: variant.to_string(),
                component: component.to_string(),
            })
    }

    /// Reduce each component column and assemble the string matrix.
    ///
    /// Every (variant, component) pair must resolve to exactly one pod; a
    /// table with holes would be misleading, so a missing pod fails the
    /// whole chassis.
    fn build_matrix(name: &str, pods: &[Omnipod]) -> Result<Vec<Vec<String>>> {
        let variants: BTreeSet<&str> = pods.iter().map(|pod| pod.variant()).collect();

        let mut grid: Vec<Vec<&Omnipod>> = Vec::with_capacity(variants.len());
        for variant in &variants {
            let row = Component::all()
                .iter()
                .map(|component| Self::find_pod(pods, variant, *component))
                .collect::<Result<Vec<_>>>()?;
            grid.push(row);
        }

        let mut cells: Vec<Vec<Vec<Quirk>>> = vec![Vec::new(); grid.len()];
        let mut shared_cells: Vec<Vec<Quirk>> = Vec::new();
        for col in 0..Component::all().len() {
            let column: Vec<&Omnipod> = grid.iter().map(|row| row[col]).collect();

            // The synthetic hardpoint entry is pod-specific formatted
            // markup; it never counts as a shared candidate.
            let candidates: Vec<Vec<Quirk>> = column
                .iter()
                .map(|pod| {
                    pod.quirks()
                        .iter()
                        .filter(|q| !q.name().contains(HARDPOINTS_QUIRK))
                        .cloned()
                        .collect()
                })
                .collect();
            let lists: Vec<&[Quirk]> = candidates.iter().map(|l| l.as_slice()).collect();
            let shared = shared_quirks(&lists);

            for (row, pod) in column.iter().enumerate() {
                let remaining: Vec<Quirk> = pod
                    .quirks()
                    .iter()
                    .filter(|q| !shared.contains(*q))
                    .cloned()
                    .collect();
                cells[row].push(remaining);
            }
            shared_cells.push(shared);
        }

        let mut rows: Vec<Vec<Cell>> = Vec::with_capacity(grid.len() + 1);
        for (variant, row_cells) in variants.iter().zip(cells) {
            let mut row = vec![Cell::text(*variant)];
            row.extend(row_cells.into_iter().map(Cell::Quirks));
            rows.push(row);
        }
        let mut shared_row = vec![Cell::text(SHARED_LABEL)];
        shared_row.extend(shared_cells.into_iter().map(Cell::Quirks));
        rows.push(shared_row);

        let mut matrix = to_string_matrix(rows);
        let mut header = vec![name.to_string()];
        header.extend(Component::all().iter().map(|c| c.to_string()));
        matrix.insert(0, header);
        Ok(matrix)
    }
}

impl QuirkTable for Omnimech {
    fn name(&self) -> &str {
        &self.name
    }

    fn matrix(&self) -> &[Vec<String>] {
        &self.matrix
    }
}

impl PartialEq for Omnimech {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Omnimech {}

impl Ord for Omnimech {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl PartialOrd for Omnimech {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pod(variant: &str, component: &str, quirks: serde_json::Value) -> RawOmnipod {
        serde_json::from_value(json!({
            "configuration": {"name": component, "quirks": quirks},
            "details": {"set": variant}
        }))
        .unwrap()
    }

    fn full_chassis(records: Vec<RawOmnipod>) -> HashMap<String, RawOmnipod> {
        records
            .into_iter()
            .enumerate()
            .map(|(i, r)| (i.to_string(), r))
            .collect()
    }

    fn empty_pods(variant: &str, except: &[&str]) -> Vec<RawOmnipod> {
        ["head", "right_arm", "right_torso", "centre_torso",
         "left_torso", "left_arm", "right_leg", "left_leg"]
            .iter()
            .filter(|c| !except.contains(*c))
            .map(|c| pod(variant, c, json!([])))
            .collect()
    }

    #[test]
    fn test_column_scoped_shared_promotion() {
        let mut records = empty_pods("NVA-A", &["left_arm"]);
        records.extend(empty_pods("NVA-B", &["left_arm", "head"]));
        records.push(pod("NVA-A", "left_arm", json!([
            {"translated_name": "ARM_ANGLE", "value": "5"}
        ])));
        records.push(pod("NVA-B", "left_arm", json!([
            {"translated_name": "ARM_ANGLE", "value": "5"}
        ])));
        records.push(pod("NVA-B", "head", json!([
            {"translated_name": "SENSOR_RANGE", "value": "100"}
        ])));

        let mech = Omnimech::new("nova", &full_chassis(records)).unwrap();
        let matrix = mech.matrix();

        // Header: name then component labels in fixed order.
        assert_eq!(matrix[0][0], "NOVA");
        assert_eq!(matrix[0][1], "Head");
        assert_eq!(matrix[0][6], "Left Arm");

        // ARM_ANGLE is common to both variants' left arms: shared column 6.
        let shared_row = &matrix[3];
        assert_eq!(shared_row[0], "SHARED");
        assert_eq!(shared_row[6], "ARM_ANGLE: 5");

        // SENSOR_RANGE is only on NVA-B's head: stays in the variant cell.
        assert_eq!(matrix[1][0], "NVA-A");
        assert_eq!(matrix[1][1], "--");
        assert_eq!(matrix[2][0], "NVA-B");
        assert_eq!(matrix[2][1], "SENSOR_RANGE: 100");
        assert_eq!(shared_row[1], "--");

        // Promoted quirks are gone from the variant cells.
        assert_eq!(matrix[1][6], "--");
        assert_eq!(matrix[2][6], "--");
    }

    #[test]
    fn test_missing_pod_fails_chassis() {
        // NVA-B has no head pod.
        let mut records = empty_pods("NVA-A", &[]);
        records.extend(empty_pods("NVA-B", &["head"]));
        let err = Omnimech::new("nova", &full_chassis(records));
        assert!(matches!(err, Err(QuirkError::MissingPod { .. })));
    }

    #[test]
    fn test_hardpoints_never_shared() {
        let hp = json!([{"type": "beam", "count": 2}]);
        let mut records = empty_pods("SCR-A", &["right_arm"]);
        records.extend(empty_pods("SCR-B", &["right_arm"]));
        for variant in ["SCR-A", "SCR-B"] {
            records.push(serde_json::from_value(json!({
                "configuration": {"name": "right_arm", "quirks": [], "hardpoints": hp},
                "details": {"set": variant}
            }))
            .unwrap());
        }

        let mech = Omnimech::new("stormcrow", &full_chassis(records)).unwrap();
        let matrix = mech.matrix();

        // Identical summaries on both pods, still not promoted.
        let shared_row = &matrix[3];
        assert_eq!(shared_row[2], "--");
        assert!(matrix[1][2].contains("HARDPOINTS"));
        assert!(matrix[2][2].contains("2E"));
    }

    #[test]
    fn test_reduction_is_idempotent_shape() {
        // All quirks distinct: nothing promoted, cells keep their quirks.
        let mut records = empty_pods("KFX-A", &["head"]);
        records.extend(empty_pods("KFX-B", &["head"]));
        records.push(pod("KFX-A", "head", json!([
            {"translated_name": "X_BONUS", "value": "1"}
        ])));
        records.push(pod("KFX-B", "head", json!([
            {"translated_name": "Y_BONUS", "value": "2"}
        ])));

        let mech = Omnimech::new("kit fox", &full_chassis(records)).unwrap();
        let matrix = mech.matrix();
        assert_eq!(matrix[1][1], "X_BONUS: 1");
        assert_eq!(matrix[2][1], "Y_BONUS: 2");
        assert_eq!(matrix[3][1], "--");
    }
}
