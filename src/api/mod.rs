//! Data source: raw record types, the HTTP client, and mech-list
//! classification.

pub mod client;
pub mod records;

pub use client::{SmurfyClient, DEFAULT_BASE_URL};

use records::RawMech;
use std::collections::BTreeMap;

/// Clan mechs whose names carry one of these are battlemechs anyway
/// (IIC refits and the Kodiak line have fixed loadouts).
const BATTLEMECH_INDICATORS: [&str; 3] = ["iic", "kodiak", "spirit bear"];

/// Champion mechs are duplicates of an existing variant.
pub fn is_champion_duplicate(mech: &RawMech) -> bool {
    mech.translated_name.to_lowercase().contains("(c)")
}

/// Omnimechs are the Clan mechs without a battlemech indicator in the
/// name. Their tables are built from the omnipods endpoint instead.
pub fn is_omnimech(mech: &RawMech) -> bool {
    let name = mech.translated_name.to_lowercase();
    mech.faction == "Clan" && !BATTLEMECH_INDICATORS.iter().any(|ind| name.contains(ind))
}

/// Filter the raw mech list down to battlemech variants and group them by
/// chassis family, sorted by family name.
pub fn battlemech_families(
    mechs: impl IntoIterator<Item = RawMech>,
) -> BTreeMap<String, Vec<RawMech>> {
    let mut families: BTreeMap<String, Vec<RawMech>> = BTreeMap::new();
    for mech in mechs {
        if is_champion_duplicate(&mech) || is_omnimech(&mech) {
            continue;
        }
        families.entry(mech.family.clone()).or_default().push(mech);
    }
    families
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mech(name: &str, faction: &str, family: &str) -> RawMech {
        serde_json::from_value(json!({
            "translated_name": name,
            "faction": faction,
            "family": family
        }))
        .unwrap()
    }

    #[test]
    fn test_clan_mech_is_omnimech() {
        assert!(is_omnimech(&mech("Timber Wolf TBR-PRIME", "Clan", "timber wolf")));
    }

    #[test]
    fn test_iic_refit_is_battlemech() {
        assert!(!is_omnimech(&mech("Jenner IIC JR7-IIC", "Clan", "jenner iic")));
        assert!(!is_omnimech(&mech("Kodiak KDK-3", "Clan", "kodiak")));
    }

    #[test]
    fn test_inner_sphere_mech_is_battlemech() {
        assert!(!is_omnimech(&mech("Atlas AS7-D", "InnerSphere", "atlas")));
    }

    #[test]
    fn test_champion_duplicates_dropped_from_families() {
        let mechs = vec![
            mech("Atlas AS7-D", "InnerSphere", "atlas"),
            mech("Atlas AS7-D (C)", "InnerSphere", "atlas"),
            mech("Timber Wolf TBR-PRIME", "Clan", "timber wolf"),
        ];
        let families = battlemech_families(mechs);
        assert_eq!(families.len(), 1);
        assert_eq!(families["atlas"].len(), 1);
    }
}
