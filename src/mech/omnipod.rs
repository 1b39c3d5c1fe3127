//! Omnipod: one component's quirk set for one variant.

use crate::api::records::RawOmnipod;
use crate::core::error::Result;
use crate::mech::component::Component;
use crate::mech::hardpoints::HardpointCounts;
use crate::mech::quirk::Quirk;

/// The per-component, per-variant quirk bundle of an omnimech.
///
/// Built once from a raw API record; the quirk list is sorted by name and
/// never changes afterwards. Reduction works on copies, not on the pod.
#[derive(Debug, Clone)]
pub struct Omnipod {
    component: Component,
    variant: String,
    quirks: Vec<Quirk>,
}

impl Omnipod {
    /// Build a pod from a raw omnipod record, folding its hardpoint totals
    /// into the quirk list as the synthetic HARDPOINTS entry.
    pub fn from_record(record: &RawOmnipod) -> Result<Omnipod> {
        let component = Component::parse(&record.configuration.name)?;
        let variant = record.details.set.clone();

        let mut quirks = record
            .configuration
            .quirks
            .iter()
            .map(|raw| Quirk::new(raw.translated_name.clone(), raw.value.clone()))
            .collect::<Result<Vec<_>>>()?;

        let mut counts = HardpointCounts::new();
        counts.accumulate(&record.configuration.hardpoints)?;
        counts.accumulate(&record.details.hardpoints)?;
        if let Some(hardpoint_quirk) = counts.to_quirk()? {
            quirks.push(hardpoint_quirk);
        }
        quirks.sort();

        Ok(Omnipod {
            component,
            variant,
            quirks,
        })
    }

    pub fn component(&self) -> Component {
        self.component
    }

    pub fn variant(&self) -> &str {
        &self.variant
    }

    /// Quirks sorted by name, hardpoint summary included.
    pub fn quirks(&self) -> &[Quirk] {
        &self.quirks
    }
}
