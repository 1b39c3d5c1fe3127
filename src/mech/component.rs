//! Mech components (the 8 hit locations an omnipod can occupy).

use crate::core::error::{QuirkError, Result};
use std::fmt;

/// The fixed set of mech components. Declaration order is the column order
/// of every omnimech quirk table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Head,
    RightArm,
    RightTorso,
    CentreTorso,
    LeftTorso,
    LeftArm,
    RightLeg,
    LeftLeg,
}

impl Component {
    /// All components in table column order.
    pub fn all() -> [Component; 8] {
        [
            Component::Head,
            Component::RightArm,
            Component::RightTorso,
            Component::CentreTorso,
            Component::LeftTorso,
            Component::LeftArm,
            Component::RightLeg,
            Component::LeftLeg,
        ]
    }

    /// Parse the snake_case identifier used by the API.
    pub fn parse(id: &str) -> Result<Component> {
        match id {
            "head" => Ok(Component::Head),
            "right_arm" => Ok(Component::RightArm),
            "right_torso" => Ok(Component::RightTorso),
            "centre_torso" => Ok(Component::CentreTorso),
            "left_torso" => Ok(Component::LeftTorso),
            "left_arm" => Ok(Component::LeftArm),
            "right_leg" => Ok(Component::RightLeg),
            "left_leg" => Ok(Component::LeftLeg),
            other => Err(QuirkError::UnknownComponent(other.into())),
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The API spells it "centre_torso" but tables have always shown
        // the US spelling.
        let label = match self {
            Component::Head => "Head",
            Component::RightArm => "Right Arm",
            Component::RightTorso => "Right Torso",
            Component::CentreTorso => "Center Torso",
            Component::LeftTorso => "Left Torso",
            Component::LeftArm => "Left Arm",
            Component::RightLeg => "Right Leg",
            Component::LeftLeg => "Left Leg",
        };
        write!(f, "{}", label)
    }
}
