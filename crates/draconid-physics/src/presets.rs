//! Named impactor presets: historical events and cataloged NEOs.

use serde::Serialize;

use draconid_core::enums::MaterialKind;
use draconid_core::types::ImpactParameters;

/// Preset identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PresetId {
    Chelyabinsk,
    Tunguska,
    Apophis,
    Bennu,
    Dimorphos,
    Chicxulub,
}

/// A ready-made impactor with briefing metadata.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImpactorPreset {
    pub name: &'static str,
    pub params: ImpactParameters,
    pub description: &'static str,
    /// Whether this describes an impact that actually occurred.
    pub real_event: bool,
}

impl PresetId {
    pub const ALL: [PresetId; 6] = [
        PresetId::Chelyabinsk,
        PresetId::Tunguska,
        PresetId::Apophis,
        PresetId::Bennu,
        PresetId::Dimorphos,
        PresetId::Chicxulub,
    ];
}

/// Get the preset for a given id.
pub fn preset(id: PresetId) -> ImpactorPreset {
    match id {
        PresetId::Chelyabinsk => ImpactorPreset {
            name: "Chelyabinsk Meteor (2013)",
            params: ImpactParameters {
                diameter_m: 20.0,
                velocity_km_s: 19.16,
                entry_angle_deg: 18.0,
                material: MaterialKind::Stone,
            },
            description: "Injured 1,500 people in Russia with airburst",
            real_event: true,
        },
        PresetId::Tunguska => ImpactorPreset {
            name: "Tunguska Event (1908)",
            params: ImpactParameters {
                diameter_m: 60.0,
                velocity_km_s: 27.0,
                entry_angle_deg: 45.0,
                material: MaterialKind::Ice,
            },
            description: "Flattened 2,150 km2 of Siberian forest",
            real_event: true,
        },
        PresetId::Apophis => ImpactorPreset {
            name: "99942 Apophis",
            params: ImpactParameters {
                diameter_m: 370.0,
                velocity_km_s: 7.42,
                entry_angle_deg: 60.0,
                material: MaterialKind::Stone,
            },
            description: "Will pass 31,000 km from Earth in 2029",
            real_event: false,
        },
        PresetId::Bennu => ImpactorPreset {
            name: "101955 Bennu",
            params: ImpactParameters {
                diameter_m: 490.0,
                velocity_km_s: 6.14,
                entry_angle_deg: 45.0,
                material: MaterialKind::Carbon,
            },
            description: "Target of OSIRIS-REx sample return mission",
            real_event: false,
        },
        PresetId::Dimorphos => ImpactorPreset {
            name: "Dimorphos",
            params: ImpactParameters {
                diameter_m: 160.0,
                velocity_km_s: 4.14,
                entry_angle_deg: 30.0,
                material: MaterialKind::Stone,
            },
            description: "Successfully deflected by NASA's DART mission",
            real_event: false,
        },
        PresetId::Chicxulub => ImpactorPreset {
            name: "Chicxulub Impactor",
            params: ImpactParameters {
                diameter_m: 10_000.0,
                velocity_km_s: 20.0,
                entry_angle_deg: 60.0,
                material: MaterialKind::Stone,
            },
            description: "Caused mass extinction 66 million years ago",
            real_event: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::casualty::lookup_region;
    use crate::compute_impact;

    #[test]
    fn all_presets_compute_cleanly() {
        let region = lookup_region("Europe");
        for id in PresetId::ALL {
            let p = preset(id);
            let result = compute_impact(&p.params, &region);
            assert!(result.is_ok(), "{} failed: {:?}", p.name, result);
        }
    }

    #[test]
    fn tunguska_is_megaton_class() {
        let p = preset(PresetId::Tunguska);
        let result = compute_impact(&p.params, &lookup_region("Asia")).unwrap();
        let megatons =
            result.effective_energy_j / draconid_core::constants::JOULES_PER_MEGATON_TNT;
        assert!((5.0..20.0).contains(&megatons), "got {megatons} MT");
    }
}
