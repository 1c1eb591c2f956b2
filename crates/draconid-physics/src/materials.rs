//! Asteroid material catalog.

use serde::Serialize;

use draconid_core::enums::MaterialKind;

/// Physical properties of an asteroid composition class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MaterialProperties {
    /// Bulk density (kg/m³).
    pub density_kg_m3: f64,
    /// Compressive strength (Pa).
    pub strength_pa: f64,
    /// Base fraction surviving atmospheric entry, in [0, 1].
    pub survivability: f64,
    /// Briefing text for the shell.
    pub description: &'static str,
}

/// Get the properties for a given material kind.
pub fn material_properties(kind: MaterialKind) -> MaterialProperties {
    match kind {
        MaterialKind::Stone => MaterialProperties {
            density_kg_m3: 3000.0,
            strength_pa: 5e6,
            survivability: 0.7,
            description: "Rocky S-type asteroids - Most common (~75%)",
        },
        MaterialKind::Iron => MaterialProperties {
            density_kg_m3: 8000.0,
            strength_pa: 2e8,
            survivability: 0.95,
            description: "Metallic M-type asteroids - Dense and durable",
        },
        MaterialKind::Carbon => MaterialProperties {
            density_kg_m3: 2000.0,
            strength_pa: 1e6,
            survivability: 0.5,
            description: "Carbonaceous C-type asteroids - Primitive composition",
        },
        MaterialKind::Ice => MaterialProperties {
            density_kg_m3: 1000.0,
            strength_pa: 1e5,
            survivability: 0.3,
            description: "Cometary bodies - Mostly water ice and dust",
        },
    }
}
