//! Property-based tests for the impact scaling laws using proptest.
//!
//! These verify the documented invariants across wide parameter ranges
//! rather than at hand-picked points.

use proptest::prelude::*;

use draconid_core::enums::MaterialKind;
use draconid_core::types::ImpactParameters;

use crate::casualty::{estimate_casualties, lookup_region};
use crate::impact::{compute_impact, crater_diameter_km, survival_factor};

const MATERIALS: [MaterialKind; 4] = [
    MaterialKind::Stone,
    MaterialKind::Iron,
    MaterialKind::Carbon,
    MaterialKind::Ice,
];

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Effective energy never exceeds kinetic energy, both non-negative.
    #[test]
    fn prop_effective_energy_bounded_by_kinetic(
        diameter in 0.1f64..20_000.0,
        velocity in 0.1f64..75.0,
        angle in 0.001f64..90.0,
        material_idx in 0usize..4,
    ) {
        let params = ImpactParameters {
            diameter_m: diameter,
            velocity_km_s: velocity,
            entry_angle_deg: angle,
            material: MATERIALS[material_idx],
        };
        let result = compute_impact(&params, &lookup_region("Europe")).unwrap();
        prop_assert!(result.kinetic_energy_j >= 0.0);
        prop_assert!(result.effective_energy_j >= 0.0);
        prop_assert!(result.effective_energy_j <= result.kinetic_energy_j);
        prop_assert!(result.crater_diameter_km >= 0.0);
        prop_assert!(result.fireball_radius_km >= 0.0);
    }

    /// Survival factor stays in [0, 1] and is monotone non-decreasing in
    /// both diameter and velocity.
    #[test]
    fn prop_survival_factor_monotone(
        diameter in 0.1f64..20_000.0,
        velocity in 0.1f64..75.0,
        survivability in 0.0f64..=1.0,
        diameter_bump in 0.0f64..100.0,
        velocity_bump in 0.0f64..10.0,
    ) {
        let base = survival_factor(diameter, velocity, survivability);
        prop_assert!((0.0..=1.0).contains(&base));

        let bigger = survival_factor(diameter + diameter_bump, velocity, survivability);
        let faster = survival_factor(diameter, velocity + velocity_bump, survivability);
        prop_assert!(bigger >= base);
        prop_assert!(faster >= base);
    }

    /// Crater diameter strictly increases with energy at a fixed angle.
    #[test]
    fn prop_crater_monotone_in_energy(
        energy in 1e9f64..1e24,
        factor in 1.01f64..1000.0,
        angle in 1.0f64..90.0,
    ) {
        let small = crater_diameter_km(energy, angle);
        let large = crater_diameter_km(energy * factor, angle);
        prop_assert!(large > small);
    }

    /// Crater diameter vanishes as the entry angle goes to grazing.
    #[test]
    fn prop_crater_shrinks_toward_grazing(
        energy in 1e9f64..1e24,
        angle in 1.0f64..=90.0,
    ) {
        let at_angle = crater_diameter_km(energy, angle);
        let nearer_grazing = crater_diameter_km(energy, angle / 10.0);
        prop_assert!(nearer_grazing < at_angle);
    }

    /// Casualty counts are finite and monotone in density.
    #[test]
    fn prop_casualties_monotone_in_density(
        fireball in 0.0f64..1000.0,
        density in 0.0f64..10_000.0,
    ) {
        let base = estimate_casualties(fireball, density);
        let denser = estimate_casualties(fireball, density * 2.0);
        prop_assert!(denser >= base);
    }
}
