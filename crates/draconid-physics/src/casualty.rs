//! Casualty estimation over concentric damage rings.

use draconid_core::constants::*;
use draconid_core::types::TargetRegion;

/// Average population densities per region (people per km²).
/// Continental averages; city-scale targeting is out of scope.
const REGION_DENSITIES: [(&str, f64); 6] = [
    ("North America", 22.0),
    ("Europe", 73.0),
    ("Asia", 147.0),
    ("Africa", 45.0),
    ("South America", 23.0),
    ("Australia", 3.0),
];

/// Look up a target region by name. Unknown names fall back to the
/// default density rather than failing: the catalog is a closed set.
pub fn lookup_region(name: &str) -> TargetRegion {
    let density = REGION_DENSITIES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, d)| *d)
        .unwrap_or(DEFAULT_POPULATION_DENSITY);
    TargetRegion {
        name: name.to_string(),
        population_density_per_km2: density,
    }
}

/// Names of all cataloged regions, for shell pickers.
pub fn region_names() -> impl Iterator<Item = &'static str> {
    REGION_DENSITIES.iter().map(|(n, _)| *n)
}

/// Estimate casualties from a fireball radius and a population density.
///
/// Three concentric rings at fixed fractions of the fireball radius, each
/// annulus weighted by its casualty fraction. The ring ratios are strictly
/// increasing, so the annuli never overlap or invert.
pub fn estimate_casualties(fireball_radius_km: f64, density_per_km2: f64) -> u64 {
    use std::f64::consts::PI;

    let direct_kill_radius = fireball_radius_km * DIRECT_KILL_RING;
    let severe_injury_radius = fireball_radius_km * SEVERE_INJURY_RING;
    let light_injury_radius = fireball_radius_km * LIGHT_INJURY_RING;

    let direct_kills = PI * direct_kill_radius.powi(2) * density_per_km2 * DIRECT_KILL_RATE;
    let severe_injuries = PI
        * (severe_injury_radius.powi(2) - direct_kill_radius.powi(2))
        * density_per_km2
        * SEVERE_INJURY_RATE;
    let light_injuries = PI
        * (light_injury_radius.powi(2) - severe_injury_radius.powi(2))
        * density_per_km2
        * LIGHT_INJURY_RATE;

    (direct_kills + severe_injuries + light_injuries).floor() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_regions_resolve() {
        assert_eq!(lookup_region("Asia").population_density_per_km2, 147.0);
        assert_eq!(lookup_region("Australia").population_density_per_km2, 3.0);
    }

    #[test]
    fn unknown_region_uses_default_density() {
        let region = lookup_region("Atlantis");
        assert_eq!(region.name, "Atlantis");
        assert_eq!(
            region.population_density_per_km2,
            DEFAULT_POPULATION_DENSITY
        );
    }

    #[test]
    fn zero_fireball_means_zero_casualties() {
        assert_eq!(estimate_casualties(0.0, 147.0), 0);
    }

    #[test]
    fn zero_density_means_zero_casualties() {
        assert_eq!(estimate_casualties(100.0, 0.0), 0);
    }

    #[test]
    fn casualties_scale_with_radius_and_density() {
        let small = estimate_casualties(5.0, 50.0);
        let large = estimate_casualties(10.0, 50.0);
        let dense = estimate_casualties(5.0, 100.0);
        assert!(large > small);
        assert!(dense > small);
    }

    #[test]
    fn ring_sum_matches_hand_computation() {
        // fireball 10 km, density 100: rings at 3/6/10 km.
        use std::f64::consts::PI;
        let expected = PI * 9.0 * 100.0 * 0.9
            + PI * (36.0 - 9.0) * 100.0 * 0.7
            + PI * (100.0 - 36.0) * 100.0 * 0.3;
        assert_eq!(estimate_casualties(10.0, 100.0), expected.floor() as u64);
    }
}
