//! Impact effect calculations.
//!
//! Closed-form scaling laws turning (diameter, velocity, angle, material)
//! into energy, crater size, fireball radius, seismic magnitude, and a
//! casualty estimate. Every function is pure and deterministic; invalid
//! physical parameters are a `DomainError`, never a clamped result.

use log::debug;

use draconid_core::constants::*;
use draconid_core::error::DomainError;
use draconid_core::types::{ImpactParameters, ImpactResult, TargetRegion};

use crate::casualty;
use crate::materials::{material_properties, MaterialProperties};

/// Asteroid mass from diameter and bulk density: sphere volume times density.
pub fn asteroid_mass_kg(diameter_m: f64, density_kg_m3: f64) -> f64 {
    let radius = diameter_m / 2.0;
    let volume = (4.0 / 3.0) * std::f64::consts::PI * radius.powi(3);
    volume * density_kg_m3
}

/// Kinetic energy at atmospheric entry: `½ m v²` with v in m/s.
pub fn kinetic_energy_j(mass_kg: f64, velocity_km_s: f64) -> f64 {
    let velocity_m_s = velocity_km_s * 1000.0;
    0.5 * mass_kg * velocity_m_s * velocity_m_s
}

/// Fraction of kinetic energy retained through atmospheric entry.
///
/// A saturation curve: larger, faster, tougher bodies retain more energy,
/// capped at full retention. Monotone non-decreasing in diameter and
/// velocity, always in [0, 1].
pub fn survival_factor(diameter_m: f64, velocity_km_s: f64, survivability: f64) -> f64 {
    let penetration_power = diameter_m.powf(1.5) * velocity_km_s * survivability;
    (penetration_power / SURVIVAL_SATURATION).min(1.0)
}

/// Final crater diameter in km for a surface-coupled energy and entry angle.
///
/// Gravity-regime scaling against the target rock; the `sin(angle)^(1/3)`
/// factor sends grazing impacts smoothly to zero crater. Callers must
/// supply an angle in (0, 90].
pub fn crater_diameter_km(effective_energy_j: f64, entry_angle_deg: f64) -> f64 {
    let angle_factor = entry_angle_deg.to_radians().sin().powf(1.0 / 3.0);
    let scaled = (effective_energy_j / (TARGET_ROCK_DENSITY * SURFACE_GRAVITY))
        .powf(CRATER_ENERGY_EXPONENT);
    CRATER_SCALING_K * scaled * angle_factor / 1000.0
}

/// Fireball radius in km from the TNT-ton equivalent of the coupled energy.
pub fn fireball_radius_km(effective_energy_j: f64) -> f64 {
    let tnt_tons = effective_energy_j / JOULES_PER_TON_TNT;
    FIREBALL_COEFFICIENT * tnt_tons.powf(FIREBALL_ENERGY_EXPONENT) / 1000.0
}

/// Equivalent seismic magnitude. The energy floor prevents log of zero.
pub fn seismic_magnitude(effective_energy_j: f64) -> f64 {
    let joules = effective_energy_j.max(SEISMIC_ENERGY_FLOOR);
    (joules.log10() - SEISMIC_OFFSET) / SEISMIC_DIVISOR
}

/// Compute the full impact result for one parameter set against a target
/// region. Pure and total over the validated domain; the same inputs give
/// bit-identical outputs on every call.
pub fn compute_impact(
    params: &ImpactParameters,
    target: &TargetRegion,
) -> Result<ImpactResult, DomainError> {
    let material = material_properties(params.material);
    validate(params, &material)?;

    let mass = asteroid_mass_kg(params.diameter_m, material.density_kg_m3);
    let kinetic = kinetic_energy_j(mass, params.velocity_km_s);
    let survival = survival_factor(params.diameter_m, params.velocity_km_s, material.survivability);
    let effective = kinetic * survival;

    let crater = crater_diameter_km(effective, params.entry_angle_deg);
    let fireball = fireball_radius_km(effective);
    let seismic = seismic_magnitude(effective);
    let casualties =
        casualty::estimate_casualties(fireball, target.population_density_per_km2);

    debug!(
        "impact: {:.0}m {:?} at {:.2} km/s, {:.0} deg -> {:.3e} J effective",
        params.diameter_m, params.material, params.velocity_km_s, params.entry_angle_deg, effective
    );

    Ok(ImpactResult {
        kinetic_energy_j: kinetic,
        effective_energy_j: effective,
        crater_diameter_km: crater,
        fireball_radius_km: fireball,
        seismic_magnitude: seismic,
        estimated_casualties: casualties,
    })
}

fn validate(params: &ImpactParameters, material: &MaterialProperties) -> Result<(), DomainError> {
    if !(params.diameter_m > 0.0) {
        return Err(DomainError::NonPositiveDiameter(params.diameter_m));
    }
    if !(params.velocity_km_s > 0.0) {
        return Err(DomainError::NonPositiveVelocity(params.velocity_km_s));
    }
    if !(material.density_kg_m3 > 0.0) {
        return Err(DomainError::NonPositiveDensity(material.density_kg_m3));
    }
    if !(params.entry_angle_deg > 0.0 && params.entry_angle_deg <= 90.0) {
        return Err(DomainError::AngleOutOfRange(params.entry_angle_deg));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use draconid_core::enums::MaterialKind;

    use super::*;
    use crate::casualty::lookup_region;

    fn chelyabinsk() -> ImpactParameters {
        ImpactParameters {
            diameter_m: 20.0,
            velocity_km_s: 19.16,
            entry_angle_deg: 18.0,
            material: MaterialKind::Stone,
        }
    }

    /// Chelyabinsk-class event: values computed once from the documented
    /// formulas and pinned to guard against drift.
    #[test]
    fn chelyabinsk_reference_values() {
        let result = compute_impact(&chelyabinsk(), &lookup_region("Asia")).unwrap();

        assert_relative_eq!(result.kinetic_energy_j, 2.306592512103346e15, max_relative = 1e-6);
        // Penetration power saturates for a 20m stone at 19 km/s: full retention.
        assert_relative_eq!(result.effective_energy_j, result.kinetic_energy_j, max_relative = 1e-12);
        assert_relative_eq!(result.crater_diameter_km, 0.2010937904766655, max_relative = 1e-6);
        assert_relative_eq!(result.fireball_radius_km, 0.02196914564321662, max_relative = 1e-6);
        assert_relative_eq!(result.seismic_magnitude, 7.041980585228778, max_relative = 1e-6);

        // ~551 kT TNT equivalent, consistent with the observed event class.
        let kilotons = result.effective_energy_j / (JOULES_PER_TON_TNT * 1000.0);
        assert!((500.0..600.0).contains(&kilotons), "got {kilotons} kT");
    }

    #[test]
    fn chicxulub_reference_values() {
        let params = ImpactParameters {
            diameter_m: 10_000.0,
            velocity_km_s: 20.0,
            entry_angle_deg: 60.0,
            material: MaterialKind::Stone,
        };
        let result = compute_impact(&params, &lookup_region("Asia")).unwrap();

        assert_relative_eq!(result.kinetic_energy_j, 3.141592653589793e23, max_relative = 1e-6);
        assert_relative_eq!(result.fireball_radius_km, 10.619210660902496, max_relative = 1e-6);
        assert_eq!(result.estimated_casualties, 24_059);
    }

    #[test]
    fn compute_is_deterministic() {
        let region = lookup_region("Europe");
        let a = compute_impact(&chelyabinsk(), &region).unwrap();
        let b = compute_impact(&chelyabinsk(), &region).unwrap();
        // Bit-identical across repeated calls.
        assert_eq!(a, b);
    }

    #[test]
    fn effective_energy_never_exceeds_kinetic() {
        // Small, slow, fragile body: survival factor well below 1.
        let params = ImpactParameters {
            diameter_m: 5.0,
            velocity_km_s: 15.0,
            entry_angle_deg: 45.0,
            material: MaterialKind::Ice,
        };
        let result = compute_impact(&params, &lookup_region("Asia")).unwrap();
        assert!(result.effective_energy_j < result.kinetic_energy_j);
        assert!(result.effective_energy_j >= 0.0);

        let expected_sf = survival_factor(5.0, 15.0, 0.3);
        assert_relative_eq!(
            result.effective_energy_j,
            result.kinetic_energy_j * expected_sf,
            max_relative = 1e-12
        );
    }

    #[test]
    fn survival_factor_bounds() {
        assert_eq!(survival_factor(10_000.0, 70.0, 0.95), 1.0);
        let tiny = survival_factor(1.0, 11.0, 0.3);
        assert!(tiny > 0.0 && tiny < 1.0);
    }

    #[test]
    fn crater_vanishes_at_grazing_angles() {
        let energy = 1e15;
        let steep = crater_diameter_km(energy, 90.0);
        let shallow = crater_diameter_km(energy, 1.0);
        let grazing = crater_diameter_km(energy, 0.01);
        assert!(steep > shallow);
        assert!(shallow > grazing);
        assert!(grazing < steep * 0.05);
    }

    #[test]
    fn seismic_magnitude_floors_tiny_events() {
        // At or below the floor the magnitude is pinned to the floor value.
        let floor_mag = seismic_magnitude(SEISMIC_ENERGY_FLOOR);
        assert_relative_eq!(seismic_magnitude(0.0), floor_mag, max_relative = 1e-12);
        assert_relative_eq!(seismic_magnitude(1.0), floor_mag, max_relative = 1e-12);
        assert_relative_eq!(floor_mag, (6.0 - 4.8) / 1.5, max_relative = 1e-12);
    }

    // ---- Domain errors ----

    #[test]
    fn rejects_non_positive_diameter() {
        let mut params = chelyabinsk();
        params.diameter_m = 0.0;
        let err = compute_impact(&params, &lookup_region("Asia")).unwrap_err();
        assert_eq!(err, DomainError::NonPositiveDiameter(0.0));

        params.diameter_m = -3.0;
        assert!(matches!(
            compute_impact(&params, &lookup_region("Asia")),
            Err(DomainError::NonPositiveDiameter(_))
        ));
    }

    #[test]
    fn rejects_non_positive_velocity() {
        let mut params = chelyabinsk();
        params.velocity_km_s = 0.0;
        assert!(matches!(
            compute_impact(&params, &lookup_region("Asia")),
            Err(DomainError::NonPositiveVelocity(_))
        ));
    }

    #[test]
    fn rejects_angle_outside_domain() {
        let region = lookup_region("Asia");
        for bad_angle in [0.0, -10.0, 90.1, 180.0] {
            let mut params = chelyabinsk();
            params.entry_angle_deg = bad_angle;
            assert!(
                matches!(
                    compute_impact(&params, &region),
                    Err(DomainError::AngleOutOfRange(_))
                ),
                "angle {bad_angle} should be rejected"
            );
        }
        // 90 degrees (vertical) is the inclusive upper bound.
        let mut params = chelyabinsk();
        params.entry_angle_deg = 90.0;
        assert!(compute_impact(&params, &region).is_ok());
    }

    #[test]
    fn nan_parameters_are_rejected() {
        let region = lookup_region("Asia");
        let mut params = chelyabinsk();
        params.diameter_m = f64::NAN;
        assert!(compute_impact(&params, &region).is_err());
    }
}
