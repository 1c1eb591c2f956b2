//! Display formatting for energies and counts.

use draconid_core::constants::JOULES_PER_MEGATON_TNT;

/// Format an energy in joules as a TNT-equivalent string (kT / MT / GT).
pub fn format_energy(joules: f64) -> String {
    let megatons = joules / JOULES_PER_MEGATON_TNT;
    if megatons >= 1000.0 {
        format!("{:.1} GT", megatons / 1000.0)
    } else if megatons >= 1.0 {
        format!("{megatons:.1} MT")
    } else {
        format!("{:.1} kT", megatons * 1000.0)
    }
}

/// Format a large count compactly (1.5M, 3.2K).
pub fn format_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1000 {
        format!("{:.1}K", n as f64 / 1000.0)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn energy_units_switch_at_thresholds() {
        assert_eq!(format_energy(4.184e12), "1.0 kT");
        assert_eq!(format_energy(4.184e14), "100.0 kT");
        assert_eq!(format_energy(4.184e15), "1.0 MT");
        assert_eq!(format_energy(4.184e17), "100.0 MT");
        assert_eq!(format_energy(4.184e18), "1.0 GT");
        assert_eq!(format_energy(4.184e21), "1000.0 GT");
    }

    #[test]
    fn counts_abbreviate() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1500), "1.5K");
        assert_eq!(format_count(2_300_000), "2.3M");
    }
}
