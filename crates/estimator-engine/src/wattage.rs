//! PSU load and recommended wattage estimation
//!
//! Sums the component TDP figures with per-unit peripheral costs, then
//! sizes the supply so the estimated load sits at the target fraction of
//! capacity, rounded up to the retail wattage step.

use shared_types::{PeripheralLoadout, WattageEstimate};

use crate::catalog::power;
use crate::error::EstimateError;
use crate::inputs::ensure_non_negative;

/// Estimates system load and the recommended supply wattage.
///
/// Peripheral counts are not range-checked beyond being counts; the
/// presentation layer enforces its own UI bounds.
pub fn estimate(
    cpu_tdp: f64,
    gpu_tdp: f64,
    loadout: &PeripheralLoadout,
) -> Result<WattageEstimate, EstimateError> {
    ensure_non_negative("cpu_tdp", cpu_tdp)?;
    ensure_non_negative("gpu_tdp", gpu_tdp)?;

    let peripheral_watts = loadout.ram_sticks as f64 * power::RAM_WATTS_PER_STICK as f64
        + loadout.ssd_count as f64 * power::SSD_WATTS_PER_DRIVE as f64
        + loadout.hdd_count as f64 * power::HDD_WATTS_PER_DRIVE as f64
        + power::FANS_AND_MOTHERBOARD_WATTS as f64;
    let estimated_load_watts = cpu_tdp + gpu_tdp + peripheral_watts;

    let step = power::PSU_STEP_WATTS as f64;
    let raw = estimated_load_watts / power::TARGET_LOAD_FACTOR;
    let recommended_watts = ((raw / step).ceil() * step) as u32;

    Ok(WattageEstimate {
        estimated_load_watts,
        recommended_watts,
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: the recommendation is always a positive multiple of the
        /// retail step and covers the load at the target fraction
        #[test]
        fn recommendation_is_a_step_multiple_with_headroom(
            cpu_tdp in 0.0f64..=500.0,
            gpu_tdp in 0.0f64..=600.0,
            ram_sticks in 0u32..=8,
            ssd_count in 0u32..=10,
            hdd_count in 0u32..=10,
        ) {
            let result = estimate(
                cpu_tdp,
                gpu_tdp,
                &PeripheralLoadout { ram_sticks, ssd_count, hdd_count },
            )
            .unwrap();

            prop_assert!(result.recommended_watts > 0);
            prop_assert_eq!(result.recommended_watts % 50, 0);
            prop_assert!(
                result.recommended_watts as f64 >= result.estimated_load_watts / 0.6 - 1e-6
            );
        }

        /// Property: increasing any single input never lowers the
        /// recommendation
        #[test]
        fn recommendation_is_monotone(
            cpu_tdp in 0.0f64..=500.0,
            gpu_tdp in 0.0f64..=600.0,
            ram_sticks in 0u32..=8,
            ssd_count in 0u32..=10,
            hdd_count in 0u32..=10,
        ) {
            let base_loadout = PeripheralLoadout { ram_sticks, ssd_count, hdd_count };
            let base = estimate(cpu_tdp, gpu_tdp, &base_loadout).unwrap();

            let bumped_cpu = estimate(cpu_tdp + 25.0, gpu_tdp, &base_loadout).unwrap();
            prop_assert!(bumped_cpu.recommended_watts >= base.recommended_watts);

            let bumped_gpu = estimate(cpu_tdp, gpu_tdp + 25.0, &base_loadout).unwrap();
            prop_assert!(bumped_gpu.recommended_watts >= base.recommended_watts);

            let bumped_ram = estimate(
                cpu_tdp,
                gpu_tdp,
                &PeripheralLoadout { ram_sticks: ram_sticks + 1, ..base_loadout },
            )
            .unwrap();
            prop_assert!(bumped_ram.recommended_watts >= base.recommended_watts);

            let bumped_ssd = estimate(
                cpu_tdp,
                gpu_tdp,
                &PeripheralLoadout { ssd_count: ssd_count + 1, ..base_loadout },
            )
            .unwrap();
            prop_assert!(bumped_ssd.recommended_watts >= base.recommended_watts);

            let bumped_hdd = estimate(
                cpu_tdp,
                gpu_tdp,
                &PeripheralLoadout { hdd_count: hdd_count + 1, ..base_loadout },
            )
            .unwrap();
            prop_assert!(bumped_hdd.recommended_watts >= base.recommended_watts);
        }
    }
}
