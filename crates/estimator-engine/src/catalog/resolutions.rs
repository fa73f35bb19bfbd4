//! Hand-tuned resolution multiplier tables
//!
//! Two separate tables: one scales the FPS estimator's weighted base frame
//! rate, the other scales the raw projection figures in the bottleneck
//! results view. The values are curated constants, not derived.

use shared_types::Resolution;

/// Multiplier applied to a game's weighted base FPS.
///
/// Ultrawide has no entry: the FPS estimator supports the three standard
/// 16:9 targets only.
pub fn fps_multiplier(resolution: Resolution) -> Option<f64> {
    match resolution {
        Resolution::FullHd => Some(1.2),
        Resolution::Qhd => Some(1.0),
        Resolution::UltraHd => Some(0.7),
        Resolution::Ultrawide => None,
    }
}

/// Multiplier for the per-resolution projection cards in the bottleneck
/// results view.
pub fn projection_multiplier(resolution: Resolution) -> f64 {
    match resolution {
        Resolution::FullHd => 1.4,
        Resolution::Qhd => 1.0,
        Resolution::UltraHd => 0.6,
        Resolution::Ultrawide => 0.9,
    }
}
