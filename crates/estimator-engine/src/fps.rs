//! Average frame-rate estimation
//!
//! Raw benchmark scores are normalized through a concave curve before the
//! per-game weighting is applied, so very high scores show diminishing
//! returns. The exponent is part of the observable contract.

use shared_types::{FpsEstimate, GameProfile, Resolution};

use crate::catalog::resolutions;
use crate::error::EstimateError;
use crate::inputs::ensure_score;

/// Concavity exponent of the normalization curve
const NORM_EXPONENT: f64 = 0.7;

fn normalized(score: f64) -> f64 {
    (score / 100.0).powf(NORM_EXPONENT)
}

/// Estimates the average FPS for a game at a resolution.
///
/// `fps = round(base_fps * (norm(cpu) * cpu_weight + norm(gpu) * gpu_weight)
/// * multiplier)`, clamped to zero. Resolutions without an FPS multiplier
/// (ultrawide) are rejected, not defaulted.
pub fn estimate(
    cpu_score: f64,
    gpu_score: f64,
    game: &GameProfile,
    resolution: Resolution,
) -> Result<FpsEstimate, EstimateError> {
    ensure_score("cpu_score", cpu_score)?;
    ensure_score("gpu_score", gpu_score)?;

    let multiplier = resolutions::fps_multiplier(resolution).ok_or_else(|| {
        EstimateError::UnknownReference(format!(
            "No FPS multiplier for resolution: {}",
            resolution
        ))
    })?;

    let weighted =
        normalized(cpu_score) * game.cpu_weight + normalized(gpu_score) * game.gpu_weight;
    let raw = game.base_fps * weighted * multiplier;

    // Negative is impossible in-domain; clamp anyway before the cast
    let fps = raw.round().max(0.0) as u32;

    Ok(FpsEstimate { fps })
}
