//! CPU/GPU bottleneck analysis
//!
//! The percentage gap is measured against the stronger component and is
//! resolution-independent: it compares relative compute capability, not
//! rendering load. The target resolution only affects the projection
//! figures shown alongside the result.

use shared_types::{
    BottleneckReport, ComponentKind, LimitingComponent, Resolution, ResolutionProjection,
};

use crate::catalog::resolutions;
use crate::error::EstimateError;
use crate::inputs::{ensure_non_negative, ensure_score};

/// Computes the weaker component and its percentage gap to the stronger one.
///
/// Equal scores report `LimitingComponent::None` at 0%. Equality is exact;
/// no tolerance band is applied at the boundary.
pub fn analyze(cpu_score: f64, gpu_score: f64) -> Result<BottleneckReport, EstimateError> {
    ensure_score("cpu_score", cpu_score)?;
    ensure_score("gpu_score", gpu_score)?;

    if cpu_score == gpu_score {
        return Ok(BottleneckReport {
            percentage: 0.0,
            component: LimitingComponent::None,
        });
    }

    let hi = cpu_score.max(gpu_score);
    let lo = cpu_score.min(gpu_score);
    let percentage = (((hi - lo) / hi) * 100.0).clamp(0.0, 100.0);
    let component = if cpu_score < gpu_score {
        LimitingComponent::Cpu
    } else {
        LimitingComponent::Gpu
    };

    Ok(BottleneckReport {
        percentage,
        component,
    })
}

// Scale factors for the raw projection figures in the results view. CPU
// throughput translates to more frames than GPU throughput at the same
// score, hence the asymmetry.
const CPU_PROJECTION_SCALE: f64 = 2.5;
const GPU_PROJECTION_SCALE: f64 = 2.2;

/// Projects a raw display figure for one scaled score at a resolution.
///
/// Used by the per-resolution benchmark cards; `base_score` is already
/// scaled and may exceed 100.
pub fn projected_fps(base_score: f64, resolution: Resolution) -> Result<u32, EstimateError> {
    ensure_non_negative("base_score", base_score)?;
    let projected = base_score * resolutions::projection_multiplier(resolution);
    Ok(projected.round().max(0.0) as u32)
}

/// Side-by-side CPU/GPU projection for one resolution card, with the
/// component that caps the pair.
pub fn project_resolution(
    cpu_score: f64,
    gpu_score: f64,
    resolution: Resolution,
) -> Result<ResolutionProjection, EstimateError> {
    ensure_score("cpu_score", cpu_score)?;
    ensure_score("gpu_score", gpu_score)?;

    let cpu_fps = projected_fps(cpu_score * CPU_PROJECTION_SCALE, resolution)?;
    let gpu_fps = projected_fps(gpu_score * GPU_PROJECTION_SCALE, resolution)?;
    let limited_by = if cpu_fps < gpu_fps {
        ComponentKind::Cpu
    } else {
        ComponentKind::Gpu
    };

    Ok(ResolutionProjection {
        cpu_fps,
        gpu_fps,
        limited_by,
    })
}
