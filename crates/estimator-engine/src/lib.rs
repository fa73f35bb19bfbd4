//! Hardware-matching and power estimation over declarative reference tables
//!
//! Three synchronous, pure calculators plus the catalog they read from:
//! - `bottleneck`: relative CPU/GPU gap and per-resolution projections
//! - `fps`: expected average frame rate per game and resolution
//! - `wattage`: estimated system load and recommended PSU size
//!
//! `EstimatorEngine` resolves catalog identifiers and delegates to the pure
//! functions; callers that already hold scores can use the modules directly.

pub mod bottleneck;
pub mod catalog;
pub mod error;
pub mod fps;
mod inputs;
pub mod tiers;
pub mod wattage;

pub use catalog::Catalog;
pub use error::EstimateError;

use shared_types::{
    BottleneckReport, FpsEstimate, PeripheralLoadout, Resolution, ResolutionProjection,
    WattageEstimate,
};

/// Estimation engine entry point
///
/// Holds a reference to an immutable catalog; all methods are pure lookups
/// plus O(1) arithmetic, safe to call repeatedly and concurrently.
pub struct EstimatorEngine<'a> {
    catalog: &'a Catalog,
}

impl EstimatorEngine<'static> {
    /// Engine over the compiled-in reference catalog
    pub fn new() -> Self {
        Self {
            catalog: Catalog::built_in(),
        }
    }
}

impl<'a> EstimatorEngine<'a> {
    /// Engine over a caller-supplied catalog
    pub fn with_catalog(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        self.catalog
    }

    /// Bottleneck gap between two catalog components
    pub fn analyze_bottleneck(
        &self,
        cpu_id: &str,
        gpu_id: &str,
    ) -> Result<BottleneckReport, EstimateError> {
        let cpu = self.catalog.cpu(cpu_id)?;
        let gpu = self.catalog.gpu(gpu_id)?;
        bottleneck::analyze(cpu.benchmark_score, gpu.benchmark_score)
    }

    /// Per-resolution projection card for the bottleneck results view
    pub fn project_resolution(
        &self,
        cpu_id: &str,
        gpu_id: &str,
        resolution: Resolution,
    ) -> Result<ResolutionProjection, EstimateError> {
        let cpu = self.catalog.cpu(cpu_id)?;
        let gpu = self.catalog.gpu(gpu_id)?;
        bottleneck::project_resolution(cpu.benchmark_score, gpu.benchmark_score, resolution)
    }

    /// Average FPS estimate for a catalog game at a resolution
    pub fn estimate_fps(
        &self,
        cpu_id: &str,
        gpu_id: &str,
        game_id: &str,
        resolution: Resolution,
    ) -> Result<FpsEstimate, EstimateError> {
        let cpu = self.catalog.cpu(cpu_id)?;
        let gpu = self.catalog.gpu(gpu_id)?;
        let game = self.catalog.game(game_id)?;
        fps::estimate(cpu.benchmark_score, gpu.benchmark_score, game, resolution)
    }

    /// System load and recommended PSU wattage for a parts list
    pub fn estimate_wattage(
        &self,
        cpu_id: &str,
        gpu_id: &str,
        loadout: &PeripheralLoadout,
    ) -> Result<WattageEstimate, EstimateError> {
        let cpu = self.catalog.cpu(cpu_id)?;
        let gpu = self.catalog.gpu(gpu_id)?;
        wattage::estimate(cpu.tdp_watts as f64, gpu.tdp_watts as f64, loadout)
    }
}

impl Default for EstimatorEngine<'static> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::LimitingComponent;

    #[test]
    fn test_engine_analyzes_catalog_components() {
        let engine = EstimatorEngine::new();
        // 7800X3D scores 87, RTX 4090 scores 98: CPU is the weaker part
        let report = engine
            .analyze_bottleneck("AMD Ryzen 7 7800X3D", "NVIDIA GeForce RTX 4090")
            .unwrap();
        assert_eq!(report.component, LimitingComponent::Cpu);
        assert!(report.percentage > 0.0);
    }

    #[test]
    fn test_engine_rejects_unknown_ids() {
        let engine = EstimatorEngine::new();
        assert!(matches!(
            engine.analyze_bottleneck("AMD Ryzen 7 7800X3D", "Voodoo 5 6000"),
            Err(EstimateError::UnknownReference(_))
        ));
        assert!(matches!(
            engine.estimate_fps(
                "AMD Ryzen 7 7800X3D",
                "NVIDIA GeForce RTX 4090",
                "Pong",
                Resolution::Qhd,
            ),
            Err(EstimateError::UnknownReference(_))
        ));
    }

    #[test]
    fn test_engine_fps_matches_the_pure_calculator() {
        let engine = EstimatorEngine::new();
        let estimated = engine
            .estimate_fps(
                "AMD Ryzen 7 7800X3D",
                "NVIDIA GeForce RTX 4090",
                "Cyberpunk 2077",
                Resolution::FullHd,
            )
            .unwrap();

        let catalog = engine.catalog();
        let cpu = catalog.cpu("AMD Ryzen 7 7800X3D").unwrap();
        let gpu = catalog.gpu("NVIDIA GeForce RTX 4090").unwrap();
        let game = catalog.game("Cyberpunk 2077").unwrap();
        let direct = fps::estimate(
            cpu.benchmark_score,
            gpu.benchmark_score,
            game,
            Resolution::FullHd,
        )
        .unwrap();

        assert_eq!(estimated, direct);
    }

    #[test]
    fn test_engine_sizes_a_reference_build() {
        let engine = EstimatorEngine::new();
        // i9-14900K (253 W) + RTX 4090 (450 W) + default loadout:
        // 253 + 450 + 10 + 8 + 50 = 771; 771 / 0.6 = 1285 -> 1300
        let result = engine
            .estimate_wattage(
                "Intel Core i9-14900K",
                "NVIDIA GeForce RTX 4090",
                &PeripheralLoadout::default(),
            )
            .unwrap();
        assert_eq!(result.estimated_load_watts, 771.0);
        assert_eq!(result.recommended_watts, 1300);
    }

    #[test]
    fn test_engine_over_injected_catalog() {
        use shared_types::{ComponentKind, GameProfile, HardwareComponent};

        let catalog = Catalog::from_parts(
            vec![HardwareComponent {
                id: "Bench CPU".to_string(),
                kind: ComponentKind::Cpu,
                benchmark_score: 100.0,
                tdp_watts: 100,
            }],
            vec![HardwareComponent {
                id: "Bench GPU".to_string(),
                kind: ComponentKind::Gpu,
                benchmark_score: 100.0,
                tdp_watts: 200,
            }],
            vec![GameProfile {
                id: "Bench Title".to_string(),
                base_fps: 100.0,
                cpu_weight: 0.5,
                gpu_weight: 0.5,
            }],
        );
        let engine = EstimatorEngine::with_catalog(&catalog);

        let estimated = engine
            .estimate_fps("Bench CPU", "Bench GPU", "Bench Title", Resolution::Qhd)
            .unwrap();
        assert_eq!(estimated.fps, 100);

        let report = engine.analyze_bottleneck("Bench CPU", "Bench GPU").unwrap();
        assert_eq!(report.component, LimitingComponent::None);
    }

    #[test]
    fn test_projection_orders_match_scores() {
        let engine = EstimatorEngine::new();
        let projection = engine
            .project_resolution(
                "AMD Ryzen 7 7800X3D",
                "NVIDIA GeForce RTX 4090",
                Resolution::Qhd,
            )
            .unwrap();
        // 87 * 2.5 = 217.5 -> 218, 98 * 2.2 = 215.6 -> 216
        assert_eq!(projection.cpu_fps, 218);
        assert_eq!(projection.gpu_fps, 216);
    }
}
