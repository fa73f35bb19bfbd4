//! The reference catalog
//!
//! Immutable lookup tables the estimators read from: CPU and GPU benchmark
//! scores with TDP figures, per-game weighting profiles, resolution
//! multipliers, and per-unit power costs. All entries are module-level
//! constants compiled into the binary; the catalog is built once on first
//! access and never mutated.

mod cpus;
mod games;
mod gpus;
pub mod power;
pub mod resolutions;

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use shared_types::{ComponentKind, GameProfile, HardwareComponent};

use crate::error::EstimateError;

lazy_static! {
    static ref BUILT_IN: Catalog = Catalog::from_tables();
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct Catalog {
    cpus: BTreeMap<String, HardwareComponent>,
    gpus: BTreeMap<String, HardwareComponent>,
    games: BTreeMap<String, GameProfile>,
}

impl Catalog {
    /// The compiled-in reference tables, built on first access
    pub fn built_in() -> &'static Catalog {
        &BUILT_IN
    }

    /// Builds a catalog from caller-supplied entries, keyed by id
    pub fn from_parts(
        cpus: Vec<HardwareComponent>,
        gpus: Vec<HardwareComponent>,
        games: Vec<GameProfile>,
    ) -> Self {
        Self {
            cpus: cpus.into_iter().map(|c| (c.id.clone(), c)).collect(),
            gpus: gpus.into_iter().map(|g| (g.id.clone(), g)).collect(),
            games: games.into_iter().map(|g| (g.id.clone(), g)).collect(),
        }
    }

    fn from_tables() -> Self {
        let component = |kind: ComponentKind| {
            move |&(id, benchmark_score, tdp_watts): &(&str, f64, u32)| {
                (
                    id.to_string(),
                    HardwareComponent {
                        id: id.to_string(),
                        kind,
                        benchmark_score,
                        tdp_watts,
                    },
                )
            }
        };

        Self {
            cpus: cpus::CPUS.iter().map(component(ComponentKind::Cpu)).collect(),
            gpus: gpus::GPUS.iter().map(component(ComponentKind::Gpu)).collect(),
            games: games::GAMES
                .iter()
                .map(|&(id, base_fps, cpu_weight, gpu_weight)| {
                    (
                        id.to_string(),
                        GameProfile {
                            id: id.to_string(),
                            base_fps,
                            cpu_weight,
                            gpu_weight,
                        },
                    )
                })
                .collect(),
        }
    }

    pub fn cpu(&self, id: &str) -> Result<&HardwareComponent, EstimateError> {
        self.cpus
            .get(id)
            .ok_or_else(|| EstimateError::UnknownReference(format!("Unknown CPU: {}", id)))
    }

    pub fn gpu(&self, id: &str) -> Result<&HardwareComponent, EstimateError> {
        self.gpus
            .get(id)
            .ok_or_else(|| EstimateError::UnknownReference(format!("Unknown GPU: {}", id)))
    }

    pub fn game(&self, id: &str) -> Result<&GameProfile, EstimateError> {
        self.games
            .get(id)
            .ok_or_else(|| EstimateError::UnknownReference(format!("Unknown game: {}", id)))
    }

    /// CPU ids in stable (lexicographic) order, for populating choosers
    pub fn cpu_ids(&self) -> impl Iterator<Item = &str> {
        self.cpus.keys().map(String::as_str)
    }

    pub fn gpu_ids(&self) -> impl Iterator<Item = &str> {
        self.gpus.keys().map(String::as_str)
    }

    pub fn game_ids(&self) -> impl Iterator<Item = &str> {
        self.games.keys().map(String::as_str)
    }
}
