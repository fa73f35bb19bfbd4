#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ComponentKind {
    #[serde(rename = "CPU")]
    Cpu,
    #[serde(rename = "GPU")]
    Gpu,
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComponentKind::Cpu => write!(f, "CPU"),
            ComponentKind::Gpu => write!(f, "GPU"),
        }
    }
}

/// A CPU or GPU entry from the reference catalog.
///
/// `benchmark_score` is a normalized 0-100 rating; `tdp_watts` is the
/// manufacturer TDP figure used as the power-draw proxy.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct HardwareComponent {
    pub id: String, // Retail model name, stable key
    pub kind: ComponentKind,
    pub benchmark_score: f64,
    pub tdp_watts: u32,
}

/// Per-title weighting profile for FPS estimation.
///
/// `cpu_weight + gpu_weight` must sum to 1: the weights partition how much
/// each component influences the title's frame rate.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct GameProfile {
    pub id: String,
    pub base_fps: f64,
    pub cpu_weight: f64,
    pub gpu_weight: f64,
}

/// Which component holds the lower benchmark score in a bottleneck check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LimitingComponent {
    #[serde(rename = "CPU")]
    Cpu,
    #[serde(rename = "GPU")]
    Gpu,
    None,
}

impl LimitingComponent {
    /// The opposite component, for upgrade-advice phrasing.
    pub fn counterpart(&self) -> Option<ComponentKind> {
        match self {
            LimitingComponent::Cpu => Some(ComponentKind::Gpu),
            LimitingComponent::Gpu => Some(ComponentKind::Cpu),
            LimitingComponent::None => None,
        }
    }
}

impl std::fmt::Display for LimitingComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LimitingComponent::Cpu => write!(f, "CPU"),
            LimitingComponent::Gpu => write!(f, "GPU"),
            LimitingComponent::None => write!(f, "None"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BottleneckReport {
    pub percentage: f64, // 0-100 gap relative to the stronger component
    pub component: LimitingComponent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FpsEstimate {
    pub fps: u32,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WattageEstimate {
    pub estimated_load_watts: f64,
    pub recommended_watts: u32,
}

/// Projected per-component display figures for the bottleneck results view.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ResolutionProjection {
    pub cpu_fps: u32,
    pub gpu_fps: u32,
    pub limited_by: ComponentKind,
}

/// Peripheral counts for the wattage estimate.
///
/// The presentation layer bounds these (RAM sticks 1-8, drives 0-10); the
/// estimator only requires them to be counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PeripheralLoadout {
    pub ram_sticks: u32,
    pub ssd_count: u32,
    pub hdd_count: u32,
}

impl Default for PeripheralLoadout {
    fn default() -> Self {
        // Matches the calculator's starting selection
        Self {
            ram_sticks: 2,
            ssd_count: 1,
            hdd_count: 0,
        }
    }
}

/// Qualitative rating for a benchmark score or RAM capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Rating {
    Excellent,
    Good,
    Fair,
    Poor,
}

/// Qualitative tier for an estimated frame rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FpsTier {
    Struggle,
    Playable,
    Smooth,
    Excellent,
}

/// Severity band for a bottleneck percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BottleneckSeverity {
    Balanced,
    Moderate,
    Severe,
}

/// What class of games a build is suited for, from the averaged score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BuildClass {
    MaxSettings,
    AaaHigh,
    MediumHigh,
    EsportsAndOlder,
}
