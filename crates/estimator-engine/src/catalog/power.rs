//! Per-unit power-draw figures for the wattage estimator

/// Watts per installed RAM stick
pub const RAM_WATTS_PER_STICK: u32 = 5;

/// Watts per SSD/NVMe drive
pub const SSD_WATTS_PER_DRIVE: u32 = 8;

/// Watts per mechanical hard drive
pub const HDD_WATTS_PER_DRIVE: u32 = 10;

/// Flat baseline for motherboard and case fans
pub const FANS_AND_MOTHERBOARD_WATTS: u32 = 50;

/// Target sustained load fraction; the headroom covers efficiency falloff
/// and transient spikes
pub const TARGET_LOAD_FACTOR: f64 = 0.6;

/// Retail PSUs come in 50 W increments
pub const PSU_STEP_WATTS: u32 = 50;
