//! Qualitative tier mapping for display
//!
//! Every mapping here is an ordered threshold table evaluated top to
//! bottom, first match wins. The exact threshold values and their ordering
//! are part of the observable contract: fps 60 is Smooth, not Playable,
//! and fps 120 is Smooth, not Excellent.

use shared_types::{
    BottleneckReport, BottleneckSeverity, BuildClass, ComponentKind, FpsTier, LimitingComponent,
    Rating,
};

/// Ordered (predicate, tier) table for estimated frame rates
const FPS_TIERS: &[(fn(u32) -> bool, FpsTier)] = &[
    (|fps| fps < 30, FpsTier::Struggle),
    (|fps| fps < 60, FpsTier::Playable),
    (|fps| fps > 120, FpsTier::Excellent),
];

pub fn fps_tier(fps: u32) -> FpsTier {
    for (applies, tier) in FPS_TIERS {
        if applies(fps) {
            return *tier;
        }
    }
    FpsTier::Smooth
}

pub fn fps_tier_message(tier: FpsTier) -> &'static str {
    match tier {
        FpsTier::Struggle => {
            "The game will likely struggle to run at playable framerates. \
             Expect significant performance issues."
        }
        FpsTier::Playable => {
            "You should get a playable experience, though you may need to \
             lower some settings for consistent performance."
        }
        FpsTier::Smooth => "You can expect a smooth gaming experience at these settings.",
        FpsTier::Excellent => {
            "Your system should provide an excellent, high-framerate \
             experience in this title."
        }
    }
}

/// Benchmark-score rating floors, highest first
const SCORE_RATINGS: &[(f64, Rating)] = &[
    (95.0, Rating::Excellent),
    (80.0, Rating::Good),
    (65.0, Rating::Fair),
];

/// Rates a single or averaged benchmark score
pub fn score_rating(score: f64) -> Rating {
    for (floor, rating) in SCORE_RATINGS {
        if score >= *floor {
            return *rating;
        }
    }
    Rating::Poor
}

/// RAM capacity rating floors in GB, highest first
const RAM_RATINGS: &[(u32, Rating)] = &[
    (32, Rating::Excellent),
    (16, Rating::Good),
    (8, Rating::Fair),
];

pub fn ram_rating(ram_gb: u32) -> Rating {
    for (floor, rating) in RAM_RATINGS {
        if ram_gb >= *floor {
            return *rating;
        }
    }
    Rating::Poor
}

/// Bottleneck percentage bands, widest gap first; at or below 5% the
/// pairing counts as balanced
const SEVERITY_BANDS: &[(f64, BottleneckSeverity)] = &[
    (10.0, BottleneckSeverity::Severe),
    (5.0, BottleneckSeverity::Moderate),
];

pub fn bottleneck_severity(percentage: f64) -> BottleneckSeverity {
    for (floor, severity) in SEVERITY_BANDS {
        if percentage > *floor {
            return *severity;
        }
    }
    BottleneckSeverity::Balanced
}

/// One-line verdict shown under the bottleneck gauge
pub fn bottleneck_summary(report: &BottleneckReport) -> String {
    match report.component {
        LimitingComponent::None => "Your system is well balanced.".to_string(),
        component => format!("{} is the limiting factor.", component),
    }
}

/// Longer system-balance note for the assessment panel
pub fn balance_note(report: &BottleneckReport) -> String {
    match report.component {
        LimitingComponent::None => "Your CPU and GPU are well-balanced, ensuring optimal \
                                    performance across all gaming scenarios."
            .to_string(),
        component => {
            let counterpart = report
                .component
                .counterpart()
                .map(|kind| kind.to_string())
                .unwrap_or_default();
            let workload = match component {
                LimitingComponent::Cpu => "CPU-intensive",
                _ => "graphics-intensive",
            };
            format!(
                "Your {} is {:.1}% weaker than your {}, which may limit performance in {} games.",
                component, report.percentage, counterpart, workload
            )
        }
    }
}

/// Build-class floors over the averaged benchmark score, highest first
const BUILD_CLASSES: &[(f64, BuildClass)] = &[
    (95.0, BuildClass::MaxSettings),
    (80.0, BuildClass::AaaHigh),
    (65.0, BuildClass::MediumHigh),
];

/// Classifies a build from the average of its CPU and GPU scores
pub fn build_class(average_score: f64) -> BuildClass {
    for (floor, class) in BUILD_CLASSES {
        if average_score >= *floor {
            return *class;
        }
    }
    BuildClass::EsportsAndOlder
}

pub fn build_class_category(class: BuildClass) -> &'static str {
    match class {
        BuildClass::MaxSettings => "All Games at Maximum Settings",
        BuildClass::AaaHigh => "AAA Games at High Settings",
        BuildClass::MediumHigh => "Most Games at Medium-High Settings",
        BuildClass::EsportsAndOlder => "Esports & Older Games",
    }
}

pub fn build_class_description(class: BuildClass) -> &'static str {
    match class {
        BuildClass::MaxSettings => {
            "Your system can handle any current game at ultra settings with \
             excellent performance."
        }
        BuildClass::AaaHigh => "Perfect for modern AAA titles with high to ultra settings.",
        BuildClass::MediumHigh => "Great for most games with medium to high settings.",
        BuildClass::EsportsAndOlder => {
            "Best suited for competitive esports titles and older games."
        }
    }
}

pub fn build_class_settings(class: BuildClass) -> &'static str {
    match class {
        BuildClass::MaxSettings => "Ultra/Max settings recommended",
        BuildClass::AaaHigh => "High to Ultra settings",
        BuildClass::MediumHigh => "Medium to High settings",
        BuildClass::EsportsAndOlder => "Low to Medium settings",
    }
}

/// Per-component commentary thresholds (90/75/60, highest first)
pub fn component_commentary(kind: ComponentKind, score: f64) -> &'static str {
    match kind {
        ComponentKind::Cpu => {
            if score >= 90.0 {
                "Excellent for all modern games including CPU-intensive titles \
                 like strategy games and simulators."
            } else if score >= 75.0 {
                "Good performance in most games. May struggle with very \
                 CPU-intensive titles."
            } else if score >= 60.0 {
                "Adequate for gaming but may limit performance in demanding titles."
            } else {
                "May struggle with modern games. Consider upgrading for better \
                 performance."
            }
        }
        ComponentKind::Gpu => {
            if score >= 90.0 {
                "Exceptional graphics performance. Can handle ray tracing and \
                 ultra settings."
            } else if score >= 75.0 {
                "Strong graphics performance for high settings in most games."
            } else if score >= 60.0 {
                "Good for medium to high settings in most titles."
            } else {
                "Entry-level graphics. Best suited for esports titles and older \
                 games."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fps_tier_boundaries() {
        assert_eq!(fps_tier(0), FpsTier::Struggle);
        assert_eq!(fps_tier(29), FpsTier::Struggle);
        assert_eq!(fps_tier(30), FpsTier::Playable);
        assert_eq!(fps_tier(59), FpsTier::Playable);
        // 60 and 120 both land in Smooth; only strictly above 120 is Excellent
        assert_eq!(fps_tier(60), FpsTier::Smooth);
        assert_eq!(fps_tier(120), FpsTier::Smooth);
        assert_eq!(fps_tier(121), FpsTier::Excellent);
    }

    #[test]
    fn test_score_rating_boundaries() {
        assert_eq!(score_rating(95.0), Rating::Excellent);
        assert_eq!(score_rating(94.9), Rating::Good);
        assert_eq!(score_rating(80.0), Rating::Good);
        assert_eq!(score_rating(79.9), Rating::Fair);
        assert_eq!(score_rating(65.0), Rating::Fair);
        assert_eq!(score_rating(64.9), Rating::Poor);
        assert_eq!(score_rating(0.0), Rating::Poor);
    }

    #[test]
    fn test_ram_rating_boundaries() {
        assert_eq!(ram_rating(64), Rating::Excellent);
        assert_eq!(ram_rating(32), Rating::Excellent);
        assert_eq!(ram_rating(16), Rating::Good);
        assert_eq!(ram_rating(8), Rating::Fair);
        assert_eq!(ram_rating(4), Rating::Poor);
    }

    #[test]
    fn test_bottleneck_severity_bands() {
        assert_eq!(bottleneck_severity(0.0), BottleneckSeverity::Balanced);
        assert_eq!(bottleneck_severity(5.0), BottleneckSeverity::Balanced);
        assert_eq!(bottleneck_severity(5.1), BottleneckSeverity::Moderate);
        assert_eq!(bottleneck_severity(10.0), BottleneckSeverity::Moderate);
        assert_eq!(bottleneck_severity(10.1), BottleneckSeverity::Severe);
        assert_eq!(bottleneck_severity(100.0), BottleneckSeverity::Severe);
    }

    #[test]
    fn test_bottleneck_summary_names_the_component() {
        let balanced = BottleneckReport {
            percentage: 0.0,
            component: LimitingComponent::None,
        };
        assert_eq!(bottleneck_summary(&balanced), "Your system is well balanced.");

        let cpu_bound = BottleneckReport {
            percentage: 12.5,
            component: LimitingComponent::Cpu,
        };
        assert_eq!(bottleneck_summary(&cpu_bound), "CPU is the limiting factor.");
    }

    #[test]
    fn test_balance_note_phrases_the_gap() {
        let gpu_bound = BottleneckReport {
            percentage: 12.5,
            component: LimitingComponent::Gpu,
        };
        let note = balance_note(&gpu_bound);
        assert!(note.contains("GPU is 12.5% weaker than your CPU"));
        assert!(note.contains("graphics-intensive"));
    }

    #[test]
    fn test_build_class_boundaries() {
        assert_eq!(build_class(95.0), BuildClass::MaxSettings);
        assert_eq!(build_class(94.0), BuildClass::AaaHigh);
        assert_eq!(build_class(80.0), BuildClass::AaaHigh);
        assert_eq!(build_class(65.0), BuildClass::MediumHigh);
        assert_eq!(build_class(64.0), BuildClass::EsportsAndOlder);
    }

    #[test]
    fn test_component_commentary_diverges_by_kind() {
        assert!(component_commentary(ComponentKind::Cpu, 95.0).contains("strategy games"));
        assert!(component_commentary(ComponentKind::Gpu, 95.0).contains("ray tracing"));
        assert!(component_commentary(ComponentKind::Cpu, 50.0).contains("upgrading"));
        assert!(component_commentary(ComponentKind::Gpu, 50.0).contains("Entry-level"));
    }
}
