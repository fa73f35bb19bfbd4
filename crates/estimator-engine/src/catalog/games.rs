//! Per-title weighting profiles
//!
//! (title, base FPS on reference hardware, CPU weight, GPU weight). The two
//! weights partition how much each component influences the title and must
//! sum to 1. Esports titles lean CPU-heavy; cinematic AAA titles lean
//! GPU-heavy.

pub(super) const GAMES: &[(&str, f64, f64, f64)] = &[
    ("Cyberpunk 2077", 70.0, 0.4, 0.6),
    ("Valorant", 350.0, 0.7, 0.3),
    ("Call of Duty: Modern Warfare III", 140.0, 0.5, 0.5),
    ("Starfield", 60.0, 0.6, 0.4),
    ("Baldur's Gate 3", 90.0, 0.65, 0.35),
    ("Fortnite", 200.0, 0.6, 0.4),
    ("Apex Legends", 180.0, 0.5, 0.5),
    ("Red Dead Redemption 2", 80.0, 0.4, 0.6),
    ("The Witcher 3: Wild Hunt", 110.0, 0.3, 0.7),
    ("Elden Ring", 60.0, 0.5, 0.5),
    ("Counter-Strike 2", 300.0, 0.7, 0.3),
];
