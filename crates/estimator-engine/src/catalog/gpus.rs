//! GPU benchmark and TDP table
//!
//! (model name, benchmark score 0-100, TDP watts). Same conventions as the
//! CPU table; board-power figures are the reference-card ratings.

pub(super) const GPUS: &[(&str, f64, u32)] = &[
    ("NVIDIA GeForce RTX 5090", 100.0, 500),
    ("NVIDIA GeForce RTX 5080", 95.0, 350),
    ("NVIDIA GeForce RTX 5070 Ti", 91.0, 300),
    ("AMD Radeon RX 9070 XT", 89.0, 320),
    ("NVIDIA GeForce RTX 5070", 85.0, 250),
    ("AMD Radeon RX 9070", 84.0, 280),
    ("Intel Arc Battlemage 24GB", 78.0, 250),
    ("NVIDIA GeForce RTX 5060 Ti", 74.0, 200),
    ("AMD Radeon RX 9060 XT", 73.0, 200),
    ("NVIDIA GeForce RTX 5060", 68.0, 150),
    ("NVIDIA GeForce RTX 5050", 61.0, 120),
    ("NVIDIA GeForce RTX 4090", 98.0, 450),
    ("AMD Radeon RX 7900 XTX", 93.0, 355),
    ("NVIDIA GeForce RTX 3090 Ti", 86.0, 450),
    ("AMD Radeon RX 6950 XT", 82.0, 335),
    ("NVIDIA GeForce RTX 4080 Super", 92.0, 320),
    ("AMD Radeon RX 7900 XT", 88.0, 315),
    ("NVIDIA GeForce RTX 4070 Ti Super", 87.0, 285),
    ("NVIDIA GeForce RTX 3080 Ti", 81.0, 350),
    ("AMD Radeon RX 6900 XT", 79.0, 300),
    ("NVIDIA GeForce RTX 3080", 77.0, 320),
    ("AMD Radeon RX 6800 XT", 76.0, 300),
    ("NVIDIA GeForce RTX 4070 Super", 83.0, 220),
    ("NVIDIA GeForce RTX 3070 Ti", 72.0, 290),
    ("AMD Radeon RX 7800 XT", 80.0, 263),
    ("NVIDIA GeForce RTX 2080 Ti", 66.0, 260),
    ("NVIDIA GeForce RTX 3070", 70.0, 220),
    ("AMD Radeon RX 6800", 71.0, 250),
    ("AMD Radeon RX 7700 XT", 75.0, 245),
    ("NVIDIA GeForce RTX 4060 Ti", 69.0, 160),
    ("AMD Radeon RX 5700 XT", 56.0, 225),
    ("NVIDIA GeForce RTX 3060 Ti", 67.0, 200),
    ("AMD Radeon RX 6700 XT", 65.0, 230),
    ("NVIDIA GeForce RTX 4060", 62.0, 115),
    ("NVIDIA GeForce RTX 2080 Super", 60.0, 250),
    ("NVIDIA GeForce GTX 1080 Ti", 55.0, 250),
    ("AMD Radeon RX 6700", 59.0, 175),
    ("NVIDIA GeForce RTX 3060", 58.0, 170),
    ("AMD Radeon RX 7600", 63.0, 165),
    ("NVIDIA GeForce RTX 2070 Super", 57.0, 215),
    ("AMD Radeon RX 6600 XT", 54.0, 160),
    ("AMD Radeon RX 5700", 50.0, 180),
    ("NVIDIA GeForce RTX 2060 Super", 52.0, 175),
    ("AMD Radeon RX 6600", 49.0, 132),
    ("NVIDIA GeForce GTX 1080", 45.0, 180),
    ("AMD Radeon RX 5600 XT", 46.0, 150),
    ("NVIDIA GeForce RTX 2060", 48.0, 160),
    ("Intel Arc A770", 53.0, 225),
    ("NVIDIA GeForce GTX 1660 Super", 40.0, 125),
    ("AMD Radeon RX 590", 34.0, 225),
    ("AMD Radeon RX 580", 32.0, 185),
    ("NVIDIA GeForce GTX 1070", 39.0, 150),
    ("NVIDIA GeForce GTX 1660", 38.0, 120),
    ("AMD Radeon RX 5500 XT", 36.0, 130),
    ("NVIDIA GeForce GTX 970", 28.0, 145),
    ("AMD Radeon RX 570", 29.0, 150),
    ("NVIDIA GeForce GTX 1650 Super", 30.0, 100),
    ("NVIDIA GeForce GTX 1060", 31.0, 120),
    ("Intel Arc A380", 22.0, 75),
    ("NVIDIA GeForce GTX 1650", 24.0, 75),
    ("NVIDIA GeForce GTX 1050 Ti", 18.0, 75),
    ("NVIDIA GeForce GTX 750 Ti", 10.0, 60),
];
