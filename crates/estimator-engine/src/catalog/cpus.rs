//! CPU benchmark and TDP table
//!
//! (model name, benchmark score 0-100, TDP watts). Scores are hand-curated
//! relative gaming-performance ratings; TDP figures are the manufacturer
//! rated values.

pub(super) const CPUS: &[(&str, f64, u32)] = &[
    ("AMD Ryzen 9 9950X3D", 100.0, 180),
    ("AMD Ryzen 9 9900X3D", 99.0, 150),
    ("AMD Ryzen 7 9800X3D", 98.0, 130),
    ("AMD Ryzen 9 9950X", 97.0, 170),
    ("Intel Core Ultra 9 285K", 96.0, 250),
    ("AMD Ryzen 9 9900X", 95.0, 150),
    ("AMD Ryzen 7 9700X", 94.0, 120),
    ("Intel Core Ultra 7 265K", 93.0, 180),
    ("AMD Ryzen 5 9600X", 91.0, 105),
    ("Intel Core i9-14900K", 90.0, 253),
    ("AMD Ryzen 9 7950X3D", 89.0, 120),
    ("Intel Core i9-13900K", 88.0, 253),
    ("AMD Ryzen 7 7800X3D", 87.0, 120),
    ("Intel Core i7-14700K", 86.0, 253),
    ("AMD Ryzen 9 7900X", 85.0, 170),
    ("Intel Core i9-12900K", 84.0, 241),
    ("AMD Ryzen 7 7700X", 82.0, 105),
    ("Intel Core i5-14600K", 81.0, 181),
    ("Intel Core i7-13700K", 80.0, 253),
    ("Intel Core i5-13600K", 79.0, 181),
    ("AMD Ryzen 9 5950X", 77.0, 105),
    ("AMD Ryzen 5 7600X", 76.0, 105),
    ("AMD Ryzen 5 7600", 74.0, 65),
    ("AMD Ryzen 7 5800X3D", 73.0, 105),
    ("Intel Core i9-11900K", 71.0, 125),
    ("AMD Ryzen 7 5800X", 70.0, 105),
    ("Intel Core i5-12400", 69.0, 65),
    ("Intel Core i7-11700K", 68.0, 125),
    ("Intel Core i5-12600K", 67.0, 150),
    ("AMD Ryzen 9 3950X", 66.0, 105),
    ("AMD Ryzen 5 5600X", 65.0, 65),
    ("Intel Core i9-10900K", 64.0, 125),
    ("AMD Ryzen 9 3900X", 63.0, 105),
    ("Intel Core i5-11600K", 62.0, 125),
    ("AMD Ryzen 7 3700X", 60.0, 65),
    ("Intel Core i7-10700K", 59.0, 125),
    ("Intel Core i9-9900K", 57.0, 95),
    ("AMD Ryzen 5 3600X", 56.0, 95),
    ("AMD Ryzen 5 3600", 54.0, 65),
    ("Intel Core i5-10600K", 53.0, 125),
    ("AMD Ryzen 7 2700X", 51.0, 105),
    ("Intel Core i5-9600K", 49.0, 95),
    ("Intel Core i7-8700K", 47.0, 95),
];
