//! Color stops for the built-in colormaps

pub(super) const VIRIDIS: &[[u8; 3]] = &[
    [68, 1, 84],
    [72, 40, 120],
    [62, 74, 137],
    [49, 104, 142],
    [38, 130, 142],
    [31, 158, 137],
    [53, 183, 121],
    [109, 205, 89],
    [180, 222, 44],
    [253, 231, 37],
];

pub(super) const INFERNO: &[[u8; 3]] = &[
    [0, 0, 4],
    [27, 12, 65],
    [74, 12, 107],
    [120, 28, 109],
    [165, 44, 96],
    [207, 68, 70],
    [237, 105, 37],
    [251, 155, 6],
    [247, 209, 61],
    [252, 255, 164],
];

pub(super) const MAGMA: &[[u8; 3]] = &[
    [0, 0, 4],
    [24, 15, 61],
    [68, 15, 118],
    [114, 31, 129],
    [158, 47, 127],
    [205, 64, 113],
    [241, 96, 93],
    [253, 149, 103],
    [254, 201, 141],
    [252, 253, 191],
];

pub(super) const GRAY: &[[u8; 3]] = &[[0, 0, 0], [255, 255, 255]];

pub(super) const BLUE_RED: &[[u8; 3]] = &[[0, 0, 255], [255, 255, 255], [255, 0, 0]];

// Cyclic: first and last stops are equal.
pub(super) const PHASE: &[[u8; 3]] = &[
    [168, 120, 13],
    [203, 88, 50],
    [214, 61, 112],
    [192, 69, 177],
    [138, 98, 232],
    [64, 128, 227],
    [14, 143, 158],
    [52, 146, 76],
    [125, 136, 17],
    [168, 120, 13],
];

pub(super) const PORTLAND: &[[u8; 3]] = &[
    [12, 51, 131],
    [10, 136, 186],
    [242, 211, 56],
    [242, 143, 56],
    [217, 30, 30],
];

pub(super) const HOT: &[[u8; 3]] = &[
    [0, 0, 0],
    [255, 0, 0],
    [255, 255, 0],
    [255, 255, 255],
];

/// Samples `stops` at `bins` evenly spaced positions, first and last stop
/// included. `bins` must be non-zero and `stops` must hold at least two colors.
pub(super) fn sample(stops: &[[u8; 3]], bins: usize) -> Vec<[u8; 3]> {
    if bins == 1 {
        return vec![stops[0]];
    }

    let segments = stops.len() - 1;
    (0..bins)
        .map(|k| {
            let position = k as f64 * segments as f64 / (bins - 1) as f64;
            let index = (position.floor() as usize).min(segments - 1);
            let t = position - index as f64;
            lerp(stops[index], stops[index + 1], t)
        })
        .collect()
}

fn lerp(from: [u8; 3], to: [u8; 3], t: f64) -> [u8; 3] {
    let channel = |a: u8, b: u8| -> u8 {
        let value = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
        value.round().clamp(0.0, 255.0) as u8
    };
    [
        channel(from[0], to[0]),
        channel(from[1], to[1]),
        channel(from[2], to[2]),
    ]
}
