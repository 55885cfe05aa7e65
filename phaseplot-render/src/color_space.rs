//! Color space conversions for the two pixel encodings.
//!
//! HSL backs the hue-wheel encoding; CIE Lab (D65 reference white) backs
//! the perceptual encoding. Both chains end in 8-bit sRGB, and channels
//! are clamped to [0, 255] only after the full conversion. Lab inputs
//! here routinely sit outside the sRGB gamut (the chroma circle has
//! radius 100), so out-of-range linear values are normal and must reach
//! the final clamp untouched.

/// D65 reference white, 2° observer, XYZ scaled to Y = 100.
const D65_WHITE: [f64; 3] = [95.047, 100.0, 108.883];

/// CIE inverse-companding constants: ε = (6/29)³ and κ = (29/3)³.
const CIE_EPSILON: f64 = 216.0 / 24389.0;
const CIE_KAPPA: f64 = 24389.0 / 27.0;

/// XYZ (D65) to linear sRGB.
#[rustfmt::skip]
const XYZ_TO_LINEAR_SRGB: [[f64; 3]; 3] = [
    [ 3.2404542, -1.5371385, -0.4985314],
    [-0.9692660,  1.8760108,  0.0415560],
    [ 0.0556434, -0.2040259,  1.0572252],
];

fn multiply(matrix: &[[f64; 3]; 3], vector: &[f64; 3]) -> [f64; 3] {
    let [x, y, z] = *vector;
    [
        matrix[0][0] * x + matrix[0][1] * y + matrix[0][2] * z,
        matrix[1][0] * x + matrix[1][1] * y + matrix[1][2] * z,
        matrix[2][0] * x + matrix[2][1] * y + matrix[2][2] * z,
    ]
}

/// sRGB gamma for one linear channel.
///
/// Negative out-of-gamut values take the linear segment, so they stay
/// finite on their way to the channel clamp.
fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// Quantize one sRGB channel to 8 bits. The single clamp of the whole
/// conversion chain lives here.
fn to_channel(c: f64) -> u8 {
    (c * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Convert a CIE Lab color to 8-bit sRGB.
///
/// Standard Lab → XYZ (D65) → linear sRGB → gamma chain with the CIE
/// two-piece inverse companding.
pub fn lab_to_rgb(l: f64, a: f64, b: f64) -> [u8; 3] {
    let fy = (l + 16.0) / 116.0;
    let fx = fy + a / 500.0;
    let fz = fy - b / 200.0;

    let xr = if fx * fx * fx > CIE_EPSILON {
        fx * fx * fx
    } else {
        (116.0 * fx - 16.0) / CIE_KAPPA
    };
    // κ·ε = 8 exactly, the L threshold between the two pieces
    let yr = if l > CIE_KAPPA * CIE_EPSILON {
        fy * fy * fy
    } else {
        l / CIE_KAPPA
    };
    let zr = if fz * fz * fz > CIE_EPSILON {
        fz * fz * fz
    } else {
        (116.0 * fz - 16.0) / CIE_KAPPA
    };

    let xyz = [
        xr * D65_WHITE[0] / 100.0,
        yr * D65_WHITE[1] / 100.0,
        zr * D65_WHITE[2] / 100.0,
    ];
    let [r, g, b] = multiply(&XYZ_TO_LINEAR_SRGB, &xyz);
    [
        to_channel(linear_to_srgb(r)),
        to_channel(linear_to_srgb(g)),
        to_channel(linear_to_srgb(b)),
    ]
}

/// Convert an HSL color to 8-bit sRGB.
///
/// `h` is in degrees and may be any real value (normalized into
/// [0, 360)); `s` and `l` are fractions in [0, 1].
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> [u8; 3] {
    let h = h.rem_euclid(360.0);
    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let h_prime = h / 60.0;
    let x = chroma * (1.0 - (h_prime % 2.0 - 1.0).abs());
    let (r1, g1, b1) = match h_prime as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = l - chroma / 2.0;
    [to_channel(r1 + m), to_channel(g1 + m), to_channel(b1 + m)]
}
