/// RGBA colour with components in `[0, 1]`.
pub type Rgba = [f32; 4];

/// Opaque colour from 8-bit channels.
pub fn rgb8(r: u8, g: u8, b: u8) -> Rgba {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

/// Opaque colour from hue (wrapping, in turns), saturation and value.
pub fn hsv(h: f32, s: f32, v: f32) -> Rgba {
    let c = v * s;
    let h_prime = h.rem_euclid(1.0) * 6.0;
    let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match h_prime as i32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [r + m, g + m, b + m, 1.0]
}

/// Convert sRGB-encoded channels to linear light, keeping alpha.
pub fn srgb_to_linear(color: Rgba) -> Rgba {
    let channel = |c: f32| {
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    [channel(color[0]), channel(color[1]), channel(color[2]), color[3]]
}

/// Evenly spread, well separated hue for the `index`-th of `count` items.
pub fn spread_hue(index: usize, count: usize) -> f32 {
    if count == 0 {
        0.0
    } else {
        index as f32 / count as f32
    }
}
