pub const RED: [u8; 3] = [255, 0, 0];
pub const BLUE: [u8; 3] = [0, 0, 255];

/// Fills a `width × height` RGBA buffer with one opaque colour.
pub fn uniform_rgba(width: usize, height: usize, rgb: [u8; 3]) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = Vec::with_capacity(width * height * 4);
    for _ in 0..width * height {
        img.extend_from_slice(&[rgb[0], rgb[1], rgb[2], 255]);
    }
    img
}

/// Left half `left`, right half `right`; the split is at `width / 2`.
pub fn two_halves_rgba(width: usize, height: usize, left: [u8; 3], right: [u8; 3]) -> Vec<u8> {
    assert!(width > 1 && height > 0, "image must be at least 2 pixels wide");
    let mut img = Vec::with_capacity(width * height * 4);
    for _ in 0..height {
        for x in 0..width {
            let c = if x < width / 2 { left } else { right };
            img.extend_from_slice(&[c[0], c[1], c[2], 255]);
        }
    }
    img
}

/// Coloured blocks on a shaded background with deterministic low-amplitude
/// noise, so both segmenters have structure and texture to work with.
pub fn blocks_with_noise_rgba(width: usize, height: usize, seed: u32) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let palette: [[u8; 3]; 4] = [[200, 40, 40], [40, 180, 60], [50, 60, 210], [230, 210, 60]];
    let mut state = seed.wrapping_mul(747_796_405).wrapping_add(2_891_336_453);
    let mut img = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            let noise = ((state >> 24) % 9) as i32 - 4;
            let bx = x * 4 / width;
            let by = y * 3 / height;
            let inside = (x % (width / 4).max(1)) > 2 && (y % (height / 3).max(1)) > 2;
            let base = if inside {
                palette[(bx + by) % palette.len()]
            } else {
                let shade = (60 + (x + y) * 80 / (width + height)) as u8;
                [shade, shade, shade]
            };
            let px = base.map(|v| (i32::from(v) + noise).clamp(0, 255) as u8);
            img.extend_from_slice(&[px[0], px[1], px[2], 255]);
        }
    }
    img
}
