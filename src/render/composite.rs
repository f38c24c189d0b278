use crate::foundation::error::{HexError, HexResult};

pub type PremulRgba8 = [u8; 4];

/// Straight RGBA8 to premultiplied.
pub fn premultiply(rgba: [u8; 4]) -> PremulRgba8 {
    let a = u16::from(rgba[3]);
    [
        mul_div255(u16::from(rgba[0]), a),
        mul_div255(u16::from(rgba[1]), a),
        mul_div255(u16::from(rgba[2]), a),
        rgba[3],
    ]
}

pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = ((opacity * 255.0).round() as i32).clamp(0, 255) as u16;
    let sa = mul_div255(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = add_sat_u8(sa, mul_div255(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255(u16::from(src[i]), op);
        let dc = mul_div255(u16::from(dst[i]), inv);
        out[i] = add_sat_u8(sc, dc);
    }
    out
}

pub fn over_in_place(dst: &mut [u8], src: &[u8], opacity: f32) -> HexResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(HexError::render(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], opacity);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Scale every premultiplied channel of `buf` by `1 - amount`.
///
/// Applied once per frame this leaves fading trails behind moving strokes while the layer
/// beneath shows through where nothing was drawn recently.
pub fn fade_in_place(buf: &mut [u8], amount: f32) -> HexResult<()> {
    if !buf.len().is_multiple_of(4) {
        return Err(HexError::render("fade expects an rgba8 buffer"));
    }
    let amount = amount.clamp(0.0, 1.0);
    let keep = 255u16 - ((amount * 255.0).round() as i32).clamp(0, 255) as u16;
    if keep == 255 {
        return Ok(());
    }
    for c in buf.iter_mut() {
        *c = mul_div255(u16::from(*c), keep);
    }
    Ok(())
}

/// Fill `buf` with a single premultiplied color.
pub fn fill_in_place(buf: &mut [u8], color: PremulRgba8) -> HexResult<()> {
    if !buf.len().is_multiple_of(4) {
        return Err(HexError::render("fill expects an rgba8 buffer"));
    }
    for px in buf.chunks_exact_mut(4) {
        px.copy_from_slice(&color);
    }
    Ok(())
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
