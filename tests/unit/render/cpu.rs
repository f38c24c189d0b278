use super::*;
use crate::foundation::core::Vec2;

fn settings() -> RenderSettings {
    RenderSettings {
        background_rgba: [0, 0, 0, 255],
        hex_size: 10.0,
        offset: Vec2::ZERO,
    }
}

fn canvas(w: u32, h: u32) -> CpuCanvas {
    CpuCanvas::new(Canvas::new(w, h).unwrap(), settings()).unwrap()
}

fn pixel(frame: &FrameRGBA, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * frame.width + x) * 4) as usize;
    [
        frame.data[i],
        frame.data[i + 1],
        frame.data[i + 2],
        frame.data[i + 3],
    ]
}

fn red_at(x: f64, y: f64) -> HexPixel {
    HexPixel {
        id: 1,
        x,
        y,
        color: Rgba::new(255, 0, 0, 1.0),
        matching_value: Some(0.0),
    }
}

#[test]
fn empty_frame_is_background() {
    let mut c = canvas(16, 8);
    let frame = c.compose(&[]).unwrap();
    assert_eq!((frame.width, frame.height), (16, 8));
    assert!(frame.premultiplied);
    assert!(frame.data.chunks_exact(4).all(|px| px == [0, 0, 0, 255]));
}

#[test]
fn hexagon_is_drawn_around_projected_point() {
    let mut c = canvas(64, 64);
    let p = red_at(0.0, 0.0);
    assert_eq!(c.project(&p), Point::new(32.0, 32.0));

    let frame = c.compose(&[p]).unwrap();
    assert_eq!(pixel(&frame, 32, 32), [255, 0, 0, 255]);
    assert_eq!(pixel(&frame, 2, 2), [0, 0, 0, 255]);
    assert_eq!(pixel(&frame, 50, 32), [0, 0, 0, 255]);
}

#[test]
fn offset_translates_the_point_cloud() {
    let mut c = CpuCanvas::new(
        Canvas::new(64, 64).unwrap(),
        RenderSettings {
            offset: Vec2::new(-20.0, -20.0),
            ..settings()
        },
    )
    .unwrap();
    let frame = c.compose(&[red_at(0.0, 0.0)]).unwrap();
    assert_eq!(pixel(&frame, 12, 12), [255, 0, 0, 255]);
    assert_eq!(pixel(&frame, 32, 32), [0, 0, 0, 255]);
}

#[test]
fn neon_strokes_persist_and_fade() {
    let mut c = canvas(64, 32);
    let seg = Segment {
        from: Point::new(10.0, 10.5),
        to: Point::new(50.0, 10.5),
        color: Rgba::new(56, 189, 248, 1.0),
        width: 4.0,
    };
    c.draw_neon(&[seg], 0.2).unwrap();
    let lit = pixel(&c.compose(&[]).unwrap(), 30, 10);
    assert!(lit[2] > 200, "{lit:?}");

    for _ in 0..10 {
        c.draw_neon(&[], 0.2).unwrap();
    }
    let faded = pixel(&c.compose(&[]).unwrap(), 30, 10);
    assert!(faded[2] < lit[2] / 4, "{faded:?}");
    assert_eq!(faded[3], 255);
}

#[test]
fn hexes_draw_above_the_trail() {
    let mut c = canvas(64, 64);
    let seg = Segment {
        from: Point::new(0.0, 32.5),
        to: Point::new(64.0, 32.5),
        color: Rgba::new(0, 0, 255, 1.0),
        width: 6.0,
    };
    c.draw_neon(&[seg], 0.2).unwrap();
    let frame = c.compose(&[red_at(0.0, 0.0)]).unwrap();
    assert_eq!(pixel(&frame, 32, 32), [255, 0, 0, 255]);
}

#[test]
fn resize_reallocates_and_clears_the_trail() {
    let mut c = canvas(32, 32);
    let seg = Segment {
        from: Point::new(0.0, 5.0),
        to: Point::new(32.0, 5.0),
        color: Rgba::new(255, 255, 255, 1.0),
        width: 3.0,
    };
    c.draw_neon(&[seg], 0.0).unwrap();
    assert!(c.trail().iter().any(|&b| b > 0));

    c.resize(Canvas::new(48, 20).unwrap()).unwrap();
    assert_eq!(c.size(), Canvas::new(48, 20).unwrap());
    assert_eq!(c.trail().len(), 48 * 20 * 4);
    assert!(c.trail().iter().all(|&b| b == 0));
    assert_eq!(c.compose(&[]).unwrap().data.len(), 48 * 20 * 4);
}

#[test]
fn invalid_settings_and_oversized_canvas_are_rejected() {
    let bad = RenderSettings {
        hex_size: 0.0,
        ..settings()
    };
    assert!(CpuCanvas::new(Canvas::new(8, 8).unwrap(), bad).is_err());
    assert!(CpuCanvas::new(Canvas::new(70_000, 8).unwrap(), settings()).is_err());
}

#[test]
fn straight_conversion_undoes_premultiplication() {
    let frame = FrameRGBA {
        width: 1,
        height: 1,
        data: vec![128, 0, 0, 128],
        premultiplied: true,
    };
    assert_eq!(frame.to_straight_rgba8(), vec![255, 0, 0, 128]);
}
