use crate::canvas::Raster;
use crate::config::ClockConfig;
use crate::error::Result;
use crate::hand::Point;
use crate::scene::{DrawCommand, Scene};
use log::debug;
use std::f64::consts::TAU;

/// Where the dial sits on a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialGeometry {
    pub cx: i32,
    pub cy: i32,
    pub radius: i32,
}

impl DialGeometry {
    pub fn new(width: usize, height: usize, margin: i32) -> Self {
        Self {
            cx: width as i32 / 2,
            cy: height as i32 / 2,
            radius: (width.min(height) as i32) / 2 - margin,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.cx as f64, self.cy as f64)
    }

    /// Integer pixel at `distance` from the centre along `angle` radians.
    fn polar(&self, angle: f64, distance: f64) -> (i32, i32) {
        (
            self.cx + (distance * angle.cos()) as i32,
            self.cy + (distance * angle.sin()) as i32,
        )
    }
}

/// The static face, rendered once into an offscreen image.
#[derive(Debug, Clone)]
pub struct DialImage {
    raster: Raster,
    geometry: DialGeometry,
}

impl DialImage {
    pub fn generate(width: usize, height: usize, config: &ClockConfig) -> Result<Self> {
        let mut raster = Raster::new(width, height)?;
        let geometry = DialGeometry::new(width, height, config.dial_margin);
        if geometry.radius > 0 {
            dial_scene(&geometry, config).render(&mut raster.canvas());
            debug!("generated {width}x{height} dial, radius {}", geometry.radius);
        } else {
            debug!("{width}x{height} canvas leaves no room for a dial");
        }
        Ok(Self { raster, geometry })
    }

    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    pub fn geometry(&self) -> DialGeometry {
        self.geometry
    }

    pub fn size(&self) -> (usize, usize) {
        (self.raster.width(), self.raster.height())
    }
}

fn dial_scene(dial: &DialGeometry, config: &ClockConfig) -> Scene<'static> {
    let mut scene = Scene::new();
    let smooth = config.style.is_smooth();
    let color = config.outline_color;
    let r = dial.radius as f64;

    scene.add_command(DrawCommand::Disc {
        cx: dial.cx,
        cy: dial.cy,
        r: dial.radius,
        color: config.face_color,
    });

    // Outline as a closed polyline
    let segments = config.outline_segments;
    let step = TAU / segments.max(1) as f64;
    for i in 0..segments {
        let (x0, y0) = dial.polar(i as f64 * step, r);
        let (x1, y1) = dial.polar((i + 1) as f64 * step, r);
        scene.add_command(DrawCommand::Line {
            x0,
            y0,
            x1,
            y1,
            smooth,
            color,
        });
    }

    let mut add_tick = |angle: f64, length: i32| {
        let (x0, y0) = dial.polar(angle, r - length as f64);
        let (x1, y1) = dial.polar(angle, r);
        scene.add_command(DrawCommand::Line {
            x0,
            y0,
            x1,
            y1,
            smooth,
            color,
        });
    };

    // Hour ticks
    let ticks = config.tick_count;
    for i in 0..ticks {
        add_tick(TAU * i as f64 / ticks as f64, config.tick_length);
    }

    // Minute ticks, skipping positions already taken by an hour tick
    if config.minute_ticks {
        for m in 0..60 {
            if ticks > 0 && (m * ticks) % 60 == 0 {
                continue;
            }
            add_tick(TAU * m as f64 / 60.0, config.minute_tick_length);
        }
    }

    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Color, RenderStyle};
    use crate::error::Error;

    const FACE: [u8; 4] = [0xf0, 0xf0, 0xf0, 0xff];
    const INK: [u8; 4] = [0x00, 0x00, 0x00, 0xff];
    const CLEAR: [u8; 4] = [0x00, 0x00, 0x00, 0x00];

    fn px(dial: &DialImage, x: i32, y: i32) -> [u8; 4] {
        dial.raster().pixel(x as usize, y as usize).unwrap()
    }

    #[test]
    fn geometry_uses_the_shorter_side() {
        let g = DialGeometry::new(800, 600, 20);
        assert_eq!(g, DialGeometry { cx: 400, cy: 300, radius: 280 });
    }

    #[test]
    fn face_is_inside_and_corners_are_transparent() {
        let config = ClockConfig::builder().window_width(200).window_height(200).build();
        let dial = DialImage::generate(200, 200, &config).unwrap();
        let g = dial.geometry();
        assert_eq!(g.radius, 80);
        assert_eq!(px(&dial, g.cx, g.cy), FACE);
        assert_eq!(px(&dial, g.cx + 40, g.cy - 30), FACE);
        assert_eq!(px(&dial, 0, 0), CLEAR);
        assert_eq!(px(&dial, 199, 199), CLEAR);
        assert_eq!(px(&dial, g.cx + g.radius + 2, g.cy), CLEAR);
    }

    #[test]
    fn outline_and_hour_ticks_are_inked() {
        let config = ClockConfig::default();
        let dial = DialImage::generate(200, 200, &config).unwrap();
        let g = dial.geometry();
        // rightmost point of the ring
        assert_eq!(px(&dial, g.cx + g.radius, g.cy), INK);
        // twelve o'clock tick runs straight down from the top of the ring
        for d in [1, 5, 10, 15] {
            assert_eq!(px(&dial, g.cx, g.cy - g.radius + d), INK, "depth {d}");
        }
        assert_eq!(px(&dial, g.cx, g.cy - g.radius + 20), FACE);
        // six o'clock tick
        assert_eq!(px(&dial, g.cx, g.cy + g.radius - 8), INK);
    }

    #[test]
    fn minute_ticks_are_optional() {
        let plain = ClockConfig::default();
        let fine = ClockConfig::builder().minute_ticks(true).build();
        let a = DialImage::generate(300, 300, &plain).unwrap();
        let b = DialImage::generate(300, 300, &fine).unwrap();
        assert_ne!(a.raster(), b.raster());

        // inner end of the tick one minute past twelve
        let g = b.geometry();
        let angle = TAU * 46.0 / 60.0;
        let (x, y) = g.polar(angle, g.radius as f64 - 6.0);
        assert_eq!(px(&b, x, y), INK);
        assert_eq!(px(&a, x, y), FACE);
    }

    #[test]
    fn generation_is_idempotent() {
        for style in RenderStyle::ALL {
            let config = ClockConfig::builder().style(style).minute_ticks(true).build();
            let first = DialImage::generate(320, 240, &config).unwrap();
            let second = DialImage::generate(320, 240, &config).unwrap();
            assert_eq!(first.raster(), second.raster(), "{style}");
        }
    }

    #[test]
    fn smooth_style_blends_the_ring() {
        let config = ClockConfig::builder()
            .style(RenderStyle::AntiAliasedStroke)
            .face_color(Color::WHITE)
            .build();
        let dial = DialImage::generate(200, 200, &config).unwrap();
        let partial = dial
            .raster()
            .as_bytes()
            .chunks_exact(4)
            .filter(|p| p[3] == 0xff && p[0] > 0 && p[0] < 0xff)
            .count();
        assert!(partial > 0);
    }

    #[test]
    fn tiny_canvas_has_no_face() {
        let config = ClockConfig::default();
        let dial = DialImage::generate(30, 30, &config).unwrap();
        assert!(dial.geometry().radius <= 0);
        assert!(dial.raster().as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn empty_canvas_fails_to_initialise() {
        let config = ClockConfig::default();
        assert!(matches!(
            DialImage::generate(0, 600, &config),
            Err(Error::ResourceInit { .. })
        ));
    }
}
