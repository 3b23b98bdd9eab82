use crate::config::Color;
use crate::error::{Error, Result};
use crate::line;

/// Drawing operations the renderer needs from whatever backs the frame.
pub trait Surface {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    fn clear(&mut self, color: Color);

    /// Blends `color` over the pixel at `(x, y)` with the given coverage.
    /// Coordinates outside the surface are ignored.
    fn blend_point(&mut self, x: i32, y: i32, color: Color, alpha: f32);

    fn draw_point(&mut self, x: i32, y: i32, color: Color) {
        self.blend_point(x, y, color, 1.0);
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        line::integer_line(x0, y0, x1, y1, |x, y| self.draw_point(x, y, color));
    }

    /// Composites an offscreen raster onto this surface at the origin.
    fn blit(&mut self, raster: &Raster);
}

/// A view over an RGBA8 buffer, row-major with no padding.
pub struct Canvas<'a> {
    frame: &'a mut [u8],
    width: usize,
    height: usize,
}

impl<'a> Canvas<'a> {
    /// Rows that do not fit in `frame` are dropped from the view.
    pub fn new(frame: &'a mut [u8], width: usize, height: usize) -> Self {
        let rows = frame.len().checked_div(width.saturating_mul(4)).unwrap_or(0);
        Self {
            frame,
            width,
            height: height.min(rows),
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        (x < self.width && y < self.height).then(|| (y * self.width + x) * 4)
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        let idx = self.index(x, y)?;
        let mut out = [0; 4];
        out.copy_from_slice(&self.frame[idx..idx + 4]);
        Some(out)
    }
}

impl Surface for Canvas<'_> {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn clear(&mut self, color: Color) {
        for chunk in self.frame.chunks_exact_mut(4) {
            chunk.copy_from_slice(&[color.r, color.g, color.b, 0xff]);
        }
    }

    fn blend_point(&mut self, x: i32, y: i32, color: Color, alpha: f32) {
        if let Some(idx) = self.index(x, y) {
            let src = [color.r, color.g, color.b];
            blend_over(&mut self.frame[idx..idx + 4], src, alpha);
        }
    }

    fn blit(&mut self, raster: &Raster) {
        let w = raster.width.min(self.width);
        let h = raster.height.min(self.height);
        for y in 0..h {
            for x in 0..w {
                let s = (y * raster.width + x) * 4;
                let a = raster.data[s + 3];
                if a == 0 {
                    continue;
                }
                let d = (y * self.width + x) * 4;
                let src = [raster.data[s], raster.data[s + 1], raster.data[s + 2]];
                blend_over(&mut self.frame[d..d + 4], src, a as f32 / 255.0);
            }
        }
    }
}

/// Source-over compositing of straight-alpha colors. An opaque destination
/// stays opaque; a transparent one takes the source color and coverage.
fn blend_over(dst: &mut [u8], src: [u8; 3], alpha: f32) {
    let sa = alpha.clamp(0.0, 1.0);
    if sa <= 0.0 {
        return;
    }
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    for c in 0..3 {
        let blended = (src[c] as f32 * sa + dst[c] as f32 * da * (1.0 - sa)) / out_a;
        dst[c] = blended.round().clamp(0.0, 255.0) as u8;
    }
    dst[3] = (out_a * 255.0).round() as u8;
}

/// An owned, initially transparent RGBA8 image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl Raster {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::resource(width, height, "raster dimensions must be non-zero"));
        }
        let len = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(|| Error::resource(width, height, "raster size overflows"))?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|err| Error::resource(width, height, err.to_string()))?;
        data.resize(len, 0);
        Ok(Self {
            data,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn canvas(&mut self) -> Canvas<'_> {
        Canvas::new(&mut self.data, self.width, self.height)
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * 4;
        let mut out = [0; 4];
        out.copy_from_slice(&self.data[idx..idx + 4]);
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_raster_is_transparent() {
        let raster = Raster::new(4, 3).unwrap();
        assert_eq!(raster.as_bytes().len(), 4 * 3 * 4);
        assert!(raster.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn zero_sized_raster_is_an_init_failure() {
        assert!(matches!(
            Raster::new(0, 10),
            Err(Error::ResourceInit { width: 0, height: 10, .. })
        ));
        assert!(matches!(
            Raster::new(usize::MAX, 2),
            Err(Error::ResourceInit { .. })
        ));
    }

    #[test]
    fn opaque_point_replaces_pixel() {
        let mut raster = Raster::new(2, 2).unwrap();
        raster.canvas().draw_point(1, 0, Color::new(10, 20, 30));
        assert_eq!(raster.pixel(1, 0), Some([10, 20, 30, 255]));
        assert_eq!(raster.pixel(0, 0), Some([0, 0, 0, 0]));
    }

    #[test]
    fn short_buffer_limits_the_visible_rows() {
        // room for three rows of four pixels
        let mut frame = vec![0u8; 48];
        let mut canvas = Canvas::new(&mut frame, 4, 4);
        assert_eq!(canvas.height(), 3);
        canvas.clear(Color::WHITE);
        canvas.draw_point(0, 3, Color::RED);
        canvas.draw_point(3, 2, Color::RED);
        assert_eq!(canvas.pixel(0, 3), None);
        assert_eq!(canvas.pixel(3, 2), Some([255, 0, 0, 255]));

        let mut overlay = Raster::new(4, 4).unwrap();
        overlay.canvas().draw_point(0, 3, Color::BLUE);
        canvas.blit(&overlay);
        assert_eq!(frame.len(), 48);
        assert_eq!(Canvas::new(&mut [], 4, 4).height(), 0);
    }

    #[test]
    fn out_of_bounds_points_are_ignored() {
        let mut raster = Raster::new(2, 2).unwrap();
        let mut canvas = raster.canvas();
        canvas.draw_point(-1, 0, Color::RED);
        canvas.draw_point(0, 2, Color::RED);
        canvas.draw_point(2, 0, Color::RED);
        assert!(raster.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn half_coverage_over_opaque_mixes_evenly() {
        let mut raster = Raster::new(1, 1).unwrap();
        let mut canvas = raster.canvas();
        canvas.clear(Color::WHITE);
        canvas.blend_point(0, 0, Color::BLACK, 0.5);
        assert_eq!(canvas.pixel(0, 0), Some([128, 128, 128, 255]));
    }

    #[test]
    fn partial_coverage_over_transparent_keeps_color() {
        let mut raster = Raster::new(1, 1).unwrap();
        raster.canvas().blend_point(0, 0, Color::RED, 0.25);
        assert_eq!(raster.pixel(0, 0), Some([255, 0, 0, 64]));
    }

    #[test]
    fn blit_skips_transparent_pixels() {
        let mut overlay = Raster::new(2, 1).unwrap();
        overlay.canvas().draw_point(0, 0, Color::BLUE);

        let mut target = Raster::new(2, 1).unwrap();
        let mut canvas = target.canvas();
        canvas.clear(Color::WHITE);
        canvas.blit(&overlay);
        assert_eq!(canvas.pixel(0, 0), Some([0, 0, 255, 255]));
        assert_eq!(canvas.pixel(1, 0), Some([255, 255, 255, 255]));
    }
}
