use crate::canvas::{Raster, Surface};
use crate::config::{Color, RenderStyle};
use crate::fill::{self, DegeneratePolygon};
use crate::hand::{Hand, HandSpec, Point};
use crate::line;
use log::debug;

// ============================================================================
// RETAINED MODE ABSTRACTIONS
// ============================================================================

#[derive(Clone, Debug)]
pub enum DrawCommand<'a> {
    Clear(Color),
    Blit(&'a Raster),
    Disc {
        cx: i32,
        cy: i32,
        r: i32,
        color: Color,
    },
    Line {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        smooth: bool,
        color: Color,
    },
    Hand {
        hand: Hand,
        spec: HandSpec,
        origin: Point,
        style: RenderStyle,
    },
}

#[derive(Debug, Default)]
pub struct Scene<'a> {
    commands: Vec<DrawCommand<'a>>,
}

impl<'a> Scene<'a> {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    pub fn add_command(&mut self, command: DrawCommand<'a>) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand<'a>] {
        &self.commands
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        for command in &self.commands {
            match command {
                DrawCommand::Clear(color) => surface.clear(*color),
                DrawCommand::Blit(raster) => surface.blit(raster),
                DrawCommand::Disc { cx, cy, r, color } => {
                    render_disc(surface, *cx, *cy, *r, *color);
                }
                DrawCommand::Line {
                    x0,
                    y0,
                    x1,
                    y1,
                    smooth,
                    color,
                } => {
                    if *smooth {
                        line::draw_line_aa(
                            surface,
                            Point::new(*x0 as f64, *y0 as f64),
                            Point::new(*x1 as f64, *y1 as f64),
                            *color,
                        );
                    } else {
                        surface.draw_line(*x0, *y0, *x1, *y1, *color);
                    }
                }
                DrawCommand::Hand {
                    hand,
                    spec,
                    origin,
                    style,
                } => {
                    if let Err(err) = render_hand(surface, spec, *origin, *style) {
                        debug!("skipping {hand:?} hand this frame: {err}");
                    }
                }
            }
        }
    }
}

/// Brute-force disc: every pixel of the bounding box is tested against the
/// radius.
fn render_disc<S: Surface + ?Sized>(surface: &mut S, cx: i32, cy: i32, r: i32, color: Color) {
    let r2 = r as i64 * r as i64;
    for dy in -r..=r {
        for dx in -r..=r {
            if (dx as i64 * dx as i64) + (dy as i64 * dy as i64) <= r2 {
                surface.draw_point(cx + dx, cy + dy, color);
            }
        }
    }
}

fn render_hand<S: Surface + ?Sized>(
    surface: &mut S,
    spec: &HandSpec,
    origin: Point,
    style: RenderStyle,
) -> Result<(), DegeneratePolygon> {
    match style {
        RenderStyle::Pointillist => {
            let polygon = spec.polygon(origin);
            fill::fill_polygon_pointillist(surface, polygon.points(), spec.color).map(drop)
        }
        RenderStyle::FilledPolygon => {
            let polygon = spec.polygon(origin);
            fill::fill_polygon(surface, polygon.points(), spec.color).map(drop)
        }
        RenderStyle::AntiAliasedStroke => {
            if spec.thickness == 0 || spec.length <= 0.0 {
                return Err(DegeneratePolygon);
            }
            line::draw_thick_line_aa(
                surface,
                origin,
                spec.tip(origin),
                spec.thickness,
                spec.color,
            );
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disc_membership_is_symmetric() {
        let mut raster = Raster::new(21, 21).unwrap();
        let mut scene = Scene::new();
        scene.add_command(DrawCommand::Disc {
            cx: 10,
            cy: 10,
            r: 5,
            color: Color::BLACK,
        });
        scene.render(&mut raster.canvas());

        for (x, y) in [(10, 5), (10, 15), (5, 10), (15, 10), (13, 14)] {
            assert_eq!(raster.pixel(x, y), Some([0, 0, 0, 255]), "({x}, {y})");
        }
        for (x, y) in [(10, 4), (4, 10), (14, 14), (6, 6)] {
            assert_eq!(raster.pixel(x, y), Some([0, 0, 0, 0]), "({x}, {y})");
        }
    }

    #[test]
    fn commands_replay_in_order() {
        let mut raster = Raster::new(4, 4).unwrap();
        let mut scene = Scene::new();
        scene.add_command(DrawCommand::Clear(Color::WHITE));
        scene.add_command(DrawCommand::Line {
            x0: 0,
            y0: 1,
            x1: 3,
            y1: 1,
            smooth: false,
            color: Color::RED,
        });
        scene.add_command(DrawCommand::Line {
            x0: 2,
            y0: 0,
            x1: 2,
            y1: 3,
            smooth: true,
            color: Color::BLUE,
        });
        assert_eq!(scene.commands().len(), 3);
        scene.render(&mut raster.canvas());

        assert_eq!(raster.pixel(0, 1), Some([255, 0, 0, 255]));
        assert_eq!(raster.pixel(2, 1), Some([0, 0, 255, 255]));
        assert_eq!(raster.pixel(0, 0), Some([255, 255, 255, 255]));
    }

    fn assert_hand_draws_nothing(spec: HandSpec) {
        for style in RenderStyle::ALL {
            let mut raster = Raster::new(20, 20).unwrap();
            let mut scene = Scene::new();
            scene.add_command(DrawCommand::Hand {
                hand: Hand::Minute,
                spec,
                origin: Point::new(10.0, 10.0),
                style,
            });
            scene.render(&mut raster.canvas());
            assert!(raster.as_bytes().iter().all(|&b| b == 0), "{style} {spec:?}");
        }
    }

    #[test]
    fn zero_length_hands_are_skipped_in_every_style() {
        for angle in [0.0, 30.0, 135.0] {
            assert_hand_draws_nothing(HandSpec {
                angle,
                length: 0.0,
                thickness: 3,
                color: Color::BLUE,
            });
        }
    }

    #[test]
    fn zero_thickness_hands_are_skipped_in_every_style() {
        assert_hand_draws_nothing(HandSpec {
            angle: 30.0,
            length: 8.0,
            thickness: 0,
            color: Color::RED,
        });
    }
}
