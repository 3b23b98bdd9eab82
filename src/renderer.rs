use crate::angles::HandAngles;
use crate::canvas::Surface;
use crate::config::ClockConfig;
use crate::dial::DialImage;
use crate::error::Result;
use crate::hand::{Hand, HandSpec};
use crate::scene::{DrawCommand, Scene};
use log::debug;

/// Draws clock frames from a cached dial plus freshly built hands.
#[derive(Debug, Clone)]
pub struct DialRenderer {
    config: ClockConfig,
    dial: DialImage,
}

impl DialRenderer {
    pub fn new(width: usize, height: usize, config: ClockConfig) -> Result<Self> {
        let dial = DialImage::generate(width, height, &config)?;
        Ok(Self { config, dial })
    }

    pub fn dial(&self) -> &DialImage {
        &self.dial
    }

    /// Regenerates the dial if the canvas size changed. Returns whether it
    /// did; on error the previous dial is kept.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<bool> {
        if self.dial.size() == (width, height) {
            return Ok(false);
        }
        debug!(
            "canvas resized from {:?} to {width}x{height}, regenerating dial",
            self.dial.size()
        );
        self.dial = DialImage::generate(width, height, &self.config)?;
        Ok(true)
    }

    /// Hour, minute and second hands for the given angles.
    pub fn hand_specs(&self, angles: &HandAngles) -> [HandSpec; 3] {
        let (_, height) = self.dial.size();
        let colors = self.config.hand_colors();
        let lengths = self.config.hand_length_factors();
        let angles = angles.as_array();
        std::array::from_fn(|i| HandSpec {
            angle: angles[i],
            length: height as f64 * lengths[i],
            thickness: self.config.hand_thickness,
            color: colors[i],
        })
    }

    pub fn scene(&self, angles: &HandAngles) -> Scene<'_> {
        let mut scene = Scene::new();
        scene.add_command(DrawCommand::Clear(self.config.background_color));
        scene.add_command(DrawCommand::Blit(self.dial.raster()));

        let origin = self.dial.geometry().center();
        for (hand, spec) in Hand::ALL.into_iter().zip(self.hand_specs(angles)) {
            scene.add_command(DrawCommand::Hand {
                hand,
                spec,
                origin,
                style: self.config.style,
            });
        }
        scene
    }

    /// Renders one frame. Output depends only on `angles` and the cached dial.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, angles: &HandAngles) {
        self.scene(angles).render(surface);
    }
}
