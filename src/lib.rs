// ============================================================================
// CRATE CONFIGURATION & IMPORTS
// ============================================================================

pub mod angles;
pub mod canvas;
pub mod config;
pub mod dial;
pub mod error;
pub mod fill;
pub mod hand;
pub mod line;
pub mod renderer;
pub mod scene;
pub mod time_source;

pub use angles::{hand_angles, HandAngles};
pub use canvas::{Canvas, Raster, Surface};
pub use config::{ClockConfig, Color, RenderStyle};
pub use error::{Error, Result};
pub use renderer::DialRenderer;
pub use time_source::{FixedTime, SystemClock, TickingTime, TimeOfDay, TimeSource};

// External crate imports
use log::{info, warn};
use pixels::{Pixels, SurfaceTexture};

// Standard library imports
use std::sync::Arc;
use std::time::{Duration, Instant};

// Window management imports
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

// ============================================================================
// PUBLIC API - MAIN INTERFACE
// ============================================================================

/// Main clock struct - the primary public interface
#[derive(Debug, Clone)]
pub struct Clock {
    config: ClockConfig,
}

impl Clock {
    pub fn new(config: ClockConfig) -> Self {
        Self { config }
    }

    /// Opens a window showing local time until it is closed.
    pub fn show(&self) -> Result<()> {
        self.show_with_source(SystemClock)
    }

    pub fn show_with_source<T: TimeSource>(&self, source: T) -> Result<()> {
        self.run_window(source)
    }

    fn run_window<T: TimeSource>(&self, mut source: T) -> Result<()> {
        let event_loop = EventLoop::new()?;
        let window = WindowBuilder::new()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(
                self.config.window_width as f64,
                self.config.window_height as f64,
            ))
            .with_resizable(false)
            .build(&event_loop)?;

        let window = Arc::new(window);
        let window_clone = window.clone();
        let size = window.inner_size();
        let mut fb_width = size.width as usize;
        let mut fb_height = size.height as usize;
        let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
        let mut pixels = Pixels::new(size.width, size.height, surface_texture)?;

        let mut renderer = DialRenderer::new(fb_width, fb_height, self.config.clone())?;
        info!(
            "clock window {}x{} at {} fps, {} hands",
            fb_width, fb_height, self.config.target_fps, self.config.style
        );

        let frame_duration = Duration::from_secs_f64(1.0 / self.config.target_fps.max(1) as f64);
        let mut last_frame = Instant::now();
        let mut loop_state = LoopState::new(Duration::from_millis(self.config.poll_interval_ms));
        let mut failure: Option<Error> = None;

        event_loop.run(|event, window_target| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    info!("close requested");
                    window_target.exit();
                }
                WindowEvent::Resized(new_size) => {
                    // minimised windows report a zero size
                    if new_size.width == 0 || new_size.height == 0 {
                        return;
                    }
                    let (width, height) = (new_size.width as usize, new_size.height as usize);
                    let resized = pixels
                        .resize_buffer(new_size.width, new_size.height)
                        .and_then(|_| pixels.resize_surface(new_size.width, new_size.height))
                        .map_err(Error::from)
                        .and_then(|_| renderer.resize(width, height));
                    match resized {
                        Ok(_) => {
                            fb_width = width;
                            fb_height = height;
                            loop_state.invalidate();
                        }
                        Err(err) => {
                            failure = Some(err);
                            window_target.exit();
                        }
                    }
                }
                WindowEvent::RedrawRequested => {
                    let time = loop_state.frame_time(&mut source);
                    let angles = hand_angles(time);
                    let mut canvas = Canvas::new(pixels.frame_mut(), fb_width, fb_height);
                    renderer.render(&mut canvas, &angles);
                    if let Err(err) = pixels.render() {
                        warn!("failed to present frame: {err}");
                        failure = Some(err.into());
                        window_target.exit();
                        return;
                    }
                    loop_state.mark_drawn(time);
                }
                _ => {}
            },
            Event::AboutToWait => {
                // Limit polling to the target frame rate
                if last_frame.elapsed() >= frame_duration {
                    last_frame = Instant::now();
                    if loop_state.poll(last_frame, &mut source) {
                        window_clone.request_redraw();
                    }
                }
                window_target.set_control_flow(ControlFlow::WaitUntil(last_frame + frame_duration));
            }
            _ => {}
        })?;

        failure.map_or(Ok(()), Err)
    }
}

// ============================================================================
// FRAME LOOP STATE
// ============================================================================

/// Bookkeeping owned by the event loop: when the time source was last read,
/// what it said, and what is currently on screen.
#[derive(Debug, Clone)]
pub struct LoopState {
    poll_interval: Duration,
    last_poll: Option<Instant>,
    current: Option<TimeOfDay>,
    last_drawn: Option<TimeOfDay>,
}

impl LoopState {
    pub fn new(poll_interval: Duration) -> Self {
        Self {
            poll_interval,
            last_poll: None,
            current: None,
            last_drawn: None,
        }
    }

    /// Reads the source if the poll interval has elapsed. Returns true when
    /// the screen no longer shows the current time.
    pub fn poll<T: TimeSource + ?Sized>(&mut self, now: Instant, source: &mut T) -> bool {
        let due = self
            .last_poll
            .map_or(true, |last| now.saturating_duration_since(last) >= self.poll_interval);
        if due {
            self.current = Some(source.now());
            self.last_poll = Some(now);
        }
        self.needs_redraw()
    }

    pub fn needs_redraw(&self) -> bool {
        self.current.is_some() && self.current != self.last_drawn
    }

    /// Time to draw now, reading the source if it was never polled.
    pub fn frame_time<T: TimeSource + ?Sized>(&mut self, source: &mut T) -> TimeOfDay {
        *self.current.get_or_insert_with(|| source.now())
    }

    pub fn mark_drawn(&mut self, time: TimeOfDay) {
        self.last_drawn = Some(time);
    }

    /// Forces the next poll to request a redraw, e.g. after a resize.
    pub fn invalidate(&mut self) {
        self.last_drawn = None;
    }
}
