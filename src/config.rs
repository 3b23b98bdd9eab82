use bon::Builder;
use std::fmt;
use std::str::FromStr;

/// Color representation for clock elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::new(0xff, 0xff, 0xff);
    pub const RED: Color = Color::new(0xff, 0x00, 0x00);
    pub const GREEN: Color = Color::new(0x00, 0xff, 0x00);
    pub const BLUE: Color = Color::new(0x00, 0x00, 0xff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn as_tuple(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

/// How hands and dial line work are rasterized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStyle {
    /// Per-pixel membership test over the hand's bounding box.
    Pointillist,
    /// Scan-line fill of the hand silhouette.
    #[default]
    FilledPolygon,
    /// Parallel Wu lines, blended by coverage.
    AntiAliasedStroke,
}

impl RenderStyle {
    pub const ALL: [RenderStyle; 3] = [
        RenderStyle::Pointillist,
        RenderStyle::FilledPolygon,
        RenderStyle::AntiAliasedStroke,
    ];

    pub fn is_smooth(self) -> bool {
        self == RenderStyle::AntiAliasedStroke
    }

    fn name(self) -> &'static str {
        match self {
            RenderStyle::Pointillist => "pointillist",
            RenderStyle::FilledPolygon => "filled-polygon",
            RenderStyle::AntiAliasedStroke => "anti-aliased-stroke",
        }
    }
}

impl fmt::Display for RenderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RenderStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RenderStyle::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "unknown render style `{s}`, expected one of: pointillist, filled-polygon, anti-aliased-stroke"
                )
            })
    }
}

#[derive(Debug, Clone, Builder)]
pub struct ClockConfig {
    #[builder(default = "Analog Clock".to_string())]
    pub title: String,

    // Window configuration
    #[builder(default = 800)]
    pub window_width: usize,
    #[builder(default = 600)]
    pub window_height: usize,
    #[builder(default = 30)]
    pub target_fps: u32,
    /// How often the time source is polled, in milliseconds
    #[builder(default = 200)]
    pub poll_interval_ms: u64,

    // Dial configuration
    #[builder(default = 20)]
    pub dial_margin: i32,
    #[builder(default = 120)]
    pub outline_segments: usize,
    #[builder(default = 12)]
    pub tick_count: usize,
    #[builder(default = 15)]
    pub tick_length: i32,
    #[builder(default = false)]
    pub minute_ticks: bool,
    #[builder(default = 6)]
    pub minute_tick_length: i32,

    // Hand configuration, lengths are fractions of the canvas height
    #[builder(default = 0.2)]
    pub hour_hand_length_factor: f64,
    #[builder(default = 0.3)]
    pub minute_hand_length_factor: f64,
    #[builder(default = 0.35)]
    pub second_hand_length_factor: f64,
    #[builder(default = 3)]
    pub hand_thickness: u32,
    #[builder(default = RenderStyle::FilledPolygon)]
    pub style: RenderStyle,

    // Colors
    #[builder(default = Color::WHITE)]
    pub background_color: Color,
    #[builder(default = Color::new(0xf0, 0xf0, 0xf0))]
    pub face_color: Color,
    #[builder(default = Color::BLACK)]
    pub outline_color: Color,
    #[builder(default = Color::GREEN)]
    pub hour_hand_color: Color,
    #[builder(default = Color::BLUE)]
    pub minute_hand_color: Color,
    #[builder(default = Color::RED)]
    pub second_hand_color: Color,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ClockConfig {
    /// Hour, minute and second hand colors, in that order.
    pub fn hand_colors(&self) -> [Color; 3] {
        [
            self.hour_hand_color,
            self.minute_hand_color,
            self.second_hand_color,
        ]
    }

    pub fn hand_length_factors(&self) -> [f64; 3] {
        [
            self.hour_hand_length_factor,
            self.minute_hand_length_factor,
            self.second_hand_length_factor,
        ]
    }
}
