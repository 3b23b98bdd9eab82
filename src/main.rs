use chrono::NaiveTime;
use clap::Parser;
use clockface::{Clock, ClockConfig, FixedTime, RenderStyle, TimeOfDay};
use log::info;
use simplelog::{Config as LogConfig, LevelFilter, SimpleLogger};
use std::error::Error;

#[derive(Debug, Parser)]
#[command(name = "clockface", about = "Software-rendered analog clock")]
struct Args {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 800)]
    width: usize,
    /// Window height in logical pixels
    #[arg(long, default_value_t = 600)]
    height: usize,
    #[arg(long, default_value_t = 30)]
    fps: u32,
    /// pointillist, filled-polygon or anti-aliased-stroke
    #[arg(long, default_value_t = RenderStyle::FilledPolygon)]
    style: RenderStyle,
    /// Number of hour ticks around the dial
    #[arg(long, default_value_t = 12)]
    ticks: usize,
    /// Also draw a short tick for every minute
    #[arg(long)]
    minute_ticks: bool,
    #[arg(long, default_value_t = 3)]
    thickness: u32,
    #[arg(long, default_value = "Analog Clock")]
    title: String,
    /// Freeze the clock at HH:MM:SS instead of following local time
    #[arg(long, value_parser = parse_time)]
    fixed: Option<TimeOfDay>,
    #[arg(short, long)]
    verbose: bool,
}

fn parse_time(s: &str) -> Result<TimeOfDay, String> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .map(|time| TimeOfDay::from_timelike(&time))
        .map_err(|err| format!("expected HH:MM:SS: {err}"))
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    SimpleLogger::init(level, LogConfig::default())?;

    let config = ClockConfig::builder()
        .title(args.title)
        .window_width(args.width)
        .window_height(args.height)
        .target_fps(args.fps)
        .style(args.style)
        .tick_count(args.ticks)
        .minute_ticks(args.minute_ticks)
        .hand_thickness(args.thickness)
        .build();

    let clock = Clock::new(config);
    match args.fixed {
        Some(time) => {
            info!("showing fixed time {time:?}");
            clock.show_with_source(FixedTime(time))?
        }
        None => clock.show()?,
    }
    Ok(())
}
