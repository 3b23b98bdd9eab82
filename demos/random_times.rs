use clockface::{Clock, ClockConfig, RenderStyle, TimeOfDay, TimeSource};
use rand::Rng;

/// Jumps to a random time every few reads so every hand angle gets exercised.
struct RandomTime {
    current: TimeOfDay,
    reads: u32,
}

impl TimeSource for RandomTime {
    fn now(&mut self) -> TimeOfDay {
        self.reads += 1;
        if self.reads % 5 == 0 {
            let mut rng = rand::rng();
            if let Some(time) = TimeOfDay::new(
                rng.random_range(0..24),
                rng.random_range(0..60),
                rng.random_range(0..60),
            ) {
                self.current = time;
            }
        }
        self.current
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ClockConfig::builder()
        .title("Random times".to_string())
        .window_width(400)
        .window_height(400)
        .style(RenderStyle::AntiAliasedStroke)
        .minute_ticks(true)
        .build();

    println!("Displaying a clock that jumps to a random time about once a second");
    println!("Close the window to exit");

    Clock::new(config).show_with_source(RandomTime {
        current: TimeOfDay::MIDNIGHT,
        reads: 0,
    })?;
    Ok(())
}
