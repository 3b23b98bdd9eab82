use clockface::{hand_angles, ClockConfig, DialRenderer, Raster, RenderStyle, TimeOfDay};

const WIDTH: usize = 64;
const HEIGHT: usize = 32;

// Renders 10:10:30 offscreen in every style and prints a coarse preview.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let time = TimeOfDay::new(10, 10, 30).ok_or("invalid time")?;
    let angles = hand_angles(time);

    for style in RenderStyle::ALL {
        let config = ClockConfig::builder()
            .style(style)
            .dial_margin(2)
            .tick_length(3)
            .hand_thickness(1)
            .build();
        let renderer = DialRenderer::new(WIDTH, HEIGHT, config)?;
        let mut frame = Raster::new(WIDTH, HEIGHT)?;
        renderer.render(&mut frame.canvas(), &angles);

        println!("{style}:");
        for y in 0..HEIGHT {
            let row: String = (0..WIDTH)
                .map(|x| match frame.pixel(x, y) {
                    Some([r, g, b, _]) if (r, g, b) == (0xff, 0xff, 0xff) => ' ',
                    Some([0xf0, 0xf0, 0xf0, _]) => '.',
                    Some([r, g, b, _]) if g > r && g > b => 'H',
                    Some([r, g, b, _]) if b > r && b > g => 'M',
                    Some([r, g, b, _]) if r > g && r > b => 'S',
                    _ => '#',
                })
                .collect();
            println!("{row}");
        }
        println!();
    }
    Ok(())
}
