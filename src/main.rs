use knob::{Knob, KnobCommand, KnobConfig, Point, SnapMode};
use rand::Rng;
use std::env;
use std::sync::mpsc::{self, Sender};
use std::thread;
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let snap_mode = if env::args().any(|arg| arg == "--nearest") {
        SnapMode::Nearest
    } else {
        SnapMode::Floor
    };
    let config = KnobConfig::builder()
        .title("Knob".to_string())
        .snap_mode(snap_mode)
        .build();
    let knob_width = config.knob_width;
    let mut knob = Knob::new(config);

    println!("Drag the knob with the mouse or a finger.");
    println!("- Up/Down: change step size");
    println!("- R: reset to 0°");

    if !env::args().any(|arg| arg == "--simulate") {
        return Ok(knob.show()?);
    }

    // A second "finger" making random drags through the command channel
    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || simulate_drags(&sender, knob_width));

    println!("- Simulated drags running, press Ctrl+C to exit");
    knob.show_with_commands(receiver)?;
    Ok(())
}

fn simulate_drags(sender: &Sender<KnobCommand>, knob_width: f64) {
    let mut rng = rand::rng();
    let center = Point::center_of(knob_width);
    let radius = knob_width / 3.0;

    loop {
        if rng.random_bool(0.2) {
            let step = [5.0, 10.0, 15.0, 30.0][rng.random_range(0..4)];
            if sender.send(KnobCommand::SetStep(step)).is_err() {
                break;
            }
        }

        let start: f64 = rng.random_range(0.0..360.0);
        let sweep: f64 = rng.random_range(20.0..200.0);
        let speed: f64 = rng.random_range(0.5..3.0);
        let samples = (sweep / speed).ceil() as u32;

        let drag = (0..=samples)
            .map(|i| {
                let radians = (start + f64::from(i) * speed).to_radians();
                KnobCommand::PointerMove(Point::new(
                    center.x + radius * radians.cos(),
                    center.y + radius * radians.sin(),
                ))
            })
            .chain(std::iter::once(KnobCommand::PointerUp));

        for command in drag {
            if sender.send(command).is_err() {
                return;
            }
            thread::sleep(Duration::from_millis(16));
        }

        thread::sleep(Duration::from_millis(rng.random_range(300..900)));
    }
}
