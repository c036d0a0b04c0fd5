//! Desktop simulator for the repgraph home page.
//!
//! Renders the home page (greeting plus rep graph) in an SDL2 window via
//! `embedded-graphics-simulator`, so the graph can be exercised without
//! hardware.
//!
//! # Key bindings
//!
//! | Key   | Action                             |
//! |-------|------------------------------------|
//! | Up    | Log a rep for today                |
//! | R     | Roll over to the next day          |
//! | Z     | Clear the whole week               |
//! | L     | Cycle the callout label size       |
//! | S     | Save the graph settings            |
//! | Q     | Quit                               |
//!
//! Mouse clicks are forwarded as touch events.

use std::path::Path;
use std::time::{Duration, Instant as StdInstant};

use chrono::{Datelike, Local};

use embassy_time::Instant;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window, sdl2::Keycode,
};
use log::{error, info, warn};

use repgraph::config::{LabelSize, RepGraphConfig};
use repgraph::pages::{HomePage, Page};
use repgraph::reps::{DailyReps, Weekday, WeekdayProvider};
use repgraph::ui::{Action, MonoFonts, PageEvent, TouchEvent, TouchPoint};

// ---------------------------------------------------------------------------
// Display constants
// ---------------------------------------------------------------------------

const DISPLAY_WIDTH_PX: u32 = 360;
const DISPLAY_HEIGHT_PX: u32 = 480;

/// Pixel scale factor for the simulator window.
const WINDOW_SCALE: u32 = 2;

/// Target frame duration (~30 FPS).
const FRAME_DURATION: Duration = Duration::from_millis(33);

/// Where the graph settings are persisted between runs.
const CONFIG_PATH: &str = "repgraph.cfg";

const USER_NAME: &str = "First Name";

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Weekday source backed by the host's local clock.
struct LocalClock;

impl WeekdayProvider for LocalClock {
    fn today(&self) -> Weekday {
        to_weekday(Local::now().weekday())
    }
}

fn to_weekday(day: chrono::Weekday) -> Weekday {
    Weekday::from_index(day.num_days_from_sunday() as usize)
}

fn load_config() -> RepGraphConfig {
    let path = Path::new(CONFIG_PATH);
    if !path.exists() {
        return RepGraphConfig::default();
    }

    match std::fs::read(path).map(|bytes| RepGraphConfig::from_bytes(&bytes)) {
        Ok(Ok(config)) => {
            info!("Loaded graph settings from {}", CONFIG_PATH);
            config
        }
        Ok(Err(e)) => {
            warn!("Ignoring unreadable settings: {}", e);
            RepGraphConfig::default()
        }
        Err(e) => {
            warn!("Could not read {}: {}", CONFIG_PATH, e);
            RepGraphConfig::default()
        }
    }
}

fn save_config(config: &RepGraphConfig) {
    let bytes = match config.to_bytes() {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("Could not encode settings: {}", e);
            return;
        }
    };

    match std::fs::write(CONFIG_PATH, bytes) {
        Ok(()) => info!("Saved graph settings to {}", CONFIG_PATH),
        Err(e) => error!("Could not write {}: {}", CONFIG_PATH, e),
    }
}

fn next_label_size(size: LabelSize) -> LabelSize {
    match size {
        LabelSize::Small => LabelSize::Medium,
        LabelSize::Medium => LabelSize::Large,
        LabelSize::Large => LabelSize::Small,
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    env_logger::init();
    info!("Starting repgraph simulator");
    info!(
        "Display: {}×{} (scale {}×)",
        DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX, WINDOW_SCALE
    );
    info!("Keys: Up=+1 rep  R=next day  Z=clear  L=label size  S=save  Q=Quit");

    let mut display =
        SimulatorDisplay::<Rgb565>::new(Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX));

    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Rep Graph Simulator", &output_settings);

    let mut today = LocalClock.today();
    let mut reps = DailyReps::SAMPLE;
    let mut config = load_config();

    let mut page = HomePage::new(
        Rectangle::new(Point::zero(), display.size()),
        USER_NAME,
        reps,
        config,
        &today,
        &MonoFonts,
    );
    page.on_activate();

    // The SDL window is lazily initialized on the first `update()` call.
    // We must call `update()` once before `events()` or it will panic.
    let _ = page.draw_page(&mut display);
    page.mark_clean();
    window.update(&display);

    // -----------------------------------------------------------------------
    // Main loop
    // -----------------------------------------------------------------------
    'running: loop {
        let frame_start = StdInstant::now();
        let mut events: Vec<PageEvent> = Vec::new();

        // --- SDL events ---------------------------------------------------
        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,

                SimulatorEvent::KeyDown { keycode, .. } => match keycode {
                    Keycode::Q | Keycode::Escape => break 'running,
                    Keycode::Up => {
                        reps.record_today(1);
                        events.push(PageEvent::RepsUpdated(reps));
                    }
                    Keycode::R => {
                        reps.roll_over();
                        today = today.next();
                        events.push(PageEvent::DayChanged(today));
                        events.push(PageEvent::RepsUpdated(reps));
                    }
                    Keycode::Z => {
                        reps = DailyReps::default();
                        events.push(PageEvent::RepsUpdated(reps));
                    }
                    Keycode::L => {
                        config = config.with_label_size(next_label_size(config.label_size));
                        info!("Label size {:?}", config.label_size);
                        page.graph_mut().set_config(config);
                    }
                    Keycode::S => save_config(&config),
                    _ => {}
                },

                SimulatorEvent::MouseButtonDown { point, .. } => {
                    let touch = TouchEvent::Press(TouchPoint::new(
                        point.x.max(0) as u16,
                        point.y.max(0) as u16,
                    ));

                    if let Some(Action::DaySelected { index, reps }) = page.handle_touch(touch) {
                        info!("Touch → day {} ({} reps)", index, reps);
                    }
                }

                _ => {}
            }
        }

        for event in &events {
            page.on_event(event);
        }

        // --- Page update tick ---------------------------------------------
        page.update(Instant::now());

        // --- Render -------------------------------------------------------
        if page.is_dirty() {
            if let Err(e) = page.draw_page(&mut display) {
                error!("Draw error: {:?}", e);
            }
            page.mark_clean();
        }

        window.update(&display);

        // --- Frame pacing -------------------------------------------------
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - elapsed);
        }
    }

    info!("Simulator exiting");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chrono_weekday_maps_to_same_day() {
        assert_eq!(to_weekday(chrono::Weekday::Sun), Weekday::Sunday);
        assert_eq!(to_weekday(chrono::Weekday::Mon), Weekday::Monday);
        assert_eq!(to_weekday(chrono::Weekday::Fri), Weekday::Friday);
        assert_eq!(to_weekday(chrono::Weekday::Sat), Weekday::Saturday);
    }

    #[test]
    fn test_local_clock_matches_local_date() {
        let expected = Local::now().weekday();
        let today = LocalClock.today();
        // Tolerate the test straddling local midnight
        let after = Local::now().weekday();
        assert!(today == to_weekday(expected) || today == to_weekday(after));
    }
}
