use std::{thread, time::Duration};

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics_simulator::{
    sdl2::{Keycode, MouseButton},
    OutputSettings, SimulatorDisplay, SimulatorEvent, Window,
};

use crate::config::{FRAME_DELAY_MS, SEEK_STEP, WINDOW_TITLE};
use crate::scene::Scene;

/// Opens the simulator window and scrubs until it is closed.
///
/// Left click or drag over the waveform seeks; arrow keys nudge the
/// progress, Home and End jump to either end. The page is only redrawn
/// when progress changes.
pub fn run(scene: &mut Scene, output_settings: &OutputSettings) -> Result<(), anyhow::Error> {
    let mut display: SimulatorDisplay<Rgb888> = SimulatorDisplay::new(scene.display_size());
    let mut window = Window::new(WINDOW_TITLE, output_settings);

    scene.draw(&mut display)?;

    'running: loop {
        window.update(&display);

        let mut changed = None;
        for event in window.events() {
            let scrubber = scene.scrubber_mut();
            let update = match event {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    point,
                } => scrubber.pointer_down(point),
                SimulatorEvent::MouseMove { point } => scrubber.pointer_move(point),
                SimulatorEvent::MouseButtonUp {
                    mouse_btn: MouseButton::Left,
                    ..
                } => {
                    scrubber.pointer_up();
                    None
                }
                SimulatorEvent::KeyDown { keycode, .. } => {
                    let progress = scrubber.progress();
                    match keycode {
                        Keycode::Left => scrubber.set_progress(progress - SEEK_STEP),
                        Keycode::Right => scrubber.set_progress(progress + SEEK_STEP),
                        Keycode::Home => scrubber.set_progress(0.0),
                        Keycode::End => scrubber.set_progress(1.0),
                        _ => None,
                    }
                }
                _ => None,
            };
            changed = update.or(changed);
        }

        if let Some(progress) = changed {
            tracing::debug!("Progress {:.3} ({:?})", progress, scene.scrubber().state());
            scene.draw(&mut display)?;
        }

        thread::sleep(Duration::from_millis(FRAME_DELAY_MS));
    }

    tracing::info!("Window closed at progress {:.3}", scene.scrubber().progress());
    Ok(())
}
