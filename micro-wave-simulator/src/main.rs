mod cli;
mod config;
mod logging;
mod peaks_file;
mod scene;
#[cfg(feature = "window")]
mod window;

use anyhow::Context;
use clap::Parser;
use embedded_graphics::{geometry::Point, pixelcolor::Rgb888};
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay};

use crate::cli::Args;
use crate::scene::{Mode, Scene};

fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();
    logging::init_logging()?;

    let layout = args.layout()?;
    let peaks = match &args.peaks {
        Some(path) => peaks_file::load(path)?,
        None => {
            tracing::info!("No peak file given, using the demo waveform");
            peaks_file::demo()
        }
    };
    let mode = if args.detailed { Mode::Detailed } else { Mode::Bars };

    let mut scene = Scene::new(peaks, args.bars, layout, mode)?;
    scene.scrubber_mut().set_progress(args.progress);

    if let Some(x) = args.pointer_x {
        let canvas = scene.canvas();
        let point = canvas.top_left + Point::new(x, canvas.size.height as i32 / 2);
        match scene.scrubber_mut().pointer_down(point) {
            Some(progress) => tracing::info!("Click at x = {} moved progress to {:.3}", x, progress),
            None => tracing::warn!("Click at x = {} missed the waveform", x),
        }
        scene.scrubber_mut().pointer_up();
    }

    let output_settings = OutputSettingsBuilder::new().scale(config::SCALE).build();

    if let Some(path) = &args.snapshot {
        let mut display: SimulatorDisplay<Rgb888> = SimulatorDisplay::new(scene.display_size());
        scene.draw(&mut display)?;
        display
            .to_rgb_output_image(&output_settings)
            .save_png(path)
            .with_context(|| format!("Failed to write snapshot {}", path.display()))?;
        tracing::info!(
            "Wrote {:?} snapshot of {} bars at progress {:.3} to {}",
            scene.mode(),
            scene.bars().len(),
            scene.scrubber().progress(),
            path.display()
        );
        return Ok(());
    }

    run_interactive(&mut scene, &output_settings)
}

#[cfg(feature = "window")]
fn run_interactive(
    scene: &mut Scene,
    output_settings: &embedded_graphics_simulator::OutputSettings,
) -> Result<(), anyhow::Error> {
    window::run(scene, output_settings)
}

#[cfg(not(feature = "window"))]
fn run_interactive(
    _scene: &mut Scene,
    _output_settings: &embedded_graphics_simulator::OutputSettings,
) -> Result<(), anyhow::Error> {
    anyhow::bail!("Built without the `window` feature; pass --snapshot <PNG> to render headless")
}
