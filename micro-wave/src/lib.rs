#![no_std]
//! Scrubbable waveform bars for `embedded-graphics` draw targets.
//!
//! Bar amplitudes from `micro-peaks` are laid out by [`bar_rect`] and
//! painted by [`render`], split into played and unplayed colors at the
//! current progress. [`Scrubber`] turns pointer events into that progress.

#[cfg(feature = "logging")]
use defmt_rtt as _;

pub mod detailed;
pub mod layout;
pub mod progress;
pub mod renderer;

pub use detailed::{DetailedWaveform, DETAIL};
pub use layout::{bar_rect, BarRect, LayoutConfig, LayoutError, HEIGHT_DIVISOR};
pub use progress::{pointer_to_progress, ScrubState, Scrubber};
pub use renderer::{played_count, render, ProgressBars, Renderer, BACKGROUND, PLAYED, UNPLAYED};
