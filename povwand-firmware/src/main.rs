//! Povwand - Persistence-of-Vision LED Wand Firmware
//!
//! Main firmware binary for RP2040-based hand-swung LED wands.
//! A tilt sensor marks the ends of each swing; the firmware measures the
//! swing duration and flashes a font-encoded message onto an 8-LED column
//! at a period derived from it, so the letters hang in the air.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_time::Timer;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use povwand_core::font::{encode, FrameSequence};
use povwand_core::wand::WandController;

use crate::leds::WandLeds;

mod channels;
mod leds;
mod tasks;
mod timebase;

/// Message flashed onto each swing.
/// Uppercase ASCII letters and spaces only; anything else renders as a gap.
const MESSAGE: &str = "SAHOTA";

// The encoded frame sequence must live forever for the render task.
static FRAMES: StaticCell<FrameSequence> = StaticCell::new();

/// High-priority executor for the motion watcher.
///
/// The render loop busy-waits through whole frames, so the watcher must
/// preempt it to classify edges and raise the abort flag on time.
static EXECUTOR_MOTION: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_MOTION.on_interrupt()
}

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Povwand firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Encode the message once; the render task reads the static sequence,
    // the motion side only needs the frame count.
    let frames: &'static FrameSequence = FRAMES.init(encode(MESSAGE));
    let controller = WandController::new(frames.len());
    info!("Message encoded: {} frames", frames.len());

    // LED column on GPIO2..GPIO9, bit 0 at the handle end
    let leds = WandLeds::new([
        Output::new(p.PIN_2, Level::Low),
        Output::new(p.PIN_3, Level::Low),
        Output::new(p.PIN_4, Level::Low),
        Output::new(p.PIN_5, Level::Low),
        Output::new(p.PIN_6, Level::Low),
        Output::new(p.PIN_7, Level::Low),
        Output::new(p.PIN_8, Level::Low),
        Output::new(p.PIN_9, Level::Low),
    ]);

    // Tilt sensor comparator output on GPIO16 (push-pull, no pull needed)
    let comparator = Input::new(p.PIN_16, Pull::None);

    // Let the tilt sensor settle before trusting its edges
    Timer::after_secs(1).await;

    // Motion watcher on the interrupt executor so it preempts the render loop
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let motion_spawner = EXECUTOR_MOTION.start(interrupt::SWI_IRQ_1);
    motion_spawner
        .spawn(tasks::motion_task(comparator, controller))
        .unwrap();

    // Render loop on the thread executor
    spawner
        .spawn(tasks::render_task(frames.as_slice(), leds))
        .unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
