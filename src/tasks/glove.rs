// SignGlove — Glove Task
//
// Ticks the pipeline at ~10 Hz and writes one symbol per tick to the
// console.  The sleep only rate-limits; a slow tick is never made up.

use std::io::Write;
use std::thread;
use std::time::{Duration, Instant};

use crate::drivers::GloveHardware;
use crate::events::TickReport;
use crate::glove::Glove;

pub fn glove_task<H: GloveHardware>(mut glove: Glove, mut hw: H, interval: Duration) -> ! {
    log::info!("Glove task started ({} ms period)", interval.as_millis());

    loop {
        let tick_start = Instant::now();

        let report = glove.tick_report(&mut hw);
        emit(&mut std::io::stdout(), &report);

        // Sleep for the remainder of the period.
        let elapsed = tick_start.elapsed();
        if elapsed < interval {
            thread::sleep(interval - elapsed);
        }
    }
}

/// Print the symbol line and log the full diagnostic line.
pub fn emit<W: Write>(out: &mut W, report: &TickReport) {
    if let Err(e) = writeln!(out, "{}", report.symbol) {
        log::warn!("Console write failed: {}", e);
    }
    log::debug!("{}", report);
}
