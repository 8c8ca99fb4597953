//! Console progress reporting for generation runs.
//!
//! One progress bar per phase on stderr (indicatif hides it when stderr is
//! not a terminal) and one status line on stdout when a phase completes.

use crate::generator::{Phase, ProgressEvent};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const BAR_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}";

/// Turns generator progress events into bars and status lines.
#[derive(Default)]
pub struct ConsoleReporter {
    bar: Option<ProgressBar>,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, event: ProgressEvent) {
        match event {
            ProgressEvent::Started { phase, total } => {
                self.bar = Some(phase_bar(phase, total));
            }
            ProgressEvent::Advanced { done, .. } => {
                if let Some(ref pb) = self.bar {
                    pb.set_position(done);
                }
            }
            ProgressEvent::Finished { phase, .. } => {
                if let Some(pb) = self.bar.take() {
                    pb.finish_and_clear();
                }
                println!("{}", status_line(phase));
            }
        }
    }
}

/// Status line printed once a phase has written all of its records
pub fn status_line(phase: Phase) -> String {
    format!("{} created", phase.label())
}

fn phase_bar(phase: Phase, total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    let style = ProgressStyle::with_template(BAR_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░  ")
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
    pb.set_style(style);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Writing {}...", phase.label().to_lowercase()));
    pb
}
