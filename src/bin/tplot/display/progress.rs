use std::io::{self, Write};
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

const TICK_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

/// Numbered step reporter. Draws a spinner per step on stderr when
/// interactive and does nothing otherwise.
pub struct Progress {
    live: Option<Live>,
}

struct Live {
    bar: Option<ProgressBar>,
    start: Instant,
    step_start: Instant,
    step: u8,
    total_steps: u8,
}

impl Progress {
    pub fn new(interactive: bool, total_steps: u8) -> Self {
        let now = Instant::now();
        Self {
            live: interactive.then_some(Live {
                bar: None,
                start: now,
                step_start: now,
                step: 0,
                total_steps,
            }),
        }
    }

    pub fn step(&mut self, description: &str) {
        let Some(live) = self.live.as_mut() else {
            return;
        };
        live.clear();
        live.step += 1;
        live.step_start = Instant::now();

        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("  {spinner:.cyan} {msg}") {
            bar.set_style(style.tick_chars(TICK_CHARS));
        }
        bar.enable_steady_tick(Duration::from_millis(80));
        bar.set_message(format!(
            "[{}/{}] {}...",
            live.step, live.total_steps, description
        ));
        live.bar = Some(bar);
    }

    pub fn complete_step(&mut self, description: &str, details: &[String]) {
        let Some(live) = self.live.as_mut() else {
            return;
        };
        live.clear();

        let mut stderr = io::stderr().lock();
        let _ = writeln!(
            stderr,
            "  \x1b[32m✓\x1b[0m {:<44} {:>5.1}s",
            description,
            live.step_start.elapsed().as_secs_f64()
        );
        for detail in details {
            let _ = writeln!(stderr, "      \x1b[2m·\x1b[0m {}", detail);
        }
    }

    pub fn finish(mut self, summary: &str) {
        let Some(live) = self.live.as_mut() else {
            return;
        };
        live.clear();

        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr);
        let _ = writeln!(
            stderr,
            "  \x1b[2m╺━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━╸\x1b[0m"
        );
        let _ = writeln!(
            stderr,
            "  \x1b[32m✓\x1b[0m {:<30} {:>21}",
            summary,
            format!("Total: {:.2}s", live.start.elapsed().as_secs_f64())
        );
        let _ = writeln!(stderr);
    }
}

impl Live {
    fn clear(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
