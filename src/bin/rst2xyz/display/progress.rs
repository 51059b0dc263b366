use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};

use super::Context;
use crate::util::text::truncate;

/// Per-file progress bar, active only on an interactive stderr.
pub struct FileProgress {
    bar: Option<ProgressBar>,
    interactive: bool,
    start: Instant,
}

impl FileProgress {
    pub fn start(ctx: Context, total: usize) -> Self {
        let bar = ctx.interactive.then(|| {
            let bar = ProgressBar::new(total as u64);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("  {bar:36.cyan/blue} {pos}/{len} {msg}")
                    .expect("invalid template"),
            );
            bar
        });

        Self {
            bar,
            interactive: ctx.interactive,
            start: Instant::now(),
        }
    }

    /// Announces the file about to be converted.
    pub fn file(&self, entry: &Path) {
        if let Some(bar) = &self.bar {
            bar.set_message(truncate(&entry.display().to_string(), 32));
        }
    }

    /// Counts a file once its conversion has finished.
    pub fn advance(&self) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    pub fn abandon(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }

    pub fn finish(self, written: usize) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }

        if self.interactive {
            let mut stderr = io::stderr().lock();
            let _ = writeln!(
                stderr,
                "  \x1b[32m✓\x1b[0m wrote {} frame{} in {:.1}s",
                written,
                if written == 1 { "" } else { "s" },
                self.start.elapsed().as_secs_f64()
            );
        }
    }
}
