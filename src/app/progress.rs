use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::catalog::School;
use crate::pipeline::ProgressNotifier;

const TICK: Duration = Duration::from_millis(120);

/// Blocking spinner on stderr while the schools are processed.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(style);
        bar.set_message("Buscando información y generando respuestas...");
        Self { bar }
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for Spinner {
    fn on_school_start(&self, index: usize, total: usize, school: School) {
        self.bar.enable_steady_tick(TICK);
        self.bar.set_prefix(format!("[{}/{total}]", index + 1));
        self.bar.set_message(format!("{school}: buscando y generando respuesta..."));
    }

    fn on_school_done(&self, _index: usize, _total: usize, school: School) {
        self.bar.println(format!("  ✓ {school}"));
    }
}
