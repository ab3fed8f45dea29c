//! Progress reporting while a submission is processed

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;
use survey_application::{ProgressNotifier, Stage};

/// Reports progress with an indicatif spinner per stage.
///
/// Draws to stderr so that stdout stays clean for the result.
pub struct ProgressReporter {
    stage_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            stage_bar: Mutex::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn replace_bar(&self, bar: Option<ProgressBar>) -> Option<ProgressBar> {
        match self.stage_bar.lock() {
            Ok(mut guard) => std::mem::replace(&mut *guard, bar),
            Err(_) => None,
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_stage_start(&self, stage: Stage, total_tasks: usize) {
        let pb = if total_tasks > 1 {
            let pb = ProgressBar::new(total_tasks as u64);
            pb.set_style(Self::bar_style());
            pb
        } else {
            let pb = ProgressBar::new_spinner();
            pb.set_style(Self::spinner_style());
            pb
        };
        pb.set_prefix(stage.as_str());
        pb.set_message("...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Some(previous) = self.replace_bar(Some(pb)) {
            previous.finish_and_clear();
        }
    }

    fn on_task_complete(&self, _stage: Stage, success: bool) {
        if let Ok(guard) = self.stage_bar.lock()
            && let Some(pb) = guard.as_ref()
        {
            let mark = if success { "v".green() } else { "x".red() };
            pb.set_message(mark.to_string());
            pb.inc(1);
        }
    }

    fn on_stage_complete(&self, stage: Stage, success: bool) {
        if let Some(pb) = self.replace_bar(None) {
            if success {
                pb.finish_with_message(format!("{}", "done".green()));
            } else {
                pb.abandon_with_message(format!("{} failed", stage.as_str().red()));
            }
        }
    }
}
