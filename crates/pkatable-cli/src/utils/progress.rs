use indicatif::{ProgressBar, ProgressStyle};
use pkatable::engine::progress::{Progress, ProgressCallback};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::warn;

const SPINNER_TICK_MS: u64 = 80;

/// One spinner line per pipeline phase, left on screen as a `✓` line once the phase ends.
#[derive(Clone)]
pub struct CliProgressHandler {
    pb: Arc<Mutex<ProgressBar>>,
}

impl CliProgressHandler {
    /// A hidden handler draws nothing; used for `--quiet`.
    pub fn new(hidden: bool) -> Self {
        let pb = if hidden {
            ProgressBar::hidden()
        } else {
            ProgressBar::new_spinner()
        };
        pb.set_style(Self::spinner_style());
        pb.finish_and_clear();

        Self {
            pb: Arc::new(Mutex::new(pb)),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb_clone = self.pb.clone();

        Box::new(move |progress: Progress| {
            let Ok(pb_guard) = pb_clone.lock() else {
                warn!("Progress bar mutex was poisoned. Cannot update progress.");
                return;
            };

            match progress {
                Progress::PhaseStart { name } => {
                    pb_guard.reset();
                    pb_guard.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
                    pb_guard.set_message(name.to_string());
                }
                Progress::PhaseFinish => {
                    pb_guard.disable_steady_tick();
                    let done = format!("✓ {}", pb_guard.message());
                    pb_guard.finish_with_message(done);
                }
                Progress::Message(msg) => {
                    if !pb_guard.is_finished() {
                        pb_guard.println(format!("  {}", msg));
                    } else {
                        pb_guard.set_message(msg);
                    }
                }
            }
        })
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn quiet_handler_is_hidden_and_idle() {
        let handler = CliProgressHandler::new(true);
        let pb = handler.pb.lock().unwrap();
        assert!(pb.is_hidden());
        assert!(pb.is_finished());
    }

    #[test]
    fn callback_tracks_phase_lifecycle() {
        let handler = CliProgressHandler::new(true);
        let callback = handler.get_callback();

        callback(Progress::PhaseStart {
            name: "Reading mom file",
        });
        {
            let pb = handler.pb.lock().unwrap();
            assert_eq!(pb.message(), "Reading mom file");
            assert!(!pb.is_finished());
        }

        callback(Progress::PhaseFinish);
        {
            let pb = handler.pb.lock().unwrap();
            assert!(pb.is_finished());
            assert_eq!(pb.message(), "✓ Reading mom file");
        }

        callback(Progress::Message("2 row(s) joined".to_string()));
        {
            let pb = handler.pb.lock().unwrap();
            assert_eq!(pb.message(), "2 row(s) joined");
        }
    }

    #[test]
    fn callback_is_thread_safe() {
        let handler = CliProgressHandler::new(true);
        let callback = handler.get_callback();

        thread::spawn(move || {
            callback(Progress::PhaseStart { name: "Joining" });
            callback(Progress::PhaseFinish);
        })
        .join()
        .unwrap();

        let pb = handler.pb.lock().unwrap();
        assert!(pb.is_finished());
        assert_eq!(pb.message(), "✓ Joining");
    }
}
