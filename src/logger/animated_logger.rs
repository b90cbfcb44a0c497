use std::io::Write;
use std::sync::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

const FRAME_INTERVAL_MS: u64 = 150;

/// Single-line stderr spinner whose message can change while it runs.
pub struct AnimatedLogger {
    animation_chars: Vec<&'static str>,
    message_tx: watch::Sender<String>,
    stop: CancellationToken,
    task_handle: Mutex<Option<JoinHandle<()>>>,
}

impl AnimatedLogger {
    pub fn new(message: String) -> Self {
        let animation_chars = vec!["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
        let (message_tx, _) = watch::channel(message);

        Self {
            animation_chars,
            message_tx,
            stop: CancellationToken::new(),
            task_handle: Mutex::new(None),
        }
    }

    pub fn start(&self) {
        let message_rx = self.message_tx.subscribe();
        let animation_chars = self.animation_chars.clone();
        let stop = self.stop.clone();

        let handle = tokio::spawn(async move {
            let mut frame = 0;
            let mut interval = tokio::time::interval(tokio::time::Duration::from_millis(FRAME_INTERVAL_MS));

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        let message = message_rx.borrow().clone();
                        eprint!("\r\x1b[K{} {}", animation_chars[frame], message);
                        let _ = std::io::stderr().flush();
                        frame = (frame + 1) % animation_chars.len();
                    }
                    () = stop.cancelled() => {
                        break;
                    }
                }
            }
        });

        if let Ok(mut slot) = self.task_handle.lock() {
            *slot = Some(handle);
        }
    }

    pub fn set_message(&self, message: String) {
        self.message_tx.send_replace(message);
    }

    /// Prints a line above the spinner without stopping it.
    pub fn println(&self, line: &str) {
        eprint!("\r\x1b[K{}\n", line);
        let _ = std::io::stderr().flush();
    }

    async fn halt(&self) {
        self.stop.cancel();
        let handle = self.task_handle.lock().ok().and_then(|mut slot| slot.take());
        if let Some(handle) = handle {
            let _ = handle.await;
        }
    }

    pub async fn stop(&self, final_message: &str) {
        self.halt().await;
        eprint!("\r\x1b[K✅  {}\n", final_message);
        let _ = std::io::stderr().flush();
    }

    /// Clears the spinner line without printing anything.
    pub async fn clear(&self) {
        self.halt().await;
        eprint!("\r\x1b[K");
        let _ = std::io::stderr().flush();
    }
}
