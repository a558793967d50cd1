use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

/// Why a device went away.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LostReason {
    Destroyed,
    Unknown,
}

/// What the backend reported when the device was lost.
#[derive(Debug, Clone, PartialEq)]
pub struct LostInfo {
    pub reason: LostReason,
    pub message: String,
}

impl fmt::Display for LostInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GPU device was lost: {}", self.message)
    }
}

/// Callback a device invokes when it is lost. May run on any thread.
pub type LostCallback = Box<dyn Fn(LostInfo) + Send + 'static>;

/// Shared record of a device loss.
///
/// The loss observer writes it; the device owner reads it and drops its
/// handle. Only the first loss is kept.
#[derive(Debug, Clone, Default)]
pub struct LossSignal {
    inner: Arc<Mutex<Option<LostInfo>>>,
}

impl LossSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Logs the loss and records it.
    pub fn report(&self, info: LostInfo) {
        log::error!("{info}");

        let mut slot = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        if slot.is_none() {
            *slot = Some(info);
        }
    }

    /// Returns a callback that reports into this signal.
    pub fn callback(&self) -> LostCallback {
        let signal = self.clone();
        Box::new(move |info| signal.report(info))
    }

    pub fn is_lost(&self) -> bool {
        self.get().is_some()
    }

    pub fn get(&self) -> Option<LostInfo> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(message: &str) -> LostInfo {
        LostInfo {
            reason: LostReason::Unknown,
            message: message.to_string(),
        }
    }

    #[test]
    fn starts_healthy() {
        assert!(!LossSignal::new().is_lost());
    }

    #[test]
    fn callback_records_into_shared_signal() {
        let signal = LossSignal::new();
        let cb = signal.callback();
        cb(info("driver reset"));

        assert!(signal.is_lost());
        assert_eq!(signal.get(), Some(info("driver reset")));
    }

    #[test]
    fn first_loss_wins() {
        let signal = LossSignal::new();
        signal.report(info("first"));
        signal.report(info("second"));
        assert_eq!(signal.get().map(|i| i.message), Some("first".to_string()));
    }

    #[test]
    fn callback_can_fire_from_another_thread() {
        let signal = LossSignal::new();
        let cb = signal.callback();
        std::thread::spawn(move || cb(info("remote")))
            .join()
            .unwrap();
        assert!(signal.is_lost());
    }

    #[test]
    fn display_matches_log_line() {
        assert_eq!(info("oom").to_string(), "GPU device was lost: oom");
    }
}
