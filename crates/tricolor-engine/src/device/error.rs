use std::fmt;

use super::LostInfo;

/// Setup failures callers are expected to tell apart.
///
/// Travels inside `anyhow::Error`; recover it with `downcast_ref`.
#[derive(Debug, Clone, PartialEq)]
pub enum SetupError {
    /// No graphics backend can drive the window.
    Unavailable,
    /// The device was lost before setup finished.
    DeviceLost(LostInfo),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::Unavailable => write!(f, "gpu not supported"),
            SetupError::DeviceLost(info) => write!(f, "{info}"),
        }
    }
}

impl std::error::Error for SetupError {}

impl SetupError {
    /// Returns the setup error at the root of `err`, if any.
    pub fn find(err: &anyhow::Error) -> Option<&SetupError> {
        err.chain().find_map(|e| e.downcast_ref::<SetupError>())
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Context;

    use super::*;
    use crate::device::LostReason;

    #[test]
    fn unavailable_message() {
        assert_eq!(SetupError::Unavailable.to_string(), "gpu not supported");
    }

    #[test]
    fn find_through_context() {
        let err = Err::<(), _>(SetupError::Unavailable)
            .context("window setup")
            .unwrap_err();
        assert_eq!(SetupError::find(&err), Some(&SetupError::Unavailable));
    }

    #[test]
    fn find_ignores_other_errors() {
        let err = anyhow::anyhow!("shader compilation failed");
        assert_eq!(SetupError::find(&err), None);
    }

    #[test]
    fn device_lost_displays_loss() {
        let err = SetupError::DeviceLost(LostInfo {
            reason: LostReason::Destroyed,
            message: "gone".to_string(),
        });
        assert_eq!(err.to_string(), "GPU device was lost: gone");
    }
}
