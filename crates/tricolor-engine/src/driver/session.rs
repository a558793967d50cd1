use crate::device::{LossSignal, LostInfo, SetupError};

/// Owner of the device after setup.
///
/// Holds the device for the rest of the process. Once the loss signal fires,
/// the next access drops the handle and reports it as absent.
pub struct Session<D> {
    device: Option<D>,
    loss: LossSignal,
}

impl<D> Session<D> {
    pub(crate) fn new(device: D, loss: LossSignal) -> Self {
        Self {
            device: Some(device),
            loss,
        }
    }

    /// The device, or `None` once it has been lost.
    pub fn device(&mut self) -> Option<&mut D> {
        self.sync();
        self.device.as_mut()
    }

    /// The recorded loss, if any.
    pub fn lost(&self) -> Option<LostInfo> {
        self.loss.get()
    }

    /// Like `device`, but a missing device is a setup error.
    pub(crate) fn require(&mut self) -> Result<&mut D, SetupError> {
        self.sync();
        match (self.device.as_mut(), self.loss.get()) {
            (Some(device), _) => Ok(device),
            (None, Some(info)) => Err(SetupError::DeviceLost(info)),
            (None, None) => Err(SetupError::Unavailable),
        }
    }

    fn sync(&mut self) {
        if self.device.is_some() && self.loss.is_lost() {
            log::debug!("dropping lost device");
            self.device = None;
        }
    }
}
