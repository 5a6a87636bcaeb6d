use crate::errors::Error;
use std::convert::TryFrom;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    CanStart,
    CanStop,
    Starting,
}

/// Page controls whose availability depends on the session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Start,
    Pause,
    Stop,
    VideoUrl,
    Mode,
    GetPosition,
    DoSeek,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlState {
    Enabled,
    Disabled,
    Unchanged,
}

impl Control {
    pub const ALL: [Control; 7] = [
        Control::Start,
        Control::Pause,
        Control::Stop,
        Control::VideoUrl,
        Control::Mode,
        Control::GetPosition,
        Control::DoSeek,
    ];
}

impl SessionState {
    pub fn control_state(self, control: Control) -> ControlState {
        use Control::*;
        use ControlState::*;

        match (self, control) {
            (SessionState::CanStart, Start | VideoUrl | Mode) => Enabled,
            (SessionState::CanStart, Pause | Stop | GetPosition | DoSeek) => Disabled,

            (SessionState::CanStop, Pause | Stop) => Enabled,
            (SessionState::CanStop, Start | VideoUrl | Mode) => Disabled,
            // Seeking controls are driven by videoInfo while playing.
            (SessionState::CanStop, GetPosition | DoSeek) => Unchanged,

            (SessionState::Starting, _) => Disabled,
        }
    }
}

/// Numeric codes the page used to store the state as.
impl TryFrom<u8> for SessionState {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(SessionState::CanStart),
            1 => Ok(SessionState::CanStop),
            2 => Ok(SessionState::Starting),
            _ => Err(Error::UnknownState(code)),
        }
    }
}
