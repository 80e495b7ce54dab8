//! Application-layer function codes.
//!
//! Requests carry codes `0x00`-`0x21`; responses carry `0x81`-`0x83`.
//! Values outside the enumerated sets survive round-trip through the
//! `Unknown` variants.

use core::fmt;

/// The action a master directs an outstation to take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RequestFunction {
    Confirm,
    Read,
    Write,
    Select,
    Operate,
    DirectOperate,
    DirectOperateNoAck,
    Freeze,
    FreezeNoAck,
    FreezeClear,
    FreezeClearNoAck,
    FreezeAtTime,
    FreezeAtTimeNoAck,
    ColdRestart,
    WarmRestart,
    InitializeData,
    InitializeApplication,
    StartApplication,
    StopApplication,
    SaveConfiguration,
    EnableUnsolicited,
    DisableUnsolicited,
    AssignClass,
    DelayMeasurement,
    RecordCurrentTime,
    OpenFile,
    CloseFile,
    DeleteFile,
    GetFileInformation,
    AuthenticateFile,
    AbortFile,
    ActivateConfig,
    AuthenticationRequest,
    AuthenticationRequestNoAck,
    Unknown(u8),
}

impl RequestFunction {
    pub const fn from_u8(value: u8) -> Self {
        match value {
            0x00 => Self::Confirm,
            0x01 => Self::Read,
            0x02 => Self::Write,
            0x03 => Self::Select,
            0x04 => Self::Operate,
            0x05 => Self::DirectOperate,
            0x06 => Self::DirectOperateNoAck,
            0x07 => Self::Freeze,
            0x08 => Self::FreezeNoAck,
            0x09 => Self::FreezeClear,
            0x0A => Self::FreezeClearNoAck,
            0x0B => Self::FreezeAtTime,
            0x0C => Self::FreezeAtTimeNoAck,
            0x0D => Self::ColdRestart,
            0x0E => Self::WarmRestart,
            0x0F => Self::InitializeData,
            0x10 => Self::InitializeApplication,
            0x11 => Self::StartApplication,
            0x12 => Self::StopApplication,
            0x13 => Self::SaveConfiguration,
            0x14 => Self::EnableUnsolicited,
            0x15 => Self::DisableUnsolicited,
            0x16 => Self::AssignClass,
            0x17 => Self::DelayMeasurement,
            0x18 => Self::RecordCurrentTime,
            0x19 => Self::OpenFile,
            0x1A => Self::CloseFile,
            0x1B => Self::DeleteFile,
            0x1C => Self::GetFileInformation,
            0x1D => Self::AuthenticateFile,
            0x1E => Self::AbortFile,
            0x1F => Self::ActivateConfig,
            0x20 => Self::AuthenticationRequest,
            0x21 => Self::AuthenticationRequestNoAck,
            v => Self::Unknown(v),
        }
    }

    pub const fn to_u8(self) -> u8 {
        match self {
            Self::Confirm => 0x00,
            Self::Read => 0x01,
            Self::Write => 0x02,
            Self::Select => 0x03,
            Self::Operate => 0x04,
            Self::DirectOperate => 0x05,
            Self::DirectOperateNoAck => 0x06,
            Self::Freeze => 0x07,
            Self::FreezeNoAck => 0x08,
            Self::FreezeClear => 0x09,
            Self::FreezeClearNoAck => 0x0A,
            Self::FreezeAtTime => 0x0B,
            Self::FreezeAtTimeNoAck => 0x0C,
            Self::ColdRestart => 0x0D,
            Self::WarmRestart => 0x0E,
            Self::InitializeData => 0x0F,
            Self::InitializeApplication => 0x10,
            Self::StartApplication => 0x11,
            Self::StopApplication => 0x12,
            Self::SaveConfiguration => 0x13,
            Self::EnableUnsolicited => 0x14,
            Self::DisableUnsolicited => 0x15,
            Self::AssignClass => 0x16,
            Self::DelayMeasurement => 0x17,
            Self::RecordCurrentTime => 0x18,
            Self::OpenFile => 0x19,
            Self::CloseFile => 0x1A,
            Self::DeleteFile => 0x1B,
            Self::GetFileInformation => 0x1C,
            Self::AuthenticateFile => 0x1D,
            Self::AbortFile => 0x1E,
            Self::ActivateConfig => 0x1F,
            Self::AuthenticationRequest => 0x20,
            Self::AuthenticationRequestNoAck => 0x21,
            Self::Unknown(v) => v,
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Confirm => "CONFIRM",
            Self::Read => "READ",
            Self::Write => "WRITE",
            Self::Select => "SELECT",
            Self::Operate => "OPERATE",
            Self::DirectOperate => "DIRECT_OPERATE",
            Self::DirectOperateNoAck => "DIRECT_OPERATE_NO_ACK",
            Self::Freeze => "FREEZE",
            Self::FreezeNoAck => "FREEZE_NO_ACK",
            Self::FreezeClear => "FREEZE_CLEAR",
            Self::FreezeClearNoAck => "FREEZE_CLEAR_NO_ACK",
            Self::FreezeAtTime => "FREEZE_AT_TIME",
            Self::FreezeAtTimeNoAck => "FREEZE_AT_TIME_NO_ACK",
            Self::ColdRestart => "COLD_RESTART",
            Self::WarmRestart => "WARM_RESTART",
            Self::InitializeData => "INITIALIZE_DATA",
            Self::InitializeApplication => "INITIALIZE_APPLICATION",
            Self::StartApplication => "START_APPLICATION",
            Self::StopApplication => "STOP_APPLICATION",
            Self::SaveConfiguration => "SAVE_CONFIGURATION",
            Self::EnableUnsolicited => "ENABLE_UNSOLICITED",
            Self::DisableUnsolicited => "DISABLE_UNSOLICITED",
            Self::AssignClass => "ASSIGN_CLASS",
            Self::DelayMeasurement => "DELAY_MEASUREMENT",
            Self::RecordCurrentTime => "RECORD_CURRENT_TIME",
            Self::OpenFile => "OPEN_FILE",
            Self::CloseFile => "CLOSE_FILE",
            Self::DeleteFile => "DELETE_FILE",
            Self::GetFileInformation => "GET_FILE_INFORMATION",
            Self::AuthenticateFile => "AUTHENTICATE_FILE",
            Self::AbortFile => "ABORT_FILE",
            Self::ActivateConfig => "ACTIVATE_CONFIG",
            Self::AuthenticationRequest => "AUTHENTICATION_REQUEST",
            Self::AuthenticationRequestNoAck => "AUTHENTICATION_REQUEST_NO_ACK",
            Self::Unknown(_) => "UNKNOWN_FUNCTION_CODE",
        }
    }
}

impl Default for RequestFunction {
    fn default() -> Self {
        Self::Confirm
    }
}

impl fmt::Display for RequestFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}", self.to_u8(), self.description())
    }
}

/// The action an outstation reports taking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResponseFunction {
    Response,
    UnsolicitedResponse,
    AuthenticationResponse,
    Unknown(u8),
}

impl ResponseFunction {
    pub const fn from_u8(value: u8) -> Self {
        match value {
            0x81 => Self::Response,
            0x82 => Self::UnsolicitedResponse,
            0x83 => Self::AuthenticationResponse,
            v => Self::Unknown(v),
        }
    }

    pub const fn to_u8(self) -> u8 {
        match self {
            Self::Response => 0x81,
            Self::UnsolicitedResponse => 0x82,
            Self::AuthenticationResponse => 0x83,
            Self::Unknown(v) => v,
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Response => "RESPONSE",
            Self::UnsolicitedResponse => "UNSOLICITED_RESPONSE",
            Self::AuthenticationResponse => "AUTHENTICATION_RESPONSE",
            Self::Unknown(_) => "UNKNOWN_FUNCTION_CODE",
        }
    }
}

impl fmt::Display for ResponseFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}", self.to_u8(), self.description())
    }
}
