use serde::{Deserialize, Serialize};

/// Messages the player sends to the signaling server.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "id", rename_all = "camelCase")]
pub enum ClientMessage {
    #[serde(rename_all = "camelCase")]
    Start { sdp_offer: String, videourl: String },
    OnIceCandidate { candidate: IceCandidate },
    Pause,
    Resume,
    Stop,
    DoSeek { position: i64 },
    GetPosition,
}

/// Messages the signaling server sends to the player.
///
/// Any `id` the player does not know about decodes to `Unrecognized` so the
/// caller can decide what to do with it instead of failing the whole frame.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "id", rename_all = "camelCase")]
pub enum ServerMessage {
    #[serde(rename_all = "camelCase")]
    StartResponse { sdp_answer: String },
    Error { message: String },
    PlayEnd,
    VideoInfo(VideoInfo),
    IceCandidate { candidate: IceCandidate },
    Seek { message: String },
    Position { position: f64 },
    #[serde(other)]
    Unrecognized,
}

/// Positions and durations are whatever number the media server reports,
/// usually whole milliseconds.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoInfo {
    pub is_seekable: bool,
    pub init_seekable: f64,
    pub end_seekable: f64,
    pub video_duration: f64,
}

/// Same shape as the browser's `RTCIceCandidateInit`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IceCandidate {
    pub candidate: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sdp_mid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sdp_m_line_index: Option<u16>,
}

impl ClientMessage {
    pub fn id(&self) -> &'static str {
        match self {
            ClientMessage::Start { .. } => "start",
            ClientMessage::OnIceCandidate { .. } => "onIceCandidate",
            ClientMessage::Pause => "pause",
            ClientMessage::Resume => "resume",
            ClientMessage::Stop => "stop",
            ClientMessage::DoSeek { .. } => "doSeek",
            ClientMessage::GetPosition => "getPosition",
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl ServerMessage {
    pub fn from_json(data: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(data)
    }
}
