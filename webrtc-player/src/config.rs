const SIGNALING_PATH: &str = "/player";

#[derive(Debug, Clone)]
pub struct PlayerConfig {
    pub signaling_scheme: String,
    pub signaling_host: String,
    pub signaling_path: String,
    pub elements: ElementIds,
    pub images: SpinnerImages,
}

/// Ids of the page elements the player binds to.
#[derive(Debug, Clone)]
pub struct ElementIds {
    pub video: String,
    pub play_pause: String,
    pub mute: String,
    pub full_screen: String,
    pub seek_bar: String,
    pub volume_bar: String,
    pub start: String,
    pub pause: String,
    pub pause_text: String,
    pub pause_icon: String,
    pub stop: String,
    pub video_url: String,
    /// `name` shared by the media mode radio buttons.
    pub mode: String,
    pub get_position: String,
    pub do_seek: String,
    pub seek_position: String,
    pub video_position: String,
    pub is_seekable: String,
    pub init_seek: String,
    pub end_seek: String,
    pub duration: String,
}

#[derive(Debug, Clone)]
pub struct SpinnerImages {
    pub transparent: String,
    pub spinner: String,
    pub idle_poster: String,
}

impl PlayerConfig {
    /// Config for a page served from `host`; the signaling server lives on the
    /// same host.
    pub fn from_host(host: &str) -> Self {
        Self {
            signaling_scheme: "wss".to_string(),
            signaling_host: host.trim().trim_end_matches('/').to_string(),
            signaling_path: SIGNALING_PATH.to_string(),
            elements: ElementIds::default(),
            images: SpinnerImages::default(),
        }
    }

    pub fn signaling_url(&self) -> String {
        format!(
            "{}://{}{}",
            self.signaling_scheme, self.signaling_host, self.signaling_path
        )
    }
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            video: "video".into(),
            play_pause: "play-pause".into(),
            mute: "mute".into(),
            full_screen: "full-screen".into(),
            seek_bar: "seek-bar".into(),
            volume_bar: "volume-bar".into(),
            start: "start".into(),
            pause: "pause".into(),
            pause_text: "pause-text".into(),
            pause_icon: "pause-icon".into(),
            stop: "stop".into(),
            video_url: "videourl".into(),
            mode: "mode".into(),
            get_position: "getPosition".into(),
            do_seek: "doSeek".into(),
            seek_position: "seekPosition".into(),
            video_position: "videoPosition".into(),
            is_seekable: "isSeekable".into(),
            init_seek: "initSeek".into(),
            end_seek: "endSeek".into(),
            duration: "duration".into(),
        }
    }
}

impl Default for SpinnerImages {
    fn default() -> Self {
        Self {
            transparent: "./img/transparent-1px.png".into(),
            spinner: "./img/spinner.gif".into(),
            idle_poster: "./img/webrtc.png".into(),
        }
    }
}
