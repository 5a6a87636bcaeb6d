//! Playback session: the start/stop state machine and the dispatch of
//! signaling messages coming back from the media server.
//!
//! The session never touches the DOM, the socket or the peer connection
//! directly. It talks to them through [`PlayerView`], [`Signaling`] and
//! [`MediaPeer`] so the browser glue in `lib.rs` can hand it the real
//! implementations.

mod state;

pub use state::{Control, ControlState, SessionState};

use crate::errors::Error;
use crate::{console_error, console_info, console_log};
use std::convert::TryFrom;
use std::fmt;
use webrtc_player_types::{ClientMessage, IceCandidate, ServerMessage, VideoInfo};

pub trait Signaling {
    fn send(&self, msg: &ClientMessage) -> Result<(), Error>;
    fn close(&self);
}

pub trait MediaPeer {
    fn process_answer(&self, sdp_answer: String);
    fn add_ice_candidate(&self, candidate: IceCandidate);
    fn dispose(&self);
}

pub trait PlayerView {
    fn set_control_enabled(&self, control: Control, enabled: bool);
    fn set_pause_toggle(&self, toggle: PauseToggle);
    fn show_spinner(&self);
    fn hide_spinner(&self);
    fn show_video_info(&self, info: &VideoInfo);
    fn show_position(&self, position: f64);
    fn video_url(&self) -> String;
    fn media_mode(&self) -> MediaMode;
    fn seek_position(&self) -> String;
}

/// Which tracks to ask the server for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaMode {
    VideoAndAudio,
    VideoOnly,
    AudioOnly,
}

impl MediaMode {
    /// Parses the `value` of a mode radio button. Anything unknown falls back
    /// to both tracks.
    pub fn from_value(value: &str) -> Self {
        match value {
            "video-only" => MediaMode::VideoOnly,
            "audio-only" => MediaMode::AudioOnly,
            _ => MediaMode::VideoAndAudio,
        }
    }

    pub fn audio(self) -> bool {
        self != MediaMode::VideoOnly
    }

    pub fn video(self) -> bool {
        self != MediaMode::AudioOnly
    }
}

impl fmt::Display for MediaMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MediaMode::VideoAndAudio => "video-and-audio",
            MediaMode::VideoOnly => "video-only",
            MediaMode::AudioOnly => "audio-only",
        };
        write!(f, "{}", s)
    }
}

/// What the remote pause button currently does when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseToggle {
    Pause,
    Resume,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StartRequest {
    /// Identifies this start attempt. Offers and failures reported with an
    /// older token are dropped.
    pub token: u64,
    pub video_url: String,
    pub mode: MediaMode,
}

pub struct Session<S, V, P> {
    state: SessionState,
    start_token: u64,
    is_seekable: bool,
    remote_paused: bool,
    peer: Option<P>,
    signaling: S,
    view: V,
}

impl<S, V, P> Session<S, V, P>
where
    S: Signaling,
    V: PlayerView,
    P: MediaPeer,
{
    pub fn new(signaling: S, view: V) -> Self {
        let mut session = Self {
            state: SessionState::CanStart,
            start_token: 0,
            is_seekable: false,
            remote_paused: false,
            peer: None,
            signaling,
            view,
        };
        session.set_state(SessionState::CanStart);
        session
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_seekable(&self) -> bool {
        self.is_seekable
    }

    #[cfg(test)]
    pub fn has_peer(&self) -> bool {
        self.peer.is_some()
    }

    #[cfg(test)]
    pub fn view(&self) -> &V {
        &self.view
    }

    #[cfg(test)]
    pub fn signaling(&self) -> &S {
        &self.signaling
    }

    pub fn set_state(&mut self, next: SessionState) {
        for control in Control::ALL.iter() {
            match next.control_state(*control) {
                ControlState::Enabled => self.view.set_control_enabled(*control, true),
                ControlState::Disabled => self.view.set_control_enabled(*control, false),
                ControlState::Unchanged => (),
            }
        }
        if next == SessionState::CanStop {
            self.remote_paused = false;
            self.view.set_pause_toggle(PauseToggle::Pause);
        }
        self.state = next;
    }

    /// Same as [`set_state`](Self::set_state) but from a numeric state code.
    /// Unknown codes are reported and leave the state alone.
    pub fn set_state_code(&mut self, code: u8) -> Result<(), Error> {
        match SessionState::try_from(code) {
            Ok(next) => {
                self.set_state(next);
                Ok(())
            }
            Err(err) => {
                console_error!("{}", err);
                Err(err)
            }
        }
    }

    /// First half of starting playback. Returns what the caller needs to build
    /// the peer, or `None` when a session is already running.
    pub fn begin_start(&mut self) -> Option<StartRequest> {
        if self.state != SessionState::CanStart {
            console_log!("ignoring start request while {:?}", self.state);
            return None;
        }
        self.set_state(SessionState::Starting);
        self.view.show_spinner();
        self.start_token += 1;

        let mode = self.view.media_mode();
        console_log!(
            "Creating WebRtcPeer in {} mode and generating local sdp offer ...",
            mode
        );
        Some(StartRequest {
            token: self.start_token,
            video_url: self.view.video_url(),
            mode,
        })
    }

    pub fn attach_peer(&mut self, peer: P) {
        if let Some(old) = self.peer.replace(peer) {
            old.dispose();
        }
    }

    fn is_current_start(&self, token: u64) -> bool {
        self.state == SessionState::Starting && token == self.start_token
    }

    /// Second half of starting playback: the local offer is ready to go out.
    pub fn offer_ready(&mut self, token: u64, sdp_offer: String, video_url: String) {
        if !self.is_current_start(token) || self.peer.is_none() {
            console_log!("discarding SDP offer from start #{}", token);
            return;
        }
        console_info!("Invoking SDP offer callback function");
        let msg = ClientMessage::Start {
            sdp_offer,
            videourl: video_url,
        };
        if let Err(err) = self.signaling.send(&msg) {
            self.start_failed(token, err);
        }
    }

    pub fn start_failed(&mut self, token: u64, err: Error) {
        console_error!("Error starting playback: {}", err);
        if !self.is_current_start(token) {
            return;
        }
        self.dispose_peer();
        self.set_state(SessionState::CanStart);
        self.view.hide_spinner();
    }

    /// Handler for the remote pause button.
    pub fn pause_or_resume(&mut self) {
        if self.remote_paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    pub fn pause(&mut self) {
        self.toggle_pause();
        console_log!("Pausing video ...");
        self.send(ClientMessage::Pause);
    }

    pub fn resume(&mut self) {
        self.toggle_pause();
        console_log!("Resuming video ...");
        self.send(ClientMessage::Resume);
    }

    pub fn stop(&mut self) {
        console_log!("Stopping video ...");
        self.set_state(SessionState::CanStart);
        if let Some(peer) = self.peer.take() {
            peer.dispose();
            self.send(ClientMessage::Stop);
        }
        self.view.hide_spinner();
    }

    pub fn do_seek(&mut self) {
        let raw = self.view.seek_position();
        match raw.trim().parse::<i64>() {
            Ok(position) => self.send(ClientMessage::DoSeek { position }),
            Err(_) => console_error!("{}", Error::InvalidSeekPosition(raw)),
        }
    }

    pub fn get_position(&mut self) {
        self.send(ClientMessage::GetPosition);
    }

    /// Page is going away.
    pub fn teardown(&mut self) {
        self.dispose_peer();
        self.signaling.close();
    }

    /// Entry point for every text frame received on the signaling socket.
    pub fn handle_frame(&mut self, data: &str) {
        console_info!("Received message: {}", data);
        match ServerMessage::from_json(data) {
            Ok(msg) => self.handle_message(msg),
            Err(err) => self.unrecognized(&Error::from(err).to_string()),
        }
    }

    pub fn handle_message(&mut self, msg: ServerMessage) {
        match msg {
            ServerMessage::StartResponse { sdp_answer } => self.start_response(sdp_answer),
            ServerMessage::Error { message } => {
                if self.state == SessionState::Starting {
                    self.set_state(SessionState::CanStart);
                }
                console_error!("Error message from server: {}", message);
            }
            ServerMessage::PlayEnd => self.play_end(),
            ServerMessage::VideoInfo(info) => self.show_video_data(info),
            ServerMessage::IceCandidate { candidate } => match &self.peer {
                Some(peer) => peer.add_ice_candidate(candidate),
                None => console_error!("Error adding candidate: {}", Error::NoPeer),
            },
            ServerMessage::Seek { message } => console_log!("{}", message),
            ServerMessage::Position { position } => self.view.show_position(position),
            ServerMessage::Unrecognized => self.unrecognized("unknown id"),
        }
    }

    fn start_response(&mut self, sdp_answer: String) {
        if self.state != SessionState::Starting {
            console_log!("ignoring SDP answer while {:?}", self.state);
            return;
        }
        self.set_state(SessionState::CanStop);
        console_log!("SDP answer received from server. Processing ...");
        match &self.peer {
            Some(peer) => peer.process_answer(sdp_answer),
            None => console_error!("{}", Error::NoPeer),
        }
    }

    fn play_end(&mut self) {
        self.set_state(SessionState::CanStart);
        self.dispose_peer();
        self.view.hide_spinner();
    }

    fn show_video_data(&mut self, info: VideoInfo) {
        self.is_seekable = info.is_seekable;
        self.view.show_video_info(&info);
        if info.is_seekable {
            self.view.set_control_enabled(Control::DoSeek, true);
        }
        self.view.set_control_enabled(Control::GetPosition, true);
    }

    fn unrecognized(&mut self, detail: &str) {
        if self.state == SessionState::Starting {
            self.set_state(SessionState::CanStart);
        }
        console_error!("Unrecognized message: {}", detail);
    }

    fn toggle_pause(&mut self) {
        self.remote_paused = !self.remote_paused;
        let toggle = if self.remote_paused {
            PauseToggle::Resume
        } else {
            PauseToggle::Pause
        };
        self.view.set_pause_toggle(toggle);
    }

    fn dispose_peer(&mut self) {
        if let Some(peer) = self.peer.take() {
            peer.dispose();
        }
    }

    fn send(&self, msg: ClientMessage) {
        if let Err(err) = self.signaling.send(&msg) {
            console_error!("Error sending {} message: {}", msg.id(), err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Default)]
    struct FakeSignaling {
        sent: RefCell<Vec<ClientMessage>>,
        closed: Cell<bool>,
        broken: Cell<bool>,
    }

    impl Signaling for FakeSignaling {
        fn send(&self, msg: &ClientMessage) -> Result<(), Error> {
            if self.broken.get() {
                return Err(Error::SocketNotOpen);
            }
            self.sent.borrow_mut().push(msg.clone());
            Ok(())
        }

        fn close(&self) {
            self.closed.set(true);
        }
    }

    #[derive(Default)]
    struct PeerLog {
        answers: Vec<String>,
        candidates: Vec<IceCandidate>,
        disposed: bool,
    }

    struct FakePeer(Rc<RefCell<PeerLog>>);

    impl MediaPeer for FakePeer {
        fn process_answer(&self, sdp_answer: String) {
            self.0.borrow_mut().answers.push(sdp_answer);
        }

        fn add_ice_candidate(&self, candidate: IceCandidate) {
            self.0.borrow_mut().candidates.push(candidate);
        }

        fn dispose(&self) {
            self.0.borrow_mut().disposed = true;
        }
    }

    #[derive(Default)]
    struct FakeView {
        controls: RefCell<HashMap<Control, bool>>,
        pause_toggle: Cell<Option<PauseToggle>>,
        spinner: Cell<bool>,
        video_info: RefCell<Option<VideoInfo>>,
        position: Cell<Option<f64>>,
        seek_input: RefCell<String>,
    }

    impl FakeView {
        fn enabled(&self, control: Control) -> Option<bool> {
            self.controls.borrow().get(&control).copied()
        }
    }

    impl PlayerView for FakeView {
        fn set_control_enabled(&self, control: Control, enabled: bool) {
            self.controls.borrow_mut().insert(control, enabled);
        }

        fn set_pause_toggle(&self, toggle: PauseToggle) {
            self.pause_toggle.set(Some(toggle));
        }

        fn show_spinner(&self) {
            self.spinner.set(true);
        }

        fn hide_spinner(&self) {
            self.spinner.set(false);
        }

        fn show_video_info(&self, info: &VideoInfo) {
            *self.video_info.borrow_mut() = Some(info.clone());
        }

        fn show_position(&self, position: f64) {
            self.position.set(Some(position));
        }

        fn video_url(&self) -> String {
            "http://files.example.com/sintel.webm".into()
        }

        fn media_mode(&self) -> MediaMode {
            MediaMode::VideoOnly
        }

        fn seek_position(&self) -> String {
            self.seek_input.borrow().clone()
        }
    }

    type TestSession = Session<FakeSignaling, FakeView, FakePeer>;

    fn new_session() -> TestSession {
        Session::new(FakeSignaling::default(), FakeView::default())
    }

    fn sent(session: &TestSession) -> Vec<ClientMessage> {
        session.signaling().sent.borrow().clone()
    }

    fn starting_session() -> (TestSession, Rc<RefCell<PeerLog>>) {
        let mut session = new_session();
        let req = session.begin_start().unwrap();
        let log = Rc::new(RefCell::new(PeerLog::default()));
        session.attach_peer(FakePeer(log.clone()));
        session.offer_ready(req.token, "v=0 offer".into(), req.video_url);
        (session, log)
    }

    fn playing_session() -> (TestSession, Rc<RefCell<PeerLog>>) {
        let (mut session, log) = starting_session();
        session.handle_frame(r#"{"id":"startResponse","sdpAnswer":"v=0 answer"}"#);
        (session, log)
    }

    fn assert_controls_match(session: &TestSession, state: SessionState) {
        for control in Control::ALL.iter() {
            let expected = match state.control_state(*control) {
                ControlState::Enabled => true,
                ControlState::Disabled => false,
                ControlState::Unchanged => continue,
            };
            assert_eq!(
                session.view().enabled(*control),
                Some(expected),
                "{:?} in {:?}",
                control,
                state
            );
        }
    }

    #[test]
    fn test_new_session_can_start() {
        let session = new_session();
        assert_eq!(session.state(), SessionState::CanStart);
        assert_controls_match(&session, SessionState::CanStart);
        assert!(sent(&session).is_empty());
    }

    #[test]
    fn test_start_sends_offer() {
        let (session, _) = starting_session();
        assert_eq!(session.state(), SessionState::Starting);
        assert_controls_match(&session, SessionState::Starting);
        assert!(session.view().spinner.get());
        assert_eq!(
            sent(&session),
            vec![ClientMessage::Start {
                sdp_offer: "v=0 offer".into(),
                videourl: "http://files.example.com/sintel.webm".into(),
            }]
        );
    }

    #[test]
    fn test_begin_start_reports_view_inputs() {
        let mut session = new_session();
        let req = session.begin_start().unwrap();
        assert_eq!(req.mode, MediaMode::VideoOnly);
        assert_eq!(req.video_url, "http://files.example.com/sintel.webm");
        // Only one session at a time.
        assert!(session.begin_start().is_none());
    }

    #[test]
    fn test_start_response_moves_to_can_stop() {
        let (session, log) = playing_session();
        assert_eq!(session.state(), SessionState::CanStop);
        assert_controls_match(&session, SessionState::CanStop);
        assert_eq!(log.borrow().answers, vec!["v=0 answer".to_string()]);
        assert_eq!(session.view().pause_toggle.get(), Some(PauseToggle::Pause));
    }

    #[test]
    fn test_error_while_starting_reverts() {
        let (mut session, _) = starting_session();
        session.handle_frame(r#"{"id":"error","message":"media pipeline failed"}"#);
        assert_eq!(session.state(), SessionState::CanStart);
        assert_controls_match(&session, SessionState::CanStart);
    }

    #[test]
    fn test_error_while_playing_keeps_state() {
        let (mut session, _) = playing_session();
        session.handle_frame(r#"{"id":"error","message":"late failure"}"#);
        assert_eq!(session.state(), SessionState::CanStop);
    }

    #[test]
    fn test_play_end_from_any_state() {
        let mut idle = new_session();
        idle.handle_frame(r#"{"id":"playEnd"}"#);
        assert_eq!(idle.state(), SessionState::CanStart);

        let (mut starting, log) = starting_session();
        starting.handle_frame(r#"{"id":"playEnd"}"#);
        assert_eq!(starting.state(), SessionState::CanStart);
        assert!(log.borrow().disposed);

        let (mut playing, log) = playing_session();
        playing.handle_frame(r#"{"id":"playEnd"}"#);
        assert_eq!(playing.state(), SessionState::CanStart);
        assert_controls_match(&playing, SessionState::CanStart);
        assert!(log.borrow().disposed);
        assert!(!playing.has_peer());
        assert!(!playing.view().spinner.get());
    }

    #[test]
    fn test_unrecognized_while_starting_reverts() {
        let (mut session, _) = starting_session();
        session.handle_frame(r#"{"id":"somethingElse"}"#);
        assert_eq!(session.state(), SessionState::CanStart);

        let (mut session, _) = starting_session();
        session.handle_frame("{not json");
        assert_eq!(session.state(), SessionState::CanStart);
    }

    #[test]
    fn test_unrecognized_while_playing_is_ignored() {
        let (mut session, _) = playing_session();
        session.handle_frame(r#"{"id":"somethingElse"}"#);
        assert_eq!(session.state(), SessionState::CanStop);
    }

    #[test]
    fn test_remote_candidates_go_to_peer() {
        let (mut session, log) = starting_session();
        session.handle_frame(
            r#"{"id":"iceCandidate","candidate":{"candidate":"candidate:1 1 UDP 1 10.0.0.1 9 typ host","sdpMid":"0","sdpMLineIndex":0}}"#,
        );
        let log = log.borrow();
        assert_eq!(log.candidates.len(), 1);
        assert_eq!(log.candidates[0].sdp_mid.as_deref(), Some("0"));
    }

    #[test]
    fn test_candidate_without_peer_is_dropped() {
        let mut session = new_session();
        session.handle_frame(r#"{"id":"iceCandidate","candidate":{"candidate":"c"}}"#);
        assert_eq!(session.state(), SessionState::CanStart);
    }

    #[test]
    fn test_video_info_enables_seeking() {
        let (mut session, _) = playing_session();
        session.handle_frame(
            r#"{"id":"videoInfo","isSeekable":true,"initSeekable":0,"endSeekable":52000,"videoDuration":52000}"#,
        );
        assert!(session.is_seekable());
        assert_eq!(session.view().enabled(Control::DoSeek), Some(true));
        assert_eq!(session.view().enabled(Control::GetPosition), Some(true));
        assert_eq!(
            session.view().video_info.borrow().as_ref().map(|i| i.video_duration),
            Some(52000.0)
        );
    }

    #[test]
    fn test_video_info_not_seekable() {
        let (mut session, _) = playing_session();
        session.handle_frame(
            r#"{"id":"videoInfo","isSeekable":false,"initSeekable":0,"endSeekable":0,"videoDuration":0}"#,
        );
        assert!(!session.is_seekable());
        assert_eq!(session.view().enabled(Control::DoSeek), Some(false));
        assert_eq!(session.view().enabled(Control::GetPosition), Some(true));
    }

    #[test]
    fn test_position_and_seek_messages() {
        let (mut session, _) = playing_session();
        session.handle_frame(r#"{"id":"position","position":4200}"#);
        assert_eq!(session.view().position.get(), Some(4200.0));

        session.handle_frame(r#"{"id":"position","position":12.5}"#);
        assert_eq!(session.view().position.get(), Some(12.5));

        session.handle_frame(r#"{"id":"seek","message":"Seek failed"}"#);
        assert_eq!(session.state(), SessionState::CanStop);
    }

    #[test]
    fn test_pause_resume_toggle() {
        let (mut session, _) = playing_session();
        session.pause_or_resume();
        assert_eq!(session.view().pause_toggle.get(), Some(PauseToggle::Resume));
        session.pause_or_resume();
        assert_eq!(session.view().pause_toggle.get(), Some(PauseToggle::Pause));

        let msgs = sent(&session);
        assert_eq!(
            &msgs[msgs.len() - 2..],
            &[ClientMessage::Pause, ClientMessage::Resume]
        );
    }

    #[test]
    fn test_stop_disposes_peer() {
        let (mut session, log) = playing_session();
        session.stop();
        assert_eq!(session.state(), SessionState::CanStart);
        assert!(log.borrow().disposed);
        assert_eq!(sent(&session).last(), Some(&ClientMessage::Stop));

        // A second stop has no peer and stays quiet.
        let count = sent(&session).len();
        session.stop();
        assert_eq!(sent(&session).len(), count);
    }

    #[test]
    fn test_do_seek() {
        let (mut session, _) = playing_session();
        *session.view().seek_input.borrow_mut() = " 15000 ".into();
        session.do_seek();
        assert_eq!(
            sent(&session).last(),
            Some(&ClientMessage::DoSeek { position: 15000 })
        );

        *session.view().seek_input.borrow_mut() = "soon".into();
        let count = sent(&session).len();
        session.do_seek();
        assert_eq!(sent(&session).len(), count);
    }

    #[test]
    fn test_get_position() {
        let (mut session, _) = playing_session();
        session.get_position();
        assert_eq!(sent(&session).last(), Some(&ClientMessage::GetPosition));
    }

    #[test]
    fn test_failed_offer_send_reverts() {
        let mut session = new_session();
        session.signaling().broken.set(true);
        let req = session.begin_start().unwrap();
        let log = Rc::new(RefCell::new(PeerLog::default()));
        session.attach_peer(FakePeer(log.clone()));
        session.offer_ready(req.token, "v=0".into(), req.video_url);

        assert_eq!(session.state(), SessionState::CanStart);
        assert!(log.borrow().disposed);
        assert!(!session.view().spinner.get());
    }

    #[test]
    fn test_late_offer_is_discarded() {
        let mut session = new_session();
        session.offer_ready(0, "v=0".into(), "http://x".into());
        assert!(sent(&session).is_empty());
    }

    #[test]
    fn test_offer_from_abandoned_start_is_dropped() {
        let mut session = new_session();
        let first = session.begin_start().unwrap();
        let first_log = Rc::new(RefCell::new(PeerLog::default()));
        session.attach_peer(FakePeer(first_log.clone()));
        session.handle_frame(r#"{"id":"keepalive"}"#);
        assert_eq!(session.state(), SessionState::CanStart);

        let second = session.begin_start().unwrap();
        assert_ne!(first.token, second.token);
        let second_log = Rc::new(RefCell::new(PeerLog::default()));
        session.attach_peer(FakePeer(second_log.clone()));
        assert!(first_log.borrow().disposed);

        session.offer_ready(first.token, "v=0 stale".into(), first.video_url);
        session.offer_ready(second.token, "v=0 live".into(), second.video_url);
        assert_eq!(
            sent(&session),
            vec![ClientMessage::Start {
                sdp_offer: "v=0 live".into(),
                videourl: "http://files.example.com/sintel.webm".into(),
            }]
        );
    }

    #[test]
    fn test_failure_from_abandoned_start_is_ignored() {
        let mut session = new_session();
        let first = session.begin_start().unwrap();
        session.attach_peer(FakePeer(Rc::new(RefCell::new(PeerLog::default()))));
        session.handle_frame(r#"{"id":"error","message":"busy"}"#);

        let second = session.begin_start().unwrap();
        let live = Rc::new(RefCell::new(PeerLog::default()));
        session.attach_peer(FakePeer(live.clone()));

        session.start_failed(first.token, Error::Js("createOffer rejected".into()));
        assert!(!live.borrow().disposed);
        assert_eq!(session.state(), SessionState::Starting);
        assert!(session.view().spinner.get());

        session.start_failed(second.token, Error::Js("createOffer rejected".into()));
        assert!(live.borrow().disposed);
        assert_eq!(session.state(), SessionState::CanStart);
    }

    #[test]
    fn test_late_start_response_is_ignored() {
        let (mut session, log) = starting_session();
        session.handle_frame(r#"{"id":"playEnd"}"#);
        session.handle_frame(r#"{"id":"startResponse","sdpAnswer":"v=0 answer"}"#);
        assert_eq!(session.state(), SessionState::CanStart);
        assert_controls_match(&session, SessionState::CanStart);
        assert!(log.borrow().answers.is_empty());
    }

    #[test]
    fn test_unknown_state_code() {
        let (mut session, _) = playing_session();
        assert!(session.set_state_code(9).is_err());
        assert_eq!(session.state(), SessionState::CanStop);

        session.set_state_code(0).unwrap();
        assert_eq!(session.state(), SessionState::CanStart);
    }

    #[test]
    fn test_teardown() {
        let (mut session, log) = playing_session();
        session.teardown();
        assert!(log.borrow().disposed);
        assert!(session.signaling().closed.get());
    }

    #[test]
    fn test_media_mode_values() {
        assert_eq!(MediaMode::from_value("audio-only"), MediaMode::AudioOnly);
        assert_eq!(MediaMode::from_value("video-only"), MediaMode::VideoOnly);
        assert_eq!(MediaMode::from_value("video-and-audio"), MediaMode::VideoAndAudio);
        assert_eq!(MediaMode::from_value(""), MediaMode::VideoAndAudio);
        assert!(MediaMode::AudioOnly.audio() && !MediaMode::AudioOnly.video());
        assert!(MediaMode::VideoOnly.video() && !MediaMode::VideoOnly.audio());
    }
}
