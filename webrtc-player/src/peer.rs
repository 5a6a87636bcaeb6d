use crate::errors::Error;
use crate::session::{MediaMode, MediaPeer};
use crate::{console_error, console_log};
use futures::future::try_join_all;
use js_sys::Reflect;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{
    HtmlVideoElement, MediaStream, RtcIceCandidateInit, RtcPeerConnection,
    RtcPeerConnectionIceEvent, RtcRtpTransceiverDirection, RtcRtpTransceiverInit, RtcSdpType,
    RtcSessionDescriptionInit, RtcTrackEvent,
};
use webrtc_player_types::IceCandidate;

/// Remote candidates that arrive before the answer has been applied.
#[derive(Debug)]
pub struct PendingCandidates {
    // `None` once the remote description is in place.
    queue: Option<Vec<IceCandidate>>,
}

impl Default for PendingCandidates {
    fn default() -> Self {
        Self::new()
    }
}

impl PendingCandidates {
    pub fn new() -> Self {
        Self {
            queue: Some(Vec::new()),
        }
    }

    /// Holds on to `candidate` while the answer is outstanding. Afterwards it
    /// is handed straight back to be added to the connection.
    pub fn push(&mut self, candidate: IceCandidate) -> Option<IceCandidate> {
        match self.queue.as_mut() {
            Some(queue) => {
                queue.push(candidate);
                None
            }
            None => Some(candidate),
        }
    }

    /// Everything queued so far, in arrival order. Stops queueing.
    pub fn take_for_flush(&mut self) -> Vec<IceCandidate> {
        self.queue.take().unwrap_or_default()
    }
}

/// Receive-only peer connection feeding the page's `<video>` element.
pub struct Peer {
    connection: RtcPeerConnection,
    video: HtmlVideoElement,
    pending: Rc<RefCell<PendingCandidates>>,
    _ice_cb: Closure<dyn FnMut(RtcPeerConnectionIceEvent)>,
    _track_cb: Closure<dyn FnMut(RtcTrackEvent)>,
}

impl Peer {
    pub fn new<F>(video: &HtmlVideoElement, mode: MediaMode, mut on_candidate: F) -> Result<Self, Error>
    where
        F: FnMut(IceCandidate) + 'static,
    {
        let connection = RtcPeerConnection::new()?;

        let mut init = RtcRtpTransceiverInit::new();
        init.direction(RtcRtpTransceiverDirection::Recvonly);
        if mode.audio() {
            connection.add_transceiver_with_str_and_init("audio", &init);
        }
        if mode.video() {
            connection.add_transceiver_with_str_and_init("video", &init);
        }

        let ice_cb = Closure::wrap(Box::new(move |ev: RtcPeerConnectionIceEvent| {
            if let Some(candidate) = ev.candidate() {
                let candidate = IceCandidate {
                    candidate: candidate.candidate(),
                    sdp_mid: candidate.sdp_mid(),
                    sdp_m_line_index: candidate.sdp_m_line_index(),
                };
                console_log!("Local candidate {}", candidate.candidate);
                on_candidate(candidate);
            }
        }) as Box<dyn FnMut(RtcPeerConnectionIceEvent)>);
        connection.set_onicecandidate(Some(ice_cb.as_ref().unchecked_ref()));

        let remote_video = video.clone();
        let track_cb = Closure::wrap(Box::new(move |ev: RtcTrackEvent| {
            match ev.streams().get(0).dyn_into::<MediaStream>() {
                Ok(stream) => remote_video.set_src_object(Some(&stream)),
                Err(_) => console_error!("remote track arrived without a stream"),
            }
        }) as Box<dyn FnMut(RtcTrackEvent)>);
        connection.set_ontrack(Some(track_cb.as_ref().unchecked_ref()));

        Ok(Self {
            connection,
            video: video.clone(),
            pending: Rc::new(RefCell::new(PendingCandidates::new())),
            _ice_cb: ice_cb,
            _track_cb: track_cb,
        })
    }

    /// Creates the local SDP offer and installs it as the local description.
    /// The returned future does not borrow the peer.
    pub fn generate_offer(&self) -> impl std::future::Future<Output = Result<String, Error>> {
        let pc = self.connection.clone();
        async move { local_description(&pc).await }
    }
}

impl MediaPeer for Peer {
    fn process_answer(&self, sdp_answer: String) {
        let pc = self.connection.clone();
        let pending = self.pending.clone();
        spawn_local(async move {
            if let Err(err) = apply_answer(&pc, &sdp_answer, &pending).await {
                console_error!("Error processing SDP answer: {}", err);
            }
        });
    }

    fn add_ice_candidate(&self, candidate: IceCandidate) {
        let candidate = match self.pending.borrow_mut().push(candidate) {
            Some(candidate) => candidate,
            None => return,
        };
        let pc = self.connection.clone();
        spawn_local(async move {
            if let Err(err) = add_candidate(&pc, &candidate).await {
                console_error!("Error adding candidate: {}", err);
            }
        });
    }

    fn dispose(&self) {
        self.connection.set_onicecandidate(None);
        self.connection.set_ontrack(None);
        self.connection.close();
        self.video.set_src_object(None);
    }
}

async fn local_description(pc: &RtcPeerConnection) -> Result<String, Error> {
    let offer = JsFuture::from(pc.create_offer()).await?;
    let sdp_data = Reflect::get(&offer, &JsValue::from_str("sdp"))?
        .as_string()
        .ok_or_else(|| Error::Js("offer has no sdp".to_string()))?;
    let mut desc = RtcSessionDescriptionInit::new(RtcSdpType::Offer);
    desc.sdp(&sdp_data);
    JsFuture::from(pc.set_local_description(&desc)).await?;

    Ok(sdp_data)
}

async fn apply_answer(
    pc: &RtcPeerConnection,
    sdp_answer: &str,
    pending: &RefCell<PendingCandidates>,
) -> Result<(), Error> {
    let mut desc = RtcSessionDescriptionInit::new(RtcSdpType::Answer);
    desc.sdp(sdp_answer);
    JsFuture::from(pc.set_remote_description(&desc)).await?;

    let queued = pending.borrow_mut().take_for_flush();
    try_join_all(queued.iter().map(|c| add_candidate(pc, c))).await?;
    Ok(())
}

async fn add_candidate(pc: &RtcPeerConnection, candidate: &IceCandidate) -> Result<(), Error> {
    let mut cand = RtcIceCandidateInit::new(&candidate.candidate);
    cand.sdp_mid(candidate.sdp_mid.as_deref());
    cand.sdp_m_line_index(candidate.sdp_m_line_index);
    JsFuture::from(pc.add_ice_candidate_with_opt_rtc_ice_candidate_init(Some(&cand))).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(n: u32) -> IceCandidate {
        IceCandidate {
            candidate: format!("candidate:{} 1 UDP 1 10.0.0.{} 9 typ host", n, n),
            sdp_mid: Some("0".into()),
            sdp_m_line_index: Some(0),
        }
    }

    #[test]
    fn test_candidates_wait_for_answer() {
        let mut pending = PendingCandidates::new();
        assert_eq!(pending.push(candidate(1)), None);
        assert_eq!(pending.push(candidate(2)), None);

        assert_eq!(pending.take_for_flush(), vec![candidate(1), candidate(2)]);
    }

    #[test]
    fn test_candidates_pass_through_after_flush() {
        let mut pending = PendingCandidates::new();
        assert!(pending.take_for_flush().is_empty());

        assert_eq!(pending.push(candidate(3)), Some(candidate(3)));
        assert!(pending.take_for_flush().is_empty());
    }
}
