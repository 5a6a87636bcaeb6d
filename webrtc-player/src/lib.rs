pub mod config;
pub mod controls;
pub mod errors;
mod peer;
pub mod session;
mod signaling;
pub mod util;
mod view;

use config::PlayerConfig;
use controls::PlayerControls;
use errors::Error;
use peer::Peer;
use session::{Session, Signaling};
use signaling::{SignalingClient, SignalingSender};
use std::cell::RefCell;
use std::rc::Rc;
use util::{element_by_id, get_document, get_window, EventListener};
use view::{is_disabled, DomView};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlElement, HtmlInputElement, HtmlVideoElement};
use webrtc_player_types::ClientMessage;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

type PlayerSession = Session<SignalingSender, DomView, Peer>;

thread_local! {
    static PLAYER: RefCell<Option<Player>> = RefCell::new(None);
}

/// Everything alive while the page is open. Dropping it unhooks every
/// listener it installed.
pub struct Player {
    session: Rc<RefCell<PlayerSession>>,
    _signaling: SignalingClient,
    _listeners: Vec<EventListener>,
}

impl Player {
    pub fn new(config: &PlayerConfig) -> Result<Self, Error> {
        let document = get_document();
        let ids = &config.elements;
        let video: HtmlVideoElement = element_by_id(&document, &ids.video)?;
        let view = DomView::new(&document, &video, ids, &config.images)?;

        let mut signaling = SignalingClient::connect(&config.signaling_url())?;
        let sender = signaling.sender();
        let session = Rc::new(RefCell::new(Session::new(sender.clone(), view)));
        let s = session.clone();
        signaling.on_frame(move |text| s.borrow_mut().handle_frame(&text));

        let mut listeners = Vec::new();
        listeners.extend(bind_media_controls(&document, config, &video)?);

        let start: Element = element_by_id(&document, &ids.start)?;
        let (s, v) = (session.clone(), video.clone());
        listeners.push(on_enabled_click(&start, move || {
            start_session(&s, &v, &sender)
        })?);

        let pause: Element = element_by_id(&document, &ids.pause)?;
        let s = session.clone();
        listeners.push(on_enabled_click(&pause, move || {
            s.borrow_mut().pause_or_resume()
        })?);

        let stop: Element = element_by_id(&document, &ids.stop)?;
        let s = session.clone();
        listeners.push(on_enabled_click(&stop, move || s.borrow_mut().stop())?);

        let get_position: Element = element_by_id(&document, &ids.get_position)?;
        let s = session.clone();
        listeners.push(on_enabled_click(&get_position, move || {
            s.borrow_mut().get_position()
        })?);

        let do_seek: Element = element_by_id(&document, &ids.do_seek)?;
        let s = session.clone();
        listeners.push(on_enabled_click(&do_seek, move || {
            s.borrow_mut().do_seek()
        })?);

        Ok(Self {
            session,
            _signaling: signaling,
            _listeners: listeners,
        })
    }

    pub fn teardown(self) {
        self.session.borrow_mut().teardown();
    }
}

/// Lets page scripts move the session by numeric state code
/// (0 = can start, 1 = can stop, 2 = starting). Unknown codes are rejected
/// and leave the state alone.
#[wasm_bindgen(js_name = setState)]
pub fn set_state(code: u8) -> Result<(), JsValue> {
    PLAYER.with(|p| match p.borrow().as_ref() {
        Some(player) => player
            .session
            .borrow_mut()
            .set_state_code(code)
            .map_err(|err| JsValue::from_str(&err.to_string())),
        None => Err(JsValue::from_str("player is not running")),
    })
}

/// Play/pause, mute, fullscreen, seek and volume act on the video directly.
fn bind_media_controls(
    document: &web_sys::Document,
    config: &PlayerConfig,
    video: &HtmlVideoElement,
) -> Result<Vec<EventListener>, Error> {
    let ids = &config.elements;
    let controls = Rc::new(PlayerControls::new(video.clone()));
    let play_button: HtmlElement = element_by_id(document, &ids.play_pause)?;
    let mute_button: HtmlElement = element_by_id(document, &ids.mute)?;
    let full_screen_button: HtmlElement = element_by_id(document, &ids.full_screen)?;
    let seek_bar: HtmlInputElement = element_by_id(document, &ids.seek_bar)?;
    let volume_bar: HtmlInputElement = element_by_id(document, &ids.volume_bar)?;

    let mut listeners = Vec::new();

    let (c, b) = (controls.clone(), play_button.clone());
    listeners.push(EventListener::new(&play_button, "click", move |_| {
        b.set_inner_text(c.toggle_playback())
    })?);

    let (c, b) = (controls.clone(), mute_button.clone());
    listeners.push(EventListener::new(&mute_button, "click", move |_| {
        b.set_inner_text(c.toggle_mute())
    })?);

    let c = controls.clone();
    listeners.push(EventListener::new(&full_screen_button, "click", move |_| {
        c.fullscreen()
    })?);

    let (c, bar) = (controls.clone(), seek_bar.clone());
    listeners.push(EventListener::new(&seek_bar, "change", move |_| {
        c.seek_to(bar.value_as_number())
    })?);

    let (c, bar) = (controls.clone(), seek_bar.clone());
    listeners.push(EventListener::new(video, "timeupdate", move |_| {
        if let Some(value) = c.time_update() {
            bar.set_value(&value.to_string());
        }
    })?);

    let c = controls.clone();
    listeners.push(EventListener::new(&seek_bar, "mousedown", move |_| {
        c.begin_seek_drag()
    })?);

    let c = controls.clone();
    listeners.push(EventListener::new(&seek_bar, "mouseup", move |_| {
        c.end_seek_drag()
    })?);

    let (c, bar) = (controls, volume_bar.clone());
    listeners.push(EventListener::new(&volume_bar, "change", move |_| {
        c.set_volume(bar.value_as_number())
    })?);

    Ok(listeners)
}

fn on_enabled_click<F>(element: &Element, mut f: F) -> Result<EventListener, Error>
where
    F: FnMut() + 'static,
{
    let el = element.clone();
    EventListener::new(element, "click", move |ev| {
        ev.prevent_default();
        if !is_disabled(&el) {
            f();
        }
    })
}

fn start_session(
    session: &Rc<RefCell<PlayerSession>>,
    video: &HtmlVideoElement,
    sender: &SignalingSender,
) {
    let request = match session.borrow_mut().begin_start() {
        Some(request) => request,
        None => return,
    };

    let ice_sender = sender.clone();
    let peer = Peer::new(video, request.mode, move |candidate| {
        let msg = ClientMessage::OnIceCandidate { candidate };
        if let Err(err) = ice_sender.send(&msg) {
            console_error!("Error sending local candidate: {}", err);
        }
    });
    let peer = match peer {
        Ok(peer) => peer,
        Err(err) => {
            session.borrow_mut().start_failed(request.token, err);
            return;
        }
    };

    let offer = peer.generate_offer();
    session.borrow_mut().attach_peer(peer);

    let s = session.clone();
    let token = request.token;
    spawn_local(async move {
        match offer.await {
            Ok(sdp) => s.borrow_mut().offer_ready(token, sdp, request.video_url),
            Err(err) => s.borrow_mut().start_failed(token, err),
        }
    });
}

fn init() {
    let host = match get_window().location().host() {
        Ok(host) => host,
        Err(err) => {
            console_error!("no page host: {}", Error::from(err));
            return;
        }
    };
    let config = PlayerConfig::from_host(&host);
    match Player::new(&config) {
        Ok(player) => PLAYER.with(|p| *p.borrow_mut() = Some(player)),
        Err(err) => console_error!("failed to set up player: {}", err),
    }
}

fn teardown() {
    if let Some(player) = PLAYER.with(|p| p.borrow_mut().take()) {
        player.teardown();
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    util::set_panic_hook();
    let window = get_window();

    if get_document().ready_state() == "complete" {
        init();
    } else {
        let onload = Closure::once_into_js(init);
        if let Err(err) = window.add_event_listener_with_callback("load", onload.unchecked_ref()) {
            console_error!("failed to wait for page load: {}", Error::from(err));
        }
    }

    let onunload = Closure::once_into_js(teardown);
    if let Err(err) =
        window.add_event_listener_with_callback("beforeunload", onunload.unchecked_ref())
    {
        console_error!("failed to hook page unload: {}", Error::from(err));
    }
}
