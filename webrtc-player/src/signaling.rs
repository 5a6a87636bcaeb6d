use crate::errors::Error;
use crate::session::Signaling;
use crate::{console_error, console_log};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CloseEvent, Event, MessageEvent, WebSocket};
use webrtc_player_types::ClientMessage;

/// Cheap handle for sending on the signaling socket.
#[derive(Clone, Debug)]
pub struct SignalingSender {
    ws: WebSocket,
}

/// Owns the signaling socket and its event handlers.
pub struct SignalingClient {
    sender: SignalingSender,
    _message_cb: Option<Closure<dyn FnMut(MessageEvent)>>,
    _error_cb: Closure<dyn FnMut(Event)>,
    _close_cb: Closure<dyn FnMut(CloseEvent)>,
}

impl SignalingClient {
    pub fn connect(url: &str) -> Result<Self, Error> {
        let ws = WebSocket::new(url)?;

        let error_cb = Closure::wrap(Box::new(move |ev: Event| {
            console_error!("WEBSOCKET ERROR: {}", Error::from(JsValue::from(ev)));
        }) as Box<dyn FnMut(Event)>);
        ws.set_onerror(Some(error_cb.as_ref().unchecked_ref()));

        let close_cb = Closure::wrap(Box::new(move |ev: CloseEvent| {
            console_log!(
                "signaling socket closed (code {}, reason {:?})",
                ev.code(),
                ev.reason()
            );
        }) as Box<dyn FnMut(CloseEvent)>);
        ws.set_onclose(Some(close_cb.as_ref().unchecked_ref()));

        Ok(Self {
            sender: SignalingSender { ws },
            _message_cb: None,
            _error_cb: error_cb,
            _close_cb: close_cb,
        })
    }

    /// Every text frame is handed to `on_frame` as is. Replaces any earlier
    /// handler.
    pub fn on_frame<F>(&mut self, mut on_frame: F)
    where
        F: FnMut(String) + 'static,
    {
        let cb = Closure::wrap(Box::new(move |e: MessageEvent| match e.data().as_string() {
            Some(text) => on_frame(text),
            None => console_log!("ignoring non-text signaling frame"),
        }) as Box<dyn FnMut(MessageEvent)>);
        self.sender
            .ws
            .set_onmessage(Some(cb.as_ref().unchecked_ref()));
        self._message_cb = Some(cb);
    }

    pub fn sender(&self) -> SignalingSender {
        self.sender.clone()
    }
}

impl Drop for SignalingClient {
    fn drop(&mut self) {
        let ws = &self.sender.ws;
        ws.set_onmessage(None);
        ws.set_onerror(None);
        ws.set_onclose(None);
    }
}

impl Signaling for SignalingSender {
    fn send(&self, msg: &ClientMessage) -> Result<(), Error> {
        if self.ws.ready_state() != WebSocket::OPEN {
            return Err(Error::SocketNotOpen);
        }
        let json = msg.to_json()?;
        console_log!("Sending message: {}", json);
        self.ws.send_with_str(&json)?;
        Ok(())
    }

    fn close(&self) {
        if let Err(err) = self.ws.close() {
            console_error!("closing signaling socket: {}", Error::from(err));
        }
    }
}
