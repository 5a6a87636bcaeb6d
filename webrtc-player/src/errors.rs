use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Event;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Js(String),
    #[error("malformed signaling message: {0}")]
    Json(#[from] serde_json::Error),
    #[error("signaling socket is not open")]
    SocketNotOpen,
    #[error("Unknown state {0}")]
    UnknownState(u8),
    #[error("element {0} not found")]
    MissingElement(String),
    #[error("no WebRTC peer")]
    NoPeer,
    #[error("invalid seek position {0:?}")]
    InvalidSeekPosition(String),
}

impl From<JsValue> for Error {
    fn from(err: JsValue) -> Self {
        let msg = match err.as_string() {
            Some(e) => e,
            None => {
                if let Some(ev) = err.dyn_ref::<Event>() {
                    format!(
                        "error on event with type {} and target {:?}",
                        ev.type_(),
                        ev.target()
                    )
                } else {
                    format!("JS error: {:?}", err)
                }
            }
        };
        Error::Js(msg)
    }
}
