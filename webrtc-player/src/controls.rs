//! Local playback controls: play/pause, mute, fullscreen, seek and volume
//! buttons acting directly on the `<video>` element.

use crate::errors::Error;
use crate::{console_error, console_log};
use js_sys::{Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{HtmlMediaElement, HtmlVideoElement};

/// Seek bar range is 0..=100.
const SEEK_BAR_MAX: f64 = 100.0;

/// Fullscreen entry points, in order of preference.
const FULLSCREEN_METHODS: [&str; 3] = [
    "requestFullscreen",
    "mozRequestFullScreen",
    "webkitRequestFullscreen",
];

pub trait MediaElement {
    fn paused(&self) -> bool;
    fn play(&self);
    fn pause(&self);
    fn muted(&self) -> bool;
    fn set_muted(&self, muted: bool);
    fn current_time(&self) -> f64;
    fn set_current_time(&self, time: f64);
    fn duration(&self) -> f64;
    fn set_volume(&self, volume: f64);
    fn request_fullscreen(&self) -> Result<bool, Error>;
}

/// Time in seconds the seek bar `value` points at, if the duration is known.
pub fn seek_time(duration: f64, value: f64) -> Option<f64> {
    if !duration.is_finite() || duration <= 0.0 {
        return None;
    }
    Some(duration * (value / SEEK_BAR_MAX))
}

/// Seek bar position for `current_time`, if the duration is known.
pub fn seek_bar_value(duration: f64, current_time: f64) -> Option<f64> {
    if !duration.is_finite() || duration <= 0.0 {
        return None;
    }
    Some((SEEK_BAR_MAX / duration) * current_time)
}

pub struct PlayerControls<M> {
    media: M,
}

impl<M: MediaElement> PlayerControls<M> {
    pub fn new(media: M) -> Self {
        Self { media }
    }

    #[cfg(test)]
    pub fn media(&self) -> &M {
        &self.media
    }

    /// Returns the new label for the play/pause button.
    pub fn toggle_playback(&self) -> &'static str {
        if self.media.paused() {
            self.media.play();
            "Pause"
        } else {
            self.media.pause();
            "Play"
        }
    }

    /// Returns the new label for the mute button.
    pub fn toggle_mute(&self) -> &'static str {
        if self.media.muted() {
            self.media.set_muted(false);
            "Mute"
        } else {
            self.media.set_muted(true);
            "Unmute"
        }
    }

    pub fn fullscreen(&self) {
        match self.media.request_fullscreen() {
            Ok(true) => (),
            Ok(false) => console_log!("fullscreen is not supported by this browser"),
            Err(err) => console_error!("fullscreen request failed: {}", err),
        }
    }

    /// Seek bar moved by the user.
    pub fn seek_to(&self, value: f64) {
        if let Some(time) = seek_time(self.media.duration(), value) {
            self.media.set_current_time(time);
        }
    }

    /// New seek bar value after a `timeupdate` from the video.
    pub fn time_update(&self) -> Option<f64> {
        seek_bar_value(self.media.duration(), self.media.current_time())
    }

    pub fn begin_seek_drag(&self) {
        self.media.pause();
    }

    pub fn end_seek_drag(&self) {
        self.media.play();
    }

    pub fn set_volume(&self, volume: f64) {
        self.media.set_volume(volume);
    }
}

impl MediaElement for HtmlVideoElement {
    fn paused(&self) -> bool {
        HtmlMediaElement::paused(self)
    }

    fn play(&self) {
        match HtmlMediaElement::play(self) {
            Ok(promise) => spawn_local(async move {
                if let Err(err) = JsFuture::from(promise).await {
                    console_error!("video playback failed: {}", Error::from(err));
                }
            }),
            Err(err) => console_error!("video playback failed: {}", Error::from(err)),
        }
    }

    fn pause(&self) {
        if let Err(err) = HtmlMediaElement::pause(self) {
            console_error!("video pause failed: {}", Error::from(err));
        }
    }

    fn muted(&self) -> bool {
        HtmlMediaElement::muted(self)
    }

    fn set_muted(&self, muted: bool) {
        HtmlMediaElement::set_muted(self, muted)
    }

    fn current_time(&self) -> f64 {
        HtmlMediaElement::current_time(self)
    }

    fn set_current_time(&self, time: f64) {
        HtmlMediaElement::set_current_time(self, time)
    }

    fn duration(&self) -> f64 {
        HtmlMediaElement::duration(self)
    }

    fn set_volume(&self, volume: f64) {
        HtmlMediaElement::set_volume(self, volume)
    }

    fn request_fullscreen(&self) -> Result<bool, Error> {
        for name in FULLSCREEN_METHODS.iter() {
            let method = Reflect::get(self, &JsValue::from_str(name))?;
            if let Some(f) = method.dyn_ref::<Function>() {
                let ret = f.call0(self)?;
                // Only the standard API returns a promise.
                if let Ok(promise) = ret.dyn_into::<js_sys::Promise>() {
                    spawn_local(async move {
                        if let Err(err) = JsFuture::from(promise).await {
                            console_error!("fullscreen request rejected: {}", Error::from(err));
                        }
                    });
                }
                return Ok(true);
            }
        }
        Ok(false)
    }
}
