use crate::errors::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Event, EventTarget, Window};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    pub fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    pub fn info(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    pub fn error(s: &str);
}

// Native builds only exist for unit tests, which can't reach the JS console.
#[cfg(not(target_arch = "wasm32"))]
pub fn log(s: &str) {
    println!("{}", s);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn info(s: &str) {
    println!("{}", s);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn error(s: &str) {
    eprintln!("{}", s);
}

#[macro_export]
macro_rules! console_log {
    ($($t:tt)*) => (crate::util::log(&format_args!($($t)*).to_string()))
}

#[macro_export]
macro_rules! console_info {
    ($($t:tt)*) => (crate::util::info(&format_args!($($t)*).to_string()))
}

#[macro_export]
macro_rules! console_error {
    ($($t:tt)*) => (crate::util::error(&format_args!($($t)*).to_string()))
}

pub fn set_panic_hook() {
    // When the `console_error_panic_hook` feature is enabled, we can call the
    // `set_panic_hook` function at least once during initialization, and then
    // we will get better error messages if our code ever panics.
    //
    // For more details see
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

pub fn get_window() -> Window {
    window().expect("no global window")
}

pub fn get_document() -> Document {
    get_window().document().expect("no global document exists")
}

/// Looks up `#id` and casts it to the expected element type.
pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, Error> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| Error::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| Error::MissingElement(format!("{} (unexpected element type)", id)))
}

/// A DOM event listener that is removed again when dropped.
pub struct EventListener {
    target: EventTarget,
    event_type: &'static str,
    cb: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new<F>(target: &EventTarget, event_type: &'static str, f: F) -> Result<Self, Error>
    where
        F: FnMut(Event) + 'static,
    {
        let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event_type, cb.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event_type,
            cb,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let cb = self.cb.as_ref().unchecked_ref();
        if let Err(err) = self.target.remove_event_listener_with_callback(self.event_type, cb) {
            console_error!("removing {} listener: {}", self.event_type, Error::from(err));
        }
    }
}
