use crate::config::{ElementIds, SpinnerImages};
use crate::errors::Error;
use crate::console_error;
use crate::session::{Control, MediaMode, PauseToggle, PlayerView};
use crate::util::element_by_id;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlVideoElement};
use webrtc_player_types::VideoInfo;

/// Session-facing half of the page: buttons, input fields and the spinner.
pub struct DomView {
    video: HtmlVideoElement,
    images: SpinnerImages,
    start: Element,
    pause: Element,
    pause_text: HtmlElement,
    pause_icon: Element,
    stop: Element,
    video_url: HtmlInputElement,
    modes: Vec<HtmlInputElement>,
    get_position: Element,
    do_seek: Element,
    seek_position: HtmlInputElement,
    video_position: HtmlInputElement,
    is_seekable: HtmlInputElement,
    init_seek: HtmlInputElement,
    end_seek: HtmlInputElement,
    duration: HtmlInputElement,
}

impl DomView {
    pub fn new(
        document: &Document,
        video: &HtmlVideoElement,
        ids: &ElementIds,
        images: &SpinnerImages,
    ) -> Result<Self, Error> {
        Ok(Self {
            video: video.clone(),
            images: images.clone(),
            start: element_by_id(document, &ids.start)?,
            pause: element_by_id(document, &ids.pause)?,
            pause_text: element_by_id(document, &ids.pause_text)?,
            pause_icon: element_by_id(document, &ids.pause_icon)?,
            stop: element_by_id(document, &ids.stop)?,
            video_url: element_by_id(document, &ids.video_url)?,
            modes: mode_radios(document, &ids.mode)?,
            get_position: element_by_id(document, &ids.get_position)?,
            do_seek: element_by_id(document, &ids.do_seek)?,
            seek_position: element_by_id(document, &ids.seek_position)?,
            video_position: element_by_id(document, &ids.video_position)?,
            is_seekable: element_by_id(document, &ids.is_seekable)?,
            init_seek: element_by_id(document, &ids.init_seek)?,
            end_seek: element_by_id(document, &ids.end_seek)?,
            duration: element_by_id(document, &ids.duration)?,
        })
    }

    fn control_elements(&self, control: Control) -> Vec<&Element> {
        match control {
            Control::Start => vec![&self.start],
            Control::Pause => vec![&self.pause],
            Control::Stop => vec![&self.stop],
            Control::VideoUrl => vec![AsRef::<Element>::as_ref(&self.video_url)],
            Control::Mode => self.modes.iter().map(AsRef::<Element>::as_ref).collect(),
            Control::GetPosition => vec![&self.get_position],
            Control::DoSeek => vec![&self.do_seek],
        }
    }
}

fn mode_radios(document: &Document, name: &str) -> Result<Vec<HtmlInputElement>, Error> {
    let nodes = document.query_selector_all(&format!("input[name='{}']", name))?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<HtmlInputElement>().ok())
        .collect())
}

fn set_background(video: &HtmlVideoElement, value: &str) {
    if let Err(err) = video.style().set_property("background", value) {
        console_error!("setting video background: {}", Error::from(err));
    }
}

/// Whether a page control is currently disabled. Anchors styled as buttons
/// still fire clicks, so handlers check this first.
pub fn is_disabled(element: &Element) -> bool {
    element.has_attribute("disabled")
}

impl PlayerView for DomView {
    fn set_control_enabled(&self, control: Control, enabled: bool) {
        for element in self.control_elements(control) {
            let result = if enabled {
                element.remove_attribute("disabled")
            } else {
                element.set_attribute("disabled", "disabled")
            };
            if let Err(err) = result {
                console_error!("updating {:?} control: {}", control, Error::from(err));
            }
        }
    }

    fn set_pause_toggle(&self, toggle: PauseToggle) {
        let (text, icon) = match toggle {
            PauseToggle::Pause => (" Pause ", "glyphicon glyphicon-pause"),
            PauseToggle::Resume => (" Resume ", "glyphicon glyphicon-play"),
        };
        self.pause_text.set_inner_text(text);
        self.pause_icon.set_class_name(icon);
    }

    fn show_spinner(&self) {
        self.video.set_poster(&self.images.transparent);
        set_background(
            &self.video,
            &format!(
                "center transparent url('{}') no-repeat",
                self.images.spinner
            ),
        );
    }

    fn hide_spinner(&self) {
        self.video.set_src_object(None);
        if let Err(err) = self.video.remove_attribute("src") {
            console_error!("clearing video src: {}", Error::from(err));
        }
        self.video.set_poster(&self.images.idle_poster);
        set_background(&self.video, "");
    }

    fn show_video_info(&self, info: &VideoInfo) {
        self.is_seekable.set_value(if info.is_seekable { "true" } else { "false" });
        self.init_seek.set_value(&info.init_seekable.to_string());
        self.end_seek.set_value(&info.end_seekable.to_string());
        self.duration.set_value(&info.video_duration.to_string());
    }

    fn show_position(&self, position: f64) {
        self.video_position.set_value(&position.to_string());
    }

    fn video_url(&self) -> String {
        self.video_url.value()
    }

    fn media_mode(&self) -> MediaMode {
        self.modes
            .iter()
            .find(|m| m.checked())
            .map(|m| MediaMode::from_value(&m.value()))
            .unwrap_or(MediaMode::VideoAndAudio)
    }

    fn seek_position(&self) -> String {
        self.seek_position.value()
    }
}
