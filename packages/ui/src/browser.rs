//! Thin wrappers over the browser APIs the widgets need: object URLs for
//! proof previews, reading a picked file, opening tabs and watching
//! element visibility. Native builds get inert fallbacks.

use std::any::Any;
use std::rc::Rc;

use store::proof::{ObjectUrls, ProofCandidate};

/// The file handle a proof preview is created from.
#[cfg(target_arch = "wasm32")]
pub type PickedFile = web_sys::File;
#[cfg(not(target_arch = "wasm32"))]
pub type PickedFile = Vec<u8>;

/// `URL.createObjectURL` / `URL.revokeObjectURL`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserObjectUrls;

impl ObjectUrls for BrowserObjectUrls {
    type Source = PickedFile;

    #[cfg(target_arch = "wasm32")]
    fn create(&self, source: &PickedFile) -> Option<String> {
        web_sys::Url::create_object_url_with_blob(source).ok()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn create(&self, _source: &PickedFile) -> Option<String> {
        None
    }

    fn revoke(&self, url: &str) {
        #[cfg(target_arch = "wasm32")]
        let _ = web_sys::Url::revoke_object_url(url);
        #[cfg(not(target_arch = "wasm32"))]
        let _ = url;
    }
}

/// First file of the `<input type=file>` with `input_id`, with its metadata.
#[cfg(target_arch = "wasm32")]
pub fn picked_file(input_id: &str) -> Option<(PickedFile, ProofCandidate)> {
    use wasm_bindgen::JsCast;

    let input = web_sys::window()?
        .document()?
        .get_element_by_id(input_id)?
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()?;
    let file = input.files()?.get(0)?;
    let meta = ProofCandidate {
        name: file.name(),
        mime: file.type_(),
        size: file.size() as u64,
    };
    Some((file, meta))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn picked_file(_input_id: &str) -> Option<(PickedFile, ProofCandidate)> {
    None
}

/// Clear a file input so picking the same file again fires `change`.
pub fn reset_file_input(input_id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        if let Some(input) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(input_id))
            .and_then(|e| e.dyn_into::<web_sys::HtmlInputElement>().ok())
        {
            input.set_value("");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = input_id;
}

/// Read a picked file into memory for a multipart upload.
#[cfg(target_arch = "wasm32")]
pub async fn file_bytes(file: &PickedFile) -> Result<Vec<u8>, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{e:?}"))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn file_bytes(file: &PickedFile) -> Result<Vec<u8>, String> {
    Ok(file.clone())
}

/// Must run inside the click handler or the popup blocker may step in.
pub fn open_in_new_tab(url: &str) {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(url, "_blank");
    }
    #[cfg(not(target_arch = "wasm32"))]
    tracing::info!(%url, "open in new tab");
}

/// A tab opened while the click is still being handled, pointed at its
/// destination once that is known.
pub struct PendingTab {
    #[cfg(target_arch = "wasm32")]
    window: web_sys::Window,
}

impl PendingTab {
    #[cfg(target_arch = "wasm32")]
    pub fn open() -> Option<Self> {
        let window = web_sys::window()?
            .open_with_url_and_target("about:blank", "_blank")
            .ok()
            .flatten()?;
        Some(Self { window })
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn open() -> Option<Self> {
        None
    }

    pub fn navigate(self, url: &str) {
        #[cfg(target_arch = "wasm32")]
        if self.window.location().set_href(url).is_err() {
            tracing::warn!(%url, "could not redirect pending tab");
        }
        #[cfg(not(target_arch = "wasm32"))]
        tracing::info!(%url, "navigate pending tab");
    }

    pub fn close(self) {
        #[cfg(target_arch = "wasm32")]
        let _ = self.window.close();
    }
}

/// Something that reports how much of an element is on screen.
///
/// The returned handle keeps the subscription alive; dropping it stops
/// further calls to `on_change`.
pub trait VisibilitySource {
    fn watch(
        &self,
        element_id: &str,
        threshold: f64,
        on_change: Box<dyn FnMut(f64)>,
    ) -> Option<Box<dyn Any>>;
}

struct IntersectionSource;

impl VisibilitySource for IntersectionSource {
    fn watch(
        &self,
        element_id: &str,
        threshold: f64,
        on_change: Box<dyn FnMut(f64)>,
    ) -> Option<Box<dyn Any>> {
        VisibilityWatch::new(element_id, threshold, on_change).map(|w| Box::new(w) as Box<dyn Any>)
    }
}

/// Shared handle to a [`VisibilitySource`], usable as a component prop.
#[derive(Clone)]
pub struct Visibility(Rc<dyn VisibilitySource>);

impl Visibility {
    pub fn new(source: impl VisibilitySource + 'static) -> Self {
        Self(Rc::new(source))
    }

    /// IntersectionObserver in the browser, nothing natively.
    pub fn browser() -> Self {
        Self::new(IntersectionSource)
    }

    pub fn watch(
        &self,
        element_id: &str,
        threshold: f64,
        on_change: Box<dyn FnMut(f64)>,
    ) -> Option<Box<dyn Any>> {
        self.0.watch(element_id, threshold, on_change)
    }
}

impl PartialEq for Visibility {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// IntersectionObserver on one element. Disconnects when dropped.
pub struct VisibilityWatch {
    #[cfg(target_arch = "wasm32")]
    observer: web_sys::IntersectionObserver,
    #[cfg(target_arch = "wasm32")]
    _callback: wasm_bindgen::closure::Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

impl VisibilityWatch {
    /// Call `on_change` with the visible ratio of `element_id` whenever it
    /// crosses `threshold`. `None` if the element or the API is missing.
    #[cfg(target_arch = "wasm32")]
    pub fn new(element_id: &str, threshold: f64, mut on_change: impl FnMut(f64) + 'static) -> Option<Self> {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        let element = web_sys::window()?.document()?.get_element_by_id(element_id)?;
        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() {
                        on_change(entry.intersection_ratio());
                    }
                }
            },
        );
        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&wasm_bindgen::JsValue::from_f64(threshold));
        let observer = web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )
        .ok()?;
        observer.observe(&element);
        Some(Self {
            observer,
            _callback: callback,
        })
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn new(_element_id: &str, _threshold: f64, _on_change: impl FnMut(f64) + 'static) -> Option<Self> {
        None
    }
}

impl Drop for VisibilityWatch {
    fn drop(&mut self) {
        #[cfg(target_arch = "wasm32")]
        self.observer.disconnect();
    }
}
