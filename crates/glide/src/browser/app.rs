//! WASM entry point: installs Glide into the current page.

use super::dom::{DomPage, DomTarget};
use super::events::{focus_in, focus_out, modifiers_from};
use super::logger;
use super::overlay::Overlay;
use crate::error::BrowserError;
use glide_core::{
    Direction, GlideConfig, HighlightAnimator, InputHandler, KeyAction, KeyMap, Page, Selector,
};
use log::LevelFilter;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, FocusEvent, KeyboardEvent};

type Listener = Closure<dyn FnMut(Event)>;
type FrameCallback = Closure<dyn FnMut(f64)>;

/// Handle to an installed Glide instance.
///
/// Dropping the handle (`free()` from JavaScript) disposes it.
#[wasm_bindgen]
pub struct Glide {
    inner: Rc<Inner>,
}

struct Inner {
    page: DomPage,
    input: RefCell<InputHandler>,
    selector: Selector,
    animator: RefCell<HighlightAnimator<DomTarget>>,
    overlay: Overlay,
    listeners: RefCell<Vec<(&'static str, Listener)>>,
    frame: RefCell<Option<FrameCallback>>,
    frame_handle: Cell<Option<i32>>,
    disposed: Cell<bool>,
}

impl Glide {
    /// Install into the current page with the given configuration.
    pub fn install(config: &GlideConfig) -> Result<Self, BrowserError> {
        config.validate()?;
        logger::init(config.log_level);

        let page = DomPage::current()?;
        let overlay = Overlay::install(page.document(), &config.overlay_id)?;
        let inner = Rc::new(Inner {
            input: RefCell::new(InputHandler::new(
                KeyMap::new(&config.keys)?,
                config.throttle_ms,
            )),
            selector: Selector::new(config.into()),
            animator: RefCell::new(HighlightAnimator::new(config.into())),
            overlay,
            page,
            listeners: RefCell::new(Vec::new()),
            frame: RefCell::new(None),
            frame_handle: Cell::new(None),
            disposed: Cell::new(false),
        });

        Inner::attach(&inner);
        inner.schedule_frame();
        log::info!("installed, overlay #{}", config.overlay_id);
        Ok(Self { inner })
    }
}

#[wasm_bindgen]
impl Glide {
    /// Move focus in `direction` (`"up"`, `"down"`, `"left"` or `"right"`).
    ///
    /// Returns whether an element accepted focus.
    pub fn navigate(&self, direction: &str) -> Result<bool, JsValue> {
        let direction: Direction = direction
            .parse()
            .map_err(|err: glide_core::UnknownDirection| JsValue::from_str(&err.to_string()))?;
        Ok(self.inner.navigate(direction))
    }

    /// Stop the frame loop, detach all listeners and remove the overlay.
    pub fn dispose(&self) {
        self.inner.dispose();
    }

    /// Whether [`dispose`](Self::dispose) has run.
    #[wasm_bindgen(getter)]
    pub fn disposed(&self) -> bool {
        self.inner.disposed.get()
    }
}

impl Drop for Glide {
    fn drop(&mut self) {
        self.inner.dispose();
    }
}

impl Inner {
    fn attach(this: &Rc<Self>) {
        let weak = Rc::downgrade(this);
        this.listen("keydown", move |event| {
            if let (Some(inner), Some(event)) = (weak.upgrade(), event.dyn_ref::<KeyboardEvent>()) {
                inner.on_key_down(event);
            }
        });

        let weak = Rc::downgrade(this);
        this.listen("keyup", move |event| {
            if let (Some(inner), Some(event)) = (weak.upgrade(), event.dyn_ref::<KeyboardEvent>()) {
                inner.input.borrow_mut().on_key_up(&event.key());
            }
        });

        let weak = Rc::downgrade(this);
        this.listen("focusin", move |event| {
            if let (Some(inner), Some(event)) = (weak.upgrade(), event.dyn_ref::<FocusEvent>()) {
                let (outgoing, incoming) = focus_in(event);
                inner.on_focus_changed(outgoing, incoming);
            }
        });

        let weak = Rc::downgrade(this);
        this.listen("focusout", move |event| {
            if let (Some(inner), Some(event)) = (weak.upgrade(), event.dyn_ref::<FocusEvent>()) {
                let (outgoing, incoming) = focus_out(event);
                inner.on_focus_changed(outgoing, incoming);
            }
        });

        let weak = Rc::downgrade(this);
        *this.frame.borrow_mut() = Some(Closure::new(move |now: f64| {
            if let Some(inner) = weak.upgrade() {
                inner.on_frame(now);
            }
        }));
    }

    /// Capture-phase listener on the document.
    fn listen(&self, kind: &'static str, handler: impl FnMut(Event) + 'static) {
        let callback: Listener = Closure::new(handler);
        match self.page.document().add_event_listener_with_callback_and_bool(
            kind,
            callback.as_ref().unchecked_ref(),
            true,
        ) {
            Ok(()) => self.listeners.borrow_mut().push((kind, callback)),
            Err(err) => log::warn!("could not listen for {kind}: {err:?}"),
        }
    }

    fn now(&self) -> f64 {
        self.page
            .window()
            .performance()
            .map_or(0.0, |performance| performance.now())
    }

    fn on_key_down(&self, event: &KeyboardEvent) {
        let action = self
            .input
            .borrow_mut()
            .on_key_down(&event.key(), modifiers_from(event), self.now());
        if action.prevents_default() {
            event.prevent_default();
            event.stop_propagation();
        }

        match action {
            KeyAction::Navigate(direction) => {
                self.navigate(direction);
            }
            KeyAction::Back => self.go_back(),
            KeyAction::Suppress | KeyAction::Pass => {}
        }
    }

    fn navigate(&self, direction: Direction) -> bool {
        self.selector.select_next(&self.page, direction).is_some()
    }

    fn go_back(&self) {
        let result = self.page.window().history().and_then(|history| history.back());
        if let Err(err) = result {
            log::warn!("history.back() failed: {err:?}");
        }
    }

    fn on_focus_changed(&self, outgoing: Option<DomTarget>, incoming: Option<DomTarget>) {
        let now = self.now();
        self.animator
            .borrow_mut()
            .on_focus_changed(outgoing, incoming, now);
    }

    fn on_frame(&self, now: f64) {
        self.frame_handle.set(None);
        if self.disposed.get() {
            return;
        }
        let frame = self.animator.borrow_mut().tick(
            now,
            self.page.active_element(),
            self.page.viewport(),
        );
        self.overlay.apply(&frame);
        self.schedule_frame();
    }

    fn schedule_frame(&self) {
        if self.disposed.get() {
            return;
        }
        let frame = self.frame.borrow();
        let Some(callback) = frame.as_ref() else {
            return;
        };
        match self
            .page
            .window()
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            Ok(handle) => self.frame_handle.set(Some(handle)),
            Err(err) => log::warn!("requestAnimationFrame failed: {err:?}"),
        }
    }

    fn dispose(&self) {
        if self.disposed.replace(true) {
            return;
        }
        if let Some(handle) = self.frame_handle.take() {
            let _ = self.page.window().cancel_animation_frame(handle);
        }
        for (kind, callback) in self.listeners.borrow_mut().drain(..) {
            let _ = self.page.document().remove_event_listener_with_callback_and_bool(
                kind,
                callback.as_ref().unchecked_ref(),
                true,
            );
        }
        self.overlay.remove();
        log::info!("disposed");
    }
}

/// Initialize the panic hook and the console logger.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logger::init(LevelFilter::Warn);
}

/// Install Glide into the current page.
///
/// `config_json` is an optional JSON object overriding the defaults, e.g.
/// `{"transition_ms": 200, "keys": {"back": ["Backspace"]}}`.
#[wasm_bindgen]
pub fn install(config_json: Option<String>) -> Result<Glide, JsValue> {
    let config = GlideConfig::from_json(config_json.as_deref().unwrap_or_default())
        .map_err(BrowserError::from)?;
    Ok(Glide::install(&config)?)
}
