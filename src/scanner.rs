//! Barcode Scanner
//!
//! Thin bindings over the QuaggaJS global. One detection handler is
//! registered per scan session and removed again when the session stops.
//! Quagga initialises asynchronously, so a session may end before its
//! camera is ready; the ready callback checks the session before starting.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::config::{SCANNER_READER, SCANNER_TARGET};
use crate::error::{AppError, AppResult};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Quagga, js_name = init, catch)]
    fn quagga_init(config: &JsValue, callback: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(js_namespace = Quagga, js_name = start)]
    fn quagga_start();

    #[wasm_bindgen(js_namespace = Quagga, js_name = stop)]
    fn quagga_stop();

    #[wasm_bindgen(js_namespace = Quagga, js_name = onDetected)]
    fn quagga_on_detected(handler: &Closure<dyn FnMut(JsValue)>);

    #[wasm_bindgen(js_namespace = Quagga, js_name = offDetected)]
    fn quagga_off_detected(handler: &Closure<dyn FnMut(JsValue)>);
}

/// Liveness of one scan session, shared with its pending init callback
#[derive(Clone, Debug)]
struct Session(Rc<Cell<bool>>);

impl Session {
    fn begin() -> Self {
        Session(Rc::new(Cell::new(true)))
    }

    fn end(&self) {
        self.0.set(false);
    }

    fn is_active(&self) -> bool {
        self.0.get()
    }
}

/// What to do once Quagga finished initialising
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReadyAction {
    /// Session still open: open the camera
    Start,
    /// Session ended while initialising: make sure the camera stays off
    Stop,
    /// Init reported an error
    Fail,
}

fn ready_action(session: &Session, init_ok: bool) -> ReadyAction {
    match (init_ok, session.is_active()) {
        (false, _) => ReadyAction::Fail,
        (true, true) => ReadyAction::Start,
        (true, false) => ReadyAction::Stop,
    }
}

/// A scan session
#[derive(Default)]
pub struct Scanner {
    handler: Option<Closure<dyn FnMut(JsValue)>>,
    session: Option<Session>,
}

impl Scanner {
    /// Open the camera stream and call `on_code` with each detected code.
    ///
    /// `on_code` must not stop the scanner itself; stop it from outside the callback.
    pub fn start(&mut self, mut on_code: impl FnMut(String) + 'static) -> AppResult<()> {
        self.stop();

        let handler = Closure::<dyn FnMut(JsValue)>::new(move |data: JsValue| {
            match detected_code(&data) {
                Some(code) => on_code(code),
                None => log::warn!("scanner result without a code"),
            }
        });

        let config = serde_json::json!({
            "inputStream": { "type": "LiveStream", "target": SCANNER_TARGET },
            "decoder": { "readers": [SCANNER_READER] }
        });
        let config = serde::Serialize::serialize(&config, &serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| AppError::Browser(e.to_string()))?;

        let session = Session::begin();
        let pending = session.clone();
        let on_ready = Closure::once_into_js(move |err: JsValue| {
            match ready_action(&pending, err.is_null() || err.is_undefined()) {
                ReadyAction::Start => quagga_start(),
                ReadyAction::Stop => {
                    log::debug!("scan cancelled during init");
                    quagga_stop();
                }
                ReadyAction::Fail => log::warn!("scanner init failed: {:?}", err),
            }
        });

        if let Err(e) = quagga_init(&config, &on_ready) {
            session.end();
            return Err(AppError::browser(e));
        }
        quagga_on_detected(&handler);
        self.handler = Some(handler);
        self.session = Some(session);
        log::debug!("scanner started");
        Ok(())
    }

    /// Stop the stream and drop the detection handler. No-op when idle.
    pub fn stop(&mut self) {
        if let Some(session) = self.session.take() {
            session.end();
        }
        if let Some(handler) = self.handler.take() {
            quagga_off_detected(&handler);
            quagga_stop();
            log::debug!("scanner stopped");
        }
    }
}

/// `data.codeResult.code`
fn detected_code(data: &JsValue) -> Option<String> {
    let result = js_sys::Reflect::get(data, &JsValue::from_str("codeResult")).ok()?;
    js_sys::Reflect::get(&result, &JsValue::from_str("code")).ok()?.as_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_starts_open_session() {
        let session = Session::begin();
        assert_eq!(ready_action(&session, true), ReadyAction::Start);
    }

    #[test]
    fn test_ready_after_cancel_keeps_camera_off() {
        let session = Session::begin();
        let pending = session.clone();
        // Cancel pressed while the camera permission prompt is still open
        session.end();
        assert!(!pending.is_active());
        assert_eq!(ready_action(&pending, true), ReadyAction::Stop);
    }

    #[test]
    fn test_reopen_only_starts_latest_session() {
        let first = Session::begin();
        let first_pending = first.clone();
        first.end();
        let second = Session::begin();

        assert_eq!(ready_action(&first_pending, true), ReadyAction::Stop);
        assert_eq!(ready_action(&second, true), ReadyAction::Start);
    }

    #[test]
    fn test_ready_init_error() {
        let session = Session::begin();
        assert_eq!(ready_action(&session, false), ReadyAction::Fail);
        session.end();
        assert_eq!(ready_action(&session, false), ReadyAction::Fail);
    }
}
