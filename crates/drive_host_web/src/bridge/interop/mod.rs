//! Shared transport interop for browser bridge domains.
//!
//! This module routes calls to target-specific implementations while preserving a uniform API
//! for higher-level bridge domain modules.

use std::{cell::RefCell, rc::Rc};

use drive_host::{DriveApiError, ProgressCallback};
use futures::channel::oneshot;
use serde::de::DeserializeOwned;

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

type UploadResult = Result<u16, String>;

/// Completion slot shared by the XHR event handlers of one upload; the first terminal event wins.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
#[derive(Clone)]
struct UploadOutcome(Rc<RefCell<Option<oneshot::Sender<UploadResult>>>>);

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
impl UploadOutcome {
    fn channel() -> (Self, oneshot::Receiver<UploadResult>) {
        let (tx, rx) = oneshot::channel();
        (Self(Rc::new(RefCell::new(Some(tx)))), rx)
    }

    fn settle(&self, result: UploadResult) {
        if let Some(tx) = self.0.borrow_mut().take() {
            let _ = tx.send(result);
        }
    }
}

pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, DriveApiError> {
    imp::fetch_json(url).await
}

pub async fn upload_file(
    url: &str,
    file: &web_sys::File,
    on_progress: ProgressCallback,
) -> Result<u16, DriveApiError> {
    imp::upload_file(url, file, on_progress).await
}

pub fn location_pathname() -> Option<String> {
    imp::location_pathname()
}

pub fn meta_content(name: &str) -> Option<String> {
    imp::meta_content(name)
}
