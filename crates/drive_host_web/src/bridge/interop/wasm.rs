use drive_host::TransferProgress;
use js_sys::Promise;
use serde_wasm_bindgen::from_value;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::*;

const UPLOAD_FIELD_NAME: &str = "file";

async fn await_promise(promise: Promise) -> Result<JsValue, String> {
    JsFuture::from(promise).await.map_err(js_error_to_string)
}

fn js_error_to_string(err: JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{err:?}")
}

pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, DriveApiError> {
    let window =
        web_sys::window().ok_or_else(|| DriveApiError::transport(url, "window unavailable"))?;
    let response = await_promise(window.fetch_with_str(url))
        .await
        .map_err(|message| DriveApiError::transport(url, message))?
        .dyn_into::<web_sys::Response>()
        .map_err(|_| DriveApiError::transport(url, "fetch resolved with a non-Response value"))?;

    // Non-2xx bodies still carry JSON (`{error, details}` from search), so status is not checked.
    let body_promise = response
        .json()
        .map_err(|err| DriveApiError::decode(url, js_error_to_string(err)))?;
    let body = await_promise(body_promise)
        .await
        .map_err(|message| DriveApiError::decode(url, message))?;
    from_value(body).map_err(|err| DriveApiError::decode(url, err.to_string()))
}

pub async fn upload_file(
    url: &str,
    file: &web_sys::File,
    mut on_progress: ProgressCallback,
) -> Result<u16, DriveApiError> {
    let transport_error = |err: JsValue| DriveApiError::transport(url, js_error_to_string(err));

    let form = web_sys::FormData::new().map_err(transport_error)?;
    form.append_with_blob(UPLOAD_FIELD_NAME, file)
        .map_err(transport_error)?;

    let xhr = web_sys::XmlHttpRequest::new().map_err(transport_error)?;
    xhr.open("POST", url).map_err(transport_error)?;
    let upload = xhr.upload().map_err(transport_error)?;

    let (outcome, rx) = UploadOutcome::channel();

    let on_progress_event = Closure::<dyn FnMut(web_sys::ProgressEvent)>::wrap(Box::new(
        move |event: web_sys::ProgressEvent| {
            on_progress(TransferProgress {
                loaded: event.loaded() as u64,
                total: event.length_computable().then(|| event.total() as u64),
            });
        },
    ));
    upload.set_onprogress(Some(on_progress_event.as_ref().unchecked_ref()));

    let xhr_for_load = xhr.clone();
    let load_outcome = outcome.clone();
    let on_load = Closure::<dyn FnMut(web_sys::ProgressEvent)>::wrap(Box::new(move |_| {
        load_outcome.settle(xhr_for_load.status().map_err(js_error_to_string));
    }));
    xhr.set_onload(Some(on_load.as_ref().unchecked_ref()));

    let settle_with = |message: &'static str| {
        let outcome = outcome.clone();
        Closure::<dyn FnMut(web_sys::ProgressEvent)>::wrap(Box::new(move |_| {
            outcome.settle(Err(message.to_string()));
        }))
    };
    let on_error = settle_with("network error during upload");
    xhr.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    let on_abort = settle_with("upload was aborted");
    xhr.set_onabort(Some(on_abort.as_ref().unchecked_ref()));
    let on_timeout = settle_with("upload timed out");
    xhr.set_ontimeout(Some(on_timeout.as_ref().unchecked_ref()));

    // Handlers are detached before their closures drop.
    let detach = || {
        upload.set_onprogress(None);
        xhr.set_onload(None);
        xhr.set_onerror(None);
        xhr.set_onabort(None);
        xhr.set_ontimeout(None);
    };

    if let Err(err) = xhr.send_with_opt_form_data(Some(&form)) {
        detach();
        return Err(transport_error(err));
    }

    let result = rx.await;
    detach();
    drop((on_progress_event, on_load, on_error, on_abort, on_timeout));

    result
        .map_err(|_| DriveApiError::transport(url, "upload was interrupted"))?
        .map_err(|message| DriveApiError::transport(url, message))
}

pub fn location_pathname() -> Option<String> {
    web_sys::window()?.location().pathname().ok()
}

pub fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    document
        .query_selector(&format!("meta[name=\"{name}\"]"))
        .ok()??
        .get_attribute("content")
}
