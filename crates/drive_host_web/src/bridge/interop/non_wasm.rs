use super::*;

fn unsupported(api: &str) -> DriveApiError {
    DriveApiError::Unsupported(format!(
        "browser {api} is only available when compiled for wasm32"
    ))
}

pub async fn fetch_json<T: DeserializeOwned>(_url: &str) -> Result<T, DriveApiError> {
    Err(unsupported("fetch"))
}

pub async fn upload_file(
    _url: &str,
    _file: &web_sys::File,
    _on_progress: ProgressCallback,
) -> Result<u16, DriveApiError> {
    Err(unsupported("upload"))
}

pub fn location_pathname() -> Option<String> {
    None
}

pub fn meta_content(_name: &str) -> Option<String> {
    None
}
