use drive_host::{DriveApiError, ProgressCallback};

pub(crate) async fn upload_file(
    url: &str,
    file: &web_sys::File,
    on_progress: ProgressCallback,
) -> Result<u16, DriveApiError> {
    super::interop::upload_file(url, file, on_progress).await
}
