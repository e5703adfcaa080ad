use drive_host::DriveApiError;
use serde::de::DeserializeOwned;

pub(crate) async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, DriveApiError> {
    super::interop::fetch_json(url).await
}
