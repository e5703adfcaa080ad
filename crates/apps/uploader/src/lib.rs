//! Main page: single-file upload with drag-and-drop and progress, plus the entry link to the drive.

use drive_host::FILES_ROUTE_PREFIX;
use drive_host_web::{use_drive_services, BrowserFile};
use drive_view_model::{submit_upload, UploadState, UploadStatus};
use leptos::{html::Input, *};

fn drop_zone_prompt(drag_over: bool) -> &'static str {
    if drag_over {
        "Drop your file here"
    } else {
        "Choose a file or drag it here"
    }
}

fn status_class(status: &UploadStatus) -> &'static str {
    if status.is_success() {
        "drive-alert drive-alert--success"
    } else {
        "drive-alert drive-alert--error"
    }
}

/// Whether the file input must be emptied so picking the same file again still fires `change`.
fn file_input_needs_reset<F>(state: &UploadState<F>) -> bool {
    !state.is_uploading() && state.selected_file().is_none()
}

fn reset_file_input(file_input: NodeRef<Input>) {
    if let Some(input) = file_input.get_untracked() {
        input.set_value("");
    }
}

#[component]
pub fn UploadPage() -> impl IntoView {
    let services = use_drive_services();
    let upload = create_rw_signal(UploadState::<BrowserFile>::default());
    let file_input = create_node_ref::<Input>();

    let on_submit = {
        let uploads = services.uploads.clone();
        let endpoint = services.config.upload_endpoint.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            let uploads = uploads.clone();
            let endpoint = endpoint.clone();
            spawn_local(async move {
                if let Err(err) = submit_upload(uploads.as_ref(), &endpoint, upload).await {
                    logging::log!("upload not started: {err}");
                }
                if upload.with_untracked(file_input_needs_reset) {
                    reset_file_input(file_input);
                }
            });
        }
    };

    let on_input_change = move |_| {
        let Some(input) = file_input.get_untracked() else {
            return;
        };
        if let Some(file) = BrowserFile::from_input(&input) {
            upload.update(|state| state.select_file(file));
        }
    };

    let remove_file = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        reset_file_input(file_input);
        upload.update(UploadState::remove_file);
    };

    let drop_zone_class = move || {
        if upload.with(UploadState::is_drag_over) {
            "drop-zone drop-zone--active"
        } else {
            "drop-zone"
        }
    };

    view! {
        <div class="drive-page drive-home-page">
            <header class="drive-hero">
                <h1 class="drive-hero__title">"Simple Server"</h1>
                <p class="drive-hero__subtitle">"A Light Weighted Server System"</p>
            </header>

            <section class="drive-card drive-upload">
                <h2 class="drive-card__title">"Upload File"</h2>
                <form class="drive-upload__form" on:submit=on_submit>
                    <div
                        class=drop_zone_class
                        role="button"
                        tabindex="0"
                        on:click=move |_| {
                            if let Some(input) = file_input.get_untracked() {
                                input.click();
                            }
                        }
                        on:dragover=move |ev: ev::DragEvent| {
                            ev.prevent_default();
                            upload.update(|state| state.set_drag_over(true));
                        }
                        on:dragleave=move |ev: ev::DragEvent| {
                            ev.prevent_default();
                            upload.update(|state| state.set_drag_over(false));
                        }
                        on:drop=move |ev: ev::DragEvent| {
                            ev.prevent_default();
                            let dropped = BrowserFile::from_drag_event(&ev);
                            upload.update(|state| {
                                state.set_drag_over(false);
                                if let Some(file) = dropped {
                                    state.select_file(file);
                                }
                            });
                        }
                    >
                        <input
                            type="file"
                            class="drop-zone__input"
                            hidden=true
                            node_ref=file_input
                            on:change=on_input_change
                            on:click=move |ev| ev.stop_propagation()
                        />
                        {move || match upload.with(UploadState::selected_summary) {
                            Some(summary) => view! {
                                <div class="drop-zone__selected">
                                    <p class="drop-zone__title">"File Selected"</p>
                                    <span class="file-chip">
                                        <span class="file-chip__name">{summary.name}</span>
                                        <button
                                            type="button"
                                            class="file-chip__remove"
                                            aria-label="Remove file"
                                            on:click=remove_file
                                        >
                                            "×"
                                        </button>
                                    </span>
                                    <p class="drop-zone__hint">{summary.size_label}</p>
                                </div>
                            }
                            .into_view(),
                            None => view! {
                                <div class="drop-zone__empty">
                                    <p class="drop-zone__title">
                                        {move || drop_zone_prompt(upload.with(UploadState::is_drag_over))}
                                    </p>
                                    <p class="drop-zone__hint">"Click to browse or drag and drop your file"</p>
                                </div>
                            }
                            .into_view(),
                        }}
                    </div>
                    <button
                        type="submit"
                        class="drive-button"
                        disabled=move || !upload.with(UploadState::can_submit)
                    >
                        "Upload File"
                    </button>
                </form>

                {move || upload
                    .with(|state| state.progress_percent().zip(state.progress_label()))
                    .map(|(percent, label)| view! {
                        <div class="upload-progress">
                            <progress class="upload-progress__bar" max="100" value=percent.to_string()></progress>
                            <p class="upload-progress__label">{label}</p>
                        </div>
                    })}

                {move || upload.with(|state| state.status().cloned()).map(|status| view! {
                    <div class=status_class(&status) role="alert">{status.message().to_string()}</div>
                })}
            </section>

            <section class="drive-card drive-entry">
                <h2 class="drive-card__title">"Drive"</h2>
                <a class="drive-button" href=FILES_ROUTE_PREFIX rel="external">"Browse Files Here"</a>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use drive_host::{DriveApiError, MemoryFile};
    use drive_view_model::{UPLOAD_FAILED_MESSAGE, UPLOAD_SUCCESS_MESSAGE};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn drop_zone_prompt_follows_drag_state() {
        assert_eq!(drop_zone_prompt(false), "Choose a file or drag it here");
        assert_eq!(drop_zone_prompt(true), "Drop your file here");
    }

    #[test]
    fn status_class_distinguishes_outcomes() {
        assert_eq!(
            status_class(&UploadStatus::Success(UPLOAD_SUCCESS_MESSAGE.to_string())),
            "drive-alert drive-alert--success"
        );
        assert_eq!(
            status_class(&UploadStatus::Failure(UPLOAD_FAILED_MESSAGE.to_string())),
            "drive-alert drive-alert--error"
        );
    }

    #[test]
    fn file_input_resets_only_after_successful_upload() {
        let uploading = || {
            let mut state = UploadState::default();
            state.select_file(MemoryFile::new("report.pdf", vec![0; 4]));
            state.begin_upload().expect("begin");
            state
        };

        let in_flight = uploading();
        assert!(!file_input_needs_reset(&in_flight));

        let mut accepted = uploading();
        accepted.finish(Ok(200));
        assert!(file_input_needs_reset(&accepted));

        let mut rejected = uploading();
        rejected.finish(Ok(500));
        assert!(!file_input_needs_reset(&rejected));

        let mut broken = uploading();
        broken.finish(Err(DriveApiError::transport("/upload", "network error")));
        assert!(!file_input_needs_reset(&broken));
    }
}
