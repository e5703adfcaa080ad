use drive_app_browser::FileBrowserApp;
use drive_app_uploader::UploadPage;
use drive_host_web::{build_drive_services, host_strategy_name, provide_drive_services};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();
    provide_drive_services(build_drive_services());
    logging::log!("drive ui using `{}` host adapters", host_strategy_name());

    view! {
        <Meta name="description" content="Upload, browse, and search files on a personal server." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=HomeRoute />
                    <Route path="/files/*any" view=FilesRoute />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn HomeRoute() -> impl IntoView {
    view! {
        <Title text="Simple Server" />
        <UploadPage />
    }
}

/// Every `/files/...` path renders the browser; the listing reads the path from `location`.
#[component]
pub fn FilesRoute() -> impl IntoView {
    view! {
        <Title text="File Browser" />
        <FileBrowserApp />
    }
}
