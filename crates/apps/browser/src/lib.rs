//! File browser page: the listing for the current `/files/...` URL plus filename search.

use drive_host::{DriveConfig, FileCategory, HOME_HREF};
use drive_host_web::{current_pathname, use_drive_services};
use drive_view_model::{refresh_listing, submit_search, ListingState, SearchController, SearchPhase};
use leptos::*;

fn item_count_label(count: usize) -> String {
    match count {
        1 => "1 item".to_string(),
        n => format!("{n} items"),
    }
}

fn search_button_label(searching: bool) -> &'static str {
    if searching {
        "Searching..."
    } else {
        "Search"
    }
}

fn file_link(
    config: StoredValue<DriveConfig>,
    href: String,
    category: FileCategory,
    body: impl IntoView,
) -> impl IntoView {
    let icon_src = config.with_value(|config| config.icon_href(category));
    view! {
        <li class="file-list__item">
            <a class=format!("file-row file-row--{}", category.token()) href=href rel="external">
                <img class="file-icon" src=icon_src alt="" />
                {body}
            </a>
        </li>
    }
}

#[component]
pub fn FileBrowserApp() -> impl IntoView {
    let services = use_drive_services();
    let config = store_value(services.config.clone());
    let listing = create_rw_signal(ListingState::from_pathname(&current_pathname()));
    let search = create_rw_signal(SearchController::default());

    {
        let api = services.api.clone();
        spawn_local(async move {
            refresh_listing(api.as_ref(), &listing).await;
        });
    }

    let run_search = {
        let api = services.api.clone();
        move || {
            let api = api.clone();
            let current_dir = listing.with_untracked(|state| state.current_path().to_string());
            spawn_local(async move {
                if let Err(err) = submit_search(api.as_ref(), &search, &current_dir).await {
                    logging::log!("search not started: {err}");
                }
            });
        }
    };
    let run_search_on_enter = run_search.clone();

    view! {
        <div class="drive-page drive-browser">
            <header class="drive-toolbar">
                <h1 class="drive-toolbar__title">"File Browser"</h1>
                <div class="drive-search" role="search">
                    <input
                        type="search"
                        class="drive-search__input"
                        placeholder="Search files..."
                        aria-label="Search files"
                        prop:value=move || search.with(|s| s.query_text().to_string())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            search.update(|s| s.set_query_text(value));
                        }
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                run_search_on_enter();
                            }
                        }
                    />
                    <button
                        type="button"
                        class="drive-search__submit"
                        disabled=move || search.with(SearchController::is_searching)
                        on:click=move |_| run_search()
                    >
                        {move || search_button_label(search.with(SearchController::is_searching))}
                    </button>
                    <button
                        type="button"
                        class="drive-search__clear"
                        aria-label="Clear search"
                        on:click=move |_| search.update(SearchController::clear)
                    >
                        "Clear"
                    </button>
                </div>
            </header>

            <main class="drive-content">
                {move || search.with(|s| match s.phase() {
                    SearchPhase::Error { message, details } => Some(view! {
                        <div class="drive-alert drive-alert--error" role="alert">
                            <p>{message.clone()}</p>
                            {details.clone().map(|details| view! {
                                <p class="drive-alert__details">{details}</p>
                            })}
                        </div>
                    }),
                    _ => None,
                })}
                {move || listing.with(|s| s.error_message().map(|message| view! {
                    <div class="drive-alert drive-alert--error" role="alert">{message.to_string()}</div>
                }))}

                <Show when=move || search.with(SearchController::panel_visible)>
                    <section class="drive-card drive-search-results" aria-live="polite">
                        {move || search.with(SearchController::heading).map(|heading| view! {
                            <h2 class="drive-card__title">{heading}</h2>
                        })}
                        {move || search.with(SearchController::message).map(|message| view! {
                            <p class="drive-search-results__status">{message}</p>
                        })}
                        <ul class="file-list">
                            <For
                                each=move || search.with(|s| match s.phase() {
                                    SearchPhase::Results { rows, .. } => rows.clone(),
                                    _ => Vec::new(),
                                })
                                key=|row| row.href.clone()
                                children=move |row| {
                                    let body = view! {
                                        <span class="search-hit">
                                            <span class="search-hit__name">{row.file_name}</span>
                                            <span class="search-hit__path">{row.relative_path}</span>
                                        </span>
                                    };
                                    file_link(config, row.href, row.category, body)
                                }
                            />
                        </ul>
                    </section>
                </Show>

                <section class="drive-card drive-listing">
                    <Show
                        when=move || !listing.with(ListingState::is_loading)
                        fallback=|| view! {
                            <div class="drive-listing__loading" role="status">"Loading..."</div>
                        }
                    >
                        <ul class="file-list">
                            {move || {
                                let nav = listing.with(ListingState::navigation_row);
                                file_link(config, nav.href, nav.category, nav.label)
                            }}
                            <For
                                each=move || listing.with(ListingState::rows)
                                key=|row| row.href.clone()
                                children=move |row| file_link(config, row.href, row.category, row.name)
                            />
                        </ul>
                        <p class="drive-listing__count">
                            {move || item_count_label(listing.with(ListingState::visible_count))}
                        </p>
                    </Show>
                </section>

                <div class="drive-home">
                    <a class="drive-button" href=HOME_HREF rel="external">"Back to Home"</a>
                </div>
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn item_count_label_pluralizes() {
        assert_eq!(item_count_label(0), "0 items");
        assert_eq!(item_count_label(1), "1 item");
        assert_eq!(item_count_label(12), "12 items");
    }

    #[test]
    fn search_button_reflects_in_flight_state() {
        assert_eq!(search_button_label(false), "Search");
        assert_eq!(search_button_label(true), "Searching...");
    }
}
