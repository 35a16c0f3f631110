use crate::api::SortType;
use crate::components::{view_label, AppView, Icon};
use crate::config::{load_config_or_default, AppConfig};
use crate::reservation::Platform;
use dioxus::prelude::*;

/// Layout shared by every route: header, sort selector and the routed page.
///
/// Provides `Signal<AppConfig>`, `Signal<SortType>` and the detected
/// [`Platform`] as context.
#[component]
pub fn AppShell() -> Element {
    let config = use_signal(load_config_or_default);
    let mut sort_type = use_signal(|| config.peek().default_sort);
    let platform = use_hook(Platform::detect);
    let current_view = use_route::<AppView>();

    use_context_provider(|| config);
    use_context_provider(|| sort_type);
    use_context_provider(|| platform);

    rsx! {
        div { class: "app-shell",
            header { class: "app-header",
                Link { class: "app-title", to: AppView::Home {},
                    Icon { name: "mic".to_string(), class: "w-5 h-5".to_string() }
                    span { "{view_label(&current_view)}" }
                }

                if !matches!(current_view, AppView::Home {}) {
                    div { class: "sort-select",
                        span { class: "sort-label", "並び替え:" }
                        select {
                            value: "{sort_type}",
                            oninput: move |e| {
                                if let Ok(value) = e.value().parse::<SortType>() {
                                    sort_type.set(value);
                                }
                            },
                            for option_type in SortType::ALL {
                                option { value: "{option_type}", "{option_type.label()}" }
                            }
                        }
                    }
                }
            }

            main { class: "app-main", Outlet::<AppView> {} }
        }
    }
}

/// Convenience accessor for the shared config signal.
pub fn use_app_config() -> Signal<AppConfig> {
    use_context::<Signal<AppConfig>>()
}
