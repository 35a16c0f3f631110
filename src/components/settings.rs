use crate::components::{use_app_config, Icon};
use crate::config::{save_config, AppConfig};
use crate::reservation::LinkMode;
use dioxus::prelude::*;

/// Song service URL and link style, editable from the home page.
#[component]
pub fn ServiceSettings() -> Element {
    let mut config = use_app_config();
    let mut base_url = use_signal(|| config.peek().api_base_url.clone());
    let mut native_only = use_signal(|| config.peek().link_mode == LinkMode::NativeSchemeOnly);
    let mut status = use_signal(|| None::<String>);

    let on_save = move |_| {
        let candidate = AppConfig {
            api_base_url: base_url(),
            link_mode: if native_only() {
                LinkMode::NativeSchemeOnly
            } else {
                LinkMode::PlatformAware
            },
            ..config()
        };

        match candidate.validated() {
            Ok(updated) => {
                if let Err(err) = save_config(&updated) {
                    tracing::warn!("could not persist settings: {err}");
                }
                base_url.set(updated.api_base_url.clone());
                config.set(updated);
                status.set(Some("保存しました".to_string()));
            }
            Err(err) => status.set(Some(err.to_string())),
        }
    };

    rsx! {
        details { class: "service-settings",
            summary {
                Icon { name: "settings".to_string(), class: "w-4 h-4".to_string() }
                span { "設定" }
            }
            label { class: "settings-field",
                span { "楽曲検索サービスURL" }
                input {
                    r#type: "url",
                    value: "{base_url}",
                    oninput: move |e| base_url.set(e.value()),
                }
            }
            label { class: "settings-field inline",
                input {
                    r#type: "checkbox",
                    checked: native_only(),
                    oninput: move |e| native_only.set(e.checked()),
                }
                span { "常にデンモクアプリのリンクを使う" }
            }
            button { class: "save-button", onclick: on_save, "保存" }
            if let Some(status) = status() {
                p { class: "form-message", "{status}" }
            }
        }
    }
}
