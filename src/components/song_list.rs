use crate::api::*;
use crate::components::{use_app_config, Icon, SongRow};
use crate::search::search_sorted;
use dioxus::prelude::*;

/// Searches the song service with `search_params`, sorts the results by
/// `sort_type` and renders one row per song.
///
/// A new search starts whenever any prop or the config changes; the
/// previous in-flight search is dropped, so the latest inputs always win.
#[component]
pub fn SongList(search_type: SearchType, sort_type: SortType, search_params: SearchParams) -> Element {
    let config = use_app_config();
    let mut reload = use_signal(|| 0u32);

    let songs = use_resource(use_reactive(
        (&search_params, &sort_type),
        move |(params, sort_type)| {
            let _ = reload();
            let config = config();
            async move {
                let result = match SongsClient::new(&config) {
                    Ok(client) => {
                        tracing::debug!(base_url = client.base_url(), "loading songs");
                        search_sorted(&client, &params, sort_type).await
                    }
                    Err(err) => Err(err),
                };
                if let Err(err) = &result {
                    tracing::error!("song search failed: {err}");
                }
                result
            }
        },
    ));

    let subtitle = search_params.query().map(|query| match query {
        SearchQuery::Keyword(keyword) => format!("「{keyword}」"),
        SearchQuery::SongName(name) => format!("曲名「{name}」"),
        SearchQuery::BrandName(brand) => brand,
        SearchQuery::LiveEvent(id) => format!("ライブ #{id}"),
    });

    let body = match &*songs.read() {
        None => rsx! {
            div { class: "song-list-status",
                Icon { name: "loader".to_string(), class: "w-8 h-8".to_string() }
            }
        },
        Some(Err(err)) => rsx! {
            div { class: "song-list-status error",
                p { "楽曲を取得できませんでした" }
                p { class: "detail", "{err}" }
                button {
                    class: "retry-button",
                    onclick: move |_| reload.with_mut(|value| *value = value.wrapping_add(1)),
                    "再読み込み"
                }
            }
        },
        Some(Ok(None)) => rsx! {
            div { class: "song-list-status",
                p { "検索条件を入力してください" }
            }
        },
        Some(Ok(Some(list))) if list.is_empty() => rsx! {
            div { class: "song-list-status",
                Icon { name: "music".to_string(), class: "w-12 h-12".to_string() }
                p { "該当する楽曲はありません" }
            }
        },
        Some(Ok(Some(list))) => rsx! {
            ul { class: "song-rows",
                for (index, song) in list.iter().enumerate() {
                    SongRow { key: "{index}-{song.dam_request_no}", song: song.clone() }
                }
            }
        },
    };

    rsx! {
        section { class: "song-list",
            header { class: "page-header",
                if !search_type.heading().is_empty() {
                    h1 { class: "page-title", "{search_type.heading()}" }
                }
                if let Some(subtitle) = subtitle {
                    p { class: "page-subtitle", "{subtitle}" }
                }
            }

            {body}
        }
    }
}
