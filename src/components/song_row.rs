use crate::api::*;
use crate::components::{use_app_config, Icon};
use crate::reservation::{reservation_url_for, LinkTarget, Platform, VerifiedUrl};
use crate::sort::parse_release_date;
use dioxus::prelude::*;

/// One song in the list, with a reserve link when the request number allows.
#[component]
pub fn SongRow(song: Song) -> Element {
    let config = use_app_config();
    let platform = use_context::<Platform>();

    let reserve_url = match reservation_url_for(&song.dam_request_no, platform, config().link_mode) {
        Ok(url) => Some(url),
        Err(err) => {
            tracing::debug!(title = %song.title, "no reserve link: {err}");
            None
        }
    };

    let release_date = song
        .dam_release_date
        .as_deref()
        .and_then(parse_release_date)
        .map(|date| date.format("%Y/%m/%d").to_string());
    let artist = song.artist.clone().unwrap_or_default();

    rsx! {
        li { class: "song-row",
            div { class: "song-info",
                Icon { name: "music".to_string(), class: "w-4 h-4 song-icon".to_string() }
                div {
                    p { class: "song-title", "{song.title}" }
                    if !artist.is_empty() {
                        p { class: "song-artist", "{artist}" }
                    }
                }
            }
            div { class: "song-meta",
                if !song.dam_request_no.is_empty() {
                    span { class: "request-no", "{song.dam_request_no}" }
                }
                if let Some(release_date) = release_date {
                    span { class: "release-date", "{release_date}" }
                }
                if let Some(url) = reserve_url {
                    ReserveLink { url }
                }
            }
        }
    }
}

/// Renders a [`VerifiedUrl`] as a link. Nothing else is accepted here.
#[component]
pub fn ReserveLink(url: VerifiedUrl) -> Element {
    let target = if url.opens_app() { "_self" } else { "_blank" };
    let label = match url.target() {
        LinkTarget::DenmokuScheme | LinkTarget::AndroidIntent => "デンモクで予約",
        LinkTarget::WebPage => "曲詳細を見る",
    };

    rsx! {
        a {
            class: "reserve-link",
            href: "{url}",
            target,
            rel: "noopener noreferrer",
            "{label}"
        }
    }
}
