//! Route pages that host a [`SongList`] for one kind of search.

use crate::api::{SearchParams, SearchType, SortType};
use crate::components::SongList;
use dioxus::prelude::*;

#[component]
pub fn KeywordResults(keyword: String) -> Element {
    let sort_type = use_context::<Signal<SortType>>();
    rsx! {
        SongList {
            search_type: SearchType::Keyword,
            sort_type: sort_type(),
            search_params: SearchParams::keyword(keyword),
        }
    }
}

#[component]
pub fn SongNameResults(song_name: String) -> Element {
    let sort_type = use_context::<Signal<SortType>>();
    rsx! {
        SongList {
            search_type: SearchType::SongName,
            sort_type: sort_type(),
            search_params: SearchParams::song_name(song_name),
        }
    }
}

#[component]
pub fn BrandResults(brand_name: String) -> Element {
    let sort_type = use_context::<Signal<SortType>>();
    rsx! {
        SongList {
            search_type: SearchType::All,
            sort_type: sort_type(),
            search_params: SearchParams::brand_name(brand_name),
        }
    }
}

#[component]
pub fn LiveEventResults(live_event_id: u64) -> Element {
    let sort_type = use_context::<Signal<SortType>>();
    rsx! {
        SongList {
            search_type: SearchType::LiveEvent,
            sort_type: sort_type(),
            search_params: SearchParams::live_event(live_event_id),
        }
    }
}
