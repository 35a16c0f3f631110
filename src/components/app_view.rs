//! Routes of the song list app.

use crate::components::{
    AppShell, BrandResults, Home, KeywordResults, LiveEventResults, SongNameResults,
};
use dioxus::prelude::*;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum AppView {
    #[layout(AppShell)]
        #[route("/")]
        Home {},
        #[route("/keyword/:keyword")]
        KeywordResults { keyword: String },
        #[route("/songs/:song_name")]
        SongNameResults { song_name: String },
        #[route("/brands/:brand_name")]
        BrandResults { brand_name: String },
        #[route("/live-events/:live_event_id")]
        LiveEventResults { live_event_id: u64 },
}

pub fn view_label(view: &AppView) -> &'static str {
    match view {
        AppView::Home {} => "楽曲検索",
        AppView::KeywordResults { .. } => "キーワード検索",
        AppView::SongNameResults { .. } => "曲名検索",
        AppView::BrandResults { .. } => "ブランド",
        AppView::LiveEventResults { .. } => "ライブ楽曲",
    }
}
