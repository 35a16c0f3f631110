use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// A karaoke song record as returned by the song search service.
///
/// Only the fields this app reads are typed; everything else the service sends
/// is kept in `extra` so the record survives a round trip unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    /// Hyphenated DAM request number, e.g. `1234-56`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub dam_request_no: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub title_yomi: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub artist_yomi: Option<String>,
    /// ISO date (`2024-06-01`) or RFC 3339 date-time.
    #[serde(default)]
    pub dam_release_date: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Reads an explicit `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Raw search inputs handed to the song list by its host.
///
/// Callers are expected to fill in a single field. When several are filled
/// in, [`SearchParams::query`] decides which one is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    #[serde(default)]
    pub keyword: Option<String>,
    #[serde(default)]
    pub song_name: Option<String>,
    #[serde(default)]
    pub brand_name: Option<String>,
    #[serde(default)]
    pub live_event_id: Option<u64>,
}

/// The single lookup a [`SearchParams`] resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    Keyword(String),
    SongName(String),
    BrandName(String),
    LiveEvent(u64),
}

impl SearchParams {
    pub fn keyword(keyword: impl Into<String>) -> Self {
        Self {
            keyword: Some(keyword.into()),
            ..Default::default()
        }
    }

    pub fn song_name(song_name: impl Into<String>) -> Self {
        Self {
            song_name: Some(song_name.into()),
            ..Default::default()
        }
    }

    pub fn brand_name(brand_name: impl Into<String>) -> Self {
        Self {
            brand_name: Some(brand_name.into()),
            ..Default::default()
        }
    }

    pub fn live_event(live_event_id: u64) -> Self {
        Self {
            live_event_id: Some(live_event_id),
            ..Default::default()
        }
    }

    /// Every lookup these params ask for, in precedence order
    /// (keyword, song name, brand name, live event).
    ///
    /// Blank strings and a zero id count as unset.
    pub fn candidates(&self) -> Vec<SearchQuery> {
        let mut found = Vec::new();
        if let Some(keyword) = present(&self.keyword) {
            found.push(SearchQuery::Keyword(keyword));
        }
        if let Some(song_name) = present(&self.song_name) {
            found.push(SearchQuery::SongName(song_name));
        }
        if let Some(brand_name) = present(&self.brand_name) {
            found.push(SearchQuery::BrandName(brand_name));
        }
        if let Some(id) = self.live_event_id.filter(|id| *id != 0) {
            found.push(SearchQuery::LiveEvent(id));
        }
        found
    }

    /// The lookup that decides the result: the last set field in precedence
    /// order wins, so a live-event id beats a brand name, which beats a song
    /// name, which beats a keyword.
    pub fn query(&self) -> Option<SearchQuery> {
        self.candidates().pop()
    }
}

fn present(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keyword(keyword) => write!(f, "keyword \"{keyword}\""),
            Self::SongName(name) => write!(f, "song name \"{name}\""),
            Self::BrandName(brand) => write!(f, "brand \"{brand}\""),
            Self::LiveEvent(id) => write!(f, "live event #{id}"),
        }
    }
}

/// Client-side ordering applied to fetched results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortType {
    /// Keep the service's relevance order.
    #[default]
    Popular,
    /// Most recent release first.
    Newer,
    /// Japanese phonetic (gojūon) order by title reading.
    Alphabetical,
}

impl SortType {
    pub const ALL: [SortType; 3] = [Self::Popular, Self::Newer, Self::Alphabetical];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Popular => "popular",
            Self::Newer => "newer",
            Self::Alphabetical => "alphabetical",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Popular => "人気順",
            Self::Newer => "新着順",
            Self::Alphabetical => "50音順",
        }
    }
}

impl fmt::Display for SortType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "popular" => Ok(Self::Popular),
            "newer" => Ok(Self::Newer),
            "alphabetical" => Ok(Self::Alphabetical),
            other => Err(format!("unknown sort type: {other}")),
        }
    }
}

/// What kind of search the host intends to show.
///
/// Only drives headings and which input the search form offers; the
/// dispatcher looks at [`SearchParams`] alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum SearchType {
    Keyword,
    SongName,
    LiveEvent,
    All,
    #[default]
    None,
}

impl SearchType {
    pub fn heading(self) -> &'static str {
        match self {
            Self::Keyword => "キーワード検索",
            Self::SongName => "曲名検索",
            Self::LiveEvent => "ライブ楽曲",
            Self::All => "楽曲一覧",
            Self::None => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn song_keeps_unknown_fields() {
        let raw = r#"{
            "damRequestNo": "1234-56",
            "title": "さくら",
            "titleYomi": "さくら",
            "damReleaseDate": "2024-06-01",
            "brandName": "ライブ"
        }"#;
        let song: Song = serde_json::from_str(raw).unwrap();

        assert_eq!(song.dam_request_no, "1234-56");
        assert_eq!(song.title_yomi.as_deref(), Some("さくら"));
        assert_eq!(song.dam_release_date.as_deref(), Some("2024-06-01"));
        assert_eq!(
            song.extra.get("brandName"),
            Some(&serde_json::Value::String("ライブ".to_string()))
        );

        let back = serde_json::to_value(&song).unwrap();
        assert_eq!(back["brandName"], "ライブ");
        assert_eq!(back["damRequestNo"], "1234-56");
    }

    #[test]
    fn null_title_and_request_no_read_as_empty() {
        let song: Song =
            serde_json::from_str(r#"{"damRequestNo":null,"title":null,"titleYomi":null}"#).unwrap();
        assert_eq!(song.dam_request_no, "");
        assert_eq!(song.title, "");
        assert_eq!(song.title_yomi, None);
        assert!(song.extra.is_empty());
    }

    #[test]
    fn blank_fields_are_not_candidates() {
        let params = SearchParams {
            keyword: Some("   ".to_string()),
            song_name: Some(String::new()),
            brand_name: None,
            live_event_id: Some(0),
        };
        assert!(params.candidates().is_empty());
        assert_eq!(params.query(), None);
    }

    #[test]
    fn last_set_field_wins() {
        let params = SearchParams {
            keyword: Some("love".to_string()),
            song_name: Some("さくら".to_string()),
            brand_name: None,
            live_event_id: None,
        };
        assert_eq!(params.query(), Some(SearchQuery::SongName("さくら".to_string())));

        let params = SearchParams {
            live_event_id: Some(42),
            ..params
        };
        assert_eq!(params.query(), Some(SearchQuery::LiveEvent(42)));
        assert_eq!(params.candidates().len(), 3);
    }

    #[test]
    fn params_deserialize_from_camel_case() {
        let params: SearchParams =
            serde_json::from_str(r#"{"songName":"さくら","liveEventId":7}"#).unwrap();
        assert_eq!(params.song_name.as_deref(), Some("さくら"));
        assert_eq!(params.live_event_id, Some(7));
    }

    #[test]
    fn sort_type_parses_case_insensitively() {
        assert_eq!("Newer".parse::<SortType>(), Ok(SortType::Newer));
        assert_eq!(" alphabetical ".parse::<SortType>(), Ok(SortType::Alphabetical));
        assert!("random".parse::<SortType>().is_err());
        assert_eq!(SortType::default(), SortType::Popular);
    }
}
