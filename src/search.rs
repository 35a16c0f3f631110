//! Turns the song list's search inputs into a single lookup on the song
//! search service.

use crate::api::{SearchParams, SearchQuery, Song, SongSearchService, SongServiceError, SortType};
use crate::sort::sort_songs;
use tracing::{debug, info, warn};

/// Runs the lookup selected by `params`.
///
/// Returns `Ok(None)` when no field is set. When several fields are set only
/// the winning one (see [`SearchParams::query`]) reaches the service; the rest
/// are logged and ignored. Service errors are returned as-is.
pub async fn search<S>(service: &S, params: &SearchParams) -> Result<Option<Vec<Song>>, SongServiceError>
where
    S: SongSearchService,
{
    let mut candidates = params.candidates();
    let Some(query) = candidates.pop() else {
        debug!("search skipped: no search parameters set");
        return Ok(None);
    };

    if !candidates.is_empty() {
        let ignored: Vec<String> = candidates.iter().map(ToString::to_string).collect();
        warn!(
            "several search parameters set; using {query}, ignoring {}",
            ignored.join(", ")
        );
    }

    info!("searching songs by {query}");
    let songs = match &query {
        SearchQuery::Keyword(keyword) => service.by_keyword(keyword).await?,
        SearchQuery::SongName(song_name) => service.by_song_name(song_name).await?,
        SearchQuery::BrandName(brand_name) => service.by_brand_name(brand_name).await?,
        SearchQuery::LiveEvent(id) => service.by_live_event_id(*id).await?,
    };
    debug!("{} songs for {query}", songs.len());

    Ok(Some(songs))
}

/// [`search`] followed by an in-place [`sort_songs`] on the results.
pub async fn search_sorted<S>(
    service: &S,
    params: &SearchParams,
    sort_type: SortType,
) -> Result<Option<Vec<Song>>, SongServiceError>
where
    S: SongSearchService,
{
    let mut songs = search(service, params).await?;
    if let Some(songs) = songs.as_mut() {
        sort_songs(songs, sort_type);
    }
    Ok(songs)
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory service that records every call it receives.
    #[derive(Default)]
    pub struct RecordingService {
        pub calls: RefCell<Vec<SearchQuery>>,
        pub results: HashMap<String, Vec<Song>>,
        pub fail_with: Option<SongServiceError>,
    }

    impl RecordingService {
        pub fn with(mut self, key: &str, songs: Vec<Song>) -> Self {
            self.results.insert(key.to_string(), songs);
            self
        }

        fn answer(&self, query: SearchQuery, key: String) -> Result<Vec<Song>, SongServiceError> {
            self.calls.borrow_mut().push(query);
            if let Some(err) = &self.fail_with {
                return Err(err.clone());
            }
            Ok(self.results.get(&key).cloned().unwrap_or_default())
        }
    }

    impl SongSearchService for RecordingService {
        async fn by_keyword(&self, keyword: &str) -> Result<Vec<Song>, SongServiceError> {
            self.answer(SearchQuery::Keyword(keyword.to_string()), format!("keyword:{keyword}"))
        }

        async fn by_song_name(&self, song_name: &str) -> Result<Vec<Song>, SongServiceError> {
            self.answer(SearchQuery::SongName(song_name.to_string()), format!("song:{song_name}"))
        }

        async fn by_brand_name(&self, brand_name: &str) -> Result<Vec<Song>, SongServiceError> {
            self.answer(SearchQuery::BrandName(brand_name.to_string()), format!("brand:{brand_name}"))
        }

        async fn by_live_event_id(&self, live_event_id: u64) -> Result<Vec<Song>, SongServiceError> {
            self.answer(SearchQuery::LiveEvent(live_event_id), format!("live:{live_event_id}"))
        }
    }

    pub fn song(request_no: &str, title: &str) -> Song {
        Song {
            dam_request_no: request_no.to_string(),
            title: title.to_string(),
            ..Default::default()
        }
    }
}
