//! Client-side ordering of fetched songs.

use crate::api::{Song, SortType};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::cmp::Reverse;
use tracing::warn;
use unicode_normalization::UnicodeNormalization;

const VOICED_MARK: char = '\u{3099}';
const SEMI_VOICED_MARK: char = '\u{309A}';
const PROLONGED_SOUND_MARK: char = 'ー';

/// Reorders `songs` in place. Every ordering is stable, so songs that compare
/// equal keep the order the service returned them in.
pub fn sort_songs(songs: &mut [Song], sort_type: SortType) {
    match sort_type {
        SortType::Popular => {}
        SortType::Newer => songs.sort_by_cached_key(|song| {
            let date = song.dam_release_date.as_deref().and_then(|raw| {
                let parsed = parse_release_date(raw);
                if parsed.is_none() && !raw.trim().is_empty() {
                    warn!(request_no = %song.dam_request_no, raw, "unreadable release date");
                }
                parsed
            });
            // Undated songs go after every dated one.
            (date.is_none(), Reverse(date))
        }),
        SortType::Alphabetical => songs.sort_by_cached_key(|song| {
            let reading = song
                .title_yomi
                .as_deref()
                .filter(|yomi| !yomi.trim().is_empty())
                .or_else(|| Some(song.title.as_str()).filter(|title| !title.trim().is_empty()));
            let key = reading.map(CollationKey::new);
            (key.is_none(), key)
        }),
    }
}

/// Parses `damReleaseDate` values: RFC 3339, a bare ISO date-time, or
/// `YYYY-MM-DD` / `YYYY/MM/DD`.
pub fn parse_release_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date_time) = DateTime::parse_from_rfc3339(raw) {
        return Some(date_time.naive_utc());
    }
    if let Some(date_time) = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
    {
        return Some(date_time);
    }
    ["%Y-%m-%d", "%Y/%m/%d"]
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Sort key approximating Japanese phonetic collation.
///
/// Primary level: kana folded to full-size hiragana with voicing removed, so
/// カ, か, が and ｶﾞ all compare as か. Latin letters are lowercased. The
/// prolonged sound mark takes the vowel of the kana before it. Secondary
/// level breaks ties on voicing, size and length marks; the raw text breaks
/// whatever is left.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primary: Vec<char>,
    secondary: Vec<u8>,
    raw: String,
}

impl CollationKey {
    pub fn new(text: &str) -> Self {
        let mut primary: Vec<char> = Vec::with_capacity(text.len());
        let mut secondary: Vec<u8> = Vec::with_capacity(text.len());

        for ch in text.trim().nfkd() {
            match ch {
                VOICED_MARK | SEMI_VOICED_MARK => {
                    if let Some(last) = secondary.last_mut() {
                        *last = if ch == VOICED_MARK { 1 } else { 2 };
                    }
                }
                PROLONGED_SOUND_MARK => {
                    let vowel = primary.last().copied().and_then(vowel_of);
                    primary.push(vowel.unwrap_or(PROLONGED_SOUND_MARK));
                    secondary.push(4);
                }
                // Iteration marks repeat the previous kana.
                'ゝ' | 'ヽ' | 'ゞ' | 'ヾ' => {
                    let previous = primary.last().copied().unwrap_or(ch);
                    primary.push(previous);
                    secondary.push(if matches!(ch, 'ゞ' | 'ヾ') { 1 } else { 0 });
                }
                _ => {
                    let (folded, small) = fold_kana(ch);
                    for lowered in folded.to_lowercase() {
                        primary.push(lowered);
                        secondary.push(if small { 3 } else { 0 });
                    }
                }
            }
        }

        Self {
            primary,
            secondary,
            raw: text.to_string(),
        }
    }
}

/// Katakana to hiragana, small kana to full size. Returns the folded char and
/// whether it was small.
fn fold_kana(ch: char) -> (char, bool) {
    let hiragana = match ch {
        'ァ'..='ヶ' => char::from_u32(ch as u32 - 0x60).unwrap_or(ch),
        _ => ch,
    };
    let full = match hiragana {
        'ぁ' => 'あ',
        'ぃ' => 'い',
        'ぅ' => 'う',
        'ぇ' => 'え',
        'ぉ' => 'お',
        'っ' => 'つ',
        'ゃ' => 'や',
        'ゅ' => 'ゆ',
        'ょ' => 'よ',
        'ゎ' => 'わ',
        'ゕ' => 'か',
        'ゖ' => 'け',
        other => return (other, false),
    };
    (full, true)
}

fn vowel_of(kana: char) -> Option<char> {
    const COLUMNS: [(char, &str); 5] = [
        ('あ', "あかさたなはまやらわ"),
        ('い', "いきしちにひみりゐ"),
        ('う', "うくすつぬふむゆる"),
        ('え', "えけせてねへめれゑ"),
        ('お', "おこそとのほもよろを"),
    ];
    COLUMNS
        .iter()
        .find(|(_, row)| row.contains(kana))
        .map(|(vowel, _)| *vowel)
}
