use crate::components::{AppView, Icon, ServiceSettings};
use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchMode {
    Keyword,
    SongName,
    BrandName,
    LiveEvent,
}

impl SearchMode {
    const ALL: [SearchMode; 4] = [Self::Keyword, Self::SongName, Self::BrandName, Self::LiveEvent];

    fn value(self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::SongName => "songName",
            Self::BrandName => "brandName",
            Self::LiveEvent => "liveEvent",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Keyword => "キーワード",
            Self::SongName => "曲名",
            Self::BrandName => "ブランド",
            Self::LiveEvent => "ライブID",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.value() == value)
    }

    /// The results route for `input`, or a message explaining why there is none.
    fn route(self, input: &str) -> Result<AppView, &'static str> {
        let input = input.trim();
        if input.is_empty() {
            return Err("検索ワードを入力してください");
        }
        Ok(match self {
            Self::Keyword => AppView::KeywordResults {
                keyword: input.to_string(),
            },
            Self::SongName => AppView::SongNameResults {
                song_name: input.to_string(),
            },
            Self::BrandName => AppView::BrandResults {
                brand_name: input.to_string(),
            },
            Self::LiveEvent => match input.parse::<u64>() {
                Ok(live_event_id) if live_event_id > 0 => AppView::LiveEventResults { live_event_id },
                _ => return Err("ライブIDは数字で入力してください"),
            },
        })
    }
}

#[component]
pub fn Home() -> Element {
    let navigator = use_navigator();
    let mut mode = use_signal(|| SearchMode::Keyword);
    let mut query = use_signal(String::new);
    let mut message = use_signal(|| None::<&'static str>);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        match mode().route(&query()) {
            Ok(route) => {
                message.set(None);
                navigator.push(route);
            }
            Err(reason) => message.set(Some(reason)),
        }
    };

    rsx! {
        div { class: "home",
            form { class: "search-form", onsubmit: on_submit,
                select {
                    value: "{mode().value()}",
                    oninput: move |e| {
                        if let Some(selected) = SearchMode::parse(&e.value()) {
                            mode.set(selected);
                        }
                    },
                    for option_mode in SearchMode::ALL {
                        option { value: "{option_mode.value()}", "{option_mode.label()}" }
                    }
                }
                div { class: "search-input",
                    Icon { name: "search".to_string(), class: "w-4 h-4".to_string() }
                    input {
                        r#type: if mode() == SearchMode::LiveEvent { "number" } else { "search" },
                        placeholder: "{mode().label()}",
                        value: "{query}",
                        oninput: move |e| query.set(e.value()),
                    }
                }
                button { r#type: "submit", class: "search-button", "検索" }
            }
            if let Some(message) = message() {
                p { class: "form-message", "{message}" }
            }

            ServiceSettings {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn routes_each_mode() {
        assert_eq!(
            SearchMode::Keyword.route(" love "),
            Ok(AppView::KeywordResults { keyword: "love".into() })
        );
        assert_eq!(
            SearchMode::SongName.route("さくら"),
            Ok(AppView::SongNameResults { song_name: "さくら".into() })
        );
        assert_eq!(
            SearchMode::BrandName.route("LIVE DAM"),
            Ok(AppView::BrandResults { brand_name: "LIVE DAM".into() })
        );
        assert_eq!(
            SearchMode::LiveEvent.route("12"),
            Ok(AppView::LiveEventResults { live_event_id: 12 })
        );
    }

    #[test]
    fn rejects_blank_and_bad_ids() {
        assert!(SearchMode::Keyword.route("   ").is_err());
        assert!(SearchMode::LiveEvent.route("abc").is_err());
        assert!(SearchMode::LiveEvent.route("0").is_err());
    }

    #[test]
    fn mode_values_round_trip() {
        for mode in SearchMode::ALL {
            assert_eq!(SearchMode::parse(mode.value()), Some(mode));
        }
        assert_eq!(SearchMode::parse("all"), None);
    }
}
