// SPDX-License-Identifier: MPL-2.0
use astro_gallery::apod::{client, date_range, ApodClient, RangeError};
use astro_gallery::config::{self, Config};
use astro_gallery::i18n::fluent::I18n;
use astro_gallery::ui::{gallery, modal};
use tempfile::tempdir;

/// The feed body for the range 2024-06-01..2024-06-02: one image, one video.
const TWO_DAY_FEED: &str = r#"[
    {"date":"2024-06-01","title":"A","url":"u1","explanation":"e1","media_type":"image"},
    {"date":"2024-06-02","title":"B","url":"u2","explanation":"e2","media_type":"video"}
]"#;

#[test]
fn two_day_scenario_renders_one_card_and_drives_the_modal() {
    let items = client::decode_items(TWO_DAY_FEED).expect("feed should decode");
    assert_eq!(items.len(), 2);

    // The video entry is dropped; exactly one card remains.
    let mut state = gallery::State::new();
    state.set_loading();
    state.set_items(items);
    assert_eq!(state.outcome(), Some(gallery::RenderOutcome::Cards(1)));

    let card = state.image_items().next().expect("one card expected");
    assert_eq!(card.title, "A");
    assert_eq!(card.long_date(), "June 1, 2024");
    let card_date = card.date;

    // Activating the card opens the modal on the same item.
    let mut detail = modal::State::new();
    match gallery::update(&mut state, gallery::Message::CardPressed(card_date)) {
        gallery::Event::OpenDetail(item) => detail.open(item),
        gallery::Event::None => panic!("card press should open the detail modal"),
    }

    assert!(detail.is_open());
    assert!(detail.is_scroll_locked());
    let shown = detail.current().expect("modal should hold the item").clone();
    assert_eq!(shown.title, "A");
    assert_eq!(shown.long_date(), "June 1, 2024");
    assert_eq!(shown.explanation, "e1");

    // Each close path ends in the same hidden, unlocked state.
    for message in [
        modal::Message::ClosePressed,
        modal::Message::BackdropPressed,
        modal::Message::EscapePressed,
    ] {
        let item = shown.clone();
        detail.open(item);
        modal::update(&mut detail, message);
        assert!(!detail.is_open());
        assert!(!detail.is_scroll_locked());
    }
}

#[test]
fn blank_dates_never_build_a_request() {
    assert_eq!(date_range::parse("", "2024-06-02"), Err(RangeError::MissingStart));
    assert_eq!(date_range::parse("2024-06-01", ""), Err(RangeError::MissingEnd));

    // A full pair builds the exact request of the scenario.
    let range = date_range::parse("2024-06-01", "2024-06-02").expect("range should parse");
    let url = ApodClient::new("DEMO_KEY").range_url(&range);
    assert_eq!(
        url,
        "https://api.nasa.gov/planetary/apod?api_key=DEMO_KEY&start_date=2024-06-01&end_date=2024-06-02"
    );
}

#[test]
fn empty_and_all_video_feeds_get_distinct_placeholders() {
    let mut state = gallery::State::new();

    state.set_items(client::decode_items("[]").unwrap());
    assert_eq!(state.outcome(), Some(gallery::RenderOutcome::EmptyFeed));

    let all_videos = r#"[
        {"date":"2024-06-01","title":"A","url":"u1","explanation":"e1","media_type":"video"},
        {"date":"2024-06-02","title":"B","url":"u2","explanation":"e2","media_type":"video"}
    ]"#;
    state.set_items(client::decode_items(all_videos).unwrap());
    assert_eq!(state.outcome(), Some(gallery::RenderOutcome::AllNonImage));
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let initial = Config {
        language: Some("en-US".to_string()),
        api_key: None,
    };
    config::save_to_path(&initial, &config_path).expect("failed to write config");

    let loaded = config::load_from_path(&config_path).expect("failed to load config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let french = Config {
        language: Some("fr".to_string()),
        api_key: None,
    };
    config::save_to_path(&french, &config_path).expect("failed to write config");

    let loaded = config::load_from_path(&config_path).expect("failed to load config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("failed to close temporary directory");
}

#[test]
fn validation_messages_exist_in_every_catalog() {
    for lang in ["en-US", "fr"] {
        let config = Config {
            language: Some(lang.to_string()),
            api_key: None,
        };
        let i18n = I18n::new(None, &config);
        for err in [
            RangeError::MissingStart,
            RangeError::MissingEnd,
            RangeError::InvalidStart,
            RangeError::InvalidEnd,
        ] {
            let message = i18n.tr(err.i18n_key());
            assert!(
                !message.starts_with("MISSING:"),
                "untranslated key {} in {}",
                err.i18n_key(),
                lang
            );
        }
    }
}
