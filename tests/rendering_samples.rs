//! End-to-end rendering of format strings
//!
//! Each case goes through the public entry point: tokenize, then render against a track
//! snapshot and a modifier list.

use nowplaying::share::{
    share_text, tokenize, Modifier, Modifiers, PlaceholderCode, ShareSettings, TrackSnapshot,
};
use rstest::{fixture, rstest};

#[fixture]
fn track() -> TrackSnapshot {
    TrackSnapshot::new("Song", "Band", "Record")
}

#[fixture]
fn full_track() -> TrackSnapshot {
    TrackSnapshot::new("Song", "Band", "Record")
        .with_composer("Writer")
        .with_source_url("https://open.spotify.com/track/abc")
}

#[rstest]
#[case::default_format("#NowPlaying TI - AR (AL)", "#NowPlaying Song - Band (Record)")]
#[case::doubled_quote("it''s", "it's")]
#[case::quoted_code("'TI'", "TI")]
#[case::quoted_sentence("'TIME: 'TI", "TIME: Song")]
#[case::two_spans("'a''b'", "ab")]
#[case::quoted_then_doubled("'AR'''", "AR'")]
#[case::newline_code("TI\\nAR", "Song\nBand")]
#[case::quoted_newline_code("'\\n'", "\\n")]
#[case::unmatched_quote("a'TI", "aSong")]
#[case::unmatched_after_pair("'x'AR'AL", "xBandRecord")]
#[case::lone_quote("'", "")]
#[case::empty("", "")]
#[case::plain_text("listening to music", "listening to music")]
#[case::code_inside_word("TITLE", "SongTLE")]
#[case::absent_optional_fields("TI CO SU", "Song  ")]
fn renders_format(track: TrackSnapshot, #[case] format: &str, #[case] expected: &str) {
    assert_eq!(share_text(format, &Modifiers::new(), &track), expected);
}

#[rstest]
fn default_settings_render(track: TrackSnapshot) {
    assert_eq!(
        ShareSettings::default().render(&track),
        "#NowPlaying Song - Band (Record)"
    );
}

#[rstest]
fn artist_modifier_wraps_value(track: TrackSnapshot) {
    let modifiers = Modifiers::from(vec![Modifier::new(PlaceholderCode::Artist, "by ", "")]);
    assert_eq!(share_text("AR", &modifiers, &track), "by Band");
}

#[rstest]
fn absent_composer_ignores_modifier(track: TrackSnapshot) {
    let modifiers = Modifiers::from(vec![Modifier::new(
        PlaceholderCode::Composer,
        " (comp. ",
        ")",
    )]);
    assert_eq!(share_text("TICO", &modifiers, &track), "Song");
}

#[rstest]
fn newline_ignores_modifier(track: TrackSnapshot) {
    let modifiers = Modifiers::from(vec![Modifier::new(PlaceholderCode::Newline, "[", "]")]);
    assert_eq!(share_text("\\n", &modifiers, &track), "\n");
}

#[rstest]
fn quoted_code_ignores_modifier(track: TrackSnapshot) {
    let modifiers = Modifiers::from(vec![Modifier::new(PlaceholderCode::Title, "<", ">")]);
    assert_eq!(share_text("'TI' TI", &modifiers, &track), "TI <Song>");
}

#[rstest]
fn multiline_share_text(full_track: TrackSnapshot) {
    let mut modifiers = Modifiers::defaults();
    modifiers.set(Modifier::new(PlaceholderCode::Artist, "by ", ""));
    modifiers.set(Modifier::new(PlaceholderCode::Composer, "(written by ", ")"));
    let rendered = share_text(
        "♪ TI\\nAR CO\\n'Album:' AL\\nSU\\n#NowPlaying",
        &modifiers,
        &full_track,
    );
    insta::assert_snapshot!(rendered, @r###"
    ♪ Song
    by Band (written by Writer)
    Album: Record
    https://open.spotify.com/track/abc
    #NowPlaying
    "###);
}

#[test]
fn default_format_tokens() {
    insta::assert_debug_snapshot!(tokenize("#NowPlaying TI - AR (AL)"), @r###"
    [
        Literal(
            "#NowPlaying ",
        ),
        Placeholder(
            Title,
        ),
        Literal(
            " - ",
        ),
        Placeholder(
            Artist,
        ),
        Literal(
            " (",
        ),
        Placeholder(
            Album,
        ),
        Literal(
            ")",
        ),
    ]
    "###);
}

#[rstest]
fn rendering_is_deterministic(full_track: TrackSnapshot) {
    let modifiers = Modifiers::defaults();
    let format = "'TI:' TI\\nAR''s AL CO SU";
    let first = share_text(format, &modifiers, &full_track);
    let second = share_text(format, &modifiers, &full_track);
    assert_eq!(first, second);
}
