use httplink::{append_with, append_link_with, Link, Options};
use httplink::config::Config;
use httplink::header::{HeaderMap, HeaderName, LINK};

struct RawPercent;

impl Config for RawPercent {
    fn check_escaped() -> bool {
        false
    }
}

struct PreloadHints;

impl Config for PreloadHints {
    fn header_name() -> HeaderName {
        HeaderName::from_static("x-preload-links")
    }

    fn separator() -> &'static str {
        ","
    }
}

#[test]
fn should_escape_percent_without_check() {
    let mut headers = HeaderMap::new();
    append_with::<RawPercent, _>(&mut headers, "/some%20thing", "item", Options::new().title_star("", "50%25")).expect("To append");

    assert_eq!(headers.get(LINK).expect("To have Link"), "</some%2520thing>; rel=item; title*=UTF-8''50%2525");
}

#[test]
fn should_use_custom_header_and_separator() {
    let name = PreloadHints::header_name();
    let mut headers = HeaderMap::new();

    append_with::<PreloadHints, _>(&mut headers, "/app.js", "preload", Options::new().type_hint("text/javascript")).expect("To append");
    append_link_with::<PreloadHints, _>(&mut headers, &Link::new("/app.css", "preload")).expect("To append");

    assert!(!headers.contains_key(LINK));
    assert_eq!(headers.get(&name).expect("To have custom header"), "</app.js>; rel=preload; type=\"text/javascript\",</app.css>; rel=preload");
}

#[test]
fn should_load_options_from_json() {
    const JSON: &str = r#"{
        "title": "A related thing",
        "title_star": ["en", "A çrunchy thing"],
        "hreflang": ["en-GB", "de"],
        "cross_origin": "Use-Credentials",
        "extensions": [["sizes", "72x72"]]
    }"#;

    let options: Options = serde_json::from_str(JSON).expect("To deserialize options");
    assert!(options.anchor.is_none());
    assert!(options.type_hint.is_none());

    let link = Link::with_options("/related/thing", "alternate", options);
    let expected = "</related/thing>; rel=alternate; title=\"A related thing\"; \
                    title*=UTF-8'en'A%20%C3%A7runchy%20thing; hreflang=en-GB; hreflang=de; \
                    crossorigin=\"use-credentials\"; sizes=72x72";
    assert_eq!(link.format().expect("To format link"), expected);
}

#[test]
fn should_serialize_options() {
    let options = Options::new().anchor("#top").extension("sizes", "any");
    let json = serde_json::to_value(&options).expect("To serialize options");

    assert_eq!(json["anchor"], "#top");
    assert_eq!(json["extensions"][0][0], "sizes");
    assert_eq!(json["extensions"][0][1], "any");
    assert!(json["title"].is_null());

    let back: Options = serde_json::from_value(json).expect("To deserialize options");
    assert_eq!(back, options);
}
