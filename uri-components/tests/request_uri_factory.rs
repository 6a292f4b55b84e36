use uri_components::prelude::*;

fn request() -> StaticRequest {
    StaticRequest::new("https", "example.com")
}

#[test]
fn path_joins_base_without_duplicate_slashes() {
    let request = request();
    let mut factory = RequestUriFactory::new(&request, UriConfig::default());
    factory.set_base_path("/app/");

    assert_eq!("/app/users/", factory.path("/users/", &QueryMap::new()));
}

#[test]
fn path_with_query() {
    let request = request();
    let mut factory = RequestUriFactory::new(&request, UriConfig::default());
    factory.set_base_path("/app");

    let query: QueryMap = vec![("page", "2"), ("q", "a b")].into_iter().collect();
    assert_eq!("/app/search?page=2&q=a+b", factory.path("search", &query));
}

#[test]
fn static_path_uses_static_prefix() {
    let request = request();
    let config = UriConfig {
        base_path: "/app".to_string(),
        static_path: "/static/".to_string(),
    };
    let factory = RequestUriFactory::new(&request, config);

    assert_eq!("/static/js/app.js", factory.static_path("/js/app.js"));
    assert_eq!("/static/", factory.static_path(""));
}

#[test]
fn full_uses_request_scheme_and_host() {
    let request = request();
    let mut factory = RequestUriFactory::new(&request, UriConfig::default());
    factory.set_base_path("/app/");

    let options = FullUriOptions {
        query: QueryMap::parse("id=7"),
        fragment: Some("#details".to_string()),
        ..FullUriOptions::default()
    };

    assert_eq!(
        "https://example.com/app/users?id=7#details",
        factory.full("users", options)
    );
}

#[test]
fn full_with_overrides() {
    let request = request();
    let factory = RequestUriFactory::new(&request, UriConfig::default());

    let options = FullUriOptions {
        scheme: Some("http".to_string()),
        host: Some("cdn.example.net:8080".to_string()),
        ..FullUriOptions::default()
    };

    assert_eq!("http://cdn.example.net:8080/", factory.full("", options));
}

#[test]
fn create_is_not_implemented() {
    let request = request();
    let mut factory = RequestUriFactory::new(&request, UriConfig::default());

    assert_eq!(
        Err(UriError::NotImplemented {
            replacement: uri_components::URL_GENERATOR_REPLACEMENT
        }),
        factory.create("home")
    );

    factory.set_base_path("/elsewhere").set_static_path("/assets");
    assert!(matches!(
        factory.create("home"),
        Err(UriError::NotImplemented { .. })
    ));
}

#[test]
fn config_defaults_to_root() {
    let request = request();
    let factory = RequestUriFactory::new(&request, UriConfig::default());

    assert_eq!("/", factory.base_path());
    assert_eq!("/", factory.static_path_prefix());
    assert_eq!(&UriConfig::default(), factory.config());
    assert_eq!("https", factory.request().scheme());
}
