use crate::cli::Args;
use clap::Parser;
use std::{net::SocketAddr, str::FromStr};
use url::Url;

pub fn fake_args() -> Args {
    Args {
        quickwit_url: Url::from_str("http://127.0.0.1:7280")
            .expect("Failed co construct fake Quickwit URL."),
        listen_address: SocketAddr::from_str("0.0.0.0:3030")
            .expect("Failed co construct fake listen address."),
        jwt_signing_key: String::from("testKey"),
        locations: None,
        default_radius_km: 5.0,
        duplicate_threshold_km: 0.05,
        allowed_origins: vec![String::from("http://localhost:3000")],
    }
}

#[test]
fn test_defaults() {
    let args = Args::try_parse_from(["foodmap-server", "--jwt-signing-key", "k"]).unwrap();

    assert_eq!(args.default_radius_km, 5.0);
    assert_eq!(args.duplicate_threshold_km, 0.05);
    assert_eq!(args.locations, None);
    assert_eq!(
        args.allowed_origins,
        vec!["http://127.0.0.1:3000", "http://localhost:3000"]
    );
}

#[test]
fn test_origins_are_comma_separated() {
    let args = Args::try_parse_from([
        "foodmap-server",
        "--jwt-signing-key",
        "k",
        "--allowed-origins",
        "https://a.example,https://b.example",
    ])
    .unwrap();

    assert_eq!(
        args.allowed_origins,
        vec!["https://a.example", "https://b.example"]
    );
}

#[test]
fn test_signing_key_is_required() {
    assert!(Args::try_parse_from(["foodmap-server"]).is_err());
}
