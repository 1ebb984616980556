//! Integration tests for building users and deriving their headers.

use std::sync::Arc;
use std::thread;

use mhyy_protocol::{ClientType, GameType, USER_HEADER_NAMES};
use mhyy_session::{TokenError, User, UserError, UserParams, Warning};

// =========================================================================
// Helpers
// =========================================================================

const GENSHIN: &str = "ai=1;ci=2;oi=3;ct=4;si=5;bi=hk4e_cn";

fn android(token: &str) -> mhyy_session::UserBuilder {
    User::builder(token, ClientType::Android)
        .sys_version("13")
        .device_id("b1f0c2d3")
        .device_name("Xiaomi 13")
        .device_model("2211133C")
}

// =========================================================================
// Worked examples
// =========================================================================

#[test]
fn test_genshin_token_without_game_type_detects_genshin() {
    let mut warnings: Vec<Warning> = Vec::new();
    let user = android(GENSHIN).build_with(&mut warnings).expect("valid user");

    assert_eq!(user.game_type(), GameType::GenshinImpact);
    assert!(warnings.is_empty());
}

#[test]
fn test_genshin_token_with_star_rail_keeps_star_rail_and_warns() {
    let mut warnings: Vec<Warning> = Vec::new();
    let user = android(GENSHIN)
        .game_type(GameType::StarRail)
        .build_with(&mut warnings)
        .expect("mismatch is not fatal");

    assert_eq!(user.game_type(), GameType::StarRail);
    assert_eq!(warnings.len(), 1);
}

#[test]
fn test_short_token_lists_missing_keys() {
    let err = android("ai=1;ci=2").build().unwrap_err();

    assert_eq!(
        err,
        UserError::InvalidToken(TokenError::MissingKeys(vec!["oi", "ct", "si", "bi"]))
    );
    assert!(err.to_string().contains("oi, ct, si, bi"));
}

#[test]
fn test_unknown_biz_id_rejected() {
    let err = android("ai=1;ci=2;oi=3;ct=4;si=5;bi=hk4e_global")
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        UserError::InvalidToken(TokenError::UnknownGame("hk4e_global".into()))
    );
}

#[test]
fn test_zzz_on_pcweb_rejected_but_android_accepted() {
    let zzz = "ai=1;ci=2;oi=3;ct=4;si=5;bi=nap_cn";

    let err = User::builder(zzz, ClientType::PcWeb).build().unwrap_err();
    assert!(matches!(err, UserError::UnsupportedPlatform { .. }));
    assert!(err.to_string().contains("Android"));

    let user = android(zzz).build().expect("Android is supported");
    assert_eq!(user.game_type(), GameType::Zzz);
}

// =========================================================================
// Headers
// =========================================================================

#[test]
fn test_headers_stable_across_calls_and_clones() {
    let user = android(GENSHIN).build().unwrap();
    let first = user.headers();

    assert_eq!(first, user.headers());
    assert_eq!(first, user.clone().headers());
    assert_eq!(first.len(), USER_HEADER_NAMES.len());
}

#[test]
fn test_plain_constructor_matches_builder() {
    let params = UserParams {
        combo_token: GENSHIN.to_string(),
        sys_version: "13".to_string(),
        device_id: "b1f0c2d3".to_string(),
        device_name: "Xiaomi 13".to_string(),
        device_model: "2211133C".to_string(),
        client_type: ClientType::Android,
        game_type: None,
        channel: Default::default(),
    };
    let from_new = User::new(params).unwrap();
    let from_builder = android(GENSHIN).build().unwrap();

    assert_eq!(from_new, from_builder);
    assert_eq!(from_new.headers(), from_builder.headers());
}

// =========================================================================
// Sharing
// =========================================================================

#[test]
fn test_user_shared_across_threads_without_locks() {
    let user = Arc::new(android(GENSHIN).build().unwrap());
    let expected = user.headers();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let user = Arc::clone(&user);
            thread::spawn(move || user.headers())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
