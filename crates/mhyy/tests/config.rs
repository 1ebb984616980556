//! Integration tests: config file → user → headers.

use std::fs;

use mhyy::prelude::*;
use mhyy::ConfigError;

fn write_config(name: &str, json: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("mhyy-{}-{name}.json", std::process::id()));
    fs::write(&path, json).expect("temp dir is writable");
    path
}

#[test]
fn test_config_file_builds_user_with_expected_headers() {
    let path = write_config(
        "android",
        r#"{
            "combo_token": "ai=1;ci=2;oi=3;ct=4;si=5;bi=hkrpg_cn",
            "client_type": "Android",
            "sys_version": "14",
            "device_id": "b1f0c2d3",
            "device_name": "Pixel 8",
            "device_model": "GKWS6"
        }"#,
    );

    let user = UserConfig::from_json_file(&path)
        .expect("config parses")
        .into_user()
        .expect("config is valid");
    fs::remove_file(&path).ok();

    assert_eq!(user.game_type(), GameType::StarRail);

    let headers = user.headers();
    assert_eq!(headers["x-rpc-combo_token"], "ai=1;ci=2;oi=3;ct=4;si=5;bi=hkrpg_cn");
    assert_eq!(headers["x-rpc-sys_version"], "14");
    assert_eq!(headers["x-rpc-device_id"], "b1f0c2d3");
    assert_eq!(headers["x-rpc-device_name"], "Pixel 8");
    assert_eq!(headers["x-rpc-device_model"], "GKWS6");
    assert_eq!(headers["x-rpc-client_type"], "2");
    assert_eq!(headers["x-rpc-channel"], "mihoyo");
}

#[test]
fn test_config_with_conflicting_game_type_warns() {
    let config = UserConfig::from_json(
        r#"{
            "combo_token": "ai=1;ci=2;oi=3;ct=4;si=5;bi=hk4e_cn",
            "client_type": "PCWeb",
            "game_type": "StarRail"
        }"#,
    )
    .unwrap();

    let mut warnings: Vec<Warning> = Vec::new();
    let user = config.into_user_with(&mut warnings).unwrap();

    assert_eq!(user.game_type(), GameType::StarRail);
    assert_eq!(
        warnings,
        vec![Warning::GameTypeMismatch {
            supplied: GameType::StarRail,
            detected: GameType::GenshinImpact,
        }]
    );
}

#[test]
fn test_config_for_unsupported_platform_surfaces_as_mhyy_error() {
    fn load(json: &str) -> Result<User, MhyyError> {
        Ok(UserConfig::from_json(json)?.into_user()?)
    }

    let err = load(
        r#"{"combo_token": "ai=1;ci=2;oi=3;ct=4;si=5;bi=nap_cn", "client_type": "PCWeb"}"#,
    )
    .unwrap_err();
    assert!(matches!(err, MhyyError::User(_)));

    let err = load(r#"{"combo_token": 5}"#).unwrap_err();
    assert!(matches!(err, MhyyError::Config(ConfigError::Parse(_))));
}

#[test]
fn test_missing_config_file_is_io_error() {
    let path = std::env::temp_dir().join("mhyy-does-not-exist.json");
    let err = UserConfig::from_json_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_headers_serialize_in_stable_order() {
    let user = UserConfig::from_json(
        r#"{"combo_token": "ai=1;ci=2;oi=3;ct=4;si=5;bi=hk4e_cn", "client_type": "iOS"}"#,
    )
    .unwrap()
    .into_user()
    .unwrap();

    let first = serde_json::to_string(&user.headers()).unwrap();
    let second = serde_json::to_string(&user.headers()).unwrap();
    assert_eq!(first, second);
    assert!(first.starts_with(r#"{"x-rpc-channel":"mihoyo","x-rpc-client_type":"1""#));
}
