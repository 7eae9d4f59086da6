//! Unit tests for the settings record

use crate::domain::entities::Settings;

#[test]
fn test_settings_default() {
    let settings = Settings::default();
    assert!(settings.kube_secret_key.is_none());
    assert!(!settings.is_desktop_extension);
    assert_eq!(settings.kubeconfig_expiry, "0");
}

#[test]
fn test_settings_secret_is_base64_in_json() {
    let settings = Settings {
        kube_secret_key: Some(vec![0xde, 0xad, 0xbe, 0xef]),
        ..Default::default()
    };

    let json = serde_json::to_value(&settings).unwrap();
    assert_eq!(json["kube_secret_key"], "3q2+7w==");

    let restored: Settings = serde_json::from_value(json).unwrap();
    assert_eq!(restored, settings);
}

#[test]
fn test_settings_missing_fields_use_defaults() {
    let settings: Settings = serde_json::from_str(r#"{"is_desktop_extension": true}"#).unwrap();
    assert!(settings.is_desktop_extension);
    assert!(settings.kube_secret_key.is_none());
    assert_eq!(settings.kubeconfig_expiry, "0");
}

#[test]
fn test_settings_rejects_corrupt_secret() {
    let result = serde_json::from_str::<Settings>(r#"{"kube_secret_key": "not base64!"}"#);
    assert!(result.is_err());
}
