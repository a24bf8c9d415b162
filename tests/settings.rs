use std::fs;

use vyn::cli::SettingsOpts;
use vyn_config::config;

// Both cases touch the global config store, so they run in one test
#[test]
fn settings_file_is_loaded_when_present() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let missing = SettingsOpts {
        path: path.to_str().unwrap().to_string(),
    };
    assert!(!missing.load().unwrap());
    assert!(!path.exists());
    assert_eq!(config!(string "stdlib.window.module"), "Window");

    fs::write(&path, r#"{"stdlib.window.module": "s:Gui", "log.debug": "b:true"}"#).unwrap();
    let present = SettingsOpts {
        path: path.to_str().unwrap().to_string(),
    };
    assert!(present.load().unwrap());
    assert_eq!(config!(string "stdlib.window.module"), "Gui");
    assert!(config!(bool "log.debug"));
}

#[test]
fn directory_is_rejected() {
    let dir = tempfile::tempdir().unwrap();

    let opts = SettingsOpts {
        path: dir.path().to_str().unwrap().to_string(),
    };
    assert!(opts.load().is_err());
}
