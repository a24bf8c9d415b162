use vyn_config::settings::Setting;
use vyn_config::{config_set, config_store};
use vyn_scripting::host::{HostContext, HostValue};
use vyn_scripting::ScriptContext;
use vyn_stdlib::open_stdlib;
use vyn_stdlib::window::{open_window, CREATED_MESSAGE};

// The names come from the global config store, so the default and renamed cases run in one test
#[test]
fn window_names_follow_config() {
    let mut ctx = HostContext::default();
    assert_eq!(open_stdlib(&mut ctx).unwrap(), 1);
    assert_eq!(ctx.module_names(), vec!["Window"]);
    assert_eq!(ctx.function_names("Window"), vec!["Create"]);

    let out = ctx
        .call(
            "Window",
            "Create",
            &[
                HostValue::String("Main".into()),
                HostValue::Integer(800),
                HostValue::Integer(600),
            ],
        )
        .unwrap();
    assert_eq!(out, vec![HostValue::String(CREATED_MESSAGE.into())]);

    config_set!(string "stdlib.window.module", "Gui".into());
    config_store().set("stdlib.window.create", Setting::String("Open".into()));

    let mut renamed = HostContext::default();
    open_window(&mut renamed).unwrap();
    assert!(renamed.has_function("Gui", "Open"));
    assert!(!renamed.has_function("Window", "Create"));
}
