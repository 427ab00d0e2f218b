use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap()
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_discprompt_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("DISCPROMPT_CONFIG_PATH", "/tmp/discprompt-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/discprompt-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("discprompt")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("discprompt")
            .join("config.toml")
    );
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[prompt]
heading = "DVD"
instruction = "Please insert the following disc"
play_label = "Abspielen"
eject_label = "Auswerfen"
auto_close_ms = 15000

[ui]
tick_ms = 100

[stubs]
extensions = ["disc", "dvdstub"]
recursive = false
include_hidden = false
follow_links = false
max_depth = 3
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("DISCPROMPT_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("DISCPROMPT__UI__TICK_MS");

    let s = Settings::load().unwrap();
    assert_eq!(s.prompt.heading, "DVD");
    assert_eq!(s.prompt.instruction, "Please insert the following disc");
    assert_eq!(s.prompt.play_label, "Abspielen");
    assert_eq!(s.prompt.eject_label, "Auswerfen");
    assert_eq!(s.prompt.auto_close_ms, 15_000);
    assert_eq!(s.ui.tick_ms, 100);
    assert_eq!(
        s.stubs.extensions,
        vec!["disc".to_string(), "dvdstub".to_string()]
    );
    assert!(!s.stubs.recursive);
    assert!(!s.stubs.include_hidden);
    assert!(!s.stubs.follow_links);
    assert_eq!(s.stubs.max_depth, Some(3));
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[ui]
tick_ms = 100
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("DISCPROMPT_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("DISCPROMPT__UI__TICK_MS", "25");

    let s = Settings::load().unwrap();
    assert_eq!(s.ui.tick_ms, 25);
}

#[test]
fn validate_rejects_zero_tick_and_empty_extensions() {
    let mut s = Settings::default();
    assert!(s.validate().is_ok());

    s.ui.tick_ms = 0;
    assert!(s.validate().is_err());

    s.ui.tick_ms = 50;
    s.stubs.extensions = vec!["  ".to_string()];
    assert!(s.validate().is_err());
}
