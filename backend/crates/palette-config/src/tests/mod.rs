
use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Create a temp config directory, point PALETTE_CONFIG_DIR at it and clear
/// every override a developer shell might carry
pub(crate) fn setup_config_dir() -> (TempDir, Vec<EnvGuard>) {
    let temp = TempDir::new().unwrap();
    let mut guards = vec![EnvGuard::set(
        "PALETTE_CONFIG_DIR",
        temp.path().to_str().unwrap(),
    )];

    for key in [
        "PORT",
        "PALETTE_SERVER_HOST",
        "PALETTE_SERVER_PORT",
        "PALETTE_DATABASE_PATH",
        "PALETTE_DATABASE_MAX_CONNECTIONS",
        "PALETTE_DATABASE_SEED",
        "PALETTE_LOG_LEVEL",
        "PALETTE_LOG_COLORED",
        "PALETTE_LOG_FILE",
    ] {
        guards.push(EnvGuard::remove(key));
    }

    (temp, guards)
}
