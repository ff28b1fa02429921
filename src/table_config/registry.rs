//! Process-wide, write-once registry of named [`TableConfig`]s.
//! Application wiring registers configs under a name during startup;
//! afterwards consumers only read, so reads hand out `Arc` clones and
//! need no locking discipline from callers.

use once_cell::sync::OnceCell;
use std::sync::{Arc, Mutex};
use tracing::debug;

use super::TableConfig;
use crate::error::{AppError, AppResult};

/// Name the built-in config is installed under.
pub const DEFAULT_NAME: &str = "table_config";

static REGISTRY: OnceCell<Mutex<Vec<(String, Arc<TableConfig>)>>> = OnceCell::new();

fn registry() -> &'static Mutex<Vec<(String, Arc<TableConfig>)>> {
    REGISTRY.get_or_init(|| Mutex::new(Vec::new()))
}

/// Register a config under a name. Each name is write-once; registering
/// an existing name is a conflict, keeping the registry immutable after
/// startup wiring completes.
pub fn register(name: &str, config: TableConfig) -> AppResult<()> {
    let mut reg = registry().lock().unwrap();
    if reg.iter().any(|(n, _)| n == name) {
        return Err(AppError::conflict(
            "config_exists",
            format!("table config '{name}' is already registered"),
        ));
    }
    reg.push((name.to_string(), Arc::new(config)));
    debug!(name, "registered table config");
    Ok(())
}

/// Look up a config by name. A miss is a normal outcome, not an error.
pub fn get(name: &str) -> Option<Arc<TableConfig>> {
    let reg = registry().lock().unwrap();
    reg.iter().find(|(n, _)| n == name).map(|(_, c)| Arc::clone(c))
}

/// Idempotently install the built-in config under [`DEFAULT_NAME`].
pub fn ensure_registered() {
    {
        let reg = registry().lock().unwrap();
        if reg.iter().any(|(n, _)| n == DEFAULT_NAME) {
            return;
        }
    }
    // Two racing callers both reach here at most once each; the loser's
    // conflict result is discarded.
    if register(DEFAULT_NAME, TableConfig::builtin()).is_ok() {
        debug!("installed built-in table config");
    }
}

/// The built-in config, installing it on first access.
pub fn get_default() -> Arc<TableConfig> {
    ensure_registered();
    get(DEFAULT_NAME).unwrap_or_else(|| Arc::new(TableConfig::builtin()))
}

/// Registered names in registration order.
pub fn names() -> Vec<String> {
    registry().lock().unwrap().iter().map(|(n, _)| n.clone()).collect()
}
