use std::sync::Arc;
use std::thread;

use super::registry::{self, DEFAULT_NAME};
use super::{HeaderItem, TableConfig};
use crate::tprintln;

// The registry is process-global, so every test uses its own names and
// none asserts on the full contents of `names()`.

#[test]
fn default_config_is_builtin() {
    let cfg = registry::get_default();
    assert_eq!(*cfg, TableConfig::builtin());
    assert!(registry::names().iter().any(|n| n == DEFAULT_NAME));
}

#[test]
fn get_unregistered_name_is_none() {
    assert!(registry::get("no_such_config").is_none());
}

#[test]
fn register_then_get_round_trip() {
    let custom = TableConfig::new(
        vec![HeaderItem { attr: "id".to_string(), name: "ID".to_string() }],
        vec!["int".to_string()],
        vec![("int".to_string(), vec!["dict".to_string()])],
        vec![],
    );
    custom.validate().unwrap();
    registry::register("registry_round_trip", custom.clone()).unwrap();
    let fetched = registry::get("registry_round_trip").unwrap();
    assert_eq!(*fetched, custom);
}

#[test]
fn double_registration_is_conflict() {
    registry::register("registry_dup", TableConfig::builtin()).unwrap();
    let err = registry::register("registry_dup", TableConfig::builtin()).unwrap_err();
    assert_eq!(err.code_str(), "config_exists");
    tprintln!("conflict error: {}", err);
}

#[test]
fn ensure_registered_is_idempotent() {
    registry::ensure_registered();
    registry::ensure_registered();
    let count = registry::names().iter().filter(|n| *n == DEFAULT_NAME).count();
    assert_eq!(count, 1);
}

#[test]
fn concurrent_readers_see_same_data() {
    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| registry::get_default()))
        .collect();
    let configs: Vec<Arc<TableConfig>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for cfg in &configs {
        assert_eq!(cfg.encoding_options("numeric").unwrap(), &["dict"]);
        assert_eq!(**cfg, *configs[0]);
    }
}
