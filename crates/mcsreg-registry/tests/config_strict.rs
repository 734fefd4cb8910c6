#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::io::Write;

use mcsreg_core::McsError;
use mcsreg_registry::config::{self, ConfigSource, FileConfig, McsSection, SharedConfig};

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
mcs:
  plugin: "mcs/user"
  paramters: "enforced" # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(matches!(err, McsError::Config(_)), "got {err:?}");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.mcs.plugin, "mcs/none");
    assert!(cfg.mcs.parameters.is_none());
    assert!(cfg.directory.users.is_empty());
}

#[test]
fn full_config() {
    let ok = r#"
version: 1
mcs:
  plugin: "mcs/group"
  parameters: "enforced,select,privatedata:red|blue"
directory:
  users:
    - { uid: 1000, name: alice, groups: [red], accounts: [physics] }
    - { uid: 1001, name: bob }
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.mcs.plugin, "mcs/group");
    assert_eq!(
        cfg.mcs.parameters.as_deref(),
        Some("enforced,select,privatedata:red|blue")
    );
    assert_eq!(cfg.directory.users.len(), 2);
    assert_eq!(cfg.directory.users[0].groups, vec!["red".to_string()]);
    assert!(cfg.directory.users[1].accounts.is_empty());
}

#[test]
fn rejects_bad_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert!(err.to_string().contains("version"));
}

#[test]
fn rejects_empty_plugin() {
    let bad = r#"
version: 1
mcs:
  plugin: "  "
"#;
    assert!(config::load_from_str(bad).is_err());
}

#[test]
fn rejects_duplicate_uid() {
    let bad = r#"
version: 1
directory:
  users:
    - { uid: 7, name: a }
    - { uid: 7, name: b }
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("duplicate uid 7"));
}

#[test]
fn shared_config_reflects_updates() {
    let src = SharedConfig::new(McsSection::new("mcs/none", None));
    assert_eq!(src.fetch().unwrap().plugin, "mcs/none");

    src.set(McsSection::new("mcs/user", Some("enforced")));
    let s = src.fetch().unwrap();
    assert_eq!(s.plugin, "mcs/user");
    assert_eq!(s.parameters.as_deref(), Some("enforced"));

    src.set(McsSection::new("", None));
    assert!(src.fetch().is_err());
}

#[test]
fn file_config_rereads_on_fetch() {
    let path = std::env::temp_dir().join(format!("mcsreg-config-{}.yaml", std::process::id()));

    let write = |body: &str| {
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(body.as_bytes()).unwrap();
    };

    write("version: 1\nmcs:\n  plugin: mcs/user\n");
    let src = FileConfig::new(&path);
    assert_eq!(src.fetch().unwrap().plugin, "mcs/user");

    write("version: 1\nmcs:\n  plugin: mcs/account\n  parameters: enforced\n");
    let s = src.fetch().unwrap();
    assert_eq!(s.plugin, "mcs/account");
    assert_eq!(s.parameters.as_deref(), Some("enforced"));

    std::fs::remove_file(&path).unwrap();
    assert!(matches!(src.fetch(), Err(McsError::Config(_))));
}
