#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use mcsreg_registry::config::McsSection;
use mcsreg_registry::{global, BackendResolver, McsRegistry, SharedConfig, StaticDirectory};

#[test]
fn first_install_wins() {
    let build = || {
        let resolver = Arc::new(BackendResolver::with_builtins(Arc::new(StaticDirectory::new())));
        let source = Arc::new(SharedConfig::new(McsSection::new("mcs/none", Some("enforced"))));
        Arc::new(McsRegistry::new(source, resolver))
    };

    let first = build();
    global::install(Arc::clone(&first)).unwrap();
    assert!(global::install(build()).is_err());

    let got = global::registry().unwrap();
    assert!(Arc::ptr_eq(&got, &first));

    got.check_label(1, Some("x")).unwrap();
    assert!(first.enforced());
}
