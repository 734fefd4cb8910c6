//! Test backends and registry builders shared by registry tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use mcsreg_core::error::{McsError, Result};
use mcsreg_core::JobRecord;
use mcsreg_registry::config::McsSection;
use mcsreg_registry::{BackendResolver, LabelContext, McsBackend, McsRegistry, SharedConfig};

/// Counts loads/unloads and records the context each call was made with.
#[derive(Default)]
pub struct Counters {
    pub loads: AtomicUsize,
    pub unloads: AtomicUsize,
    pub sets: AtomicUsize,
    pub checks: AtomicUsize,
    pub seen: Mutex<Vec<LabelContext>>,
}

impl Counters {
    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
    pub fn unloads(&self) -> usize {
        self.unloads.load(Ordering::SeqCst)
    }
}

pub struct ProbeBackend {
    counters: Arc<Counters>,
    fail_unload: bool,
    /// When set, `check_label` fails unless `settings.enforced` equals it.
    expect_enforced: Option<bool>,
}

impl McsBackend for ProbeBackend {
    fn name(&self) -> &'static str {
        "probe"
    }

    fn set_label(&self, ctx: &LabelContext, job: &mut JobRecord, label: Option<&str>) -> Result<()> {
        self.counters.sets.fetch_add(1, Ordering::SeqCst);
        self.counters.seen.lock().unwrap().push(ctx.clone());
        job.mcs_label = label.map(str::to_string);
        Ok(())
    }

    fn check_label(&self, ctx: &LabelContext, _user_id: u32, label: Option<&str>) -> Result<()> {
        self.counters.checks.fetch_add(1, Ordering::SeqCst);
        if let Some(want) = self.expect_enforced {
            if ctx.settings.enforced != want {
                return Err(McsError::Internal("torn settings".into()));
            }
        }
        match label {
            Some("bad") => Err(McsError::LabelRejected("bad".into())),
            _ => Ok(()),
        }
    }

    fn fini(&self) -> Result<()> {
        self.counters.unloads.fetch_add(1, Ordering::SeqCst);
        if self.fail_unload {
            Err(McsError::Internal("unload failed".into()))
        } else {
            Ok(())
        }
    }
}

/// Register `name` as a probe backend. `load_delay` widens race windows.
pub fn register_probe(
    resolver: &BackendResolver,
    name: &str,
    counters: Arc<Counters>,
    load_delay: Duration,
    expect_enforced: Option<bool>,
) {
    resolver.register_fn(name, move |_| {
        counters.loads.fetch_add(1, Ordering::SeqCst);
        if !load_delay.is_zero() {
            thread::sleep(load_delay);
        }
        Ok(Box::new(ProbeBackend {
            counters: Arc::clone(&counters),
            fail_unload: false,
            expect_enforced,
        }))
    });
}

pub fn register_failing_unload(resolver: &BackendResolver, name: &str, counters: Arc<Counters>) {
    resolver.register_fn(name, move |_| {
        counters.loads.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(ProbeBackend {
            counters: Arc::clone(&counters),
            fail_unload: true,
            expect_enforced: None,
        }))
    });
}

pub struct Harness {
    pub source: Arc<SharedConfig>,
    pub resolver: Arc<BackendResolver>,
    pub registry: Arc<McsRegistry>,
    pub counters: Arc<Counters>,
}

/// Registry over a `probe` backend configured with `params`.
pub fn probe_registry(params: Option<&str>) -> Harness {
    probe_registry_with_delay(params, Duration::ZERO)
}

pub fn probe_registry_with_delay(params: Option<&str>, load_delay: Duration) -> Harness {
    let counters = Arc::new(Counters::default());
    let resolver = Arc::new(BackendResolver::new());
    register_probe(&resolver, "mcs/probe", Arc::clone(&counters), load_delay, None);

    let source = Arc::new(SharedConfig::new(McsSection::new("mcs/probe", params)));
    let registry = Arc::new(McsRegistry::new(source.clone(), Arc::clone(&resolver)));

    Harness {
        source,
        resolver,
        registry,
        counters,
    }
}
