// Singleton: an explicit construct-once holder, and a lazily initialised static.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use lazy_static::lazy_static;
use rayon::prelude::*;

use crate::error::Result;

// ============================================================================
// Singleton with an argument, behind an explicit holder
// ============================================================================

#[derive(Debug)]
pub struct Singleton {
    name_value: String,
}

impl Singleton {
    fn new(name_value: &str) -> Self {
        tracing::debug!(name_value, "constructing singleton");
        Self {
            name_value: name_value.to_string(),
        }
    }

    pub fn greeting(&self) -> String {
        format!("Hello {}", self.name_value)
    }

    /// Always "Feny", whatever the instance was constructed with.
    pub fn get_name(&self) -> &'static str {
        "Feny"
    }

    /// The argument of the request that constructed this instance.
    pub fn name_value(&self) -> &str {
        &self.name_value
    }
}

/// Owns at most one published [`Singleton`].
///
/// The first request constructs the instance under `init_lock` (check,
/// construct, publish); every later request reads the published instance
/// without locking and ignores its argument. Callers share the holder by
/// reference instead of reaching for a global.
#[derive(Debug, Default)]
pub struct SingletonHolder {
    instance: OnceLock<Arc<Singleton>>,
    init_lock: Mutex<()>,
    constructed: AtomicUsize,
}

impl SingletonHolder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the instance, constructing it from `name_value` if none has
    /// been published yet. The greeting is written only on construction.
    pub fn get_instance(&self, name_value: &str, out: &mut dyn Write) -> io::Result<Arc<Singleton>> {
        let (instance, created) = self.get_or_create(name_value);
        if created {
            writeln!(out, "{}", instance.greeting())?;
        }
        Ok(instance)
    }

    /// Silent variant of [`get_instance`](Self::get_instance) for concurrent callers.
    pub fn instance(&self, name_value: &str) -> Arc<Singleton> {
        self.get_or_create(name_value).0
    }

    fn get_or_create(&self, name_value: &str) -> (Arc<Singleton>, bool) {
        if let Some(instance) = self.instance.get() {
            return (Arc::clone(instance), false);
        }

        // A panic while constructing leaves nothing published, so a poisoned
        // lock is safe to reuse.
        let _guard = self.init_lock.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(instance) = self.instance.get() {
            return (Arc::clone(instance), false);
        }

        let created = Arc::new(Singleton::new(name_value));
        self.constructed.fetch_add(1, Ordering::Relaxed);
        let published = self.instance.get_or_init(|| Arc::clone(&created));
        (Arc::clone(published), true)
    }

    pub fn is_initialized(&self) -> bool {
        self.instance.get().is_some()
    }

    /// Number of instances this holder has ever constructed.
    pub fn constructions(&self) -> usize {
        self.constructed.load(Ordering::Relaxed)
    }

    /// Unpublish the instance. The next request constructs a fresh one.
    pub fn teardown(&mut self) -> Option<Arc<Singleton>> {
        let previous = self.instance.take();
        tracing::debug!(had_instance = previous.is_some(), "singleton holder torn down");
        previous
    }
}

// ============================================================================
// Singleton without arguments
// ============================================================================

static JUST_SINGLETON_INITS: AtomicUsize = AtomicUsize::new(0);
static JUST_SINGLETON_ANNOUNCED: AtomicBool = AtomicBool::new(false);

lazy_static! {
    static ref JUST_SINGLETON: JustSingleton = JustSingleton::init();
}

#[derive(Debug)]
pub struct JustSingleton {
    _private: (),
}

impl JustSingleton {
    fn init() -> Self {
        JUST_SINGLETON_INITS.fetch_add(1, Ordering::SeqCst);
        tracing::debug!("JustSingleton initialised");
        Self { _private: () }
    }

    pub fn instance() -> &'static JustSingleton {
        &JUST_SINGLETON
    }

    /// Like [`instance`](Self::instance), but the first call in the process
    /// writes the init greeting to `out`. Later calls write nothing.
    pub fn instance_with(out: &mut dyn Write) -> io::Result<&'static JustSingleton> {
        let instance = Self::instance();
        if !JUST_SINGLETON_ANNOUNCED.swap(true, Ordering::SeqCst) {
            writeln!(out, "{}", instance.greeting())?;
        }
        Ok(instance)
    }

    /// How many times the lazy static has been initialised (at most 1).
    pub fn initializations() -> usize {
        JUST_SINGLETON_INITS.load(Ordering::SeqCst)
    }

    pub fn greeting(&self) -> &'static str {
        "This is just singleton"
    }

    pub fn do_something(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "what just happened?")
    }
}

const CONCURRENT_REQUESTS: usize = 8;

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut holder = SingletonHolder::new();

    let config_name = holder.get_instance("CO-WOODZ", out)?;
    writeln!(out, "Config name from singleton : {}", config_name.get_name())?;

    let config_again = holder.get_instance("COCO", out)?;
    writeln!(
        out,
        "Second request returned the same instance: {}",
        Arc::ptr_eq(&config_name, &config_again)
    )?;
    writeln!(out, "Instance still holds: {}", config_again.name_value())?;

    holder.teardown();

    let names: Vec<String> = (0..CONCURRENT_REQUESTS).map(|i| format!("worker-{i}")).collect();
    let instances: Vec<Arc<Singleton>> = names.par_iter().map(|name| holder.instance(name)).collect();
    let shared = instances.iter().all(|instance| Arc::ptr_eq(instance, &instances[0]));
    writeln!(
        out,
        "{CONCURRENT_REQUESTS} concurrent requests after teardown shared one instance: {shared}"
    )?;
    writeln!(out, "Instances constructed by the holder: {}", holder.constructions())?;

    let just = JustSingleton::instance_with(out)?;
    just.do_something(out)?;
    JustSingleton::instance().do_something(out)?;
    Ok(())
}
