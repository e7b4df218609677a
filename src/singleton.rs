// Pattern 4: Singleton - one process-wide instance behind OnceLock
// `SchoolRegistry` cannot be built outside this module; `instance()` creates
// it on first use and hands out the same reference afterwards.

use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use crate::console::Console;

pub const CREATED_NOTICE: &str = "Instance plugged in to source";

static INSTANCE: OnceLock<SchoolRegistry> = OnceLock::new();
static CREATIONS: AtomicUsize = AtomicUsize::new(0);
static NOTICES: OnceLock<Console> = OnceLock::new();

fn notice_log() -> &'static Console {
    NOTICES.get_or_init(Console::tee)
}

#[derive(Debug)]
pub struct SchoolRegistry {
    created_at: DateTime<Utc>,
}

impl SchoolRegistry {
    fn new() -> Self {
        CREATIONS.fetch_add(1, Ordering::SeqCst);
        notice_log().line(CREATED_NOTICE);
        tracing::info!("school registry created");
        Self {
            created_at: Utc::now(),
        }
    }

    pub fn instance() -> &'static SchoolRegistry {
        INSTANCE.get_or_init(SchoolRegistry::new)
    }

    /// How many times the constructor has run in this process (0 or 1).
    pub fn creation_count() -> usize {
        CREATIONS.load(Ordering::SeqCst)
    }

    /// Every line the singleton has printed in this process.
    pub fn notices() -> Vec<String> {
        notice_log().lines()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
