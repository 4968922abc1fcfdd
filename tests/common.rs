#![allow(dead_code)]

use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use once_cell::sync::Lazy;

static TRACING: Lazy<()> = Lazy::new(|| {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
});

pub fn init_tracing() {
    Lazy::force(&TRACING);
}

/// Hands out [`Counted`] values and tracks how many of them are alive, so
/// tests can assert that eviction, clear and drop destroy exactly the
/// elements they should.
#[derive(Default)]
pub struct LiveCounter {
    live: Arc<AtomicUsize>,
}

impl LiveCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of instances currently alive.
    pub fn live(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    pub fn instance(&self, value: u32) -> Counted {
        self.live.fetch_add(1, Ordering::SeqCst);
        Counted {
            value,
            live: self.live.clone(),
        }
    }
}

/// An element type whose constructions and destructions are observable.
pub struct Counted {
    pub value: u32,
    live: Arc<AtomicUsize>,
}

impl Clone for Counted {
    fn clone(&self) -> Self {
        self.live.fetch_add(1, Ordering::SeqCst);
        Counted {
            value: self.value,
            live: self.live.clone(),
        }
    }
}

impl Drop for Counted {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}

impl PartialEq for Counted {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl std::fmt::Debug for Counted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Counted({})", self.value)
    }
}

/// A tiny deterministic generator for the oracle comparison tests.
pub struct XorShift {
    state: u64,
}

impl XorShift {
    pub fn new(seed: u64) -> Self {
        XorShift {
            state: seed.max(1),
        }
    }

    pub fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}
