//! Pooled string builders used while rendering format templates
//!
//! Avoids growing a fresh buffer on every formatting call. Buffers go back
//! to the pool, cleared, on every exit path; the pool is bounded so a burst
//! of concurrent formatting cannot pin memory.

use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, MutexGuard};

const MAX_POOLED: usize = 8;
const INITIAL_CAPACITY: usize = 32;

static POOL: Mutex<Vec<String>> = Mutex::new(Vec::new());

fn pool() -> MutexGuard<'static, Vec<String>> {
    // Pool contents are plain cleared buffers, safe to reuse after a panic.
    POOL.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Borrow a cleared buffer from the process-wide pool.
pub(crate) fn acquire() -> PooledString {
    let buf = pool()
        .pop()
        .unwrap_or_else(|| String::with_capacity(INITIAL_CAPACITY));
    PooledString { buf }
}

/// Scoped string buffer; returns itself to the pool when dropped.
pub(crate) struct PooledString {
    buf: String,
}

impl Deref for PooledString {
    type Target = String;

    fn deref(&self) -> &String {
        &self.buf
    }
}

impl DerefMut for PooledString {
    fn deref_mut(&mut self) -> &mut String {
        &mut self.buf
    }
}

impl Drop for PooledString {
    fn drop(&mut self) {
        let mut buf = std::mem::take(&mut self.buf);
        buf.clear();
        let mut pool = pool();
        if pool.len() < MAX_POOLED {
            pool.push(buf);
        }
    }
}
