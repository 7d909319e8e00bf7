use std::cell::Cell;
use std::rc::Rc;

use super::*;

#[derive(Clone)]
struct Tracked(Rc<Cell<u32>>);

impl Drop for Tracked {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

/// Collects `v` by walking its cursors front to back.
fn forward<T: Copy>(v: &Vector<T>) -> Vec<T> {
    let mut out = Vec::new();
    let mut it = v.begin();
    while it != v.end() {
        out.push(unsafe { *it.get() });
        it.inc();
    }
    out
}

/// Collects `v` by walking its cursors back to front.
fn backward<T: Copy>(v: &Vector<T>) -> Vec<T> {
    let mut out = Vec::new();
    let mut it = v.rbegin();
    while it != v.rend() {
        out.push(unsafe { *it.get() });
        it.inc();
    }
    out
}

mod cursor;
mod rev_cursor;
