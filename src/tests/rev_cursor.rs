use crate::{RevCursor, RevCursorMut, Vector};

use super::{backward, forward};

#[test]
fn reverse_walk_visits_in_reverse() {
    let v: Vector<i32> = (1..=5).collect();
    assert_eq!(backward(&v), vec![5, 4, 3, 2, 1]);
}

#[test]
fn reverse_walk_mirrors_forward_walk() {
    let v: Vector<i32> = (0..17).map(|i| i * 3).collect();
    let mut back = backward(&v);
    back.reverse();
    assert_eq!(back, forward(&v));
    assert_eq!(v.rend() - v.rbegin(), 17);
}

#[test]
fn empty_vector_rbegin_equals_rend() {
    let v = Vector::<i32>::new();
    assert_eq!(v.rbegin(), v.rend());
    assert!(backward(&v).is_empty());
}

#[test]
fn rbegin_is_last_and_rend_before_first() {
    let v: Vector<i32> = (1..=3).collect();
    assert_eq!(v.rbegin().index(), 2);
    assert_eq!(v.rend().index(), -1);
    assert_eq!(unsafe { *v.rbegin().get() }, 3);
}

#[test]
fn arithmetic_is_inverted() {
    let v: Vector<i32> = (0..6).collect();
    let mut it = v.rbegin();
    it += 2;
    assert_eq!(unsafe { *it.get() }, 3);
    it -= 1;
    assert_eq!(unsafe { *it.get() }, 4);
    it = it + 3;
    assert_eq!(unsafe { *it.get() }, 1);
    it = it - 1;
    assert_eq!(unsafe { *it.get() }, 2);
    it.dec();
    assert_eq!(unsafe { *it.get() }, 3);
    assert_eq!(it.post_inc(), v.rbegin() + 2);
    assert_eq!(unsafe { *it.get() }, 2);
    assert_eq!(it.post_dec(), v.rbegin() + 3);
    assert_eq!(unsafe { *it.get() }, 3);
}

#[test]
fn indexing_walks_toward_front() {
    let v: Vector<i32> = (0..5).collect();
    let it = v.rbegin();
    assert_eq!(unsafe { *it.at(0) }, 4);
    assert_eq!(unsafe { *it.at(1) }, 3);
    assert_eq!(unsafe { *it.at(4) }, 0);
}

#[test]
fn ordering_follows_traversal() {
    let v: Vector<i32> = (0..5).collect();
    assert!(v.rbegin() < v.rend());
    assert!(v.rbegin() + 1 > v.rbegin());
    assert!(v.rend() >= v.rend());
    assert_eq!(v.rbegin() - v.rend(), -5);
}

#[test]
fn mut_reverse_writes_through() {
    let mut v: Vector<i32> = (0..4).collect();
    let mut it = v.rbegin_mut();
    let rend = v.rend_mut();
    let mut n = 100;
    while it != rend {
        unsafe { *it.get_mut() = n };
        n += 1;
        it.inc();
    }
    assert_eq!(v.as_slice(), &[103, 102, 101, 100]);
}

#[test]
fn mut_reverse_indexing() {
    let mut v: Vector<i32> = (0..4).collect();
    let mut it = v.rbegin_mut();
    unsafe { *it.at_mut(3) = -1 };
    assert_eq!(unsafe { *it.at(3) }, -1);
    assert_eq!(v[0], -1);
}

#[test]
fn mut_reverse_cursor_arithmetic() {
    let mut v: Vector<i32> = (0..6).collect();
    let mut it = v.rbegin_mut();
    it.inc().inc();
    assert_eq!(unsafe { *it.get() }, 3);
    it.post_dec();
    assert_eq!(unsafe { *it.get() }, 4);
    it += 4;
    assert_eq!(unsafe { *it.get() }, 0);
    it -= 5;
    assert_eq!(it, v.rbegin_mut());
    assert_eq!((it + 6) - it, 6);
}

#[test]
fn mut_and_const_reverse_compare() {
    let mut v: Vector<i32> = (0..3).collect();
    let rend = v.rend();
    let m = v.rbegin_mut() + 3;
    assert!(m == rend);
    assert!(rend == m);
    assert!(RevCursor::from(m) == rend);
    assert!(m.as_const() == rend);
    assert!(m - 1 < rend);
    assert!(rend > m - 1);
}

#[test]
fn base_converts_to_forward_cursor() {
    let v: Vector<i32> = (0..3).collect();
    assert_eq!(v.rbegin().base(), v.end());
    assert_eq!(v.rend().base(), v.begin());
    assert_eq!((v.rbegin() + 1).base(), v.end() - 1);
}

#[test]
fn range_constructor_from_reverse_cursors() {
    let v: Vector<i32> = (1..=4).collect();
    let reversed = unsafe { Vector::from_cursors(v.rbegin(), v.rend()) }.unwrap();
    assert_eq!(reversed, [4, 3, 2, 1]);
}

#[test]
fn default_reverse_cursors_are_null() {
    assert!(RevCursor::<u8>::default().is_null());
    assert!(RevCursorMut::<u8>::default().is_null());
    assert_eq!(format!("{:?}", RevCursor::<u8>::null()), "RevCursor(0)");
}
