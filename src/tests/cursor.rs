use crate::{Cursor, CursorMut, Vector};

use super::forward;

fn one_two_three() -> Vector<i32> {
    (1..=3).collect()
}

#[test]
fn const_cursor_add_and_subtract() {
    let v = one_two_three();

    let mut it = v.begin();
    it.inc();
    assert_eq!(unsafe { *it.get() }, 2);
    it.post_inc();
    assert_eq!(unsafe { *it.get() }, 3);
    it.dec();
    assert_eq!(unsafe { *it.get() }, 2);
    it.post_dec();
    assert_eq!(unsafe { *it.get() }, 1);
    it += 2;
    assert_eq!(unsafe { *it.get() }, 3);
    it -= 2;
    assert_eq!(unsafe { *it.get() }, 1);
    it = it + 2;
    assert_eq!(unsafe { *it.get() }, 3);
    it = it - 2;
    assert_eq!(unsafe { *it.get() }, 1);
    assert_eq!(unsafe { *it.at(2) }, 3);
}

#[test]
fn mut_cursor_add_and_subtract() {
    let mut v = one_two_three();

    let mut it = v.begin_mut();
    it.inc();
    assert_eq!(unsafe { *it.get() }, 2);
    it.post_inc();
    assert_eq!(unsafe { *it.get() }, 3);
    it.dec();
    assert_eq!(unsafe { *it.get() }, 2);
    it.post_dec();
    assert_eq!(unsafe { *it.get() }, 1);
    it += 2;
    assert_eq!(unsafe { *it.get() }, 3);
    it -= 2;
    assert_eq!(unsafe { *it.get() }, 1);
    it = it + 2;
    assert_eq!(unsafe { *it.get() }, 3);
    it = it - 2;
    assert_eq!(unsafe { *it.get() }, 1);
    assert_eq!(unsafe { *it.at(2) }, 3);
}

#[test]
fn postfix_returns_old_position() {
    let v = one_two_three();
    let mut it = v.begin();
    let old = it.post_inc();
    assert_eq!(old, v.begin());
    assert_eq!(it, v.begin() + 1);

    let old = it.post_dec();
    assert_eq!(old, v.begin() + 1);
    assert_eq!(it, v.begin());
}

#[test]
fn prefix_chains() {
    let v = one_two_three();
    let mut it = v.begin();
    it.inc().inc();
    assert_eq!(unsafe { *it.get() }, 3);
    it.dec().dec();
    assert_eq!(it, v.begin());
}

#[test]
fn mut_cursor_writes_through() {
    let mut v = one_two_three();
    let mut it = v.begin_mut();
    unsafe { *it.get_mut() = 10 };
    unsafe { *it.at_mut(2) = 30 };
    it.inc();
    unsafe { *it.get_mut() += 18 };
    assert_eq!(v.as_slice(), &[10, 20, 30]);
}

#[test]
fn forward_walk_visits_every_element() {
    let v: Vector<i32> = (1..=5).collect();
    assert_eq!(forward(&v), vec![1, 2, 3, 4, 5]);
}

#[test]
fn empty_vector_begin_equals_end() {
    let v = Vector::<i32>::new();
    assert_eq!(v.begin(), v.end());
    assert_eq!(v.end() - v.begin(), 0);
}

#[test]
fn distance_is_signed() {
    let v: Vector<i32> = (0..10).collect();
    assert_eq!(v.end() - v.begin(), 10);
    assert_eq!(v.begin() - v.end(), -10);
    assert_eq!((v.begin() + 7) - (v.begin() + 2), 5);
}

#[test]
fn relational_by_position() {
    let v: Vector<i32> = (0..4).collect();
    let a = v.begin() + 1;
    let b = v.begin() + 3;
    assert!(a < b);
    assert!(a <= b);
    assert!(b > a);
    assert!(b >= a);
    assert!(a <= a);
    assert!(a >= a);
    assert!(a != b);
    assert!(a == v.end() - 3);
}

#[test]
fn before_begin_is_representable() {
    let v = one_two_three();
    let mut it = v.begin();
    it.dec();
    assert_eq!(it.index(), -1);
    assert!(it < v.begin());
    it.inc();
    assert_eq!(it, v.begin());
}

#[test]
fn cursors_of_different_vectors_are_unordered() {
    let a = one_two_three();
    let b = one_two_three();
    assert_ne!(a.begin(), b.begin());
    assert_eq!(a.begin().partial_cmp(&b.begin()), None);
}

#[test]
fn default_cursor_is_null() {
    let c = Cursor::<i32>::default();
    assert!(c.is_null());
    assert_eq!(c, Cursor::null());
    assert!(CursorMut::<i32>::default().is_null());
}

#[test]
fn mut_and_const_compare_at_same_position() {
    let mut v = one_two_three();
    let end = v.end();
    let m = v.begin_mut() + 3;
    assert!(m == end);
    assert!(end == m);
    assert!(m.as_const() == end);
    assert!(Cursor::from(m) == end);
    assert!(m - 1 < end);
    assert!(end > m - 1);
}

#[test]
fn mut_cursor_distance() {
    let mut v = one_two_three();
    let first = v.begin_mut();
    let last = first + 3;
    assert_eq!(last - first, 3);
}

#[test]
fn as_ptr_matches_slice_addresses() {
    let v = one_two_three();
    for (i, item) in v.iter().enumerate() {
        let it = v.begin() + isize::try_from(i).unwrap();
        assert!(std::ptr::eq(it.as_ptr(), item));
    }
}

#[test]
fn debug_shows_index() {
    let mut v = one_two_three();
    assert_eq!(format!("{:?}", v.begin() + 2), "Cursor(2)");
    assert_eq!(format!("{:?}", v.end_mut()), "CursorMut(3)");
}

#[test]
fn reversed_maps_onto_reverse_cursors() {
    let v = one_two_three();
    assert_eq!(v.end().reversed(), v.rbegin());
    assert_eq!(v.begin().reversed(), v.rend());
    assert_eq!(v.rbegin().base(), v.end());
}

#[test]
fn range_constructor_copies_in_order() {
    let v: Vector<i32> = (1..=5).collect();
    let copy = unsafe { Vector::from_cursors(v.begin(), v.end()) }.unwrap();
    assert_eq!(copy, v);
    assert_eq!(copy.as_slice(), &[1, 2, 3, 4, 5]);
}

#[test]
fn range_constructor_from_subrange() {
    let v: Vector<String> = (0..6).map(|i| i.to_string()).collect();
    let copy = unsafe { Vector::from_cursors(v.begin() + 1, v.end() - 2) }.unwrap();
    assert_eq!(copy.to_string(), "1 2 3");
}

#[test]
fn range_constructor_from_mut_cursors() {
    let mut v = one_two_three();
    let first = v.begin_mut();
    let last = v.end_mut();
    let copy = unsafe { Vector::from_cursors(first, last) }.unwrap();
    assert_eq!(copy, [1, 2, 3]);
}

#[test]
fn range_constructor_empty_range() {
    let v = one_two_three();
    let copy = unsafe { Vector::from_cursors(v.end(), v.end()) }.unwrap();
    assert!(copy.is_empty());
    assert_eq!(copy.capacity(), 0);
}
