extern crate std;

use core::cell::Cell;

use std::{format, vec, vec::Vec};

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::linked_list::intrusive::{node::Node, sorted::SortedList};

fn greater(a: &i32, b: &i32) -> bool {
    a > b
}

#[test]
fn test_sorted_insert_orders_values() {
    let mut list = SortedList::new(greater);
    list.insert(Node::allocate(5));
    list.insert(Node::allocate(1));
    list.insert(Node::allocate(3));

    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 3, 5]);
    assert_eq!(*list.peek_front().unwrap().data(), 1);
    assert_eq!(*list.peek_back().unwrap().data(), 5);
    assert_eq!(list.count(), 3);
}

#[test]
fn test_sorted_insert_none_is_noop() {
    let mut list = SortedList::new(greater);
    list.insert(None);
    assert!(list.is_empty());

    list.emplace_insert(1).unwrap();
    list.insert(None);
    assert_eq!(list.count(), 1);
}

#[test]
fn test_sorted_with_comparator() {
    assert!(SortedList::<i32, fn(&i32, &i32) -> bool>::with_comparator(None).is_none());

    let list = SortedList::with_comparator(Some(greater)).unwrap();
    assert!(list.is_empty());
}

#[test]
fn test_sorted_ties_keep_insertion_order() {
    let mut list = SortedList::new(|a: &(i32, char), b: &(i32, char)| a.0 > b.0);
    for item in [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (3, 'e'), (2, 'f')] {
        list.emplace_insert(item).unwrap();
    }

    let order: Vec<char> = list.iter().map(|item| item.1).collect();
    assert_eq!(order, vec!['b', 'd', 'a', 'c', 'f', 'e']);
}

#[test]
fn test_sorted_ordered_after_every_insert() {
    let mut rng = StdRng::seed_from_u64(0xc0ffee);
    let mut list = SortedList::new(greater);
    let mut expected = Vec::new();

    for _ in 0..300 {
        let value = rng.random_range(-50..50);
        list.emplace_insert(value).unwrap();
        expected.push(value);
        expected.sort();

        assert_eq!(list.iter().copied().collect::<Vec<_>>(), expected);
        let back = list.peek_back().unwrap();
        assert!(back.next().is_none());
        assert_eq!(*back.data(), *expected.last().unwrap());
    }
}

#[test]
fn test_sorted_pops_stay_ordered() {
    let mut list = SortedList::new(greater);
    for value in [4, 8, 2, 6] {
        list.emplace_insert(value).unwrap();
    }

    assert_eq!(list.pop_data_front(), Some(2));
    assert_eq!(list.pop_data_back(), Some(8));

    let node = list.pop_front().unwrap();
    assert_eq!(*node.data(), 4);
    list.emplace_insert(5).unwrap();
    list.insert(Some(node));

    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![4, 5, 6]);
    assert_eq!(list.pop_back().map(Node::into_data), Some(6));
    assert_eq!(list.count(), 2);
}

#[test]
fn test_sorted_pop_empty() {
    let mut list = SortedList::new(greater);
    assert!(list.pop_front().is_none());
    assert!(list.pop_back().is_none());
    assert!(list.pop_data_front().is_none());
    assert!(list.pop_data_back().is_none());
    assert_eq!(list.count(), 0);
}

#[test]
fn test_sorted_find_and_foreach() {
    let mut list = SortedList::new(greater);
    for value in [3, 1, 2] {
        list.emplace_insert(value).unwrap();
    }

    let even = list.find(|v| v % 2 == 0).unwrap();
    assert_eq!(*even.data(), 2);
    assert_eq!(*even.prev().unwrap().data(), 1);
    assert!(list.find(|v| *v > 3).is_none());

    let mut seen = vec![];
    list.foreach(|v| seen.push(*v));
    assert_eq!(seen, vec![1, 2, 3]);
}

#[test]
fn test_sorted_destroy() {
    let calls = Cell::new(0);
    let list = SortedList::new(greater);
    list.destroy(|_| calls.set(calls.get() + 1));
    assert_eq!(calls.get(), 0);

    let mut list = SortedList::new(greater);
    for value in [9, 7, 8] {
        list.emplace_insert(value).unwrap();
    }
    let mut destroyed = vec![];
    list.destroy(|v| destroyed.push(v));
    assert_eq!(destroyed, vec![7, 8, 9]);
}

#[test]
fn test_sorted_into_list_and_debug() {
    let mut list = SortedList::new(greater);
    for value in [2, 3, 1] {
        list.emplace_insert(value).unwrap();
    }
    assert_eq!(format!("{:?}", list), "[1, 2, 3]");

    let mut plain = list.into_list();
    plain.emplace_front(10).unwrap();
    assert_eq!(plain.iter().copied().collect::<Vec<_>>(), vec![10, 1, 2, 3]);
}

#[test]
fn test_sorted_comparator_state() {
    let mut comparisons = 0usize;
    {
        let mut list = SortedList::new(|a: &i32, b: &i32| {
            comparisons += 1;
            a > b
        });
        for value in [1, 2, 3] {
            list.emplace_insert(value).unwrap();
        }
        list.emplace_insert(0).unwrap();
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }
    assert!(comparisons > 0);
}

#[test]
fn test_sorted_comparator_and_nodes() {
    let mut list = SortedList::new(greater);
    for value in [30, 10, 20] {
        list.emplace_insert(value).unwrap();
    }

    let greater_than = list.comparator();
    assert!(greater_than(&2, &1));
    assert!(!greater_than(&1, &1));
    assert!(!greater_than(&1, &2));

    let nodes: Vec<i32> = list.nodes().map(|node| *node.data()).collect();
    assert_eq!(nodes, vec![10, 20, 30]);
    for pair in list.iter().collect::<Vec<_>>().windows(2) {
        assert!(!(list.comparator())(pair[0], pair[1]));
    }
}
