use itertools::multizip;
use lockstep::prelude::*;
use lockstep::stream;
use lockstep::zip::Step;
use lockstep::StreamError;
use rand::Rng;

use std::collections::{LinkedList, VecDeque};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn vector_and_array() {
    let mut v1 = vec![1, 2, 3];
    let mut v2 = [-2, -3, -4, -5];

    let mut steps = 0;
    (&mut v1, &mut v2).lockstep().for_each(|step| {
        step.apply(|a, b| *a += *b);
        steps += 1;
    });

    assert_eq!(steps, 3);
    assert_eq!(v1, [-1, -1, -1]);
    assert_eq!(v2, [-2, -3, -4, -5]);
}

#[test]
fn string_and_array() {
    let s1 = String::from("abcd");
    let v2 = [-2, -3, -4, -5];

    let mut pairs = Vec::new();
    (&s1, &v2).lockstep().for_each(|step| {
        pairs.push(step.apply(|c, n| (*c, *n)));
    });
    assert_eq!(pairs, [('a', -2), ('b', -3), ('c', -4), ('d', -5)]);

    let mut steps = 0;
    ("abcd", &v2[..2]).lockstep().for_each(|_| steps += 1);
    assert_eq!(steps, 2);
}

#[test]
fn read_only_array() {
    let a1 = [4, 5, 6];
    let v2 = [-2, -3, -4, -5];

    let mut pairs = Vec::new();
    (&a1, &v2).lockstep().for_each(|step| {
        pairs.push((*step.get::<0>(), *step.get::<1>()));
    });
    assert_eq!(pairs, [(4, -2), (5, -3), (6, -4)]);
}

#[test]
fn four_arrays_mixed_provenance() {
    let a1 = [4, 5, 6];
    let mut v2 = [-2, -3, -4, -5];
    let v3 = [-6, -7, -8, -9];
    let mut v4 = [0, 0, 0, 0];

    let mut rows = Vec::new();
    (&a1, &mut v2, &v3, &mut v4).lockstep().for_each(|step| {
        let r3 = *step.get::<2>();
        *step.get::<3>() = r3;
        rows.push((*step.peek::<0>(), *step.peek::<1>(), r3));
    });

    assert_eq!(rows, [(4, -2, -6), (5, -3, -7), (6, -4, -8)]);
    assert_eq!(v4, [-6, -7, -8, 0]);
}

#[test]
fn input_stream_into_list() {
    let mut source = "0.1 0.2 0.3 0.4".as_bytes();
    let mut l1 = LinkedList::from([2.1, 3.2, 4.3, 5.4]);

    let sc1 = stream::input::<f64, _>(&mut source);
    (sc1, &mut l1).lockstep().for_each(|step| {
        let d = *step.get::<0>();
        *step.get::<1>() += d;
    });

    let expected = [2.2, 3.4, 4.6, 5.8];
    assert_eq!(l1.len(), expected.len());
    for (got, want) in l1.iter().zip(expected) {
        assert!(approx_eq(*got, want), "{got} != {want}");
    }
}

#[test]
fn output_streams_fed_by_input_streams() {
    let mut str2 = "0.5 0.6 0.7 0.8".as_bytes();
    let mut str3 = "1.5 1.6 1.7 1.8".as_bytes();
    let mut out_a = Vec::new();
    let mut out_b = Vec::new();

    let sc2 = stream::output::<f64, _>(&mut out_a).separated_by(", ");
    let sc3 = stream::input::<f64, _>(&mut str2);
    let sc4 = stream::output::<f64, _>(&mut out_b);
    let sc5 = stream::input::<f64, _>(&mut str3);

    let mut steps = 0;
    (sc2, sc3, sc4, sc5).lockstep().for_each(|step| {
        step.apply(|a, x, b, y| {
            a.set(*x);
            b.set(*y);
        });
        steps += 1;
    });

    assert_eq!(steps, 4);
    assert_eq!(String::from_utf8(out_a).unwrap(), "0.5, 0.6, 0.7, 0.8, ");
    assert_eq!(String::from_utf8(out_b).unwrap(), "1.51.61.71.8");
}

#[test]
fn output_stream_ends_with_bounded_partner() {
    let mut sink = Vec::new();
    let empty: [u32; 0] = [];

    let out = stream::output::<u32, _>(&mut sink).separated_by(" ");
    let mut steps = 0;
    (out, &empty).lockstep().for_each(|_| steps += 1);

    assert_eq!(steps, 0);
    assert!(sink.is_empty());
}

#[test]
fn malformed_input_stops_the_loop() {
    let mut source = "1 2 x 4".as_bytes();
    let mut totals = VecDeque::from([0, 0, 0, 0]);

    let mut walk = (stream::input::<i32, _>(&mut source), &mut totals)
        .lockstep()
        .walk();
    while let Some(step) = walk.next() {
        step.apply(|n, total| *total = *n);
    }

    let (it, _) = walk.into_bounds();
    assert!(matches!(
        it.cursor::<0>().error(),
        Some(StreamError::Parse { token, .. }) if token == "x"
    ));
    drop(it);
    assert_eq!(totals, [1, 2, 0, 0]);
}

#[test]
fn separated_input_yields_leading_value() {
    let mut source = "0.5, 0.6, 0.7".as_bytes();
    let mut out = vec![0.0; 3];

    let mut steps = 0;
    (stream::input::<f64, _>(&mut source), &mut out)
        .lockstep()
        .for_each(|step| {
            step.apply(|x, slot| *slot = *x);
            steps += 1;
        });

    assert_eq!(steps, 1);
    assert_eq!(out, [0.5, 0.0, 0.0]);
}

#[test]
fn filtered_products() {
    let v1 = vec![1, -1, 2, -2, 3, -3];
    let v2 = vec![4, 5, -6, 7, 8];

    let mut res = 0;
    (&v1, &v2).lockstep().for_each(|step| {
        let i1 = *step.get::<0>();
        let i2 = *step.get::<1>();
        if i1 <= 0 || i2 <= 0 {
            return;
        }
        res += i1 * i2;
    });
    assert_eq!(res, 28);
}

#[test]
fn filtered_products_through_read_only_steps() {
    let v1 = vec![1, -1, 2, -2, 3, -3, 4, -4];
    let v2 = vec![5, 5, 6, 6];

    let mut by_slot = 0;
    let mut by_apply = 0;
    (&v1, &v2).lockstep().for_each(|step| {
        let step: &Step<_> = step;
        let (i1, i2) = (*step.peek::<0>(), *step.peek::<1>());
        if i1 > 0 && i2 > 0 {
            by_slot += i1 * i2;
        }
        step.apply_ref(|i1, i2| {
            if *i1 > 0 && *i2 > 0 {
                by_apply += i1 * i2;
            }
        });
    });

    assert_eq!(by_slot, 17);
    assert_eq!(by_apply, 17);
}

#[test]
fn apply_follows_slot_provenance() {
    let mut a3 = [7, 8, 9];
    let a4 = [12, 11, 10];

    (&mut a3, &a4).lockstep().for_each(|step| {
        step.apply(|i1: &mut i32, i2: &i32| *i1 += *i2);
    });
    assert_eq!(a3, [19, 19, 19]);
}

#[test]
fn lockstep_invariant() {
    let a = [1, 2, 3, 4, 5];
    let b = VecDeque::from(['a', 'b', 'c', 'd']);
    let c = LinkedList::from([1.0, 2.0, 3.0]);

    let zip = (&a, &b, &c).lockstep();
    for k in 0..3 {
        let mut it = zip.start();
        let (mut own_a, _) = (&a).bounds();
        let (mut own_b, _) = (&b).bounds();
        let (mut own_c, _) = (&c).bounds();
        for _ in 0..k {
            it.advance();
            own_a.advance();
            own_b.advance();
            own_c.advance();
        }
        assert!(*it.cursor::<0>() == own_a);
        assert!(*it.cursor::<1>() == own_b);
        assert!(*it.cursor::<2>() == own_c);
        assert_eq!(it.cursor::<0>().remaining(), a.len() - k);
    }
}

#[test]
fn shortest_wins() {
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        let a: Vec<u32> = (0..rng.gen_range(0..20)).map(|_| rng.gen()).collect();
        let b: VecDeque<i8> = (0..rng.gen_range(0..20)).map(|_| rng.gen()).collect();
        let c: LinkedList<bool> = (0..rng.gen_range(0..20)).map(|_| rng.gen()).collect();

        let mut seen = Vec::new();
        (&a, &b, &c).lockstep().for_each(|step| {
            seen.push(step.apply(|a, b, c| (*a, *b, *c)));
        });

        let expected: Vec<_> = multizip((a.iter().copied(), b.iter().copied(), c.iter().copied()))
            .collect();
        assert_eq!(seen.len(), a.len().min(b.len()).min(c.len()));
        assert_eq!(seen, expected);
    }
}

#[test]
fn start_and_end_proxies_drive_a_manual_loop() {
    let a = ["x", "y", "z"];
    let b = vec![1, 2];

    let zip = (&a, &b).lockstep();
    let (mut it, end) = (zip.start(), zip.end());
    let mut seen = Vec::new();
    while it != end {
        seen.push(it.apply_ref(|s, n| format!("{s}{n}")));
        it.post_advance();
    }
    assert_eq!(seen, ["x1", "y2"]);
}
