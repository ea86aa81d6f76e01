// File: crates/engagement-core/tests/scale.rs
// Purpose: Band, linear and ordinal scale behaviour, nice rounding and tick labels.

use chart_core::scale::{tick_increment, ticks};
use chart_core::{BandScale, LinearScale, OrdinalScale};
use proptest::prelude::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn band_slots_fill_the_range() {
    let w = 600.0;
    let p = 0.3;
    let x = BandScale::new(["A", "B", "C", "D"], (0.0, w)).padding(p);
    let bw = x.bandwidth();
    let gap = x.step() - bw;
    let outer = p * x.step();
    // four bands, three inner gaps, outer padding at both ends
    assert!(close(4.0 * bw + 3.0 * gap + 2.0 * outer, w));
    let starts: Vec<f64> = x.domain().iter().map(|k| x.position(k).unwrap()).collect();
    for pair in starts.windows(2) {
        assert!(close(pair[1] - pair[0], x.step()));
    }
    assert!(close(starts[0], outer));
}

#[test]
fn band_without_outer_padding_sums_to_width() {
    let w = 500.0;
    let x = BandScale::new(["a", "b", "c"], (0.0, w)).padding_inner(0.2);
    let gap = x.step() - x.bandwidth();
    assert!(close(3.0 * x.bandwidth() + 2.0 * gap, w));
    assert!(close(x.position("a").unwrap(), 0.0));
    assert!(close(x.position("c").unwrap() + x.bandwidth(), w));
}

#[test]
fn band_without_padding() {
    let x = BandScale::new(["a", "b"], (0.0, 100.0));
    assert_eq!(x.bandwidth(), 50.0);
    assert_eq!(x.position("b"), Some(50.0));
    assert_eq!(x.center("a"), Some(25.0));
    assert_eq!(x.position("zzz"), None);
}

#[test]
fn band_domain_keeps_first_occurrence() {
    let x = BandScale::new(["B", "A", "C", "A", "B"], (0.0, 300.0));
    assert_eq!(x.domain(), ["B", "A", "C"]);
    assert!(x.position("B").unwrap() < x.position("A").unwrap());
}

#[test]
fn reversed_band_range_lays_out_right_to_left() {
    let x = BandScale::new(["a", "b"], (100.0, 0.0));
    assert_eq!(x.position("a"), Some(50.0));
    assert_eq!(x.position("b"), Some(0.0));
}

#[test]
fn nice_extends_to_round_bounds() {
    let y = LinearScale::new((3.0, 97.0), (400.0, 0.0)).nice();
    let (lo, hi) = y.domain();
    assert!(lo <= 3.0 && hi >= 97.0);
    assert_eq!((lo, hi), (0.0, 100.0));
    let step = tick_increment(lo, hi, 10.0);
    assert!(close(lo % step, 0.0) && close(hi % step, 0.0));
}

#[test]
fn nice_small_and_reversed_domains() {
    assert_eq!(LinearScale::new((0.13, 0.91), (1.0, 0.0)).nice().domain(), (0.1, 1.0));
    assert_eq!(LinearScale::new((97.0, 3.0), (0.0, 1.0)).nice().domain(), (100.0, 0.0));
    // degenerate domains are left alone
    assert_eq!(LinearScale::new((5.0, 5.0), (0.0, 1.0)).nice().domain(), (5.0, 5.0));
}

#[test]
fn linear_maps_inverted_range() {
    let y = LinearScale::new((0.0, 100.0), (400.0, 0.0));
    assert_eq!(y.apply(0.0), 400.0);
    assert_eq!(y.apply(100.0), 0.0);
    assert_eq!(y.apply(25.0), 300.0);
    assert_eq!(y.invert(300.0), 25.0);
}

#[test]
fn degenerate_domain_maps_to_middle() {
    let y = LinearScale::new((7.0, 7.0), (400.0, 0.0));
    assert_eq!(y.apply(7.0), 200.0);
    assert!(y.apply(f64::NAN).is_nan());
}

#[test]
fn ticks_and_labels() {
    let y = LinearScale::new((0.0, 100.0), (400.0, 0.0));
    let t = y.ticks(10);
    assert_eq!(t.len(), 11);
    assert_eq!(t[0], 0.0);
    assert_eq!(t[10], 100.0);

    assert_eq!(ticks(0.0, 1.0, 5.0), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    assert_eq!(ticks(1.0, 0.0, 2.0), vec![1.0, 0.5, 0.0]);

    let fmt = LinearScale::new((0.0, 2000.0), (1.0, 0.0)).tick_format(10);
    assert_eq!(fmt.format(1200.0), "1,200");
    assert_eq!(fmt.format(-200.0), "\u{2212}200");
    let fine = LinearScale::new((0.0, 1.0), (1.0, 0.0)).tick_format(10);
    assert_eq!(fine.format(0.3), "0.3");
    assert_eq!(fine.format(-0.0), "0.0");
}

#[test]
fn ordinal_cycles_palette() {
    let c = OrdinalScale::new(["a", "b", "c", "d"], vec!["red", "blue"]);
    assert_eq!(c.get("a"), Some(&"red"));
    assert_eq!(c.get("b"), Some(&"blue"));
    assert_eq!(c.get("c"), Some(&"red"));
    assert_eq!(c.get("missing"), None);
    let empty: OrdinalScale<&str> = OrdinalScale::new(["a"], vec![]);
    assert_eq!(empty.get("a"), None);
}

proptest! {
    #[test]
    fn nice_never_shrinks(lo in -1.0e6f64..1.0e6, span in 1.0e-3f64..1.0e6) {
        let hi = lo + span;
        let (nlo, nhi) = LinearScale::new((lo, hi), (1.0, 0.0)).nice().domain();
        prop_assert!(nlo <= lo);
        prop_assert!(nhi >= hi);
    }

    #[test]
    fn bandwidth_is_uniform(n in 1usize..20, p in 0.0f64..0.5, w in 10.0f64..2000.0) {
        let keys: Vec<String> = (0..n).map(|i| format!("k{i}")).collect();
        let x = BandScale::new(&keys, (0.0, w)).padding(p);
        let total = n as f64 * x.bandwidth()
            + (n as f64 - 1.0) * (x.step() - x.bandwidth())
            + 2.0 * p * x.step();
        prop_assert!((total - w).abs() < 1e-6);
        for k in &keys {
            let left = x.position(k).unwrap();
            prop_assert!(left >= -1e-9 && left + x.bandwidth() <= w + 1e-9);
        }
    }
}
