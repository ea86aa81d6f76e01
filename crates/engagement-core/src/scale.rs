// File: crates/engagement-core/src/scale.rs
// Summary: Band (categorical), linear (continuous, niceable) and ordinal (palette) scales.

use std::collections::HashMap;

/// Categorical scale splitting a pixel range into equal bands.
///
/// Bands are laid out in domain order. `step` is the distance between band
/// starts; `bandwidth` excludes the inner padding.
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    index: HashMap<String, usize>,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
    align: f64,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    /// Scale over `domain` (duplicates collapse to their first occurrence).
    pub fn new<I, S>(domain: I, range: (f64, f64)) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let domain = crate::group::distinct(domain);
        let index = domain.iter().enumerate().map(|(i, k)| (k.clone(), i)).collect();
        let mut s = Self {
            domain,
            index,
            range,
            padding_inner: 0.0,
            padding_outer: 0.0,
            align: 0.5,
            start: 0.0,
            step: 0.0,
            bandwidth: 0.0,
        };
        s.rescale();
        s
    }

    /// Same fraction of a step between bands and at both ends.
    pub fn padding(mut self, p: f64) -> Self {
        self.padding_outer = p.max(0.0);
        self.padding_inner = p.clamp(0.0, 1.0);
        self.rescale();
        self
    }

    pub fn padding_inner(mut self, p: f64) -> Self {
        self.padding_inner = p.clamp(0.0, 1.0);
        self.rescale();
        self
    }

    pub fn padding_outer(mut self, p: f64) -> Self {
        self.padding_outer = p.max(0.0);
        self.rescale();
        self
    }

    /// Where leftover outer space goes: 0 = all after, 1 = all before.
    pub fn align(mut self, a: f64) -> Self {
        self.align = a.clamp(0.0, 1.0);
        self.rescale();
        self
    }

    fn rescale(&mut self) {
        let n = self.domain.len() as f64;
        let (r0, r1) = self.range;
        let (lo, hi) = if r1 < r0 { (r1, r0) } else { (r0, r1) };
        self.step = (hi - lo) / (n - self.padding_inner + self.padding_outer * 2.0).max(1.0);
        self.start = lo + (hi - lo - self.step * (n - self.padding_inner)) * self.align;
        self.bandwidth = self.step * (1.0 - self.padding_inner);
    }

    pub fn domain(&self) -> &[String] { &self.domain }

    pub fn range(&self) -> (f64, f64) { self.range }

    pub fn bandwidth(&self) -> f64 { self.bandwidth }

    pub fn step(&self) -> f64 { self.step }

    /// Left edge of the band for `key`, `None` if the key is not in the domain.
    pub fn position(&self, key: &str) -> Option<f64> {
        let i = *self.index.get(key)?;
        let slot = if self.range.1 < self.range.0 { self.domain.len() - 1 - i } else { i };
        Some(self.start + self.step * slot as f64)
    }

    /// Middle of the band for `key`.
    pub fn center(&self, key: &str) -> Option<f64> {
        self.position(key).map(|x| x + self.bandwidth / 2.0)
    }
}

/// Continuous scale mapping `domain` onto `range` by linear interpolation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) { self.domain }

    pub fn range(&self) -> (f64, f64) { self.range }

    /// Extend the domain to round numbers, aiming at about ten ticks.
    pub fn nice(self) -> Self { self.nice_with(10) }

    /// Extend the domain outward so both ends are multiples of the tick step
    /// for `count` ticks. The step is recomputed until it stops changing.
    pub fn nice_with(mut self, count: usize) -> Self {
        let (d0, d1) = self.domain;
        let reversed = d1 < d0;
        let (mut start, mut stop) = if reversed { (d1, d0) } else { (d0, d1) };
        if count == 0 || !(start < stop) || !start.is_finite() || !stop.is_finite() {
            return self;
        }
        let mut prestep = None;
        for _ in 0..10 {
            let step = tick_increment(start, stop, count as f64);
            if prestep == Some(step) {
                self.domain = if reversed { (stop, start) } else { (start, stop) };
                return self;
            } else if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            prestep = Some(step);
        }
        self
    }

    /// Map a domain value to the range. A zero-width domain maps to the range middle.
    pub fn apply(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let t = if d1 == d0 {
            if v.is_nan() { f64::NAN } else { 0.5 }
        } else {
            (v - d0) / (d1 - d0)
        };
        r0 + (r1 - r0) * t
    }

    pub fn invert(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if r1 == r0 {
            return (d0 + d1) / 2.0;
        }
        d0 + (d1 - d0) * (px - r0) / (r1 - r0)
    }

    /// Round values inside the domain, about `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count as f64)
    }

    /// Formatter matching [`LinearScale::ticks`]: fixed precision from the tick
    /// step, thousands separators, and a typographic minus sign.
    pub fn tick_format(&self, count: usize) -> TickFormat {
        let step = tick_step(self.domain.0, self.domain.1, count as f64);
        TickFormat { precision: precision_fixed(step) }
    }
}

/// Fixed-precision number formatter for axis labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickFormat {
    pub precision: usize,
}

impl TickFormat {
    pub fn format(&self, v: f64) -> String {
        if !v.is_finite() {
            return v.to_string();
        }
        let body = format!("{:.*}", self.precision, v.abs());
        let (int, frac) = match body.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (body.as_str(), None),
        };
        let mut out = String::new();
        let rounded_zero = body.bytes().all(|b| b == b'0' || b == b'.');
        if v < 0.0 && !rounded_zero {
            out.push('\u{2212}');
        }
        for (i, ch) in int.chars().enumerate() {
            if i > 0 && (int.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        if let Some(f) = frac {
            out.push('.');
            out.push_str(f);
        }
        out
    }
}

fn precision_fixed(step: f64) -> usize {
    if !(step.is_finite() && step != 0.0) {
        return 0;
    }
    (-step.abs().log10().floor()).max(0.0) as usize
}

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// `(i1, i2, inc)`: ticks are `i * inc` for `i1..=i2`, or `i / -inc` when `inc < 0`.
fn tick_layout(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    let (i1, i2, inc) = if power < 0.0 {
        let m = 10f64.powf(-power) / factor;
        let (mut i1, mut i2) = ((start * m).round(), (stop * m).round());
        if i1 / m < start { i1 += 1.0; }
        if i2 / m > stop { i2 -= 1.0; }
        (i1, i2, -m)
    } else {
        let m = 10f64.powf(power) * factor;
        let (mut i1, mut i2) = ((start / m).round(), (stop / m).round());
        if i1 * m < start { i1 += 1.0; }
        if i2 * m > stop { i2 -= 1.0; }
        (i1, i2, m)
    };
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_layout(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Signed tick increment; negative values encode the reciprocal of a sub-unit step.
pub fn tick_increment(start: f64, stop: f64, count: f64) -> f64 {
    tick_layout(start, stop, count).2
}

/// Distance between ticks for `count` ticks over `[start, stop]`, sign follows the direction.
pub fn tick_step(start: f64, stop: f64, count: f64) -> f64 {
    let reverse = stop < start;
    let inc = if reverse { tick_increment(stop, start, count) } else { tick_increment(start, stop, count) };
    let step = if inc < 0.0 { 1.0 / -inc } else { inc };
    if reverse { -step } else { step }
}

/// Round tick values over `[start, stop]`, in the same direction.
pub fn ticks(start: f64, stop: f64, count: f64) -> Vec<f64> {
    if !(count > 0.0) {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (i1, i2, inc) = if reverse { tick_layout(stop, start, count) } else { tick_layout(start, stop, count) };
    if !(i2 >= i1) {
        return Vec::new();
    }
    let n = (i2 - i1) as usize + 1;
    (0..n)
        .map(|i| {
            let k = if reverse { i2 - i as f64 } else { i1 + i as f64 };
            if inc < 0.0 { k / -inc } else { k * inc }
        })
        .collect()
}

/// Discrete scale assigning palette entries by domain position, cycling.
#[derive(Clone, Debug, PartialEq)]
pub struct OrdinalScale<T> {
    domain: Vec<String>,
    index: HashMap<String, usize>,
    range: Vec<T>,
}

impl<T> OrdinalScale<T> {
    pub fn new<I, S>(domain: I, range: Vec<T>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let domain = crate::group::distinct(domain);
        let index = domain.iter().enumerate().map(|(i, k)| (k.clone(), i)).collect();
        Self { domain, index, range }
    }

    pub fn domain(&self) -> &[String] { &self.domain }

    /// Entry for `key`; `None` for keys outside the domain or an empty palette.
    pub fn get(&self, key: &str) -> Option<&T> {
        if self.range.is_empty() {
            return None;
        }
        let i = *self.index.get(key)?;
        self.range.get(i % self.range.len())
    }
}
