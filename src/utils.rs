//! Scan based extremum search over any sequence.
//!
//! Every function walks the sequence once, calls the evaluator exactly once per
//! element and returns `None` for an empty sequence.

#[inline(always)]
pub fn min<I, F, V>(f: F, values: I) -> Option<V>
where
    I: IntoIterator,
    F: Fn(&I::Item) -> V,
    V: PartialOrd,
{
    let mut iter = values.into_iter();
    let mut m: V = f(&iter.next()?);
    for item in iter {
        let v = f(&item);
        if v < m {
            m = v;
        }
    }
    Some(m)
}

#[inline(always)]
pub fn max<I, F, V>(f: F, values: I) -> Option<V>
where
    I: IntoIterator,
    F: Fn(&I::Item) -> V,
    V: PartialOrd,
{
    let mut iter = values.into_iter();
    let mut m: V = f(&iter.next()?);
    for item in iter {
        let v = f(&item);
        if v > m {
            m = v;
        }
    }
    Some(m)
}

/// Returns `(min, max)` in a single pass.
///
/// A value that raises the running maximum is not compared against the
/// running minimum in the same step.
pub fn range<I, F, V>(f: F, values: I) -> Option<(V, V)>
where
    I: IntoIterator,
    F: Fn(&I::Item) -> V,
    V: PartialOrd + Clone,
{
    let mut iter = values.into_iter();
    let mut min: V = f(&iter.next()?);
    let mut max: V = min.clone();
    for item in iter {
        let v = f(&item);
        if v > max {
            max = v;
        } else if v < min {
            min = v;
        }
    }
    Some((min, max))
}

/// Returns the element maximizing `f` together with its value.
///
/// Ties keep the first occurrence: greedy policies rely on this to pick the
/// lowest ranked action among equally valued ones.
pub fn argmax<I, F, V>(f: F, values: I) -> Option<(I::Item, V)>
where
    I: IntoIterator,
    F: Fn(&I::Item) -> V,
    V: PartialOrd,
{
    let mut iter = values.into_iter();
    let mut arg_max = iter.next()?;
    let mut max: V = f(&arg_max);
    for item in iter {
        let v = f(&item);
        if v > max {
            max = v;
            arg_max = item;
        }
    }
    Some((arg_max, max))
}

/// Returns the element minimizing `f` together with its value. First occurrence wins.
pub fn argmin<I, F, V>(f: F, values: I) -> Option<(I::Item, V)>
where
    I: IntoIterator,
    F: Fn(&I::Item) -> V,
    V: PartialOrd,
{
    let mut iter = values.into_iter();
    let mut arg_min = iter.next()?;
    let mut min: V = f(&arg_min);
    for item in iter {
        let v = f(&item);
        if v < min {
            min = v;
            arg_min = item;
        }
    }
    Some((arg_min, min))
}
