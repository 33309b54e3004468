/// Aggregation policy: an associative monoid over the element type.
///
/// `combine` is always called with arguments in range order, so it does not
/// need to be commutative.
pub trait Combiner {
    type Value: Clone;

    fn identity() -> Self::Value;
    fn combine(left: &Self::Value, right: &Self::Value) -> Self::Value;
}

/// Range-update policy: pending tags, their composition, and their
/// width-aware action on aggregates.
pub trait Updater<V> {
    type Tag: Clone;

    fn noop() -> Self::Tag;

    /// Aggregate of `width` elements currently aggregated as `value`, after
    /// `tag` has been applied to each of them.
    fn apply(value: &V, tag: &Self::Tag, width: usize) -> V;

    /// Single tag equivalent to applying `older` first, then `newer`.
    fn compose(older: &Self::Tag, newer: &Self::Tag) -> Self::Tag;
}

pub struct SumCombiner;

impl Combiner for SumCombiner {
    type Value = i64;

    fn identity() -> Self::Value {
        0
    }

    fn combine(left: &Self::Value, right: &Self::Value) -> Self::Value {
        left + right
    }
}

pub struct MinCombiner;

impl Combiner for MinCombiner {
    type Value = i64;

    fn identity() -> Self::Value {
        i64::MAX
    }

    fn combine(left: &Self::Value, right: &Self::Value) -> Self::Value {
        (*left).min(*right)
    }
}

pub struct AddToSum;

impl Updater<i64> for AddToSum {
    type Tag = i64;

    fn noop() -> Self::Tag {
        0
    }

    fn apply(value: &i64, tag: &Self::Tag, width: usize) -> i64 {
        value + tag * width as i64
    }

    fn compose(older: &Self::Tag, newer: &Self::Tag) -> Self::Tag {
        older + newer
    }
}

pub struct AddToMin;

impl Updater<i64> for AddToMin {
    type Tag = i64;

    fn noop() -> Self::Tag {
        0
    }

    fn apply(value: &i64, tag: &Self::Tag, _width: usize) -> i64 {
        value + tag
    }

    fn compose(older: &Self::Tag, newer: &Self::Tag) -> Self::Tag {
        older + newer
    }
}

pub struct AssignToMin;

impl Updater<i64> for AssignToMin {
    type Tag = Option<i64>;

    fn noop() -> Self::Tag {
        None
    }

    fn apply(value: &i64, tag: &Self::Tag, _width: usize) -> i64 {
        tag.unwrap_or(*value)
    }

    fn compose(older: &Self::Tag, newer: &Self::Tag) -> Self::Tag {
        newer.or(*older)
    }
}

pub struct AssignToSum;

impl Updater<i64> for AssignToSum {
    type Tag = Option<i64>;

    fn noop() -> Self::Tag {
        None
    }

    fn apply(value: &i64, tag: &Self::Tag, width: usize) -> i64 {
        match tag {
            Some(x) => x * width as i64,
            None => *value,
        }
    }

    fn compose(older: &Self::Tag, newer: &Self::Tag) -> Self::Tag {
        newer.or(*older)
    }
}
