//! Free-function compositions over [`Outcome`].

use itertools::Itertools;

use crate::outcome::Outcome;

pub type FallibleTransform<T, U, E> = fn(T) -> Outcome<U, E>;

pub type Validator<T, E> = fn(&T) -> Outcome<(), E>;

/// Compose two fallible steps; `g` only runs if `f` succeeds.
pub fn compose<T, U, V, E>(
    f: impl Fn(T) -> Outcome<U, E>,
    g: impl Fn(U) -> Outcome<V, E>,
) -> impl Fn(T) -> Outcome<V, E> {
    move |x| f(x).and_then(&g)
}

/// Run every validator against `item`; the first failure wins.
pub fn validate_all<T, E, F>(item: T, validators: &[F]) -> Outcome<T, E>
where
    F: Fn(&T) -> Outcome<(), E>,
{
    validators
        .iter()
        .try_for_each(|validator| validator(&item).into_result())
        .map(|()| item)
        .into()
}

/// Thread `item` through each transform in order.
pub fn apply_transforms<T, E, F>(item: T, transforms: &[F]) -> Outcome<T, E>
where
    F: Fn(T) -> Outcome<T, E>,
{
    transforms
        .iter()
        .try_fold(item, |acc, transform| transform(acc).into_result())
        .into()
}

/// Split into payloads and errors, preserving order within each side.
pub fn partition<T, E, I>(outcomes: I) -> (Vec<T>, Vec<E>)
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    outcomes
        .into_iter()
        .partition_map(|outcome| outcome.into_either().flip())
}

/// Collect payloads, stopping at the first failure.
pub fn collect<T, E, I>(outcomes: I) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    outcomes.into_iter().collect()
}
