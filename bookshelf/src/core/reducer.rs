//! Reducer contract and slice composition.
//!
//! A reducer maps `(prior state, action)` to the next state without side
//! effects. `None` stands for "no prior state" and must yield the reducer's
//! default. [`combine_reducers!`](crate::combine_reducers) merges several
//! slice reducers into one reducer over a struct with one field per slice.

use std::marker::PhantomData;

/// Pure state transition for one piece of state.
pub trait Reducer<A> {
    type State;

    /// Compute the next state. Must not mutate anything reachable from `state`.
    fn reduce(&self, state: Option<&Self::State>, action: &A) -> Self::State;
}

/// Reducer backed by a plain function or closure.
pub struct FnReducer<F, S> {
    f: F,
    _state: PhantomData<fn() -> S>,
}

/// Wrap `f` as a [`Reducer`].
pub fn from_fn<A, S, F>(f: F) -> FnReducer<F, S>
where
    F: Fn(Option<&S>, &A) -> S,
{
    FnReducer {
        f,
        _state: PhantomData,
    }
}

impl<A, S, F> Reducer<A> for FnReducer<F, S>
where
    F: Fn(Option<&S>, &A) -> S,
{
    type State = S;

    fn reduce(&self, state: Option<&S>, action: &A) -> S {
        (self.f)(state, action)
    }
}

impl<A, R: Reducer<A> + ?Sized> Reducer<A> for Box<R> {
    type State = R::State;

    fn reduce(&self, state: Option<&Self::State>, action: &A) -> Self::State {
        (**self).reduce(state, action)
    }
}

/// Compose slice reducers into a single reducer.
///
/// Declares a state struct with one public field per slice, a reducer struct
/// holding one slice reducer per field, and a [`Reducer`] impl on the latter.
/// Every slice reducer sees every action; slices are not routed or filtered.
/// The composed state is always a fresh struct, while each field keeps
/// whatever its slice reducer returned.
///
/// ```
/// use bookshelf::combine_reducers;
/// use bookshelf::core::reducer::Reducer;
///
/// pub struct Count;
/// impl Reducer<i64> for Count {
///     type State = i64;
///     fn reduce(&self, state: Option<&i64>, action: &i64) -> i64 {
///         state.copied().unwrap_or_default() + action
///     }
/// }
///
/// pub struct Last;
/// impl Reducer<i64> for Last {
///     type State = Option<i64>;
///     fn reduce(&self, _state: Option<&Option<i64>>, action: &i64) -> Option<i64> {
///         Some(*action)
///     }
/// }
///
/// combine_reducers! {
///     #[derive(Debug, PartialEq)]
///     pub struct Totals;
///     pub struct TotalsReducer for i64 {
///         sum: Count,
///         last: Last,
///     }
/// }
///
/// let reducer = TotalsReducer { sum: Count, last: Last };
/// let first = reducer.reduce(None, &3);
/// let second = reducer.reduce(Some(&first), &4);
/// assert_eq!(second, Totals { sum: 7, last: Some(4) });
/// assert_eq!(Totals::SLICES, &["sum", "last"]);
/// ```
#[macro_export]
macro_rules! combine_reducers {
    (
        $(#[$state_meta:meta])*
        $state_vis:vis struct $state:ident;
        $(#[$reducer_meta:meta])*
        $reducer_vis:vis struct $reducer:ident for $action:ty {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $slice:ty
            ),+ $(,)?
        }
    ) => {
        $(#[$state_meta])*
        $state_vis struct $state {
            $(
                $(#[$field_meta])*
                pub $field: <$slice as $crate::core::reducer::Reducer<$action>>::State,
            )+
        }

        impl $state {
            /// Slice names in declaration order.
            pub const SLICES: &'static [&'static str] = &[$(stringify!($field)),+];
        }

        $(#[$reducer_meta])*
        $reducer_vis struct $reducer {
            $(pub $field: $slice,)+
        }

        impl $crate::core::reducer::Reducer<$action> for $reducer {
            type State = $state;

            fn reduce(&self, state: ::std::option::Option<&$state>, action: &$action) -> $state {
                $state {
                    $(
                        $field: $crate::core::reducer::Reducer::<$action>::reduce(
                            &self.$field,
                            state.map(|prior| &prior.$field),
                            action,
                        ),
                    )+
                }
            }
        }
    };
}
