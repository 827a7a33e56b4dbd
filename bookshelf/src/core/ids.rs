//! Fresh identifiers for records the reducers synthesize.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::Id;

/// How a slice picks an id for a record it creates itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// One past the largest numeric id in use (first id is 1). Deterministic.
    ///
    /// When the largest id is `u64::MAX`, the lowest unused number is taken
    /// instead.
    #[default]
    Sequential,
    /// Random v4 UUID rendered as text.
    Uuid,
}

impl IdStrategy {
    /// Produce an id not present in `in_use`.
    pub fn next_id<'a>(self, in_use: impl Iterator<Item = &'a Id> + Clone) -> Id {
        match self {
            IdStrategy::Sequential => {
                let max = in_use.clone().filter_map(Id::as_number).max().unwrap_or(0);
                match max.checked_add(1) {
                    Some(next) => Id::Number(next),
                    None => lowest_unused_number(in_use.clone())
                        .map_or_else(|| unused_uuid(in_use), Id::Number),
                }
            }
            IdStrategy::Uuid => unused_uuid(in_use),
        }
    }
}

fn lowest_unused_number<'a>(in_use: impl Iterator<Item = &'a Id>) -> Option<u64> {
    let taken: HashSet<u64> = in_use.filter_map(Id::as_number).collect();
    (1..=u64::MAX).find(|candidate| !taken.contains(candidate))
}

fn unused_uuid<'a>(in_use: impl Iterator<Item = &'a Id> + Clone) -> Id {
    loop {
        let candidate = Id::Text(Uuid::new_v4().to_string());
        if !in_use.clone().any(|id| *id == candidate) {
            return candidate;
        }
    }
}
