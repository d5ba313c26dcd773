//! Entity ids, batch parsing, and random id generation

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::{FetchError, FetchResult};

/// Id range the public API serves
pub const MIN_RANDOM_ID: u32 = 1;
pub const MAX_RANDOM_ID: u32 = 1010;

/// Batch size for randomized lookups
pub const DEFAULT_RANDOM_COUNT: usize = 4;

/// Opaque identifier for a Pokemon, used as a URL path segment
///
/// Either a numeric id or a name. Duplicates in a batch are allowed and
/// simply produce duplicate renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityId {
    Number(u32),
    Name(String),
}

impl FromStr for EntityId {
    type Err = FetchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(FetchError::InvalidInput("empty id".to_string()));
        }
        match trimmed.parse::<u32>() {
            Ok(n) => Ok(EntityId::Number(n)),
            // API names are lowercase
            Err(_) => Ok(EntityId::Name(trimmed.to_lowercase())),
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Number(n) => write!(f, "{}", n),
            EntityId::Name(name) => write!(f, "{}", name),
        }
    }
}

/// Parse a comma-separated list of ids/names into a batch
///
/// Blank input and input containing nothing but separators are rejected with
/// an explicit error rather than silently rendering nothing.
pub fn parse_batch(input: &str) -> FetchResult<Vec<EntityId>> {
    if input.trim().is_empty() {
        return Err(FetchError::InvalidInput("empty id list".to_string()));
    }

    let ids: Vec<EntityId> = input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse())
        .collect::<Result<_, _>>()?;

    if ids.is_empty() {
        return Err(FetchError::InvalidInput(format!(
            "no ids found in {input:?}"
        )));
    }

    Ok(ids)
}

/// Draw `count` random ids from the API's id range
///
/// Immediate repeats are re-drawn; there is no de-duplication across the
/// whole batch.
pub fn random_batch(count: usize) -> Vec<EntityId> {
    let mut rng = rand::thread_rng();
    let mut out = Vec::with_capacity(count);
    let mut last: Option<u32> = None;

    for _ in 0..count {
        let mut n = rng.gen_range(MIN_RANDOM_ID..=MAX_RANDOM_ID);
        while Some(n) == last {
            n = rng.gen_range(MIN_RANDOM_ID..=MAX_RANDOM_ID);
        }
        last = Some(n);
        out.push(EntityId::Number(n));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric_and_name() {
        assert_eq!("25".parse::<EntityId>().unwrap(), EntityId::Number(25));
        assert_eq!(
            " Pikachu ".parse::<EntityId>().unwrap(),
            EntityId::Name("pikachu".to_string())
        );
    }

    #[test]
    fn test_parse_batch_splits_on_comma() {
        let ids = parse_batch("1, pikachu,7").unwrap();
        assert_eq!(
            ids,
            vec![
                EntityId::Number(1),
                EntityId::Name("pikachu".to_string()),
                EntityId::Number(7),
            ]
        );
    }

    #[test]
    fn test_parse_batch_keeps_duplicates() {
        let ids = parse_batch("25,25").unwrap();
        assert_eq!(ids, vec![EntityId::Number(25), EntityId::Number(25)]);
    }

    #[test]
    fn test_parse_batch_rejects_blank_input() {
        assert!(matches!(
            parse_batch("   "),
            Err(FetchError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_batch(", ,"),
            Err(FetchError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_random_batch_size_and_range() {
        let ids = random_batch(DEFAULT_RANDOM_COUNT);
        assert_eq!(ids.len(), 4);
        for id in ids {
            match id {
                EntityId::Number(n) => {
                    assert!((MIN_RANDOM_ID..=MAX_RANDOM_ID).contains(&n));
                }
                EntityId::Name(_) => panic!("random batch must be numeric"),
            }
        }
    }

    #[test]
    fn test_random_batch_no_immediate_repeat() {
        for _ in 0..50 {
            let ids = random_batch(10);
            for pair in ids.windows(2) {
                assert_ne!(pair[0], pair[1]);
            }
        }
    }
}
