use crate::models::{ListingBucket, NormalizedEntry, Side};

/// One side of the book after filtering: priced entries in input order plus
/// the separated rest bucket.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NormalizedSide {
    pub entries: Vec<NormalizedEntry>,
    pub rest: Option<ListingBucket>,
}

impl NormalizedSide {
    /// Listed count of the rest bucket when it carries any volume.
    pub fn rest_count(&self) -> Option<i64> {
        self.rest
            .map(|b| b.listed_count)
            .filter(|&count| count > 0)
    }
}

/// Convert raw listing buckets into ratio-oriented entries.
///
/// The first `0/0` bucket becomes the rest bucket. Remaining buckets with a
/// zero leg or no listings are dropped.
pub fn normalize_side(buckets: &[ListingBucket], side: Side) -> NormalizedSide {
    let rest = buckets.iter().find(|b| b.is_rest()).copied();

    let entries = buckets
        .iter()
        .filter(|b| b.give != 0 && b.get != 0 && b.listed_count > 0)
        .map(|b| normalize_bucket(b, side))
        .collect();

    NormalizedSide { entries, rest }
}

fn normalize_bucket(bucket: &ListingBucket, side: Side) -> NormalizedEntry {
    let give = bucket.give as f64;
    let get = bucket.get as f64;
    let listed = bucket.listed_count as f64;
    match side {
        // wanted units per offered unit; quantity converted into wanted units
        Side::Offered => NormalizedEntry {
            ratio: get / give,
            listed_count_in_wanted_units: listed * give / get,
        },
        Side::Wanted => NormalizedEntry {
            ratio: give / get,
            listed_count_in_wanted_units: listed,
        },
    }
}
