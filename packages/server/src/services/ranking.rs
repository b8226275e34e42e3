//! Pure ranking rules shared by the stats endpoints.
//!
//! An artist is a *novice* while their tenure is within the threshold and they
//! have fewer than [`VETERAN_EVALUATIONS`] evaluations; otherwise a *veteran*.
//! Both listings put priority-rated artists first, highest rating first.

use std::cmp::Ordering;

use crate::domain::Artist;

/// Sixty days, in seconds.
pub const TENURE_LIMIT_SECS: i64 = 60 * 86_400;
/// Evaluations needed to graduate, and the window averaged for veterans.
pub const VETERAN_EVALUATIONS: u64 = 3;

/// `create_time == 0` marks an unknown creation time, which never expires.
pub fn tenure_exceeded(create_time: i64, now: i64) -> bool {
    create_time != 0 && now - create_time > TENURE_LIMIT_SECS
}

pub fn is_novice(create_time: i64, evaluation_count: u64, now: i64) -> bool {
    !tenure_exceeded(create_time, now) && evaluation_count < VETERAN_EVALUATIONS
}

pub fn is_veteran(create_time: i64, recent_count: u64, now: i64) -> bool {
    tenure_exceeded(create_time, now) || recent_count >= VETERAN_EVALUATIONS
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Mean rounded to two decimals, `0.0` for no scores.
pub fn average_score(scores: &[i32]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let sum: i64 = scores.iter().map(|s| i64::from(*s)).sum();
    round2(sum as f64 / scores.len() as f64)
}

#[derive(Debug, Clone, PartialEq)]
pub struct NoviceEntry {
    pub artist_id: i32,
    pub avatar: String,
    pub nick_name: String,
    pub recommend_word1: Option<String>,
    pub recommend_word2: Option<String>,
    pub recommend_word3: Option<String>,
    pub priority_rating: i32,
    pub create_time: i64,
}

impl From<Artist> for NoviceEntry {
    fn from(a: Artist) -> Self {
        Self {
            priority_rating: a.priority(),
            artist_id: a.id,
            avatar: a.avatar,
            nick_name: a.nick_name,
            recommend_word1: a.recommend_word1,
            recommend_word2: a.recommend_word2,
            recommend_word3: a.recommend_word3,
            create_time: a.create_time,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VeteranEntry {
    pub artist_id: i32,
    pub avatar: String,
    pub nick_name: String,
    pub priority_rating: i32,
    pub score: f64,
    pub has_scores: bool,
}

impl VeteranEntry {
    pub fn new(artist: Artist, recent_scores: &[i32]) -> Self {
        Self {
            priority_rating: artist.priority(),
            artist_id: artist.id,
            avatar: artist.avatar,
            nick_name: artist.nick_name,
            score: average_score(recent_scores),
            has_scores: !recent_scores.is_empty(),
        }
    }
}

/// Stable: equal keys keep their input order.
pub fn sort_novices(entries: &mut [NoviceEntry]) {
    entries.sort_by_key(|e| {
        if e.priority_rating > 0 {
            (0u8, -i64::from(e.priority_rating))
        } else {
            (1u8, e.create_time)
        }
    });
}

/// Stable: priority-rated first by rating, then the rest by score, both
/// descending.
pub fn sort_veterans(entries: &mut [VeteranEntry]) {
    entries.sort_by(|a, b| {
        let (a_rated, b_rated) = (a.priority_rating > 0, b.priority_rating > 0);
        match (a_rated, b_rated) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (true, true) => b.priority_rating.cmp(&a.priority_rating),
            (false, false) => b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal),
        }
    });
}
