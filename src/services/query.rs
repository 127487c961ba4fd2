//! Translates validated browse requests into provider-agnostic discover queries.
//!
//! Movie browsing hides animated titles unless animation is requested
//! explicitly; the `animation` category always forces the Animation genre in.

use crate::models::{BrowseCategory, ContentType, DiscoverQuery, SORT_POPULARITY_DESC};
use crate::services::genres::ANIMATION_GENRE_ID;
use crate::services::moods;

/// Query for a (category, genre) pair. The genre must already be validated
/// against `category.content_type()`.
pub fn genre_query(category: BrowseCategory, genre_id: u32, page: u32) -> DiscoverQuery {
    let (resource, include, exclude) = match category {
        BrowseCategory::Tv => (ContentType::Tv, vec![genre_id], vec![]),
        BrowseCategory::Movie if genre_id == ANIMATION_GENRE_ID => {
            (ContentType::Movie, vec![genre_id], vec![])
        }
        BrowseCategory::Movie => (
            ContentType::Movie,
            vec![genre_id],
            vec![ANIMATION_GENRE_ID],
        ),
        BrowseCategory::Animation => {
            let mut include = vec![ANIMATION_GENRE_ID];
            if genre_id != ANIMATION_GENRE_ID {
                include.push(genre_id);
            }
            (ContentType::Movie, include, vec![])
        }
    };

    DiscoverQuery {
        resource,
        include_genre_ids: include,
        exclude_genre_ids: exclude,
        requested_page: page,
        sort_by: SORT_POPULARITY_DESC,
    }
}

/// Query for a mood; absent when the mood is unknown
pub fn mood_query(mood: &str, page: u32) -> Option<DiscoverQuery> {
    let genre_ids = moods::resolve_genre_ids(mood)?;

    let mut include: Vec<u32> = Vec::with_capacity(genre_ids.len());
    for id in genre_ids {
        if !include.contains(id) {
            include.push(*id);
        }
    }

    Some(DiscoverQuery {
        resource: ContentType::Movie,
        include_genre_ids: include,
        exclude_genre_ids: vec![],
        requested_page: page,
        sort_by: SORT_POPULARITY_DESC,
    })
}

/// Provider encoding of a genre filter: comma-joined ids
pub fn join_genre_ids(ids: &[u32]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tv_query_has_no_exclusion() {
        let query = genre_query(BrowseCategory::Tv, 10759, 1);
        assert_eq!(query.resource, ContentType::Tv);
        assert_eq!(query.include_genre_ids, vec![10759]);
        assert!(query.exclude_genre_ids.is_empty());
        assert_eq!(query.sort_by, "popularity.desc");
    }

    #[test]
    fn test_movie_query_excludes_animation() {
        let query = genre_query(BrowseCategory::Movie, 28, 1);
        assert_eq!(query.resource, ContentType::Movie);
        assert_eq!(query.include_genre_ids, vec![28]);
        assert_eq!(query.exclude_genre_ids, vec![ANIMATION_GENRE_ID]);
    }

    #[test]
    fn test_movie_animation_genre_is_not_self_excluded() {
        let query = genre_query(BrowseCategory::Movie, ANIMATION_GENRE_ID, 1);
        assert_eq!(query.include_genre_ids, vec![ANIMATION_GENRE_ID]);
        assert!(!query.exclude_genre_ids.contains(&ANIMATION_GENRE_ID));
    }

    #[test]
    fn test_animation_category_forces_animation_genre() {
        let query = genre_query(BrowseCategory::Animation, 35, 2);
        assert_eq!(query.resource, ContentType::Movie);
        assert_eq!(query.include_genre_ids, vec![ANIMATION_GENRE_ID, 35]);
        assert!(query.exclude_genre_ids.is_empty());
        assert_eq!(query.requested_page, 2);
    }

    #[test]
    fn test_animation_category_does_not_duplicate_animation() {
        let query = genre_query(BrowseCategory::Animation, ANIMATION_GENRE_ID, 1);
        assert_eq!(query.include_genre_ids, vec![ANIMATION_GENRE_ID]);
    }

    #[test]
    fn test_mood_query() {
        let query = mood_query("ExcitedAction", 1).unwrap();
        assert_eq!(query.resource, ContentType::Movie);
        assert_eq!(query.include_genre_ids, vec![28, 12, 878]);
        assert!(query.exclude_genre_ids.is_empty());
        assert_eq!(join_genre_ids(&query.include_genre_ids), "28,12,878");
    }

    #[test]
    fn test_unknown_mood_has_no_query() {
        assert_eq!(mood_query("Sad", 1), None);
    }

    #[test]
    fn test_translation_is_idempotent() {
        assert_eq!(
            genre_query(BrowseCategory::Movie, 18, 3),
            genre_query(BrowseCategory::Movie, 18, 3)
        );
        assert_eq!(mood_query("calmcozy", 1), mood_query("CalmCozy", 1));
    }
}
