use crate::error::SeedError;
use crate::seed::{SeedSummary, Seeder};
use async_trait::async_trait;
use db::factories::{post_factory, tag_factory, user_factory};
use db::models::{post_tag, tag};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use sea_orm::DatabaseConnection;
use std::ops::RangeInclusive;

pub const TAG_COUNT: usize = 10;
pub const USER_COUNT: usize = 30;
pub const POSTS_PER_USER: RangeInclusive<usize> = 1..=4;
pub const TAGS_PER_POST: usize = 2;

/// Seeds a shared pool of tags, then users, each with a handful of tagged posts.
///
/// Every post gets exactly [`TAGS_PER_POST`] distinct tags from the pool.
#[derive(Debug, Default, Clone)]
pub struct UserSeeder {
    rng_seed: Option<u64>,
}

impl UserSeeder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every draw (post counts, tag picks, factory fields) reproducible.
    pub fn with_rng_seed(seed: u64) -> Self {
        Self { rng_seed: Some(seed) }
    }

    pub fn from_config() -> Self {
        Self {
            rng_seed: util::config::rng_seed(),
        }
    }

    fn rng(&self) -> StdRng {
        match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

/// Picks `count` distinct tag ids, uniformly and without replacement.
pub fn pick_tags(rng: &mut StdRng, tags: &[tag::Model], count: usize) -> Result<Vec<i64>, SeedError> {
    if tags.len() < count {
        return Err(SeedError::NotEnoughTags {
            available: tags.len(),
            needed: count,
        });
    }

    Ok(tags.choose_multiple(rng, count).map(|t| t.id).collect())
}

#[async_trait]
impl Seeder for UserSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<SeedSummary, SeedError> {
        let mut rng = self.rng();
        let mut summary = SeedSummary::default();

        let tags = tag_factory::create_many(db, &mut rng, TAG_COUNT).await?;
        summary.tags = tags.len();
        log::debug!("Created {} tags", tags.len());

        let users = user_factory::create_many(db, &mut rng, USER_COUNT).await?;
        summary.users = users.len();
        log::debug!("Created {} users", users.len());

        for user in &users {
            let post_count = rng.random_range(POSTS_PER_USER);
            let posts = post_factory::create_many(db, &mut rng, user.id, post_count).await?;

            for post in &posts {
                let tag_ids = pick_tags(&mut rng, &tags, TAGS_PER_POST)?;
                summary.post_tags += post_tag::Model::attach(db, post.id, &tag_ids).await? as usize;
            }

            summary.posts += posts.len();
            log::debug!("User {} got {} posts", user.username, posts.len());
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use db::models::{Post, PostTag, Tag, User, post};
    use db::test_utils::setup_test_db;
    use sea_orm::{ColumnTrait, Database, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
    use std::collections::HashSet;

    async fn link_pairs(db: &DatabaseConnection) -> Vec<(i64, i64)> {
        PostTag::find()
            .order_by_asc(post_tag::Column::PostId)
            .order_by_asc(post_tag::Column::TagId)
            .all(db)
            .await
            .unwrap()
            .into_iter()
            .map(|l| (l.post_id, l.tag_id))
            .collect()
    }

    #[tokio::test]
    async fn seeds_fixed_tag_and_user_counts() {
        let db = setup_test_db().await;

        let summary = UserSeeder::new().seed(&db).await.unwrap();

        assert_eq!(summary.tags, TAG_COUNT);
        assert_eq!(summary.users, USER_COUNT);
        assert_eq!(Tag::find().count(&db).await.unwrap(), TAG_COUNT as u64);
        assert_eq!(User::find().count(&db).await.unwrap(), USER_COUNT as u64);
    }

    #[tokio::test]
    async fn every_user_owns_one_to_four_posts() {
        let db = setup_test_db().await;

        let summary = UserSeeder::new().seed(&db).await.unwrap();

        let mut total = 0;
        for user in User::find().all(&db).await.unwrap() {
            let owned = Post::find()
                .filter(post::Column::UserId.eq(user.id))
                .count(&db)
                .await
                .unwrap() as usize;
            assert!(POSTS_PER_USER.contains(&owned), "user {} owns {owned} posts", user.id);
            total += owned;
        }

        assert_eq!(summary.posts, total);
        assert!((30..=120).contains(&total));
        assert_eq!(Post::find().count(&db).await.unwrap() as usize, total);
    }

    #[tokio::test]
    async fn every_post_has_two_distinct_seeded_tags() {
        let db = setup_test_db().await;

        let summary = UserSeeder::new().seed(&db).await.unwrap();

        let seeded: HashSet<i64> = Tag::find().all(&db).await.unwrap().iter().map(|t| t.id).collect();
        for p in Post::find().all(&db).await.unwrap() {
            let tags = p.tags(&db).await.unwrap();
            let ids: HashSet<i64> = tags.iter().map(|t| t.id).collect();
            assert_eq!(tags.len(), TAGS_PER_POST);
            assert_eq!(ids.len(), TAGS_PER_POST);
            assert!(ids.is_subset(&seeded));
        }

        assert_eq!(summary.post_tags, TAGS_PER_POST * summary.posts);
        assert_eq!(
            PostTag::find().count(&db).await.unwrap() as usize,
            summary.post_tags
        );
    }

    #[tokio::test]
    async fn same_rng_seed_reproduces_run() {
        let first = setup_test_db().await;
        let second = setup_test_db().await;

        let a = UserSeeder::with_rng_seed(2024).seed(&first).await.unwrap();
        let b = UserSeeder::with_rng_seed(2024).seed(&second).await.unwrap();

        assert_eq!(a, b);
        assert_eq!(link_pairs(&first).await, link_pairs(&second).await);

        let titles = |posts: Vec<post::Model>| posts.into_iter().map(|p| p.title).collect::<Vec<_>>();
        assert_eq!(
            titles(Post::find().order_by_asc(post::Column::Id).all(&first).await.unwrap()),
            titles(Post::find().order_by_asc(post::Column::Id).all(&second).await.unwrap()),
        );
    }

    #[tokio::test]
    async fn missing_schema_is_a_persistence_failure() {
        let db = Database::connect("sqlite::memory:").await.unwrap();

        let err = UserSeeder::new().seed(&db).await.unwrap_err();

        assert!(matches!(err, SeedError::Persistence(_)));
    }

    #[test]
    fn pick_tags_never_repeats_a_tag() {
        let now = chrono::Utc::now();
        let tags: Vec<tag::Model> = (1..=TAG_COUNT as i64)
            .map(|id| tag::Model {
                id,
                name: format!("tag{id}"),
                created_at: now,
                updated_at: now,
            })
            .collect();
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..500 {
            let picked = pick_tags(&mut rng, &tags, TAGS_PER_POST).unwrap();
            assert_eq!(picked.len(), 2);
            assert_ne!(picked[0], picked[1]);
            assert!(picked.iter().all(|id| (1..=10).contains(id)));
        }
    }

    #[test]
    fn pick_tags_needs_enough_tags() {
        let now = chrono::Utc::now();
        let only = vec![tag::Model {
            id: 1,
            name: "solo".into(),
            created_at: now,
            updated_at: now,
        }];
        let mut rng = StdRng::seed_from_u64(0);

        let err = pick_tags(&mut rng, &only, TAGS_PER_POST).unwrap_err();

        assert!(matches!(err, SeedError::NotEnoughTags { available: 1, needed: 2 }));
    }
}
