use crate::models::post::{ActiveModel, Model};
use chrono::Utc;
use fake::{
    Fake,
    faker::lorem::en::{Paragraph, Sentence},
};
use rand::rngs::StdRng;
use sea_orm::{ActiveModelTrait, DbConn, DbErr, Set};

pub fn make(rng: &mut StdRng, user_id: i64) -> ActiveModel {
    let title: String = Sentence(3..8).fake_with_rng(rng);
    let body: String = Paragraph(2..5).fake_with_rng(rng);
    let now = Utc::now();

    ActiveModel {
        user_id: Set(user_id),
        title: Set(title),
        body: Set(body),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
}

/// Creates `count` posts owned by `user_id`.
pub async fn create_many(
    db: &DbConn,
    rng: &mut StdRng,
    user_id: i64,
    count: usize,
) -> Result<Vec<Model>, DbErr> {
    let mut posts = Vec::with_capacity(count);
    for _ in 0..count {
        posts.push(make(rng, user_id).insert(db).await?);
    }
    Ok(posts)
}
