use crate::models::tag::{ActiveModel, Model};
use chrono::Utc;
use fake::{Fake, faker::lorem::en::Word};
use rand::rngs::StdRng;
use sea_orm::{ActiveModelTrait, DbConn, DbErr, Set};

pub fn make(rng: &mut StdRng) -> ActiveModel {
    let name: String = Word().fake_with_rng(rng);
    let now = Utc::now();

    ActiveModel {
        name: Set(name),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
}

pub async fn create_many(db: &DbConn, rng: &mut StdRng, count: usize) -> Result<Vec<Model>, DbErr> {
    let mut tags = Vec::with_capacity(count);
    for _ in 0..count {
        tags.push(make(rng).insert(db).await?);
    }
    Ok(tags)
}
