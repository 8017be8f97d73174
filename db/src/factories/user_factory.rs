use crate::models::user::{ActiveModel, Model};
use chrono::Utc;
use fake::{
    Fake,
    faker::{internet::en::Username, name::en::Name},
};
use rand::{Rng, rngs::StdRng};
use sea_orm::{ActiveModelTrait, DbConn, DbErr, Set};

/// Builds an unsaved user. `seq` is folded into username and email so a batch
/// never collides on the unique columns.
pub fn make(rng: &mut StdRng, seq: usize) -> ActiveModel {
    let handle: String = Username().fake_with_rng(rng);
    let username = format!("{}_{:03}", handle.to_lowercase(), seq);
    let email = format!("{username}@example.com");
    let display_name: String = Name().fake_with_rng(rng);
    let now = Utc::now();

    ActiveModel {
        username: Set(username),
        email: Set(email),
        display_name: Set(display_name),
        admin: Set(rng.random_bool(0.1)),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
}

pub async fn create_many(db: &DbConn, rng: &mut StdRng, count: usize) -> Result<Vec<Model>, DbErr> {
    let mut users = Vec::with_capacity(count);
    for seq in 0..count {
        users.push(make(rng, seq).insert(db).await?);
    }
    Ok(users)
}
