use sea_orm::Set;
use sea_orm::entity::prelude::*;

/// Join table between `posts` and `tags`.
///
/// The composite primary key means a post can carry a given tag at most once.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "post_tags")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub post_id: i64,

    #[sea_orm(primary_key, auto_increment = false)]
    pub tag_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::post::Entity",
        from = "Column::PostId",
        to = "super::post::Column::Id",
        on_delete = "Cascade"
    )]
    Post,

    #[sea_orm(
        belongs_to = "super::tag::Entity",
        from = "Column::TagId",
        to = "super::tag::Column::Id",
        on_delete = "Cascade"
    )]
    Tag,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tag.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Links `post_id` to every id in `tag_ids` with one multi-row insert.
    ///
    /// Returns the number of rows written. An empty slice writes nothing.
    pub async fn attach(db: &DbConn, post_id: i64, tag_ids: &[i64]) -> Result<u64, DbErr> {
        if tag_ids.is_empty() {
            return Ok(0);
        }

        let rows = tag_ids.iter().map(|&tag_id| ActiveModel {
            post_id: Set(post_id),
            tag_id: Set(tag_id),
        });

        Entity::insert_many(rows).exec_without_returning(db).await
    }
}
