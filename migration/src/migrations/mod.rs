pub mod m202510180001_create_users;
pub mod m202510180002_create_tags;
pub mod m202510180003_create_posts;
pub mod m202510180004_create_post_tags;
