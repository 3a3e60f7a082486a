#![allow(dead_code)]

pub mod test_with_server;

use cmc_server::database::client::Db;
use cmc_server::entities::designer_entity::{CreateDesigner, DesignerDbService};
use cmc_server::entities::member_entity::{CreateMember, MemberDbService};
use cmc_server::entities::product_entity::{CreateProduct, ProductDbService};
use fake::faker::internet::en::Username;
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::Name;
use fake::Fake;

pub const MEMBER_ID_HEADER: &str = "x-member-id";

pub async fn create_fake_member(db: &Db, id: i64) -> i64 {
    MemberDbService { db }
        .create(
            id,
            CreateMember {
                name: Name().fake(),
                nickname: Username().fake(),
                email: format!("member{id}@cmc.test"),
                profile_img_url: Some(format!("https://cdn.cmc.test/members/{id}.png")),
                introduce: Some(Sentence(3..6).fake()),
            },
        )
        .await
        .unwrap()
}

pub async fn create_fake_designer(db: &Db, id: i64) -> i64 {
    DesignerDbService { db }
        .create(
            id,
            CreateDesigner {
                name: Name().fake(),
                profile_img_url: Some(format!("https://cdn.cmc.test/designers/{id}.png")),
                introduce: Some(Sentence(3..6).fake()),
                categories: vec!["OUTER".to_string()],
            },
        )
        .await
        .unwrap()
}

pub async fn create_fake_product(db: &Db, id: i64, designer_id: i64, name: &str, tag: &str) -> i64 {
    ProductDbService { db }
        .create(
            id,
            CreateProduct {
                designer_id,
                name: name.to_string(),
                tag: tag.to_string(),
                price: 10000 * id,
                thumbnail_urls: vec![
                    format!("https://cdn.cmc.test/products/{id}/thumb-0.png"),
                    format!("https://cdn.cmc.test/products/{id}/thumb-1.png"),
                ],
                description_urls: vec![format!("https://cdn.cmc.test/products/{id}/desc.png")],
            },
        )
        .await
        .unwrap()
}
