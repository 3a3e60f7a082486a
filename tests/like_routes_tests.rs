mod helpers;

use cmc_server::models::response::BaseResponse;
use cmc_server::models::view::designer::LikedDesignerView;
use cmc_server::models::view::like::{LikeExistenceResponse, LikeResponse};
use cmc_server::models::view::product::LikedProductView;
use helpers::{create_fake_designer, create_fake_member, create_fake_product, MEMBER_ID_HEADER};
use serde_json::Value;

test_with_server!(like_designer_by_query_param, |server, ctx_state, config| {
    let db = &ctx_state.db.client;
    create_fake_member(db, 42).await;
    create_fake_designer(db, 7).await;

    let response = server
        .post("/api/v1/members/likes/designer")
        .add_query_param("designer-id", 7)
        .add_header(MEMBER_ID_HEADER, "42")
        .await;
    response.assert_status_ok();
    let body = response.json::<BaseResponse<LikeResponse>>();
    assert!(body.is_success);
    assert_eq!(body.code, 1000);
    let result = body.result.unwrap();
    assert!(result.liked);
    assert_eq!(result.like_count, 1);

    let response = server
        .get("/api/v1/members/likes/designer/7")
        .add_header(MEMBER_ID_HEADER, "42")
        .await;
    response.assert_status_ok();
    assert!(response
        .json::<BaseResponse<LikeExistenceResponse>>()
        .result
        .unwrap()
        .liked);

    let response = server
        .post("/api/v1/members/likes/designer")
        .add_query_param("designer-id", 7)
        .add_header(MEMBER_ID_HEADER, "42")
        .await;
    response.assert_status_ok();
    let result = response.json::<BaseResponse<LikeResponse>>().result.unwrap();
    assert!(!result.liked);
    assert_eq!(result.like_count, 0);
});

test_with_server!(like_product_by_query_param, |server, ctx_state, config| {
    let db = &ctx_state.db.client;
    create_fake_member(db, 42).await;
    create_fake_designer(db, 3).await;
    create_fake_product(db, 11, 3, "LINEN SHIRT", "TOP").await;

    let response = server
        .post("/api/v1/members/likes/product")
        .add_query_param("product-id", 11)
        .add_header(MEMBER_ID_HEADER, "42")
        .await;
    response.assert_status_ok();
    let result = response.json::<BaseResponse<LikeResponse>>().result.unwrap();
    assert!(result.liked);
    assert_eq!(result.like_count, 1);

    let response = server
        .get("/api/v1/members/likes/product/11")
        .add_header(MEMBER_ID_HEADER, "42")
        .await;
    assert!(response
        .json::<BaseResponse<LikeExistenceResponse>>()
        .result
        .unwrap()
        .liked);
});

test_with_server!(generic_like_route_dispatches_by_tag, |server, ctx_state, config| {
    let db = &ctx_state.db.client;
    create_fake_member(db, 42).await;
    create_fake_designer(db, 7).await;

    let response = server
        .post("/api/v1/likes/Designer/7")
        .add_header(MEMBER_ID_HEADER, "42")
        .await;
    response.assert_status_ok();
    let result = response.json::<BaseResponse<LikeResponse>>().result.unwrap();
    assert!(result.liked);
    assert_eq!(result.like_count, 1);
});

test_with_server!(unknown_like_target_is_rejected, |server, ctx_state, config| {
    create_fake_member(&ctx_state.db.client, 42).await;

    let response = server
        .post("/api/v1/likes/unknown/7")
        .add_header(MEMBER_ID_HEADER, "42")
        .await;
    response.assert_status_bad_request();
    let body = response.json::<BaseResponse<Value>>();
    assert!(!body.is_success);
    assert_eq!(body.code, 1002);
});

test_with_server!(like_without_member_header_is_unauthorized, |server, ctx_state, config| {
    create_fake_designer(&ctx_state.db.client, 7).await;

    let response = server
        .post("/api/v1/members/likes/designer")
        .add_query_param("designer-id", 7)
        .await;
    response.assert_status_unauthorized();
    assert_eq!(response.json::<BaseResponse<Value>>().code, 4000);
});

test_with_server!(like_by_unknown_member_is_not_found, |server, ctx_state, config| {
    create_fake_designer(&ctx_state.db.client, 7).await;

    let response = server
        .post("/api/v1/members/likes/designer")
        .add_query_param("designer-id", 7)
        .add_header(MEMBER_ID_HEADER, "999")
        .await;
    response.assert_status_not_found();
    let body = response.json::<BaseResponse<Value>>();
    assert_eq!(body.code, 2001);
    assert!(body.result.unwrap()["req_id"].is_string());
});

test_with_server!(like_of_unknown_designer_is_not_found, |server, ctx_state, config| {
    create_fake_member(&ctx_state.db.client, 42).await;

    let response = server
        .post("/api/v1/members/likes/designer")
        .add_query_param("designer-id", 404)
        .add_header(MEMBER_ID_HEADER, "42")
        .await;
    response.assert_status_not_found();
    assert_eq!(response.json::<BaseResponse<Value>>().code, 3001);
});

test_with_server!(liked_designers_are_listed_newest_first, |server, ctx_state, config| {
    let db = &ctx_state.db.client;
    create_fake_member(db, 42).await;
    create_fake_designer(db, 1).await;
    create_fake_designer(db, 2).await;
    create_fake_designer(db, 3).await;

    for designer_id in [1, 2, 3] {
        ctx_state
            .likes
            .handle(42, designer_id, "designer")
            .await
            .unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }
    // unliked designers drop out of the list
    ctx_state.likes.handle(42, 2, "designer").await.unwrap();

    let response = server
        .get("/api/v1/members/likes/designer")
        .add_header(MEMBER_ID_HEADER, "42")
        .await;
    response.assert_status_ok();
    let designers = response
        .json::<BaseResponse<Vec<LikedDesignerView>>>()
        .result
        .unwrap();
    let ids: Vec<i64> = designers.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![3, 1]);
    assert!(designers.iter().all(|d| d.likes_nr == 1));
});

test_with_server!(liked_products_carry_designer_info, |server, ctx_state, config| {
    let db = &ctx_state.db.client;
    create_fake_member(db, 42).await;
    create_fake_designer(db, 3).await;
    create_fake_product(db, 11, 3, "LINEN SHIRT", "TOP").await;
    ctx_state.likes.handle(42, 11, "product").await.unwrap();

    let response = server
        .get("/api/v1/members/likes/product")
        .add_header(MEMBER_ID_HEADER, "42")
        .await;
    response.assert_status_ok();
    let products = response
        .json::<BaseResponse<Vec<LikedProductView>>>()
        .result
        .unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, 11);
    assert_eq!(products[0].designer_id, 3);
    assert_eq!(products[0].likes_nr, 1);
});

test_with_server!(like_without_target_id_answers_with_envelope, |server, ctx_state, config| {
    create_fake_member(&ctx_state.db.client, 42).await;

    let response = server
        .post("/api/v1/members/likes/designer")
        .add_header(MEMBER_ID_HEADER, "42")
        .await;
    response.assert_status_bad_request();
    let body = response.json::<BaseResponse<Value>>();
    assert!(!body.is_success);
    assert_eq!(body.code, 1001);
    assert!(body.result.unwrap()["req_id"].is_string());
});

test_with_server!(malformed_like_target_id_answers_with_envelope, |server, ctx_state, config| {
    let response = server
        .post("/api/v1/likes/designer/x")
        .add_header(MEMBER_ID_HEADER, "42")
        .await;
    response.assert_status_bad_request();
    let body = response.json::<BaseResponse<Value>>();
    assert!(!body.is_success);
    assert_eq!(body.code, 1001);
});
