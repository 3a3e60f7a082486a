mod helpers;

use cmc_server::models::response::BaseResponse;
use cmc_server::models::view::member::{MemberDetailView, MemberInfoView};
use helpers::{create_fake_member, MEMBER_ID_HEADER};
use serde_json::Value;

test_with_server!(member_info_is_public, |server, ctx_state, config| {
    create_fake_member(&ctx_state.db.client, 42).await;

    let response = server.get("/api/v1/members/42/info").await;
    response.assert_status_ok();
    let info = response.json::<BaseResponse<MemberInfoView>>().result.unwrap();
    assert_eq!(info.id, 42);
    assert_eq!(
        info.profile_img_url.as_deref(),
        Some("https://cdn.cmc.test/members/42.png")
    );
});

test_with_server!(member_detail_uses_request_identity, |server, ctx_state, config| {
    create_fake_member(&ctx_state.db.client, 42).await;

    let response = server
        .get("/api/v1/members/detail")
        .add_header(MEMBER_ID_HEADER, "42")
        .await;
    response.assert_status_ok();
    let detail = response
        .json::<BaseResponse<MemberDetailView>>()
        .result
        .unwrap();
    assert_eq!(detail.email, "member42@cmc.test");
});

test_with_server!(member_detail_requires_identity, |server, ctx_state, config| {
    let response = server.get("/api/v1/members/detail").await;
    response.assert_status_unauthorized();
    assert_eq!(response.json::<BaseResponse<Value>>().code, 4000);
});

test_with_server!(unknown_member_info_is_not_found, |server, ctx_state, config| {
    let response = server.get("/api/v1/members/999/info").await;
    response.assert_status_not_found();
    let body = response.json::<BaseResponse<Value>>();
    assert_eq!(body.code, 2001);
    assert_eq!(
        body.result.unwrap()["error"],
        "Record id= member:999 not found"
    );
});

test_with_server!(check_liked_by_unknown_member_is_not_found, |server, ctx_state, config| {
    let response = server
        .get("/api/v1/members/likes/designer/7")
        .add_header(MEMBER_ID_HEADER, "999")
        .await;
    response.assert_status_not_found();
    assert_eq!(response.json::<BaseResponse<Value>>().code, 2001);
});

test_with_server!(health_check_reports_version, |server, ctx_state, config| {
    let response = server.get("/hc").await;
    response.assert_status_ok();
    assert!(response.text().starts_with('v'));
});
