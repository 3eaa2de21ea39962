//! HTTP-level CRUD tests for students, companies, interviews, placements
//! and interview assignments, including owner isolation.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, company_body, create_id, delete_auth, get, get_auth, post_json_auth,
    put_json_auth, signup_token, student_body,
};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Students
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn student_crud_round_trip(pool: PgPool) {
    let token = signup_token(&pool, "tpo@college.edu").await;

    let app = common::build_test_app(pool.clone());
    let response =
        post_json_auth(app, "/api/v1/students", student_body("Asha", json!(8.75)), &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["cgpa"].as_f64(), Some(8.75));

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/v1/students/{id}"),
        json!({ "department": "Electronics" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["department"], "Electronics");
    assert_eq!(updated["name"], "Asha");

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/students", &token).await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/students/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get_auth(app, &format!("/api/v1/students/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn cgpa_upper_bound_is_inclusive(pool: PgPool) {
    let token = signup_token(&pool, "tpo@college.edu").await;

    let app = common::build_test_app(pool.clone());
    let response =
        post_json_auth(app, "/api/v1/students", student_body("Top", json!(10.00)), &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let fetched = body_json(get_auth(app, &format!("/api/v1/students/{id}"), &token).await).await;
    assert_eq!(fetched["cgpa"].as_f64(), Some(10.0));

    let app = common::build_test_app(pool.clone());
    let response =
        post_json_auth(app, "/api/v1/students", student_body("Over", json!(10.01)), &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "CGPA must be between 0 and 10");

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/v1/students/{id}"),
        json!({ "cgpa": -0.5 }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Nothing was written by the rejected requests.
    let app = common::build_test_app(pool);
    let list = body_json(get_auth(app, "/api/v1/students", &token).await).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["cgpa"].as_f64(), Some(10.0));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_field_is_bad_request(pool: PgPool) {
    let token = signup_token(&pool, "tpo@college.edu").await;

    let app = common::build_test_app(pool);
    let response =
        post_json_auth(app, "/api/v1/students", json!({ "name": "Partial" }), &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn data_routes_require_a_token(pool: PgPool) {
    for uri in [
        "/api/v1/students",
        "/api/v1/companies",
        "/api/v1/interviews",
        "/api/v1/placements",
        "/api/v1/stats",
    ] {
        let app = common::build_test_app(pool.clone());
        let response = get(app, uri).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "GET {uri}");
    }
}

// ---------------------------------------------------------------------------
// Owner isolation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn other_owners_rows_are_not_found(pool: PgPool) {
    let alice = signup_token(&pool, "alice@college.edu").await;
    let bob = signup_token(&pool, "bob@college.edu").await;

    let company_id = create_id(&pool, "/api/v1/companies", company_body("Acme"), &alice).await;
    let uri = format!("/api/v1/companies/{company_id}");

    let app = common::build_test_app(pool.clone());
    assert_eq!(get_auth(app, &uri, &bob).await.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(app, &uri, json!({ "name": "Hijacked" }), &bob).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool.clone());
    assert_eq!(delete_auth(app, &uri, &bob).await.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool.clone());
    let list = body_json(get_auth(app, "/api/v1/companies", &bob).await).await;
    assert!(list.as_array().unwrap().is_empty());

    let app = common::build_test_app(pool);
    let company = body_json(get_auth(app, &uri, &alice).await).await;
    assert_eq!(company["name"], "Acme");
}

// ---------------------------------------------------------------------------
// Interviews and assignments
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn interview_lists_company_name_and_rejects_unknown_type(pool: PgPool) {
    let token = signup_token(&pool, "tpo@college.edu").await;
    let company_id = create_id(&pool, "/api/v1/companies", company_body("Initech"), &token).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/interviews",
        json!({
            "company_id": company_id,
            "interview_date": "2030-05-01T10:00:00Z",
            "interview_type": "Group Discussion",
            "location": "Seminar Hall",
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["interview_type"], "Group Discussion");

    let app = common::build_test_app(pool.clone());
    let list = body_json(get_auth(app, "/api/v1/interviews", &token).await).await;
    assert_eq!(list[0]["company_name"], "Initech");
    assert!(list[0]["notes"].is_null());

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/interviews",
        json!({
            "company_id": company_id,
            "interview_date": "2030-05-01T10:00:00Z",
            "interview_type": "Coding Marathon",
            "location": "Lab 3",
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn interview_assignment_flow(pool: PgPool) {
    let token = signup_token(&pool, "tpo@college.edu").await;
    let company_id = create_id(&pool, "/api/v1/companies", company_body("Globex"), &token).await;
    let asha = create_id(&pool, "/api/v1/students", student_body("Asha", json!(9.1)), &token).await;
    let ravi = create_id(&pool, "/api/v1/students", student_body("Ravi", json!(7.4)), &token).await;
    let interview_id = create_id(
        &pool,
        "/api/v1/interviews",
        json!({
            "company_id": company_id,
            "interview_date": "2030-01-15T09:30:00Z",
            "interview_type": "Technical",
            "location": "Room 101",
        }),
        &token,
    )
    .await;
    let students_uri = format!("/api/v1/interviews/{interview_id}/students");

    let app = common::build_test_app(pool.clone());
    let response =
        post_json_auth(app, &students_uri, json!({ "student_id": asha }), &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let assignment = body_json(response).await;
    assert_eq!(assignment["status"], "Scheduled");

    // Same student twice.
    let app = common::build_test_app(pool.clone());
    let response =
        post_json_auth(app, &students_uri, json!({ "student_id": asha }), &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Student already added to this interview"
    );

    // Replace the set: Asha out, Ravi in.
    let app = common::build_test_app(pool.clone());
    let response =
        put_json_auth(app, &students_uri, json!({ "student_ids": [ravi] }), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let synced = body_json(response).await;
    let synced = synced.as_array().unwrap();
    assert_eq!(synced.len(), 1);
    assert_eq!(synced[0]["student_id"], ravi);
    assert_eq!(synced[0]["student_name"], "Ravi");

    let assignment_id = synced[0]["id"].as_i64().unwrap();
    let app = common::build_test_app(pool.clone());
    let response =
        delete_auth(app, &format!("{students_uri}/{assignment_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let list = body_json(get_auth(app, &students_uri, &token).await).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn cannot_assign_another_owners_student(pool: PgPool) {
    let alice = signup_token(&pool, "alice@college.edu").await;
    let bob = signup_token(&pool, "bob@college.edu").await;

    let company_id = create_id(&pool, "/api/v1/companies", company_body("Acme"), &alice).await;
    let interview_id = create_id(
        &pool,
        "/api/v1/interviews",
        json!({
            "company_id": company_id,
            "interview_date": "2030-02-01T09:00:00Z",
            "interview_type": "HR",
            "location": "Online",
        }),
        &alice,
    )
    .await;
    let bobs_student =
        create_id(&pool, "/api/v1/students", student_body("Meera", json!(8.0)), &bob).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &format!("/api/v1/interviews/{interview_id}/students"),
        json!({ "student_id": bobs_student }),
        &alice,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Bob cannot see Alice's interview either.
    let app = common::build_test_app(pool);
    let response = get_auth(
        app,
        &format!("/api/v1/interviews/{interview_id}/students"),
        &bob,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Placements
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn placement_defaults_and_validation(pool: PgPool) {
    let token = signup_token(&pool, "tpo@college.edu").await;
    let company_id = create_id(&pool, "/api/v1/companies", company_body("Umbrella"), &token).await;
    let student_id =
        create_id(&pool, "/api/v1/students", student_body("Kiran", json!(8.2)), &token).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/placements",
        json!({
            "student_id": student_id,
            "company_id": company_id,
            "position": "Graduate Engineer",
            "package": 12.5,
            "placement_date": "2026-03-01",
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let placement = body_json(response).await;
    assert_eq!(placement["status"], "Confirmed");
    assert_eq!(placement["package"].as_f64(), Some(12.5));

    let app = common::build_test_app(pool.clone());
    let list = body_json(get_auth(app, "/api/v1/placements", &token).await).await;
    assert_eq!(list[0]["student_name"], "Kiran");
    assert_eq!(list[0]["company_name"], "Umbrella");

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/placements",
        json!({
            "student_id": student_id,
            "company_id": company_id,
            "position": "Intern",
            "package": 0,
            "placement_date": "2026-03-01",
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Package must be greater than 0");

    // A reference to a student that does not exist.
    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/placements",
        json!({
            "student_id": 999_999,
            "company_id": company_id,
            "position": "Analyst",
            "package": 6,
            "placement_date": "2026-04-01",
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_a_company_cascades_to_placements(pool: PgPool) {
    let token = signup_token(&pool, "tpo@college.edu").await;
    let company_id = create_id(&pool, "/api/v1/companies", company_body("Hooli"), &token).await;
    let student_id =
        create_id(&pool, "/api/v1/students", student_body("Dev", json!(7.0)), &token).await;
    create_id(
        &pool,
        "/api/v1/placements",
        json!({
            "student_id": student_id,
            "company_id": company_id,
            "position": "SDE",
            "package": 20,
            "placement_date": "2026-01-10",
        }),
        &token,
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/companies/{company_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let list = body_json(get_auth(app, "/api/v1/placements", &token).await).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn package_too_large_for_the_column_is_rejected(pool: PgPool) {
    let token = signup_token(&pool, "tpo@college.edu").await;
    let company_id = create_id(&pool, "/api/v1/companies", company_body("Massive"), &token).await;
    let student_id =
        create_id(&pool, "/api/v1/students", student_body("Lata", json!(8.0)), &token).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/placements",
        json!({
            "student_id": student_id,
            "company_id": company_id,
            "position": "Chief Everything Officer",
            "package": 100000000000.0,
            "placement_date": "2026-05-01",
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let app = common::build_test_app(pool);
    let list = body_json(get_auth(app, "/api/v1/placements", &token).await).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn extra_decimal_places_are_rejected_not_rounded(pool: PgPool) {
    let token = signup_token(&pool, "tpo@college.edu").await;

    for cgpa in [json!(7.855), json!(9.999)] {
        let app = common::build_test_app(pool.clone());
        let response =
            post_json_auth(app, "/api/v1/students", student_body("Rounded", cgpa), &token).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["error"],
            "CGPA must have at most 2 decimal places"
        );
    }

    let student_id =
        create_id(&pool, "/api/v1/students", student_body("Exact", json!(7.85)), &token).await;
    let company_id = create_id(&pool, "/api/v1/companies", company_body("Precise"), &token).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/placements",
        json!({
            "student_id": student_id,
            "company_id": company_id,
            "position": "Analyst",
            "package": 12.345,
            "placement_date": "2026-05-01",
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let list = body_json(get_auth(app, "/api/v1/students", &token).await).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["cgpa"].as_f64(), Some(7.85));
}
