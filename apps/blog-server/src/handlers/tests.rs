use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use serde_json::{Value, json};

use super::{configure_routes, not_found};
use crate::middleware::cors::api_cors;
use crate::state::AppState;

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .wrap(api_cors())
                .app_data(web::Data::new($state.clone()))
                .configure(configure_routes)
                .default_service(web::route().to(not_found)),
        )
        .await
    };
}

macro_rules! send {
    ($app:expr, $req:expr) => {{
        let resp = test::call_service(&$app, $req.to_request()).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }};
}

fn id_of(body: &Value) -> String {
    body["id"].as_str().unwrap().to_string()
}

#[actix_web::test]
async fn test_index_and_health() {
    let state = AppState::new();
    let app = test_app!(state);

    let (status, body) = send!(app, test::TestRequest::get().uri("/"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Blog API is running");
    assert_eq!(body["endpoints"]["authors"], "/api/authors");
    assert_eq!(body["endpoints"]["posts"], "/api/posts");

    let (status, body) = send!(app, test::TestRequest::get().uri("/api/health"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[actix_web::test]
async fn test_author_crud_round_trip() {
    let state = AppState::new();
    let app = test_app!(state);

    let (status, body) = send!(app, test::TestRequest::get().uri("/api/authors"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, created) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/authors")
            .set_json(json!({"name": "Jane", "email": "jane@example.com"}))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Jane");
    assert_eq!(created["email"], "jane@example.com");
    assert_eq!(created["bio"], "");
    let id = id_of(&created);

    let (status, fetched) = send!(
        app,
        test::TestRequest::get().uri(&format!("/api/authors/{id}"))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, updated) = send!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/authors/{id}"))
            .set_json(json!({"name": "Janet", "email": "janet@example.com", "bio": "Editor"}))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], id.as_str());
    assert_eq!(updated["bio"], "Editor");

    let (status, body) = send!(
        app,
        test::TestRequest::delete().uri(&format!("/api/authors/{id}"))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));

    let (status, body) = send!(
        app,
        test::TestRequest::get().uri(&format!("/api/authors/{id}"))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Author not found"}));
}

#[actix_web::test]
async fn test_author_validation_errors() {
    let state = AppState::new();
    let app = test_app!(state);

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/authors")
            .set_json(json!({"name": "Jane"}))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Name and email are required"}));

    let (status, _) = send!(
        app,
        test::TestRequest::put()
            .uri("/api/authors/missing")
            .set_json(json!({"name": "Jane", "email": "jane@example.com"}))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send!(
        app,
        test::TestRequest::delete().uri("/api/authors/missing")
    );
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send!(app, test::TestRequest::get().uri("/api/authors"));
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn test_post_lifecycle_and_cascade() {
    let state = AppState::new();
    let app = test_app!(state);

    let (_, jane) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/authors")
            .set_json(json!({"name": "Jane", "email": "jane@example.com"}))
    );
    let (_, john) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/authors")
            .set_json(json!({"name": "John", "email": "john@example.com"}))
    );
    let (jane, john) = (id_of(&jane), id_of(&john));

    let (status, p1) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({"title": "p1", "content": "c", "authorId": jane}))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(p1["authorId"], jane.as_str());
    assert_eq!(p1["createdAt"], p1["updatedAt"]);

    send!(
        app,
        test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({"title": "p2", "content": "c", "authorId": jane}))
    );
    let (_, p3) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({"title": "p3", "content": "c", "authorId": john}))
    );

    let (status, body) = send!(
        app,
        test::TestRequest::get().uri(&format!("/api/authors/{jane}/posts"))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let p1_id = id_of(&p1);
    let (status, updated) = send!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/posts/{p1_id}"))
            .set_json(json!({"title": "p1b", "content": "c2", "authorId": jane}))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["createdAt"], p1["createdAt"]);
    assert_ne!(updated["updatedAt"], p1["updatedAt"]);
    assert_eq!(updated["title"], "p1b");

    let (status, body) = send!(
        app,
        test::TestRequest::delete().uri(&format!("/api/authors/{jane}"))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));

    let (_, remaining) = send!(app, test::TestRequest::get().uri("/api/posts"));
    assert_eq!(remaining, json!([p3]));

    let (status, body) = send!(
        app,
        test::TestRequest::get().uri(&format!("/api/posts/{p1_id}"))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Post not found"}));
}

#[actix_web::test]
async fn test_post_errors() {
    let state = AppState::new();
    let app = test_app!(state);

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({"title": "t", "content": "c"}))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"error": "Title, content, and authorId are required"})
    );

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({"title": "t", "content": "c", "authorId": "ghost"}))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Author not found"}));

    let (status, _) = send!(
        app,
        test::TestRequest::put()
            .uri("/api/posts/missing")
            .set_json(json!({"title": "t", "content": "c", "authorId": "ghost"}))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send!(app, test::TestRequest::delete().uri("/api/posts/missing"));
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send!(
        app,
        test::TestRequest::get().uri("/api/authors/ghost/posts")
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Author not found"}));

    let (_, body) = send!(app, test::TestRequest::get().uri("/api/posts"));
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn test_malformed_json_is_internal_error() {
    let state = AppState::new();
    let app = test_app!(state);

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/authors")
            .insert_header(header::ContentType::json())
            .set_payload("{not json")
    );
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Something went wrong!");
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .starts_with("Json deserialize error")
    );
}

#[actix_web::test]
async fn test_unknown_route_and_json_content_type() {
    let state = AppState::new();
    let app = test_app!(state);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/comments").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "Not found"}));
}

#[actix_web::test]
async fn test_cors_preflight() {
    let state = AppState::new();
    let app = test_app!(state);

    let req = test::TestRequest::default()
        .method(actix_web::http::Method::OPTIONS)
        .uri("/api/posts")
        .insert_header((header::ORIGIN, "http://localhost:3000"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}

#[actix_web::test]
async fn test_empty_json_body_is_validation_error() {
    let state = AppState::new();
    let app = test_app!(state);

    let (_, jane) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/authors")
            .set_json(json!({"name": "Jane", "email": "jane@example.com"}))
    );
    let jane = id_of(&jane);
    let (_, post) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({"title": "t", "content": "c", "authorId": jane}))
    );
    let post = id_of(&post);

    let author_error = json!({"error": "Name and email are required"});
    let post_error = json!({"error": "Title, content, and authorId are required"});
    let cases = [
        (test::TestRequest::post().uri("/api/authors"), &author_error),
        (
            test::TestRequest::put().uri(&format!("/api/authors/{jane}")),
            &author_error,
        ),
        (test::TestRequest::post().uri("/api/posts"), &post_error),
        (
            test::TestRequest::put().uri(&format!("/api/posts/{post}")),
            &post_error,
        ),
    ];
    for (req, expected) in cases {
        let (status, body) = send!(app, req.insert_header(header::ContentType::json()));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(&body, expected);
    }

    let (_, authors) = send!(app, test::TestRequest::get().uri("/api/authors"));
    assert_eq!(authors.as_array().unwrap().len(), 1);
    let (_, posts) = send!(app, test::TestRequest::get().uri("/api/posts"));
    assert_eq!(posts.as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_unsupported_content_type_body_is_ignored() {
    let state = AppState::new();
    let app = test_app!(state);

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/authors")
            .insert_header(header::ContentType::plaintext())
            .set_payload(r#"{"name":"Jane","email":"jane@example.com"}"#)
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Name and email are required"}));
}

#[actix_web::test]
async fn test_form_encoded_bodies_are_accepted() {
    let state = AppState::new();
    let app = test_app!(state);

    let (status, author) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/authors")
            .set_form([("name", "Jane"), ("email", "jane@example.com")])
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(author["name"], "Jane");
    assert_eq!(author["bio"], "");
    let jane = id_of(&author);

    let (status, author) = send!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/authors/{jane}"))
            .set_form([("name", "Janet"), ("email", "janet@example.com"), ("bio", "Editor")])
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(author["name"], "Janet");
    assert_eq!(author["bio"], "Editor");

    let (status, post) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/posts")
            .set_form([("title", "t"), ("content", "c"), ("authorId", jane.as_str())])
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(post["authorId"], jane.as_str());
    let post = id_of(&post);

    let (status, updated) = send!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/posts/{post}"))
            .set_form([("title", "t2"), ("content", "c2"), ("authorId", jane.as_str())])
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "t2");

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/posts")
            .set_form([("title", "t"), ("content", "c")])
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"error": "Title, content, and authorId are required"})
    );
}

#[actix_web::test]
async fn test_truthy_non_string_fields_are_accepted() {
    let state = AppState::new();
    let app = test_app!(state);

    let (status, author) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/authors")
            .set_json(json!({"name": 123, "email": "n@example.com"}))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(author["name"], "123");

    let (status, _) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/authors")
            .set_json(json!({"name": 0, "email": "n@example.com"}))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
