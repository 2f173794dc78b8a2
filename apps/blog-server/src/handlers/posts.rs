//! Post handlers.

use actix_web::{HttpResponse, web};

use blog_core::domain::PostInput;
use blog_shared::DeleteResponse;
use blog_shared::dto::PostRequest;

use crate::extract::RequestBody;
use crate::middleware::error::AppResult;
use crate::state::AppState;

fn post_input(req: PostRequest) -> PostInput {
    PostInput {
        title: req.title,
        content: req.content,
        author_id: req.author_id,
    }
}

/// GET /api/posts
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_posts().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/{id}
pub async fn get(state: web::Data<AppState>, id: web::Path<String>) -> AppResult<HttpResponse> {
    let post = state.posts.get_post(&id).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/posts
pub async fn create(
    state: web::Data<AppState>,
    body: RequestBody<PostRequest>,
) -> AppResult<HttpResponse> {
    let post = state.posts.create_post(post_input(body.into_inner())).await?;

    tracing::info!(post_id = %post.id, author_id = %post.author_id, "Post created");
    Ok(HttpResponse::Created().json(post))
}

/// PUT /api/posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    id: web::Path<String>,
    body: RequestBody<PostRequest>,
) -> AppResult<HttpResponse> {
    let post = state
        .posts
        .update_post(&id, post_input(body.into_inner()))
        .await?;
    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/posts/{id}
pub async fn delete(state: web::Data<AppState>, id: web::Path<String>) -> AppResult<HttpResponse> {
    state.posts.delete_post(&id).await?;
    Ok(HttpResponse::Ok().json(DeleteResponse::ok()))
}
