//! Author handlers.

use actix_web::{HttpResponse, web};

use blog_core::domain::AuthorInput;
use blog_shared::DeleteResponse;
use blog_shared::dto::AuthorRequest;

use crate::extract::RequestBody;
use crate::middleware::error::AppResult;
use crate::state::AppState;

fn author_input(req: AuthorRequest) -> AuthorInput {
    AuthorInput {
        name: req.name,
        email: req.email,
        bio: req.bio,
    }
}

/// GET /api/authors
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let authors = state.authors.list_authors().await?;
    Ok(HttpResponse::Ok().json(authors))
}

/// GET /api/authors/{id}
pub async fn get(state: web::Data<AppState>, id: web::Path<String>) -> AppResult<HttpResponse> {
    let author = state.authors.get_author(&id).await?;
    Ok(HttpResponse::Ok().json(author))
}

/// POST /api/authors
pub async fn create(
    state: web::Data<AppState>,
    body: RequestBody<AuthorRequest>,
) -> AppResult<HttpResponse> {
    let author = state
        .authors
        .create_author(author_input(body.into_inner()))
        .await?;

    tracing::info!(author_id = %author.id, "Author created");
    Ok(HttpResponse::Created().json(author))
}

/// PUT /api/authors/{id}
pub async fn update(
    state: web::Data<AppState>,
    id: web::Path<String>,
    body: RequestBody<AuthorRequest>,
) -> AppResult<HttpResponse> {
    let author = state
        .authors
        .update_author(&id, author_input(body.into_inner()))
        .await?;
    Ok(HttpResponse::Ok().json(author))
}

/// DELETE /api/authors/{id} - also deletes the author's posts.
pub async fn delete(state: web::Data<AppState>, id: web::Path<String>) -> AppResult<HttpResponse> {
    let removed_posts = state.authors.delete_author(&id).await?;

    tracing::info!(author_id = %id, removed_posts, "Author deleted");
    Ok(HttpResponse::Ok().json(DeleteResponse::ok()))
}

/// GET /api/authors/{id}/posts
pub async fn list_posts(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> AppResult<HttpResponse> {
    let posts = state.authors.list_posts_by_author(&id).await?;
    Ok(HttpResponse::Ok().json(posts))
}
