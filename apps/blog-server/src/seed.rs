//! Sample authors and posts loaded at startup.

use blog_core::DomainError;
use blog_core::domain::{AuthorInput, PostInput};

use crate::state::AppState;

struct SampleAuthor {
    name: &'static str,
    email: &'static str,
    bio: &'static str,
    posts: &'static [(&'static str, &'static str)],
}

const SAMPLE_AUTHORS: &[SampleAuthor] = &[
    SampleAuthor {
        name: "Jane Doe",
        email: "jane@example.com",
        bio: "Jane is a tech enthusiast and software developer with over 5 years of experience.",
        posts: &[
            (
                "Getting Started with RESTful APIs",
                "RESTful APIs are a way to build web services that are lightweight, maintainable, \
                 and scalable. In this post, we'll explore the basics of REST architecture and how \
                 to design effective APIs.",
            ),
            (
                "Understanding Express.js Middleware",
                "Middleware functions are the backbone of Express.js applications. They have \
                 access to the request and response objects, and can perform actions on them, \
                 modify them, or terminate the request-response cycle.",
            ),
        ],
    },
    SampleAuthor {
        name: "John Smith",
        email: "john@example.com",
        bio: "John is a content creator and marketing specialist focused on emerging technologies.",
        posts: &[(
            "The Future of Web Development",
            "Web development is constantly evolving, with new frameworks, libraries, and tools \
             emerging every year. In this post, we'll look at some of the trends that are shaping \
             the future of web development.",
        )],
    },
];

/// Create the sample authors and their posts through the services.
pub async fn load_sample_data(state: &AppState) -> Result<(), DomainError> {
    for sample in SAMPLE_AUTHORS {
        let author = state
            .authors
            .create_author(AuthorInput {
                name: Some(sample.name.to_string()),
                email: Some(sample.email.to_string()),
                bio: Some(sample.bio.to_string()),
            })
            .await?;

        for (title, content) in sample.posts {
            state
                .posts
                .create_post(PostInput {
                    title: Some(title.to_string()),
                    content: Some(content.to_string()),
                    author_id: Some(author.id.clone()),
                })
                .await?;
        }

        tracing::debug!(author_id = %author.id, posts = sample.posts.len(), "Seeded author");
    }

    Ok(())
}
