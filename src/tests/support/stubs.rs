//! Default use case stand-ins for route tests. Creating stubs echo their
//! command back, reading stubs return empty or "not found" results.

use async_trait::async_trait;

use crate::blog::application::{
    domain::entities::{BlogCategories, BlogPost},
    ports::{
        incoming::use_cases::{
            CreateBlogPostCommand, CreateBlogPostError, CreateBlogPostUseCase,
            GetBlogCategoriesUseCase, GetBlogPostError, GetBlogPostUseCase, GetBlogPostsError,
            GetBlogPostsUseCase, GetFeaturedBlogPostsUseCase,
        },
        outgoing::{BlogPostFilter, PageRequest},
    },
};
use crate::contact::application::{
    domain::entities::{ContactSubmission, NEW_SUBMISSION_STATUS},
    ports::incoming::use_cases::{
        GetContactSubmissionError, GetContactSubmissionUseCase, ListContactSubmissionsError,
        ListContactSubmissionsUseCase, SubmitContactCommand, SubmitContactError,
        SubmitContactUseCase,
    },
};
use crate::resume::application::{
    domain::entities::Resume,
    ports::incoming::use_cases::{
        GetResumeError, GetResumeUseCase, UpdateResumeCommand, UpdateResumeError,
        UpdateResumeUseCase,
    },
};
use crate::shared::{document_id::DocumentId, owner::OWNER_NAME, time::now_utc};
use crate::statistics::application::{
    domain::entities::Statistics,
    ports::incoming::use_cases::{
        GetStatisticsError, GetStatisticsUseCase, UpdateStatisticsCommand, UpdateStatisticsError,
        UpdateStatisticsUseCase,
    },
};
use crate::testimonial::application::{
    domain::entities::Testimonial,
    ports::{
        incoming::use_cases::{
            CreateTestimonialCommand, CreateTestimonialError, CreateTestimonialUseCase,
            GetTestimonialsError, GetTestimonialsUseCase,
        },
        outgoing::TestimonialFilter,
    },
};

pub const STUB_ID: &str = "665f1c2e9b1e8a3d4c2b1aff";

// ============================================================
// Contact
// ============================================================

#[derive(Clone)]
pub struct StubSubmitContactUseCase;

#[async_trait]
impl SubmitContactUseCase for StubSubmitContactUseCase {
    async fn execute(
        &self,
        command: SubmitContactCommand,
    ) -> Result<ContactSubmission, SubmitContactError> {
        Ok(ContactSubmission {
            id: STUB_ID.to_string(),
            name: command.name().to_string(),
            email: command.email().to_string(),
            subject: command.subject().to_string(),
            message: command.message().to_string(),
            status: NEW_SUBMISSION_STATUS.to_string(),
            timestamp: now_utc(),
        })
    }
}

#[derive(Clone)]
pub struct StubListContactSubmissionsUseCase;

#[async_trait]
impl ListContactSubmissionsUseCase for StubListContactSubmissionsUseCase {
    async fn execute(&self) -> Result<Vec<ContactSubmission>, ListContactSubmissionsError> {
        Ok(vec![])
    }
}

#[derive(Clone)]
pub struct StubGetContactSubmissionUseCase;

#[async_trait]
impl GetContactSubmissionUseCase for StubGetContactSubmissionUseCase {
    async fn execute(
        &self,
        raw_id: &str,
    ) -> Result<ContactSubmission, GetContactSubmissionError> {
        DocumentId::parse(raw_id).map_err(|_| GetContactSubmissionError::InvalidId)?;
        Err(GetContactSubmissionError::NotFound)
    }
}

// ============================================================
// Blog
// ============================================================

#[derive(Clone)]
pub struct StubCreateBlogPostUseCase;

#[async_trait]
impl CreateBlogPostUseCase for StubCreateBlogPostUseCase {
    async fn execute(
        &self,
        command: CreateBlogPostCommand,
    ) -> Result<BlogPost, CreateBlogPostError> {
        let draft = command.into_draft();
        let now = now_utc();

        Ok(BlogPost {
            id: STUB_ID.to_string(),
            title: draft.title,
            excerpt: draft.excerpt,
            content: draft.content,
            date: now,
            read_time: draft.read_time,
            category: draft.category,
            tags: draft.tags,
            author: OWNER_NAME.to_string(),
            featured: draft.featured,
            published: draft.published,
            created_at: now,
            updated_at: now,
        })
    }
}

#[derive(Clone)]
pub struct StubGetBlogPostsUseCase;

#[async_trait]
impl GetBlogPostsUseCase for StubGetBlogPostsUseCase {
    async fn execute(
        &self,
        _filter: BlogPostFilter,
        _page: PageRequest,
    ) -> Result<Vec<BlogPost>, GetBlogPostsError> {
        Ok(vec![])
    }
}

#[derive(Clone)]
pub struct StubGetFeaturedBlogPostsUseCase;

#[async_trait]
impl GetFeaturedBlogPostsUseCase for StubGetFeaturedBlogPostsUseCase {
    async fn execute(&self) -> Result<Vec<BlogPost>, GetBlogPostsError> {
        Ok(vec![])
    }
}

#[derive(Clone)]
pub struct StubGetBlogCategoriesUseCase;

#[async_trait]
impl GetBlogCategoriesUseCase for StubGetBlogCategoriesUseCase {
    async fn execute(&self) -> Result<BlogCategories, GetBlogPostsError> {
        Ok(BlogCategories { categories: vec![] })
    }
}

#[derive(Clone)]
pub struct StubGetBlogPostUseCase;

#[async_trait]
impl GetBlogPostUseCase for StubGetBlogPostUseCase {
    async fn execute(&self, raw_id: &str) -> Result<BlogPost, GetBlogPostError> {
        DocumentId::parse(raw_id).map_err(|_| GetBlogPostError::InvalidId)?;
        Err(GetBlogPostError::NotFound)
    }
}

// ============================================================
// Resume
// ============================================================

#[derive(Clone)]
pub struct StubGetResumeUseCase;

#[async_trait]
impl GetResumeUseCase for StubGetResumeUseCase {
    async fn execute(&self) -> Result<Resume, GetResumeError> {
        Ok(Resume::initial(now_utc()))
    }
}

#[derive(Clone)]
pub struct StubUpdateResumeUseCase;

#[async_trait]
impl UpdateResumeUseCase for StubUpdateResumeUseCase {
    async fn execute(&self, command: UpdateResumeCommand) -> Result<Resume, UpdateResumeError> {
        Ok(command.into_resume(now_utc()))
    }
}

// ============================================================
// Statistics
// ============================================================

#[derive(Clone)]
pub struct StubGetStatisticsUseCase;

#[async_trait]
impl GetStatisticsUseCase for StubGetStatisticsUseCase {
    async fn execute(&self) -> Result<Statistics, GetStatisticsError> {
        Ok(Statistics::initial(now_utc()))
    }
}

#[derive(Clone)]
pub struct StubUpdateStatisticsUseCase;

#[async_trait]
impl UpdateStatisticsUseCase for StubUpdateStatisticsUseCase {
    async fn execute(
        &self,
        command: UpdateStatisticsCommand,
    ) -> Result<Statistics, UpdateStatisticsError> {
        Ok(command.into_statistics(now_utc()))
    }
}

// ============================================================
// Testimonials
// ============================================================

#[derive(Clone)]
pub struct StubCreateTestimonialUseCase;

#[async_trait]
impl CreateTestimonialUseCase for StubCreateTestimonialUseCase {
    async fn execute(
        &self,
        command: CreateTestimonialCommand,
    ) -> Result<Testimonial, CreateTestimonialError> {
        let now = now_utc();

        Ok(Testimonial {
            id: STUB_ID.to_string(),
            name: command.name().to_string(),
            position: command.position().to_string(),
            company: command.company().to_string(),
            content: command.content().to_string(),
            rating: command.rating(),
            image: command.image().to_string(),
            approved: false,
            featured: false,
            created_at: now,
            updated_at: now,
        })
    }
}

#[derive(Clone)]
pub struct StubGetTestimonialsUseCase;

#[async_trait]
impl GetTestimonialsUseCase for StubGetTestimonialsUseCase {
    async fn execute(
        &self,
        _filter: TestimonialFilter,
    ) -> Result<Vec<Testimonial>, GetTestimonialsError> {
        Ok(vec![])
    }
}
