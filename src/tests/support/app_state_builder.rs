use crate::blog::application::blog_use_cases::BlogUseCases;
use crate::blog::application::ports::incoming::use_cases::{
    CreateBlogPostUseCase, GetBlogCategoriesUseCase, GetBlogPostUseCase, GetBlogPostsUseCase,
    GetFeaturedBlogPostsUseCase,
};
use crate::contact::application::contact_use_cases::ContactUseCases;
use crate::contact::application::ports::incoming::use_cases::{
    GetContactSubmissionUseCase, ListContactSubmissionsUseCase, SubmitContactUseCase,
};
use crate::resume::application::ports::incoming::use_cases::{
    GetResumeUseCase, UpdateResumeUseCase,
};
use crate::resume::application::resume_use_cases::ResumeUseCases;
use crate::statistics::application::ports::incoming::use_cases::{
    GetStatisticsUseCase, UpdateStatisticsUseCase,
};
use crate::statistics::application::statistics_use_cases::StatisticsUseCases;
use crate::testimonial::application::ports::incoming::use_cases::{
    CreateTestimonialUseCase, GetTestimonialsUseCase,
};
use crate::testimonial::application::testimonial_use_cases::TestimonialUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    contact: ContactUseCases,
    blog: BlogUseCases,
    resume: ResumeUseCases,
    statistics: StatisticsUseCases,
    testimonial: TestimonialUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            contact: ContactUseCases {
                submit: Arc::new(StubSubmitContactUseCase),
                list: Arc::new(StubListContactSubmissionsUseCase),
                get_single: Arc::new(StubGetContactSubmissionUseCase),
            },
            blog: BlogUseCases {
                create: Arc::new(StubCreateBlogPostUseCase),
                list: Arc::new(StubGetBlogPostsUseCase),
                featured: Arc::new(StubGetFeaturedBlogPostsUseCase),
                categories: Arc::new(StubGetBlogCategoriesUseCase),
                get_single: Arc::new(StubGetBlogPostUseCase),
            },
            resume: ResumeUseCases {
                get: Arc::new(StubGetResumeUseCase),
                update: Arc::new(StubUpdateResumeUseCase),
            },
            statistics: StatisticsUseCases {
                get: Arc::new(StubGetStatisticsUseCase),
                update: Arc::new(StubUpdateStatisticsUseCase),
            },
            testimonial: TestimonialUseCases {
                create: Arc::new(StubCreateTestimonialUseCase),
                list: Arc::new(StubGetTestimonialsUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    // Contact
    pub fn with_submit_contact(
        mut self,
        uc: impl SubmitContactUseCase + Send + Sync + 'static,
    ) -> Self {
        self.contact.submit = Arc::new(uc);
        self
    }

    pub fn with_list_contact_submissions(
        mut self,
        uc: impl ListContactSubmissionsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.contact.list = Arc::new(uc);
        self
    }

    pub fn with_get_contact_submission(
        mut self,
        uc: impl GetContactSubmissionUseCase + Send + Sync + 'static,
    ) -> Self {
        self.contact.get_single = Arc::new(uc);
        self
    }

    // Blog
    pub fn with_create_blog_post(
        mut self,
        uc: impl CreateBlogPostUseCase + Send + Sync + 'static,
    ) -> Self {
        self.blog.create = Arc::new(uc);
        self
    }

    pub fn with_get_blog_posts(
        mut self,
        uc: impl GetBlogPostsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.blog.list = Arc::new(uc);
        self
    }

    pub fn with_get_featured_blog_posts(
        mut self,
        uc: impl GetFeaturedBlogPostsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.blog.featured = Arc::new(uc);
        self
    }

    pub fn with_get_blog_categories(
        mut self,
        uc: impl GetBlogCategoriesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.blog.categories = Arc::new(uc);
        self
    }

    pub fn with_get_blog_post(mut self, uc: impl GetBlogPostUseCase + Send + Sync + 'static) -> Self {
        self.blog.get_single = Arc::new(uc);
        self
    }

    // Resume
    pub fn with_get_resume(mut self, uc: impl GetResumeUseCase + Send + Sync + 'static) -> Self {
        self.resume.get = Arc::new(uc);
        self
    }

    pub fn with_update_resume(
        mut self,
        uc: impl UpdateResumeUseCase + Send + Sync + 'static,
    ) -> Self {
        self.resume.update = Arc::new(uc);
        self
    }

    // Statistics
    pub fn with_get_statistics(
        mut self,
        uc: impl GetStatisticsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.statistics.get = Arc::new(uc);
        self
    }

    pub fn with_update_statistics(
        mut self,
        uc: impl UpdateStatisticsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.statistics.update = Arc::new(uc);
        self
    }

    // Testimonials
    pub fn with_create_testimonial(
        mut self,
        uc: impl CreateTestimonialUseCase + Send + Sync + 'static,
    ) -> Self {
        self.testimonial.create = Arc::new(uc);
        self
    }

    pub fn with_get_testimonials(
        mut self,
        uc: impl GetTestimonialsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.testimonial.list = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            contact: self.contact,
            blog: self.blog,
            resume: self.resume,
            statistics: self.statistics,
            testimonial: self.testimonial,
        })
    }
}
