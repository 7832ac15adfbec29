use std::sync::Arc;

use crate::resume::application::ports::incoming::use_cases::{
    GetResumeUseCase, UpdateResumeUseCase,
};

#[derive(Clone)]
pub struct ResumeUseCases {
    pub get: Arc<dyn GetResumeUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateResumeUseCase + Send + Sync>,
}
