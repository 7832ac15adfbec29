use std::sync::Arc;

use crate::statistics::application::ports::incoming::use_cases::{
    GetStatisticsUseCase, UpdateStatisticsUseCase,
};

#[derive(Clone)]
pub struct StatisticsUseCases {
    pub get: Arc<dyn GetStatisticsUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateStatisticsUseCase + Send + Sync>,
}
