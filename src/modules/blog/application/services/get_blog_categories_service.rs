use async_trait::async_trait;

use crate::blog::application::{
    domain::entities::BlogCategories,
    ports::{
        incoming::use_cases::{GetBlogCategoriesUseCase, GetBlogPostsError},
        outgoing::BlogPostQuery,
    },
};

#[derive(Debug, Clone)]
pub struct GetBlogCategoriesService<Q>
where
    Q: BlogPostQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetBlogCategoriesService<Q>
where
    Q: BlogPostQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetBlogCategoriesUseCase for GetBlogCategoriesService<Q>
where
    Q: BlogPostQuery + Send + Sync,
{
    async fn execute(&self) -> Result<BlogCategories, GetBlogPostsError> {
        let categories = self
            .query
            .published_categories()
            .await
            .map_err(|e| GetBlogPostsError::QueryError(e.to_string()))?;

        Ok(BlogCategories { categories })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    use crate::blog::application::{
        domain::entities::BlogPost,
        ports::outgoing::{BlogPostFilter, BlogPostQueryError, PageRequest},
    };
    use crate::shared::document_id::DocumentId;

    mock! {
        pub BlogQuery {}
        #[async_trait]
        impl BlogPostQuery for BlogQuery {
            async fn list(
                &self,
                filter: BlogPostFilter,
                page: PageRequest,
            ) -> Result<Vec<BlogPost>, BlogPostQueryError>;
            async fn published_categories(&self) -> Result<Vec<String>, BlogPostQueryError>;
            async fn find_by_id(
                &self,
                id: DocumentId,
            ) -> Result<Option<BlogPost>, BlogPostQueryError>;
        }
    }

    #[tokio::test]
    async fn wraps_categories() {
        let mut query = MockBlogQuery::new();
        query
            .expect_published_categories()
            .times(1)
            .returning(|| Ok(vec!["AI & Machine Learning".into(), "Leadership".into()]));

        let service = GetBlogCategoriesService::new(query);
        let result = service.execute().await.unwrap();

        assert_eq!(result.categories.len(), 2);
        assert_eq!(result.categories[1], "Leadership");
    }

    #[tokio::test]
    async fn empty_collection_gives_empty_list() {
        let mut query = MockBlogQuery::new();
        query.expect_published_categories().returning(|| Ok(vec![]));

        let service = GetBlogCategoriesService::new(query);

        assert!(service.execute().await.unwrap().categories.is_empty());
    }
}
