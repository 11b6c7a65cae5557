use super::{FilterQueryService, parse_filter_value};
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{ArticleFilter, PriceRange},
};

#[derive(Debug, Default)]
pub struct FilterArticlesByPriceQuery {
    pub min: Option<String>,
    pub max: Option<String>,
}

impl FilterArticlesByPriceQuery {
    pub fn to_filter(&self) -> ArticleFilter {
        let range = PriceRange::new(
            parse_filter_value(self.min.as_deref()),
            parse_filter_value(self.max.as_deref()),
        );
        if range.is_unbounded() {
            ArticleFilter::All
        } else {
            ArticleFilter::Price(range)
        }
    }
}

impl FilterQueryService {
    /// Articles priced within `[min, max]`; either bound may be left open.
    pub async fn filter_by_price(
        &self,
        query: FilterArticlesByPriceQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        self.run(query.to_filter()).await
    }
}
