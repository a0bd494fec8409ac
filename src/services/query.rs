//! List query construction
//!
//! A [`ListQuery`] is plain data (equality filters, a descending sort key,
//! skip and limit) so the visibility and pagination rules can be checked
//! without a database. [`ListQuery::build`] turns it into a sea-orm
//! `Select` for any entity whose columns carry the referenced names.

use sea_orm::{
    ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Select, Value,
};
use std::str::FromStr;

use crate::schemas::{BlogListParams, ProjectListParams};

/// Upper bound on rows returned by the unpaginated list endpoints
pub const LIST_LIMIT: u64 = 100;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterValue {
    Bool(bool),
    Text(String),
}

impl From<FilterValue> for Value {
    fn from(value: FilterValue) -> Self {
        match value {
            FilterValue::Bool(flag) => Value::from(flag),
            FilterValue::Text(text) => Value::from(text),
        }
    }
}

/// `column = value`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Filter {
    pub column: &'static str,
    pub value: FilterValue,
}

impl Filter {
    pub fn flag(column: &'static str, value: bool) -> Self {
        Self {
            column,
            value: FilterValue::Bool(value),
        }
    }

    pub fn text(column: &'static str, value: impl Into<String>) -> Self {
        Self {
            column,
            value: FilterValue::Text(value.into()),
        }
    }
}

/// Conjunction of filters, newest-first ordering and a skip/limit window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub filters: Vec<Filter>,
    /// Sorted descending; ties broken by `id` ascending
    pub sort_desc: &'static str,
    pub skip: u64,
    pub limit: u64,
}

impl ListQuery {
    /// All contact submissions, newest first.
    pub fn contacts() -> Self {
        Self {
            filters: Vec::new(),
            sort_desc: "created_at",
            skip: 0,
            limit: LIST_LIMIT,
        }
    }

    /// One page of published posts, optionally narrowed to a category.
    pub fn blog_posts(params: &BlogListParams) -> Self {
        let mut filters = vec![Filter::flag("published", true)];
        if let Some(category) = &params.category {
            filters.push(Filter::text("category", category.clone()));
        }

        Self {
            filters,
            sort_desc: "date",
            skip: params.page.saturating_sub(1).saturating_mul(params.per_page),
            limit: params.per_page,
        }
    }

    /// A single post by id, visible only once published.
    pub fn published_post(id: &str) -> Self {
        Self {
            filters: vec![Filter::text("id", id), Filter::flag("published", true)],
            sort_desc: "date",
            skip: 0,
            limit: 1,
        }
    }

    /// Approved testimonials only.
    pub fn testimonials() -> Self {
        Self {
            filters: vec![Filter::flag("approved", true)],
            sort_desc: "created_at",
            skip: 0,
            limit: LIST_LIMIT,
        }
    }

    pub fn projects(params: &ProjectListParams) -> Self {
        let mut filters = Vec::new();
        if let Some(category) = &params.category {
            filters.push(Filter::text("category", category.clone()));
        }
        if let Some(featured) = params.featured {
            filters.push(Filter::flag("featured", featured));
        }

        Self {
            filters,
            sort_desc: "created_at",
            skip: 0,
            limit: LIST_LIMIT,
        }
    }

    /// Rows matching the filters, without ordering or windowing. Used for
    /// totals, which must not depend on skip/limit.
    pub fn filtered<E: EntityTrait>(&self) -> Result<Select<E>, DbErr> {
        let mut select = E::find();
        for filter in &self.filters {
            let column = column::<E>(filter.column)?;
            let value: Value = filter.value.clone().into();
            select = select.filter(column.eq(value));
        }
        Ok(select)
    }

    pub fn build<E: EntityTrait>(&self) -> Result<Select<E>, DbErr> {
        let select = self
            .filtered::<E>()?
            .order_by_desc(column::<E>(self.sort_desc)?)
            .order_by_asc(column::<E>("id")?)
            .offset(self.skip)
            .limit(self.limit);
        Ok(select)
    }
}

fn column<E: EntityTrait>(name: &str) -> Result<E::Column, DbErr> {
    E::Column::from_str(name).map_err(|_| {
        DbErr::Custom(format!(
            "Unknown column '{}' for table '{}'",
            name,
            E::default().table_name()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::entities::{blog_posts, projects, testimonials};
    use sea_orm::{DbBackend, QueryTrait};

    #[test]
    fn blog_listing_always_requires_published() {
        let unfiltered = ListQuery::blog_posts(&BlogListParams::default());
        assert_eq!(unfiltered.filters, vec![Filter::flag("published", true)]);

        let params = BlogListParams {
            category: Some("Design".to_string()),
            ..BlogListParams::default()
        };
        let by_category = ListQuery::blog_posts(&params);
        assert_eq!(
            by_category.filters,
            vec![
                Filter::flag("published", true),
                Filter::text("category", "Design"),
            ]
        );
        assert_eq!(by_category.sort_desc, "date");
    }

    #[test]
    fn blog_pagination_window() {
        let params = BlogListParams {
            category: None,
            page: 2,
            per_page: 5,
        };
        let query = ListQuery::blog_posts(&params);
        assert_eq!(query.skip, 5);
        assert_eq!(query.limit, 5);

        let first = ListQuery::blog_posts(&BlogListParams::default());
        assert_eq!(first.skip, 0);
        assert_eq!(first.limit, 10);
    }

    #[test]
    fn single_post_keeps_visibility_restriction() {
        let query = ListQuery::published_post("abc");
        assert!(query.filters.contains(&Filter::flag("published", true)));
        assert!(query.filters.contains(&Filter::text("id", "abc")));
    }

    #[test]
    fn testimonials_require_approval() {
        let query = ListQuery::testimonials();
        assert_eq!(query.filters, vec![Filter::flag("approved", true)]);
        assert_eq!(query.limit, LIST_LIMIT);
        assert_eq!(query.sort_desc, "created_at");
    }

    #[test]
    fn project_filters_are_optional() {
        let none = ListQuery::projects(&ProjectListParams::default());
        assert!(none.filters.is_empty());

        let params = ProjectListParams {
            category: Some("Frontend".to_string()),
            featured: Some(false),
        };
        let both = ListQuery::projects(&params);
        assert_eq!(
            both.filters,
            vec![
                Filter::text("category", "Frontend"),
                Filter::flag("featured", false),
            ]
        );
    }

    #[test]
    fn renders_sql_with_filters_order_and_window() {
        let params = BlogListParams {
            category: Some("Design".to_string()),
            page: 3,
            per_page: 4,
        };
        let sql = ListQuery::blog_posts(&params)
            .build::<blog_posts::Entity>()
            .unwrap()
            .build(DbBackend::Sqlite)
            .to_string();

        assert!(sql.contains(r#""blog_posts"."published" = "#), "{}", sql);
        assert!(sql.contains(r#""blog_posts"."category" = 'Design'"#), "{}", sql);
        assert!(sql.contains(r#"ORDER BY "blog_posts"."date" DESC, "blog_posts"."id" ASC"#), "{}", sql);
        assert!(sql.contains("LIMIT 4 OFFSET 8"), "{}", sql);
    }

    #[test]
    fn unknown_column_is_an_error() {
        let query = ListQuery::testimonials();
        assert!(query.build::<testimonials::Entity>().is_ok());
        // Projects have no approval flag
        assert!(query.build::<projects::Entity>().is_err());
    }
}
