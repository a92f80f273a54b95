use navsite_core::{
    models::{navigation::NOTHING_TO_UPDATE, NavigationPatch, NavigationSite, NewNavigationSite},
    AppError,
};
use sqlx::{PgPool, Postgres, QueryBuilder};

const NAVIGATION_COLUMNS: &str = "id, logo, url, name, description";

/// Repository for the `navigation_sites` table
#[derive(Clone)]
pub struct NavigationRepository {
    pool: PgPool,
}

impl NavigationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List every navigation site ordered by id
    #[tracing::instrument(skip(self), fields(db.table = "navigation_sites", db.operation = "select"))]
    pub async fn list(&self) -> Result<Vec<NavigationSite>, AppError> {
        let sites = sqlx::query_as::<Postgres, NavigationSite>(&format!(
            "SELECT {} FROM navigation_sites ORDER BY id ASC",
            NAVIGATION_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(sites)
    }

    /// Get navigation site by ID
    #[tracing::instrument(skip(self), fields(db.table = "navigation_sites", db.operation = "select", db.record_id = id))]
    pub async fn get(&self, id: i64) -> Result<Option<NavigationSite>, AppError> {
        let site = sqlx::query_as::<Postgres, NavigationSite>(&format!(
            "SELECT {} FROM navigation_sites WHERE id = $1",
            NAVIGATION_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(site)
    }

    #[tracing::instrument(skip(self), fields(db.table = "navigation_sites", db.operation = "select", db.record_id = id))]
    pub async fn exists(&self, id: i64) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<Postgres, bool>(
            "SELECT EXISTS(SELECT 1 FROM navigation_sites WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    /// Insert a validated navigation site and return the stored row
    #[tracing::instrument(skip(self, site), fields(db.table = "navigation_sites", db.operation = "insert"))]
    pub async fn create(&self, site: &NewNavigationSite) -> Result<NavigationSite, AppError> {
        let created = sqlx::query_as::<Postgres, NavigationSite>(&format!(
            r#"
            INSERT INTO navigation_sites (logo, url, name, description)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            NAVIGATION_COLUMNS
        ))
        .bind(&site.logo)
        .bind(&site.url)
        .bind(&site.name)
        .bind(site.description.as_deref())
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Apply a patch, touching only the columns it sets.
    ///
    /// Returns the number of affected rows (0 when the id does not exist).
    #[tracing::instrument(skip(self, patch), fields(db.table = "navigation_sites", db.operation = "update", db.record_id = id, fields = patch.field_count()))]
    pub async fn update(&self, id: i64, patch: &NavigationPatch) -> Result<u64, AppError> {
        if patch.is_empty() {
            return Err(AppError::BadRequest(NOTHING_TO_UPDATE.to_string()));
        }

        let result = patch_query(id, patch).build().execute(&self.pool).await?;

        Ok(result.rows_affected())
    }

    /// Delete navigation site. Returns false when no row has this id.
    #[tracing::instrument(skip(self), fields(db.table = "navigation_sites", db.operation = "delete", db.record_id = id))]
    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM navigation_sites WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Build `UPDATE navigation_sites SET <set columns> WHERE id = $n`.
///
/// The patch must set at least one column.
fn patch_query(id: i64, patch: &NavigationPatch) -> QueryBuilder<'_, Postgres> {
    let mut builder = QueryBuilder::new("UPDATE navigation_sites SET ");

    let mut columns = builder.separated(", ");
    if let Some(ref logo) = patch.logo {
        columns.push("logo = ");
        columns.push_bind_unseparated(logo);
    }
    if let Some(ref url) = patch.url {
        columns.push("url = ");
        columns.push_bind_unseparated(url);
    }
    if let Some(ref name) = patch.name {
        columns.push("name = ");
        columns.push_bind_unseparated(name);
    }
    if let Some(ref description) = patch.description {
        columns.push("description = ");
        columns.push_bind_unseparated(description.as_deref());
    }

    builder.push(" WHERE id = ");
    builder.push_bind(id);
    builder
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_query_sets_only_supplied_columns() {
        let patch = NavigationPatch {
            url: Some("https://example.com".to_string()),
            description: Some(Some(String::new())),
            ..Default::default()
        };
        let query = patch_query(7, &patch);
        assert_eq!(
            query.sql(),
            "UPDATE navigation_sites SET url = $1, description = $2 WHERE id = $3"
        );
    }

    #[test]
    fn patch_query_with_every_column() {
        let patch = NavigationPatch {
            logo: Some("/uploads/svg/a.svg".to_string()),
            url: Some("https://a.com".to_string()),
            name: Some("A".to_string()),
            description: Some(None),
        };
        let query = patch_query(1, &patch);
        assert_eq!(
            query.sql(),
            "UPDATE navigation_sites SET logo = $1, url = $2, name = $3, description = $4 WHERE id = $5"
        );
    }

    #[test]
    fn patch_query_single_column() {
        let patch = NavigationPatch {
            name: Some("Renamed".to_string()),
            ..Default::default()
        };
        assert_eq!(
            patch_query(3, &patch).sql(),
            "UPDATE navigation_sites SET name = $1 WHERE id = $2"
        );
    }
}
