//! Navigation site models

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::validation::validate_logo_path;
use crate::AppError;

pub const MISSING_REQUIRED_FIELDS: &str = "Logo、URL和名称为必填项";
pub const NOTHING_TO_UPDATE: &str = "没有需要更新的字段";

/// Navigation site row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct NavigationSite {
    pub id: i64,
    /// Public path of the uploaded SVG logo (`/uploads/svg/*.svg`)
    pub logo: String,
    pub url: String,
    pub name: String,
    pub description: Option<String>,
}

/// Request DTO for creating a navigation site
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateNavigationRequest {
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Validated values ready to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNavigationSite {
    pub logo: String,
    pub url: String,
    pub name: String,
    pub description: Option<String>,
}

impl TryFrom<CreateNavigationRequest> for NewNavigationSite {
    type Error = AppError;

    fn try_from(request: CreateNavigationRequest) -> Result<Self, Self::Error> {
        let (logo, url, name) = match (
            non_empty(request.logo),
            non_empty(request.url),
            non_empty(request.name),
        ) {
            (Some(logo), Some(url), Some(name)) => (logo, url, name),
            _ => return Err(AppError::BadRequest(MISSING_REQUIRED_FIELDS.to_string())),
        };

        validate_logo_path(&logo)?;

        Ok(NewNavigationSite {
            logo,
            url,
            name,
            description: request.description,
        })
    }
}

/// Request DTO for updating a navigation site.
///
/// `description` distinguishes an absent key (`None`) from a present one
/// (`Some(None)` for `null`, `Some(Some(""))` for an empty string).
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateNavigationRequest {
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<String>, nullable)]
    pub description: Option<Option<String>>,
}

fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// The set of columns an update will actually touch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationPatch {
    pub logo: Option<String>,
    pub url: Option<String>,
    pub name: Option<String>,
    pub description: Option<Option<String>>,
}

impl NavigationPatch {
    /// Number of columns the patch sets
    pub fn field_count(&self) -> usize {
        [
            self.logo.is_some(),
            self.url.is_some(),
            self.name.is_some(),
            self.description.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.field_count() == 0
    }
}

impl TryFrom<UpdateNavigationRequest> for NavigationPatch {
    type Error = AppError;

    /// Empty logo/url/name are ignored; a supplied logo must match the upload path pattern.
    fn try_from(request: UpdateNavigationRequest) -> Result<Self, Self::Error> {
        let logo = non_empty(request.logo);
        if let Some(ref logo) = logo {
            validate_logo_path(logo)?;
        }

        let patch = NavigationPatch {
            logo,
            url: non_empty(request.url),
            name: non_empty(request.name),
            description: request.description,
        };

        if patch.is_empty() {
            return Err(AppError::BadRequest(NOTHING_TO_UPDATE.to_string()));
        }

        Ok(patch)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
