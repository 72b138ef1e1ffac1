use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::validation::{check_max_len, double_option, require_len};

pub const PRODUCT_NAME_MAX: usize = 100;
pub const PRODUCT_DESCRIPTION_MAX: usize = 500;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl CreateProductRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_len("name", &self.name, 1, PRODUCT_NAME_MAX)?;
        check_max_len("description", self.description.as_deref(), PRODUCT_DESCRIPTION_MAX)?;
        Ok(())
    }
}

/// Partial update. An absent field leaves the stored value unchanged;
/// `description: null` clears it.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
}

impl ProductPatch {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            require_len("name", name, 1, PRODUCT_NAME_MAX)?;
        }
        if let Some(Some(description)) = &self.description {
            check_max_len("description", Some(description), PRODUCT_DESCRIPTION_MAX)?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_name() {
        let req: CreateProductRequest = serde_json::from_str(r#"{"name":""}"#).unwrap();
        let err = req.validate().unwrap_err();
        assert_eq!(err.field, "name");
    }

    #[test]
    fn create_accepts_missing_description() {
        let req: CreateProductRequest = serde_json::from_str(r#"{"name":"Widget"}"#).unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req.description, None);
    }

    #[test]
    fn create_rejects_oversized_description() {
        let req = CreateProductRequest {
            name: "Widget".into(),
            description: Some("d".repeat(PRODUCT_DESCRIPTION_MAX + 1)),
        };
        assert_eq!(req.validate().unwrap_err().field, "description");
    }

    #[test]
    fn patch_distinguishes_absent_from_null_description() {
        let absent: ProductPatch = serde_json::from_str(r#"{"name":"Widget"}"#).unwrap();
        assert_eq!(absent.description, None);

        let cleared: ProductPatch = serde_json::from_str(r#"{"description":null}"#).unwrap();
        assert_eq!(cleared.description, Some(None));

        let set: ProductPatch = serde_json::from_str(r#"{"description":"new"}"#).unwrap();
        assert_eq!(set.description, Some(Some("new".into())));
    }

    #[test]
    fn patch_rejects_empty_name_when_submitted() {
        let patch: ProductPatch = serde_json::from_str(r#"{"name":""}"#).unwrap();
        assert!(patch.validate().is_err());
        // ...but absent name is fine.
        let patch: ProductPatch = serde_json::from_str("{}").unwrap();
        assert!(patch.validate().is_ok());
    }
}
