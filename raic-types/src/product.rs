use crate::category::ResolvedCategorySet;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub type AttributeId = u64;
pub type ProductId = u64;

/// One customer-facing choice of a variable product.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct VariationAxis {
    #[serde(rename = "id")]
    pub attribute_id: AttributeId,
    pub name: String,
    pub visible: bool,
    pub variation: bool,
    pub options: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct VariationAttribute {
    #[serde(rename = "id")]
    pub attribute_id: AttributeId,
    pub option: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariationSpec {
    pub sku: String,
    pub price: Decimal,
    pub attributes: Vec<VariationAttribute>,
    pub image: Option<String>,
}

/// Parent variable product, ready to be created.
#[derive(Clone, Debug)]
pub struct ProductDraft {
    pub name: String,
    pub short_description: String,
    pub description: String,
    pub categories: ResolvedCategorySet,
    pub images: Vec<String>,
    pub axes: Vec<VariationAxis>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reviewer {
    pub name: String,
    pub email: String,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ReviewRecord {
    pub product_id: ProductId,
    pub review: String,
    pub reviewer: String,
    pub reviewer_email: String,
    pub rating: u8,
}
