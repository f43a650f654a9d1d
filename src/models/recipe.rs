use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::text;

/// One object of the recipes input document. Every key is required;
/// `Ingredients` must be a JSON array of arbitrary entries.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecipeRecord {
    #[serde(deserialize_with = "text::nullable")]
    pub recipe_name: Option<String>,
    #[serde(deserialize_with = "text::nullable")]
    pub recipe_photo: Option<String>,
    #[serde(deserialize_with = "text::nullable")]
    pub recipe_url: Option<String>,
    #[serde(rename = "Calories", deserialize_with = "text::nullable")]
    pub calories: Option<String>,
    #[serde(rename = "Carbohydrates", deserialize_with = "text::nullable")]
    pub carbohydrates: Option<String>,
    #[serde(rename = "Net_Carbs", deserialize_with = "text::nullable")]
    pub net_carbs: Option<String>,
    #[serde(rename = "Fat", deserialize_with = "text::nullable")]
    pub fat: Option<String>,
    #[serde(rename = "Protein", deserialize_with = "text::nullable")]
    pub protein: Option<String>,
    #[serde(rename = "Sodium", deserialize_with = "text::nullable")]
    pub sodium: Option<String>,
    #[serde(rename = "Prep_Time", deserialize_with = "text::nullable")]
    pub prep_time: Option<String>,
    #[serde(rename = "Difficulty_Level", deserialize_with = "text::nullable")]
    pub difficulty_level: Option<String>,
    #[serde(rename = "Spice_Level", deserialize_with = "text::nullable")]
    pub spice_level: Option<String>,
    #[serde(rename = "Ingredients")]
    pub ingredients: Vec<Value>,
}

#[derive(Debug, Clone)]
pub struct NewRecipe {
    pub uid: Uuid,
    pub record: RecipeRecord,
}

impl NewRecipe {
    pub fn new(record: RecipeRecord) -> Self {
        Self {
            uid: Uuid::new_v4(),
            record,
        }
    }
}

/// A stored recipe as served by `GET /recipes`, ingredients decoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i64,
    pub uid: Uuid,
    pub recipe_name: Option<String>,
    pub recipe_photo: Option<String>,
    pub recipe_url: Option<String>,
    pub calories: Option<String>,
    pub carbohydrates: Option<String>,
    pub net_carbs: Option<String>,
    pub fat: Option<String>,
    pub protein: Option<String>,
    pub sodium: Option<String>,
    pub prep_time: Option<String>,
    pub difficulty_level: Option<String>,
    pub spice_level: Option<String>,
    pub ingredients: Vec<Value>,
}
