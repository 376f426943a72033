use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response of `GET /recipes/random`.
/// Recipes stay as raw JSON so the cache keeps every field the API sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomRecipes {
    pub recipes: Vec<Value>,
}

/// Response of `GET /food/ingredients/substitutes`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubstitutesResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub ingredient: Option<String>,
    #[serde(default)]
    pub substitutes: Vec<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Substitutes {
    Found(Vec<String>),
    /// The API knows no substitutes for the ingredient
    None,
}

impl From<SubstitutesResponse> for Substitutes {
    fn from(response: SubstitutesResponse) -> Self {
        if response.substitutes.is_empty() {
            Substitutes::None
        } else {
            Substitutes::Found(response.substitutes)
        }
    }
}

/// Response of `GET /food/ingredients/{id}/information`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientInformation {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub aisle: Option<String>,
    #[serde(rename = "estimatedCost")]
    pub estimated_cost: Option<EstimatedCost>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatedCost {
    pub value: f64,
    pub unit: String,
}

impl IngredientInformation {
    pub fn aisle_message(&self) -> String {
        self.aisle
            .as_deref()
            .filter(|aisle| !aisle.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| "No information on the aisle.".to_string())
    }

    /// Estimated cost in dollars; only costs quoted in US cents are understood
    pub fn price_message(&self) -> String {
        match &self.estimated_cost {
            Some(cost) if cost.unit == "US Cents" => format!("${:.2}", cost.value / 100.0),
            _ => "No information on the estimated cost.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_information_messages() {
        let info: IngredientInformation = serde_json::from_str(
            r#"{"id": 9266, "name": "pineapples", "aisle": "Produce",
                "estimatedCost": {"value": 299.0, "unit": "US Cents"}}"#,
        )
        .unwrap();
        assert_eq!(info.aisle_message(), "Produce");
        assert_eq!(info.price_message(), "$2.99");

        let info: IngredientInformation =
            serde_json::from_str(r#"{"estimatedCost": {"value": 3.5, "unit": "EUR"}}"#).unwrap();
        assert_eq!(info.aisle_message(), "No information on the aisle.");
        assert_eq!(info.price_message(), "No information on the estimated cost.");
    }

    #[test]
    fn test_substitutes_from_response() {
        let response: SubstitutesResponse = serde_json::from_str(
            r#"{"status": "failure", "message": "Could not find any substitutes for that ingredient."}"#,
        )
        .unwrap();
        assert_eq!(Substitutes::from(response), Substitutes::None);

        let response: SubstitutesResponse = serde_json::from_str(
            r#"{"status": "success", "ingredient": "butter",
                "substitutes": ["1 cup = 7/8 cup shortening and 1/2 tsp salt"]}"#,
        )
        .unwrap();
        assert_eq!(
            Substitutes::from(response),
            Substitutes::Found(vec!["1 cup = 7/8 cup shortening and 1/2 tsp salt".to_string()])
        );
    }
}
