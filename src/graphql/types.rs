//! GraphQL type definitions for the BrewQL API
//!
//! Each type mirrors the upstream catalog's JSON structure field-for-field
//! and doubles as the deserialization target for upstream responses. Field
//! names are exposed in snake_case, matching the upstream JSON keys, and
//! every field is nullable because the upstream omits fields freely.

use async_graphql::{Enum, SimpleObject, ID};
use serde::{Deserialize, Deserializer};

/// Measurement unit used by the upstream catalog.
///
/// `Celcius` is the upstream API's own spelling and is kept as-is.
#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Kilograms,
    Liters,
    Grams,
    Celcius,
}

/// A (value, unit) measurement pair.
#[derive(SimpleObject, Clone, Debug, Deserialize)]
#[graphql(rename_fields = "snake_case")]
pub struct GenericUnit {
    pub value: Option<f64>,
    pub unit: Option<Unit>,
}

/// An ingredient quantity. Structurally identical to [`GenericUnit`] but a
/// distinct named type in the schema.
#[derive(SimpleObject, Clone, Debug, Deserialize)]
#[graphql(rename_fields = "snake_case")]
pub struct Amount {
    pub value: Option<f64>,
    pub unit: Option<Unit>,
}

/// Fermentation temperature
#[derive(SimpleObject, Clone, Debug, Deserialize)]
#[graphql(rename_fields = "snake_case")]
pub struct Fermentation {
    pub temp: Option<GenericUnit>,
}

/// A single mash step: temperature held for a duration in minutes
#[derive(SimpleObject, Clone, Debug, Deserialize)]
#[graphql(rename_fields = "snake_case")]
pub struct MashTemperature {
    pub temp: Option<GenericUnit>,
    pub duration: Option<i32>,
}

/// Brewing method: mash schedule plus fermentation temperature
#[derive(SimpleObject, Clone, Debug, Deserialize)]
#[graphql(rename_fields = "snake_case")]
pub struct Method {
    pub mash_temp: Option<Vec<MashTemperature>>,
    pub fermentation: Option<Fermentation>,
}

/// A malt entry in the grain bill
#[derive(SimpleObject, Clone, Debug, Deserialize)]
#[graphql(rename_fields = "snake_case")]
pub struct Malt {
    pub name: Option<String>,
    pub amount: Option<GenericUnit>,
}

/// A hop addition: quantity plus when and why it is added
#[derive(SimpleObject, Clone, Debug, Deserialize)]
#[graphql(rename_fields = "snake_case")]
pub struct Hop {
    pub name: Option<String>,
    pub amount: Option<Amount>,
    pub add: Option<String>,
    pub attribute: Option<String>,
}

/// Recipe ingredients: malts, hops, and the yeast strain
#[derive(SimpleObject, Clone, Debug, Deserialize)]
#[graphql(rename_fields = "snake_case")]
pub struct Ingredients {
    pub malt: Option<Vec<Malt>>,
    pub hops: Option<Vec<Hop>>,
    pub yeast: Option<String>,
}

/// A beer from the upstream catalog
#[derive(SimpleObject, Clone, Debug, Deserialize)]
#[graphql(rename_fields = "snake_case")]
pub struct Beer {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: Option<ID>,
    pub name: Option<String>,
    pub tagline: Option<String>,
    pub first_brewed: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub abv: Option<f64>,
    pub ibu: Option<f64>,
    pub target_fg: Option<f64>,
    pub target_og: Option<f64>,
    pub ebc: Option<f64>,
    pub srm: Option<f64>,
    pub ph: Option<f64>,
    pub attenuation_level: Option<f64>,
    pub volume: Option<GenericUnit>,
    pub boil_volume: Option<GenericUnit>,
    pub method: Option<Method>,
    pub ingredients: Option<Ingredients>,
    pub food_pairing: Option<Vec<String>>,
    pub brewers_tips: Option<String>,
    pub contributed_by: Option<String>,
}

/// The upstream serves numeric ids; expose them as ID strings.
fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<ID>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::String(s) => Some(ID(s)),
        serde_json::Value::Number(n) => Some(ID(n.to_string())),
        _ => None,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_BEER: &str = r#"{
        "id": 192,
        "name": "Punk IPA 2007 - 2010",
        "tagline": "Post Modern Classic. Spiky. Tropical. Hoppy.",
        "first_brewed": "04/2007",
        "abv": 6.0,
        "ibu": 60.0,
        "volume": { "value": 20, "unit": "liters" },
        "method": {
            "mash_temp": [{ "temp": { "value": 65, "unit": "celcius" }, "duration": 75 }],
            "fermentation": { "temp": { "value": 19, "unit": "celcius" } }
        },
        "ingredients": {
            "malt": [{ "name": "Extra Pale", "amount": { "value": 5.3, "unit": "kilograms" } }],
            "hops": [{ "name": "Ahtanum", "amount": { "value": 17.5, "unit": "grams" }, "add": "start", "attribute": "bitter" }],
            "yeast": "Wyeast 1056 - American Ale"
        },
        "food_pairing": ["Spicy carne asada with a pico de gallo sauce"],
        "brewers_tips": "While it may surprise you, this version of Punk IPA isn't dry hopped.",
        "contributed_by": "Sam Mason <samjbmason>"
    }"#;

    #[test]
    fn test_beer_deserializes_from_upstream_json() {
        let beer: Beer = serde_json::from_str(SAMPLE_BEER).unwrap();

        assert_eq!(beer.id, Some(ID("192".to_string())));
        assert_eq!(beer.name.as_deref(), Some("Punk IPA 2007 - 2010"));
        assert_eq!(beer.abv, Some(6.0));

        let volume = beer.volume.unwrap();
        assert_eq!(volume.value, Some(20.0));
        assert_eq!(volume.unit, Some(Unit::Liters));

        let method = beer.method.unwrap();
        let mash = &method.mash_temp.unwrap()[0];
        assert_eq!(mash.duration, Some(75));
        assert_eq!(mash.temp.as_ref().unwrap().unit, Some(Unit::Celcius));

        let ingredients = beer.ingredients.unwrap();
        assert_eq!(
            ingredients.yeast.as_deref(),
            Some("Wyeast 1056 - American Ale")
        );
        let hop = &ingredients.hops.unwrap()[0];
        assert_eq!(hop.add.as_deref(), Some("start"));
        assert_eq!(hop.amount.as_ref().unwrap().unit, Some(Unit::Grams));
    }

    #[test]
    fn test_beer_with_missing_fields() {
        let beer: Beer = serde_json::from_str(r#"{"name": "Nameless"}"#).unwrap();
        assert!(beer.id.is_none());
        assert!(beer.method.is_none());
        assert_eq!(beer.name.as_deref(), Some("Nameless"));
    }

    #[test]
    fn test_string_id_accepted() {
        let beer: Beer = serde_json::from_str(r#"{"id": "5"}"#).unwrap();
        assert_eq!(beer.id, Some(ID("5".to_string())));
    }
}
