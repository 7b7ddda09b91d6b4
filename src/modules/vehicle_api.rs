use log::info;
use serde::{Deserialize, Serialize};

use crate::errors::LookupError;

const VEHICLE_API_URL: &str = "https://vpic.nhtsa.dot.gov/api/vehicles";

/// # look up a make/model pair in the vehicle registry
/// queries the registry for every model of `make` and keeps the entries
/// whose model name matches `model` case-insensitively. callers that only
/// gate on existence can discard the returned entries.
pub async fn lookup_model(make: &str, model: &str) -> Result<Vec<VehicleModel>, LookupError> {
    info!(target: "querying_vehicle_api", "Getting models for make {} from api", make);
    let request_url = format!("{VEHICLE_API_URL}/GetModelsForMake/{make}?format=json");
    let response = reqwest::get(&request_url)
        .await
        .map_err(LookupError::Transport)?;

    if response.status() != reqwest::StatusCode::OK {
        return Err(LookupError::Service(response.status().as_u16()));
    }

    let body = response.text().await.map_err(LookupError::Transport)?;
    let registry: RegistryResponse =
        serde_json::from_str(&body).map_err(|error| LookupError::Malformed(error.to_string()))?;

    matching_models(registry, make, model)
}

/// filter a registry response down to the entries matching `model`
pub fn matching_models(
    registry: RegistryResponse,
    make: &str,
    model: &str,
) -> Result<Vec<VehicleModel>, LookupError> {
    let wanted = model.to_lowercase();
    let matches: Vec<VehicleModel> = registry
        .results
        .into_iter()
        .filter(|entry| entry.model_name.to_lowercase() == wanted)
        .collect();

    if matches.is_empty() {
        return Err(LookupError::NoMatch {
            make: make.to_string(),
            model: model.to_string(),
        });
    }

    Ok(matches)
}

#[derive(Debug, Deserialize)]
pub struct RegistryResponse {
    #[serde(rename = "Results")]
    pub results: Vec<VehicleModel>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct VehicleModel {
    #[serde(rename = "Make_ID")]
    pub make_id: i32,
    #[serde(rename = "Make_Name")]
    pub make_name: String,
    #[serde(rename = "Model_ID")]
    pub model_id: i32,
    #[serde(rename = "Model_Name")]
    pub model_name: String,
}
