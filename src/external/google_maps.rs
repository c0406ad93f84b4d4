use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    error::{invalid_input_error, upstream_error, Error},
    external::DistanceProvider,
};

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Response {
    status: String,
    #[serde(default)]
    rows: Vec<Row>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Row {
    elements: Vec<Element>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Element {
    status: String,
    distance: Option<Distance>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Distance {
    /// Metres.
    value: u64,
}

/// Distance Matrix API client.
#[derive(Clone, Debug)]
pub struct GoogleMaps {
    client: reqwest::Client,
    api_base: String,
    api_key: String,
}

impl GoogleMaps {
    pub fn new(api_base: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base,
            api_key,
        }
    }
}

#[async_trait]
impl DistanceProvider for GoogleMaps {
    #[tracing::instrument(skip(self))]
    async fn distance_km(&self, origin: &str, destination: &str) -> Result<f64, Error> {
        let url = format!("https://{}/maps/api/distancematrix/json", self.api_base);

        let res = self
            .client
            .get(url)
            .query(&[("key", self.api_key.as_str())])
            .query(&[("origins", origin)])
            .query(&[("destinations", destination)])
            .query(&[("units", "metric")])
            .send()
            .await?;

        check_status(res.status().as_u16())?;

        let data: Response = res.json().await?;

        distance_from_response(data)
    }
}

/// Any non-200 reply is the provider's failure, never the caller's input.
fn check_status(status_code: u16) -> Result<(), Error> {
    if status_code != 200 {
        tracing::warn!(status_code, "distance provider returned non-OK status");
        return Err(upstream_error());
    }

    Ok(())
}

fn distance_from_response(data: Response) -> Result<f64, Error> {
    if data.status != "OK" {
        tracing::warn!(status = %data.status, "distance matrix request failed");
        return Err(upstream_error());
    }

    let element = data
        .rows
        .into_iter()
        .next()
        .and_then(|row| row.elements.into_iter().next())
        .ok_or_else(upstream_error)?;

    match element.status.as_str() {
        "OK" => {
            let distance = element.distance.ok_or_else(upstream_error)?;
            Ok(distance.value as f64 / 1000.0)
        }
        "NOT_FOUND" | "ZERO_RESULTS" => Err(invalid_input_error(
            "no route found between pickup and drop locations",
        )),
        _ => Err(upstream_error()),
    }
}
