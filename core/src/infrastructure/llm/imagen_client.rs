use std::time::Duration;

use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        recipe::{
            ports::ImageClient,
            value_objects::{GeneratedImage, ImageOptions},
        },
    },
    infrastructure::llm::build_http_client,
};

/// Client for the Imagen `predict` endpoint
#[derive(Debug, Clone)]
pub struct ImagenClient {
    api_key: String,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct PredictRequest {
    instances: Vec<Instance>,
    parameters: Parameters,
}

#[derive(Debug, Serialize)]
struct Instance {
    prompt: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Parameters {
    sample_count: u32,
    aspect_ratio: String,
    output_options: OutputOptions,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OutputOptions {
    mime_type: String,
}

impl PredictRequest {
    fn new(prompt: String, options: &ImageOptions) -> Self {
        Self {
            instances: vec![Instance { prompt }],
            parameters: Parameters {
                sample_count: options.number_of_images,
                aspect_ratio: options.aspect_ratio.clone(),
                output_options: OutputOptions {
                    mime_type: options.output_mime_type.clone(),
                },
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    bytes_base64_encoded: Option<String>,
    mime_type: Option<String>,
}

impl ImagenClient {
    pub fn new(
        api_key: String,
        model_name: String,
        base_url: String,
        timeout: Duration,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            api_key,
            model_name,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: build_http_client(timeout)?,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:predict?key={}",
            self.base_url, self.model_name, self.api_key
        )
    }
}

/// Take the first usable prediction. A payload that is not valid base64 is
/// an error, an empty prediction list is not.
fn first_image(
    response: PredictResponse,
    requested_mime_type: &str,
) -> Result<Option<GeneratedImage>, CoreError> {
    let Some(prediction) = response.predictions.into_iter().next() else {
        return Ok(None);
    };

    let Some(data) = prediction.bytes_base64_encoded.filter(|d| !d.is_empty()) else {
        return Ok(None);
    };

    general_purpose::STANDARD
        .decode(&data)
        .map_err(|e| CoreError::Image(format!("Invalid image payload: {}", e)))?;

    Ok(Some(GeneratedImage {
        mime_type: prediction
            .mime_type
            .unwrap_or_else(|| requested_mime_type.to_string()),
        base64_data: data,
    }))
}

impl ImageClient for ImagenClient {
    #[instrument(skip(self, prompt, options))]
    async fn generate_image(
        &self,
        prompt: String,
        options: ImageOptions,
    ) -> Result<Option<GeneratedImage>, CoreError> {
        let request = PredictRequest::new(prompt, &options);

        let response = self
            .client
            .post(self.endpoint())
            .json(&request)
            .send()
            .await
            .map_err(|e| CoreError::Image(format!("Image API error: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(CoreError::Image(format!(
                "Image API returned error: {} - {}",
                status, error_text
            )));
        }

        let predict_response: PredictResponse = response
            .json()
            .await
            .map_err(|e| CoreError::Image(format!("Failed to parse image response: {}", e)))?;

        first_image(predict_response, &options.output_mime_type)
    }
}
