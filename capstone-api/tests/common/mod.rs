#![allow(dead_code)]

use actix_web::{test, web, App};
use capstone_api::config::CorsConfig;
use capstone_api::generator::{GenerationSettings, ProjectGenerator};
use capstone_api::{build_cors, configure_routes};
use capstone_llm_sdk::client::LlmClient;
use capstone_llm_sdk::error::LlmError;
use capstone_llm_sdk::types::{CompletionRequest, CompletionResponse};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub struct TestApp<S> {
    pub mock_llm_client: Arc<MockLlmClient>,
    pub app: S,
}

pub struct MockLlmClient {
    pub responses: Arc<Mutex<VecDeque<Result<CompletionResponse, LlmError>>>>,
    pub call_count: Arc<Mutex<usize>>,
    pub prompts: Arc<Mutex<Vec<String>>>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        MockLlmClient {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            call_count: Arc::new(Mutex::new(0)),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn push_text(&self, text: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(CompletionResponse::text(text)));
    }

    pub fn push_error(&self, error: LlmError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let mut call_count = self.call_count.lock().unwrap();
        *call_count += 1;
        drop(call_count);

        let prompt = request
            .messages
            .iter()
            .map(|m| m.joined_text())
            .collect::<Vec<_>>()
            .join("\n");
        self.prompts.lock().unwrap().push(prompt);

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(LlmError::internal("no mock response queued")))
    }

    fn provider_name(&self) -> &str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

pub const SAMPLE_PROJECT: &str = r#"{
  "title": "AI-Assisted Patient Triage System",
  "tools": "Python, TensorFlow, Flask, PostgreSQL",
  "language": "Python",
  "duration": "12",
  "gantt": [
    { "task": "Research", "start": 1, "end": 3 },
    { "task": "Build", "start": 4, "end": 12 }
  ],
  "buildSteps": [
    "Step 1: Gather datasets",
    "Step 2: Train model",
    "Step 3: Deploy API"
  ]
}"#;

pub async fn setup_test_app() -> TestApp<
    impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse<actix_web::body::EitherBody<actix_web::body::BoxBody>>,
        Error = actix_web::Error,
    >,
> {
    let mock_llm_client = Arc::new(MockLlmClient::new());
    let llm_client = mock_llm_client.clone() as Arc<dyn LlmClient>;
    let generator = web::Data::new(ProjectGenerator::new(
        llm_client,
        GenerationSettings::default(),
    ));

    let app = test::init_service(
        App::new()
            .wrap(build_cors(&CorsConfig::default()))
            .app_data(generator)
            .configure(configure_routes),
    )
    .await;

    TestApp {
        mock_llm_client,
        app,
    }
}
