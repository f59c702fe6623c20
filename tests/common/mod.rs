#![allow(dead_code)]

use async_trait::async_trait;
use httpmock::MockServer;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use umrahflex_admin::core::{RegionContent, Surface};
use umrahflex_admin::{Api, HttpTransport};

/// Records everything the API layer shows to the user.
pub struct RecordingSurface {
    confirm_answer: bool,
    pub prompts: Mutex<Vec<String>>,
    pub toasts: Mutex<Vec<String>>,
    pub alerts: Mutex<Vec<String>>,
    pub rendered: Mutex<Vec<(String, RegionContent)>>,
}

impl RecordingSurface {
    pub fn new(confirm_answer: bool) -> Arc<Self> {
        Arc::new(Self {
            confirm_answer,
            prompts: Mutex::new(Vec::new()),
            toasts: Mutex::new(Vec::new()),
            alerts: Mutex::new(Vec::new()),
            rendered: Mutex::new(Vec::new()),
        })
    }

    pub fn toasts(&self) -> Vec<String> {
        self.toasts.lock().unwrap().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Surface for RecordingSurface {
    fn contains(&self, region: &str) -> bool {
        region == "content"
    }

    fn replace(&self, region: &str, content: RegionContent) {
        self.rendered
            .lock()
            .unwrap()
            .push((region.to_string(), content));
    }

    fn toast(&self, message: &str, _ttl: Duration) {
        self.toasts.lock().unwrap().push(message.to_string());
    }

    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }

    async fn confirm(&self, prompt: &str) -> bool {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.confirm_answer
    }
}

pub fn api_for(server: &MockServer, surface: Arc<RecordingSurface>) -> Api {
    let transport = HttpTransport::new(&server.url("/api")).unwrap();
    Api::new(Arc::new(transport), surface, Duration::from_secs(3))
}

pub fn api_at(base_url: &str, surface: Arc<RecordingSurface>) -> Api {
    let transport = HttpTransport::new(base_url).unwrap();
    Api::new(Arc::new(transport), surface, Duration::from_secs(3))
}
