#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use icpgen::error::{CollectionFailure, Error, Result};
use icpgen::models::{RawReview, SearchOptions};
use icpgen::{ReviewSourceProvider, TextGenerationService};

/// Replays queued responses in order; errors once the queue is empty.
pub struct QueueGenerator {
    responses: Mutex<VecDeque<String>>,
    pub prompts: Mutex<Vec<String>>,
}

impl QueueGenerator {
    pub fn new(responses: &[&str]) -> Self {
        Self {
            responses: Mutex::new(responses.iter().map(|r| r.to_string()).collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl TextGenerationService for QueueGenerator {
    async fn generate(&self, prompt: &str, _system_prompt: Option<&str>) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| Error::LLMApi("no queued response".to_string()))
    }

    fn name(&self) -> &str {
        "queue"
    }
}

/// Review source failing with `reason` for the first `failures` calls.
pub struct StubReviewSource {
    failures: u32,
    reason: CollectionFailure,
    reviews: Vec<RawReview>,
    pub calls: Mutex<u32>,
}

impl StubReviewSource {
    pub fn new(reviews: Vec<RawReview>) -> Self {
        Self {
            failures: 0,
            reason: CollectionFailure::ProviderError,
            reviews,
            calls: Mutex::new(0),
        }
    }

    pub fn failing(failures: u32, reason: CollectionFailure) -> Self {
        Self {
            failures,
            reason,
            reviews: Vec::new(),
            calls: Mutex::new(0),
        }
    }

    pub fn call_count(&self) -> u32 {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl ReviewSourceProvider for StubReviewSource {
    async fn search_reviews(
        &self,
        _company_name: &str,
        options: &SearchOptions,
    ) -> Result<Vec<RawReview>> {
        let call = {
            let mut calls = self.calls.lock().unwrap();
            *calls += 1;
            *calls
        };
        if call <= self.failures {
            return Err(Error::collection(self.reason, format!("stub failure {}", call)));
        }

        let mut reviews = self.reviews.clone();
        if let Some(max) = options.max_results {
            reviews.truncate(max);
        }
        Ok(reviews)
    }

    fn name(&self) -> &str {
        "stub"
    }
}

pub fn review(text: &str, rating: Option<f32>, source: &str) -> RawReview {
    RawReview {
        text: text.to_string(),
        rating,
        date: Some("2024-06-01".to_string()),
        source: Some(source.to_string()),
        platform: None,
    }
}

pub const FULL_ICP: &str = "SEGMENTS: Busy commuters, Remote workers\n\
PERSONAS: Coffee lover, Office manager\n\
PAINS: Long queues, Inconsistent quality\n\
JOBS: Grab coffee on the way to work\n\
OUTCOMES: Fast service, Reliable taste\n\
TRIGGERS: New office nearby\n\
OBJECTIONS: Price\n\
VALUE_PROP: Great coffee without the wait.\n\
FEATURES: Mobile ordering, Loyalty card\n\
ADVANTAGES: Faster than chains\n\
CHANNELS: Instagram, Google Maps\n\
MESSAGES: Skip the line\n\
CONTENT: Barista tips";
