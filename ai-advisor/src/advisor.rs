use async_openai::types::{
    ChatCompletionRequestMessageArgs, CreateChatCompletionRequestArgs, Role,
};
use async_openai::Client;
use listing_scraper::JobListing;
use thiserror::Error;

use crate::config::AdvisorConfig;
use crate::prompts;

// Bounded number of automated turns before giving up on a usable completion.
const MAX_ATTEMPTS: u32 = 3;

#[derive(Debug, Error)]
pub enum Error {
    #[error("OpenAI error: '{0}'")]
    OpenAI(#[from] async_openai::error::OpenAIError),
    #[error("Model returned no usable completion after {MAX_ATTEMPTS} attempts")]
    EmptyCompletion,
}

type Result<T> = std::result::Result<T, Error>;

/// LLM collaborator for application material. Every public method follows the
/// same contract: it returns generated text on success and a descriptive
/// error string on failure, never an error value. The presentation layer can
/// render whatever comes back.
pub struct Advisor {
    client: Client,
    model: String,
}

impl Advisor {
    pub fn new(config: &AdvisorConfig) -> Self {
        Self {
            client: Client::new().with_api_key(config.api_key.clone()),
            model: config.model.clone(),
        }
    }

    pub async fn cover_letter(&self, job: &JobListing, skills: &[String], bio: &str) -> String {
        let prompt = prompts::cover_letter(job, skills, bio);
        match self.complete(prompts::COVER_LETTER_SYSTEM, &prompt).await {
            Ok(text) => text,
            Err(e) => {
                log::error!("cover letter generation failed: {}", e);
                format!("Error generating cover letter: {}", e)
            }
        }
    }

    pub async fn interview_tips(&self, job_title: &str, company: &str, skills: &[String]) -> String {
        let prompt = prompts::interview_tips(job_title, company, skills);
        match self.complete(prompts::ADVISOR_SYSTEM, &prompt).await {
            Ok(text) => text,
            Err(e) => {
                log::error!("interview tip generation failed: {}", e);
                format!("Could not generate interview tips: {}", e)
            }
        }
    }

    pub async fn salary_estimate(
        &self,
        job_title: &str,
        location: &str,
        requirements: &str,
    ) -> String {
        let prompt = prompts::salary_estimate(job_title, location, requirements);
        match self.complete(prompts::ADVISOR_SYSTEM, &prompt).await {
            Ok(text) => text,
            Err(e) => {
                log::error!("salary estimate generation failed: {}", e);
                format!("Could not generate salary estimate: {}", e)
            }
        }
    }

    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        for attempt in 1..=MAX_ATTEMPTS {
            let request = CreateChatCompletionRequestArgs::default()
                .model(self.model.as_str())
                .messages([
                    ChatCompletionRequestMessageArgs::default()
                        .role(Role::System)
                        .content(system)
                        .build()?,
                    ChatCompletionRequestMessageArgs::default()
                        .role(Role::User)
                        .content(user)
                        .build()?,
                ])
                .build()?;
            match self.client.chat().create(request).await {
                Ok(response) => {
                    let content = response
                        .choices
                        .last()
                        .map(|choice| choice.message.content.trim().to_owned())
                        .unwrap_or_default();
                    if !content.is_empty() {
                        return Ok(content);
                    }
                    log::warn!(
                        "model returned an empty completion, attempt {}/{}",
                        attempt,
                        MAX_ATTEMPTS
                    );
                }
                Err(e) => {
                    log::warn!(
                        "chat completion failed, attempt {}/{}, error: {}",
                        attempt,
                        MAX_ATTEMPTS,
                        e
                    );
                    if attempt == MAX_ATTEMPTS {
                        return Err(e.into());
                    }
                }
            }
        }
        Err(Error::EmptyCompletion)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn job() -> JobListing {
        JobListing::new(
            "Java Developer".to_owned(),
            "Acme".to_owned(),
            "Location: Remote".to_owned(),
            "https://www.linkedin.com/jobs/view/1234567".to_owned(),
        )
    }

    #[tokio::test]
    #[ignore] // live call, needs a valid OPENAI_API_KEY
    async fn test_cover_letter_live() {
        dotenv::dotenv().ok();
        let _ = env_logger::builder().is_test(true).try_init();
        let config = AdvisorConfig::from_env().expect("OPENAI_API_KEY not set");
        let advisor = Advisor::new(&config);
        let skills = vec!["Java".to_owned(), "SQL".to_owned()];
        let letter = advisor
            .cover_letter(&job(), &skills, "3 years of Java development.")
            .await;
        assert!(!letter.is_empty());
        assert!(!letter.starts_with("Error generating cover letter"));
    }

    #[tokio::test]
    #[ignore] // exercises the real http path, just against a bogus key
    async fn test_failures_become_error_strings() {
        let config = AdvisorConfig::new("sk-invalid");
        let advisor = Advisor::new(&config);
        let letter = advisor.cover_letter(&job(), &[], "bio").await;
        assert!(letter.starts_with("Error generating cover letter:"));
        let tips = advisor.interview_tips("Java Developer", "Acme", &[]).await;
        assert!(tips.starts_with("Could not generate interview tips:"));
    }
}
