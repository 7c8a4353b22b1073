//! TUI-less "say" command

use std::error::Error;
use std::io::{self, Write};

use tracing::debug;

use crate::api::client::{fetch_reply, ModelClient, ReplyRequest};
use crate::cli::launch::LaunchSettings;
use crate::core::transcript::Transcript;

/// Send one prompt against a fresh transcript and print the reply.
pub async fn run_say(
    prompt: Vec<String>,
    settings: LaunchSettings,
    client: &dyn ModelClient,
) -> Result<(), Box<dyn Error>> {
    let reply = ask_once(&prompt.join(" "), &settings, client).await?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{reply}")?;
    stdout.flush()?;
    Ok(())
}

async fn ask_once(
    prompt: &str,
    settings: &LaunchSettings,
    client: &dyn ModelClient,
) -> Result<String, Box<dyn Error>> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err("Usage: dsa-sage say <prompt>".into());
    }

    let request = ReplyRequest {
        model: settings.model.clone(),
        system_instruction: settings.system_instruction.clone(),
        history: Transcript::new().history(),
        message: prompt.to_string(),
    };
    debug!(model = %request.model, "sending one-shot prompt");
    Ok(fetch_reply(client, request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::ApiError;
    use crate::core::config::data::Config;
    use crate::core::constants::GREETING;
    use async_trait::async_trait;

    struct RecordingClient;

    #[async_trait]
    impl ModelClient for RecordingClient {
        async fn generate(&self, request: ReplyRequest) -> Result<String, ApiError> {
            assert_eq!(request.history.len(), 1);
            assert_eq!(request.history[0].parts[0].text, GREETING);
            Ok(format!("{} via {}", request.message, request.model))
        }
    }

    fn settings() -> LaunchSettings {
        LaunchSettings::resolve(&Config::default(), Some("say-model"), None)
    }

    #[tokio::test]
    async fn prompt_is_sent_after_greeting() {
        let reply = ask_once("  define amortized  ", &settings(), &RecordingClient)
            .await
            .expect("reply");
        assert_eq!(reply, "define amortized via say-model");
    }

    #[tokio::test]
    async fn blank_prompt_is_rejected() {
        let err = ask_once("   ", &settings(), &RecordingClient)
            .await
            .expect_err("blank prompt");
        assert!(err.to_string().contains("Usage"));
    }
}
