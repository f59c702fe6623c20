use crate::domain::ports::{RegionContent, Surface};
use async_trait::async_trait;
use std::collections::HashSet;
use std::io::{BufRead, Write};
use std::time::Duration;

/// Renders dashboard feedback on stderr so stdout carries only command output. Regions are
/// named output sections; a toast is a single line since a terminal cannot take it back
/// after `ttl`.
#[derive(Debug, Clone, Default)]
pub struct TerminalSurface {
    regions: HashSet<String>,
    assume_yes: bool,
}

impl TerminalSurface {
    pub fn new<I, S>(regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            regions: regions.into_iter().map(Into::into).collect(),
            assume_yes: false,
        }
    }

    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }
}

#[async_trait]
impl Surface for TerminalSurface {
    fn contains(&self, region: &str) -> bool {
        self.regions.contains(region)
    }

    fn replace(&self, region: &str, content: RegionContent) {
        match content {
            RegionContent::Loading => eprintln!("⏳ [{}] Loading...", region),
            RegionContent::Error(message) => eprintln!("❌ [{}] {}", region, message),
        }
    }

    fn toast(&self, message: &str, _ttl: Duration) {
        eprintln!("✅ {}", message);
    }

    fn alert(&self, message: &str) {
        eprintln!("❌ {}", message);
    }

    async fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        let prompt = prompt.to_string();
        let answer = tokio::task::spawn_blocking(move || {
            eprint!("{} [y/N] ", prompt);
            let _ = std::io::stderr().flush();
            let mut line = String::new();
            std::io::stdin().lock().read_line(&mut line).map(|_| line)
        })
        .await;

        match answer {
            Ok(Ok(line)) => is_yes(&line),
            Ok(Err(e)) => {
                tracing::warn!("Could not read confirmation: {}", e);
                false
            }
            Err(e) => {
                tracing::warn!("Confirmation prompt failed: {}", e);
                false
            }
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
