//! Question answering over the session corpus.
//!
//! Ties the pieces together: check the corpus, retrieve the top-k
//! chunks, join them into a context string, and hand context plus
//! question to the completion client. Whatever the outcome, the session
//! transcript gains the question and the reply (errors are rendered to
//! their user-facing text), so the visible conversation always reflects
//! what happened.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use crate::completion::{CompletionClient, HttpCompletionClient, SYSTEM_PROMPT};
use crate::config::Config;
use crate::models::ChatMessage;
use crate::search;
use crate::session::{ChatError, Session};

/// Answer a question against the session corpus.
///
/// Appends the question and the reply (or the rendered error) to the
/// transcript before returning.
pub async fn answer(
    session: &mut Session,
    client: &dyn CompletionClient,
    config: &Config,
    question: &str,
) -> Result<String, ChatError> {
    session.push_user(question);
    let result = answer_inner(session, client, config, question).await;
    match &result {
        Ok(reply) => session.push_assistant(reply.clone()),
        Err(e) => session.push_assistant(e.to_string()),
    }
    result
}

async fn answer_inner(
    session: &Session,
    client: &dyn CompletionClient,
    config: &Config,
    question: &str,
) -> Result<String, ChatError> {
    if session.is_empty() {
        return Err(ChatError::EmptyCorpus);
    }

    let results = search::retrieve(question, session.chunks(), config.retrieval.top_k);
    if results.is_empty() {
        return Err(ChatError::NoMatch);
    }

    let context = results
        .iter()
        .map(|r| r.chunk.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n");

    let messages = vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::system(format!("Document Context:\n{}", context)),
        ChatMessage::user(question),
    ];

    client
        .complete(&messages)
        .await
        .map_err(|e| ChatError::Upstream(e.to_string()))
}

/// Resolve a question from the CLI surface and return the text to print.
///
/// The corpus check happens before the HTTP client is built, so a
/// missing API key never masks the "process documents first" message.
async fn handle_question(session: &mut Session, config: &Config, question: &str) -> String {
    if session.is_empty() {
        let e = ChatError::EmptyCorpus;
        session.push_user(question);
        session.push_assistant(e.to_string());
        return e.to_string();
    }

    match HttpCompletionClient::new(&config.api) {
        Ok(client) => match answer(session, &client, config, question).await {
            Ok(reply) => reply,
            Err(e) => e.to_string(),
        },
        Err(e) => {
            let rendered = ChatError::Upstream(e.to_string()).to_string();
            session.push_user(question);
            session.push_assistant(rendered.clone());
            rendered
        }
    }
}

/// One-shot question: process the given files, answer, print.
pub async fn run_ask(config: &Config, question: &str, files: &[PathBuf]) -> Result<()> {
    let mut session = Session::new();

    if !files.is_empty() {
        match session.process_files(files, &config.chunking) {
            Ok(stats) => println!("{}", stats),
            Err(e) => println!("{}", e),
        }
    }

    let reply = handle_question(&mut session, config, question).await;
    println!("{}", reply);
    Ok(())
}

/// Interactive chat loop over stdin.
///
/// Lines starting with `/` are commands (`/load <files…>`, `/clear`,
/// `/quit`); everything else is a question. The prompt and banner are
/// only shown when stdin is a terminal, so piped input stays clean.
pub async fn run_chat(config: &Config, files: &[PathBuf]) -> Result<()> {
    let mut session = Session::new();

    if !files.is_empty() {
        match session.process_files(files, &config.chunking) {
            Ok(stats) => println!("{}", stats),
            Err(e) => println!("{}", e),
        }
    }

    let interactive = atty::is(atty::Stream::Stdin);
    if interactive {
        println!("docchat — ask questions about your documents.");
        println!("Commands: /load <files…>, /clear, /quit");
    }

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if interactive {
            print!("> ");
            std::io::stdout().flush()?;
        }

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let command = line.split_whitespace().next().unwrap_or("");
        if command == "/load" {
            let paths: Vec<PathBuf> = line
                .split_whitespace()
                .skip(1)
                .map(PathBuf::from)
                .collect();
            match session.process_files(&paths, &config.chunking) {
                Ok(stats) => println!("{}", stats),
                Err(e) => println!("{}", e),
            }
            continue;
        }

        match line {
            "/clear" => {
                session.clear();
                println!("Cleared. Load documents to start again.");
            }
            "/quit" | "/exit" => break,
            _ if line.starts_with('/') => {
                println!("Unknown command: {}. Commands: /load, /clear, /quit", line);
            }
            question => {
                let reply = handle_question(&mut session, config, question).await;
                println!("{}", reply);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChunkingConfig;
    use async_trait::async_trait;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Records every call and replies with a canned string or error.
    struct MockClient {
        reply: Option<String>,
        calls: Mutex<Vec<Vec<ChatMessage>>>,
    }

    impl MockClient {
        fn replying(reply: &str) -> Self {
            Self {
                reply: Some(reply.to_string()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                reply: None,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl CompletionClient for MockClient {
        async fn complete(&self, messages: &[ChatMessage]) -> anyhow::Result<String> {
            self.calls.lock().unwrap().push(messages.to_vec());
            match &self.reply {
                Some(r) => Ok(r.clone()),
                None => anyhow::bail!("connection refused"),
            }
        }
    }

    fn session_with_document(text: &str) -> (TempDir, Session) {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("doc.txt");
        fs::write(&path, text).unwrap();
        let mut session = Session::new();
        session
            .process_files(&[path], &ChunkingConfig::default())
            .unwrap();
        (tmp, session)
    }

    fn reactor_text() -> String {
        std::iter::repeat("the reactor manual describes the throttle procedure")
            .take(10)
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[tokio::test]
    async fn test_empty_corpus_is_usage_error() {
        let mut session = Session::new();
        let client = MockClient::replying("unused");
        let cfg = Config::default();

        let err = answer(&mut session, &client, &cfg, "anything").await.unwrap_err();
        assert!(matches!(err, ChatError::EmptyCorpus));
        assert_eq!(client.call_count(), 0);
        assert_eq!(session.transcript().len(), 2);
    }

    #[tokio::test]
    async fn test_no_overlap_reports_no_match_without_calling_api() {
        let (_tmp, mut session) = session_with_document(&reactor_text());
        let client = MockClient::replying("unused");
        let cfg = Config::default();

        let err = answer(&mut session, &client, &cfg, "zebra migration").await.unwrap_err();
        assert!(matches!(err, ChatError::NoMatch));
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_answer_sends_context_and_question() {
        let (_tmp, mut session) = session_with_document(&reactor_text());
        let client = MockClient::replying("Open the throttle slowly.");
        let cfg = Config::default();

        let reply = answer(&mut session, &client, &cfg, "how does the throttle work")
            .await
            .unwrap();
        assert_eq!(reply, "Open the throttle slowly.");

        let calls = client.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let messages = &calls[0];
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].role, "system");
        assert!(messages[1].content.starts_with("Document Context:"));
        assert!(messages[1].content.contains("reactor manual"));
        assert_eq!(messages[2].role, "user");
        assert_eq!(messages[2].content, "how does the throttle work");
    }

    #[tokio::test]
    async fn test_transcript_records_question_and_reply() {
        let (_tmp, mut session) = session_with_document(&reactor_text());
        let client = MockClient::replying("Use the manual.");
        let cfg = Config::default();

        answer(&mut session, &client, &cfg, "where is the throttle").await.unwrap();

        let transcript = session.transcript();
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[0].role, "user");
        assert_eq!(transcript[0].content, "where is the throttle");
        assert_eq!(transcript[1].role, "assistant");
        assert_eq!(transcript[1].content, "Use the manual.");
    }

    #[tokio::test]
    async fn test_upstream_failure_is_rendered_into_transcript() {
        let (_tmp, mut session) = session_with_document(&reactor_text());
        let client = MockClient::failing();
        let cfg = Config::default();

        let err = answer(&mut session, &client, &cfg, "throttle").await.unwrap_err();
        assert!(matches!(err, ChatError::Upstream(_)));

        let transcript = session.transcript();
        assert_eq!(transcript.len(), 2);
        assert!(transcript[1].content.contains("Error communicating"));
    }

    #[tokio::test]
    async fn test_clear_then_ask_reports_empty_corpus_not_no_match() {
        let (_tmp, mut session) = session_with_document(&reactor_text());
        let client = MockClient::replying("unused");
        let cfg = Config::default();

        session.clear();
        let err = answer(&mut session, &client, &cfg, "throttle").await.unwrap_err();
        assert!(matches!(err, ChatError::EmptyCorpus));
    }

    #[tokio::test]
    async fn test_top_k_limits_context_chunks() {
        let long = std::iter::repeat("turbine blade maintenance schedule entry")
            .take(60)
            .collect::<Vec<_>>()
            .join(" ");
        let (_tmp, mut session) = session_with_document(&long);
        assert!(session.chunks().len() > 3);

        let client = MockClient::replying("ok");
        let cfg = Config::default();
        answer(&mut session, &client, &cfg, "turbine maintenance").await.unwrap();

        let calls = client.calls.lock().unwrap();
        let context = &calls[0][1].content;
        // Joined with blank lines: top_k chunks means top_k - 1 separators.
        let sections = context.split("\n\n").count();
        assert!(sections <= cfg.retrieval.top_k);
    }
}
