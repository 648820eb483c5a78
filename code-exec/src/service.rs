use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, error, info, info_span, Instrument};
use uuid::Uuid;

use crate::{
    directives,
    error::Error,
    executor::{ExecutionBackend, PasteService},
    languages::{normalize_code, normalize_token, resolve, LanguageCatalog, WrapTemplates},
    postprocess::ResultPostProcessor,
    request::RequestBuilder,
    types::{ExecutionOptions, ExecutionRequest},
};

/// Runs submissions end to end: compile the request, call the backend,
/// render the result.
///
/// Cloning is cheap; the tables and collaborators are shared read-only.
#[derive(Clone)]
pub struct CodeExecutionService {
    catalog: Arc<LanguageCatalog>,
    templates: Arc<WrapTemplates>,
    backend: Arc<dyn ExecutionBackend>,
    paste: Arc<dyn PasteService>,
    semaphore: Arc<Semaphore>,
}

impl CodeExecutionService {
    pub fn new(
        catalog: LanguageCatalog,
        templates: WrapTemplates,
        backend: Arc<dyn ExecutionBackend>,
        paste: Arc<dyn PasteService>,
        max_concurrent_executions: usize,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            templates: Arc::new(templates),
            backend,
            paste,
            semaphore: Arc::new(Semaphore::new(max_concurrent_executions)),
        }
    }

    pub fn catalog(&self) -> &LanguageCatalog {
        &self.catalog
    }

    /// Turns a language token and submission text into a validated request.
    ///
    /// This is the only validation gate: no request exists for a language
    /// that failed to resolve or to wrap.
    pub fn compile(
        &self,
        language: &str,
        text: &str,
    ) -> Result<(ExecutionRequest, ExecutionOptions), Error> {
        let submission = directives::extract(text);
        let options = submission.options;
        debug!(
            "Extracted submission: stats={} wrapped={} stdin={} bytes",
            options.stats,
            options.wrapped,
            submission.stdin.len()
        );

        let language = resolve(&self.catalog, &normalize_token(language))?;

        let mut code = normalize_code(&submission.code);
        if options.wrapped {
            code = self.templates.wrap(&language, &code)?;
        }

        let request = RequestBuilder::new(language)
            .with_directives(submission)
            .with_code(code)
            .build();

        Ok((request, options))
    }

    /// Compiles and runs a submission, returning the message to post.
    pub async fn execute(&self, language: &str, text: &str) -> Result<String, Error> {
        let (request, options) = self.compile(language, text)?;

        // Acquire execution permit
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|e| Error::System(format!("Failed to acquire execution permit: {}", e)))?;

        debug!("Starting code execution for language: {}", request.language);
        let result = self.backend.execute(&request).await?;

        let rendered = ResultPostProcessor::render(&result, options, self.paste.as_ref()).await;
        Ok(rendered.to_string())
    }

    /// Entry point for callers: always yields a message, never an error.
    pub async fn run(&self, language: &str, text: &str) -> String {
        let span = info_span!("submission", id = %Uuid::new_v4(), language);

        async {
            match self.execute(language, text).await {
                Ok(output) => {
                    info!("Code execution completed successfully");
                    output
                }
                Err(e @ Error::UnknownLanguage { .. }) | Err(e @ Error::WrapRejected(_)) => {
                    info!("Submission rejected: {}", e);
                    e.user_message()
                }
                Err(e) => {
                    error!("Code execution failed: {}", e);
                    e.user_message()
                }
            }
        }
        .instrument(span)
        .await
    }

    pub fn get_available_slots(&self) -> usize {
        self.semaphore.available_permits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::{MockExecutionBackend, MockPasteService};
    use std::collections::HashMap;

    fn service(backend: MockExecutionBackend, max_concurrent: usize) -> CodeExecutionService {
        let defaults: HashMap<String, String> = [("python".to_string(), "python3".to_string())]
            .into_iter()
            .collect();
        let catalog = LanguageCatalog::new(
            ["python3", "rust", "cs-csi"],
            LanguageCatalog::default_aliases(),
            defaults,
        )
        .unwrap();

        CodeExecutionService::new(
            catalog,
            WrapTemplates::default(),
            Arc::new(backend),
            Arc::new(MockPasteService::new()),
            max_concurrent,
        )
    }

    #[test]
    fn test_compile_resolves_alias() -> Result<(), Error> {
        let service = service(MockExecutionBackend::new(), 1);
        let (request, options) = service.compile("`PY`", "print(1)")?;

        assert_eq!(request.language, "python3");
        assert_eq!(request.code, "print(1)");
        assert_eq!(options, ExecutionOptions::default());
        Ok(())
    }

    #[test]
    fn test_compile_wraps_code() -> Result<(), Error> {
        let service = service(MockExecutionBackend::new(), 1);
        let (request, options) = service.compile("rs", "--wrapped println!(\"hi\");")?;

        assert!(options.wrapped);
        assert_eq!(request.code, "fn main() {\nprintln!(\"hi\");\n}");
        Ok(())
    }

    #[test]
    fn test_compile_rejects_excluded_wrap() {
        let service = service(MockExecutionBackend::new(), 1);
        let err = service.compile("cs-csi", "--wrapped 1 + 1").unwrap_err();
        assert!(matches!(err, Error::WrapRejected(_)));
    }

    #[tokio::test]
    async fn test_unknown_language_never_reaches_backend() {
        let mut backend = MockExecutionBackend::new();
        backend.expect_execute().never();

        let output = service(backend, 1).run("pyth", "print(1)").await;
        assert_eq!(output, "`pyth` not available. Did you mean:\npython3");
    }

    #[tokio::test]
    async fn test_backend_failure_becomes_message() {
        let mut backend = MockExecutionBackend::new();
        backend
            .expect_execute()
            .returning(|_| Err(Error::Backend("status code: 502".to_string())));

        let output = service(backend, 1).run("py", "print(1)").await;
        assert_eq!(
            output,
            "An error occurred while running your code (status code: 502). Retry later."
        );
    }

    #[tokio::test]
    async fn test_concurrent_executions() -> Result<(), Error> {
        let mut backend = MockExecutionBackend::new();
        backend
            .expect_execute()
            .times(3)
            .returning(|request| Ok(format!("Hello from {}", request.language)));
        let service = service(backend, 2);

        let mut handles = vec![];
        for _ in 0..3 {
            let service = service.clone();
            handles.push(tokio::spawn(async move {
                service.execute("python", "print('Hello')").await
            }));
        }

        for handle in handles {
            let output = handle.await.unwrap()?;
            assert_eq!(output, "```\nHello from python3\n```");
        }
        assert_eq!(service.get_available_slots(), 2);

        Ok(())
    }
}
