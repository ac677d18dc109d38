use crate::application::dto::LoadOutcome;
use crate::application::page_context::PageContext;
use crate::compatibility::domain::{ComponentCategory, ComponentOption};
use crate::compatibility::policies::ItemResolution;
use crate::ports::outbound::{HttpTransport, ProgressReporter, SelectWidget};
use crate::shared::error::CheckerError;
use futures::future::join_all;
use std::sync::atomic::{AtomicUsize, Ordering};

/// LoadComponentsUseCase - fills the category widgets from the backend
///
/// Each category is loaded independently: a failing list is logged and
/// leaves its widget as it was, and never affects the other categories.
///
/// # Type Parameters
/// * `T` - HttpTransport implementation
/// * `PR` - ProgressReporter implementation
pub struct LoadComponentsUseCase<T, PR> {
    transport: T,
    progress_reporter: PR,
}

impl<T, PR> LoadComponentsUseCase<T, PR>
where
    T: HttpTransport,
    PR: ProgressReporter,
{
    /// Creates a new LoadComponentsUseCase with injected dependencies
    pub fn new(transport: T, progress_reporter: PR) -> Self {
        Self {
            transport,
            progress_reporter,
        }
    }

    /// Loads one list endpoint into `widget`.
    ///
    /// Returns the number of options on success. Failures are logged and
    /// returned, never propagated; the widget is only touched on success.
    pub async fn load(
        &self,
        endpoint: &str,
        widget: &dyn SelectWidget,
    ) -> Result<usize, CheckerError> {
        let options = self.fetch_options(endpoint).await.inspect_err(|e| {
            tracing::warn!(endpoint, error = %e, "failed to load component list");
        })?;

        let count = options.len();
        widget.replace_choices(options);
        tracing::debug!(endpoint, count, "component list loaded");
        Ok(count)
    }

    /// Loads every category of `context` concurrently.
    ///
    /// Outcomes are returned in category order regardless of which request
    /// finished first.
    pub async fn load_all(&self, context: &PageContext) -> Vec<LoadOutcome> {
        let total = ComponentCategory::ALL.len();
        let finished = AtomicUsize::new(0);

        self.progress_reporter
            .report(&format!("📥 Loading {} component lists...", total));

        let loads = ComponentCategory::ALL.into_iter().map(|category| {
            let finished = &finished;
            async move {
                let outcome = self.load_category(context, category).await;
                let done = finished.fetch_add(1, Ordering::Relaxed) + 1;
                self.progress_reporter
                    .report_progress(done, total, Some(&category.to_string()));
                outcome
            }
        });
        let outcomes = join_all(loads).await;

        for outcome in &outcomes {
            match outcome {
                LoadOutcome::Loaded { .. } => {}
                LoadOutcome::Failed { category, reason } => self
                    .progress_reporter
                    .report_error(&format!("⚠️  Could not load {} list: {}", category, reason)),
                LoadOutcome::NoWidget { category } => self
                    .progress_reporter
                    .report_error(&format!("⚠️  No {} selector on the page", category)),
            }
        }

        let loaded = outcomes.iter().filter(|o| o.is_loaded()).count();
        self.progress_reporter.report_completion(&format!(
            "✅ Loaded {}/{} component lists",
            loaded, total
        ));

        outcomes
    }

    async fn load_category(
        &self,
        context: &PageContext,
        category: ComponentCategory,
    ) -> LoadOutcome {
        let Some(widget) = context.widget(category) else {
            return LoadOutcome::NoWidget { category };
        };

        match self
            .load(context.endpoints().list(category), widget.as_ref())
            .await
        {
            Ok(count) => LoadOutcome::Loaded { category, count },
            Err(e) => LoadOutcome::Failed {
                category,
                reason: e.to_string(),
            },
        }
    }

    async fn fetch_options(&self, endpoint: &str) -> Result<Vec<ComponentOption>, CheckerError> {
        let response = self.transport.get(endpoint).await?;
        if !response.is_success() {
            return Err(CheckerError::Status {
                url: endpoint.to_string(),
                status: response.status,
                status_text: response.status_text,
            });
        }

        let payload = response.json(endpoint)?;
        if !payload.is_array() {
            tracing::debug!(endpoint, "list payload is not an array; treating as empty");
        }
        Ok(ItemResolution::resolve_all(&payload))
    }
}
