//! Shared chart session
//!
//! Holds the imported dataset and the user's selection behind one lock so a
//! redraw never sees a new dataset paired with a stale selection.

use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::aggregate::compute_view;
use crate::chart::{ChartFrame, StyleTable};
use crate::core::config::ChartConfig;
use crate::results::{parse, Dataset, ImportError};
use crate::selection::SelectionState;

struct SessionState {
    dataset: Dataset,
    selection: SelectionState,
    styles: StyleTable,
}

/// Dataset, selection and styles of one chart window
#[derive(Clone)]
pub struct ChartSession {
    state: Arc<RwLock<SessionState>>,
    config: Arc<ChartConfig>,
}

impl ChartSession {
    pub fn new(config: ChartConfig) -> Self {
        Self {
            state: Arc::new(RwLock::new(SessionState {
                dataset: Dataset::default(),
                selection: SelectionState::default(),
                styles: StyleTable::default(),
            })),
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Import an export file, replacing the current dataset and selection.
    ///
    /// Returns the number of records imported. On error the previous data is kept.
    pub async fn import(&self, path: &Path) -> Result<usize, ImportError> {
        let text = match tokio::fs::read_to_string(path).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Could not read {}: {}", path.display(), e);
                return Err(e.into());
            }
        };

        debug!("Read {} bytes from {}", text.len(), path.display());
        self.import_text(&text).await
    }

    /// Import export text already in memory
    pub async fn import_text(&self, text: &str) -> Result<usize, ImportError> {
        // Parse before locking so readers are never blocked on a slow import
        let dataset = Dataset::new(parse(text)?);
        let mut selection = SelectionState::initial(&dataset);
        selection.set_show_ascii_inputs_in_comparison_chart(self.config.show_ascii_inputs);
        let styles = StyleTable::build(&dataset.algorithms(), &self.config);
        let count = dataset.len();
        info!(
            records = count,
            inputs = dataset.inputs().len(),
            algorithms = styles.len(),
            "imported benchmark results"
        );

        let mut state = self.state.write().await;
        *state = SessionState {
            dataset,
            selection,
            styles,
        };
        Ok(count)
    }

    /// Compute the frame for the current selection
    pub async fn view(&self) -> ChartFrame {
        let state = self.state.read().await;
        ChartFrame::new(
            compute_view(&state.dataset, &state.selection),
            &state.selection,
            &state.styles,
        )
    }

    /// Mutate the selection against the current dataset
    pub async fn update<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut SelectionState, &Dataset) -> R,
    {
        let mut state = self.state.write().await;
        let SessionState {
            dataset, selection, ..
        } = &mut *state;
        f(selection, dataset)
    }

    /// Run a read-only closure over the dataset, selection and styles
    pub async fn inspect<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Dataset, &SelectionState, &StyleTable) -> R,
    {
        let state = self.state.read().await;
        f(&state.dataset, &state.selection, &state.styles)
    }

    /// True until something has been imported
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.dataset.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::ChartView;
    use crate::core::labels::InputSelection;
    use std::path::PathBuf;

    const EXPORT: &str = "Few matches\t10\t12\tLength unchanged\tAlgoA\t0\t500\n\
                          Few matches\t10\t12\tLength unchanged\tAlgoB\t0\t300\n\
                          Many matches\t10\t12\tLength increasing\tAlgoA\t0\t900\n";

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "bench-charts-{}-{}.tsv",
            std::process::id(),
            name
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[tokio::test]
    async fn test_new_session_is_empty() {
        let session = ChartSession::new(ChartConfig::default());
        assert!(session.is_empty().await);
        let frame = session.view().await;
        assert_eq!(frame.view, ChartView::Blank);
        assert_eq!(frame.title, None);
    }

    #[tokio::test]
    async fn test_import_file() {
        let path = temp_file("import", EXPORT);
        let session = ChartSession::new(ChartConfig::default());

        let count = session.import(&path).await.unwrap();
        assert_eq!(count, 3);
        assert!(!session.is_empty().await);

        let frame = session.view().await;
        assert_eq!(frame.title.as_deref(), Some("Few matches"));
        assert_eq!(frame.subtitle.as_deref(), Some("Length unchanged"));
        assert_eq!(frame.styles.len(), 2);

        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn test_failed_import_keeps_previous_data() {
        let session = ChartSession::new(ChartConfig::default());
        session.import_text(EXPORT).await.unwrap();
        session
            .update(|selection, dataset| {
                selection.select_input(dataset, Some(InputSelection::from_label("Many matches")))
            })
            .await;

        let err = session.import_text("only\tthree\tcells\n").await.unwrap_err();
        assert_eq!(err, ImportError::Format { line: 1, cells: 3 });

        let frame = session.view().await;
        assert_eq!(frame.title.as_deref(), Some("Many matches"));
        assert_eq!(frame.subtitle.as_deref(), Some("Length increasing"));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let session = ChartSession::new(ChartConfig::default());
        let path = std::env::temp_dir().join("bench-charts-does-not-exist.tsv");
        let err = session.import(&path).await.unwrap_err();
        assert!(matches!(err, ImportError::Io(_)));
        assert!(session.is_empty().await);
    }

    #[tokio::test]
    async fn test_reimport_resets_selection() {
        let session = ChartSession::new(ChartConfig::default());
        session.import_text(EXPORT).await.unwrap();
        session
            .update(|selection, _| selection.set_algorithm_enabled("AlgoB", false))
            .await;
        assert!(!session.inspect(|_, s, _| s.is_algorithm_enabled("AlgoB")).await);

        session.import_text(EXPORT).await.unwrap();
        assert!(session.inspect(|_, s, _| s.is_algorithm_enabled("AlgoB")).await);
    }

    #[tokio::test]
    async fn test_config_sets_ascii_toggle() {
        let config = ChartConfig {
            show_ascii_inputs: true,
            ..Default::default()
        };
        let session = ChartSession::new(config);
        session.import_text(EXPORT).await.unwrap();
        assert!(
            session
                .inspect(|_, s, _| s.show_ascii_inputs_in_comparison_chart())
                .await
        );
    }

    #[tokio::test]
    async fn test_concurrent_views_during_import() {
        let session = ChartSession::new(ChartConfig::default());
        session.import_text(EXPORT).await.unwrap();

        let reader = session.clone();
        let handle = tokio::spawn(async move {
            for _ in 0..50 {
                let frame = reader.view().await;
                // Title and view always come from the same dataset
                assert!(frame.title.is_some());
                assert!(!frame.styles.is_empty());
            }
        });
        for _ in 0..10 {
            session.import_text(EXPORT).await.unwrap();
        }
        handle.await.unwrap();
    }
}
