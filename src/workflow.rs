use anyhow::Result;
use saltscout::{App, SearchClient, SearchOutcome, theme};

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive search session.
pub(crate) struct SearchWorkflow {
    app: App<'static>,
}

impl SearchWorkflow {
    pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
        let ResolvedConfig {
            endpoint,
            pharmacy_ids,
            input_title,
            initial_query,
            theme: theme_name,
        } = config;

        let client = SearchClient::new(endpoint, pharmacy_ids)?;
        let mut app = App::new(client, initial_query);
        app.set_input_title(input_title);
        if let Some(theme) = theme_name.as_deref().and_then(theme::by_name) {
            app.set_theme(theme);
        }

        Ok(Self { app })
    }

    pub(crate) fn run(mut self) -> Result<SearchOutcome> {
        self.app.run()
    }
}
