/// Validated configuration consumed by the application.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedConfig {
    pub(crate) endpoint: String,
    pub(crate) pharmacy_ids: String,
    pub(crate) input_title: Option<String>,
    pub(crate) initial_query: String,
    pub(crate) theme: Option<String>,
}

impl ResolvedConfig {
    /// Print a human-readable summary of the resolved values.
    pub(crate) fn print_summary(&self) {
        println!("endpoint: {}", self.endpoint);
        println!("pharmacy ids: {}", self.pharmacy_ids);
        println!(
            "input title: {}",
            self.input_title.as_deref().unwrap_or("saltscout")
        );
        println!("initial query: '{}'", self.initial_query);
        println!("theme: {}", self.theme.as_deref().unwrap_or("slate"));
    }
}
