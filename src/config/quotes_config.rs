#[derive(serde::Deserialize, Debug, Clone)]
pub struct QuotesConfig {
    /// Header names whose columns are eligible for quoting, in lookup order.
    pub names: Vec<String>,
}
