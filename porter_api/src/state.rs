use porter_quoting::quote::QuoteCalculator;

pub struct AppState {
    pub quoting: QuoteCalculator,
}
