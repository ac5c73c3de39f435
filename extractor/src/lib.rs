use middleware::extractor::ExtractionMiddleware;

pub mod middleware {
    pub mod extractor;
}

/// Resolves the session cookie to a `CurrentUser` request extension.
pub fn middleware() -> ExtractionMiddleware {
    ExtractionMiddleware::new()
}
