use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum StoreError {
    #[error("invalid store base URL: {url}")]
    #[diagnostic(code(folio::store::base_url))]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("request to content store failed")]
    #[diagnostic(code(folio::store::request))]
    Request(#[source] reqwest::Error),

    #[error("content store returned HTTP {status}")]
    #[diagnostic(
        code(folio::store::status),
        help("check the store URL and API key")
    )]
    Status { status: u16, body: String },

    #[error("failed to decode store response")]
    #[diagnostic(code(folio::store::decode))]
    Decode(#[source] reqwest::Error),
}
