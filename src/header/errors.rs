use std::error::Error;

#[derive(Debug, derive_more::Display)]
///Describes errors that prevent link from being written.
pub enum LinkError {
    #[display(fmt = "crossorigin must be set to either 'anonymous' or 'use-credentials', got '{}'", _0)]
    ///Value of `crossorigin` attribute is not recognized.
    ///
    ///Contains original value.
    InvalidCrossOrigin(String),
    #[display(fmt = "Link cannot be used as header value: {}", _0)]
    ///Formatted link contains characters that are not allowed inside header.
    InvalidHeaderValue(http::header::InvalidHeaderValue),
}

impl From<http::header::InvalidHeaderValue> for LinkError {
    #[inline]
    fn from(error: http::header::InvalidHeaderValue) -> Self {
        LinkError::InvalidHeaderValue(error)
    }
}

impl Error for LinkError {}
