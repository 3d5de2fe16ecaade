/// Failure decoding the `otherAttributes` query parameter
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum QueryError {
    #[error("otherAttributes is not a JSON object: {msg}")]
    MalformedAttributes { msg: String },
    #[error("otherAttributes value for '{key}' must be a string")]
    NonStringAttribute { key: String },
}
