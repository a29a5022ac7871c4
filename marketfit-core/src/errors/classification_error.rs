/// Sector classification errors.
#[derive(Debug, thiserror::Error)]
pub enum ClassificationError {
    #[error("classifier request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("classifier rate limited: {reason}")]
    RateLimited { reason: String },

    #[error("classifier rejected the request with {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("unparseable classifier reply: {reason}")]
    UnparseableReply { reason: String },

    #[error("unknown sector label: {label}")]
    UnknownSector { label: String },

    #[error("no usable sectors in classifier reply")]
    NoUsableSectors,
}
