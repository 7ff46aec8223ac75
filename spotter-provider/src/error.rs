#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Credentials are missing/placeholder, the token exchange failed, or
    /// the token response carried no access token. Non-fatal: it means
    /// "cannot query upstream", not a crash.
    #[error("provider authentication unavailable: {0}")]
    AuthUnavailable(String),

    /// The flight-offers request failed in transport or returned an
    /// unparsable payload.
    #[error("upstream request failed: {0}")]
    Upstream(String),
}
