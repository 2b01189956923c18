// Build-time site configuration
// Read through option_env! so trunk builds pick it up from the environment.

/// Backend base URL, e.g. `https://api.example.com`.
///
/// When unset the contact form falls back to a simulated submission.
pub fn backend_url() -> Option<&'static str> {
    option_env!("PORTFOLIO_BACKEND_URL").filter(|url| !url.trim().is_empty())
}
