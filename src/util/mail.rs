//! Opening `mailto:` URIs in the visitor's mail client.

/// Failure to hand a URI to the mail client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LaunchError {
    #[error("no browser window available")]
    NoWindow,
    #[error("browser rejected navigation: {0}")]
    Rejected(String),
    #[error("mail launching is unavailable in this build")]
    Unavailable,
}

/// Fire-and-forget handoff of a URI to the default mail handler.
///
/// `Ok` means only that the environment accepted the request; there is no
/// signal for whether a mail client actually opened.
pub trait MailLauncher: Send + Sync {
    fn open(&self, uri: &str) -> Result<(), LaunchError>;
}

/// Navigates the current window to the URI.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowMailLauncher;

impl MailLauncher for WindowMailLauncher {
    fn open(&self, uri: &str) -> Result<(), LaunchError> {
        #[cfg(feature = "csr")]
        {
            let window = web_sys::window().ok_or(LaunchError::NoWindow)?;
            window
                .location()
                .set_href(uri)
                .map_err(|err| LaunchError::Rejected(js_error_message(&err)))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = uri;
            Err(LaunchError::Unavailable)
        }
    }
}

#[cfg(feature = "csr")]
fn js_error_message(err: &wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
