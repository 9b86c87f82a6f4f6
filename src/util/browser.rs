//! One-shot browser surfaces: asset downloads and blocking acknowledgements.
//!
//! Both degrade to a log line outside the `csr` build.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Ask the platform to download the static asset at `path`.
///
/// The saved file name is the last path segment.
pub fn request_asset(path: &str) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let anchor = match doc.create_element("a").map(|el| el.dyn_into::<web_sys::HtmlAnchorElement>()) {
            Ok(Ok(anchor)) => anchor,
            _ => {
                log::warn!("could not create download link for {path}");
                return;
            }
        };
        anchor.set_href(path);
        anchor.set_download(download_name(path));
        anchor.click();
    }
    #[cfg(not(feature = "csr"))]
    {
        log::debug!("asset {} requested outside the browser", download_name(path));
    }
}

/// Show `message` in a blocking dialog.
pub fn acknowledge(message: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("acknowledgement not shown: {e:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::info!("acknowledgement: {message}");
    }
}

#[must_use]
pub fn download_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
