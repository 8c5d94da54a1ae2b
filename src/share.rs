//! Share/copy capability seam. The calculator screen drives the real
//! browser/webview flow through the JS bridge (the share sheet must be
//! invoked inside the click's user-activation context, so the whole
//! round lives in one eval); this module holds the platform-independent
//! pieces: titles, the fallback policy, the eval string escaping, and a
//! recording double for tests.

pub const SHARE_TITLE: &str = "Bill Tip Calculator Results";
pub const COPIED_CONFIRMATION: &str = "Results copied to clipboard!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The platform share sheet took the text.
    Shared,
    /// Share was unavailable or cancelled; the clipboard got the text.
    Copied,
    /// Neither capability worked.
    Failed,
}

impl ShareOutcome {
    pub const SHARED_TOKEN: &'static str = "shared";
    pub const COPIED_TOKEN: &'static str = "copied";

    /// Decode the token the eval-bridge share flow reports back.
    /// Anything unrecognized counts as failure.
    pub fn from_token(token: &str) -> Self {
        match token {
            Self::SHARED_TOKEN => Self::Shared,
            Self::COPIED_TOKEN => Self::Copied,
            _ => Self::Failed,
        }
    }
}

/// A platform surface that can hand text to a share sheet or clipboard.
pub trait ShareTarget {
    /// `Err` covers an unavailable share sheet, user cancellation, and
    /// platform failure alike; callers fall back to the clipboard.
    fn share(&mut self, title: &str, text: &str) -> Result<(), String>;

    fn copy(&mut self, text: &str) -> Result<(), String>;
}

/// Share with clipboard fallback. Copy failure is logged, never fatal.
/// The JS flow in `screens::calculator::request_platform_share` mirrors
/// this order; keep the two in sync.
pub fn share_or_copy(target: &mut impl ShareTarget, title: &str, text: &str) -> ShareOutcome {
    if target.share(title, text).is_ok() {
        return ShareOutcome::Shared;
    }
    match target.copy(text) {
        Ok(()) => ShareOutcome::Copied,
        Err(err) => {
            log::warn!("clipboard copy failed: {err}");
            ShareOutcome::Failed
        }
    }
}

/// Escape text as a double-quoted JS string literal for the eval bridge.
pub fn js_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Capability double that records calls; either capability can be
/// switched off to exercise the fallback path.
#[derive(Debug, Default)]
pub struct RecordingShareTarget {
    pub share_available: bool,
    pub copy_available: bool,
    pub shared: Vec<(String, String)>,
    pub copied: Vec<String>,
}

impl RecordingShareTarget {
    pub fn with_capabilities(share_available: bool, copy_available: bool) -> Self {
        Self {
            share_available,
            copy_available,
            ..Default::default()
        }
    }
}

impl ShareTarget for RecordingShareTarget {
    fn share(&mut self, title: &str, text: &str) -> Result<(), String> {
        if !self.share_available {
            return Err("share capability unavailable".to_string());
        }
        self.shared.push((title.to_string(), text.to_string()));
        Ok(())
    }

    fn copy(&mut self, text: &str) -> Result<(), String> {
        if !self.copy_available {
            return Err("clipboard unavailable".to_string());
        }
        self.copied.push(text.to_string());
        Ok(())
    }
}
