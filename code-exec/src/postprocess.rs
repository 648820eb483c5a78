//! Turns raw backend output into a chat message.
//!
//! Each step is a separate function so the statistics heuristic, the size
//! decision and the escaping can be exercised on their own.

use std::borrow::Cow;
use tracing::{debug, warn};

use crate::{
    executor::PasteService,
    types::{ExecutionOptions, RenderedOutput},
};

/// Start of the statistics block the backend appends
pub const STATS_START_MARKER: &str = "Real time: ";
/// End of the statistics block; the exit code line after it is kept
pub const STATS_END_MARKER: &str = "%\nExit code: ";
/// Characters of the end marker removed along with the block (`%\n`)
const STATS_END_TRIM: usize = 2;

pub const MAX_INLINE_CHARS: usize = 4000;
pub const MAX_INLINE_NEWLINES: usize = 100;

const FENCE: &str = "```";
const ESCAPED_FENCE: &str = "`\u{200D}`\u{200D}`";

/// Removes the backend's statistics trailer.
///
/// Best effort: it relies on the exact trailer text the backend emits.
/// Searching from the end skips marker look-alikes printed by the program
/// itself. Output without both markers in order is returned unchanged.
pub fn strip_statistics(result: &str) -> Cow<'_, str> {
    let (Some(start), Some(end)) = (
        result.rfind(STATS_START_MARKER),
        result.rfind(STATS_END_MARKER),
    ) else {
        return Cow::Borrowed(result);
    };

    if end <= start {
        return Cow::Borrowed(result);
    }

    let mut stripped = String::with_capacity(result.len());
    stripped.push_str(&result[..start]);
    stripped.push_str(&result[end + STATS_END_TRIM..]);
    Cow::Owned(stripped)
}

/// Whether `text` is too long or too tall to post inline
pub fn exceeds_inline_limit(text: &str) -> bool {
    text.chars().count() > MAX_INLINE_CHARS || text.matches('\n').count() > MAX_INLINE_NEWLINES
}

/// Breaks up code fences inside `text` so they cannot close the message's
/// own fence.
pub fn escape_fences(text: &str) -> String {
    text.replace(FENCE, ESCAPED_FENCE)
}

/// Wraps `text` in a code block. The newline after the opening fence keeps
/// the first output line from being read as a highlighting language.
pub fn fence(text: &str) -> String {
    format!("{FENCE}\n{text}\n{FENCE}")
}

pub struct ResultPostProcessor;

impl ResultPostProcessor {
    /// Renders a raw backend result. Never fails: a paste service error
    /// degrades to `RenderedOutput::OffloadFailed`.
    pub async fn render(
        result: &str,
        options: ExecutionOptions,
        paste: &dyn PasteService,
    ) -> RenderedOutput {
        let output = if options.stats {
            Cow::Borrowed(result)
        } else {
            strip_statistics(result)
        };

        if exceeds_inline_limit(&output) {
            debug!(
                "Output of {} bytes exceeds the inline limit, offloading",
                output.len()
            );
            return match paste.post(&output).await {
                Ok(link) => RenderedOutput::Offloaded { link },
                Err(e) => {
                    warn!("Failed to offload output: {}", e);
                    RenderedOutput::OffloadFailed
                }
            };
        }

        RenderedOutput::Inline(fence(&escape_fences(&output)))
    }
}
