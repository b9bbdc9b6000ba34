use std::io;

/// Why a stream cursor stopped early.
///
/// Stream cursors never return errors from the loop. A failed read turns the
/// input cursor into its end sentinel, and a failed write makes the output
/// cursor skip every later write. The cause is kept on the cursor so it can be
/// inspected once the loop is done.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// Reading from the input stream failed.
    #[error("failed to read from the input stream")]
    Read(#[source] io::Error),

    /// A token could not be parsed as the element type.
    #[error("failed to parse `{token}` as `{target}`: {reason}")]
    Parse {
        /// The offending token.
        token: String,
        /// Name of the element type the token was parsed as.
        target: &'static str,
        /// The parser's explanation.
        reason: String,
    },

    /// Writing to the output stream failed.
    #[error("failed to write to the output stream")]
    Write(#[source] io::Error),
}
