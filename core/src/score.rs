use core::convert::Infallible;
use core::fmt::Display;

/// Sink for the final click total of a completed session.
///
/// The session calls this exactly once, when the last mine of the last
/// level is found. The call is fire-and-forget: a returned error is logged
/// by the session and never rolls back the win.
pub trait ScoreReporter {
    type Error: Display;

    fn submit(&mut self, total_clicks: u32) -> core::result::Result<(), Self::Error>;
}

/// Reporter for embedders that keep no records, such as a demo mode.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DiscardScores;

impl ScoreReporter for DiscardScores {
    type Error = Infallible;

    fn submit(&mut self, _total_clicks: u32) -> core::result::Result<(), Infallible> {
        Ok(())
    }
}
