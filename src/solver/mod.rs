//! Guess selection and session state
//!
//! The minimax search proposes guesses; a session owns the round-by-round
//! candidate filtering, the guess pool policy, and cancellation.

mod cancel;
pub mod minimax;
mod policy;
mod session;

pub use cancel::CancelFlag;
pub use policy::{GuessUniverse, SearchPolicy};
pub use session::{Round, RoundOutcome, Session, SessionError, SessionState, Suggestion};
