// Bounded typo enumeration
//
//   - `state`: explicit DFS stack (chosen indices, cached words, prefix costs)
//   - `enumerator`: the extend / substitute / remove state machine and its
//     iterator views

pub mod enumerator;
pub mod state;

pub use enumerator::{Candidate, Candidates, Enumerator};
pub use state::SearchState;
