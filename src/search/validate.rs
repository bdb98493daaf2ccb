use crate::{error::SearchError, search::SearchProblem};

/// Replay `actions` from the starting state of `problem` through its
/// successor function and check that they end in a goal.
pub fn validate<P: SearchProblem>(problem: &P, actions: &[P::Action]) -> Result<(), SearchError> {
    let mut cur_state = problem.starting_state();
    for action in actions {
        let successor = problem
            .successor_states(&cur_state)
            .into_iter()
            .find(|successor| &successor.action == action)
            .ok_or_else(|| SearchError::IllegalMove {
                action: format!("{:?}", action),
                state: format!("{:?}", cur_state),
            })?;
        cur_state = successor.state;
    }

    if !problem.is_goal(&cur_state) {
        return Err(SearchError::GoalNotReached {
            state: format!("{:?}", cur_state),
        });
    }

    Ok(())
}
