use crate::actions::ActionRule;

/// Cards held at the start and end of every turn.
pub const HAND_SIZE: usize = 7;

/// Penalty total at which a player loses the match.
pub const DEFAULT_MAX_POINTS: u32 = 100;

/// Extra penalty for the opponent when the closer leaves no card ungrouped.
pub const PERFECT_CLOSE_BONUS: u32 = 10;

/// Narrows the legal-move set by priority.
///
/// Walks the candidates in order with a running threshold starting at 0.
/// Candidates below the threshold are dropped. A candidate above it raises
/// the threshold and replaces everything kept so far, unless it allows lower
/// priorities to stay alongside it. With every current action at priority 0
/// the input comes back unchanged.
///
/// # Examples
///
/// ```
/// use chinchon_engine::actions::Action;
/// use chinchon_engine::rules::filter_by_priority;
///
/// let candidates = vec![Action::draw_from_deck(0), Action::draw_from_discard(0)];
/// assert_eq!(filter_by_priority(candidates.clone()), candidates);
/// ```
pub fn filter_by_priority<A: ActionRule>(candidates: Vec<A>) -> Vec<A> {
    let mut kept = Vec::with_capacity(candidates.len());
    let mut threshold = 0;
    for action in candidates {
        let priority = action.priority();
        if priority < threshold {
            continue;
        }
        if priority > threshold && !action.allow_lower_priority() {
            threshold = priority;
            kept.clear();
        }
        kept.push(action);
    }
    kept
}
