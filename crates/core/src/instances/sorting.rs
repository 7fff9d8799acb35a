//! Ordering and day filtering for activity instances

use std::cmp::Reverse;

use daybreak_domain::{ActivityInstance, Completion, EpochMillis};

/// Incomplete instances always belong to today; completed ones only when
/// they were completed at or after `boundary`.
pub fn is_in_current_day(instance: &ActivityInstance, boundary: EpochMillis) -> bool {
    match instance.completion {
        Completion::Incomplete => true,
        Completion::Completed { at } => at >= boundary,
    }
}

/// Keep only instances belonging to the logical day starting at `boundary`.
pub fn filter_current_day(
    instances: impl IntoIterator<Item = ActivityInstance>,
    boundary: EpochMillis,
) -> Vec<ActivityInstance> {
    instances.into_iter().filter(|instance| is_in_current_day(instance, boundary)).collect()
}

/// Incomplete first, then completed; each group most recently active first.
///
/// The sort is stable, so ties keep their input order.
pub fn get_sorted_instances(instances: &[ActivityInstance]) -> Vec<ActivityInstance> {
    let mut sorted = instances.to_vec();
    sorted.sort_by_key(|instance| (instance.is_completed(), Reverse(instance.last_active_at)));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance(id: &str, completion: Completion, last_active_at: EpochMillis) -> ActivityInstance {
        ActivityInstance {
            id: id.into(),
            title: id.into(),
            type_id: "t".into(),
            completion,
            last_active_at,
            created_at: 0,
        }
    }

    fn ids(list: &[ActivityInstance]) -> Vec<&str> {
        list.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn incomplete_before_completed() {
        let completed_newer = instance("completed-newer", Completion::Completed { at: 90 }, 90);
        let incomplete = instance("incomplete", Completion::Incomplete, 10);
        let completed_older = instance("completed-older", Completion::Completed { at: 50 }, 50);

        let sorted = get_sorted_instances(&[completed_newer, incomplete, completed_older]);
        assert_eq!(ids(&sorted), vec!["incomplete", "completed-newer", "completed-older"]);
    }

    #[test]
    fn groups_sorted_by_last_active_descending() {
        let list = vec![
            instance("a", Completion::Incomplete, 1),
            instance("b", Completion::Incomplete, 3),
            instance("c", Completion::Completed { at: 5 }, 2),
            instance("d", Completion::Completed { at: 5 }, 7),
            instance("e", Completion::Incomplete, 2),
        ];
        assert_eq!(ids(&get_sorted_instances(&list)), vec!["b", "e", "a", "d", "c"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let list = vec![
            instance("first", Completion::Incomplete, 5),
            instance("second", Completion::Incomplete, 5),
        ];
        assert_eq!(ids(&get_sorted_instances(&list)), vec!["first", "second"]);
    }

    #[test]
    fn filter_keeps_incomplete_and_recent_completions() {
        let list = vec![
            instance("open", Completion::Incomplete, 0),
            instance("yesterday", Completion::Completed { at: 99 }, 99),
            instance("at-boundary", Completion::Completed { at: 100 }, 100),
        ];
        assert_eq!(ids(&filter_current_day(list, 100)), vec!["open", "at-boundary"]);
    }
}
