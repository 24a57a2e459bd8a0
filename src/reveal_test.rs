use super::*;

// =============================================================
// RevealAnimator
// =============================================================

#[test]
fn first_intersection_reveals() {
    let mut reveal = RevealAnimator::new(3);
    assert_eq!(reveal.on_intersection(1, true), vec![Action::RevealTarget(1)]);
    assert!(reveal.is_revealed(1));
    assert!(!reveal.is_revealed(0));
}

#[test]
fn second_intersection_is_a_no_op() {
    let mut reveal = RevealAnimator::new(1);
    reveal.on_intersection(0, true);
    assert!(reveal.on_intersection(0, true).is_empty());
    assert!(reveal.is_revealed(0));
}

#[test]
fn leaving_the_viewport_never_hides_again() {
    let mut reveal = RevealAnimator::new(1);
    reveal.on_intersection(0, true);
    assert!(reveal.on_intersection(0, false).is_empty());
    assert!(reveal.is_revealed(0));
}

#[test]
fn non_intersecting_entry_does_nothing() {
    let mut reveal = RevealAnimator::new(1);
    assert!(reveal.on_intersection(0, false).is_empty());
    assert!(!reveal.is_revealed(0));
}

#[test]
fn unknown_index_is_ignored() {
    let mut reveal = RevealAnimator::new(2);
    assert!(reveal.on_intersection(7, true).is_empty());
    assert!(!reveal.is_revealed(7));
    assert_eq!(reveal.len(), 2);
}

// =============================================================
// SkillsReveal
// =============================================================

#[test]
fn stagger_is_thirty_ms_per_item() {
    assert_eq!(stagger_delay_ms(0), 0);
    assert_eq!(stagger_delay_ms(1), 30);
    assert_eq!(stagger_delay_ms(10), 300);
}

#[test]
fn skills_fire_once_with_staggered_timers() {
    let mut timers = Timers::new();
    let mut skills = SkillsReveal::new(3);
    let actions = skills.on_intersection(true, &mut timers);

    assert_eq!(actions[0], Action::StopObservingSkills);
    let delays: Vec<u32> = actions
        .iter()
        .filter_map(|a| match a {
            Action::Schedule { delay_ms, .. } => Some(*delay_ms),
            _ => None,
        })
        .collect();
    assert_eq!(delays, vec![0, 30, 60]);
    assert_eq!(timers.len(), 3);
    assert!(skills.has_fired());

    assert!(skills.on_intersection(true, &mut timers).is_empty());
    assert_eq!(timers.len(), 3);
}

#[test]
fn skills_ignore_non_intersecting_entries() {
    let mut timers = Timers::new();
    let mut skills = SkillsReveal::new(2);
    assert!(skills.on_intersection(false, &mut timers).is_empty());
    assert!(!skills.has_fired());
}

#[test]
fn prime_queues_show_after_short_gap() {
    let mut timers = Timers::new();
    let skills = SkillsReveal::new(2);
    let actions = skills.on_prime(1, &mut timers);
    assert_eq!(actions[0], Action::PrimeSkillItem(1));
    let Action::Schedule { handle, delay_ms } = actions[1] else {
        panic!("expected a schedule action");
    };
    assert_eq!(delay_ms, SKILL_PRIME_MS);
    assert_eq!(timers.take(handle), Some(Task::ShowSkillItem(1)));
}

#[test]
fn prime_for_unknown_item_is_ignored() {
    let mut timers = Timers::new();
    let skills = SkillsReveal::new(2);
    assert!(skills.on_prime(5, &mut timers).is_empty());
    assert!(timers.is_empty());
}
