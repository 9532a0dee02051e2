//! Gating derived from a selection: the contact gate and the two-step plan progress.

use serde::{Deserialize, Serialize};

use crate::domain::locale::Locale;

/// Whether the contact form may show its input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactGate {
    /// Nothing selected yet; show the "pick services first" prompt.
    SelectionRequired,

    /// At least one item selected; render the form.
    Ready,
}

impl ContactGate {
    pub fn allows_form(&self) -> bool {
        matches!(self, ContactGate::Ready)
    }

    /// Prompt shown in place of the form.
    pub fn prompt(&self, locale: Locale) -> Option<&'static str> {
        match (self, locale) {
            (ContactGate::Ready, _) => None,
            (ContactGate::SelectionRequired, Locale::En) => {
                Some("Pick the services you're interested in first, then tell us about your business.")
            }
            (ContactGate::SelectionRequired, Locale::Ko) => {
                Some("먼저 관심 있는 서비스를 선택한 뒤 비즈니스에 대해 알려주세요.")
            }
        }
    }
}

/// Two-step progress through the pricing flow: tier, then subscription.
///
/// Derived from `(has_tier, has_subscription)`. A single operation may move
/// between any two states: `select_tier` under `StartFresh` goes from
/// `SubscriptionOnly` to `TierOnly`, and `replace_all` can go from `None`
/// straight to `Complete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanProgress {
    None,
    TierOnly,
    SubscriptionOnly,
    Complete,
}

impl PlanProgress {
    pub fn from_flags(has_tier: bool, has_subscription: bool) -> Self {
        match (has_tier, has_subscription) {
            (false, false) => PlanProgress::None,
            (true, false) => PlanProgress::TierOnly,
            (false, true) => PlanProgress::SubscriptionOnly,
            (true, true) => PlanProgress::Complete,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, PlanProgress::Complete)
    }

    /// The step still missing, if any.
    pub fn next_step(&self) -> Option<NextStep> {
        match self {
            PlanProgress::None => Some(NextStep::ChooseBoth),
            PlanProgress::TierOnly => Some(NextStep::ChooseSubscription),
            PlanProgress::SubscriptionOnly => Some(NextStep::ChooseTier),
            PlanProgress::Complete => None,
        }
    }
}

/// Directive nudge naming exactly what the visitor still has to pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NextStep {
    ChooseTier,
    ChooseSubscription,
    ChooseBoth,
}

impl NextStep {
    pub fn nudge(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (NextStep::ChooseTier, Locale::En) => "Now choose a website tier to complete your plan.",
            (NextStep::ChooseTier, Locale::Ko) => "이제 웹사이트 티어를 선택해 플랜을 완성하세요.",
            (NextStep::ChooseSubscription, Locale::En) => {
                "Now choose a care subscription to complete your plan."
            }
            (NextStep::ChooseSubscription, Locale::Ko) => {
                "이제 관리 구독을 선택해 플랜을 완성하세요."
            }
            (NextStep::ChooseBoth, Locale::En) => {
                "Choose a website tier and a care subscription to build your plan."
            }
            (NextStep::ChooseBoth, Locale::Ko) => {
                "웹사이트 티어와 관리 구독을 선택해 플랜을 만드세요."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_flags_covers_all_four_states() {
        assert_eq!(PlanProgress::from_flags(false, false), PlanProgress::None);
        assert_eq!(PlanProgress::from_flags(true, false), PlanProgress::TierOnly);
        assert_eq!(PlanProgress::from_flags(false, true), PlanProgress::SubscriptionOnly);
        assert_eq!(PlanProgress::from_flags(true, true), PlanProgress::Complete);
    }

    #[test]
    fn next_step_names_the_missing_choice() {
        assert_eq!(PlanProgress::TierOnly.next_step(), Some(NextStep::ChooseSubscription));
        assert_eq!(PlanProgress::SubscriptionOnly.next_step(), Some(NextStep::ChooseTier));
        assert_eq!(PlanProgress::None.next_step(), Some(NextStep::ChooseBoth));
        assert_eq!(PlanProgress::Complete.next_step(), Option::None);
    }

    #[test]
    fn every_state_but_complete_names_a_next_step() {
        for state in [PlanProgress::None, PlanProgress::TierOnly, PlanProgress::SubscriptionOnly] {
            assert!(!state.is_complete());
            assert!(state.next_step().is_some());
        }
        assert!(PlanProgress::Complete.is_complete());
    }

    #[test]
    fn contact_gate_prompt_only_when_blocked() {
        assert!(ContactGate::Ready.prompt(Locale::En).is_none());
        assert!(ContactGate::SelectionRequired.prompt(Locale::Ko).is_some());
        assert!(!ContactGate::SelectionRequired.allows_form());
    }

    #[test]
    fn nudges_exist_in_both_locales() {
        for step in [NextStep::ChooseTier, NextStep::ChooseSubscription, NextStep::ChooseBoth] {
            assert!(!step.nudge(Locale::En).is_empty());
            assert_ne!(step.nudge(Locale::En), step.nudge(Locale::Ko));
        }
    }
}
