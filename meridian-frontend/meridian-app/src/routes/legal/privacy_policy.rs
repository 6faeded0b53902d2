use leptos::prelude::*;
use leptos_meta::{Meta, Title};

/// One titled block of the policy text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicySection {
    pub title: &'static str,
    pub body: &'static str,
}

pub const EFFECTIVE_DATE: &str = "Effective date: March 1, 2026";
pub const CONTACT_EMAIL: &str = "privacy@meridian.app";

/// The policy copy. Order is load-bearing: the badge shown next to each
/// section is its 1-based position in this table.
pub const POLICY_SECTIONS: [PolicySection; 5] = [
    PolicySection {
        title: "1. Information Collection",
        body: "Meridian collects only the information you give us directly: the email \
               address you sign up with and the display name you choose. We do not buy, \
               scrape, or infer data about you from anywhere else.",
    },
    PolicySection {
        title: "2. Use of Information",
        body: "The information we hold is used to operate your account, respond to your \
               support requests, and send service notices you have opted into. We do not \
               use it for advertising or profiling of any kind.",
    },
    PolicySection {
        title: "3. Data Sharing",
        body: "We do not sell your personal information. We share it only with the \
               infrastructure providers that host Meridian, and only to the extent \
               required to run the service, or when the law compels us to.",
    },
    PolicySection {
        title: "4. Data Security",
        body: "All traffic to Meridian is encrypted in transit and your data is encrypted \
               at rest. Access inside the company is limited to the people who need it to \
               operate the service, and every access is logged.",
    },
    PolicySection {
        title: "5. Your Rights",
        body: "You can export or delete everything we hold about you at any time from \
               your account settings, or by writing to us. Deletion is permanent and \
               completes within thirty days.",
    },
];

/// Entrance lifecycle of the page. `Hidden` is the initial state and
/// `Revealed` is terminal; there is no transition back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntranceState {
    #[default]
    Hidden,
    Revealed,
}

impl EntranceState {
    pub fn reveal(&mut self) {
        *self = EntranceState::Revealed;
    }

    /// Classes driving the fade/slide entrance. Only presentation hangs off
    /// this state, never content.
    pub fn classes(self) -> &'static str {
        match self {
            EntranceState::Hidden => "opacity-0 translate-y-4",
            EntranceState::Revealed => "opacity-100 translate-y-0",
        }
    }
}

fn badge_number(index: usize) -> usize {
    index + 1
}

#[component]
pub fn PrivacyPolicy() -> impl IntoView {
    let entrance = RwSignal::new(EntranceState::default());
    // Effects only run on the client, after the page has painted, which is
    // exactly when the entrance transition should fire. `reveal` is
    // idempotent so a re-run can never regress the state.
    Effect::new(move |_| {
        entrance.update(EntranceState::reveal);
    });

    view! {
        <Title text="Privacy Policy - Meridian" />
        <Meta name="description" content="How Meridian collects, uses, and protects your data." />
        <div class=move || {
            format!(
                "container mx-auto max-w-3xl transition-all duration-700 ease-out {}",
                entrance.get().classes(),
            )
        }>
            <div class="panel p-8 rounded-xl space-y-6">
                <div class="space-y-1">
                    <h1 class="text-3xl font-bold">"Privacy Policy"</h1>
                    <p class="text-sm text-[color:var(--color-text)]/60">{EFFECTIVE_DATE}</p>
                </div>
                {POLICY_SECTIONS
                    .iter()
                    .enumerate()
                    .map(|(index, section)| {
                        view! {
                            <section class="flex gap-4 rounded-lg p-4 transition-colors duration-200 hover:bg-white/5">
                                <div class="flex h-8 w-8 shrink-0 items-center justify-center rounded-full bg-[color:var(--brand-ring)] font-bold">
                                    {badge_number(index)}
                                </div>
                                <div class="space-y-2">
                                    <h2 class="text-xl font-semibold">{section.title}</h2>
                                    <p class="leading-relaxed text-[color:var(--color-text)]/80">
                                        {section.body}
                                    </p>
                                </div>
                            </section>
                        }
                    })
                    .collect_view()}
                <p class="text-sm text-[color:var(--color-text)]/60">
                    "Questions about this policy? Write to us at "
                    <span class="font-mono">{CONTACT_EMAIL}</span>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_are_the_fixed_five_in_order() {
        let titles: Vec<_> = POLICY_SECTIONS.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            [
                "1. Information Collection",
                "2. Use of Information",
                "3. Data Sharing",
                "4. Data Security",
                "5. Your Rights",
            ]
        );
        for section in &POLICY_SECTIONS {
            assert!(!section.body.is_empty());
        }
    }

    #[test]
    fn badge_matches_position() {
        for (index, _) in POLICY_SECTIONS.iter().enumerate() {
            assert_eq!(badge_number(index), index + 1);
        }
    }

    #[test]
    fn entrance_reveals_exactly_once() {
        let mut state = EntranceState::default();
        assert_eq!(state, EntranceState::Hidden);

        state.reveal();
        assert_eq!(state, EntranceState::Revealed);

        // re-running the effect must not move the state anywhere else
        state.reveal();
        assert_eq!(state, EntranceState::Revealed);
    }

    #[test]
    fn hidden_and_revealed_style_differently() {
        assert_ne!(
            EntranceState::Hidden.classes(),
            EntranceState::Revealed.classes()
        );
    }

    #[test]
    fn section_table_reads_identically_every_time() {
        let first: Vec<_> = POLICY_SECTIONS.to_vec();
        let second: Vec<_> = POLICY_SECTIONS.to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn home_control_targets_the_application_root() {
        assert_eq!(crate::main_nav::HOME_PATH, "/");
    }
}
