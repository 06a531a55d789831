//! Declarative rule-table engine.
//!
//! A cancer profile is an ordered list of [`Rule`]s. Each rule is an ordered
//! list of [`Branch`]es; the first branch whose predicate holds fires and the
//! remaining branches of that rule are skipped, which expresses `if / else if`
//! chains. Separate rules are independent. Two reducers fold the fired
//! effects: [`premium`] multiplies a base lifetime risk, [`basic`] adds
//! integer points to a base score.

pub mod basic;
pub mod premium;

pub use basic::{BasicProfile, Delta};
pub use premium::{Multiplier, PremiumProfile};

use crate::assessment::{Priority, RiskLevel, ScreeningPriority, ScreeningRecommendation};

/// Predicate over the answers a table reads.
pub type Predicate<A> = fn(&A) -> bool;

/// A label that is either fixed or rendered from the answers.
pub enum Text<A> {
    Fixed(&'static str),
    Computed(fn(&A) -> String),
}

impl<A> Text<A> {
    pub fn render(&self, answers: &A) -> String {
        match self {
            Text::Fixed(text) => (*text).to_string(),
            Text::Computed(render) => render(answers),
        }
    }
}

impl<A> From<&'static str> for Text<A> {
    fn from(text: &'static str) -> Self {
        Text::Fixed(text)
    }
}

/// One arm of a rule.
pub struct Branch<A, E> {
    /// Name used in trace output
    pub label: &'static str,
    pub when: Predicate<A>,
    pub effect: E,
}

/// First-match list of branches.
pub struct Rule<A, E> {
    branches: Vec<Branch<A, E>>,
}

impl<A, E> Rule<A, E> {
    /// Rule with a single branch.
    pub fn when(label: &'static str, when: Predicate<A>, effect: E) -> Self {
        Self {
            branches: vec![Branch {
                label,
                when,
                effect,
            }],
        }
    }

    /// Rule that always fires.
    pub fn always(label: &'static str, effect: E) -> Self {
        Self::when(label, |_| true, effect)
    }

    /// Add a branch tried only when every earlier branch failed.
    pub fn otherwise_when(mut self, label: &'static str, when: Predicate<A>, effect: E) -> Self {
        self.branches.push(Branch {
            label,
            when,
            effect,
        });
        self
    }

    /// Add a catch-all final branch.
    pub fn otherwise(self, label: &'static str, effect: E) -> Self {
        self.otherwise_when(label, |_| true, effect)
    }

    /// The branch that fires for `answers`, if any.
    pub fn fire(&self, answers: &A) -> Option<&Branch<A, E>> {
        self.branches.iter().find(|branch| (branch.when)(answers))
    }

    pub fn branches(&self) -> &[Branch<A, E>] {
        &self.branches
    }
}

/// Lower bounds of the three upper bands. Each comparison is strict.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub high: f64,
    pub elevated: f64,
    pub average: f64,
}

impl Thresholds {
    pub const fn new(high: f64, elevated: f64, average: f64) -> Self {
        Self {
            high,
            elevated,
            average,
        }
    }

    pub fn classify(&self, lifetime: f64) -> RiskLevel {
        if lifetime > self.high {
            RiskLevel::High
        } else if lifetime > self.elevated {
            RiskLevel::Elevated
        } else if lifetime > self.average {
            RiskLevel::Average
        } else {
            RiskLevel::Low
        }
    }
}

/// Fractions of the lifetime figure reported for the shorter horizons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Horizons {
    pub five_year: f64,
    pub ten_year: f64,
}

impl Horizons {
    pub const fn new(five_year: f64, ten_year: f64) -> Self {
        Self {
            five_year,
            ten_year,
        }
    }
}

/// What screening rules may look at: a few answers and the computed level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreeningContext {
    pub age: Option<f64>,
    pub pack_years: f64,
    pub level: RiskLevel,
}

impl ScreeningContext {
    pub fn age_at_least(&self, years: f64) -> bool {
        self.age.is_some_and(|age| age != 0.0 && age >= years)
    }

    pub fn is_high(&self) -> bool {
        self.level == RiskLevel::High
    }
}

/// A screening test entry before it is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreeningTemplate {
    pub test: &'static str,
    pub start_age: u32,
    pub frequency: &'static str,
    pub priority: ScreeningPriority,
}

impl ScreeningTemplate {
    pub const fn new(
        test: &'static str,
        start_age: u32,
        frequency: &'static str,
        priority: ScreeningPriority,
    ) -> Self {
        Self {
            test,
            start_age,
            frequency,
            priority,
        }
    }

    pub fn emit(&self) -> ScreeningRecommendation {
        ScreeningRecommendation {
            test: self.test.to_string(),
            start_age: self.start_age,
            frequency: self.frequency.to_string(),
            priority: self.priority,
        }
    }
}

pub type ScreeningRule = Rule<ScreeningContext, Vec<ScreeningTemplate>>;

/// Appended when a table fires no recommendation at all.
pub(crate) const FALLBACK_ACTION: &str = "Discuss your personal risk with a doctor";
pub(crate) const FALLBACK_DESCRIPTION: &str =
    "Review these results with a healthcare provider who can account for your full history";
pub(crate) const FALLBACK_PRIORITY: Priority = Priority::Low;
