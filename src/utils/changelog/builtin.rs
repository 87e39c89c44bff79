// release history compiled into the binary

use super::types::{Changelog, ReleaseEntry};
use std::sync::OnceLock;

static BUILTIN: OnceLock<Changelog> = OnceLock::new();

/// the compiled-in changelog, most recent release first
pub fn builtin_changelog() -> &'static Changelog {
    BUILTIN.get_or_init(|| {
        Changelog::new(vec![
            ReleaseEntry::new("2.0.0", "January 15, 2025")
                .with_features([
                    "AI-powered content generation for notes",
                    "Enhanced dashboard with real-time updates",
                    "Multi-theme support with custom color schemes",
                ])
                .with_improvements([
                    "Improved performance with Next.js 15 Turbopack",
                    "Better mobile responsiveness across all pages",
                    "Streamlined user onboarding process",
                ]),
            ReleaseEntry::new("1.5.0", "December 20, 2024")
                .with_features([
                    "Magic link authentication for passwordless login",
                    "Export notes in multiple formats",
                    "Admin dashboard for user management",
                ])
                .with_improvements([
                    "Faster page load times",
                    "Enhanced email templates",
                    "Better error handling and user feedback",
                ])
                .with_bug_fixes([
                    "Fixed subscription renewal issues",
                    "Resolved email verification edge cases",
                    "Corrected timezone display in note timestamps",
                ]),
            ReleaseEntry::new("1.0.0", "November 1, 2024").with_features([
                "Initial release of SeaNotes",
                "User authentication with email/password",
                "Note creation, editing, and deletion",
                "Subscription management with Stripe",
                "Profile management and settings",
            ]),
        ])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::changelog::types::SectionKind;

    #[test]
    fn test_builtin_order_and_shape() {
        let changelog = builtin_changelog();
        assert_eq!(changelog.versions(), vec!["2.0.0", "1.5.0", "1.0.0"]);

        let first = changelog.get("2.0.0").unwrap();
        assert!(first.section(SectionKind::BugFixes).is_none());

        let initial = changelog.get("1.0.0").unwrap();
        assert_eq!(initial.date(), "November 1, 2024");
        assert_eq!(initial.section(SectionKind::Features).unwrap().len(), 5);
    }

    #[test]
    fn test_builtin_is_shared() {
        assert!(std::ptr::eq(builtin_changelog(), builtin_changelog()));
    }
}
