use crate::generator::rules::{IndustryEntry, KeywordTables};
use crate::generator::{
    BLANK_PAGE_TITLE, FixedPick, MagicPageGenerator, WIZARD_DEFAULT_TITLE, WizardSelection,
    blank_page, from_wizard, generate_share_message, generate_slug,
};
use crate::models::{Goal, Template};
use chrono::{DateTime, TimeZone, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn fixed_now() -> DateTime<Utc> {
    Utc.timestamp_millis_opt(1_717_171_234_567).unwrap()
}

#[cfg(test)]
mod title_tests {
    use super::*;

    #[test]
    fn test_titles_for_each_pick() {
        let generator = MagicPageGenerator::default();
        let expected = [
            "Free Personal Strategy Guide",
            "Exclusive Personal Insights",
            "Personal Success Toolkit",
            "Ultimate Personal Checklist",
            "Personal Growth Blueprint",
            "Pro Personal Templates",
            "Personal Masterclass Access",
            "jane's Personal Resources",
        ];

        for (index, title) in expected.iter().enumerate() {
            let generated = generator.generate_title_from_email("jane@gmail.com", &mut FixedPick(index));
            assert_eq!(&generated, title);
        }
    }

    #[test]
    fn test_unknown_and_missing_domains_are_professional() {
        let generator = MagicPageGenerator::default();
        let mut pick = FixedPick(0);

        assert_eq!(
            generator.generate_title_from_email("bob@randomdomain.xyz", &mut pick),
            "Free Professional Strategy Guide"
        );
        assert_eq!(
            generator.generate_title_from_email("not-an-email", &mut pick),
            "Free Professional Strategy Guide"
        );
        assert_eq!(
            generator.generate_title_from_email("", &mut FixedPick(7)),
            "'s Professional Resources"
        );
    }

    #[test]
    fn test_industry_uses_domain_root_only() {
        let generator = MagicPageGenerator::default();
        assert_eq!(
            generator.generate_title_from_email("ann@agency.co.uk", &mut FixedPick(2)),
            "Agency Success Toolkit"
        );
        assert_eq!(
            generator.generate_title_from_email("ann@mail.tech.io", &mut FixedPick(2)),
            "Professional Success Toolkit"
        );
    }

    #[test]
    fn test_custom_industry_table() {
        let mut tables = KeywordTables::default();
        tables.industries.entries.push(IndustryEntry {
            domain: "acme".to_string(),
            industry: "Rocketry".to_string(),
        });
        let generator = MagicPageGenerator::new(tables);
        assert_eq!(
            generator.generate_title_from_email("wile@acme.com", &mut FixedPick(6)),
            "Rocketry Masterclass Access"
        );
    }
}

#[cfg(test)]
mod selection_tests {
    use super::*;

    #[test]
    fn test_keyword_examples() {
        let generator = MagicPageGenerator::default();

        assert_eq!(generator.determine_template("user@consultingpro.com"), Template::Consultation);
        assert_eq!(generator.determine_template("user@academy.edu"), Template::Ebook);
        assert_eq!(generator.determine_goal("user@shopfast.com"), Goal::Sales);

        assert_eq!(generator.determine_template("user@randomdomain.xyz"), Template::Basic);
        assert_eq!(generator.determine_goal("user@randomdomain.xyz"), Goal::EmailList);
    }

    #[test]
    fn test_meet_selects_webinar_and_book_calls() {
        let generator = MagicPageGenerator::default();
        assert_eq!(generator.determine_template("a@meetup.com"), Template::Webinar);
        assert_eq!(generator.determine_goal("a@meetup.com"), Goal::BookCalls);
    }

    #[test]
    fn test_matching_is_case_sensitive_and_ignores_local_part() {
        let generator = MagicPageGenerator::default();
        assert_eq!(generator.determine_template("user@CoachHub.com"), Template::Basic);
        assert_eq!(generator.determine_template("coach@example.com"), Template::Basic);
        assert_eq!(generator.determine_goal("shop@example.com"), Goal::EmailList);
        assert_eq!(generator.determine_template("not-an-email"), Template::Basic);
        assert_eq!(generator.determine_goal(""), Goal::EmailList);
    }

    #[test]
    fn test_full_domain_is_searched() {
        let generator = MagicPageGenerator::default();
        // Keyword outside the domain root still counts
        assert_eq!(generator.determine_template("x@mail.learnhub.org"), Template::Ebook);
        assert_eq!(generator.determine_goal("x@acme.media"), Goal::Content);
    }
}

#[cfg(test)]
mod page_tests {
    use super::*;

    #[test]
    fn test_generate_magic_page() {
        let generator = MagicPageGenerator::default();
        let page = generator.generate_magic_page_with("sam@coachme.com", &mut FixedPick(1), fixed_now());

        assert_eq!(page.title, "Exclusive Professional Insights");
        assert_eq!(page.slug, "exclusive-professional-insights-234567");
        assert_eq!(page.template, Template::Consultation);
        assert_eq!(page.goal, Some(Goal::EmailList));
        assert!(page.published);
        assert_eq!(page.published_at, Some(fixed_now()));
        assert_eq!(page.content.blocks.len(), 3);
        assert_eq!(page.content.blocks[0].kind(), "hero");
        assert_eq!(page.content.blocks[2].kind(), "form");
    }

    #[test]
    fn test_malformed_input_never_fails() {
        let generator = MagicPageGenerator::default();
        for email in ["not-an-email", "", "@", "@@", "a@.", "ü@ñ.çom", "   "] {
            let page = generator.generate_magic_page(email);
            assert!(Template::ALL.contains(&page.template));
            assert!(page.goal.is_some());
            assert!(page.published);
        }

        let page = generator.generate_magic_page_with("not-an-email", &mut FixedPick(3), fixed_now());
        assert_eq!(page.title, "Ultimate Professional Checklist");
    }

    #[test]
    fn test_slug_shape_for_random_emails() {
        let generator = MagicPageGenerator::default();
        let mut rng = StdRng::seed_from_u64(7);
        let emails = [
            "john.o'neil+promo@gmail.com",
            "user@consultingpro.com",
            "ÉLISE@digital.fr",
            "a@meetup.com",
            "x@y",
            "not-an-email",
        ];

        for email in emails {
            for _ in 0..16 {
                let page = generator.generate_magic_page_with(email, &mut rng, fixed_now());
                let (base, suffix) = page.slug.rsplit_once('-').unwrap();
                assert_eq!(suffix, "234567");
                assert!(base.len() <= 50);
                assert!(!base.starts_with('-') && !base.ends_with('-'));
                assert!(
                    page.slug
                        .chars()
                        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                    "bad slug {}",
                    page.slug
                );
                assert_eq!(base, generate_slug(&page.title));
            }
        }
    }

    #[test]
    fn test_long_local_part_is_capped() {
        let generator = MagicPageGenerator::default();
        let email = format!("{}@gmail.com", "verylongname".repeat(10));
        let page = generator.generate_magic_page_with(&email, &mut FixedPick(7), fixed_now());
        let base = page.slug.strip_suffix("-234567").unwrap();
        assert_eq!(base.len(), 50);
    }

    #[test]
    fn test_from_wizard() {
        let selection = WizardSelection {
            title: "  Spring Webinar  ".to_string(),
            template: Template::Webinar,
            goal: Goal::BookCalls,
        };
        let page = from_wizard(&selection, fixed_now());
        // Only an empty title falls back to the default
        assert_eq!(page.title, "  Spring Webinar  ");
        assert_eq!(page.slug, "spring-webinar-234567");
        assert_eq!(page.template, Template::Webinar);
        assert_eq!(page.goal, Some(Goal::BookCalls));
        assert!(!page.published);
        assert!(page.published_at.is_none());
        assert_eq!(page.content.blocks[1].kind(), "details");

        let page = from_wizard(&WizardSelection::default(), fixed_now());
        assert_eq!(page.title, WIZARD_DEFAULT_TITLE);
        assert_eq!(page.template, Template::Basic);
        assert_eq!(page.goal, Some(Goal::EmailList));

        let spaces = WizardSelection {
            title: "   ".to_string(),
            ..WizardSelection::default()
        };
        let page = from_wizard(&spaces, fixed_now());
        assert_eq!(page.title, "   ");
        assert_eq!(page.slug, "234567");
    }

    #[test]
    fn test_wizard_selection_describe() {
        assert_eq!(
            WizardSelection::default().describe(),
            "Basic Opt-in (Simple email capture), goal: Build Email List (Grow your subscriber base)"
        );

        let selection = WizardSelection {
            title: String::new(),
            template: Template::Consultation,
            goal: Goal::BookCalls,
        };
        assert_eq!(
            selection.describe(),
            "Free Consultation (Book discovery calls), goal: Book Calls (Schedule consultations)"
        );
    }

    #[test]
    fn test_blank_page() {
        let page = blank_page(fixed_now());
        assert_eq!(page.title, BLANK_PAGE_TITLE);
        assert_eq!(page.slug, "page-1717171234567");
        assert_eq!(page.template, Template::Basic);
        assert!(page.goal.is_none());
        assert!(page.content.blocks.is_empty());
        assert!(!page.published);
    }
}

#[cfg(test)]
mod share_tests {
    use super::*;

    #[test]
    fn test_share_messages() {
        let url = "https://pages.example.com/p/pro-tech-templates-234567";
        let expected = [
            format!("Check out my new lead page: Pro Tech Templates - {url}"),
            format!("I just created a lead page for Pro Tech Templates. Take a look: {url}"),
            format!("New lead page live: Pro Tech Templates. Perfect for capturing emails! {url}"),
            format!("🚀 Just launched: Pro Tech Templates. Start capturing leads today! {url}"),
        ];

        for (index, message) in expected.iter().enumerate() {
            assert_eq!(
                &generate_share_message("Pro Tech Templates", url, &mut FixedPick(index)),
                message
            );
        }
    }

    #[test]
    fn test_share_message_with_rng_is_one_of_the_templates() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let message = generate_share_message("T", "U", &mut rng);
            assert!(message.contains('T') && message.ends_with('U'));
        }
    }
}
