use crate::models::{ContentBlock, DisplaySettings, FormField, PageContent, Template};

fn items(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn hero(title: String, subtitle: &str, button_text: &str) -> ContentBlock {
    ContentBlock::Hero {
        title,
        subtitle: subtitle.to_string(),
        button_text: button_text.to_string(),
        image_url: None,
    }
}

fn form(fields: &[FormField], submit_text: &str) -> ContentBlock {
    ContentBlock::Form {
        fields: fields.to_vec(),
        submit_text: submit_text.to_string(),
    }
}

/// Builds the pre-filled content blocks for a template
///
/// Blocks always come in the order hero, descriptive block, form. Display
/// settings are the same for every template.
pub fn generate_content(template: Template, title: &str) -> PageContent {
    use FormField::*;

    let blocks = match template {
        Template::Basic => vec![
            hero(
                title.to_string(),
                "Get instant access to exclusive content that will transform your approach",
                "Get Free Access",
            ),
            ContentBlock::Benefits {
                items: items(&[
                    "Proven strategies that work",
                    "Step-by-step guidance",
                    "Immediate actionable insights",
                    "Community access",
                ]),
            },
            form(&[Email, Name], "Send My Free Guide"),
        ],
        Template::Webinar => vec![
            hero(
                format!("Reserve Your Spot: {}", title),
                "Join industry experts for this exclusive live training session",
                "Register Now",
            ),
            ContentBlock::Details {
                items: items(&[
                    "📅 Date: Next Thursday, 2 PM EST",
                    "⏰ Duration: 60 minutes + Q&A",
                    "🎯 What You'll Learn: Key insights and strategies",
                    "🎁 Bonus: Recording + slides for all attendees",
                ]),
            },
            form(&[Email, Name, Company], "Secure My Seat"),
        ],
        Template::Ebook => vec![
            hero(
                format!("Download: {}", title),
                "Get your free copy of this comprehensive guide",
                "Download Now",
            ),
            ContentBlock::Features {
                items: items(&[
                    "📖 50+ pages of actionable content",
                    "📊 Real-world case studies",
                    "🛠️ Practical templates and tools",
                    "🚀 Growth strategies that work",
                ]),
            },
            form(&[Email, Name], "Get My Free Copy"),
        ],
        Template::Consultation => vec![
            hero(
                format!("Book Your Free {}", title),
                "Schedule a 30-minute strategy session with our experts",
                "Book Now",
            ),
            ContentBlock::Benefits {
                items: items(&[
                    "🎯 Personalized strategy review",
                    "📈 Growth opportunity analysis",
                    "🛠️ Actionable recommendations",
                    "💼 No obligation, pure value",
                ]),
            },
            form(&[Email, Name, Phone, Company], "Schedule My Session"),
        ],
    };

    PageContent {
        blocks,
        settings: DisplaySettings::default(),
    }
}
