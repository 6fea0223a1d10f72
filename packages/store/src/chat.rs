//! Rule-based chat assistant.

/// Ordered keyword rules; the first rule with any matching keyword answers.
const RULES: &[(&[&str], &str)] = &[
    (
        &["hello", "hi", "hey", "namaste"],
        "Hello! I can help with bookings, workshops, prices and payments.",
    ),
    (
        &["book", "appointment", "reserve"],
        "Pick a service from the Services page and press \"Book now\" to start a booking.",
    ),
    (
        &["price", "cost", "charge", "package"],
        "Our packages start at Silver (bridal makeup) and go up to Platinum (full wedding-day team). Prices are listed on each service.",
    ),
    (
        &["workshop", "class", "course", "learn"],
        "Upcoming bridal-skills workshops are on the Workshops page. Seats are limited.",
    ),
    (
        &["pay", "payment", "refund", "razorpay"],
        "Payments are taken securely through Razorpay after your booking is confirmed.",
    ),
    (
        &["contact", "call", "phone", "email"],
        "You can reach us from the Contact page and we will get back within a day.",
    ),
    (
        &["makeup", "try on", "filter"],
        "Try our virtual makeup studio: upload a photo and pick your shades.",
    ),
];

pub const FALLBACK: &str =
    "Sorry, I didn't catch that. Try asking about bookings, workshops, prices or payments.";

/// Reply to one message.
pub fn reply(message: &str) -> &'static str {
    let text = message.to_lowercase();
    let words: Vec<&str> = text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();
    RULES
        .iter()
        .find(|(keywords, _)| {
            keywords.iter().any(|k| {
                if k.contains(' ') {
                    text.contains(k)
                } else {
                    words.iter().any(|w| w.starts_with(k))
                }
            })
        })
        .map_or(FALLBACK, |(_, answer)| *answer)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub from: Speaker,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatLog {
    pub messages: Vec<ChatMessage>,
}

impl Default for ChatLog {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage {
                from: Speaker::Bot,
                text: "Hi! How can I help you plan your big day?".to_string(),
            }],
        }
    }
}

impl ChatLog {
    /// Append the user's message and the bot's answer. Blank input is ignored.
    pub fn send(&mut self, text: &str) -> Option<&'static str> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let answer = reply(text);
        self.messages.push(ChatMessage {
            from: Speaker::User,
            text: text.to_string(),
        });
        self.messages.push(ChatMessage {
            from: Speaker::Bot,
            text: answer.to_string(),
        });
        Some(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_rules_in_order() {
        assert!(reply("Hi there").starts_with("Hello"));
        assert!(reply("How much does the gold package cost?").starts_with("Our packages"));
        assert!(reply("Can I book for March?").starts_with("Pick a service"));
        assert!(reply("any workshops soon").starts_with("Upcoming"));
    }

    #[test]
    fn keywords_match_whole_word_prefixes() {
        // "this" contains "hi" but is not a greeting
        assert_eq!(reply("this is odd"), FALLBACK);
        assert!(reply("let me try on lipstick").starts_with("Try our virtual"));
    }

    #[test]
    fn log_records_both_sides() {
        let mut log = ChatLog::default();
        assert_eq!(log.send("   "), None);
        assert_eq!(log.messages.len(), 1);
        log.send("refund policy?");
        assert_eq!(log.messages.len(), 3);
        assert_eq!(log.messages[1].from, Speaker::User);
        assert!(log.messages[2].text.starts_with("Payments"));
    }
}
