use once_cell::sync::Lazy;
use regex::Regex;

static GREETING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(salut|bonjour|hello|hi|hey|coucou)").unwrap());
static FAREWELL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(au revoir|bye|à bientôt|adieu)").unwrap());
static THANK_YOU: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(merci|thanks|merci beaucoup)").unwrap());
static ASKING_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(comment tu t'appelles|quel est ton nom|qui es-tu)").unwrap()
});
static ASKING_CAPABILITIES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(que peux-tu faire|tes capacités|aide|help)").unwrap());
static ASKING_PERSONALITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(personnalité|comment tu es)").unwrap());

/// What the latest message is asking for, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    AskingName,
    AskingCapabilities,
    AskingPersonality,
    Farewell,
    ThankYou,
    /// Nothing matched; the reply is chosen from the agent's expertise.
    Other,
}

/// Flags computed once from the latest message
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessageContext {
    pub is_greeting: bool,
    pub is_question: bool,
    pub is_farewell: bool,
    pub is_thank_you: bool,
    pub asking_name: bool,
    pub asking_capabilities: bool,
    pub asking_personality: bool,
}

impl MessageContext {
    pub fn analyze(content: &str) -> Self {
        let input = content.to_lowercase();
        Self {
            is_greeting: GREETING.is_match(&input),
            is_question: input.contains('?'),
            is_farewell: FAREWELL.is_match(&input),
            is_thank_you: THANK_YOU.is_match(&input),
            asking_name: ASKING_NAME.is_match(&input),
            asking_capabilities: ASKING_CAPABILITIES.is_match(&input),
            asking_personality: ASKING_PERSONALITY.is_match(&input),
        }
    }

    /// First matching flag wins. `is_question` never selects a reply.
    pub fn intent(&self) -> Intent {
        if self.is_greeting {
            Intent::Greeting
        } else if self.asking_name {
            Intent::AskingName
        } else if self.asking_capabilities {
            Intent::AskingCapabilities
        } else if self.asking_personality {
            Intent::AskingPersonality
        } else if self.is_farewell {
            Intent::Farewell
        } else if self.is_thank_you {
            Intent::ThankYou
        } else {
            Intent::Other
        }
    }
}
