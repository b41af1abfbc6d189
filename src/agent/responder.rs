use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::agent::classifier::{Intent, MessageContext};
use crate::agent::input_types::ChatHistory;
use crate::agent::templates;
use crate::config_manager::AgentConfig;

/// Build the agent's reply to the latest message of `history`.
///
/// Only `history.latest()` is classified, whatever its role; earlier turns
/// never affect the result. `rng` is consulted only for greetings and
/// farewells. `config.temperature` is not read.
pub fn generate_response<R: Rng>(
    history: &ChatHistory,
    config: &AgentConfig,
    rng: &mut R,
) -> String {
    let input = history.latest().content.as_str();
    let intent = MessageContext::analyze(input).intent();
    debug!(?intent, agent = %config.name, "Classified latest message");

    match intent {
        Intent::Greeting => templates::greetings(config)
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| templates::introduction(config)),
        Intent::AskingName => templates::introduction(config),
        Intent::AskingCapabilities => templates::capabilities(config),
        Intent::AskingPersonality => templates::personality(config),
        Intent::Farewell => templates::FAREWELLS
            .choose(rng)
            .unwrap_or(&templates::FAREWELLS[0])
            .to_string(),
        Intent::ThankYou => templates::THANK_YOU.to_string(),
        Intent::Other => templates::expertise_reply(&config.expertise, input)
            .unwrap_or_else(|| templates::generic(input, config)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::input_types::{ChatMessage, Role};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn history(messages: Vec<ChatMessage>) -> ChatHistory {
        ChatHistory::try_from(messages).unwrap()
    }

    fn single(content: &str) -> ChatHistory {
        history(vec![ChatMessage::user(content)])
    }

    fn agent(name: &str, personality: &str, expertise: &str) -> AgentConfig {
        AgentConfig {
            name: name.to_string(),
            personality: personality.to_string(),
            expertise: expertise.to_string(),
            temperature: 0.7,
        }
    }

    #[test]
    fn greeting_is_one_of_three_with_name() {
        let config = agent("Nova", "calme", "astronomie");
        let expected = templates::greetings(&config);
        let mut seen = [false; 3];
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let reply = generate_response(&single("Bonjour!"), &config, &mut rng);
            let idx = expected
                .iter()
                .position(|g| *g == reply)
                .unwrap_or_else(|| panic!("unexpected greeting: {reply}"));
            seen[idx] = true;
        }
        assert_eq!(seen, [true; 3]);
        assert!(expected[0].contains("Nova") && expected[2].contains("Nova"));
    }

    #[test]
    fn farewell_is_one_of_three() {
        let config = AgentConfig::default();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let reply = generate_response(&single("Au revoir"), &config, &mut rng);
            assert!(templates::FAREWELLS.contains(&reply.as_str()), "{reply}");
        }
    }

    #[test]
    fn name_question_echoes_configuration() {
        let config = agent("Max", "sérieux et précis", "Expert en finance");
        let reply = generate_response(
            &single("Comment tu t'appelles?"),
            &config,
            &mut StdRng::seed_from_u64(0),
        );
        assert!(reply.contains("Max"));
        assert!(reply.contains("Expert en finance"));
        assert!(reply.contains("sérieux et précis"));
    }

    #[test]
    fn programming_expertise_keeps_original_case() {
        let config = agent("Dev", "direct", "Expert en programmation");
        let reply = generate_response(
            &single("Comment Structurer mon API REST"),
            &config,
            &mut StdRng::seed_from_u64(0),
        );
        assert_eq!(
            reply,
            templates::expertise_reply("programmation", "Comment Structurer mon API REST").unwrap()
        );
        assert!(reply.contains("\"Comment Structurer mon API REST\""));
    }

    #[test]
    fn humour_personality_uses_amusant() {
        let config = agent("Joker", "amical avec humour", "assistance générale");
        let reply = generate_response(
            &single("Parle-moi des volcans"),
            &config,
            &mut StdRng::seed_from_u64(0),
        );
        assert!(reply.contains("de manière amusant."));
        assert!(reply.starts_with("Merci pour votre question: \"Parle-moi des volcans\""));
    }

    #[test]
    fn thank_you_is_fixed_text() {
        let reply = generate_response(
            &single("Merci pour tout"),
            &AgentConfig::default(),
            &mut StdRng::seed_from_u64(0),
        );
        assert_eq!(reply, templates::THANK_YOU);
    }

    #[test]
    fn earlier_turns_do_not_change_reply() {
        let config = agent("Chef", "chaleureux", "Chef en cuisine");
        let latest = "Quelle est ta personnalité";
        let alone = generate_response(&single(latest), &config, &mut StdRng::seed_from_u64(3));
        let with_prefix = generate_response(
            &history(vec![
                ChatMessage::user("Bonjour"),
                ChatMessage::assistant("Salut! Comment puis-je vous assister aujourd'hui?"),
                ChatMessage::new(Role::System, "Erreur de connexion. Veuillez réessayer."),
                ChatMessage::user(latest),
            ]),
            &config,
            &mut StdRng::seed_from_u64(3),
        );
        assert_eq!(alone, with_prefix);
    }

    #[test]
    fn same_seed_same_greeting_regardless_of_history() {
        let config = AgentConfig::default();
        let a = generate_response(&single("hey"), &config, &mut StdRng::seed_from_u64(42));
        let b = generate_response(
            &history(vec![ChatMessage::user("merci"), ChatMessage::user("hey")]),
            &config,
            &mut StdRng::seed_from_u64(42),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn assistant_tail_is_classified_as_is() {
        // A user greeting followed by an assistant reply: the reply is the
        // latest message, so the greeting earlier in history is ignored.
        let config = agent("Echo", "neutre", "assistance générale");
        let reply = generate_response(
            &history(vec![
                ChatMessage::user("Bonjour"),
                ChatMessage::assistant("Je vous en prie!"),
            ]),
            &config,
            &mut StdRng::seed_from_u64(0),
        );
        assert_eq!(reply, templates::generic("Je vous en prie!", &config));
    }

    #[test]
    fn temperature_has_no_effect() {
        let mut cold = agent("T", "amical avec humour", "Expert en marketing");
        cold.temperature = 0.0;
        let mut hot = cold.clone();
        hot.temperature = 1.0;

        let msg = single("Comment lancer un produit");
        assert_eq!(
            generate_response(&msg, &cold, &mut StdRng::seed_from_u64(1)),
            generate_response(&msg, &hot, &mut StdRng::seed_from_u64(1)),
        );
    }
}
