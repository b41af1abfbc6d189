//! Fixed reply texts. Placeholders are filled from the agent configuration
//! and, for the expertise and fallback replies, from the user's message.

use crate::config_manager::AgentConfig;

pub fn greetings(config: &AgentConfig) -> [String; 3] {
    [
        format!("Bonjour! Je suis {}, ravi de vous aider!", config.name),
        "Salut! Comment puis-je vous assister aujourd'hui?".to_string(),
        format!("Hello! {} à votre service!", config.name),
    ]
}

pub fn introduction(config: &AgentConfig) -> String {
    format!(
        "Je m'appelle {}. Je suis un agent IA spécialisé en {} avec une personnalité {}. Comment puis-je vous aider?",
        config.name, config.expertise, config.personality
    )
}

pub fn capabilities(config: &AgentConfig) -> String {
    format!(
        "En tant qu'agent IA spécialisé en {}, je peux:

• Répondre à vos questions dans mon domaine d'expertise
• Vous aider à résoudre des problèmes
• Fournir des conseils et des recommandations
• Avoir une conversation naturelle avec vous
• M'adapter à votre style de communication

Ma personnalité est {}, ce qui influence mon style de réponse. N'hésitez pas à me poser n'importe quelle question!",
        config.expertise, config.personality
    )
}

pub fn personality(config: &AgentConfig) -> String {
    format!(
        "Ma personnalité est {personality}. Cela signifie que j'adapte mon ton et mon approche pour être {personality} dans nos échanges. Mon expertise en {expertise} me permet de vous offrir des réponses pertinentes et utiles.",
        personality = config.personality,
        expertise = config.expertise
    )
}

pub const FAREWELLS: [&str; 3] = [
    "Au revoir! N'hésitez pas à revenir si vous avez besoin d'aide!",
    "À bientôt! C'était un plaisir de discuter avec vous.",
    "Bonne journée! Je serai là si vous avez besoin.",
];

pub const THANK_YOU: &str =
    "Je vous en prie! C'est toujours un plaisir de vous aider. N'hésitez pas si vous avez d'autres questions!";

fn programming(input: &str) -> String {
    format!(
        "En tant qu'expert en programmation, je peux vous aider avec \"{}\". Voici mon conseil:

Cette question touche à un aspect important du développement. Je recommande d'aborder ce problème de manière structurée en commençant par bien définir vos besoins, puis en choisissant les bonnes technologies et enfin en implémentant une solution robuste et maintenable.

Souhaitez-vous plus de détails sur un aspect particulier?",
        input
    )
}

fn marketing(input: &str) -> String {
    format!(
        "Excellente question sur le marketing! Pour \"{}\", voici mon analyse:

Dans le contexte marketing actuel, il est essentiel de comprendre votre audience cible, de créer du contenu engageant et de mesurer vos résultats. Je suggère une approche data-driven combinée avec une touche créative pour maximiser votre impact.

Voulez-vous que nous explorions une stratégie spécifique?",
        input
    )
}

fn cooking(input: &str) -> String {
    format!(
        "Ah, une question culinaire! Concernant \"{}\", laissez-moi partager mon expertise:

La cuisine est un art qui combine technique et créativité. Pour réussir, il faut de bons ingrédients, une bonne maîtrise des techniques de base et un sens du timing. Je peux vous guider à travers les étapes nécessaires pour obtenir un résultat délicieux.

Avez-vous besoin d'une recette détaillée ou de conseils spécifiques?",
        input
    )
}

/// Expertise keywords, searched in this order. The first keyword contained
/// in the lowercased expertise selects the template.
pub static EXPERTISE_TEMPLATES: &[(&str, fn(&str) -> String)] = &[
    ("programmation", programming),
    ("marketing", marketing),
    ("cuisine", cooking),
];

/// Render the domain template for `expertise`, if any keyword matches.
pub fn expertise_reply(expertise: &str, input: &str) -> Option<String> {
    let expertise = expertise.to_lowercase();
    EXPERTISE_TEMPLATES
        .iter()
        .find(|(keyword, _)| expertise.contains(*keyword))
        .map(|(_, render)| render(input))
}

/// Single adjective describing the reply tone.
pub fn personality_adjective(personality: &str) -> &'static str {
    if personality == "professionnel et amical" {
        "professionnel"
    } else if personality.contains("humour") {
        "amusant"
    } else {
        "utile"
    }
}

pub fn generic(input: &str, config: &AgentConfig) -> String {
    format!(
        "Merci pour votre question: \"{input}\"

En tant qu'assistant IA avec une expertise en {expertise}, je suis là pour vous aider de manière {adjective}.

Voici ce que je peux vous dire: Cette question est intéressante et mérite une réponse réfléchie. En me basant sur mon expertise en {expertise}, je vous recommande d'aborder ce sujet en plusieurs étapes:

1. **Analyse**: Comprendre tous les aspects du problème
2. **Planification**: Définir une stratégie claire
3. **Action**: Mettre en œuvre la solution
4. **Évaluation**: Mesurer les résultats

N'hésitez pas à me donner plus de détails pour que je puisse vous fournir une réponse plus précise et adaptée à votre situation!",
        input = input,
        expertise = config.expertise,
        adjective = personality_adjective(&config.personality)
    )
}
