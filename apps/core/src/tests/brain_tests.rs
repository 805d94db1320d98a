//! Brain Module Tests
//!
//! End-to-end tests of the classification pipeline: normalization, intent
//! detection, response selection. Mirrors the behavior the website's
//! Playwright suite asserted against the chat panel.

use crate::brain::{normalize, AssistantBrain, ContainerIntent, Intent, PoolIntent};

fn brain() -> AssistantBrain {
    AssistantBrain::new()
}

mod totality {
    use super::*;

    #[test]
    fn test_always_returns_a_nonempty_reply() {
        let brain = brain();
        let inputs = [
            "",
            "   ",
            "\t\n",
            "?!?!",
            "bonjour",
            "piscine",
            "xyz abc 123",
            "Lorem ipsum dolor sit amet",
            "données privées 🌊 çà et là",
        ];
        for input in inputs {
            assert!(
                !brain.classify(input).is_empty(),
                "Empty reply for {input:?}"
            );
        }
    }

    #[test]
    fn test_classification_is_deterministic() {
        let brain = brain();
        for input in ["bonjour", "piscine coque", "xyz", ""] {
            assert_eq!(brain.classify(input), brain.classify(input));
        }
    }

    #[test]
    fn test_two_brains_agree() {
        // No hidden state: independent instances classify identically.
        let a = brain();
        let b = brain();
        assert_eq!(a.classify("prix piscine coque"), b.classify("prix piscine coque"));
    }
}

mod empty_input {
    use super::*;

    #[test]
    fn test_empty_and_blank_get_the_rephrase_reply() {
        let brain = brain();
        let empty = brain.classify("");
        assert!(empty.contains("reformuler"));
        assert_eq!(brain.classify("   "), empty);
        assert_eq!(brain.classify(" ?! , "), empty);
    }

    #[test]
    fn test_blank_input_skips_topic_detection() {
        let brain = brain();
        assert_eq!(brain.analyze("   ").intent, Intent::Empty);
    }
}

mod cross_cutting {
    use super::*;

    #[test]
    fn test_greeting_mentions_the_three_service_families() {
        let reply = brain().classify("bonjour");
        assert!(reply.contains("Bonjour"));
        assert!(reply.contains("piscines"));
        assert!(reply.contains("aménagements"));
        assert!(reply.contains("containers"));
    }

    #[test]
    fn test_thanks_variants_get_the_same_reply() {
        let brain = brain();
        let reply = brain.classify("merci");
        assert_eq!(brain.classify("merci beaucoup"), reply);
        assert!(reply.contains("plaisir"));
    }

    #[test]
    fn test_contact_reply_points_to_the_form() {
        let reply = brain().classify("Je voudrais un rdv");
        assert!(reply.contains("échange personnalisé"));
        assert!(reply.contains("formulaire de contact"));
        assert!(reply.contains("numéro"));
    }

    #[test]
    fn test_lead_time_reply_covers_the_typologies() {
        let reply = brain().classify("Quels sont les délais ?");
        assert!(reply.contains("délais"));
        assert!(reply.contains("piscine coque"));
        assert!(reply.contains("piscine maçonnée"));
        assert!(reply.contains("planning"));
    }

    #[test]
    fn test_zone_reply_names_the_service_area() {
        let reply = brain().classify("Dans quelle zone intervenez-vous ?");
        assert!(reply.contains("Strasbourg"));
        assert!(reply.contains("Bas-Rhin"));
        assert!(reply.contains("Grand Est"));
    }

    #[test]
    fn test_guarantee_reply() {
        let reply = brain().classify("Quelles garanties ?");
        assert!(reply.contains("garantie décennale"));
        assert!(reply.contains("assurance"));
        assert!(reply.contains("responsabilité civile"));
    }

    #[test]
    fn test_process_reply_lists_the_steps() {
        let reply = brain().classify("Comment ça se passe, les étapes ?");
        assert!(reply.contains("étapes"));
        assert!(reply.contains("Échange et visite"));
        assert!(reply.contains("conception"));
        assert!(reply.contains("Terrassement"));
    }

    #[test]
    fn test_company_reply() {
        let reply = brain().classify("Qui êtes-vous ?");
        assert!(reply.contains("Éclat de Jardin"));
        assert!(reply.contains("Schiltigheim"));
        assert!(reply.contains("15 ans"));
        assert!(reply.contains("technicité"));
    }

    #[test]
    fn test_cross_cutting_beats_topics() {
        let brain = brain();
        // Lead-time is resolved before the pool topic.
        assert_eq!(
            brain.analyze("délai pour une piscine coque").intent,
            Intent::LeadTime
        );
    }
}

mod accents_and_case {
    use super::*;

    #[test]
    fn test_accent_and_case_invariance() {
        let brain = brain();
        let reply = brain.classify("Piscine maçonnée en béton");
        assert_eq!(brain.classify("PISCINE MACONNEE EN BETON"), reply);
        assert_eq!(brain.classify("piscine maconnee en beton"), reply);
        assert!(reply.contains("béton armé"));
        assert!(reply.contains("flexible"));
        assert!(reply.contains("sur mesure"));
        assert!(reply.contains("débordement"));
    }

    #[test]
    fn test_punctuation_heavy_input() {
        let reply = brain().classify("!!! piscine ... coque ???");
        assert!(reply.contains("coques polyester"));
    }

    #[test]
    fn test_normalize_matches_the_pipeline() {
        let brain = brain();
        assert_eq!(
            brain.classify("Clôture, portail !"),
            brain.classify(&normalize("Clôture, portail !"))
        );
    }
}

mod topics {
    use super::*;

    #[test]
    fn test_pool_wins_over_outdoor() {
        let brain = brain();
        let reply = brain.analyze("piscine et terrasse");
        assert_eq!(reply.intent, Intent::Pool(PoolIntent::General));
        assert!(reply.text.contains("piscines"));
        assert!(reply.text.contains("coques"));
        assert!(!reply.text.contains("terrasses premium"));
    }

    #[test]
    fn test_pool_container_resolves_inside_the_pool_topic() {
        let brain = brain();
        let reply = brain.analyze("piscine en container");
        assert_eq!(reply.intent, Intent::Pool(PoolIntent::Container));
        assert!(reply.text.contains("containers"));
        assert!(reply.text.contains("structure métallique"));
        // Distinct from the standalone container branch.
        assert_ne!(reply.text, brain.classify("container architectural"));
    }

    #[test]
    fn test_pool_price() {
        let reply = brain().classify("Quel est le prix d'une piscine ?");
        assert!(reply.contains("budget"));
        assert!(reply.contains("paramètres"));
        assert!(reply.contains("coque polyester"));
        assert!(reply.contains("maçonnée en béton"));
        assert!(reply.contains("étude personnalisée"));
    }

    #[test]
    fn test_pool_shell() {
        let reply = brain().classify("Info sur piscine coque");
        assert!(reply.contains("coques polyester"));
        assert!(reply.contains("fabricants reconnus"));
        assert!(reply.contains("terrassement"));
        assert!(reply.contains("filtration"));
    }

    #[test]
    fn test_pool_filtration() {
        let reply = brain().classify("Quelle filtration pour ma piscine ?");
        assert!(reply.contains("filtration"));
        assert!(reply.contains("pompes à vitesse variable"));
        assert!(reply.contains("électrolyseur au sel"));
    }

    #[test]
    fn test_outdoor_deck() {
        let reply = brain().classify("Je veux une terrasse");
        assert!(reply.contains("terrasses premium"));
        assert!(reply.contains("bois exotique"));
        assert!(reply.contains("composite"));
        assert!(reply.contains("pierre naturelle"));
    }

    #[test]
    fn test_outdoor_fence() {
        let reply = brain().classify("Amenagement cloture et portail");
        assert!(reply.contains("clôtures"));
        assert!(reply.contains("brise-vues"));
        assert!(reply.contains("aluminium"));
        assert!(reply.contains("portails motorisés"));
    }

    #[test]
    fn test_outdoor_rockwork() {
        let reply = brain().classify("Amenagement enrochement de talus");
        assert!(reply.contains("enrochement"));
        assert!(reply.contains("talus"));
        assert!(reply.contains("stabilité"));
        assert!(reply.contains("drainages"));
    }

    #[test]
    fn test_standalone_container_office() {
        let brain = brain();
        let reply = brain.analyze("container bureau atelier");
        assert_eq!(reply.intent, Intent::Container(ContainerIntent::Office));
        assert!(reply.text.contains("bureaux"));
        assert!(reply.text.contains("ateliers"));
        assert!(reply.text.contains("studios"));
        assert!(reply.text.contains("isolation performante"));
    }

    #[test]
    fn test_container_pool_house() {
        let reply = brain().classify("Pool house en container");
        assert!(reply.contains("pool houses containers"));
        assert!(reply.contains("douche"));
        assert!(reply.contains("rangement"));
        assert!(reply.contains("isolation"));
    }

    #[test]
    fn test_multi_keyword_query_resolves_by_priority() {
        // Pool topic first, then the masonry sub-rule.
        let reply = brain().classify("Je cherche une piscine maçonnée avec terrasse en bois et pool house");
        assert!(reply.contains("béton armé"));
        assert!(reply.contains("flexible"));
        assert!(reply.contains("sur mesure"));
    }
}

mod fallback {
    use super::*;

    #[test]
    fn test_unrecognized_input_gets_the_generic_fallback() {
        let brain = brain();
        let reply = brain.analyze("xyz abc 123");
        assert_eq!(reply.intent, Intent::Fallback);
        assert!(reply.text.contains("assistant Éclat de Jardin"));
        assert!(reply.text.contains("piscines"));
        assert!(reply.text.contains("aménagements"));
        assert!(reply.text.contains("containers"));
    }

    #[test]
    fn test_vague_project_request_lists_the_categories() {
        let reply = brain().classify("je veux un projet");
        assert!(reply.contains("piscine"));
        assert!(reply.contains("aménagement"));
        assert!(reply.contains("container"));
    }

    #[test]
    fn test_single_character_message() {
        let reply = brain().classify("x");
        assert!(reply.contains("assistant Éclat de Jardin"));
        assert!(reply.contains("piscines"));
    }
}
