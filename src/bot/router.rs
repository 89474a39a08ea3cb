//! Maps button triggers and free text onto formatters.

use crate::content::ContentStore;

use super::keyboard::{Category, Screen, Trigger};
use super::pick::Pick;
use super::render;

/// A rendered reply: MarkdownV2 text plus the keyboard to attach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub screen: Screen,
}

impl Reply {
    fn detail(text: String) -> Self {
        Self { text, screen: Screen::Detail }
    }

    fn main_menu(text: String) -> Self {
        Self { text, screen: Screen::MainMenu }
    }
}

/// What a free-text message asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Show(Category),
    /// Both rosters at once.
    FullRoster,
    Fallback,
}

/// Checked in order; the first set with any hit wins.
const KEYWORDS: &[(Intent, &[&str])] = &[
    (Intent::Show(Category::Csgo), &["csgo", "cs2", "cs:go", "counter strike"]),
    (Intent::Show(Category::Valorant), &["valorant", "val"]),
    (Intent::FullRoster, &["jogador", "jogadores", "time", "elenc"]),
    (Intent::Show(Category::Schedule), &["próximo", "proximo", "jogo", "jogos", "calendário"]),
    (Intent::Show(Category::Results), &["resultado", "ultimo", "último", "partida", "partidas"]),
    (Intent::Show(Category::News), &["noticia", "notícia", "novidade"]),
    (Intent::Show(Category::Chant), &["grito", "gritar", "war cry", "vamo"]),
    (Intent::Show(Category::Social), &["instagram", "foto", "rede social"]),
    (Intent::Show(Category::Store), &["loja", "produtos", "comprar"]),
];

pub fn classify(text: &str) -> Intent {
    let text = text.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(_, words)| words.iter().any(|w| text.contains(w)))
        .map(|(intent, _)| *intent)
        .unwrap_or(Intent::Fallback)
}

pub fn reply_to_trigger<P: Pick>(trigger: Trigger, store: &ContentStore, pick: &mut P) -> Reply {
    match trigger {
        Trigger::MainMenu => Reply::main_menu(render::main_menu(store, pick)),
        Trigger::Show(category) => Reply::detail(render::category(store, category, pick)),
    }
}

/// Free-text replies always carry the back-to-menu keyboard.
pub fn reply_to_text<P: Pick>(text: &str, store: &ContentStore, pick: &mut P) -> Reply {
    let body = match classify(text) {
        Intent::Show(category) => render::category(store, category, pick),
        Intent::FullRoster => render::full_roster(store),
        Intent::Fallback => render::fallback(store, pick),
    };
    Reply::detail(body)
}

pub fn welcome<P: Pick>(store: &ContentStore, pick: &mut P) -> Reply {
    Reply::main_menu(render::welcome(store, pick))
}

pub fn help() -> Reply {
    Reply::main_menu(render::help())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::pick::FixedPick;
    use crate::content::Game;

    fn store() -> ContentStore {
        ContentStore::embedded().unwrap()
    }

    #[test]
    fn test_csgo_keywords() {
        for text in ["csgo", "Quero ver o CS2", "elenco de CS:GO", "COUNTER STRIKE"] {
            assert_eq!(classify(text), Intent::Show(Category::Csgo), "{text}");
        }
    }

    #[test]
    fn test_csgo_wins_over_later_sets() {
        // "time" and "resultado" also match, but csgo is checked first
        assert_eq!(classify("resultado do time de csgo"), Intent::Show(Category::Csgo));
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(classify("valorant"), Intent::Show(Category::Valorant));
        assert_eq!(classify("quem são os jogadores?"), Intent::FullRoster);
        assert_eq!(classify("próximo jogo"), Intent::Show(Category::Schedule));
        assert_eq!(classify("último resultado"), Intent::Show(Category::Results));
        assert_eq!(classify("alguma novidade?"), Intent::Show(Category::News));
        assert_eq!(classify("GRITO!"), Intent::Show(Category::Chant));
        assert_eq!(classify("manda uma foto"), Intent::Show(Category::Social));
        assert_eq!(classify("onde comprar camisa"), Intent::Show(Category::Store));
    }

    #[test]
    fn test_substring_matching_is_loose() {
        // "val" hides inside other words; first match wins regardless
        assert_eq!(classify("intervalo"), Intent::Show(Category::Valorant));
        // "jogo" is checked after "time"
        assert_eq!(classify("jogo do time"), Intent::FullRoster);
    }

    #[test]
    fn test_unmatched_text() {
        for text in ["", "oi", "🐆🐆🐆", "bom dia!", "こんにちは"] {
            assert_eq!(classify(text), Intent::Fallback, "{text:?}");
        }
    }

    #[test]
    fn test_text_reply_csgo_roster() {
        let store = store();
        let reply = reply_to_text("me fala do cs2", &store, &mut FixedPick(0));
        assert_eq!(reply.text, render::roster(&store, Game::Csgo));
        assert_eq!(reply.screen, Screen::Detail);
    }

    #[test]
    fn test_text_reply_fallback_from_pool() {
        let store = store();
        for i in 0..store.fallbacks().len() {
            let reply = reply_to_text("hmm", &store, &mut FixedPick(i));
            assert_eq!(reply.text, crate::markup::escape(&store.fallbacks()[i]));
            assert_eq!(reply.screen, Screen::Detail);
        }
    }

    #[test]
    fn test_full_roster_differs_from_single_game() {
        let store = store();
        let reply = reply_to_text("elenco", &store, &mut FixedPick(0));
        assert_eq!(reply.text, render::full_roster(&store));
    }

    #[test]
    fn test_main_menu_trigger() {
        let store = store();
        let reply = reply_to_trigger(Trigger::MainMenu, &store, &mut FixedPick(0));
        assert_eq!(reply.screen, Screen::MainMenu);
        assert!(reply.text.contains("O que vamos ver agora"));
    }

    #[test]
    fn test_category_triggers_show_detail() {
        let store = store();
        let reply = reply_to_trigger(Trigger::Show(Category::Results), &store, &mut FixedPick(0));
        assert_eq!(reply.screen, Screen::Detail);
        assert_eq!(reply.text, render::results(&store));
    }

    #[test]
    fn test_welcome_and_help_show_main_menu() {
        let store = store();
        assert_eq!(welcome(&store, &mut FixedPick(0)).screen, Screen::MainMenu);
        assert_eq!(help().screen, Screen::MainMenu);
    }
}
