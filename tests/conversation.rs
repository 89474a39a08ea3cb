//! End-to-end router checks through the public API.
//!
//! Run with: cargo test --test conversation

use furiabot::bot::router::{reply_to_text, reply_to_trigger, welcome};
use furiabot::bot::{Category, FixedPick, Screen, Trigger, keyboard};
use furiabot::content::{ContentStore, Game, Outcome};
use furiabot::markup::escape;

fn store() -> ContentStore {
    ContentStore::embedded().expect("embedded content")
}

#[test]
fn test_menu_detail_menu_walkthrough() {
    let store = store();
    let mut pick = FixedPick(0);

    let start = welcome(&store, &mut pick);
    assert_eq!(start.screen, Screen::MainMenu);

    let roster = reply_to_trigger(Trigger::Show(Category::Valorant), &store, &mut pick);
    assert_eq!(roster.screen, Screen::Detail);
    assert!(roster.text.contains("VALORANT \\- ELENCO DA FURIA"));

    let back = reply_to_trigger(Trigger::parse("menu_principal").unwrap(), &store, &mut pick);
    assert_eq!(back.screen, Screen::MainMenu);
    assert_eq!(
        keyboard::markup(back.screen).inline_keyboard.len(),
        keyboard::markup(Screen::MainMenu).inline_keyboard.len()
    );
}

#[test]
fn test_every_keyboard_button_produces_a_reply() {
    let store = store();
    let markup = keyboard::markup(Screen::Detail);
    for button in markup.inline_keyboard.iter().flatten() {
        let id = match &button.kind {
            teloxide::types::InlineKeyboardButtonKind::CallbackData(id) => id,
            other => panic!("unexpected button kind {other:?}"),
        };
        let trigger = Trigger::parse(id).unwrap_or_else(|| panic!("button {id} has no trigger"));
        let reply = reply_to_trigger(trigger, &store, &mut FixedPick(0));
        assert!(!reply.text.is_empty(), "{id}");
    }
}

#[test]
fn test_text_mentions_results() {
    let store = store();
    let reply = reply_to_text("Como foi a última partida?", &store, &mut FixedPick(0));
    assert_eq!(reply.screen, Screen::Detail);
    assert!(reply.text.contains("ÚLTIMOS RESULTADOS"));
    for game in Game::ALL {
        for result in store.results(game) {
            assert!(reply.text.contains(&escape(&result.opponent)));
        }
    }
}

#[test]
fn test_outcome_rules_differ_per_game() {
    assert_eq!(Game::Csgo.outcome("2-0"), Outcome::Win);
    assert_eq!(Game::Valorant.outcome("1-2"), Outcome::Win);
    assert_eq!(Game::Csgo.outcome("0-2"), Outcome::Loss);
    assert_eq!(Game::Csgo.outcome("1-2"), Outcome::Loss);
}

#[test]
fn test_odd_input_never_panics() {
    let store = store();
    let long = "a".repeat(10_000);
    for text in ["", "\u{0}", "🐆🔥💛🖤", "ÇÃO", long.as_str()] {
        let reply = reply_to_text(text, &store, &mut FixedPick(3));
        assert_eq!(reply.screen, Screen::Detail);
        assert!(!reply.text.is_empty());
    }
}
